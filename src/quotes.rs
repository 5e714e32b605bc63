use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

/// A quote shown under the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\n- {}", self.text, self.author)
    }
}

const fn quote(text: &'static str, author: &'static str) -> Quote {
    Quote { text, author }
}

pub const QUOTES: [Quote; 13] = [
    quote(
        "Real knowledge is to know the extent of one's ignorance.",
        "Confucius",
    ),
    quote(
        "There are only two kinds of people who are really fascinating; people who know \
         absolutely everything, and people who know absolutely nothing.",
        "Oscar Wilde",
    ),
    quote("All men by nature desire to know.", "Aristotle"),
    quote(
        "If knowledge can create problems, it is not through ignorance that we can solve them.",
        "Isaac Asimov",
    ),
    quote(
        "Ignorance is the curse of God; knowledge is the wing wherewith we fly to heaven.",
        "William Shakespeare",
    ),
    quote(
        "Imagination is more important than knowledge, for knowledge is limited while \
         imagination embraces the entire world.",
        "Albert Einstein",
    ),
    quote(
        "The more extensive a man's knowledge of what has been done, the greater will be his \
         power of knowing what to do.",
        "Benjamin Disraeli",
    ),
    quote(
        "If a little knowledge is dangerous, where is a man who has so much as to be out of danger?",
        "Thomas Henry Huxley",
    ),
    quote(
        "Integrity without knowledge is weak and useless, and knowledge without integrity is \
         dangerous and dreadful.",
        "Samuel Johnson",
    ),
    quote(
        "Knowing is not enough; we must apply. Willing is not enough; we must do.",
        "Johann Wolfgang von Goethe",
    ),
    quote("Knowledge is knowing that we cannot know.", "Ralph Waldo Emerson"),
    quote(
        "One's mind, once stretched by a new idea, never regains its original dimensions.",
        "Oliver Wendell Holmes",
    ),
    quote(
        "The greater our knowledge increases the more our ignorance unfolds.",
        "John F. Kennedy",
    ),
];

pub fn random_quote<R: Rng>(rng: &mut R) -> Quote {
    *QUOTES.choose(rng).unwrap_or(&QUOTES[0])
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_random_quote_comes_from_list() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let picked = random_quote(&mut rng);
            assert!(QUOTES.contains(&picked));
        }
    }

    #[test]
    fn test_quote_format() {
        let formatted = QUOTES[2].to_string();
        assert_eq!(formatted, "All men by nature desire to know.\n\n- Aristotle");
    }
}
