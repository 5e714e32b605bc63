use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::round::{AnswerChoice, Highlight, RoundController, TransitionKind};

use super::render_controls;

const OPTION_LABELS: [char; 9] = ['1', '2', '3', '4', '5', '6', '7', '8', '9'];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let round = app.round();

    let Some(question) = round.current_question() else {
        let waiting = Paragraph::new("Fetching questions...")
            .alignment(Alignment::Center)
            .fg(Color::Yellow);
        frame.render_widget(waiting, super::centered(area, 1));
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(7),
        Constraint::Min(6),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(
        frame,
        chunks[0],
        &format!("{} \u{2022} {}", question.category, question.difficulty),
        round.current_index() + 1,
        round.total_questions(),
    );
    render_timer(frame, chunks[1], round);

    let question_area = slide(chunks[2], round);
    let options_area = slide(chunks[3], round);
    render_question_text(frame, question_area, &question.question);
    render_options(frame, options_area, round.choices(), round.selected(), round.accepts_input());

    render_controls(
        frame,
        chunks[4],
        "j/k navigate  ·  enter/1-9 answer  ·  p pause  ·  q quit",
    );
}

/// Shifts the question body sideways while a transition runs.
fn slide(area: Rect, round: &RoundController) -> Rect {
    let Some((kind, progress)) = round.transition_progress() else {
        return area;
    };
    let offset_share = match kind {
        TransitionKind::Exit => progress,
        TransitionKind::Enter => 1.0 - progress,
    };
    let offset = (area.width as f32 * offset_share) as u16;
    Rect {
        x: area.x + offset,
        width: area.width.saturating_sub(offset),
        ..area
    }
}

fn render_header(frame: &mut Frame, area: Rect, label: &str, current: usize, total: usize) {
    let chunks = Layout::horizontal([Constraint::Fill(1), Constraint::Length(9)]).split(area);

    let widget = Paragraph::new(label).fg(Color::Cyan).bold();
    frame.render_widget(widget, chunks[0]);

    let progress = Paragraph::new(format!("{} / {}", current, total))
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(progress, chunks[1]);
}

fn render_timer(frame: &mut Frame, area: Rect, round: &RoundController) {
    let (Some(fraction), Some(remaining)) = (round.time_fraction(), round.time_remaining()) else {
        let widget = Paragraph::new("Unlimited time")
            .alignment(Alignment::Right)
            .fg(Color::DarkGray);
        frame.render_widget(widget, area);
        return;
    };

    let color = match fraction {
        f if f > 0.5 => Color::Green,
        f if f > 0.2 => Color::Yellow,
        _ => Color::Red,
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .ratio(fraction as f64)
        .label(format!("{:.0}s", remaining.ceil()));
    frame.render_widget(gauge, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White).bold())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::uniform(1)),
        );
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    choices: &[AnswerChoice],
    selected: usize,
    accepts_input: bool,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(choices.len() * 2);

    for (index, choice) in choices.iter().enumerate() {
        let is_selected = accepts_input && index == selected;
        let style = match choice.highlight {
            Highlight::Correct => Style::default().fg(Color::Green).bold(),
            Highlight::Incorrect => Style::default().fg(Color::Red).bold(),
            Highlight::Normal if is_selected => Style::default().fg(Color::Yellow).bold(),
            Highlight::Normal if accepts_input => Style::default().fg(Color::White),
            Highlight::Normal => Style::default().fg(Color::DarkGray),
        };
        let marker = match choice.highlight {
            Highlight::Correct => "+",
            Highlight::Incorrect => "x",
            Highlight::Normal if is_selected => ">",
            Highlight::Normal => " ",
        };
        let label = OPTION_LABELS.get(index).copied().unwrap_or(' ');

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}) ", label), style),
            Span::styled(choice.text.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Answers ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}
