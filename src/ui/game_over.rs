use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::app::App;

use super::render_controls;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let (score, total) = app.final_score();
    let percentage = calculate_percentage(score, total);
    let grade_color = get_grade_color(percentage);

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(6),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], score, total, percentage, grade_color);

    let gauge = Gauge::default()
        .block(Block::default().padding(Padding::horizontal(8)))
        .gauge_style(Style::default().fg(grade_color).bg(Color::Black))
        .ratio((percentage / 100.0).clamp(0.0, 1.0))
        .label("");
    frame.render_widget(gauge, chunks[2]);

    render_controls(frame, chunks[4], "r restart  ·  m main menu  ·  q quit");
}

fn calculate_percentage(score: u32, total: u32) -> f64 {
    if total > 0 {
        (score as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

fn get_grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(
    frame: &mut Frame,
    area: Rect,
    score: u32,
    total: u32,
    percentage: f64,
    grade_color: Color,
) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{}/{}  ({:.0}%)", score, total, percentage),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_and_grade() {
        assert_eq!(calculate_percentage(0, 0), 0.0);
        assert_eq!(calculate_percentage(5, 10), 50.0);
        assert_eq!(get_grade_color(calculate_percentage(10, 10)), Color::Green);
        assert_eq!(get_grade_color(calculate_percentage(7, 10)), Color::Cyan);
        assert_eq!(get_grade_color(calculate_percentage(1, 10)), Color::Red);
    }
}
