use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;

use super::render_controls;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let round = app.round();
    let code = round.response_code();
    let detail = round.failure().and_then(|f| f.detail.as_deref());

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(12),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let mut content = vec![
        Line::from(Span::styled(
            "SOMETHING WENT WRONG",
            Style::default().fg(Color::Red).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            code.to_string(),
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            code.troubleshooting_tip(),
            Style::default().fg(Color::Gray),
        )),
    ];
    if let Some(detail) = detail {
        content.push(Line::from(""));
        content.push(Line::from(Span::styled(
            detail,
            Style::default().fg(Color::DarkGray),
        )));
    }

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .padding(Padding::uniform(1)),
        );
    frame.render_widget(widget, chunks[1]);

    render_controls(frame, chunks[3], "m main menu  ·  q quit");
}
