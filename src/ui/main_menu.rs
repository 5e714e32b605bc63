use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::app::{App, MenuItem, MenuView, OptionRow};

use super::{TITLE, render_controls};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    match app.menu_view() {
        MenuView::Home => render_home(frame, area, app),
        MenuView::Options => render_options(frame, area, app),
        MenuView::Categories => render_categories(frame, area, app),
    }
}

fn render_home(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(6),
        Constraint::Length(5),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default().fg(Color::Cyan).bold(),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().padding(Padding::top(1)));
    frame.render_widget(title, chunks[0]);

    let summary: Vec<Line> = app
        .settings()
        .summary()
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{}: ", label), Style::default().fg(Color::Gray).bold()),
                Span::styled(value, Style::default().fg(Color::White)),
            ])
        })
        .collect();
    let widget = Paragraph::new(summary).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);

    let items: Vec<Line> = MenuItem::ALL
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let is_selected = index == app.menu_cursor();
            let style = if is_selected {
                Style::default().fg(Color::Green).bold()
            } else {
                Style::default().fg(Color::Gray)
            };
            let marker = if is_selected { "> " } else { "  " };
            Line::from(Span::styled(format!("{}{}", marker, item.label()), style))
        })
        .collect();
    let widget = Paragraph::new(items)
        .alignment(Alignment::Center)
        .block(Block::default().padding(Padding::top(1)));
    frame.render_widget(widget, chunks[2]);

    let quote = Paragraph::new(app.quote().to_string())
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .fg(Color::DarkGray)
        .italic()
        .block(Block::default().padding(Padding::horizontal(4)));
    frame.render_widget(quote, chunks[3]);

    render_controls(frame, chunks[4], "j/k navigate  ·  enter select  ·  q quit");
}

fn render_options(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    let title = Paragraph::new("OPTIONS")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).bold());
    frame.render_widget(title, chunks[0]);

    let settings = app.settings().settings();
    let mut lines: Vec<Line> = Vec::with_capacity(OptionRow::ALL.len() * 2);
    for (index, row) in OptionRow::ALL.iter().enumerate() {
        let is_selected = index == app.option_cursor();
        let style = if is_selected {
            Style::default().fg(Color::Yellow).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let value = match row {
            OptionRow::NumQuestions => format!("- {} +", settings.num_questions),
            OptionRow::TimePerQuestion => match settings.time_limit() {
                Some(seconds) => format!("< {} >", seconds),
                None => "< \u{221E} >".to_string(),
            },
            OptionRow::Difficulty => format!("< {} >", settings.difficulty),
            OptionRow::QuestionType => format!("< {} >", settings.question_type),
            OptionRow::Category => format!("{} ...", settings.category.name),
            OptionRow::Back => String::new(),
        };
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} {:<22}", marker, row.label()), style),
            Span::styled(value, Style::default().fg(Color::White)),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::uniform(1)),
    );
    frame.render_widget(widget, chunks[1]);

    render_controls(
        frame,
        chunks[2],
        "j/k navigate  ·  h/l change  ·  enter open  ·  esc back",
    );
}

fn render_categories(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)])
        .margin(1)
        .split(area);

    let selected_id = app.settings().settings().category.id;
    let items: Vec<ListItem> = app
        .settings()
        .categories()
        .iter()
        .map(|category| {
            let (marker, style) = if category.id == selected_id {
                ("(*) ", Style::default().fg(Color::Green).bold())
            } else {
                ("( ) ", Style::default().fg(Color::Gray))
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(category.name.as_str(), style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Categories ")
                .title_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.category_cursor()));
    frame.render_stateful_widget(list, chunks[0], &mut state);

    render_controls(frame, chunks[1], "j/k navigate  ·  enter select  ·  esc back");
}
