mod error;
mod game_over;
mod main_menu;
mod paused;
mod quiz;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::App;
use crate::game::Screen;

pub const TITLE: &str = "TRIVIA QUIZ";

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.game().active_screen() {
        Screen::MainMenu => main_menu::render(frame, area, app),
        Screen::Question => quiz::render(frame, area, app),
        Screen::Paused => paused::render(frame, area),
        Screen::GameOver => game_over::render(frame, area, app),
        Screen::Error => error::render(frame, area, app),
    }
}

/// Centered box of `height` rows used by the small screens.
fn centered(area: Rect, height: u16) -> Rect {
    Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .split(area)[1]
}

fn render_controls(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
