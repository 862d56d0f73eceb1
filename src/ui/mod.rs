mod catalog;
mod celebration;
mod quiz;

use ratatui::{prelude::*, widgets::Block};

use crate::app::{App, Screen};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.screen {
        Screen::Catalog => catalog::render(frame, area, app),
        Screen::Detail(index) => catalog::render_detail(frame, area, app, index),
        Screen::Quiz => {
            if let Some((definition, session)) = app.active_quiz() {
                quiz::render(frame, area, definition, session);
                celebration::render(frame, area, session.presenter().celebration());
            }
        }
    }
}

#[cfg(test)]
pub(crate) fn buffer_text(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
