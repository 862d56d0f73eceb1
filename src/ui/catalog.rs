//! Lesson steps and patterns, drawn as cards from the catalog data.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{CatalogEntry, Difficulty, Section};

const CARD_HEIGHT: u16 = 6;
const HEADER_HEIGHT: u16 = 2;

enum Row {
    Header(Section),
    Card(usize),
}

impl Row {
    fn height(&self) -> u16 {
        match self {
            Row::Header(_) => HEADER_HEIGHT,
            Row::Card(_) => CARD_HEIGHT,
        }
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_title(frame, chunks[0]);
    render_cards(frame, chunks[1], app);
    render_controls(frame, chunks[2], "j/k navigate  ·  enter open  ·  q quit");
}

pub fn render_detail(frame: &mut Frame, area: Rect, app: &App, index: usize) {
    let Some((section, entry)) = app.catalog().get(index) else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(CARD_HEIGHT + 2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let heading = Paragraph::new(section.title()).fg(Color::DarkGray);
    frame.render_widget(heading, chunks[0]);
    render_card(frame, chunks[1], entry, true);
    render_controls(frame, chunks[3], "enter/esc back  ·  q quit");
}

/// Draws one catalog entry. Every step and pattern goes through here.
pub fn render_card(frame: &mut Frame, area: Rect, entry: &CatalogEntry, selected: bool) {
    let (border, title_style) = if entry.disabled {
        (Color::DarkGray, Style::default().fg(Color::DarkGray))
    } else if selected {
        (Color::Cyan, Style::default().fg(Color::Cyan).bold())
    } else {
        (Color::Gray, Style::default().fg(Color::White).bold())
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .padding(Padding::horizontal(1))
        .title(Span::styled(format!(" {} ", entry.title), title_style));
    if let Some(difficulty) = entry.difficulty {
        block = block.title(difficulty_badge(difficulty).right_aligned());
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).split(inner);

    let description = Paragraph::new(entry.description.as_str())
        .wrap(Wrap { trim: true })
        .fg(Color::Gray);
    frame.render_widget(description, chunks[0]);

    let button_style = match (entry.disabled, selected) {
        (true, _) => Style::default().fg(Color::DarkGray),
        (false, true) => Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
        (false, false) => Style::default().fg(Color::Cyan),
    };
    let button = Paragraph::new(Span::styled(format!("[ {} ]", entry.button_text), button_style));
    frame.render_widget(button, chunks[1]);
}

fn difficulty_badge(difficulty: Difficulty) -> Line<'static> {
    let color = match difficulty {
        Difficulty::Beginner => Color::Green,
        Difficulty::Intermediate => Color::Yellow,
        Difficulty::Advanced => Color::Red,
    };
    Line::from(Span::styled(
        format!(" {} ", difficulty.label()),
        Style::default().fg(color),
    ))
}

fn render_title(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            "REACT HOOK FORM LESSONS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from("Learn the form library step by step".fg(Color::DarkGray)),
    ];
    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_cards(frame: &mut Frame, area: Rect, app: &App) {
    let rows = layout_rows(app);
    let cursor_row = rows
        .iter()
        .position(|row| matches!(row, Row::Card(index) if *index == app.catalog_cursor()))
        .unwrap_or(0);
    let start = first_visible_row(&rows, cursor_row, area.height);

    let mut y = area.y;
    for row in &rows[start..] {
        let height = row.height();
        if y + height > area.bottom() {
            break;
        }
        let row_area = Rect::new(area.x, y, area.width, height);
        match row {
            Row::Header(section) => {
                let header = Paragraph::new(Span::styled(
                    section.title(),
                    Style::default().fg(Color::White).bold(),
                ));
                frame.render_widget(header, row_area);
            }
            Row::Card(index) => {
                if let Some((_, entry)) = app.catalog().get(*index) {
                    render_card(frame, row_area, entry, *index == app.catalog_cursor());
                }
            }
        }
        y += height;
    }
}

fn layout_rows(app: &App) -> Vec<Row> {
    let mut rows = Vec::with_capacity(app.catalog().len() + 2);
    let mut current_section = None;
    for (index, (section, _)) in app.catalog().entries().enumerate() {
        if current_section != Some(section) {
            rows.push(Row::Header(section));
            current_section = Some(section);
        }
        rows.push(Row::Card(index));
    }
    rows
}

/// Smallest scroll offset that keeps the cursor row on screen.
fn first_visible_row(rows: &[Row], cursor_row: usize, available: u16) -> usize {
    let mut start = 0;
    while start < cursor_row {
        let used: u16 = rows[start..=cursor_row].iter().map(Row::height).sum();
        if used <= available {
            break;
        }
        start += 1;
    }
    start
}

fn render_controls(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_keeps_cursor_visible() {
        let rows = vec![
            Row::Header(Section::Steps),
            Row::Card(0),
            Row::Card(1),
            Row::Card(2),
        ];
        assert_eq!(first_visible_row(&rows, 1, 20), 0);
        assert_eq!(first_visible_row(&rows, 3, 12), 2);
        assert_eq!(first_visible_row(&rows, 3, 100), 0);
    }
}
