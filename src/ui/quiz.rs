use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::models::QuizDefinition;
use crate::quiz::{OptionFeedback, Presenter, SessionTracker};

const BANNER_HEIGHT: u16 = 4;
const RESULT_HEIGHT: u16 = 6;

pub fn render(frame: &mut Frame, area: Rect, quiz: &QuizDefinition, session: &SessionTracker) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(Color::DarkGray)
        .padding(Padding::horizontal(1))
        .title(Span::styled(
            format!(" {} ", quiz.title),
            Style::default().fg(Color::Cyan).bold(),
        ));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let presenter = session.presenter();
    let summary_height = u16::from(quiz.summary.is_some());
    let banner_height = if session.is_all_complete() { BANNER_HEIGHT } else { 0 };
    let result_height = if presenter.is_submitted() { RESULT_HEIGHT } else { 0 };
    let option_count = presenter.question().options.len() as u16;

    let chunks = Layout::vertical([
        Constraint::Length(summary_height),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(banner_height),
        Constraint::Length(5),
        Constraint::Min(option_count + 2),
        Constraint::Length(result_height),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(inner);

    if let Some(summary) = &quiz.summary {
        frame.render_widget(Paragraph::new(summary.as_str()).fg(Color::DarkGray), chunks[0]);
    }
    render_progress(frame, chunks[1], chunks[2], session);
    if session.is_all_complete() {
        render_banner(frame, chunks[3], quiz.completion_message.as_deref());
    }
    render_prompt(frame, chunks[4], presenter);
    render_options(frame, chunks[5], presenter);
    if presenter.is_submitted() {
        render_result(frame, chunks[6], presenter);
    }
    render_navigation(frame, chunks[7], session);
    render_controls(frame, chunks[8], presenter);
}

fn render_progress(frame: &mut Frame, label_area: Rect, gauge_area: Rect, session: &SessionTracker) {
    let halves =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(6)]).split(label_area);

    let label = Paragraph::new(format!("Progress: {}", session.progress_label())).fg(Color::Gray);
    let percent = Paragraph::new(format!("{}%", session.rounded_percentage()))
        .alignment(Alignment::Right)
        .fg(Color::Cyan);
    frame.render_widget(label, halves[0]);
    frame.render_widget(percent, halves[1]);

    let gauge = Gauge::default()
        .ratio(session.ratio().clamp(0.0, 1.0))
        .label("")
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray));
    frame.render_widget(gauge, gauge_area);
}

fn render_banner(frame: &mut Frame, area: Rect, message: Option<&str>) {
    let mut lines = vec![Line::from(Span::styled(
        "Congratulations!",
        Style::default().fg(Color::Green).bold(),
    ))];
    if let Some(message) = message {
        lines.push(Line::from(message.fg(Color::Green)));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::Green)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_prompt(frame: &mut Frame, area: Rect, presenter: &Presenter) {
    let mut lines = vec![Line::from(Span::styled(
        presenter.question().prompt.as_str(),
        Style::default().fg(Color::White).bold(),
    ))];
    if let Some(hint) = presenter.hint() {
        lines.push(Line::from(Span::styled(
            format!("Hint: {}", hint),
            Style::default().fg(Color::DarkGray).italic(),
        )));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::Blue)
            .title(" Question ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, presenter: &Presenter) {
    let submitted = presenter.is_submitted();
    let selected = presenter.selected_option_id();

    let lines: Vec<Line> = presenter
        .question()
        .options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let is_selected = selected == Some(option.id.as_str());
            let marker = if is_selected { "(•)" } else { "( )" };
            let (style, suffix) = match presenter.option_feedback(option) {
                OptionFeedback::Success => (Style::default().fg(Color::Green).bold(), "  ✓"),
                OptionFeedback::Error => (Style::default().fg(Color::Red).bold(), "  ✗"),
                OptionFeedback::Neutral if submitted => (Style::default().fg(Color::DarkGray), ""),
                OptionFeedback::Neutral if is_selected => {
                    (Style::default().fg(Color::Cyan).bold(), "")
                }
                OptionFeedback::Neutral => (Style::default().fg(Color::Gray), ""),
            };

            Line::from(vec![
                Span::styled(format!(" {} ", marker), style),
                Span::styled(format!("{}. ", index + 1), style),
                Span::styled(option.text.as_str(), style),
                Span::styled(suffix, style),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(" Options ")
            .title_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(widget, area);
}

fn render_result(frame: &mut Frame, area: Rect, presenter: &Presenter) {
    let Some(outcome) = presenter.outcome() else {
        return;
    };

    let (heading, color) = if outcome.is_correct {
        ("Correct!", Color::Green)
    } else {
        ("Not quite.", Color::Red)
    };

    let mut lines = vec![Line::from(Span::styled(
        heading,
        Style::default().fg(color).bold(),
    ))];
    if let Some(correct) = outcome.correct {
        lines.push(Line::from(vec![
            Span::styled("Answer: ", Style::default().bold()),
            Span::raw(correct.text.as_str()),
        ]));
        if let Some(explanation) = &correct.explanation {
            lines.push(Line::from(vec![
                Span::styled("Explanation: ", Style::default().bold()),
                Span::raw(explanation.as_str()),
            ]));
        }
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(color)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_navigation(frame: &mut Frame, area: Rect, session: &SessionTracker) {
    let enabled = Style::default().fg(Color::Cyan);
    let disabled = Style::default().fg(Color::DarkGray);

    let mut spans = vec![
        Span::styled(
            "← previous",
            if session.can_go_previous() { enabled } else { disabled },
        ),
        Span::styled(format!("   {}   ", session.position_label()), Style::default().fg(Color::Gray)),
        Span::styled("next →", if session.can_go_next() { enabled } else { disabled }),
    ];
    if session.is_completed(session.current_index()) {
        spans.push(Span::styled("   ✓ completed", Style::default().fg(Color::Green)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn render_controls(frame: &mut Frame, area: Rect, presenter: &Presenter) {
    let text = if presenter.is_submitted() {
        "r try again  ·  ←/→ questions  ·  R start over  ·  esc back  ·  q quit"
    } else {
        "j/k choose  ·  enter answer  ·  ←/→ questions  ·  R start over  ·  esc back  ·  q quit"
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::models::fixtures::four_questions;
    use crate::quiz::CelebrationTimeline;
    use crate::ui::buffer_text;

    fn quiz() -> QuizDefinition {
        QuizDefinition {
            id: "demo".into(),
            title: "Demo quiz".into(),
            summary: Some("Answer them all".into()),
            completion_message: Some("Well done, every answer is right".into()),
            questions: four_questions(),
        }
    }

    fn draw(session: &SessionTracker) -> String {
        let quiz = quiz();
        let mut terminal = Terminal::new(TestBackend::new(100, 45)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, area, &quiz, session);
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn wrong_answer_reveals_correct_option() {
        let mut session = SessionTracker::new(four_questions(), CelebrationTimeline::default()).unwrap();
        session.select_option("a");
        session.submit_current();

        let text = draw(&session);
        assert!(text.contains("Not quite."));
        assert!(text.contains("Answer: Option b"));
        assert!(text.contains("Explanation: b is right"));
        assert!(!text.contains("Hint for q1"));
    }

    #[test]
    fn banner_appears_once_all_questions_are_done() {
        let mut session = SessionTracker::new(four_questions(), CelebrationTimeline::default()).unwrap();
        assert!(!draw(&session).contains("Congratulations!"));

        for correct in ["b", "b", "c", "b"] {
            session.select_option(correct);
            session.submit_current();
            session.go_to_next();
        }

        let text = draw(&session);
        assert!(text.contains("4 / 4 completed"));
        assert!(text.contains("100%"));
        assert!(text.contains("Congratulations!"));
    }
}
