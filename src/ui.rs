//! UI rendering helpers for the terminal form.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph, Wrap},
};

use crate::app::{App, Focus, Status};
use crate::config::UiSettings;

const CONTROLS: [(&str, &str); 5] = [
    ("tab/j/k", "move"),
    ("space", "toggle"),
    ("enter", "start"),
    ("type", "edit directory"),
    ("esc/q", "quit"),
];

fn controls_text() -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| format!("[{k}] {v}"))
        .collect::<Vec<String>>()
        .join(" | ")
}

fn checkbox_label(focus: Focus) -> &'static str {
    match focus {
        Focus::Track => "Track number",
        Focus::Title => "Title",
        Focus::Artist => "Artist",
        Focus::Directory | Focus::Start => "",
    }
}

fn status_text(status: &Status) -> String {
    match status {
        Status::Idle => "Ready".to_string(),
        Status::Warning(msg) => format!("Warning: {msg}"),
        Status::Done(msg) => msg.clone(),
        Status::Error(msg) => format!("Error: {msg}"),
    }
}

fn focused(app: &App, focus: Focus) -> Style {
    if app.focus == focus {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    }
}

/// Render the whole form into `frame`.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" tagname ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let dir_text = if app.focus == Focus::Directory {
        format!("{}_", app.directory)
    } else {
        app.directory.clone()
    };
    let directory = Paragraph::new(dir_text)
        .style(focused(app, Focus::Directory))
        .block(Block::bordered().title(" directory "));
    frame.render_widget(directory, chunks[1]);

    let boxes: Vec<ListItem> = [Focus::Track, Focus::Title, Focus::Artist]
        .into_iter()
        .map(|f| {
            let mark = if app.is_checked(f) == Some(true) { "x" } else { " " };
            ListItem::new(format!("[{mark}] {}", checkbox_label(f))).style(focused(app, f))
        })
        .collect();
    let fields = List::new(boxes).block(
        Block::bordered()
            .padding(Padding {
                left: 1,
                right: 0,
                top: 0,
                bottom: 0,
            })
            .title(" fields "),
    );
    frame.render_widget(fields, chunks[2]);

    let start = Paragraph::new("Start")
        .alignment(Alignment::Center)
        .style(focused(app, Focus::Start))
        .block(Block::bordered());
    frame.render_widget(start, chunks[3]);

    let results: Vec<ListItem> = app
        .report
        .as_ref()
        .map(|r| {
            r.records
                .iter()
                .map(|rec| ListItem::new(rec.to_string()))
                .collect()
        })
        .unwrap_or_default();
    let results = List::new(results).block(Block::bordered().title(" results "));
    frame.render_widget(results, chunks[4]);

    let status = Paragraph::new(status_text(&app.status))
        .block(Block::bordered().title(" status "))
        .wrap(Wrap { trim: true });
    frame.render_widget(status, chunks[5]);

    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[6]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controls_text_lists_every_binding() {
        let text = controls_text();
        assert!(text.starts_with("[tab/j/k] move"));
        assert!(text.ends_with("[esc/q] quit"));
        assert_eq!(text.matches(" | ").count(), CONTROLS.len() - 1);
    }

    #[test]
    fn status_text_prefixes_problems() {
        assert_eq!(status_text(&Status::Idle), "Ready");
        assert_eq!(status_text(&Status::Warning("x".into())), "Warning: x");
        assert_eq!(status_text(&Status::Error("y".into())), "Error: y");
        assert_eq!(status_text(&Status::Done("z".into())), "z");
    }
}
