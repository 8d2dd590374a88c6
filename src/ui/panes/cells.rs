//! Shared rendering helpers for the structure panes

use crate::ui::input::InputField;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Standard pane block with the normal border
pub fn pane_block(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
}

/// Style for an element cell given its projection state
pub fn cell_style(highlighted: bool, sorted: bool) -> Style {
    if highlighted {
        Style::default()
            .bg(DEFAULT_THEME.highlight)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else if sorted {
        Style::default().bg(DEFAULT_THEME.success).fg(Color::Black)
    } else {
        Style::default()
            .bg(DEFAULT_THEME.cell_bg)
            .fg(DEFAULT_THEME.fg)
    }
}

/// A boxed value cell like ` 42 `
pub fn value_cell(value: i32, highlighted: bool) -> Span<'static> {
    Span::styled(format!(" {} ", value), cell_style(highlighted, false))
}

/// Render the controls strip: every input field with its label, the
/// focused one emphasized
pub fn render_controls(frame: &mut Frame, area: Rect, fields: &[(&InputField, bool)]) {
    let mut spans = Vec::new();
    for (field, focused) in fields {
        let label_style = if *focused {
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.comment)
        };
        let box_style = if *focused {
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .bg(DEFAULT_THEME.cell_bg)
                .fg(DEFAULT_THEME.fg)
        };
        spans.push(Span::styled(format!(" {}: ", field.label), label_style));
        let cursor = if *focused { "_" } else { " " };
        spans.push(Span::styled(
            format!("[{}{}]", field.text(), cursor),
            box_style,
        ));
        spans.push(Span::raw(" "));
    }
    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
            .title(" Input "),
    );
    frame.render_widget(paragraph, area);
}
