//! Queue pane: a front-to-back row of cells with end markers

use super::cells::{pane_block, value_cell};
use crate::recorder::Target;
use crate::replay::Highlights;
use crate::structures::queue::Queue;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_queue_pane(frame: &mut Frame, area: Rect, queue: &Queue, highlights: &Highlights) {
    let mut spans = vec![Span::styled(
        " front → ",
        Style::default().fg(DEFAULT_THEME.secondary),
    )];

    for (i, value) in queue.iter().enumerate() {
        let lit = highlights.contains(&Target::Index(i));
        spans.push(value_cell(*value, lit));
        spans.push(Span::raw(" "));
    }

    spans.push(Span::styled(
        "← rear ",
        Style::default().fg(DEFAULT_THEME.secondary),
    ));

    let lines = if queue.is_empty() {
        vec![
            Line::raw(""),
            Line::styled(
                "  (empty — enqueue a value)",
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        ]
    } else {
        vec![Line::raw(""), Line::from(spans)]
    };

    let paragraph = Paragraph::new(lines).block(pane_block("Queue"));
    frame.render_widget(paragraph, area);
}
