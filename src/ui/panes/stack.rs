//! Stack pane: cells drawn top-down with the top of the stack first

use super::cells::{cell_style, pane_block};
use crate::recorder::Target;
use crate::replay::Highlights;
use crate::structures::stack::Stack;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_stack_pane(frame: &mut Frame, area: Rect, stack: &Stack, highlights: &Highlights) {
    let mut lines = vec![Line::raw("")];

    if stack.is_empty() {
        lines.push(Line::styled(
            "  (empty — push a value)",
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }

    // Top of the stack renders first
    for (i, &value) in stack.items().iter().enumerate().rev() {
        let lit = highlights.contains(&Target::Index(i));
        let mut spans = vec![
            Span::raw("  "),
            Span::styled(format!(" {:^5} ", value), cell_style(lit, false)),
        ];
        if i == stack.len() - 1 {
            spans.push(Span::styled(
                "  ← top",
                Style::default().fg(DEFAULT_THEME.secondary),
            ));
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).block(pane_block("Stack"));
    frame.render_widget(paragraph, area);
}
