//! Linked-list pane: node chain with pointer arrows and a NULL terminator

use super::cells::{cell_style, pane_block};
use crate::recorder::Target;
use crate::replay::Highlights;
use crate::structures::list::LinkedList;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_list_pane(
    frame: &mut Frame,
    area: Rect,
    list: &LinkedList,
    highlights: &Highlights,
) {
    let mut spans = vec![Span::styled(
        " head → ",
        Style::default().fg(DEFAULT_THEME.secondary),
    )];

    for node in list.nodes() {
        let lit = highlights.contains(&Target::Node(node.id));
        spans.push(Span::styled(
            format!(" {} ", node.value),
            cell_style(lit, false),
        ));
        spans.push(Span::styled(
            " → ",
            Style::default().fg(DEFAULT_THEME.primary),
        ));
    }

    spans.push(Span::styled(
        "NULL",
        Style::default().fg(DEFAULT_THEME.comment),
    ));

    let lines = if list.is_empty() {
        vec![
            Line::raw(""),
            Line::styled(
                "  (empty — insert at head or tail)",
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        ]
    } else {
        vec![Line::raw(""), Line::from(spans)]
    };

    let paragraph = Paragraph::new(lines).block(pane_block("Singly Linked List"));
    frame.render_widget(paragraph, area);
}
