//! BST pane: indented tree listing, root first
//!
//! Each node renders on its own row with box-drawing connectors; left
//! children carry an `L` tag and right children an `R` tag so the
//! ordering property is readable at a glance.

use super::cells::{cell_style, pane_block};
use crate::recorder::Target;
use crate::replay::Highlights;
use crate::structures::bst::{Bst, BstNode};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::rc::Rc;

pub fn render_bst_pane(frame: &mut Frame, area: Rect, tree: &Bst, highlights: &Highlights) {
    let mut lines = vec![Line::raw("")];

    match tree.root() {
        None => lines.push(Line::styled(
            "  (empty — insert a value)",
            Style::default().fg(DEFAULT_THEME.comment),
        )),
        Some(root) => push_node(&mut lines, root, "  ", "  ", "", highlights),
    }

    let paragraph = Paragraph::new(lines).block(pane_block("Binary Search Tree"));
    frame.render_widget(paragraph, area);
}

/// `row_head` is everything drawn before this node's cell; `child_prefix`
/// is what the node's children extend with their own connectors
fn push_node(
    lines: &mut Vec<Line<'static>>,
    node: &Rc<BstNode>,
    row_head: &str,
    child_prefix: &str,
    tag: &str,
    highlights: &Highlights,
) {
    let lit = highlights.contains(&Target::TreeValue(node.value));
    let mut spans = vec![Span::styled(
        row_head.to_string(),
        Style::default().fg(DEFAULT_THEME.comment),
    )];
    if !tag.is_empty() {
        spans.push(Span::styled(
            format!("{} ", tag),
            Style::default().fg(DEFAULT_THEME.type_name),
        ));
    }
    spans.push(Span::styled(
        format!(" {} ", node.value),
        cell_style(lit, false),
    ));
    lines.push(Line::from(spans));

    let children: Vec<(&Rc<BstNode>, &str)> = node
        .left
        .iter()
        .map(|n| (n, "L"))
        .chain(node.right.iter().map(|n| (n, "R")))
        .collect();

    let count = children.len();
    for (i, (child, tag)) in children.into_iter().enumerate() {
        let last = i == count - 1;
        let row_head = format!("{}{}", child_prefix, if last { "└─ " } else { "├─ " });
        let next_prefix = format!("{}{}", child_prefix, if last { "   " } else { "│  " });
        push_node(lines, child, &row_head, &next_prefix, tag, highlights);
    }
}
