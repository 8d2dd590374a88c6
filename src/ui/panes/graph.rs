//! Graph pane: adjacency list with traversal projections
//!
//! Each node renders as a row `A → B, C`. The node cell lights up while a
//! traversal visits it, already-visited nodes stay green for the rest of
//! the run, and a freshly added edge flashes its target entry.

use super::cells::{cell_style, pane_block};
use crate::recorder::Target;
use crate::replay::Highlights;
use crate::structures::graph::Graph;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_graph_pane(
    frame: &mut Frame,
    area: Rect,
    graph: &Graph,
    highlights: &Highlights,
    visited: &[String],
) {
    let mut lines = vec![Line::raw("")];

    if graph.nodes().is_empty() {
        lines.push(Line::styled(
            "  (empty — add a node)",
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }

    for node in graph.nodes() {
        let id = node.id.as_str();
        let lit = highlights.contains(&Target::Vertex(id.to_string()));
        let was_visited = visited.iter().any(|v| v == id);

        let mut spans = vec![
            Span::raw("  "),
            Span::styled(format!(" {} ", id), cell_style(lit, was_visited)),
            Span::styled(" → ", Style::default().fg(DEFAULT_THEME.comment)),
        ];

        let neighbors = graph.neighbors(id);
        if neighbors.is_empty() {
            spans.push(Span::styled(
                "∅",
                Style::default().fg(DEFAULT_THEME.comment),
            ));
        } else {
            for (i, neighbor) in neighbors.iter().enumerate() {
                let edge_lit = highlights.contains(&Target::EdgeBetween(
                    id.to_string(),
                    neighbor.to_string(),
                ));
                let style = if edge_lit {
                    Style::default()
                        .fg(DEFAULT_THEME.highlight)
                        .add_modifier(ratatui::style::Modifier::BOLD)
                } else {
                    Style::default().fg(DEFAULT_THEME.primary)
                };
                if i > 0 {
                    spans.push(Span::raw(", "));
                }
                spans.push(Span::styled(neighbor.to_string(), style));
            }
        }
        lines.push(Line::from(spans));
    }

    if !visited.is_empty() {
        lines.push(Line::raw(""));
        let mut spans = vec![Span::styled(
            "  visit order: ",
            Style::default().fg(DEFAULT_THEME.comment),
        )];
        spans.push(Span::styled(
            visited.join(" → "),
            Style::default().fg(DEFAULT_THEME.success),
        ));
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).block(pane_block("Graph (directed)"));
    frame.render_widget(paragraph, area);
}
