//! Hash table pane: one row per bucket with its chained entries

use super::cells::{cell_style, pane_block};
use crate::recorder::Target;
use crate::replay::Highlights;
use crate::structures::hash::HashTable;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_hash_pane(
    frame: &mut Frame,
    area: Rect,
    table: &HashTable,
    highlights: &Highlights,
) {
    let mut lines = vec![Line::raw("")];

    for (index, chain) in table.buckets().iter().enumerate() {
        let bucket_lit = highlights.contains(&Target::Bucket(index));
        let mut spans = vec![
            Span::raw("  "),
            Span::styled(format!(" [{}] ", index), cell_style(bucket_lit, false)),
            Span::raw(" "),
        ];

        if chain.is_empty() {
            spans.push(Span::styled(
                "·",
                Style::default().fg(DEFAULT_THEME.comment),
            ));
        } else {
            for (i, entry) in chain.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::styled(
                        " → ",
                        Style::default().fg(DEFAULT_THEME.primary),
                    ));
                }
                let entry_lit = highlights.contains(&Target::Node(entry.id));
                spans.push(Span::styled(
                    format!(" {} ", entry.key),
                    cell_style(entry_lit, false),
                ));
            }
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).block(pane_block("Hash Table (chaining, size 7)"));
    frame.render_widget(paragraph, area);
}
