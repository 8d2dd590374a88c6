//! Array pane: one row of value cells with index labels underneath

use super::cells::{cell_style, pane_block};
use crate::recorder::Target;
use crate::replay::Highlights;
use crate::structures::array::ArraySeq;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_array_pane(
    frame: &mut Frame,
    area: Rect,
    array: &ArraySeq,
    highlights: &Highlights,
) {
    let mut value_spans = vec![Span::raw(" ")];
    let mut index_spans = vec![Span::raw(" ")];

    for (i, &value) in array.items().iter().enumerate() {
        let lit = highlights.contains(&Target::Index(i));
        let cell = format!(" {:^3} ", value);
        let width = cell.chars().count();
        value_spans.push(Span::styled(cell, cell_style(lit, false)));
        value_spans.push(Span::raw(" "));
        index_spans.push(Span::styled(
            format!("{:^width$}", format!("[{}]", i), width = width),
            Style::default().fg(DEFAULT_THEME.comment),
        ));
        index_spans.push(Span::raw(" "));
    }

    let lines = if array.is_empty() {
        vec![
            Line::raw(""),
            Line::styled(
                "  (empty — insert a value)",
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        ]
    } else {
        vec![
            Line::raw(""),
            Line::from(value_spans),
            Line::from(index_spans),
        ]
    };

    let paragraph = Paragraph::new(lines).block(pane_block("Array"));
    frame.render_widget(paragraph, area);
}
