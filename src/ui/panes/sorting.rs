//! Sorting pane: bar chart driven by the replayed trace

use super::cells::pane_block;
use crate::ui::panels::SortingPanel;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Bar, BarChart, BarGroup},
    Frame,
};

pub fn render_sorting_pane(frame: &mut Frame, area: Rect, panel: &SortingPanel) {
    let bars: Vec<Bar> = panel
        .items
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let color = if panel.highlighted.contains(&i) {
                DEFAULT_THEME.highlight
            } else if panel.sorted.contains(&i) {
                DEFAULT_THEME.success
            } else {
                DEFAULT_THEME.primary
            };
            Bar::default()
                .value(value as u64)
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let title = if panel.is_sorting() {
        "Sorting — playing"
    } else {
        "Sorting"
    };

    let chart = BarChart::default()
        .block(pane_block(title))
        .bar_width(3)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}
