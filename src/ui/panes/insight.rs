//! Code insight pane
//!
//! Renders the current operation's C snippet with basic syntax
//! highlighting and per-line emphasis, followed by the explanatory points
//! and the complexity table.

use crate::insight::Insight;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Simple tokenizer for C-like snippet lines
fn highlight_code(line: &str) -> Line<'static> {
    // Whole-line and trailing comments keep a single muted span
    if let Some(pos) = line.find("//") {
        let (code, comment) = line.split_at(pos);
        let mut spans = highlight_code(code).spans;
        spans.push(Span::styled(
            comment.to_string(),
            Style::default().fg(DEFAULT_THEME.comment),
        ));
        return Line::from(spans);
    }

    let mut spans = Vec::new();
    let mut word = String::new();
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '"' {
            flush_word(&mut spans, &mut word, false);
            let mut end = i + 1;
            while end < chars.len() && chars[end] != '"' {
                end += 1;
            }
            end = (end + 1).min(chars.len());
            let text: String = chars[i..end].iter().collect();
            spans.push(Span::styled(
                text,
                Style::default().fg(DEFAULT_THEME.string),
            ));
            i = end;
            continue;
        }

        if c.is_alphanumeric() || c == '_' {
            word.push(c);
            i += 1;
            continue;
        }

        flush_word(&mut spans, &mut word, c == '(');
        let style = match c {
            '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary),
            _ => Style::default().fg(DEFAULT_THEME.fg),
        };
        spans.push(Span::styled(c.to_string(), style));
        i += 1;
    }
    flush_word(&mut spans, &mut word, false);

    Line::from(spans)
}

fn flush_word(spans: &mut Vec<Span<'static>>, word: &mut String, is_call: bool) {
    if word.is_empty() {
        return;
    }
    let style = match word.as_str() {
        "int" | "char" | "void" | "bool" | "auto" | "Node" => {
            Style::default().fg(DEFAULT_THEME.type_name)
        }
        "if" | "else" | "while" | "for" | "return" | "new" | "struct" | "sizeof" => {
            Style::default()
                .fg(DEFAULT_THEME.keyword)
                .add_modifier(Modifier::BOLD)
        }
        "NULL" | "true" | "false" => Style::default().fg(DEFAULT_THEME.number),
        w if w.chars().all(|c| c.is_ascii_digit()) => Style::default().fg(DEFAULT_THEME.number),
        _ if is_call => Style::default().fg(DEFAULT_THEME.function),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    };
    spans.push(Span::styled(std::mem::take(word), style));
}

pub fn render_insight_pane(frame: &mut Frame, area: Rect, insight: &Insight) {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        format!(" {}", insight.title),
        Style::default()
            .fg(DEFAULT_THEME.function)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::raw(""));

    for (i, source_line) in insight.script.iter().enumerate() {
        let emphasized = insight.highlighted_lines.contains(&i);
        let num_style = if emphasized {
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.comment)
        };
        let mut content = highlight_code(source_line);
        if emphasized {
            for span in &mut content.spans {
                span.style = span
                    .style
                    .patch(Style::default().bg(DEFAULT_THEME.current_line_bg));
            }
        }
        let mut spans = vec![Span::styled(format!("{:3} ", i + 1), num_style)];
        spans.extend(content.spans);
        lines.push(Line::from(spans));
    }

    if !insight.points.is_empty() {
        lines.push(Line::raw(""));
        for point in &insight.points {
            lines.push(Line::from(vec![
                Span::styled("  • ", Style::default().fg(DEFAULT_THEME.secondary)),
                Span::styled(point.clone(), Style::default().fg(DEFAULT_THEME.fg)),
            ]));
        }
    }

    lines.push(Line::raw(""));
    for (case, bound) in &insight.complexity.time {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  Time ({}): ", case),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::styled(
                bound.to_string(),
                Style::default().fg(DEFAULT_THEME.number),
            ),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled("  Space: ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            insight.complexity.space.to_string(),
            Style::default().fg(DEFAULT_THEME.number),
        ),
    ]));

    let block = Block::default()
        .title(" Code Insight ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
