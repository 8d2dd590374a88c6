//! Main TUI application state and logic

use crate::constants::POLL_INTERVAL;
use crate::recorder::sorting::SortAlgo;
use crate::recorder::traversal::Algo;
use crate::structures::list::End;
use crate::ui::panels::Panels;
use crate::ui::panes;
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::Tabs,
    Frame, Terminal,
};
use std::io;
use std::time::Instant;

/// Which structure panel is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Array,
    Stack,
    Queue,
    List,
    Bst,
    Graph,
    Hash,
    Sorting,
}

impl PanelKind {
    pub const ALL: [PanelKind; 8] = [
        PanelKind::Array,
        PanelKind::Stack,
        PanelKind::Queue,
        PanelKind::List,
        PanelKind::Bst,
        PanelKind::Graph,
        PanelKind::Hash,
        PanelKind::Sorting,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PanelKind::Array => "Array",
            PanelKind::Stack => "Stack",
            PanelKind::Queue => "Queue",
            PanelKind::List => "Linked List",
            PanelKind::Bst => "BST",
            PanelKind::Graph => "Graph",
            PanelKind::Hash => "Hash Table",
            PanelKind::Sorting => "Sorting",
        }
    }

    /// CLI panel names
    pub fn from_arg(arg: &str) -> Option<PanelKind> {
        match arg {
            "array" => Some(PanelKind::Array),
            "stack" => Some(PanelKind::Stack),
            "queue" => Some(PanelKind::Queue),
            "list" => Some(PanelKind::List),
            "bst" => Some(PanelKind::Bst),
            "graph" => Some(PanelKind::Graph),
            "hash" => Some(PanelKind::Hash),
            "sort" => Some(PanelKind::Sorting),
            _ => None,
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|k| *k == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn keybinds(self) -> &'static str {
        match self {
            PanelKind::Array => "i insert · d delete · s search · r random · c clear",
            PanelKind::Stack => "p push · o pop · k peek · c clear",
            PanelKind::Queue => "e enqueue · d dequeue · k peek · c clear",
            PanelKind::List => "h head · t tail · d delete · s search · c clear",
            PanelKind::Bst => "i insert · s search · c clear",
            PanelKind::Graph => "1 node · 2 edge · 3 bfs · 4 dfs · 0 clear",
            PanelKind::Hash => "i insert · s search · d delete · c clear",
            PanelKind::Sorting => "b bubble · s selection · i insertion · m merge · r new",
        }
    }
}

/// The main application state
pub struct App {
    pub panels: Panels,
    pub kind: PanelKind,
    pub should_quit: bool,
}

impl App {
    pub fn new(kind: PanelKind) -> Self {
        App {
            panels: Panels::new(),
            kind,
            should_quit: false,
        }
    }

    /// Run the TUI event loop.
    ///
    /// One pass per [`POLL_INTERVAL`]: advance every timer, draw, then
    /// handle at most one key. All playback cadence flows through the
    /// `tick` call — there is no other clock.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.panels.tick(Instant::now());
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let titles: Vec<&str> = PanelKind::ALL.iter().map(|k| k.label()).collect();
        let tabs = Tabs::new(titles)
            .select(self.kind.index())
            .style(Style::default().fg(DEFAULT_THEME.comment))
            .highlight_style(
                Style::default()
                    .fg(DEFAULT_THEME.function)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("│");
        frame.render_widget(tabs, rows[0]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[1]);

        self.render_structure(frame, columns[0]);

        let insight = match self.kind {
            PanelKind::Array => &self.panels.array.core.insight,
            PanelKind::Stack => &self.panels.stack.core.insight,
            PanelKind::Queue => &self.panels.queue.core.insight,
            PanelKind::List => &self.panels.list.core.insight,
            PanelKind::Bst => &self.panels.bst.core.insight,
            PanelKind::Graph => &self.panels.graph.core.insight,
            PanelKind::Hash => &self.panels.hash.core.insight,
            PanelKind::Sorting => &self.panels.sorting.insight,
        };
        panes::render_insight_pane(frame, columns[1], insight);

        let (message, is_error) = match self.panels.flash.message() {
            Some(m) => (m.to_string(), true),
            None => ("Ready".to_string(), false),
        };
        panes::render_status_bar(
            frame,
            rows[2],
            self.kind.label(),
            &message,
            is_error,
            self.kind.keybinds(),
        );
    }

    /// Left column: the structure pane, plus the controls strip for panels
    /// that take typed arguments
    fn render_structure(&mut self, frame: &mut Frame, area: ratatui::layout::Rect) {
        if self.kind == PanelKind::Sorting {
            panes::render_sorting_pane(frame, area, &self.panels.sorting);
            return;
        }

        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(area);

        match self.kind {
            PanelKind::Array => {
                let panel = &self.panels.array;
                panes::render_array_pane(frame, parts[0], &panel.core.state, &panel.core.highlights);
                panes::cells::render_controls(
                    frame,
                    parts[1],
                    &[(&panel.value, panel.focus == 0), (&panel.index, panel.focus == 1)],
                );
            }
            PanelKind::Stack => {
                let panel = &self.panels.stack;
                panes::render_stack_pane(frame, parts[0], &panel.core.state, &panel.core.highlights);
                panes::cells::render_controls(frame, parts[1], &[(&panel.value, true)]);
            }
            PanelKind::Queue => {
                let panel = &self.panels.queue;
                panes::render_queue_pane(frame, parts[0], &panel.core.state, &panel.core.highlights);
                panes::cells::render_controls(frame, parts[1], &[(&panel.value, true)]);
            }
            PanelKind::List => {
                let panel = &self.panels.list;
                panes::render_list_pane(frame, parts[0], &panel.core.state, &panel.core.highlights);
                panes::cells::render_controls(frame, parts[1], &[(&panel.value, true)]);
            }
            PanelKind::Bst => {
                let panel = &self.panels.bst;
                panes::render_bst_pane(frame, parts[0], &panel.core.state, &panel.core.highlights);
                panes::cells::render_controls(frame, parts[1], &[(&panel.value, true)]);
            }
            PanelKind::Graph => {
                let panel = &self.panels.graph;
                panes::render_graph_pane(
                    frame,
                    parts[0],
                    &panel.core.state,
                    &panel.core.highlights,
                    &panel.visited,
                );
                panes::cells::render_controls(
                    frame,
                    parts[1],
                    &[
                        (&panel.node, panel.focus == 0),
                        (&panel.source, panel.focus == 1),
                        (&panel.target, panel.focus == 2),
                        (&panel.start, panel.focus == 3),
                    ],
                );
            }
            PanelKind::Hash => {
                let panel = &self.panels.hash;
                panes::render_hash_pane(frame, parts[0], &panel.core.state, &panel.core.highlights);
                panes::cells::render_controls(frame, parts[1], &[(&panel.key, true)]);
            }
            PanelKind::Sorting => unreachable!("handled above"),
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        let now = Instant::now();
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.kind = self.kind.next();
                return;
            }
            KeyCode::BackTab => {
                self.kind = self.kind.prev();
                return;
            }
            _ => {}
        }

        match self.kind {
            PanelKind::Array => self.handle_array_key(key.code, now),
            PanelKind::Stack => self.handle_stack_key(key.code, now),
            PanelKind::Queue => self.handle_queue_key(key.code, now),
            PanelKind::List => self.handle_list_key(key.code, now),
            PanelKind::Bst => self.handle_bst_key(key.code, now),
            PanelKind::Graph => self.handle_graph_key(key.code, now),
            PanelKind::Hash => self.handle_hash_key(key.code, now),
            PanelKind::Sorting => self.handle_sorting_key(key.code, now),
        }
    }

    fn handle_array_key(&mut self, code: KeyCode, now: Instant) {
        let panel = &mut self.panels.array;
        match code {
            KeyCode::Char(c @ ('0'..='9' | '-')) => panel.focused_field_mut().push(c),
            KeyCode::Backspace => panel.focused_field_mut().backspace(),
            KeyCode::Left | KeyCode::Right => {
                panel.focus = (panel.focus + 1) % panel.field_count();
            }
            KeyCode::Char('i') => panel.insert(&mut self.panels.flash, now),
            KeyCode::Char('d') => panel.delete(&mut self.panels.flash, now),
            KeyCode::Char('s') => panel.search(&mut self.panels.flash, now),
            KeyCode::Char('r') => panel.randomize(),
            KeyCode::Char('c') => panel.clear(),
            _ => {}
        }
    }

    fn handle_stack_key(&mut self, code: KeyCode, now: Instant) {
        let panel = &mut self.panels.stack;
        match code {
            KeyCode::Char(c @ ('0'..='9' | '-')) => panel.value.push(c),
            KeyCode::Backspace => panel.value.backspace(),
            KeyCode::Char('p') => panel.push(&mut self.panels.flash, now),
            KeyCode::Char('o') => panel.pop(&mut self.panels.flash, now),
            KeyCode::Char('k') => panel.peek(&mut self.panels.flash, now),
            KeyCode::Char('c') => panel.clear(),
            _ => {}
        }
    }

    fn handle_queue_key(&mut self, code: KeyCode, now: Instant) {
        let panel = &mut self.panels.queue;
        match code {
            KeyCode::Char(c @ ('0'..='9' | '-')) => panel.value.push(c),
            KeyCode::Backspace => panel.value.backspace(),
            KeyCode::Char('e') => panel.enqueue(&mut self.panels.flash, now),
            KeyCode::Char('d') => panel.dequeue(&mut self.panels.flash, now),
            KeyCode::Char('k') => panel.peek(&mut self.panels.flash, now),
            KeyCode::Char('c') => panel.clear(),
            _ => {}
        }
    }

    fn handle_list_key(&mut self, code: KeyCode, now: Instant) {
        let panel = &mut self.panels.list;
        match code {
            KeyCode::Char(c @ ('0'..='9' | '-')) => panel.value.push(c),
            KeyCode::Backspace => panel.value.backspace(),
            KeyCode::Char('h') => panel.insert(End::Head, &mut self.panels.flash, now),
            KeyCode::Char('t') => panel.insert(End::Tail, &mut self.panels.flash, now),
            KeyCode::Char('d') => panel.delete(&mut self.panels.flash, now),
            KeyCode::Char('s') => panel.search(&mut self.panels.flash, now),
            KeyCode::Char('c') => panel.clear(),
            _ => {}
        }
    }

    fn handle_bst_key(&mut self, code: KeyCode, now: Instant) {
        let panel = &mut self.panels.bst;
        match code {
            KeyCode::Char(c @ ('0'..='9' | '-')) => panel.value.push(c),
            KeyCode::Backspace => panel.value.backspace(),
            KeyCode::Char('i') => panel.insert(&mut self.panels.flash, now),
            KeyCode::Char('s') => panel.search(&mut self.panels.flash, now),
            KeyCode::Char('c') => panel.clear(),
            _ => {}
        }
    }

    /// Graph labels are letters, so operations live on the digit keys
    fn handle_graph_key(&mut self, code: KeyCode, now: Instant) {
        let panel = &mut self.panels.graph;
        match code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                panel.focused_field_mut().push(c.to_ascii_uppercase());
            }
            KeyCode::Backspace => panel.focused_field_mut().backspace(),
            KeyCode::Left | KeyCode::Right => {
                panel.focus = (panel.focus + 1) % panel.field_count();
            }
            KeyCode::Char('1') => panel.add_node(&mut self.panels.flash, now),
            KeyCode::Char('2') => panel.add_edge(&mut self.panels.flash, now),
            KeyCode::Char('3') => panel.traverse(Algo::Bfs, &mut self.panels.flash, now),
            KeyCode::Char('4') => panel.traverse(Algo::Dfs, &mut self.panels.flash, now),
            KeyCode::Char('0') => panel.clear(),
            _ => {}
        }
    }

    fn handle_hash_key(&mut self, code: KeyCode, now: Instant) {
        let panel = &mut self.panels.hash;
        match code {
            KeyCode::Char(c @ ('0'..='9' | '-')) => panel.key.push(c),
            KeyCode::Backspace => panel.key.backspace(),
            KeyCode::Char('i') => panel.insert(&mut self.panels.flash, now),
            KeyCode::Char('s') => panel.search(&mut self.panels.flash, now),
            KeyCode::Char('d') => panel.delete(&mut self.panels.flash, now),
            KeyCode::Char('c') => panel.clear(),
            _ => {}
        }
    }

    fn handle_sorting_key(&mut self, code: KeyCode, now: Instant) {
        let panel = &mut self.panels.sorting;
        match code {
            KeyCode::Char('b') => panel.sort(SortAlgo::Bubble, now),
            KeyCode::Char('s') => panel.sort(SortAlgo::Selection, now),
            KeyCode::Char('i') => panel.sort(SortAlgo::Insertion, now),
            KeyCode::Char('m') => panel.sort(SortAlgo::Merge, now),
            KeyCode::Char('r') => panel.reset(),
            _ => {}
        }
    }
}
