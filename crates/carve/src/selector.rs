//! Interactive candidate selector.
//!
//! A single-threaded, keystroke-driven list with incremental
//! filtering. The state machine is an explicit pure transition
//! function `(SelectorState, InputEvent) -> SelectorState` plus a pure
//! render function; the event loop just feeds it terminal events until
//! a terminal phase is reached. This keeps every transition testable
//! with scripted event sequences and no real terminal.
//!
//! The terminal is the one exclusive resource: raw mode and the
//! alternate screen are acquired on entry and restored on every exit
//! path, including panics, via a drop guard.

use ratatui::Frame;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use std::io;

/// One input event, already decoded from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Up,
    Down,
    Confirm,
    Cancel,
    Backspace,
    Char(char),
    /// Anything else: ignored, but still triggers a redraw.
    Other,
}

/// Where the session stands. `Confirmed` and `Cancelled` are terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Browsing,
    Confirmed(String),
    Cancelled,
}

/// Selector session state.
///
/// Invariant: `0 <= selected < max(1, filtered.len())`, and
/// `filtered` always equals `filter_names(&candidates, &query)` -
/// filtering is recomputed from the full candidate list on every query
/// edit, never narrowed from a previous filtered list.
#[derive(Debug, Clone)]
pub struct SelectorState {
    /// Full candidate list, immutable for the session.
    candidates: Vec<String>,
    /// Current filter query.
    query: String,
    /// Candidates matching the query, in candidate-list order.
    filtered: Vec<String>,
    /// Index into `filtered`; 0 when `filtered` is empty.
    selected: usize,
    pub phase: Phase,
}

impl SelectorState {
    pub fn new(candidates: Vec<String>) -> Self {
        let filtered = candidates.clone();
        Self {
            candidates,
            query: String::new(),
            filtered,
            selected: 0,
            phase: Phase::Browsing,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filtered(&self) -> &[String] {
        &self.filtered
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    fn refilter(&mut self) {
        self.filtered = filter_names(&self.candidates, &self.query);
        self.selected = 0;
    }
}

/// Case-insensitive substring filter over the full candidate list.
pub fn filter_names(candidates: &[String], query: &str) -> Vec<String> {
    if query.is_empty() {
        return candidates.to_vec();
    }
    let needle = query.to_lowercase();
    candidates
        .iter()
        .filter(|name| name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Apply one input event. Pure with respect to the terminal; the only
/// state that changes is the returned `SelectorState`.
pub fn transition(mut state: SelectorState, event: InputEvent) -> SelectorState {
    if state.phase != Phase::Browsing {
        return state;
    }
    match event {
        InputEvent::Up => {
            state.selected = state.selected.saturating_sub(1);
        }
        InputEvent::Down => {
            if !state.filtered.is_empty() {
                state.selected = (state.selected + 1).min(state.filtered.len() - 1);
            }
        }
        InputEvent::Confirm => {
            // Confirm on an empty filtered list is a no-op, not a cancel.
            if !state.filtered.is_empty() {
                state.phase = Phase::Confirmed(state.filtered[state.selected].clone());
            }
        }
        InputEvent::Cancel => {
            state.phase = Phase::Cancelled;
        }
        InputEvent::Backspace => {
            if !state.query.is_empty() {
                state.query.pop();
                state.refilter();
            }
        }
        InputEvent::Char(c) if c.is_ascii_alphanumeric() || c == '_' => {
            state.query.push(c);
            state.refilter();
        }
        InputEvent::Char(_) | InputEvent::Other => {}
    }
    state
}

/// Full redraw: prompt line, then the filtered list with the selected
/// name inverted. Pure function of state and viewport.
pub fn draw(frame: &mut Frame, state: &SelectorState, max_rows: Option<usize>) {
    let list_constraint = match max_rows {
        Some(rows) => Constraint::Max(rows as u16),
        None => Constraint::Fill(1),
    };
    let chunks = Layout::vertical([Constraint::Length(1), list_constraint, Constraint::Min(0)])
        .split(frame.area());

    let prompt = Paragraph::new(format!("Search: {}", state.query));
    frame.render_widget(prompt, chunks[0]);

    let items: Vec<ListItem> = state
        .filtered
        .iter()
        .map(|name| ListItem::new(name.as_str()))
        .collect();
    let list = List::new(items).highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut list_state = ListState::default();
    if !state.filtered.is_empty() {
        list_state.select(Some(state.selected));
    }
    frame.render_stateful_widget(list, chunks[1], &mut list_state);
}

/// Restores the terminal on drop, whichever way the selector exits.
struct TerminalGuard {
    terminal: ratatui::DefaultTerminal,
}

impl TerminalGuard {
    fn acquire() -> io::Result<Self> {
        Ok(Self {
            terminal: ratatui::try_init()?,
        })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        ratatui::restore();
    }
}

/// Block until the next interesting terminal event.
fn next_event() -> io::Result<InputEvent> {
    loop {
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => return Ok(map_key(key)),
            Event::Resize(_, _) => return Ok(InputEvent::Other),
            _ => {}
        }
    }
}

fn map_key(key: KeyEvent) -> InputEvent {
    match key.code {
        KeyCode::Up => InputEvent::Up,
        KeyCode::Down => InputEvent::Down,
        KeyCode::Enter => InputEvent::Confirm,
        KeyCode::Esc => InputEvent::Cancel,
        KeyCode::Backspace => InputEvent::Backspace,
        KeyCode::Char(c) => InputEvent::Char(c),
        _ => InputEvent::Other,
    }
}

/// Run an interactive session over `candidates`.
///
/// Returns the confirmed name, or None if the user cancelled.
/// `candidates` must be non-empty; the caller checks that before
/// entering the UI.
pub fn select(candidates: Vec<String>, max_rows: Option<usize>) -> io::Result<Option<String>> {
    let mut guard = TerminalGuard::acquire()?;
    let mut state = SelectorState::new(candidates);
    loop {
        guard.terminal.draw(|frame| draw(frame, &state, max_rows))?;
        state = transition(state, next_event()?);
        match &state.phase {
            Phase::Confirmed(name) => return Ok(Some(name.clone())),
            Phase::Cancelled => return Ok(None),
            Phase::Browsing => {}
        }
    }
}
