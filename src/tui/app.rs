//! TUI application state and event handling.
//!
//! The `App` owns the explorer state machine plus the few presentation-only bits the
//! state machine does not care about: the text being typed, a cursor row within the
//! current page, and the quit flag. Every keystroke that changes the query is forwarded
//! as a [`Event::QueryChanged`], so the table always reflects the input exactly.
//!
//! # Example
//!
//! ```rust,ignore
//! let state = ExplorerState::new(Palette::default(), ThreadRandom);
//! let mut app = App::new(state);
//! app.run(&mut terminal)?;
//! ```

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::selection::RandomSource;
use crate::state::{Event, ExplorerState};

/// Longest query accepted from the keyboard
const MAX_QUERY_LEN: usize = 256;

pub struct App<R> {
    state: ExplorerState<R>,
    input: String,
    cursor: usize,
    should_quit: bool,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl<R: RandomSource> App<R> {
    pub fn new(state: ExplorerState<R>) -> Self {
        let mut app = Self {
            state,
            input: String::new(),
            cursor: 0,
            should_quit: false,
            needs_redraw: true, // Initial draw needed
            last_draw_time: Instant::now(),
        };
        app.follow_selection();
        app
    }

    pub fn state(&self) -> &ExplorerState<R> {
        &self.state
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                let rows = self.state.visible_rows();
                terminal.draw(|f| {
                    let render_state = RenderState {
                        input: &self.input,
                        rows: &rows,
                        cursor: self.cursor,
                        current_page: self.state.current_page(),
                        page_count: self.state.page_count(),
                        filtered_count: self.state.filtered().len(),
                        total_count: self.state.dataset().len(),
                        load_state: self.state.load_state(),
                        selected: self.state.selected_country(),
                        details: self.state.details(),
                    };
                    render_ui(f, &render_state);
                })?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            // Handle events
            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Escape => {
                if self.state.details().is_some() {
                    self.dispatch(Event::DetailsClosed);
                } else if self.input.is_empty() {
                    self.should_quit = true;
                } else {
                    self.input.clear();
                    self.query_changed();
                }
            }
            Action::MoveUp => self.move_cursor(-1),
            Action::MoveDown => self.move_cursor(1),
            Action::PreviousPage => {
                let mut target = *self.state.page_state();
                target.previous();
                self.select_page(target.current_page());
            }
            Action::NextPage => {
                let mut target = *self.state.page_state();
                target.next(self.state.filtered().len());
                self.select_page(target.current_page());
            }
            Action::ToggleSelection => {
                if let Some(index) = self.state.absolute_index(self.cursor) {
                    self.dispatch(Event::RowActivated(index));
                }
            }
            Action::ShowDetails => {
                if let Some(index) = self.state.absolute_index(self.cursor) {
                    self.dispatch(Event::DetailsOpened(index));
                }
            }
            Action::UpdateQuery(c) => {
                if self.input.len() < MAX_QUERY_LEN {
                    self.input.push(c);
                    self.query_changed();
                }
            }
            Action::DeleteChar => {
                if self.input.pop().is_some() {
                    self.query_changed();
                }
            }
            Action::None => {}
        }
    }

    fn dispatch(&mut self, event: Event) {
        self.state.dispatch(event);
        self.needs_redraw = true;
    }

    fn query_changed(&mut self) {
        self.dispatch(Event::QueryChanged(self.input.clone()));
        self.follow_selection();
    }

    fn select_page(&mut self, page: usize) {
        if page != self.state.current_page() {
            self.dispatch(Event::PageSelected(page));
            self.cursor = 0;
        }
    }

    /// Put the cursor on the selected row when it is on the current page
    fn follow_selection(&mut self) {
        let offset = self.state.page_state().offset();
        self.cursor = self
            .state
            .selection()
            .selected_index
            .and_then(|index| index.checked_sub(offset))
            .filter(|row| *row < self.state.visible_page().len())
            .unwrap_or(0);
    }

    fn move_cursor(&mut self, delta: isize) {
        let total = self.state.visible_page().len();
        if total == 0 {
            self.cursor = 0;
            return;
        }

        let old = self.cursor;
        let new = (self.cursor as isize + delta).max(0) as usize;
        self.cursor = new.min(total - 1);

        if old != self.cursor {
            self.needs_redraw = true;
        }
    }
}
