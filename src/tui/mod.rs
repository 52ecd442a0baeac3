// TUI module for the interactive country table
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;

use anyhow::Result;
pub use app::App;
use terminal::TerminalManager;

use crate::selection::RandomSource;
use crate::state::ExplorerState;

/// Run the interactive TUI until the user quits
pub fn run_interactive<R: RandomSource>(state: ExplorerState<R>) -> Result<()> {
    // Setup terminal (restored on drop as well, in case of panic)
    let mut manager = TerminalManager::new()?;

    let mut app = App::new(state);
    let res = app.run(manager.terminal_mut());

    manager.restore()?;
    res
}
