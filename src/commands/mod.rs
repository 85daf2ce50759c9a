//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod mine;
pub mod utils;

// Re-export main command functions
pub use mine::{execute_mine, mine_trace, validate_args, MineArgs};
pub use utils::{display_version, inspect_trace};
