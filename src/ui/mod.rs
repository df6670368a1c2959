//! Terminal output helpers
//!
//! Uses `cliclack` for styled output and prompts on a terminal, with plain
//! text fallback when piped or running in CI.

mod context;
mod output;
mod prompts;
mod theme;

pub use context::UiContext;
pub use output::{remark, step_ok, step_ok_detail, step_warn_hint};
pub use prompts::confirm;
pub use theme::{init_theme, PathCacheTheme};
