//! The environment pane: the variables and scopes of an attached session.

mod pane;
mod surface;
mod symbols;
mod theme;
mod types;

pub use pane::{workspace_commands_enabled, EnvironmentPane, EnvironmentState};
pub use surface::EnvironmentView;
pub use symbols::to_symbol_name;
pub use theme::Theme;
pub use types::{display_scope_name, CallFrame, EnvironmentObject, Scope};
