//! The object explorer pane: a navigable grid over one remote data
//! structure.

mod handle;
mod pane;
mod surface;
mod theme;

pub use handle::ObjectHandle;
pub use pane::{FilterState, ObjectExplorer};
pub use surface::ExplorerView;
pub use theme::Theme;
