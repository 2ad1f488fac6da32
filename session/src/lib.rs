//! Collaborator contracts between the workbench panes and their host.
//!
//! The panes in `environment` and `explorer` never talk to widgets or sockets
//! directly. The host hands them implementations of the traits in this crate
//! (remote session gateway, interactive console, error notifier, workspace
//! command registry) and drains each pane's typed reply queue on the thread
//! that owns the pane.

mod commands;
mod console;
mod error;
mod gateway;
mod notify;

pub mod testing;

pub use commands::{Commands, WorkspaceCommand};
pub use console::Console;
pub use error::RequestError;
pub use gateway::{Gateway, Reply, ReplyQueue, ReplySender};
pub use notify::Notifier;
