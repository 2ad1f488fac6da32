//! Mock collaborators for pane tests.
//!
//! Each mock is a cloneable handle over a shared interior: hand one clone to
//! the pane under test and keep another to assert on what the pane did.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::{Commands, Console, Gateway, Notifier, WorkspaceCommand};

/// A request recorded by [`MockGateway`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayRequest {
    SetScope(String),
    SetContextDepth(u32),
    ListScopeNames,
}

/// Gateway that records requests and never replies on its own. Tests post
/// replies through the queue's [`ReplySender`](crate::ReplySender) to control
/// completion order exactly.
#[derive(Clone, Default)]
pub struct MockGateway {
    requests: Rc<RefCell<Vec<GatewayRequest>>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests recorded so far, oldest first.
    pub fn requests(&self) -> Vec<GatewayRequest> {
        self.requests.borrow().clone()
    }
}

impl Gateway for MockGateway {
    fn set_scope(&self, name: &str) {
        self.requests
            .borrow_mut()
            .push(GatewayRequest::SetScope(name.to_owned()));
    }

    fn set_context_depth(&self, depth: u32) {
        self.requests
            .borrow_mut()
            .push(GatewayRequest::SetContextDepth(depth));
    }

    fn list_scope_names(&self) {
        self.requests
            .borrow_mut()
            .push(GatewayRequest::ListScopeNames);
    }
}

/// Notifier that records `(title, message)` pairs.
#[derive(Clone, Default)]
pub struct MockNotifier {
    errors: Rc<RefCell<Vec<(String, String)>>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> Vec<(String, String)> {
        self.errors.borrow().clone()
    }
}

impl Notifier for MockNotifier {
    fn show_error(&self, title: &str, message: &str) {
        self.errors
            .borrow_mut()
            .push((title.to_owned(), message.to_owned()));
    }
}

/// Console that records `(code, execute)` pairs.
#[derive(Clone, Default)]
pub struct MockConsole {
    submissions: Rc<RefCell<Vec<(String, bool)>>>,
}

impl MockConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submissions(&self) -> Vec<(String, bool)> {
        self.submissions.borrow().clone()
    }
}

impl Console for MockConsole {
    fn submit(&self, code: &str, execute: bool) {
        self.submissions
            .borrow_mut()
            .push((code.to_owned(), execute));
    }
}

/// Command registry that records enablement. Commands never touched report
/// `None` so tests can tell "disabled" apart from "left alone".
#[derive(Clone, Default)]
pub struct MockCommands {
    enabled: Rc<RefCell<HashMap<WorkspaceCommand, bool>>>,
}

impl MockCommands {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enabled(&self, command: WorkspaceCommand) -> Option<bool> {
        self.enabled.borrow().get(&command).copied()
    }
}

impl Commands for MockCommands {
    fn set_enabled(&mut self, command: WorkspaceCommand, enabled: bool) {
        self.enabled.borrow_mut().insert(command, enabled);
    }
}
