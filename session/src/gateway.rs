use crossbeam_channel::{Receiver, Sender};

use crate::RequestError;

/// Remote session endpoint for scope and call-stack requests.
///
/// Every method is fire-and-forget: the implementation issues the request and
/// later posts exactly one [`Reply`] echoing the request parameters through
/// the [`ReplySender`] it was constructed with. Callers keep their
/// pre-request state until that reply is drained.
pub trait Gateway {
    /// Ask the session to switch the active scope.
    fn set_scope(&self, name: &str);

    /// Ask the session to change the active call-stack depth.
    fn set_context_depth(&self, depth: u32);

    /// Ask the session for the current ordered list of scope names.
    fn list_scope_names(&self);
}

/// Completion of a [`Gateway`] request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    ScopeChanged {
        scope: String,
        outcome: Result<(), RequestError>,
    },
    ContextDepthChanged {
        depth: u32,
        outcome: Result<(), RequestError>,
    },
    ScopeNames {
        outcome: Result<Vec<String>, RequestError>,
    },
}

/// Queue carrying gateway completions back to a pane.
///
/// Replies may be posted from any thread, but they are only applied when the
/// owning pane drains its receiver, so application order is always the
/// queue's arrival order. Requests are uncoordinated: when two are in flight,
/// whichever completion arrives last wins.
pub struct ReplyQueue {
    tx: Sender<Reply>,
    rx: Receiver<Reply>,
}

impl ReplyQueue {
    pub fn new() -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self { tx, rx }
    }

    /// Handle given to the gateway implementation at construction time.
    pub fn sender(&self) -> ReplySender {
        ReplySender {
            tx: self.tx.clone(),
        }
    }

    /// Handle given to the pane that owns this queue.
    pub fn receiver(&self) -> Receiver<Reply> {
        self.rx.clone()
    }
}

impl Default for ReplyQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Posting half of a [`ReplyQueue`].
#[derive(Clone)]
pub struct ReplySender {
    tx: Sender<Reply>,
}

impl ReplySender {
    /// Post a completion. A torn-down pane drops its receiver, and there is
    /// no cancellation path for in-flight requests, so a failed send is
    /// discarded rather than treated as an error.
    pub fn post(&self, reply: Reply) {
        if self.tx.send(reply).is_err() {
            tracing::trace!("reply dropped: pane no longer listening");
        }
    }
}
