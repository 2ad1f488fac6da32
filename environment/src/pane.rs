use crossbeam_channel::Receiver;
use session::{Commands, Console, Gateway, Notifier, Reply, WorkspaceCommand};
use state::{PaneState, ViewState};

use crate::{
    surface::EnvironmentView, symbols::to_symbol_name, types::display_scope_name, CallFrame,
    EnvironmentObject, Scope, Theme,
};

/// Whether workspace-wide commands apply: only at the top level of the call
/// stack, never while browsing a nested scope.
pub fn workspace_commands_enabled(context_depth: u32) -> bool {
    context_depth == 0
}

/// Scope snapshot reported by the session at attach time.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentState {
    pub scope_name: String,
    pub scopes: Vec<String>,
}

/// Presenter for the environment pane.
///
/// Mediates between the remote session and the host's widgets. Requests to
/// the session are fire-and-forget; their completions arrive on the reply
/// queue and are applied, in arrival order, by
/// [`EnvironmentPane::process_replies`] on the thread that owns the pane.
/// Until a completion is applied the pane keeps showing its pre-request
/// state.
pub struct EnvironmentPane {
    gateway: Box<dyn Gateway>,
    replies: Receiver<Reply>,
    console: Box<dyn Console>,
    notifier: Box<dyn Notifier>,
    commands: Box<dyn Commands>,
    view: Box<dyn EnvironmentView>,

    scope_name: String,
    context_depth: u32,
    scopes: Vec<Scope>,
    view_state: ViewState,
}

impl EnvironmentPane {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        gateway: Box<dyn Gateway>,
        replies: Receiver<Reply>,
        console: Box<dyn Console>,
        notifier: Box<dyn Notifier>,
        commands: Box<dyn Commands>,
        mut view: Box<dyn EnvironmentView>,
        theme: Theme,
        initial: EnvironmentState,
    ) -> Self {
        view.apply_theme(&theme);

        let scopes: Vec<Scope> = initial.scopes.into_iter().map(Scope::new).collect();
        view.set_scope_menu(&scopes);
        view.set_environment_name(display_scope_name(&initial.scope_name));

        Self {
            gateway,
            replies,
            console,
            notifier,
            commands,
            view,
            scope_name: initial.scope_name,
            context_depth: 0,
            scopes,
            view_state: ViewState::new(),
        }
    }

    /// Ask the session to switch the active scope. The pane keeps showing
    /// the current scope until the matching reply arrives.
    #[tracing::instrument(skip(self))]
    pub fn change_scope(&self, target: &str) {
        tracing::debug!("requesting scope change");
        self.gateway.set_scope(target);
    }

    /// Ask the session to move to another call-stack depth.
    #[tracing::instrument(skip(self))]
    pub fn change_context_depth(&self, new_depth: u32) {
        tracing::debug!("requesting context depth change");
        self.gateway.set_context_depth(new_depth);
    }

    /// The set of available scopes changed behind our back, e.g. a package
    /// was attached or detached. Fetch the full list again and rebuild the
    /// menu wholesale when it arrives.
    #[tracing::instrument(skip(self))]
    pub fn on_scope_set_changed(&self) {
        tracing::debug!("requesting scope names");
        self.gateway.list_scope_names();
    }

    /// Apply queued gateway completions in arrival order. Called from the
    /// thread that owns the pane.
    pub fn process_replies(&mut self) {
        let pending: Vec<Reply> = self.replies.try_iter().collect();
        for reply in pending {
            self.handle_reply(reply);
        }
    }

    #[tracing::instrument(skip(self))]
    fn handle_reply(&mut self, reply: Reply) {
        tracing::debug!("handling gateway reply");
        match reply {
            Reply::ScopeChanged { scope, outcome } => match outcome {
                Ok(()) => self.set_environment_name(scope),
                Err(e) => self
                    .notifier
                    .show_error("Error changing environment", e.message()),
            },
            Reply::ContextDepthChanged { depth, outcome } => match outcome {
                Ok(()) => self.set_context_depth(depth),
                Err(e) => self
                    .notifier
                    .show_error("Error opening call frame", e.message()),
            },
            Reply::ScopeNames { outcome } => match outcome {
                Ok(names) => {
                    self.scopes = names.into_iter().map(Scope::new).collect();
                    self.view.set_scope_menu(&self.scopes);
                }
                Err(e) => self
                    .notifier
                    .show_error("Error listing environments", e.message()),
            },
        }
    }

    pub fn add_object(&mut self, object: EnvironmentObject) {
        self.view.add_object(object);
    }

    pub fn add_objects(&mut self, objects: Vec<EnvironmentObject>) {
        self.view.add_objects(objects);
    }

    pub fn remove_object(&mut self, name: &str) {
        self.view.remove_object(name);
    }

    /// Empty the list and reset the recorded layout. A cleared pane has
    /// nothing expanded and is scrolled to the top, and that reset itself
    /// still needs persisting.
    pub fn clear_objects(&mut self) {
        self.view.clear_objects();
        self.view_state.clear();
    }

    /// Adopt `name` as the active scope and re-render its display label.
    pub fn set_environment_name(&mut self, name: impl Into<String>) {
        self.scope_name = name.into();
        self.view
            .set_environment_name(display_scope_name(&self.scope_name));
    }

    /// Record the call-stack depth and flip workspace-wide command
    /// enablement to match: nested scopes cannot load, save, clear, or
    /// import into the workspace.
    pub fn set_context_depth(&mut self, depth: u32) {
        self.context_depth = depth;
        self.view.set_context_depth(depth);

        let enabled = workspace_commands_enabled(depth);
        for command in WorkspaceCommand::ALL {
            self.commands.set_enabled(command, enabled);
        }
    }

    pub fn set_call_frames(&mut self, frames: Vec<CallFrame>) {
        self.view.set_call_frames(frames);
    }

    /// Execution position reported while the session steps through the
    /// browsed function; the list highlights that line.
    pub fn set_browse_position(&mut self, line: usize) {
        self.view.set_browse_position(line);
    }

    /// Filter text from the search box, forwarded verbatim. An empty string
    /// means no filtering.
    pub fn set_filter_text(&mut self, text: &str) {
        self.view.set_filter_text(text);
    }

    pub fn redraw(&mut self) {
        self.view.redraw();
    }

    /// Open the named object in the host's data viewer by submitting
    /// `View(<name>)` to the console.
    pub fn view_object(&self, name: &str) {
        self.execute_function_for_object("View", name);
    }

    fn execute_function_for_object(&self, function: &str, name: &str) {
        let code = format!("{function}({})", to_symbol_name(name));
        self.console.submit(&code, true);
    }

    /// User expanded an object in the list.
    pub fn on_object_expanded(&mut self, name: impl Into<String>) {
        self.view_state.expand(name);
    }

    /// User collapsed an object in the list.
    pub fn on_object_collapsed(&mut self, name: &str) {
        self.view_state.collapse(name);
    }

    /// User scrolled the list.
    pub fn on_scrolled(&mut self, position: usize) {
        self.view_state.set_scroll_position(position);
    }

    /// Replace the layout wholesale from persisted values and push both
    /// parts to the view. A load, not an edit: the dirty flag is untouched.
    pub fn restore_view_state(&mut self, expanded: &[String], scroll_position: usize) {
        self.view_state
            .restore_from(expanded.iter().cloned(), scroll_position);
        self.view.set_expanded_objects(expanded);
        self.view.set_scroll_position(scroll_position);
    }

    /// [`EnvironmentPane::restore_view_state`], reading a persisted document
    /// entry.
    pub fn restore_from_persisted(&mut self, pane: &PaneState) {
        self.restore_view_state(&pane.expanded, pane.scroll_position);
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    /// Acknowledge that the host persisted the current layout.
    pub fn mark_view_state_clean(&mut self) {
        self.view_state.mark_clean();
    }

    /// Raw name of the active scope.
    pub fn scope_name(&self) -> &str {
        &self.scope_name
    }

    /// Display label for the active scope.
    pub fn scope_label(&self) -> &str {
        display_scope_name(&self.scope_name)
    }

    pub fn context_depth(&self) -> u32 {
        self.context_depth
    }

    /// Scopes currently offered by the selector menu.
    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }
}
