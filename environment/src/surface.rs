use crate::{CallFrame, EnvironmentObject, Scope, Theme};

/// Rendering surface for the environment pane, implemented by the host's
/// widgets.
///
/// The pane pushes state through this trait and never reads anything back. A
/// surface is expected to refresh itself as part of each call; `redraw` is
/// for the host to force a repaint after a layout change.
pub trait EnvironmentView {
    /// Apply style tokens once, at composition time.
    fn apply_theme(&mut self, theme: &Theme);

    fn add_object(&mut self, object: EnvironmentObject);
    fn add_objects(&mut self, objects: Vec<EnvironmentObject>);
    fn remove_object(&mut self, name: &str);
    fn clear_objects(&mut self);

    /// Label shown for the active scope, already display-translated.
    fn set_environment_name(&mut self, name: &str);
    fn set_context_depth(&mut self, depth: u32);
    fn set_call_frames(&mut self, frames: Vec<CallFrame>);

    /// Line currently executing within the browsed function.
    fn set_browse_position(&mut self, line: usize);

    /// Entries of the scope selector menu, in session order.
    fn set_scope_menu(&mut self, scopes: &[Scope]);

    fn set_filter_text(&mut self, text: &str);
    fn set_expanded_objects(&mut self, names: &[String]);
    fn set_scroll_position(&mut self, position: usize);

    fn redraw(&mut self);
}
