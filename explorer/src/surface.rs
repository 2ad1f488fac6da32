use crate::Theme;

/// Rendering surface for the explorer grid, implemented by the host's
/// widgets. Each filter call doubles as a re-render request; `redraw` forces
/// a repaint when the pane regains visibility.
pub trait ExplorerView {
    /// Apply style tokens once, at composition time.
    fn apply_theme(&mut self, theme: &Theme);

    fn set_filter(&mut self, text: &str);
    fn set_show_attributes(&mut self, show: bool);
    fn redraw(&mut self);
}
