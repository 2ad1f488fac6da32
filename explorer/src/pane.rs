use crate::{surface::ExplorerView, ObjectHandle, Theme};

/// Filter settings consumed by the grid's render step. The presenter does
/// not interpret the text: it is forwarded verbatim, and an empty string
/// means no filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub text: String,
    pub show_attributes: bool,
}

/// Presenter for an object explorer pane. One explorer is opened per object;
/// it holds the object's handle, the current filter settings, and the grid
/// surface they are pushed to.
pub struct ObjectExplorer {
    handle: ObjectHandle,
    view: Box<dyn ExplorerView>,
    filter: FilterState,
}

impl ObjectExplorer {
    pub fn new(handle: ObjectHandle, mut view: Box<dyn ExplorerView>, theme: Theme) -> Self {
        view.apply_theme(&theme);

        Self {
            handle,
            view,
            filter: FilterState::default(),
        }
    }

    /// The object this explorer was opened for.
    pub fn handle(&self) -> &ObjectHandle {
        &self.handle
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Update the free-text filter and re-render. No validation: whatever
    /// the user typed goes straight to the grid.
    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter.text = text.into();
        self.view.set_filter(&self.filter.text);
    }

    /// Toggle attribute rows and re-render.
    pub fn set_show_attributes(&mut self, show: bool) {
        self.filter.show_attributes = show;
        self.view.set_show_attributes(show);
    }

    /// The pane regained visibility. Layout may not have kept the grid
    /// current while it was hidden, so force a repaint.
    #[tracing::instrument(skip(self), fields(object = %self.handle.name))]
    pub fn activate(&mut self) {
        tracing::debug!("redrawing grid");
        self.view.redraw();
    }

    /// The pane was hidden. Nothing to release: the grid's subscriptions
    /// belong to the host widgets.
    pub fn deactivate(&mut self) {
        tracing::trace!(object = %self.handle.name, "explorer deactivated");
    }
}
