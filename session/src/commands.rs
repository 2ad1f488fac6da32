/// Host actions that operate on the workspace as a whole.
///
/// These only make sense against the top-level environment; the environment
/// pane disables them all while the session is browsing a nested scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkspaceCommand {
    LoadWorkspace,
    SaveWorkspace,
    ClearWorkspace,
    ImportDatasetFromFile,
    ImportDatasetFromUrl,
}

impl WorkspaceCommand {
    /// Every workspace command, in toolbar order.
    pub const ALL: [WorkspaceCommand; 5] = [
        WorkspaceCommand::LoadWorkspace,
        WorkspaceCommand::SaveWorkspace,
        WorkspaceCommand::ClearWorkspace,
        WorkspaceCommand::ImportDatasetFromFile,
        WorkspaceCommand::ImportDatasetFromUrl,
    ];
}

/// Host command registry.
pub trait Commands {
    fn set_enabled(&mut self, command: WorkspaceCommand, enabled: bool);
}
