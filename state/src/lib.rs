//! The state module handles persisting how the workbench panes were laid out
//! between sessions: which objects were expanded and where each pane was
//! scrolled to.

use std::{
    io::Read,
    io::Write,
    path::{Path, PathBuf},
};

use eyre::Context;
use serde::{Deserialize, Serialize};

mod view;

pub use view::ViewState;

pub struct StateManager {
    save_path: PathBuf,
    current: Persistence,
}

impl StateManager {
    pub fn new(path: impl Into<PathBuf>) -> eyre::Result<Self> {
        let path = path.into();
        let span = tracing::debug_span!("StateManager", state_path = %path.display());
        let _guard = span.enter();

        tracing::debug!("attempting to load state");
        match crate::load_from(&path) {
            Ok(state) => {
                tracing::debug!("state loaded");
                Ok(Self {
                    save_path: path,
                    current: state,
                })
            }
            Err(e) => {
                // TODO: tell a missing file apart from a corrupt one
                tracing::debug!(error = %e, "loading state file");
                let state = Persistence::default();
                crate::save_to(&state, &path).wrap_err("saving state file")?;

                Ok(Self {
                    save_path: path,
                    current: state,
                })
            }
        }
    }

    pub fn load(mut self) -> eyre::Result<Self> {
        let state = crate::load_from(&self.save_path).wrap_err("loading state")?;
        self.current = state;
        Ok(self)
    }

    pub fn save(self) -> eyre::Result<Self> {
        crate::save_to(&self.current, &self.save_path).wrap_err("saving state")?;
        Ok(self)
    }

    pub fn current(&self) -> &Persistence {
        &self.current
    }

    /// Record one pane's layout, replacing any previous entry for the same
    /// pane name.
    pub fn record_pane(&mut self, pane: PaneState) {
        match self.current.panes.iter_mut().find(|p| p.pane == pane.pane) {
            Some(existing) => *existing = pane,
            None => self.current.panes.push(pane),
        }
    }

    /// Look up the persisted layout for a pane by name.
    pub fn pane(&self, name: &str) -> Option<&PaneState> {
        self.current.panes.iter().find(|p| p.pane == name)
    }
}

/// State that is persisted
#[derive(Default, Serialize, Deserialize, Debug)]
pub struct Persistence {
    pub panes: Vec<PaneState>,
    pub version: String,
}

/// State that is persisted per pane
#[derive(Default, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PaneState {
    pub pane: String,
    pub expanded: Vec<String>,
    pub scroll_position: usize,
}

pub fn save(state: &Persistence, writer: impl Write) -> eyre::Result<()> {
    serde_json::to_writer(writer, state).context("serialising pane state")?;
    Ok(())
}

pub fn save_to(state: &Persistence, path: impl AsRef<Path>) -> eyre::Result<()> {
    let f = std::fs::File::create(path).context("creating file for saving")?;
    save(state, &f).context("saving state")?;
    Ok(())
}

pub fn load(reader: impl Read) -> eyre::Result<Persistence> {
    let st = serde_json::from_reader(reader).context("reading pane state")?;
    Ok(st)
}

pub fn load_from(path: impl AsRef<Path>) -> eyre::Result<Persistence> {
    let path = path.as_ref();
    let f = std::fs::File::open(path)
        .with_context(|| format!("opening save state {}", path.display()))?;
    let state = load(f).context("reading from state file")?;
    Ok(state)
}

/// Default location of the state document for the named application.
pub fn default_state_path(app: &str) -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(app)
        .join("state.json")
}

#[cfg(test)]
mod tests {
    use super::{default_state_path, PaneState, StateManager};

    #[test]
    fn missing_file_initialises_empty_state() -> eyre::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("state.json");

        let manager = StateManager::new(&path)?;
        assert!(manager.current().panes.is_empty());
        // the default document is written out so the next launch finds it
        assert!(path.exists());
        Ok(())
    }

    #[test]
    fn pane_entries_round_trip() -> eyre::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("state.json");

        let mut manager = StateManager::new(&path)?;
        manager.record_pane(PaneState {
            pane: "environment".to_string(),
            expanded: vec!["fit".to_string(), "mtcars".to_string()],
            scroll_position: 120,
        });
        manager.save()?;

        let manager = StateManager::new(&path)?;
        let pane = manager.pane("environment").unwrap();
        assert_eq!(pane.expanded, vec!["fit".to_string(), "mtcars".to_string()]);
        assert_eq!(pane.scroll_position, 120);
        Ok(())
    }

    #[test]
    fn recording_a_pane_twice_replaces_the_entry() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = StateManager::new(dir.path().join("state.json")).unwrap();

        manager.record_pane(PaneState {
            pane: "environment".to_string(),
            expanded: vec!["a".to_string()],
            scroll_position: 1,
        });
        manager.record_pane(PaneState {
            pane: "environment".to_string(),
            expanded: vec!["b".to_string()],
            scroll_position: 2,
        });

        assert_eq!(manager.current().panes.len(), 1);
        assert_eq!(
            manager.pane("environment").unwrap().expanded,
            vec!["b".to_string()]
        );
    }

    #[test]
    fn unknown_pane_reports_none() {
        let dir = tempfile::tempdir().unwrap();
        let manager = StateManager::new(dir.path().join("state.json")).unwrap();
        assert!(manager.pane("explorer").is_none());
    }

    #[test]
    fn default_state_path_is_under_the_app_directory() {
        let path = default_state_path("workbench");
        assert!(path.ends_with("workbench/state.json"));
    }
}
