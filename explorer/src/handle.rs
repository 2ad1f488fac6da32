use serde::{Deserialize, Serialize};

/// Opaque reference to a remote data structure, as reported by the session
/// when an explorer is opened. The explorer never interprets it; the grid
/// widget uses it to address the object in its own requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectHandle {
    pub id: String,
    pub name: String,
    pub title: String,
}
