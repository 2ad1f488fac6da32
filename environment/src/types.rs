/// Display label for a scope name: the global environment gets a friendly
/// label, every other scope is shown exactly as the session reports it.
pub fn display_scope_name(name: &str) -> &str {
    if name == "R_GlobalEnv" {
        "Global"
    } else {
        name
    }
}

/// A named variable-binding environment in the attached session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    pub name: String,
}

impl Scope {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn display_name(&self) -> &str {
        display_scope_name(&self.name)
    }
}

/// One row of the environment list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentObject {
    pub name: String,
    pub kind: String,
    pub value: String,
    pub description: String,
}

/// One entry of the call stack shown while the session is paused inside a
/// function. `depth` is the value to request when the user opens this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallFrame {
    pub depth: u32,
    pub function: String,
    pub summary: String,
    pub line: usize,
}
