/// Style tokens for the pane's widgets, handed to the constructor instead of
/// being looked up from process-wide resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Class applied to the scope label next to the environment menu.
    pub name_label_class: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name_label_class: "environment-name-label".to_string(),
        }
    }
}
