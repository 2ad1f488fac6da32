/// Style tokens for the explorer's footer widgets, handed to the constructor
/// instead of being looked up from process-wide resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub footer_class: String,
    pub checkbox_class: String,
    pub filter_class: String,
    /// Height reserved for the footer row below the grid.
    pub footer_height_px: u32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            footer_class: "object-explorer-footer".to_string(),
            checkbox_class: "object-explorer-checkbox".to_string(),
            filter_class: "object-explorer-filter".to_string(),
            footer_height_px: 24,
        }
    }
}
