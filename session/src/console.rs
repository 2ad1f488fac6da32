/// Channel to the host's interactive console.
pub trait Console {
    /// Submit `code` to the console. When `execute` is true the console runs
    /// it immediately, otherwise the code is left on the input line for the
    /// user to edit. Fire-and-forget: no result comes back through this
    /// trait.
    fn submit(&self, code: &str, execute: bool);
}
