/// Host surface for user-visible error notifications.
///
/// This is the only error surface the panes use: a failed remote request is
/// shown to the user and the pane carries on with its previous state.
pub trait Notifier {
    fn show_error(&self, title: &str, message: &str);
}
