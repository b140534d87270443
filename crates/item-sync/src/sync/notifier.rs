//! User-facing notifications raised by the sync controller.

/// Where the controller sends messages meant for the user rather than the log
pub trait Notifier: Send + Sync {
    /// Modal prompt asking the user to fix their input
    fn prompt(&self, message: &str);

    /// Error notification; the operation that raised it has been abandoned
    fn notify_error(&self, title: &str, message: &str);
}
