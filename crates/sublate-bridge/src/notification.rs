/// Severity of a transient notification, driving how the frontend presents
/// it.
#[derive(Debug, Clone)]
pub enum NotificationType {
    /// Neutral status information.
    Info,
    /// An operation completed successfully.
    Success,
    /// Something the user should know about that does not block them.
    Warning,
    /// A failure that affects what the user asked for.
    Error,
}

/// A transient, toast-style notification shown to the user and then
/// dismissed.
#[derive(Debug, Clone)]
pub struct NotificationMessage {
    /// Severity of the notification.
    pub notification_type: NotificationType,
    /// Text shown to the user.
    pub message: String,
}

/// User input fields the backend can attach an inline validation error to.
///
/// Rejected input is reported at the offending field and stays visible until
/// the input changes, unlike a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    /// The video link entry field on the main screen.
    VideoLink,
    /// The API key entry field in the settings.
    ApiKey,
}
