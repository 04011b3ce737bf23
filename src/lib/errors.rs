//! User-facing error taxonomy. Every remote failure is mapped to one of these
//! kinds at the call site and returned as a value; nothing is retried
//! automatically. Messages are safe to render inline and never carry tokens.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    Config(String),
    Validation(String),
    InvalidCredentials,
    /// Account, verification token, or reset token was not found; carries the
    /// operation-specific message.
    NotFound(String),
    AlreadyExists,
    /// Invalid or expired verification/reset token.
    InvalidToken(String),
    ServerError,
    Connectivity,
    /// HTTP failure with no dedicated mapping for the operation.
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
    PopupBlocked,
    PaymentFailed(String),
    PaymentTimeout,
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Validation(message) => write!(formatter, "{message}"),
            AppError::InvalidCredentials => write!(formatter, "Invalid email or password"),
            AppError::NotFound(message) => write!(formatter, "{message}"),
            AppError::AlreadyExists => {
                write!(formatter, "An account with this email already exists")
            }
            AppError::InvalidToken(message) => write!(formatter, "{message}"),
            AppError::ServerError => {
                write!(formatter, "Server error. Please try again later.")
            }
            AppError::Connectivity => write!(
                formatter,
                "Unable to connect to the server. Please check your internet connection and try again."
            ),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => write!(formatter, "Request error: {message}"),
            AppError::PopupBlocked => write!(
                formatter,
                "Popup blocker is preventing the payment window from opening. Please disable your popup blocker and try again."
            ),
            AppError::PaymentFailed(reason) => write!(formatter, "{reason}"),
            AppError::PaymentTimeout => {
                write!(formatter, "Payment timeout - please try again")
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn credential_errors_render_user_facing_messages() {
        assert_eq!(
            AppError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
        assert_eq!(
            AppError::AlreadyExists.to_string(),
            "An account with this email already exists"
        );
    }

    #[test]
    fn http_error_includes_status_and_message() {
        let error = AppError::Http {
            status: 418,
            message: "teapot".to_string(),
        };
        assert_eq!(error.to_string(), "Request failed (418): teapot");
    }

    #[test]
    fn payment_errors_are_distinguishable() {
        assert_ne!(
            AppError::PopupBlocked,
            AppError::PaymentFailed("Payment failed".to_string())
        );
        assert_eq!(
            AppError::PaymentTimeout.to_string(),
            "Payment timeout - please try again"
        );
    }
}
