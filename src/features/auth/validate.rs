//! Local form validation. These checks run before any network call; a local
//! failure must never produce an HTTP request.

use crate::app_lib::AppError;

/// Minimum accepted password length, matching the server's policy.
const MIN_PASSWORD_LEN: usize = 6;
/// Reset tokens shorter than this cannot be real; reject before the form shows.
const MIN_RESET_TOKEN_LEN: usize = 10;

pub fn validate_email(email: &str) -> Result<(), AppError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AppError::Validation("Email is required".to_string()));
    }
    if !email.contains('@') {
        return Err(AppError::Validation(
            "Email address looks invalid".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_new_password(password: &str, confirmation: &str) -> Result<(), AppError> {
    if password != confirmation {
        return Err(AppError::Validation("Passwords do not match".to_string()));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(
            "Password must be at least 6 characters long".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_reset_token(token: Option<&str>) -> Result<String, AppError> {
    let token = token.map(str::trim).unwrap_or_default();
    if token.is_empty() {
        return Err(AppError::Validation(
            "Invalid or missing reset token. Please use the complete link from your password reset email."
                .to_string(),
        ));
    }
    if token.len() < MIN_RESET_TOKEN_LEN {
        return Err(AppError::Validation(
            "Invalid reset token format. Please use the complete link from your email.".to_string(),
        ));
    }
    Ok(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_password_is_rejected_locally() {
        let result = validate_new_password("12345", "12345");
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn mismatched_passwords_are_rejected_before_length() {
        let result = validate_new_password("abcdef", "abcdeg");
        assert_eq!(
            result,
            Err(AppError::Validation("Passwords do not match".to_string()))
        );
    }

    #[test]
    fn matching_long_password_passes() {
        assert_eq!(validate_new_password("abcdef", "abcdef"), Ok(()));
    }

    #[test]
    fn email_needs_an_at_sign() {
        assert!(validate_email("parent@example.com").is_ok());
        assert!(validate_email("parent.example.com").is_err());
        assert!(validate_email("   ").is_err());
    }

    #[test]
    fn reset_token_shape_is_checked() {
        assert!(validate_reset_token(None).is_err());
        assert!(validate_reset_token(Some("short")).is_err());
        assert_eq!(
            validate_reset_token(Some("  tok-1234567890  ")),
            Ok("tok-1234567890".to_string())
        );
    }
}
