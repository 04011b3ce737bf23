//! Checkout URL and popup placement, kept pure so the exact strings are
//! testable on the host.

pub const CHECKOUT_WINDOW_WIDTH: u32 = 800;
pub const CHECKOUT_WINDOW_HEIGHT: u32 = 600;

/// Builds the hosted checkout URL. The paystation identifies the session by
/// the access token alone.
pub fn checkout_url(base_url: &str, access_token: &str) -> String {
    format!("{}?access_token={access_token}", base_url.trim())
}

/// Window-features string for a fixed-size, centered, chromeless popup.
pub fn window_features(screen_width: u32, screen_height: u32) -> String {
    let left = screen_width.saturating_sub(CHECKOUT_WINDOW_WIDTH) / 2;
    let top = screen_height.saturating_sub(CHECKOUT_WINDOW_HEIGHT) / 2;
    [
        format!("width={CHECKOUT_WINDOW_WIDTH}"),
        format!("height={CHECKOUT_WINDOW_HEIGHT}"),
        format!("left={left}"),
        format!("top={top}"),
        "resizable=yes".to_string(),
        "scrollbars=yes".to_string(),
        "status=yes".to_string(),
        "toolbar=no".to_string(),
        "menubar=no".to_string(),
        "location=no".to_string(),
    ]
    .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_appends_the_access_token() {
        assert_eq!(
            checkout_url("https://pay.example/checkout/", "tok123"),
            "https://pay.example/checkout/?access_token=tok123"
        );
    }

    #[test]
    fn popup_is_centered_on_the_screen() {
        let features = window_features(1920, 1080);
        assert!(features.contains("width=800"));
        assert!(features.contains("height=600"));
        assert!(features.contains("left=560"));
        assert!(features.contains("top=240"));
        assert!(features.contains("toolbar=no"));
    }

    #[test]
    fn small_screens_clamp_position_to_zero() {
        let features = window_features(640, 480);
        assert!(features.contains("left=0"));
        assert!(features.contains("top=0"));
    }
}
