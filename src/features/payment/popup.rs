//! Browser glue for the checkout popup: the blocker probe, the popup window
//! handle, and the provider message subscription. Everything here is a thin
//! adapter over `web_sys`; the decision logic lives in `checkout`, `messages`
//! and `session`.

use futures::channel::mpsc::{UnboundedReceiver, unbounded};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use web_sys::{EventTarget, MessageEvent, Window};

use super::checkout::window_features;
use super::messages::{self, ProviderEvent};
use super::session::CheckoutHandle;
use crate::app_lib::AppError;

const CHECKOUT_WINDOW_NAME: &str = "TinyNinzaCheckout";

/// Handle to the opened checkout window.
pub struct PopupWindow {
    window: Window,
}

impl CheckoutHandle for PopupWindow {
    fn is_closed(&self) -> bool {
        self.window.closed().unwrap_or(true)
    }

    fn close(&self) {
        let _ = self.window.close();
    }
}

/// Probes whether the browser allows popups by opening and immediately
/// closing a 1x1 window. Must run inside the click handler so the probe and
/// the real checkout window share the same user-activation grant.
pub fn popups_blocked() -> bool {
    let Some(window) = web_sys::window() else {
        return true;
    };
    match window.open_with_url_and_target_and_features(
        "",
        "_blank",
        "width=1,height=1,left=0,top=0",
    ) {
        Ok(Some(probe)) => {
            let _ = probe.close();
            false
        }
        _ => true,
    }
}

/// Opens the hosted checkout in a centered popup and focuses it.
pub fn open_checkout(url: &str) -> Result<PopupWindow, AppError> {
    let opener = web_sys::window().ok_or(AppError::PopupBlocked)?;
    let (screen_width, screen_height) = screen_size(&opener);
    let popup = opener
        .open_with_url_and_target_and_features(
            url,
            CHECKOUT_WINDOW_NAME,
            &window_features(screen_width, screen_height),
        )
        .map_err(|_| AppError::PopupBlocked)?
        .ok_or(AppError::PopupBlocked)?;
    let _ = popup.focus();
    Ok(PopupWindow { window: popup })
}

fn screen_size(window: &Window) -> (u32, u32) {
    let screen = window.screen().ok();
    let width = screen
        .as_ref()
        .and_then(|screen| screen.width().ok())
        .unwrap_or(0);
    let height = screen
        .as_ref()
        .and_then(|screen| screen.height().ok())
        .unwrap_or(0);
    (width.max(0) as u32, height.max(0) as u32)
}

/// Keeps the `message` listener registered; dropping it removes the listener.
pub struct MessageSubscription {
    target: EventTarget,
    listener: Closure<dyn FnMut(MessageEvent)>,
}

impl Drop for MessageSubscription {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("message", self.listener.as_ref().unchecked_ref());
    }
}

/// Subscribes to cross-window messages and forwards the ones that parse as
/// provider events from the given origin. Foreign and malformed messages are
/// dropped inside the listener.
pub fn provider_messages(
    provider_origin: &str,
) -> Result<(MessageSubscription, UnboundedReceiver<ProviderEvent>), AppError> {
    let window = web_sys::window()
        .ok_or_else(|| AppError::Config("Browser window is unavailable.".to_string()))?;
    let (sender, receiver) = unbounded();

    let origin_filter = provider_origin.to_string();
    let listener = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
        let Some(payload) = message_payload(&event.data()) else {
            return;
        };
        if let Some(signal) = messages::provider_event(&event.origin(), &payload, &origin_filter) {
            // The receiver may already be gone once the race has resolved.
            let _ = sender.unbounded_send(signal);
        }
    });

    window
        .add_event_listener_with_callback("message", listener.as_ref().unchecked_ref())
        .map_err(|_| AppError::Config("Failed to subscribe to payment messages.".to_string()))?;

    let subscription = MessageSubscription {
        target: EventTarget::from(window),
        listener,
    };
    Ok((subscription, receiver))
}

/// Providers post either a JSON string or a structured object; normalize both
/// to a JSON string for the parser.
fn message_payload(data: &JsValue) -> Option<String> {
    if let Some(text) = data.as_string() {
        return Some(text);
    }
    js_sys::JSON::stringify(data)
        .ok()
        .and_then(|json| json.as_string())
}
