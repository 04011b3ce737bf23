//! End-to-end checkout attempt: blocker probe, popup, message subscription,
//! closure poll and deadline, wired into the outcome race.

use gloo_timers::future::{IntervalStream, TimeoutFuture};
use leptos::logging;

use super::checkout::checkout_url;
use super::plans::{PaymentPlan, PaymentSessionRequest};
use super::popup;
use super::session::{PaymentOutcome, await_outcome};
use crate::app_lib::{AppError, config::AppConfig};
use crate::features::auth::types::Identity;

/// How often the popup is polled for user closure (milliseconds).
const CLOSURE_POLL_MS: u32 = 1_000;
/// How long an attempt may stay unresolved before it times out (15 minutes).
const PAYMENT_DEADLINE_MS: u32 = 900_000;

/// Runs one checkout attempt to its terminal outcome. Returns `Ok(())` on
/// success; every failure maps to an `AppError` the pricing page can render.
pub async fn start_payment(identity: &Identity, plan: &PaymentPlan) -> Result<(), AppError> {
    let config = AppConfig::load();

    // Probe before opening anything real so a blocked browser gets the
    // remediation dialog instead of a silently missing window.
    if popup::popups_blocked() {
        return Err(AppError::PopupBlocked);
    }

    let session = PaymentSessionRequest::for_plan(identity, plan);
    logging::log!(
        "checkout attempt: user={} plan={} amount={} {}",
        session.user_id,
        session.plan_id,
        session.amount_cents,
        session.currency
    );

    let url = checkout_url(&config.checkout_base_url, &config.checkout_access_token);
    let window = popup::open_checkout(&url)?;
    let (_subscription, events) = popup::provider_messages(&config.provider_origin)?;

    let outcome = await_outcome(
        &window,
        events,
        IntervalStream::new(CLOSURE_POLL_MS),
        TimeoutFuture::new(PAYMENT_DEADLINE_MS),
    )
    .await;

    match outcome {
        PaymentOutcome::Success => Ok(()),
        PaymentOutcome::Failed(reason) => Err(AppError::PaymentFailed(reason)),
        PaymentOutcome::TimedOut => Err(AppError::PaymentTimeout),
    }
}
