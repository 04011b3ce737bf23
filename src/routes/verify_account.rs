//! Account verification landing page. The emailed link carries the
//! verification token as a query parameter; verification runs on mount and a
//! successful result signs the user in.

use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::client;
use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::components::A;
use web_sys::{UrlSearchParams, window};

#[derive(Clone, Debug, PartialEq)]
enum VerifyStatus {
    Idle,
    MissingToken,
    Pending,
    Success,
    Error(String),
}

#[component]
pub fn VerifyAccountPage() -> impl IntoView {
    let auth = use_auth();
    let (status, set_status) = signal(VerifyStatus::Idle);

    let verify_action = Action::new_local(move |token: &String| {
        let token = token.clone();
        async move { client::verify_account(&token).await }
    });

    Effect::new(move |_| {
        if let Some(result) = verify_action.value().get() {
            match result {
                Ok(identity) => {
                    auth.set_identity(identity);
                    set_status.set(VerifyStatus::Success);
                }
                Err(err) => set_status.set(VerifyStatus::Error(err.to_string())),
            }
        }
    });

    Effect::new(move |_| {
        if status.get() != VerifyStatus::Idle {
            return;
        }

        match extract_token_from_query() {
            Some(token) => {
                set_status.set(VerifyStatus::Pending);
                verify_action.dispatch(token);
            }
            None => set_status.set(VerifyStatus::MissingToken),
        }
    });

    view! {
        <AppShell>
            <div class="max-w-lg mx-auto">
                <h1 class="text-2xl font-bold text-gray-800">"Verify your account"</h1>
                {move || match status.get() {
                    VerifyStatus::Idle | VerifyStatus::Pending => view! {
                        <div class="mt-4">
                            <Spinner />
                            <p class="mt-2 text-sm text-gray-600">"Verifying your account..."</p>
                        </div>
                    }
                    .into_any(),
                    VerifyStatus::Success => view! {
                        <div class="mt-4">
                            <Alert
                                kind=AlertKind::Success
                                message="Your account is verified and you are signed in.".to_string()
                            />
                            <p class="mt-4 text-sm text-gray-600">
                                <A href="/pricing" {..} class="text-violet-700 hover:underline">
                                    "Continue to pricing"
                                </A>
                            </p>
                        </div>
                    }
                    .into_any(),
                    VerifyStatus::MissingToken => view! {
                        <div class="mt-4">
                            <Alert
                                kind=AlertKind::Error
                                message="Missing verification token. Please use the complete link from your email."
                                    .to_string()
                            />
                        </div>
                    }
                    .into_any(),
                    VerifyStatus::Error(message) => view! {
                        <div class="mt-4">
                            <Alert kind=AlertKind::Error message=message />
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </AppShell>
    }
}

fn extract_token_from_query() -> Option<String> {
    let search = window()?.location().search().ok()?;
    let trimmed = search.trim_start_matches('?');
    if trimmed.is_empty() {
        return None;
    }
    let params = UrlSearchParams::new_with_str(trimmed).ok()?;
    params.get("token")
}
