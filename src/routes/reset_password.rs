//! Password reset in two modes on one route: without a `token` query
//! parameter it requests a reset email; with one it sets the new password.

use crate::app_lib::AppError;
use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::{client, validate};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use web_sys::{UrlSearchParams, window};

#[derive(Clone)]
struct ApplyInput {
    token: String,
    password: String,
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    match extract_token_from_query() {
        Some(token) => view! {
            <AppShell>
                <ApplyResetForm token=token />
            </AppShell>
        }
        .into_any(),
        None => view! {
            <AppShell>
                <RequestResetForm />
            </AppShell>
        }
        .into_any(),
    }
}

#[component]
fn RequestResetForm() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let request_action = Action::new_local(move |email: &String| {
        let email = email.clone();
        async move { client::request_password_reset(&email).await }
    });

    let sent = Signal::derive(move || {
        matches!(request_action.value().get(), Some(Ok(())))
    });

    Effect::new(move |_| {
        if let Some(Err(err)) = request_action.value().get() {
            set_error.set(Some(err));
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let email_value = email.get_untracked().trim().to_string();
        if let Err(err) = validate::validate_email(&email_value) {
            set_error.set(Some(err));
            return;
        }

        request_action.dispatch(email_value);
    };

    view! {
        <div class="max-w-sm mx-auto">
            <Show
                when=move || !sent.get()
                fallback=|| {
                    view! {
                        <Alert
                            kind=AlertKind::Success
                            message="Password reset link sent. Check your email and follow the link to choose a new password."
                                .to_string()
                        />
                    }
                }
            >
                <form on:submit=on_submit>
                    <h1 class="text-2xl font-bold text-gray-800 mb-4">"Reset your password"</h1>
                    <p class="text-sm text-gray-600 mb-6">
                        "Enter your email and we'll send you a link to reset your password."
                    </p>
                    <div class="mb-5">
                        <label class=Theme::LABEL for="email">
                            "Your email"
                        </label>
                        <input
                            id="email"
                            type="email"
                            class=Theme::INPUT
                            autocomplete="email"
                            placeholder="name@inbox.im"
                            required
                            on:input=move |event| set_email.set(event_target_value(&event))
                        />
                    </div>
                    <Button button_type="submit" disabled=request_action.pending()>
                        "Send reset link"
                    </Button>
                    {move || {
                        request_action
                            .pending()
                            .get()
                            .then_some(view! { <div class="mt-4"><Spinner /></div> })
                    }}
                    {move || {
                        error
                            .get()
                            .map(|err| {
                                view! {
                                    <div class="mt-4">
                                        <Alert kind=AlertKind::Error message=err.to_string() />
                                    </div>
                                }
                            })
                    }}
                </form>
            </Show>
        </div>
    }
}

#[component]
fn ApplyResetForm(token: String) -> impl IntoView {
    let (password, set_password) = signal(String::new());
    let (confirmation, set_confirmation) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    // Reject obviously truncated links before showing the form.
    let token_check = validate::validate_reset_token(Some(&token));

    let apply_action = Action::new_local(move |input: &ApplyInput| {
        let input = input.clone();
        async move { client::apply_password_reset(&input.token, &input.password).await }
    });

    let done = Signal::derive(move || matches!(apply_action.value().get(), Some(Ok(()))));

    Effect::new(move |_| {
        if let Some(Err(err)) = apply_action.value().get() {
            set_error.set(Some(err));
        }
    });

    match token_check {
        Err(err) => view! {
            <div class="max-w-sm mx-auto">
                <Alert kind=AlertKind::Error message=err.to_string() />
            </div>
        }
        .into_any(),
        Ok(token) => {
            let on_submit = move |event: SubmitEvent| {
                event.prevent_default();
                set_error.set(None);

                let password_value = password.get_untracked();
                let confirmation_value = confirmation.get_untracked();
                if let Err(err) =
                    validate::validate_new_password(&password_value, &confirmation_value)
                {
                    set_error.set(Some(err));
                    return;
                }

                apply_action.dispatch(ApplyInput {
                    token: token.clone(),
                    password: password_value,
                });
            };

            view! {
                <div class="max-w-sm mx-auto">
                    <Show
                        when=move || !done.get()
                        fallback=|| {
                            view! {
                                <div>
                                    <Alert
                                        kind=AlertKind::Success
                                        message="Your password has been reset.".to_string()
                                    />
                                    <p class="mt-4 text-sm text-gray-600">
                                        <A
                                            href="/auth/login"
                                            {..}
                                            class="text-violet-700 hover:underline"
                                        >
                                            "Sign in with your new password"
                                        </A>
                                    </p>
                                </div>
                            }
                        }
                    >
                        <form on:submit=on_submit>
                            <h1 class="text-2xl font-bold text-gray-800 mb-6">
                                "Choose a new password"
                            </h1>
                            <div class="mb-5">
                                <label
                                    class=Theme::LABEL
                                    for="password"
                                >
                                    "New password"
                                </label>
                                <input
                                    id="password"
                                    type="password"
                                    class=Theme::INPUT
                                    autocomplete="new-password"
                                    required
                                    on:input=move |event| {
                                        set_password.set(event_target_value(&event))
                                    }
                                />
                            </div>
                            <div class="mb-5">
                                <label
                                    class=Theme::LABEL
                                    for="confirm_password"
                                >
                                    "Confirm new password"
                                </label>
                                <input
                                    id="confirm_password"
                                    type="password"
                                    class=Theme::INPUT
                                    autocomplete="new-password"
                                    required
                                    on:input=move |event| {
                                        set_confirmation.set(event_target_value(&event))
                                    }
                                />
                            </div>
                            <Button button_type="submit" disabled=apply_action.pending()>
                                "Reset password"
                            </Button>
                            {move || {
                                apply_action
                                    .pending()
                                    .get()
                                    .then_some(view! { <div class="mt-4"><Spinner /></div> })
                            }}
                            {move || {
                                error
                                    .get()
                                    .map(|err| {
                                        view! {
                                            <div class="mt-4">
                                                <Alert
                                                    kind=AlertKind::Error
                                                    message=err.to_string()
                                                />
                                            </div>
                                        }
                                    })
                            }}
                        </form>
                    </Show>
                </div>
            }
            .into_any()
        }
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
