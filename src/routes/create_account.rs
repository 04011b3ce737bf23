use crate::app_lib::AppError;
use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::protocol::SignUpOutcome;
use crate::features::auth::state::use_auth;
use crate::features::auth::types::SignUpRequest;
use crate::features::auth::{client, validate};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[derive(Clone)]
struct SignUpInput {
    email: String,
    password: String,
}

#[component]
pub fn CreateAccountPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirmation, set_confirmation) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (pending_verification, set_pending_verification) = signal(false);

    let signup_action = Action::new_local(move |input: &SignUpInput| {
        let input = input.clone();
        async move {
            let request = SignUpRequest {
                email: input.email,
                password: input.password,
            };
            client::sign_up(&request).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = signup_action.value().get() {
            match result {
                // An unverified account never populates the session cache;
                // the user signs in through the verification link instead.
                Ok(SignUpOutcome::PendingVerification) => set_pending_verification.set(true),
                Ok(SignUpOutcome::SignedIn(identity)) => {
                    auth.set_identity(identity);
                    navigate("/pricing", Default::default());
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        let confirmation_value = confirmation.get_untracked();
        if let Err(err) = validate::validate_email(&email_value) {
            set_error.set(Some(err));
            return;
        }
        if let Err(err) = validate::validate_new_password(&password_value, &confirmation_value) {
            set_error.set(Some(err));
            return;
        }

        signup_action.dispatch(SignUpInput {
            email: email_value,
            password: password_value,
        });
    };

    view! {
        <AppShell>
            <div class="max-w-sm mx-auto">
                <Show
                    when=move || !pending_verification.get()
                    fallback=|| {
                        view! {
                            <div>
                                <h1 class="text-2xl font-bold text-gray-800 mb-4">
                                    "Check your email"
                                </h1>
                                <Alert
                                    kind=AlertKind::Success
                                    message="Account created! Please check your email and follow the verification link to activate your account."
                                        .to_string()
                                />
                            </div>
                        }
                    }
                >
                    <form on:submit=on_submit>
                        <h1 class="text-2xl font-bold text-gray-800 mb-6">"Create your account"</h1>
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
                        <div class="mb-5">
                            <label
                                class=Theme::LABEL
                                for="password"
                            >
                                "Password"
                            </label>
                            <input
                                id="password"
                                type="password"
                                class=Theme::INPUT
                                autocomplete="new-password"
                                required
                                on:input=move |event| set_password.set(event_target_value(&event))
                            />
                        </div>
                        <div class="mb-5">
                            <label
                                class=Theme::LABEL
                                for="confirm_password"
                            >
                                "Confirm password"
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
                        <Button button_type="submit" disabled=signup_action.pending()>
                            "Create Account"
                        </Button>
                        {move || {
                            signup_action
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
                        <p class="mt-6 text-sm text-gray-600">
                            "Already have an account? "
                            <A href="/auth/login" {..} class="text-violet-700 hover:underline">
                                "Sign in"
                            </A>
                        </p>
                    </form>
                </Show>
            </div>
        </AppShell>
    }
}
