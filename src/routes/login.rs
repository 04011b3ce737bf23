use crate::app_lib::AppError;
use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::state::use_auth;
use crate::features::auth::types::SignInRequest;
use crate::features::auth::{client, validate};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[derive(Clone)]
struct LoginInput {
    email: String,
    password: String,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let login_action = Action::new_local(move |input: &LoginInput| {
        let input = input.clone();
        async move {
            let request = SignInRequest {
                email: input.email,
                password: input.password,
            };
            client::sign_in(&request).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(identity) => {
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
        if let Err(err) = validate::validate_email(&email_value) {
            set_error.set(Some(err));
            return;
        }
        if password_value.is_empty() {
            set_error.set(Some(AppError::Validation(
                "Password is required".to_string(),
            )));
            return;
        }

        login_action.dispatch(LoginInput {
            email: email_value,
            password: password_value,
        });
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="text-2xl font-bold text-gray-800 mb-6">"Welcome back"</h1>
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
                    <label class=Theme::LABEL for="password">
                        "Your password"
                    </label>
                    <input
                        id="password"
                        type="password"
                        class=Theme::INPUT
                        autocomplete="current-password"
                        required
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                <Button button_type="submit" disabled=login_action.pending()>
                    "Sign In"
                </Button>
                {move || {
                    login_action
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
                <div class="mt-6 text-sm text-gray-600 space-y-1">
                    <p>
                        "New to TinyNinza? "
                        <A href="/auth/signup" {..} class="text-violet-700 hover:underline">
                            "Create an account"
                        </A>
                    </p>
                    <p>
                        "Forgot your password? "
                        <A href="/reset-pass" {..} class="text-violet-700 hover:underline">
                            "Reset it"
                        </A>
                    </p>
                </div>
            </form>
        </AppShell>
    }
}
