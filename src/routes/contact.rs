//! Contact form. There is no contact endpoint on the API; submissions are
//! acknowledged locally and the support mailbox is shown for real inquiries.

use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, AppShell, Button};
use crate::features::auth::validate::validate_email;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitted, set_submitted) = signal(false);

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let name_value = name.get_untracked().trim().to_string();
        let email_value = email.get_untracked().trim().to_string();
        let message_value = message.get_untracked().trim().to_string();
        if name_value.is_empty() || message_value.is_empty() {
            set_error.set(Some("Name and message are required.".to_string()));
            return;
        }
        if let Err(err) = validate_email(&email_value) {
            set_error.set(Some(err.to_string()));
            return;
        }

        set_submitted.set(true);
    };

    view! {
        <AppShell>
            <div class="max-w-lg mx-auto">
                <h1 class="text-3xl font-bold text-gray-800 mb-4">"Contact Us"</h1>
                <p class="text-gray-600 mb-8">
                    "Questions about TinyNinza? Send us a note, or email support@tinyninja.com directly. We aim to respond within 24 hours."
                </p>
                <Show
                    when=move || !submitted.get()
                    fallback=|| {
                        view! {
                            <Alert
                                kind=AlertKind::Success
                                message="Thanks for reaching out! We'll get back to you soon."
                                    .to_string()
                            />
                        }
                    }
                >
                    <form on:submit=on_submit>
                        <div class="mb-5">
                            <label class=Theme::LABEL for="name">
                                "Your name"
                            </label>
                            <input
                                id="name"
                                type="text"
                                class=Theme::INPUT
                                required
                                on:input=move |event| set_name.set(event_target_value(&event))
                            />
                        </div>
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
                            <label class=Theme::LABEL for="message">
                                "Message"
                            </label>
                            <textarea
                                id="message"
                                rows="5"
                                class=Theme::INPUT
                                required
                                on:input=move |event| set_message.set(event_target_value(&event))
                            ></textarea>
                        </div>
                        <Button button_type="submit">"Send message"</Button>
                        {move || {
                            error
                                .get()
                                .map(|message| {
                                    view! {
                                        <div class="mt-4">
                                            <Alert kind=AlertKind::Error message=message />
                                        </div>
                                    }
                                })
                        }}
                    </form>
                </Show>
            </div>
        </AppShell>
    }
}
