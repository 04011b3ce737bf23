//! Pricing page and checkout entry point. One attempt runs at a time; the
//! subscribe button stays disabled while the popup race is unresolved.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, PopupBlockerWarning, Spinner};
use crate::features::auth::state::use_auth;
use crate::features::auth::types::Identity;
use crate::features::payment::{flow, plans};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn PricingPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let navigate_to_login = use_navigate();
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (blocker_help, set_blocker_help) = signal(false);

    let payment_action = Action::new_local(move |identity: &Identity| {
        let identity = identity.clone();
        async move { flow::start_payment(&identity, &plans::MONTHLY).await }
    });

    Effect::new(move |_| {
        if let Some(result) = payment_action.value().get() {
            match result {
                Ok(()) => navigate("/success", Default::default()),
                Err(AppError::PopupBlocked) => set_blocker_help.set(true),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let retry_auth = auth.clone();
    let on_subscribe = move |_| {
        if payment_action.pending().get_untracked() {
            return;
        }
        set_error.set(None);
        match auth.identity.get_untracked() {
            Some(identity) => {
                payment_action.dispatch(identity);
            }
            None => navigate_to_login("/auth/login", Default::default()),
        }
    };

    let on_retry = Callback::new(move |()| {
        set_blocker_help.set(false);
        if payment_action.pending().get_untracked() {
            return;
        }
        if let Some(identity) = retry_auth.identity.get_untracked() {
            payment_action.dispatch(identity);
        }
    });
    let on_close = Callback::new(move |()| set_blocker_help.set(false));

    let plan = &plans::MONTHLY;

    view! {
        <AppShell>
            <div class="max-w-md mx-auto">
                <h1 class="text-3xl font-bold text-gray-800 text-center mb-2">
                    "Simple, Family-Friendly Pricing"
                </h1>
                <p class="text-gray-600 text-center mb-10">
                    "One subscription, every game, no ads, cancel anytime."
                </p>
                <div class="bg-white rounded-2xl shadow-xl p-8">
                    <h2 class="text-xl font-bold text-gray-800 mb-1">{plan.name}</h2>
                    <p class="mb-6">
                        <span class="text-4xl font-bold text-violet-700">
                            {plan.display_price()}
                        </span>
                        <span class="text-gray-500">"/month"</span>
                    </p>
                    <ul class="space-y-3 mb-8">
                        {plan
                            .features()
                            .map(|feature| {
                                view! {
                                    <li class="flex items-center text-sm text-gray-600">
                                        <span class="text-emerald-500 mr-2">"\u{2713}"</span>
                                        {feature}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <button
                        type="button"
                        class="w-full text-white bg-violet-600 hover:bg-violet-700 focus:ring-4 focus:outline-none focus:ring-violet-300 font-medium rounded-full text-sm px-6 py-3"
                        class:opacity-70=move || payment_action.pending().get()
                        class:cursor-not-allowed=move || payment_action.pending().get()
                        disabled=move || payment_action.pending().get()
                        on:click=on_subscribe
                    >
                        "Subscribe Now"
                    </button>
                    {move || {
                        payment_action
                            .pending()
                            .get()
                            .then_some(
                                view! {
                                    <div class="mt-4 text-center">
                                        <Spinner />
                                        <p class="mt-2 text-sm text-gray-600">
                                            "Complete your payment in the popup window..."
                                        </p>
                                    </div>
                                },
                            )
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
                </div>
            </div>
            <PopupBlockerWarning visible=blocker_help on_close=on_close on_retry=on_retry />
        </AppShell>
    }
}
