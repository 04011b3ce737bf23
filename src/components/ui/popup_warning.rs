//! Modal shown when the browser blocks the checkout popup, with remediation
//! steps and a retry path. Retrying must stay behind a user click so the new
//! attempt carries its own user-activation grant.

use leptos::prelude::*;

#[component]
pub fn PopupBlockerWarning(
    #[prop(into)] visible: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50 p-4">
                <div class="bg-white rounded-2xl p-6 max-w-md w-full shadow-xl">
                    <div class="flex items-start justify-between mb-4">
                        <h3 class="text-lg font-bold text-gray-800">"Popup Blocked"</h3>
                        <button
                            type="button"
                            class="text-gray-400 hover:text-gray-600"
                            aria-label="Close"
                            on:click=move |_| on_close.run(())
                        >
                            "\u{2715}"
                        </button>
                    </div>
                    <p class="text-gray-600 mb-4">
                        "Your browser is blocking the payment window from opening. To complete your subscription:"
                    </p>
                    <ol class="list-decimal list-inside space-y-2 text-sm text-gray-600 mb-4">
                        <li>"Look for a popup blocker icon in your browser's address bar"</li>
                        <li>"Click on it and select \"Always allow popups from this site\""</li>
                        <li>"Or temporarily disable your popup blocker"</li>
                        <li>"Click \"Try Again\" below"</li>
                    </ol>
                    <div class="bg-gray-50 rounded-lg p-3 mb-6">
                        <p class="text-xs text-gray-500">
                            <strong>"Note: "</strong>
                            "The payment window will open in a secure popup from our trusted payment processor."
                        </p>
                    </div>
                    <div class="flex space-x-3">
                        <button
                            type="button"
                            class="flex-1 text-white bg-violet-600 hover:bg-violet-700 font-medium rounded-full text-sm px-6 py-2.5"
                            on:click=move |_| on_retry.run(())
                        >
                            "Try Again"
                        </button>
                        <button
                            type="button"
                            class="flex-1 text-violet-700 border border-violet-600 hover:bg-violet-50 font-medium rounded-full text-sm px-6 py-2.5"
                            on:click=move |_| on_close.run(())
                        >
                            "Cancel"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
