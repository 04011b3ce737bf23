use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

/// Post-payment landing page, reachable only with a cached session.
#[component]
pub fn SuccessPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="max-w-2xl mx-auto text-center py-12">
                <div class="w-24 h-24 bg-emerald-100 rounded-full flex items-center justify-center mx-auto mb-6">
                    <span class="text-5xl text-emerald-600">"\u{2713}"</span>
                </div>
                <h1 class="text-4xl font-bold text-gray-800 mb-4">"Welcome to TinyNinza!"</h1>
                <p class="text-xl text-gray-600 mb-10">
                    "Your subscription is now active. Let the learning adventure begin!"
                </p>
                <div class="bg-white rounded-2xl shadow-xl p-8 text-left">
                    <h2 class="text-2xl font-bold text-gray-800 mb-6">"What's Next?"</h2>
                    <ol class="list-decimal list-inside space-y-3 text-gray-600">
                        <li>"Download the TinyNinza app on your device"</li>
                        <li>"Sign in with the account you just used"</li>
                        <li>"Pick a game and start playing \u{2014} all 44 are unlocked"</li>
                    </ol>
                </div>
                <p class="mt-8 text-sm text-gray-600">
                    <A href="/games" {..} class="text-violet-700 hover:underline">
                        "Browse the game catalog"
                    </A>
                </p>
            </div>
        </AppShell>
    }
}
