use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="max-w-lg mx-auto text-center py-16">
                <p class="text-6xl mb-4">"\u{1f977}"</p>
                <h1 class="text-3xl font-bold text-gray-800 mb-2">"Page not found"</h1>
                <p class="text-gray-600 mb-6">
                    "Even ninjas get lost sometimes. The page you're looking for doesn't exist."
                </p>
                <A
                    href="/"
                    {..}
                    class="inline-block text-white bg-violet-600 hover:bg-violet-700 font-medium rounded-full px-6 py-2.5"
                >
                    "Back to home"
                </A>
            </div>
        </AppShell>
    }
}
