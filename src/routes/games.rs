use crate::components::{AppShell, GameCard};
use crate::data::games;
use leptos::prelude::*;

/// Game catalog with a client-side category filter.
#[component]
pub fn GamesPage() -> impl IntoView {
    let (category, set_category) = signal::<Option<&'static str>>(None);

    let filter_class = move |selected: bool| {
        if selected {
            "px-4 py-2 rounded-full text-sm font-medium text-white bg-violet-600"
        } else {
            "px-4 py-2 rounded-full text-sm font-medium text-gray-700 bg-white border border-gray-200 hover:bg-gray-50"
        }
    };

    view! {
        <AppShell>
            <h1 class="text-3xl font-bold text-gray-800 text-center mb-2">"Our Games"</h1>
            <p class="text-gray-600 text-center mb-8">
                "Every game is part of the TinyNinza subscription. Filter by learning area."
            </p>
            <div class="flex flex-wrap justify-center gap-3 mb-10">
                <button
                    type="button"
                    class=move || filter_class(category.get().is_none())
                    on:click=move |_| set_category.set(None)
                >
                    "All"
                </button>
                {games::categories()
                    .into_iter()
                    .map(|name| {
                        view! {
                            <button
                                type="button"
                                class=move || filter_class(category.get() == Some(name))
                                on:click=move |_| set_category.set(Some(name))
                            >
                                {name}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                {move || {
                    games::games_in(category.get())
                        .into_iter()
                        .map(|game| view! { <GameCard game=game /> })
                        .collect_view()
                }}
            </div>
        </AppShell>
    }
}
