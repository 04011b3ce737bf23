use leptos::prelude::*;

/// Disclosure row used for the FAQ list; collapsed by default.
#[component]
pub fn Accordion(question: &'static str, answer: &'static str) -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <div class="border border-gray-200 rounded-xl overflow-hidden">
            <button
                type="button"
                class="w-full flex items-center justify-between px-5 py-4 text-left text-sm font-medium text-gray-800 bg-white hover:bg-gray-50"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| set_open.update(|value| *value = !*value)
            >
                {question}
                <span class="text-violet-600">{move || if open.get() { "\u{2212}" } else { "+" }}</span>
            </button>
            <Show when=move || open.get()>
                <div class="px-5 py-4 text-sm text-gray-600 bg-gray-50">{answer}</div>
            </Show>
        </div>
    }
}
