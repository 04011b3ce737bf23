use crate::components::{Accordion, AppShell};
use crate::data::faqs::FAQS;
use leptos::prelude::*;

#[component]
pub fn ForParentsPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="max-w-3xl mx-auto">
                <h1 class="text-3xl font-bold text-gray-800 mb-4">"For Parents"</h1>
                <p class="text-gray-600 mb-10">
                    "Everything you need to know about TinyNinza, screen time, and how your child learns with us."
                </p>
                <h2 class="text-xl font-bold text-gray-800 mb-4">"Frequently Asked Questions"</h2>
                <div class="space-y-3">
                    {FAQS
                        .iter()
                        .map(|faq| view! { <Accordion question=faq.question answer=faq.answer /> })
                        .collect_view()}
                </div>
            </div>
        </AppShell>
    }
}
