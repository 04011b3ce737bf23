use crate::components::{AppShell, GameCard, TestimonialCard};
use crate::data::{games::GAMES, testimonials::TESTIMONIALS};
use leptos::prelude::*;
use leptos_router::components::A;

const FEATURES: &[(&str, &str)] = &[
    (
        "Curriculum-Aligned Learning",
        "44 educational games covering math, language, science, logic, and creativity",
    ),
    (
        "100% Safe & Ad-Free",
        "Child-safe environment with no ads, in-app purchases, or external links",
    ),
    (
        "Engaging Gameplay",
        "Fun, interactive games that keep children motivated to learn and explore",
    ),
    (
        "Teacher Approved",
        "Designed by educators and aligned with early childhood learning standards",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let featured = &GAMES[..4];

    view! {
        <AppShell>
            <section class="text-center py-12">
                <h1 class="text-4xl md:text-6xl font-bold text-violet-800 leading-tight mb-6">
                    "Learn through Play, the Ninja Way!"
                </h1>
                <p class="text-xl text-gray-600 max-w-2xl mx-auto mb-8">
                    "Educational games designed for children aged 3-8. Master foundational skills in math, language, science, and more through 44 engaging, curriculum-aligned adventures."
                </p>
                <A
                    href="/pricing"
                    {..}
                    class="inline-block text-white bg-violet-600 hover:bg-violet-700 font-medium rounded-full px-8 py-3"
                >
                    "Get Started"
                </A>
            </section>
            <section class="py-12">
                <h2 class="text-3xl font-bold text-gray-800 text-center mb-8">
                    "Why Parents Choose TinyNinza"
                </h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {FEATURES
                        .iter()
                        .map(|(title, description)| {
                            view! {
                                <div class="bg-white rounded-2xl shadow-md p-6 text-center">
                                    <h3 class="font-bold text-gray-800 mb-2">{*title}</h3>
                                    <p class="text-sm text-gray-600">{*description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
            <section class="py-12">
                <h2 class="text-3xl font-bold text-gray-800 text-center mb-8">"Featured Games"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {featured.iter().map(|game| view! { <GameCard game=game /> }).collect_view()}
                </div>
                <div class="text-center mt-8">
                    <A
                        href="/games"
                        {..}
                        class="text-violet-700 font-medium hover:underline"
                    >
                        "See all games"
                    </A>
                </div>
            </section>
            <section class="py-12">
                <h2 class="text-3xl font-bold text-gray-800 text-center mb-8">
                    "Loved by Families and Educators"
                </h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {TESTIMONIALS
                        .iter()
                        .map(|testimonial| view! { <TestimonialCard testimonial=testimonial /> })
                        .collect_view()}
                </div>
            </section>
        </AppShell>
    }
}
