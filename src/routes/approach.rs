use crate::components::AppShell;
use leptos::prelude::*;

const PILLARS: &[(&str, &str)] = &[
    (
        "Play-Based Learning",
        "Children learn best when they are having fun. Every game wraps a learning objective in play, so practice never feels like a worksheet.",
    ),
    (
        "Progressive Difficulty",
        "Games adapt to each child's pace, introducing new challenges only once earlier skills are secure.",
    ),
    (
        "Curriculum Alignment",
        "Content maps to early childhood education standards across math, language, science, logic, and creativity.",
    ),
    (
        "Built With Educators",
        "Teachers and early childhood specialists review every game before it ships.",
    ),
];

#[component]
pub fn ApproachPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="max-w-3xl mx-auto">
                <h1 class="text-3xl font-bold text-gray-800 mb-4">"Our Approach"</h1>
                <p class="text-gray-600 mb-10">
                    "TinyNinza blends proven early-learning pedagogy with gameplay children genuinely enjoy. Here is what guides every game we build."
                </p>
                <div class="space-y-6">
                    {PILLARS
                        .iter()
                        .map(|(title, body)| {
                            view! {
                                <div class="bg-white rounded-2xl shadow-md p-6">
                                    <h2 class="text-lg font-bold text-gray-800 mb-2">{*title}</h2>
                                    <p class="text-sm text-gray-600">{*body}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </AppShell>
    }
}
