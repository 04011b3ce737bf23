use crate::data::games::Game;
use leptos::prelude::*;

/// Renders one catalog entry: cover image, category badge, and skill tags.
#[component]
pub fn GameCard(game: &'static Game) -> impl IntoView {
    view! {
        <div class="bg-white rounded-2xl shadow-md overflow-hidden hover:shadow-lg transition-shadow">
            <img src=game.image_url alt=game.title class="h-44 w-full object-cover" />
            <div class="p-5">
                <div class="flex items-center justify-between mb-2">
                    <h3 class="text-lg font-bold text-gray-800">{game.title}</h3>
                    <span class="text-xs font-medium text-violet-700 bg-violet-100 rounded-full px-3 py-1">
                        {game.category}
                    </span>
                </div>
                <p class="text-sm text-gray-600 mb-3">{game.description}</p>
                <div class="flex flex-wrap gap-2">
                    {game
                        .skills
                        .iter()
                        .map(|skill| {
                            view! {
                                <span class="text-xs text-gray-500 bg-gray-100 rounded-full px-2 py-1">
                                    {*skill}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
