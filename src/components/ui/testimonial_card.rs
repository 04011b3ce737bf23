use crate::data::testimonials::Testimonial;
use leptos::prelude::*;

#[component]
pub fn TestimonialCard(testimonial: &'static Testimonial) -> impl IntoView {
    view! {
        <figure class="bg-white rounded-2xl shadow-md p-6">
            <blockquote class="text-sm text-gray-600 mb-4">
                "\u{201c}" {testimonial.content} "\u{201d}"
            </blockquote>
            <figcaption class="flex items-center space-x-3">
                <img
                    src=testimonial.image_url
                    alt=testimonial.name
                    class="h-10 w-10 rounded-full object-cover"
                />
                <div>
                    <div class="text-sm font-semibold text-gray-800">{testimonial.name}</div>
                    <div class="text-xs text-gray-500">{testimonial.role}</div>
                </div>
            </figcaption>
        </figure>
    }
}
