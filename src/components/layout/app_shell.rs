//! Shared layout wrapper with navigation, content container, and footer. It
//! centralizes header markup and the mobile menu toggle so routes can focus on
//! content. Navigation is client-side only.

use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::components::A;

const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/approach", "Our Approach"),
    ("/games", "Games"),
    ("/parents", "For Parents"),
    ("/contact", "Contact"),
    ("/pricing", "Pricing"),
];

const NAV_LINK_CLASS: &str = "block py-2 px-3 text-gray-700 rounded hover:bg-gray-100 md:hover:bg-transparent md:border-0 md:hover:text-violet-700 md:p-0";

/// Wraps routes with a header, main content container, and footer.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let toggle_menu = move |_| {
        set_menu_open.update(|open| *open = !*open);
    };
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;
    let sign_out_auth = auth.clone();

    view! {
        <div class="min-h-screen flex flex-col bg-gray-50">
            <header class="bg-white shadow-sm">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A
                        href="/"
                        {..}
                        class="flex items-center space-x-2"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        <span class="text-2xl">"\u{1f977}"</span>
                        <span class="text-xl font-bold text-violet-700 whitespace-nowrap">
                            "TinyNinza"
                        </span>
                    </A>
                    <button
                        type="button"
                        class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-gray-500 rounded-lg md:hidden hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-gray-200"
                        aria-controls="navbar-default"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=toggle_menu
                    >
                        <span class="sr-only">"Open main menu"</span>
                        <svg
                            class="w-5 h-5"
                            aria-hidden="true"
                            xmlns="http://www.w3.org/2000/svg"
                            fill="none"
                            viewBox="0 0 17 14"
                        >
                            <path
                                stroke="currentColor"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M1 1h15M1 7h15M1 13h15"
                            ></path>
                        </svg>
                    </button>
                    <div
                        id="navbar-default"
                        class="w-full md:block md:w-auto"
                        class:hidden=move || !menu_open.get()
                    >
                        <ul class="font-medium flex flex-col p-4 md:p-0 mt-4 border border-gray-100 rounded-lg bg-gray-50 md:flex-row md:items-center md:space-x-6 md:mt-0 md:border-0 md:bg-white">
                            {NAV_LINKS
                                .iter()
                                .map(|(href, label)| {
                                    view! {
                                        <li>
                                            <A
                                                href=*href
                                                {..}
                                                class=NAV_LINK_CLASS
                                                on:click=move |_| set_menu_open.set(false)
                                            >
                                                {*label}
                                            </A>
                                        </li>
                                    }
                                })
                                .collect_view()}
                            <li>
                                <Show
                                    when=move || is_authenticated.get()
                                    fallback=move || {
                                        view! {
                                            <A
                                                href="/auth/login"
                                                {..}
                                                class="block py-2 px-4 text-white bg-violet-600 hover:bg-violet-700 rounded-full md:ml-2"
                                                on:click=move |_| set_menu_open.set(false)
                                            >
                                                "Sign In"
                                            </A>
                                        }
                                    }
                                >
                                    {
                                        let auth = sign_out_auth.clone();
                                        view! {
                                            <button
                                                type="button"
                                                class="block w-full py-2 px-4 text-white bg-violet-600 hover:bg-violet-700 rounded-full md:ml-2"
                                                on:click=move |_| {
                                                    auth.sign_out();
                                                    set_menu_open.set(false);
                                                }
                                            >
                                                "Sign Out"
                                            </button>
                                        }
                                    }
                                </Show>
                            </li>
                        </ul>
                    </div>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">{children()}</div>
            </main>
            <footer class="bg-white border-t border-gray-200 mt-12">
                <div class="max-w-screen-xl mx-auto p-6 text-center text-sm text-gray-500">
                    <p class="mb-1">"TinyNinza \u{2014} learning through play for ages 3-8."</p>
                    <p>"Questions? support@tinyninja.com"</p>
                </div>
            </footer>
        </div>
    }
}
