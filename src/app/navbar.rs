use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::content::PROFILE;
use crate::state::{past_threshold, NavMenu};

use super::scroll_to_section;

const NAV_ITEMS: [(&str, &str); 5] = [
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("experience", "Experience"),
    ("contact", "Contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let (menu, set_menu) = signal(NavMenu::default());
    let (_scroll_x, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| past_threshold(scroll_y.get()));

    // scroll first, then force the mobile menu shut; a missing target id
    // still closes the menu
    let select = move |id: &'static str| {
        scroll_to_section(id);
        set_menu.update(|m| m.select_and_close());
    };

    view! {
        <nav class=move || {
            if scrolled.get() {
                "fixed top-0 left-0 right-0 z-50 glass py-4 transition-all duration-300"
            } else {
                "fixed top-0 left-0 right-0 z-50 bg-transparent py-6 transition-all duration-300"
            }
        }>
            <div class="container mx-auto px-6 flex items-center justify-between">
                <button
                    class="font-bold text-xl gradient-text cursor-pointer"
                    on:click=move |_| select("hero")
                >
                    {PROFILE
                        .name
                        .split_whitespace()
                        .enumerate()
                        .map(|(i, word)| {
                            let class = if i == 0 {
                                "text-primary mr-1.5"
                            } else {
                                "text-secondary"
                            };
                            view! { <span class=class>{word.to_string()}</span> }
                        })
                        .collect_view()}
                </button>

                <div class="hidden md:flex items-center space-x-8">
                    {NAV_ITEMS
                        .map(|(id, label)| {
                            view! {
                                <button
                                    class="text-foreground hover:text-primary transition-colors duration-200 font-medium"
                                    on:click=move |_| select(id)
                                >
                                    {label}
                                </button>
                            }
                        })}
                    <a href=PROFILE.resume_path.clone() download class="btn-ghost text-sm">
                        "Resume"
                    </a>
                </div>

                <button
                    class="md:hidden glass p-3 rounded-lg"
                    aria-label="Toggle navigation menu"
                    on:click=move |_| set_menu.update(|m| m.toggle())
                >
                    <div class=move || {
                        if menu().is_open() { "hamburger is-open" } else { "hamburger" }
                    }>
                        <span></span>
                        <span></span>
                        <span></span>
                    </div>
                </button>
            </div>

            {move || {
                menu()
                    .is_open()
                    .then(|| {
                        view! {
                            <div class="md:hidden glass mt-4 mx-6 rounded-2xl overflow-hidden">
                                <div class="p-6 space-y-4">
                                    {NAV_ITEMS
                                        .map(|(id, label)| {
                                            view! {
                                                <button
                                                    class="block w-full text-left text-foreground hover:text-primary transition-colors duration-200 font-medium py-2"
                                                    on:click=move |_| select(id)
                                                >
                                                    {label}
                                                </button>
                                            }
                                        })}
                                    <a
                                        href=PROFILE.resume_path.clone()
                                        download
                                        class="btn-primary block text-center mt-4"
                                    >
                                        "Download Resume"
                                    </a>
                                </div>
                            </div>
                        }
                    })
            }}
        </nav>
    }
}
