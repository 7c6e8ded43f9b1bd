use leptos::prelude::*;

use crate::content::PROFILE;

use super::scroll_to_section;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section
            id="hero"
            class="relative min-h-screen flex items-center justify-center overflow-hidden"
        >
            <div class="relative z-10 container mx-auto px-6 text-center">
                <div class="max-w-4xl mx-auto hero-enter">
                    <p class="text-lg md:text-xl text-muted mb-4 font-medium">"Hi, I'm"</p>
                    <h1 class="text-5xl md:text-7xl font-bold mb-6">
                        <span class="gradient-text">{PROFILE.name.clone()}</span>
                    </h1>
                    <div class="mb-8">
                        <p class="text-xl md:text-2xl font-semibold text-primary mb-4">
                            {format!(
                                "{} \u{2022} {} years",
                                PROFILE.role,
                                PROFILE.experience_years,
                            )}
                        </p>
                        <p class="text-lg md:text-xl text-muted max-w-2xl mx-auto leading-relaxed">
                            {PROFILE.headline.clone()}
                        </p>
                    </div>
                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4 mb-12">
                        <a
                            href=PROFILE.resume_path.clone()
                            download
                            class="btn-primary inline-flex items-center gap-2"
                        >
                            "Download Resume"
                        </a>
                        <button
                            class="btn-ghost inline-flex items-center gap-2"
                            on:click=move |_| scroll_to_section("contact")
                        >
                            "Get In Touch"
                        </button>
                    </div>
                    <div class="flex flex-col items-center">
                        <p class="text-sm text-muted mb-4">"Scroll to explore"</p>
                        <button
                            class="p-2 rounded-full glass-hover scroll-hint"
                            aria-label="Scroll to about section"
                            on:click=move |_| scroll_to_section("about")
                        >
                            "\u{2193}"
                        </button>
                    </div>
                </div>
            </div>
            <div class="absolute inset-0 bg-gradient-to-b from-transparent via-transparent to-background/50 pointer-events-none"></div>
        </section>
    }
}
