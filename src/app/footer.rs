use chrono::{DateTime, Datelike, FixedOffset};
use leptos::prelude::*;

use crate::content::PROFILE;
use crate::links;

use super::{scroll_to_section, scroll_to_top};

// RFC 3339, stamped by build.rs.
const BUILD_TIME: &str = env!("BUILD_TIME");

fn build_year() -> i32 {
    DateTime::<FixedOffset>::parse_from_rfc3339(BUILD_TIME)
        .map(|dt| dt.year())
        .unwrap_or(2026)
}

#[component]
pub fn Footer() -> impl IntoView {
    let contact = &PROFILE.contact;

    view! {
        <footer class="relative border-t border-slate-700/50 py-12">
            <div class="container mx-auto px-6">
                <div class="grid md:grid-cols-3 gap-8 mb-8">
                    <div>
                        <p class="text-xl font-bold mb-2">
                            <span class="gradient-text">{PROFILE.name.clone()}</span>
                        </p>
                        <p class="text-muted">{PROFILE.role.clone()}</p>
                    </div>

                    <div>
                        <h4 class="font-semibold text-foreground mb-3">"Quick Links"</h4>
                        <div class="flex flex-col gap-2">
                            {[("about", "About"), ("skills", "Skills"), ("projects", "Projects"), ("contact", "Contact")]
                                .into_iter()
                                .map(|(id, label)| {
                                    view! {
                                        <button
                                            class="text-left text-muted hover:text-foreground transition-colors"
                                            on:click=move |_| scroll_to_section(id)
                                        >
                                            {label}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div>
                        <h4 class="font-semibold text-foreground mb-3">"Elsewhere"</h4>
                        <div class="flex flex-col gap-2">
                            <a href=contact.github.clone() target="_blank" rel="noopener noreferrer" class="text-muted hover:text-foreground transition-colors">
                                "GitHub"
                            </a>
                            <a href=contact.linkedin.clone() target="_blank" rel="noopener noreferrer" class="text-muted hover:text-foreground transition-colors">
                                "LinkedIn"
                            </a>
                            <a href=links::mailto(&contact.email) class="text-muted hover:text-foreground transition-colors">
                                "Email"
                            </a>
                        </div>
                    </div>
                </div>

                <div class="flex flex-col sm:flex-row items-center justify-between gap-4 pt-8 border-t border-slate-700/50">
                    <p class="text-sm text-muted">
                        {format!("\u{a9} {} {}. All rights reserved.", build_year(), PROFILE.name)}
                    </p>
                    <button class="btn-ghost" on:click=move |_| scroll_to_top()>
                        "Back to Top \u{2191}"
                    </button>
                </div>
            </div>
        </footer>
    }
}
