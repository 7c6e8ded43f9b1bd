use leptos::prelude::*;

use crate::content::{Position, PROFILE};

use super::section::Reveal;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <Reveal id="about" class="py-20 relative">
            <div class="container mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-6">
                        <span class="gradient-text">"About Me"</span>
                    </h2>
                    <p class="text-xl text-muted max-w-3xl mx-auto">
                        "Passionate about creating scalable solutions that solve real-world problems"
                    </p>
                </div>

                <div class="grid lg:grid-cols-2 gap-10">
                    <div class="space-y-8">
                        <div class="glass p-8 rounded-2xl">
                            <h3 class="text-2xl font-bold mb-6 text-foreground">"Who I Am"</h3>
                            <p class="text-lg text-muted leading-relaxed mb-6">
                                {PROFILE.short_bio.clone()}
                            </p>
                            <div class="flex flex-wrap gap-4">
                                <InfoChip
                                    label="Experience"
                                    value=format!("{} Years", PROFILE.experience_years)
                                />
                                <InfoChip
                                    label="Location"
                                    value=PROFILE.contact.location.clone()
                                />
                                <InfoChip label="Education" value=PROFILE.education.clone() />
                                <InfoChip
                                    label="Current Role"
                                    value=PROFILE
                                        .current_position()
                                        .map(|p| p.title.clone())
                                        .unwrap_or_default()
                                />
                            </div>
                        </div>

                        <div class="glass p-8 rounded-2xl">
                            <h3 class="text-2xl font-bold mb-6 text-foreground">
                                "Key Achievements"
                            </h3>
                            <div class="space-y-4">
                                {PROFILE
                                    .achievements
                                    .iter()
                                    .map(|achievement| {
                                        view! {
                                            <div class="flex items-start gap-3">
                                                <div class="w-2 h-2 rounded-full bg-primary mt-2 flex-shrink-0"></div>
                                                <p class="text-muted">{achievement.clone()}</p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>

                    <div class="glass p-8 rounded-2xl">
                        <h3 class="text-2xl font-bold mb-8 text-foreground">
                            "Professional Journey"
                        </h3>
                        <div class="space-y-8">
                            // stored oldest-first; shown most recent first
                            {PROFILE
                                .positions
                                .iter()
                                .rev()
                                .map(|position| view! { <TimelineItem position=position.clone() /> })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </Reveal>
    }
}

#[component]
fn InfoChip(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 w-[48%]">
            <div>
                <p class="text-sm text-muted">{label}</p>
                <p class="font-semibold text-foreground">{value}</p>
            </div>
        </div>
    }
}

#[component]
fn TimelineItem(position: Position) -> impl IntoView {
    view! {
        <div class="timeline-item relative">
            <div class="space-y-3">
                <div>
                    <h4 class="text-xl font-semibold text-foreground">{position.title}</h4>
                    <div class="flex items-center gap-2 text-muted">
                        <span class="font-medium">{position.company}</span>
                        <span class="text-sm">"\u{2022}"</span>
                        <span class="text-sm">{position.period}</span>
                    </div>
                </div>
                <ul class="space-y-2 ml-4">
                    {position
                        .bullets
                        .into_iter()
                        .map(|bullet| {
                            view! {
                                <li class="flex items-start gap-2">
                                    <div class="w-1.5 h-1.5 rounded-full bg-primary mt-2 flex-shrink-0"></div>
                                    <span class="text-muted text-sm">{bullet}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
