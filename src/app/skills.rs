use leptos::prelude::*;

use crate::content::{flatten_skills, CategorizedSkill, SKILLS};
use crate::state::{ring_dash_offset, RING_CIRCUMFERENCE, RING_RADIUS};

use super::section::Reveal;

fn category_accent(category: &str) -> &'static str {
    match category {
        "Frontend" => "stroke-indigo-400",
        "Backend" => "stroke-teal-400",
        "AI & Tools" => "stroke-violet-400",
        _ => "stroke-indigo-400",
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    let skills = flatten_skills(&SKILLS.categories);

    view! {
        <Reveal id="skills" class="py-20 relative">
            <div class="container mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-6">
                        <span class="gradient-text">"Skills & Expertise"</span>
                    </h2>
                    <p class="text-xl text-muted max-w-3xl mx-auto">
                        "A comprehensive toolkit for building modern, scalable applications"
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
                    {skills
                        .into_iter()
                        .map(|skill| view! { <SkillCard skill /> })
                        .collect_view()}
                </div>
            </div>
        </Reveal>
    }
}

#[component]
fn SkillCard(skill: CategorizedSkill) -> impl IntoView {
    let percent = format!("{}%", skill.proficiency);
    let accent = category_accent(&skill.category);

    view! {
        <div class="skill-node relative group">
            <div class="flex items-center justify-between mb-4">
                <h4 class="text-lg font-semibold text-foreground group-hover:text-primary transition-colors">
                    {skill.name}
                </h4>
                <span class="text-sm font-medium text-muted">{percent.clone()}</span>
            </div>

            <div class="relative flex items-center justify-center mb-4">
                <svg class="w-20 h-20" viewBox="0 0 80 80">
                    <circle
                        cx="40"
                        cy="40"
                        r=RING_RADIUS
                        stroke-width="6"
                        fill="none"
                        class="stroke-slate-700 opacity-30"
                    ></circle>
                    <circle
                        cx="40"
                        cy="40"
                        r=RING_RADIUS
                        stroke-width="6"
                        fill="none"
                        stroke-linecap="round"
                        class=format!("ring-progress {accent}")
                        stroke-dasharray=format!("{RING_CIRCUMFERENCE:.2}")
                        stroke-dashoffset=format!("{:.2}", ring_dash_offset(skill.proficiency))
                    ></circle>
                </svg>
                <div class="absolute inset-0 flex items-center justify-center">
                    <span class="text-xl font-bold gradient-text">{percent}</span>
                </div>
            </div>

            <div class="mb-3">
                <span class="text-xs font-medium px-2 py-1 rounded-full glass text-muted">
                    {skill.category}
                </span>
            </div>

            <div class="space-y-2">
                <p class="text-sm font-medium text-muted">"Related Tools:"</p>
                <div class="flex flex-wrap gap-2">
                    {skill
                        .tools
                        .into_iter()
                        .map(|tool| {
                            view! {
                                <span class="px-3 py-1 text-xs font-medium rounded-full glass text-foreground hover:text-primary transition-colors">
                                    {tool}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
