use leptos::prelude::*;

use crate::content::{Project, PROJECTS};
use crate::state::ProjectModal;

use super::section::Reveal;

#[component]
pub fn Projects() -> impl IntoView {
    let modal = RwSignal::new(ProjectModal::default());

    view! {
        <Reveal id="projects" class="py-20 relative">
            <div class="container mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-6">
                        <span class="gradient-text">"Featured Projects"</span>
                    </h2>
                    <p class="text-xl text-muted max-w-3xl mx-auto">
                        "Showcase of applications that solve real-world problems and deliver measurable impact"
                    </p>
                </div>

                <div class="space-y-20">
                    {PROJECTS
                        .featured
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! { <ProjectCard project=project.clone() index modal /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </Reveal>
        <ProjectModalView modal />
    }
}

#[component]
fn ProjectCard(project: Project, index: usize, modal: RwSignal<ProjectModal>) -> impl IntoView {
    let open = {
        let project = project.clone();
        move |_| modal.update(|m| m.open(project.clone()))
    };

    let row_class = if index % 2 == 0 {
        "flex flex-col lg:flex-row items-center gap-12"
    } else {
        "flex flex-col lg:flex-row-reverse items-center gap-12"
    };
    let initial = project.title.chars().next().unwrap_or('?');

    view! {
        <div class=row_class>
            <div class="lg:w-1/2">
                <div class="relative group cursor-pointer" on:click=open.clone()>
                    <div class="glass rounded-2xl overflow-hidden">
                        <div class="aspect-video bg-gradient-to-br from-slate-700 to-slate-800 flex items-center justify-center">
                            <div class="text-center">
                                <div class="w-16 h-16 mx-auto mb-4 rounded-lg gradient-tile flex items-center justify-center">
                                    <span class="text-2xl font-bold text-slate-800">
                                        {initial.to_string()}
                                    </span>
                                </div>
                                <p class="text-sm text-muted">"Click to view details"</p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <div class="lg:w-1/2 space-y-6">
                <div>
                    <h3
                        class="text-2xl md:text-3xl font-bold text-foreground cursor-pointer mb-4"
                        on:click=open.clone()
                    >
                        {project.title.clone()}
                    </h3>
                    <div class="flex flex-wrap items-center gap-4 mb-4 text-sm text-muted">
                        <span>{project.role.clone()}</span>
                        <span>{project.period.clone()}</span>
                    </div>
                </div>

                <p class="text-lg text-muted leading-relaxed">{project.summary.clone()}</p>
                <p class="font-semibold text-primary">{project.impact.clone()}</p>

                <div class="flex flex-wrap gap-2">
                    {project
                        .stack
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 text-sm font-medium rounded-full glass text-foreground">
                                    {tech.clone()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="flex flex-wrap gap-4">
                    <button class="btn-primary" on:click=open>
                        "View Case Study"
                    </button>
                    {(!project.live.is_empty())
                        .then(|| {
                            view! {
                                <a
                                    href=project.live.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="btn-ghost inline-flex items-center gap-2"
                                >
                                    "Live Demo"
                                </a>
                            }
                        })}
                    {(!project.repo.is_empty())
                        .then(|| {
                            view! {
                                <a
                                    href=project.repo.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="btn-ghost inline-flex items-center gap-2"
                                >
                                    "Code"
                                </a>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectModalView(modal: RwSignal<ProjectModal>) -> impl IntoView {
    view! {
        {move || {
            let selected = modal.with(|m| m.selected().cloned());
            selected
                .map(|project| {
                    let image_index = modal.with(|m| m.image_index());
                    view! {
                        <div
                            class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-slate-900/90 backdrop-blur-sm"
                            on:click=move |_| modal.update(|m| m.close())
                        >
                            <div
                                class="glass rounded-2xl max-w-4xl max-h-[90vh] overflow-y-auto w-full"
                                on:click=|ev| ev.stop_propagation()
                            >
                                <div class="sticky top-0 glass-hover p-6 flex items-center justify-between border-b border-slate-600">
                                    <h3 class="text-2xl font-bold gradient-text">
                                        {project.title.clone()}
                                    </h3>
                                    <button
                                        class="p-2 rounded-lg glass-hover"
                                        aria-label="Close project details"
                                        on:click=move |_| modal.update(|m| m.close())
                                    >
                                        "\u{2715}"
                                    </button>
                                </div>

                                <div class="p-6 space-y-8">
                                    {(!project.images.is_empty())
                                        .then(|| {
                                            view! {
                                                <Gallery
                                                    images=project.images.clone()
                                                    selected=image_index
                                                    modal
                                                />
                                            }
                                        })}

                                    <div class="grid md:grid-cols-2 gap-8">
                                        <div>
                                            <h4 class="text-xl font-semibold mb-4 text-primary">
                                                "Problem"
                                            </h4>
                                            <p class="text-muted leading-relaxed">
                                                {project.problem.clone()}
                                            </p>
                                        </div>
                                        <div>
                                            <h4 class="text-xl font-semibold mb-4 text-secondary">
                                                "Solution"
                                            </h4>
                                            <p class="text-muted leading-relaxed">
                                                {project.solution.clone()}
                                            </p>
                                        </div>
                                    </div>

                                    <div>
                                        <h4 class="text-xl font-semibold mb-4 text-foreground">
                                            "Technical Implementation"
                                        </h4>
                                        <ul class="space-y-2">
                                            {project
                                                .tech_details
                                                .iter()
                                                .map(|detail| {
                                                    view! {
                                                        <li class="flex items-start gap-3">
                                                            <div class="w-2 h-2 rounded-full bg-primary mt-2 flex-shrink-0"></div>
                                                            <span class="text-muted">{detail.clone()}</span>
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    </div>

                                    <div>
                                        <h4 class="text-xl font-semibold mb-4 text-foreground">
                                            "Key Metrics & Impact"
                                        </h4>
                                        <div class="grid sm:grid-cols-2 gap-4">
                                            {project
                                                .metrics
                                                .iter()
                                                .map(|metric| {
                                                    view! {
                                                        <div class="glass-hover p-4 rounded-lg">
                                                            <p class="text-foreground font-semibold">
                                                                {metric.clone()}
                                                            </p>
                                                        </div>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>

                                    <div>
                                        <h4 class="text-xl font-semibold mb-4 text-foreground">
                                            "Technology Stack"
                                        </h4>
                                        <div class="flex flex-wrap gap-2">
                                            {project
                                                .stack
                                                .iter()
                                                .map(|tech| {
                                                    view! {
                                                        <span class="px-4 py-2 text-sm font-medium rounded-full glass text-foreground">
                                                            {tech.clone()}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>

                                    <div class="flex flex-wrap gap-4 pt-4 border-t border-slate-600">
                                        {(!project.live.is_empty())
                                            .then(|| {
                                                view! {
                                                    <a
                                                        href=project.live.clone()
                                                        target="_blank"
                                                        rel="noopener noreferrer"
                                                        class="btn-primary inline-flex items-center gap-2"
                                                    >
                                                        "Live Demo"
                                                    </a>
                                                }
                                            })}
                                        {(!project.repo.is_empty())
                                            .then(|| {
                                                view! {
                                                    <a
                                                        href=project.repo.clone()
                                                        target="_blank"
                                                        rel="noopener noreferrer"
                                                        class="btn-ghost inline-flex items-center gap-2"
                                                    >
                                                        "View Code"
                                                    </a>
                                                }
                                            })}
                                    </div>
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}

#[component]
fn Gallery(images: Vec<String>, selected: usize, modal: RwSignal<ProjectModal>) -> impl IntoView {
    let current = images.get(selected).cloned().unwrap_or_default();

    view! {
        <div class="space-y-4">
            <div class="glass rounded-xl overflow-hidden">
                <img src=current alt="Project screenshot" class="w-full aspect-video object-cover" />
            </div>
            {(images.len() > 1)
                .then(|| {
                    view! {
                        <div class="flex gap-2">
                            {images
                                .iter()
                                .enumerate()
                                .map(|(i, image)| {
                                    let thumb_class = if i == selected {
                                        "w-20 h-12 rounded-md overflow-hidden ring-2 ring-primary"
                                    } else {
                                        "w-20 h-12 rounded-md overflow-hidden opacity-60 hover:opacity-100 transition-opacity"
                                    };
                                    view! {
                                        <button
                                            class=thumb_class
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                modal.update(|m| m.select_image(i));
                                            }
                                        >
                                            <img
                                                src=image.clone()
                                                alt=format!("Screenshot {}", i + 1)
                                                class="w-full h-full object-cover"
                                            />
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })}
        </div>
    }
}
