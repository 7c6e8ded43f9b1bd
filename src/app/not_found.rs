use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFound() -> impl IntoView {
    let location = use_location();
    let path = location.pathname;

    // Effects only run in the browser, so the miss is logged client-side.
    Effect::new(move |_| {
        log::warn!("no route matches {}", path.get());
    });

    let go_back = move |_| {
        if let Ok(history) = window().history() {
            let _ = history.back();
        }
    };

    view! {
        <Title text="Page Not Found" />
        <div class="min-h-screen flex items-center justify-center px-6">
            <div class="glass p-12 rounded-2xl text-center max-w-lg space-y-6">
                <p class="text-7xl font-bold gradient-text">"404"</p>
                <h1 class="text-2xl font-bold text-foreground">"Page Not Found"</h1>
                <p class="text-muted">
                    "The page " <code class="text-primary">{move || path.get()}</code>
                    " doesn't exist. It may have been moved, or the link is stale."
                </p>
                <div class="flex flex-wrap justify-center gap-4">
                    <a href="/" class="btn-primary">
                        "Go Home"
                    </a>
                    <button class="btn-ghost" on:click=go_back>
                        "Go Back"
                    </button>
                </div>
            </div>
        </div>
    }
}
