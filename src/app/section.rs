use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::state::SeenSections;

/// Section wrapper that plays the entrance animation the first time the
/// element scrolls into view, and never again. The latch set lives in
/// context so every section shares one `SeenSections` keyed by id.
#[component]
pub fn Reveal(
    /// DOM id of the section; also the key of its one-shot latch.
    id: &'static str,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let seen = expect_context::<RwSignal<SeenSections>>();
    let node = NodeRef::<html::Section>::new();
    let visible = use_element_visibility(node);

    Effect::new(move |_| {
        if visible.get() && !seen.with_untracked(|s| s.has_been_seen(id)) {
            seen.update(|s| {
                s.mark_seen(id);
            });
        }
    });

    let section_class = move || {
        let base = if seen.with(|s| s.has_been_seen(id)) {
            "section-shell is-seen"
        } else {
            "section-shell"
        };
        if class.is_empty() {
            base.to_string()
        } else {
            format!("{base} {class}")
        }
    };

    view! {
        <section id=id node_ref=node class=section_class>
            {children()}
        </section>
    }
}
