use leptos::{
    either::Either,
    ev::{Event, SubmitEvent},
    prelude::*,
};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::content::PROFILE;
use crate::links;
use crate::state::{ContactForm, Field, FormStatus, LogSink, ResetToken, FORM_RESET_DELAY_MS};

use super::section::Reveal;

#[component]
pub fn Contact() -> impl IntoView {
    let contact = &PROFILE.contact;
    let email_href = links::mailto_with_template(
        &contact.email,
        "Let's work together",
        &format!(
            "Hi {},\r\n\r\nI came across your portfolio and would love to connect.",
            PROFILE.name.split_whitespace().next().unwrap_or(&PROFILE.name),
        ),
    );

    view! {
        <Reveal id="contact" class="py-20 relative">
            <div class="container mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-6">
                        <span class="gradient-text">"Get In Touch"</span>
                    </h2>
                    <p class="text-xl text-muted max-w-3xl mx-auto">
                        "Have a project in mind or want to discuss opportunities? I'd love to hear from you."
                    </p>
                </div>

                <div class="grid lg:grid-cols-2 gap-12 max-w-5xl mx-auto">
                    <div class="space-y-8">
                        <div class="space-y-4">
                            <ContactMethod
                                label="Email"
                                value=contact.email.clone()
                                href=email_href
                            />
                            <ContactMethod
                                label="Phone"
                                value=contact.phone.clone()
                                href=links::tel(&contact.phone)
                            />
                            <ContactMethod
                                label="Location"
                                value=contact.location.clone()
                                href=links::map_search(&contact.location)
                            />
                        </div>

                        <div class="glass p-6 rounded-xl">
                            <h3 class="text-lg font-semibold mb-4 text-foreground">"Quick Actions"</h3>
                            <div class="flex flex-col gap-3">
                                <a href=contact.linkedin.clone() target="_blank" rel="noopener noreferrer" class="btn-ghost">
                                    "Connect on LinkedIn"
                                </a>
                                <a href=contact.github.clone() target="_blank" rel="noopener noreferrer" class="btn-ghost">
                                    "Follow on GitHub"
                                </a>
                                <a href=PROFILE.resume_path.clone() download class="btn-ghost">
                                    "Download Resume"
                                </a>
                            </div>
                        </div>
                    </div>

                    <MessagePanel />
                </div>
            </div>
        </Reveal>
    }
}

#[component]
fn ContactMethod(label: &'static str, value: String, href: String) -> impl IntoView {
    view! {
        <a href=href target="_blank" rel="noopener noreferrer" class="glass-hover p-4 rounded-xl flex items-center gap-4">
            <div>
                <p class="text-sm text-muted">{label}</p>
                <p class="text-foreground font-medium">{value}</p>
            </div>
        </a>
    }
}

#[component]
fn MessagePanel() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());

    let UseTimeoutFnReturn { start: start_reset, .. } = use_timeout_fn(
        move |token: ResetToken| {
            // No-op if the panel was torn down before the delay elapsed.
            let _ = form.try_update(|f| f.finish_reset(token));
        },
        FORM_RESET_DELAY_MS,
    );

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.try_update(|f| f.submit(&LogSink)) {
            Some(Ok(token)) => start_reset(token),
            Some(Err(err)) => log::warn!("contact form submit refused: {err}"),
            None => {}
        }
    };

    let edit = move |field: Field| {
        move |ev: Event| {
            let value = event_target_value(&ev);
            form.update(|f| f.edit(field, value));
        }
    };

    view! {
        <div class="glass p-8 rounded-2xl">
            {move || {
                if form.with(|f| f.status() == FormStatus::Submitted) {
                    Either::Left(
                        view! {
                            <div class="text-center py-12 space-y-4">
                                <div class="text-5xl">"\u{2713}"</div>
                                <h3 class="text-2xl font-bold text-foreground">"Message Sent!"</h3>
                                <p class="text-muted">
                                    "Thanks for reaching out. I'll get back to you soon."
                                </p>
                            </div>
                        },
                    )
                } else {
                    Either::Right(
                        view! {
                            <form class="space-y-6" on:submit=on_submit.clone()>
                                <div class="grid sm:grid-cols-2 gap-6">
                                    <label class="block">
                                        <span class="text-sm font-medium text-muted">"Name"</span>
                                        <input
                                            type="text"
                                            class="form-input"
                                            placeholder="Your name"
                                            prop:value=move || form.with(|f| f.fields().name.clone())
                                            on:input=edit(Field::Name)
                                        />
                                    </label>
                                    <label class="block">
                                        <span class="text-sm font-medium text-muted">"Email"</span>
                                        <input
                                            type="email"
                                            class="form-input"
                                            placeholder="you@example.com"
                                            prop:value=move || form.with(|f| f.fields().email.clone())
                                            on:input=edit(Field::Email)
                                        />
                                    </label>
                                </div>
                                <label class="block">
                                    <span class="text-sm font-medium text-muted">"Subject"</span>
                                    <input
                                        type="text"
                                        class="form-input"
                                        placeholder="What's this about?"
                                        prop:value=move || form.with(|f| f.fields().subject.clone())
                                        on:input=edit(Field::Subject)
                                    />
                                </label>
                                <label class="block">
                                    <span class="text-sm font-medium text-muted">"Message"</span>
                                    <textarea
                                        class="form-input min-h-32"
                                        placeholder="Tell me about your project..."
                                        prop:value=move || form.with(|f| f.fields().message.clone())
                                        on:input=edit(Field::Message)
                                    ></textarea>
                                </label>
                                <button type="submit" class="btn-primary w-full">
                                    "Send Message"
                                </button>
                            </form>
                        },
                    )
                }
            }}
        </div>
    }
}
