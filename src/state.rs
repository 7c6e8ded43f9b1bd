//! Interaction state for the page, kept out of the view layer so the
//! transitions are plain functions with plain tests. Each section owns its
//! holder; nothing here touches the DOM.

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

use crate::content::Project;

/// Scroll offset past which the navbar switches from transparent to the
/// opaque/blurred treatment.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// How long the "Message Sent" confirmation stays up before the form clears.
pub const FORM_RESET_DELAY_MS: f64 = 3000.0;

pub const RING_RADIUS: f64 = 32.0;
pub const RING_CIRCUMFERENCE: f64 = 2.0 * std::f64::consts::PI * RING_RADIUS;

/// True once the page has scrolled past [`SCROLL_THRESHOLD`]. Called from a
/// scroll handler that can fire many times per second, so it stays a bare
/// comparison.
pub fn past_threshold(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

/// Proficiency as a ratio for the progress ring. Values above 100 are
/// clamped rather than drawn as a >100% arc.
pub fn progress_ratio(proficiency: u8) -> f64 {
    f64::from(proficiency.min(100)) / 100.0
}

/// Stroke dash offset for the ring: full circumference at 0%, zero at 100%.
pub fn ring_dash_offset(proficiency: u8) -> f64 {
    RING_CIRCUMFERENCE * (1.0 - progress_ratio(proficiency))
}

/// Mobile navigation menu. `select_and_close` always forces the menu shut;
/// the scroll side effect lives with the component, not here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn select_and_close(&mut self) {
        self.open = false;
    }
}

/// Project case-study modal. The image index belongs to the selection: any
/// change of selection resets it, so an index from one project can never be
/// applied to another.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectModal {
    selected: Option<Project>,
    image_index: usize,
}

impl ProjectModal {
    pub fn selected(&self) -> Option<&Project> {
        self.selected.as_ref()
    }

    pub fn image_index(&self) -> usize {
        self.image_index
    }

    pub fn open(&mut self, project: Project) {
        self.selected = Some(project);
        self.image_index = 0;
    }

    pub fn close(&mut self) {
        self.selected = None;
        self.image_index = 0;
    }

    /// No-op unless a project is selected and `index` addresses one of its
    /// images.
    pub fn select_image(&mut self, index: usize) {
        if let Some(project) = &self.selected {
            if index < project.images.len() {
                self.image_index = index;
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Editing,
    Submitted,
}

/// Handed out by [`ContactForm::submit`]; identifies one submission
/// generation so a delayed reset can't clobber a later state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetToken(u64);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("required field is empty: {0}")]
    MissingField(Field),
    #[error("a submission is already awaiting reset")]
    AlreadySubmitted,
}

/// Where a submitted message goes. There is no backend; the production sink
/// logs the payload and nothing can fail.
pub trait MessageSink {
    fn record(&self, message: &FormFields);
}

/// Records submissions through the `log` facade.
pub struct LogSink;

impl MessageSink for LogSink {
    fn record(&self, message: &FormFields) {
        log::info!(
            "contact message from {} <{}> re: {}: {}",
            message.name,
            message.email,
            message.subject,
            message.message
        );
    }
}

/// Contact form state machine: `Editing -> Submitted -> Editing`. Submission
/// happens in the same tick; the return to `Editing` is scheduled by the
/// component after [`FORM_RESET_DELAY_MS`] using the returned token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: FormFields,
    submitted: bool,
    generation: u64,
}

impl ContactForm {
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn status(&self) -> FormStatus {
        if self.submitted {
            FormStatus::Submitted
        } else {
            FormStatus::Editing
        }
    }

    /// Replaces exactly the named field; the rest are untouched.
    pub fn edit(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.fields.name = value,
            Field::Email => self.fields.email = value,
            Field::Subject => self.fields.subject = value,
            Field::Message => self.fields.message = value,
        }
    }

    /// Validates presence of all four fields (the same guard the native
    /// `required` attribute gives us; no format validation), records the
    /// payload with `sink`, and enters `Submitted`. A second submit while the
    /// confirmation is up is refused.
    pub fn submit(&mut self, sink: &dyn MessageSink) -> Result<ResetToken, SubmitError> {
        if self.submitted {
            return Err(SubmitError::AlreadySubmitted);
        }
        Self::require(Field::Name, &self.fields.name)?;
        Self::require(Field::Email, &self.fields.email)?;
        Self::require(Field::Subject, &self.fields.subject)?;
        Self::require(Field::Message, &self.fields.message)?;

        sink.record(&self.fields);
        self.submitted = true;
        self.generation += 1;
        Ok(ResetToken(self.generation))
    }

    /// Completes the timed reset: clears the fields and returns to `Editing`,
    /// but only for the submission the token belongs to. Stale tokens (and
    /// tokens arriving after the form already reset) do nothing.
    pub fn finish_reset(&mut self, token: ResetToken) {
        if self.submitted && token.0 == self.generation {
            self.fields = FormFields::default();
            self.submitted = false;
        }
    }

    fn require(field: Field, value: &str) -> Result<(), SubmitError> {
        if value.trim().is_empty() {
            Err(SubmitError::MissingField(field))
        } else {
            Ok(())
        }
    }
}

/// One-shot viewport latches, one per section id. A section that has been
/// seen once stays seen for the page's lifetime, so entrance animations never
/// replay.
#[derive(Debug, Clone, Default)]
pub struct SeenSections {
    seen: HashSet<String>,
}

impl SeenSections {
    pub fn has_been_seen(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    /// Returns true only when this call newly latched the section.
    pub fn mark_seen(&mut self, id: &str) -> bool {
        self.seen.insert(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::content::Project;

    fn project(id: &str, images: &[&str]) -> Project {
        Project {
            id: id.to_string(),
            title: format!("Project {id}"),
            summary: String::new(),
            role: String::new(),
            stack: Vec::new(),
            impact: String::new(),
            period: String::new(),
            images: images.iter().map(|s| s.to_string()).collect(),
            repo: String::new(),
            live: String::new(),
            problem: String::new(),
            solution: String::new(),
            tech_details: Vec::new(),
            metrics: Vec::new(),
        }
    }

    /// Test sink that remembers every payload it was handed.
    struct RecordingSink {
        messages: RefCell<Vec<FormFields>>,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self {
                messages: RefCell::new(Vec::new()),
            }
        }
    }

    impl MessageSink for RecordingSink {
        fn record(&self, message: &FormFields) {
            self.messages.borrow_mut().push(message.clone());
        }
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::default();
        form.edit(Field::Name, "Ada".to_string());
        form.edit(Field::Email, "ada@example.com".to_string());
        form.edit(Field::Subject, "Hello".to_string());
        form.edit(Field::Message, "Let's build something.".to_string());
        form
    }

    #[test]
    fn menu_toggle_flips_and_select_forces_closed() {
        let mut menu = NavMenu::default();
        assert!(!menu.is_open());

        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());

        // closed independent of prior state
        menu.select_and_close();
        assert!(!menu.is_open());
        menu.toggle();
        menu.select_and_close();
        assert!(!menu.is_open());
    }

    #[test]
    fn opening_another_project_resets_image_index() {
        let mut modal = ProjectModal::default();
        modal.open(project("p1", &["a.png", "b.png", "c.png"]));
        modal.select_image(2);
        assert_eq!(modal.image_index(), 2);

        modal.open(project("p2", &["x.png"]));
        assert_eq!(modal.selected().map(|p| p.id.as_str()), Some("p2"));
        assert_eq!(modal.image_index(), 0);
    }

    #[test]
    fn close_clears_selection_and_index() {
        let mut modal = ProjectModal::default();
        modal.open(project("p1", &["a.png", "b.png"]));
        modal.select_image(1);

        modal.close();
        assert!(modal.selected().is_none());
        assert_eq!(modal.image_index(), 0);
    }

    #[test]
    fn select_image_ignores_out_of_range_and_no_selection() {
        let mut modal = ProjectModal::default();
        modal.select_image(3);
        assert_eq!(modal.image_index(), 0);

        modal.open(project("p1", &["a.png"]));
        modal.select_image(5);
        assert_eq!(modal.image_index(), 0);
    }

    #[test]
    fn submit_records_payload_and_reset_clears_fields() {
        let sink = RecordingSink::new();
        let mut form = filled_form();

        let token = form.submit(&sink).expect("filled form should submit");
        assert_eq!(form.status(), FormStatus::Submitted);
        assert_eq!(sink.messages.borrow().len(), 1);
        assert_eq!(sink.messages.borrow()[0].name, "Ada");

        form.finish_reset(token);
        assert_eq!(form.status(), FormStatus::Editing);
        assert_eq!(*form.fields(), FormFields::default());
    }

    #[test]
    fn submit_refuses_empty_required_fields() {
        let sink = RecordingSink::new();
        for missing in [Field::Name, Field::Email, Field::Subject, Field::Message] {
            let mut form = filled_form();
            form.edit(missing, "   ".to_string());
            let err = form.submit(&sink).unwrap_err();
            assert_eq!(err, SubmitError::MissingField(missing));
            assert_eq!(form.status(), FormStatus::Editing);
        }
        assert!(sink.messages.borrow().is_empty());
    }

    #[test]
    fn second_submit_during_countdown_is_refused() {
        let sink = RecordingSink::new();
        let mut form = filled_form();
        let token = form.submit(&sink).unwrap();

        assert_eq!(form.submit(&sink), Err(SubmitError::AlreadySubmitted));
        assert_eq!(sink.messages.borrow().len(), 1);

        form.finish_reset(token);
        assert_eq!(form.status(), FormStatus::Editing);
    }

    #[test]
    fn stale_reset_token_is_a_no_op() {
        let sink = RecordingSink::new();
        let mut form = filled_form();
        let first = form.submit(&sink).unwrap();
        form.finish_reset(first);

        // fill and submit again; the old token must not clear new state
        form.edit(Field::Name, "Grace".to_string());
        form.edit(Field::Email, "grace@example.com".to_string());
        form.edit(Field::Subject, "Again".to_string());
        form.edit(Field::Message, "Second round.".to_string());
        let _second = form.submit(&sink).unwrap();

        form.finish_reset(first);
        assert_eq!(form.status(), FormStatus::Submitted);
        assert_eq!(form.fields().name, "Grace");
    }

    #[test]
    fn reset_after_form_already_editing_is_a_no_op() {
        let sink = RecordingSink::new();
        let mut form = filled_form();
        let token = form.submit(&sink).unwrap();
        form.finish_reset(token);

        form.edit(Field::Name, "Grace".to_string());
        form.finish_reset(token);
        assert_eq!(form.fields().name, "Grace");
    }

    #[test]
    fn edit_touches_only_the_named_field() {
        let mut form = filled_form();
        form.edit(Field::Subject, "Changed".to_string());
        assert_eq!(form.fields().name, "Ada");
        assert_eq!(form.fields().email, "ada@example.com");
        assert_eq!(form.fields().subject, "Changed");
        assert_eq!(form.fields().message, "Let's build something.");
    }

    #[test]
    fn threshold_flips_only_past_fifty() {
        // offset sweep 0 -> 120 -> back
        assert!(!past_threshold(0.0));
        assert!(!past_threshold(49.9));
        assert!(!past_threshold(50.0));
        assert!(past_threshold(50.1));
        assert!(past_threshold(120.0));
        assert!(!past_threshold(12.0));
    }

    #[test]
    fn ring_ratio_boundaries() {
        assert_eq!(progress_ratio(0), 0.0);
        assert_eq!(progress_ratio(100), 1.0);
        assert_eq!(progress_ratio(85), 0.85);
        // out of range clamps instead of overdrawing
        assert_eq!(progress_ratio(140), 1.0);

        assert_eq!(ring_dash_offset(0), RING_CIRCUMFERENCE);
        assert_eq!(ring_dash_offset(100), 0.0);
    }

    #[test]
    fn seen_sections_latch_once() {
        let mut seen = SeenSections::default();
        assert!(!seen.has_been_seen("about"));

        assert!(seen.mark_seen("about"));
        assert!(seen.has_been_seen("about"));

        // re-entering the viewport does not replay
        assert!(!seen.mark_seen("about"));
        assert!(seen.has_been_seen("about"));
        assert!(!seen.has_been_seen("skills"));
    }
}
