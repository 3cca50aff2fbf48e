use std::time::Duration;

use shared::protocol::ContactSubmission;

use crate::{
    dom::{Document, ElementId},
    settings::{ms, ControllerSettings},
};

use super::{EventOutcome, TimerTask, Timers};

const SENDING_LABEL: &str = "Envoi en cours...";
const SENT_LABEL: &str = "Message envoyé !";
const SENT_BACKGROUND: &str = "#2ecc71";
const FORM_FIELDS: &str = "input, textarea, select";

/// Button feedback for `#contact-form`: sending, sent, then back to idle with
/// the fields cleared.
#[derive(Debug, Clone)]
pub struct SubmitFeedback {
    form: ElementId,
    button: ElementId,
    original_label: Option<String>,
    sent_after: Duration,
    reset_after: Duration,
}

impl SubmitFeedback {
    pub fn register(doc: &Document, settings: &ControllerSettings) -> Option<Self> {
        let form = doc.query("#contact-form")?;
        let button = doc.query_within(form, r#"button[type="submit"]"#)?;
        Some(Self {
            form,
            button,
            original_label: None,
            sent_after: ms(settings.submit_sent_ms),
            reset_after: ms(settings.submit_reset_ms),
        })
    }

    pub fn form(&self) -> ElementId {
        self.form
    }

    pub fn is_in_flight(&self) -> bool {
        self.original_label.is_some()
    }

    /// `None` when the submit event did not come from this form.
    pub fn on_submit(
        &mut self,
        doc: &mut Document,
        timers: &mut Timers,
        target: ElementId,
    ) -> Option<EventOutcome> {
        if !doc.contains(self.form, target) {
            return None;
        }
        if self.is_in_flight() {
            return Some(EventOutcome::PreventDefault);
        }

        self.original_label = Some(doc.text(self.button).to_string());
        doc.set_text(self.button, SENDING_LABEL);
        doc.set_attr(self.button, "disabled", "");
        doc.set_style(self.button, "opacity", "0.7");
        timers.schedule(self.sent_after, TimerTask::SubmitSent);
        Some(EventOutcome::PreventDefault)
    }

    pub fn mark_sent(&self, doc: &mut Document, timers: &mut Timers) {
        doc.set_text(self.button, SENT_LABEL);
        doc.set_style(self.button, "background", SENT_BACKGROUND);
        timers.schedule(self.reset_after, TimerTask::SubmitReset);
    }

    pub fn reset(&mut self, doc: &mut Document) {
        if let Some(label) = self.original_label.take() {
            doc.set_text(self.button, &label);
        }
        doc.remove_attr(self.button, "disabled");
        doc.set_style(self.button, "opacity", "1");
        doc.remove_style(self.button, "background");
        for field in doc.query_all_within(self.form, FORM_FIELDS) {
            doc.remove_attr(field, "value");
            doc.set_text(field, "");
        }
    }

    /// Current field values, keyed by their `name` attributes.
    pub fn submission(&self, doc: &Document) -> ContactSubmission {
        let field = |name: &str| {
            let selector = format!(r#"[name="{name}"]"#);
            doc.query_within(self.form, &selector).map(|el| {
                doc.attr(el, "value")
                    .map(str::to_string)
                    .unwrap_or_else(|| doc.text(el).to_string())
            })
        };
        ContactSubmission {
            name: field("nom"),
            email: field("email"),
            message: field("message"),
        }
    }
}
