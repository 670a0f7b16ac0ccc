//! Contact form handling: remote/mailto delivery or inline validation, chosen by config.

pub mod mailto;
pub mod transport;
pub mod validation;

use std::{cell::Cell, rc::Rc};

use shared::{
    domain::{ElementRef, MessageKind},
    error::{SubmitError, ValidationError},
    protocol::{
        DomPatch, EndpointErrorBody, Schedule, Task, FIELD_EMAIL, FIELD_ENDPOINT_SUBJECT,
        FIELD_HONEYPOT, FIELD_MESSAGE, FIELD_NAME, FIELD_SUBJECT,
    },
};
use tracing::{debug, info, warn};

use crate::{
    config::{FormConfig, FormMode},
    surface::Surface,
};

pub use transport::{FormTransport, HttpFormTransport, MissingFormTransport};

/// The form as it stood when the visitor pressed submit.
#[derive(Debug, Clone, Default)]
pub struct FormSnapshot {
    pub fields: Vec<(String, String)>,
    /// Raw `action` attribute; empty selects the `mailto:` fallback.
    pub action: String,
    pub page_url: Option<String>,
    /// `href` of the page's `mailto:` contact link, if there is one.
    pub mail_link: Option<String>,
}

impl FormSnapshot {
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    /// First value submitted under `name`, trimmed; empty when absent.
    pub fn value(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.trim())
            .unwrap_or("")
    }

    fn set(&mut self, name: &str, value: &str) {
        self.fields.retain(|(field, _)| field != name);
        self.fields.push((name.to_string(), value.to_string()));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Honeypot filled; dropped without telling anyone.
    Ignored,
    MailtoOpened(String),
    Delivered,
    Failed(SubmitError),
    Invalid(ValidationError),
    /// Inline acknowledgement scheduled after the simulated delay.
    Scheduled,
}

pub struct ContactForm {
    mode: FormMode,
    config: FormConfig,
    transport: Rc<dyn FormTransport>,
    message_generation: Cell<u64>,
}

impl ContactForm {
    pub fn new(config: FormConfig, transport: Rc<dyn FormTransport>) -> Self {
        Self {
            mode: config.mode,
            config,
            transport,
            message_generation: Cell::new(0),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub async fn submit(&self, form: FormSnapshot, surface: &dyn Surface) -> SubmitOutcome {
        match self.mode {
            FormMode::Remote => self.submit_remote(form, surface).await,
            FormMode::Inline => self.submit_inline(&form, surface),
        }
    }

    async fn submit_remote(&self, mut form: FormSnapshot, surface: &dyn Surface) -> SubmitOutcome {
        surface.apply(DomPatch::SetStyle {
            target: ElementRef::ContactStatus,
            property: "display",
            value: "block".into(),
        });
        surface.apply(DomPatch::SetText {
            target: ElementRef::ContactStatus,
            text: String::new(),
        });

        if !form.value(FIELD_HONEYPOT).is_empty() {
            debug!("honeypot filled; dropping submission");
            return SubmitOutcome::Ignored;
        }

        let subject = form.value(FIELD_SUBJECT).to_string();
        let message = form.value(FIELD_MESSAGE).to_string();

        if form.action.trim().is_empty() {
            let address = mailto::address_from_link(form.mail_link.as_deref());
            let uri = mailto::mailto_uri(&address, &subject, &message);
            info!("no form endpoint configured; opening mail client");
            surface.apply(DomPatch::Navigate(uri.clone()));
            return SubmitOutcome::MailtoOpened(uri);
        }

        self.set_submitting(true, surface);

        if !subject.is_empty() {
            form.set(FIELD_ENDPOINT_SUBJECT, &subject);
        }

        let result = self.deliver(&form).await;
        match &result {
            Ok(()) => {
                info!("contact form delivered");
                surface.apply(DomPatch::Alert(self.config.thank_you.clone()));
                surface.apply(DomPatch::ResetForm);
                surface.apply(DomPatch::SetText {
                    target: ElementRef::ContactStatus,
                    text: String::new(),
                });
            }
            Err(err) => {
                warn!(error = %err, "contact form delivery failed");
                surface.apply(DomPatch::Alert(err.visitor_message(
                    &self.config.generic_error,
                    &self.config.network_error,
                )));
            }
        }

        self.set_submitting(false, surface);

        match result {
            Ok(()) => SubmitOutcome::Delivered,
            Err(err) => SubmitOutcome::Failed(err),
        }
    }

    async fn deliver(&self, form: &FormSnapshot) -> Result<(), SubmitError> {
        let endpoint = transport::resolve_endpoint(form.page_url.as_deref(), &form.action)
            .map_err(|err| SubmitError::Network(format!("{err:#}")))?;

        let response = self
            .transport
            .post_form(&endpoint, &form.fields)
            .await
            .map_err(|err| SubmitError::Network(format!("{err:#}")))?;

        if response.is_success() {
            return Ok(());
        }

        let messages = serde_json::from_str::<EndpointErrorBody>(&response.body)
            .map(|body| body.messages())
            .unwrap_or_default();
        Err(SubmitError::Rejected {
            status: response.status,
            messages,
        })
    }

    fn submit_inline(&self, form: &FormSnapshot, surface: &dyn Surface) -> SubmitOutcome {
        if let Err(err) = validation::validate(
            form.value(FIELD_NAME),
            form.value(FIELD_EMAIL),
            form.value(FIELD_MESSAGE),
        ) {
            debug!(field = err.field(), "contact form rejected");
            self.show_message(MessageKind::Error, err.to_string(), surface);
            return SubmitOutcome::Invalid(err);
        }

        self.set_submitting(true, surface);
        surface.schedule(
            Schedule::After(self.config.inline_delay()),
            Task::CompleteInlineSubmission,
        );
        SubmitOutcome::Scheduled
    }

    /// Ends the simulated inline submission.
    pub fn complete_inline(&self, surface: &dyn Surface) {
        self.show_message(MessageKind::Success, self.config.thank_you.clone(), surface);
        surface.apply(DomPatch::ResetForm);
        self.set_submitting(false, surface);
    }

    fn set_submitting(&self, submitting: bool, surface: &dyn Surface) {
        let label = if submitting {
            &self.config.sending_label
        } else {
            &self.config.submit_label
        };
        surface.apply(DomPatch::SetControl {
            target: ElementRef::SubmitButton,
            disabled: submitting,
            label: label.clone(),
        });
    }

    fn show_message(&self, kind: MessageKind, text: String, surface: &dyn Surface) {
        let generation = self.message_generation.get() + 1;
        self.message_generation.set(generation);
        surface.apply(DomPatch::ShowFormMessage { kind, text });
        surface.schedule(
            Schedule::After(self.config.message_dismiss()),
            Task::DismissFormMessage { generation },
        );
    }

    /// Starts fading the message out, unless a newer one replaced it.
    pub fn dismiss_message(&self, generation: u64, surface: &dyn Surface) {
        if generation != self.message_generation.get() {
            return;
        }
        surface.apply(DomPatch::FadeFormMessage);
        surface.schedule(
            Schedule::After(self.config.message_fade()),
            Task::RemoveFormMessage { generation },
        );
    }

    pub fn remove_message(&self, generation: u64, surface: &dyn Surface) {
        if generation == self.message_generation.get() {
            surface.apply(DomPatch::RemoveFormMessage);
        }
    }
}

#[cfg(test)]
#[path = "tests/contact_tests.rs"]
mod tests;
