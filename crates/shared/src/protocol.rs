use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::{AnimatedIndex, ElementRef, HoverTarget, MessageKind};

pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_SUBJECT: &str = "subject";
pub const FIELD_MESSAGE: &str = "message";
pub const FIELD_HONEYPOT: &str = "_gotcha";
pub const FIELD_ENDPOINT_SUBJECT: &str = "_subject";

/// JSON body a form endpoint returns alongside a non-2xx status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EndpointErrorBody {
    #[serde(default)]
    pub errors: Vec<EndpointErrorItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointErrorItem {
    pub message: String,
}

impl EndpointErrorBody {
    pub fn messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .map(|item| item.message.clone())
            .filter(|message| !message.is_empty())
            .collect()
    }
}

/// Raw answer of a form endpoint, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointResponse {
    pub status: u16,
    pub body: String,
}

impl EndpointResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One mutation of the document.
#[derive(Debug, Clone, PartialEq)]
pub enum DomPatch {
    SetClass {
        target: ElementRef,
        class: &'static str,
        enabled: bool,
    },
    SetStyle {
        target: ElementRef,
        property: &'static str,
        value: String,
    },
    SetAttribute {
        target: ElementRef,
        name: &'static str,
        value: String,
    },
    SetText {
        target: ElementRef,
        text: String,
    },
    AppendText {
        target: ElementRef,
        text: String,
    },
    ShowTypingCursor {
        target: ElementRef,
    },
    RemoveTypingCursor {
        target: ElementRef,
    },
    SetControl {
        target: ElementRef,
        disabled: bool,
        label: String,
    },
    /// Replace any visible form message with this one.
    ShowFormMessage {
        kind: MessageKind,
        text: String,
    },
    FadeFormMessage,
    RemoveFormMessage,
    ResetForm,
    Alert(String),
    Navigate(String),
    ScrollIntoView(ElementRef),
    Observe(ElementRef),
}

/// When the host should hand a [`Task`] back to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    NextFrame,
    After(Duration),
}

/// Deferred work the page asked the host to run later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    RecomputeNavbar,
    RecomputeActiveSection,
    TypeNextChar,
    RemoveTypingCursor,
    ResetHover(HoverTarget),
    RevealChild {
        parent: AnimatedIndex,
        child: usize,
    },
    FadeInBody,
    CompleteInlineSubmission,
    DismissFormMessage { generation: u64 },
    RemoveFormMessage { generation: u64 },
}
