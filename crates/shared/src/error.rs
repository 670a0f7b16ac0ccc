use thiserror::Error;

/// Field-level rejection from the inline-validation form strategy.
///
/// `Display` is the exact text shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Name must be at least 2 characters long")]
    NameTooShort,
    #[error("Please enter your email address")]
    MissingEmail,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a message")]
    MissingMessage,
    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingName | ValidationError::NameTooShort => "name",
            ValidationError::MissingEmail | ValidationError::InvalidEmail => "email",
            ValidationError::MissingMessage | ValidationError::MessageTooShort => "message",
        }
    }
}

/// Failure of a remote form submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The endpoint answered with a non-2xx status. `messages` holds whatever
    /// the JSON body reported, possibly nothing.
    #[error("endpoint rejected submission with status {status}")]
    Rejected { status: u16, messages: Vec<String> },
    #[error("network failure: {0}")]
    Network(String),
}

impl SubmitError {
    /// Text for the visitor: server messages joined with ", ", or `fallback`.
    pub fn visitor_message(&self, fallback: &str, network: &str) -> String {
        match self {
            SubmitError::Rejected { messages, .. } if !messages.is_empty() => messages.join(", "),
            SubmitError::Rejected { .. } => fallback.to_string(),
            SubmitError::Network(_) => network.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed site config: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("unknown form mode '{0}'")]
    UnknownFormMode(String),
}
