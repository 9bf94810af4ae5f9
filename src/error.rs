use thiserror::Error;

/// Everything that can abort a seeding run. None of these are recovered
/// from locally.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response status from {url}: {status} {reason}{}", message_suffix(.message))]
    Request {
        url: String,
        status: u16,
        reason: String,
        message: Option<String>,
    },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not encode request body for {url}: {source}")]
    Encode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("response from {url} has no `{key}` object")]
    MissingEnvelope { url: String, key: &'static str },

    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl SeedError {
    /// HTTP status for `Request` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            SeedError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The URL the failing call was made against, when known.
    pub fn url(&self) -> Option<&str> {
        match self {
            SeedError::Request { url, .. }
            | SeedError::Decode { url, .. }
            | SeedError::Encode { url, .. }
            | SeedError::MissingEnvelope { url, .. } => Some(url),
            SeedError::Transport(e) => e.url().map(|u| u.as_str()),
            _ => None,
        }
    }
}

fn message_suffix(message: &Option<String>) -> String {
    match message {
        Some(m) => format!(" ({m})"),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, SeedError>;
