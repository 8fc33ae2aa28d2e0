// src/error.rs
use thiserror::Error;

/// Feed retrieval failures: transport trouble or a payload we cannot parse.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("feed request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("feed returned status {status}")]
    Status { status: u16 },
    #[error("malformed feed payload: {0}")]
    Parse(#[from] quick_xml::DeError),
}

#[derive(Debug, Error)]
pub enum SummarizationError {
    #[error("summarizer request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("summarizer returned status {status}: {body}")]
    Api { status: u16, body: String },
    #[error("summarizer returned no content")]
    Empty,
}

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("push request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("push endpoint rejected message: status {status}, body {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("no push recipient configured; set one of LINE_USER_ID, LINE_GROUP_ID, LINE_ROOM_ID")]
    MissingRecipient,
    #[error("{0} push recipients configured; exactly one of LINE_USER_ID, LINE_GROUP_ID, LINE_ROOM_ID is allowed")]
    AmbiguousRecipient(usize),
    #[error("missing required environment variable {0}")]
    MissingEnv(&'static str),
    #[error("invalid value for {name}: {value:?}")]
    BadValue { name: &'static str, value: String },
    #[error("unknown timezone {0:?}")]
    BadTimezone(String),
    #[error("reading subject list from {path}: {source}")]
    SubjectsIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing subject list from {path}: {source}")]
    SubjectsParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("subject list is empty")]
    NoSubjects,
}

/// Top-level run error. Each variant names the stage that failed so a log
/// line can tell "fetch failed for subject X" apart from "chunk 3 rejected".
#[derive(Debug, Error)]
pub enum DigestError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigurationError),
    #[error("fetching news for {subject}: {source}")]
    Fetch {
        subject: String,
        #[source]
        source: FetchError,
    },
    #[error("summarization: {0}")]
    Summarize(#[from] SummarizationError),
    #[error("delivering chunk {chunk} of {total}: {source}")]
    Delivery {
        chunk: usize,
        total: usize,
        #[source]
        source: DeliveryError,
    },
}
