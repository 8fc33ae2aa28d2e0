// src/config.rs
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ConfigurationError;

const ENV_SUBJECTS_PATH: &str = "DIGEST_SUBJECTS_PATH";
const DEFAULT_SUBJECTS_PATH: &str = "config/subjects.toml";

const DEFAULT_FETCH_COUNT: usize = 8;
const DEFAULT_PER_SUBJECT_CAP: usize = 4;
const DEFAULT_MAX_CHUNK_LEN: usize = 1200;
const DEFAULT_SUMMARY_MAX_TOKENS: u32 = 240;
const DEFAULT_TIMEZONE: &str = "Asia/Tokyo";

/// One tracked instrument: stable key + the feed search query for it.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Subject {
    pub key: String,
    pub query: String,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub subjects: Vec<Subject>,
    pub fetch_count: usize,
    pub per_subject_cap: usize,
    pub max_chunk_len: usize,
    pub summary_max_tokens: u32,
    pub timezone: chrono_tz::Tz,
}

impl Settings {
    /// Build settings from the environment, with defaults for everything.
    /// Numeric knobs: DIGEST_FETCH_COUNT, DIGEST_PER_SUBJECT_CAP,
    /// DIGEST_MAX_CHUNK_LEN, DIGEST_SUMMARY_MAX_TOKENS; zone: DIGEST_TIMEZONE.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        let subjects = load_subjects_default()?;
        let timezone = match std::env::var("DIGEST_TIMEZONE") {
            Ok(v) => chrono_tz::Tz::from_str(v.trim())
                .map_err(|_| ConfigurationError::BadTimezone(v))?,
            Err(_) => chrono_tz::Tz::from_str(DEFAULT_TIMEZONE).expect("default timezone"),
        };
        Ok(Self {
            subjects,
            fetch_count: env_parse("DIGEST_FETCH_COUNT", DEFAULT_FETCH_COUNT)?,
            per_subject_cap: env_parse("DIGEST_PER_SUBJECT_CAP", DEFAULT_PER_SUBJECT_CAP)?,
            max_chunk_len: env_parse("DIGEST_MAX_CHUNK_LEN", DEFAULT_MAX_CHUNK_LEN)?,
            summary_max_tokens: env_parse("DIGEST_SUMMARY_MAX_TOKENS", DEFAULT_SUMMARY_MAX_TOKENS)?,
            timezone,
        })
    }
}

fn env_parse<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigurationError> {
    match std::env::var(name) {
        Ok(v) => match v.trim().parse() {
            Ok(parsed) => Ok(parsed),
            Err(_) => Err(ConfigurationError::BadValue { name, value: v }),
        },
        Err(_) => Ok(default),
    }
}

/// Load the subject list from an explicit TOML path.
pub fn load_subjects_from(path: &Path) -> Result<Vec<Subject>, ConfigurationError> {
    #[derive(Deserialize)]
    struct SubjectsFile {
        subjects: Vec<Subject>,
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigurationError::SubjectsIo {
        path: path.display().to_string(),
        source,
    })?;
    let parsed: SubjectsFile =
        toml::from_str(&content).map_err(|source| ConfigurationError::SubjectsParse {
            path: path.display().to_string(),
            source,
        })?;

    let cleaned: Vec<Subject> = parsed
        .subjects
        .into_iter()
        .map(|s| Subject {
            key: s.key.trim().to_string(),
            query: s.query.trim().to_string(),
        })
        .filter(|s| !s.key.is_empty() && !s.query.is_empty())
        .collect();
    if cleaned.is_empty() {
        return Err(ConfigurationError::NoSubjects);
    }
    Ok(cleaned)
}

/// Load subjects using env var + fallbacks:
/// 1) $DIGEST_SUBJECTS_PATH (must exist)
/// 2) config/subjects.toml
/// 3) compiled-in default list
pub fn load_subjects_default() -> Result<Vec<Subject>, ConfigurationError> {
    if let Ok(p) = std::env::var(ENV_SUBJECTS_PATH) {
        return load_subjects_from(&PathBuf::from(p));
    }
    let default = PathBuf::from(DEFAULT_SUBJECTS_PATH);
    if default.exists() {
        return load_subjects_from(&default);
    }
    Ok(builtin_subjects())
}

fn builtin_subjects() -> Vec<Subject> {
    [
        ("AAPL", "Apple stock"),
        ("MSFT", "Microsoft stock"),
        ("GOOGL", "Alphabet stock"),
        ("AMZN", "Amazon stock"),
        ("NVDA", "Nvidia stock"),
    ]
    .iter()
    .map(|(k, q)| Subject {
        key: (*k).to_string(),
        query: (*q).to_string(),
    })
    .collect()
}

/// Push destination, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipient {
    User(String),
    Group(String),
    Room(String),
}

impl Recipient {
    pub fn id(&self) -> &str {
        match self {
            Recipient::User(id) | Recipient::Group(id) | Recipient::Room(id) => id,
        }
    }
}

/// Exactly one of the three ids must be set; blank strings count as absent.
pub fn resolve_recipient(
    user: Option<String>,
    group: Option<String>,
    room: Option<String>,
) -> Result<Recipient, ConfigurationError> {
    let user = user.filter(|s| !s.trim().is_empty());
    let group = group.filter(|s| !s.trim().is_empty());
    let room = room.filter(|s| !s.trim().is_empty());

    let set = usize::from(user.is_some()) + usize::from(group.is_some()) + usize::from(room.is_some());
    match (user, group, room) {
        (Some(id), None, None) => Ok(Recipient::User(id)),
        (None, Some(id), None) => Ok(Recipient::Group(id)),
        (None, None, Some(id)) => Ok(Recipient::Room(id)),
        (None, None, None) => Err(ConfigurationError::MissingRecipient),
        _ => Err(ConfigurationError::AmbiguousRecipient(set)),
    }
}

pub fn recipient_from_env() -> Result<Recipient, ConfigurationError> {
    resolve_recipient(
        std::env::var("LINE_USER_ID").ok(),
        std::env::var("LINE_GROUP_ID").ok(),
        std::env::var("LINE_ROOM_ID").ok(),
    )
}

pub fn require_env(name: &'static str) -> Result<String, ConfigurationError> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigurationError::MissingEnv(name))
}
