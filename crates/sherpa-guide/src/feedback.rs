//! Feedback contact points declared by a guide document
//!
//! A document may carry an email address and a Twitter handle. The core only
//! validates and describes them; composing the actual message is up to the host.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref EMAIL_REGEX: Regex =
        Regex::new(r#"^\s*(("?([^"]*)"?|.*)\s)?<?(.+?@.+?)>?\s*$"#).expect("valid email pattern");
    static ref HANDLE_REGEX: Regex = Regex::new(r"^[a-zA-Z0-9_]{1,20}$").expect("valid handle pattern");
}

/// Host application details used when composing feedback
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    pub build: String,
}

/// What the host should present when a feedback row is selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackAction {
    /// Open a mail composer
    Compose {
        recipients: Vec<String>,
        subject: String,
    },
    /// Open a social composer, or the profile page if none is available
    Social {
        initial_text: String,
        fallback_url: String,
    },
}

/// An email contact, e.g. `JellyStyle Support <support@jellystyle.com>`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FeedbackEmail {
    pub name: Option<String>,
    pub address: String,
}

impl FeedbackEmail {
    /// Parse `Name <address>`, `<address>` or a bare address.
    ///
    /// The pattern is permissive: anything with an `@` in the address part
    /// is accepted.
    pub fn parse(string: &str) -> Option<Self> {
        let captures = EMAIL_REGEX.captures(string)?;

        let address = captures.get(4)?.as_str().to_string();
        if address.is_empty() {
            return None;
        }

        let name = captures
            .get(3)
            .map(|m| m.as_str().trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        Some(Self { name, address })
    }

    /// The address with the display name, suitable for a recipient list
    pub fn full_address(&self) -> String {
        match &self.name {
            Some(name) => format!("{} <{}>", name, self.address),
            None => self.address.clone(),
        }
    }
}

/// A Twitter handle, stored without the leading `@`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FeedbackTwitter {
    pub handle: String,
}

impl FeedbackTwitter {
    /// Parse a handle, ignoring surrounding whitespace and `@`/`＠` marks
    pub fn parse(string: &str) -> Option<Self> {
        let handle = string.trim_matches(|c: char| c.is_whitespace() || c == '@' || c == '＠');

        if !HANDLE_REGEX.is_match(handle) {
            return None;
        }

        Some(Self {
            handle: handle.to_string(),
        })
    }

    pub fn mention(&self) -> String {
        format!("@{} ", self.handle)
    }

    pub fn profile_url(&self) -> String {
        format!("https://twitter.com/{}", self.handle)
    }
}

/// A feedback row shown after the guide's sections
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Feedback {
    Email(FeedbackEmail),
    Twitter(FeedbackTwitter),
}

impl Feedback {
    /// Row label
    pub fn label(&self) -> &'static str {
        match self {
            Feedback::Email(_) => "Email",
            Feedback::Twitter(_) => "Twitter",
        }
    }

    /// Row detail text
    pub fn detail(&self) -> String {
        match self {
            Feedback::Email(email) => email.address.clone(),
            Feedback::Twitter(twitter) => format!("@{}", twitter.handle),
        }
    }

    /// Describe what the host should compose for this entry
    pub fn action(&self, app: &AppInfo) -> FeedbackAction {
        match self {
            Feedback::Email(email) => FeedbackAction::Compose {
                recipients: vec![email.full_address()],
                subject: format!("Feedback for {} v{} ({})", app.name, app.version, app.build),
            },
            Feedback::Twitter(twitter) => FeedbackAction::Social {
                initial_text: twitter.mention(),
                fallback_url: twitter.profile_url(),
            },
        }
    }
}
