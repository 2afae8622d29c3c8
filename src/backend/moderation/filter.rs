/**
 * Content Filter
 *
 * Every post and chat message passes through `ContentFilter::screen`
 * before it is stored or broadcast.
 *
 * # Keyword Pass
 *
 * Text is lowercased and split into words on anything that is not a letter,
 * digit or apostrophe. A word equal to a banned keyword blocks the text, so
 * "politics" is caught while "policy" is not.
 *
 * # Model Pass
 *
 * When moderation is enabled the text is also sent to the text-generation
 * service with a classification prompt. The reply must be exactly `SAFE`
 * (case and surrounding punctuation ignored). `UNSAFE`, anything else, a
 * failed call and a timeout all block.
 */
use std::time::Duration;

use crate::backend::companion::client::CompanionClient;
use crate::backend::companion::prompts::MODERATION_PROMPT;
use crate::shared::SharedError;

/// Shown to authors whose text was blocked
pub const BLOCKED_MESSAGE: &str =
    "Please keep discussions supportive and free of politics or profanity.";

/// Shown when the model could not confirm the text is safe
pub const UNVERIFIED_MESSAGE: &str =
    "Your message could not be checked right now. Please try again in a moment.";

/// Banned political keywords
pub const POLITICAL_KEYWORDS: &[&str] = &[
    "politics",
    "political",
    "trump",
    "biden",
    "government",
    "election",
    "democrat",
    "republican",
    "congress",
];

/// Banned profanity
pub const PROFANITY_KEYWORDS: &[&str] = &[
    "fuck", "fucking", "shit", "damn", "bitch", "asshole", "bastard",
];

/// Outcome of the model classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Safe,
    Unsafe,
    Ambiguous,
}

impl Verdict {
    pub fn from_reply(reply: &str) -> Self {
        let word = reply
            .trim()
            .trim_matches(|c: char| !c.is_ascii_alphabetic())
            .to_ascii_uppercase();
        match word.as_str() {
            "SAFE" => Self::Safe,
            "UNSAFE" => Self::Unsafe,
            _ => Self::Ambiguous,
        }
    }
}

/// First banned keyword found in `text`, if any
pub fn find_banned_keyword(text: &str) -> Option<&'static str> {
    let lowered = text.to_lowercase();
    lowered
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .filter(|word| !word.is_empty())
        .find_map(|word| {
            POLITICAL_KEYWORDS
                .iter()
                .chain(PROFANITY_KEYWORDS.iter())
                .find(|keyword| **keyword == word)
                .copied()
        })
}

/// Keyword filter with optional model-backed moderation
#[derive(Debug, Clone)]
pub struct ContentFilter {
    moderation: Option<(CompanionClient, Duration)>,
}

impl ContentFilter {
    pub fn keywords_only() -> Self {
        Self { moderation: None }
    }

    pub fn with_moderation(client: CompanionClient, timeout: Duration) -> Self {
        Self {
            moderation: Some((client, timeout)),
        }
    }

    pub fn uses_moderation(&self) -> bool {
        self.moderation.is_some()
    }

    /// Check text against the keyword list only
    pub fn check_keywords(&self, text: &str) -> Result<(), SharedError> {
        match find_banned_keyword(text) {
            Some(keyword) => {
                tracing::info!("Blocked content containing '{}'", keyword);
                Err(SharedError::rejected(BLOCKED_MESSAGE))
            }
            None => Ok(()),
        }
    }

    /// Run every enabled check against `text`
    pub async fn screen(&self, text: &str) -> Result<(), SharedError> {
        self.check_keywords(text)?;

        let Some((client, timeout)) = &self.moderation else {
            return Ok(());
        };

        let reply = tokio::time::timeout(*timeout, client.complete(MODERATION_PROMPT, text)).await;
        match reply {
            Ok(Ok(reply)) => match Verdict::from_reply(&reply) {
                Verdict::Safe => Ok(()),
                Verdict::Unsafe => {
                    tracing::info!("Moderation model classified content as unsafe");
                    Err(SharedError::rejected(BLOCKED_MESSAGE))
                }
                Verdict::Ambiguous => {
                    tracing::warn!("Ambiguous moderation reply: {:?}", reply);
                    Err(SharedError::rejected(UNVERIFIED_MESSAGE))
                }
            },
            Ok(Err(e)) => {
                tracing::error!("Moderation call failed: {}", e);
                Err(SharedError::rejected(UNVERIFIED_MESSAGE))
            }
            Err(_) => {
                tracing::warn!("Moderation call timed out after {:?}", timeout);
                Err(SharedError::rejected(UNVERIFIED_MESSAGE))
            }
        }
    }
}
