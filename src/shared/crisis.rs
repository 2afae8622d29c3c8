/**
 * Crisis Support Types
 *
 * Request and response shapes for the panic button. The response always
 * carries the three deterministic fields; `ai_guidance` is filled by the
 * backend with either model output or a fallback string.
 */
use serde::{Deserialize, Serialize};

/// How distressed the user reports feeling
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    #[default]
    Moderate,
    Severe,
}

impl Severity {
    /// Lenient parse: anything unrecognised is `Moderate`
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("mild") => Self::Mild,
            Some("severe") => Self::Severe,
            _ => Self::Moderate,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }
}

/// Body of `POST /api/ai/panic-button`
///
/// Every field is optional on the wire so a partial report still reaches
/// the responder instead of failing extraction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PanicRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub trigger_description: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
}

impl PanicRequest {
    pub fn severity(&self) -> Severity {
        Severity::parse_lenient(self.severity.as_deref())
    }

    /// The description, or `None` when it is absent or blank
    pub fn description(&self) -> Option<&str> {
        self.trigger_description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}

/// A crisis line the user can reach right now
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmergencyContact {
    pub name: String,
    pub contact: String,
}

impl EmergencyContact {
    pub fn new(name: &str, contact: &str) -> Self {
        Self {
            name: name.to_string(),
            contact: contact.to_string(),
        }
    }
}

/// Reply to `POST /api/ai/panic-button`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PanicResponse {
    pub immediate_response: String,
    pub emergency_contacts: Vec<EmergencyContact>,
    pub grounding_techniques: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_guidance: Option<String>,
}

impl PanicResponse {
    /// True when every deterministic field is populated
    pub fn is_well_formed(&self) -> bool {
        !self.immediate_response.trim().is_empty()
            && !self.emergency_contacts.is_empty()
            && self
                .emergency_contacts
                .iter()
                .all(|c| !c.name.is_empty() && !c.contact.is_empty())
            && !self.grounding_techniques.is_empty()
            && self.grounding_techniques.iter().all(|t| !t.is_empty())
    }
}
