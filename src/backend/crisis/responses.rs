//! Fixed crisis-support content.
//!
//! Everything here is built synchronously from literals so the panic button
//! has something to show even when every downstream call fails.

use crate::shared::{EmergencyContact, PanicResponse, Severity};

pub const MILD_RESPONSE: &str = "I hear you, and you're safe right now. Let's breathe together. \
Try the 4-7-8 breathing: breathe in for 4, hold for 7, out for 8. You're going to be okay.";

pub const MODERATE_RESPONSE: &str = "You reached out, and that takes tremendous courage. \
You are safe in this moment. Let's ground together: name 5 things you can see, 4 you can touch, \
3 you can hear, 2 you can smell, 1 you can taste.";

pub const SEVERE_RESPONSE: &str = "You are incredibly brave for reaching out. You are safe right now. \
Focus on this: place both feet firmly on the ground, take slow deep breaths, and know that this \
feeling will pass. You are not alone.";

/// `ai_guidance` when the model call times out or fails
pub const FALLBACK_GUIDANCE: &str =
    "You are safe. Focus on your breathing. This moment will pass. You are stronger than you know.";

/// `immediate_response` of the last-resort payload
pub const LAST_RESORT_RESPONSE: &str =
    "You are safe. Take slow, deep breaths. This moment will pass. You are stronger than you know.";

/// `ai_guidance` of the last-resort payload
pub const LAST_RESORT_GUIDANCE: &str =
    "Focus on grounding yourself. You reached out for help, and that shows incredible strength.";

pub const GROUNDING_54321: &str =
    "5-4-3-2-1 grounding: Name 5 things you see, 4 you touch, 3 you hear, 2 you smell, 1 you taste";
pub const GROUNDING_BOX_BREATHING: &str =
    "Box breathing: Breathe in for 4, hold for 4, out for 4, hold for 4";
pub const GROUNDING_MUSCLE_RELAXATION: &str =
    "Progressive muscle relaxation: Tense and release each muscle group";

/// Every string `ai_guidance` can hold when no model text was used
pub const KNOWN_FALLBACKS: &[&str] = &[FALLBACK_GUIDANCE, LAST_RESORT_GUIDANCE];

pub fn immediate_response(severity: Severity) -> &'static str {
    match severity {
        Severity::Mild => MILD_RESPONSE,
        Severity::Moderate => MODERATE_RESPONSE,
        Severity::Severe => SEVERE_RESPONSE,
    }
}

pub fn emergency_contacts() -> Vec<EmergencyContact> {
    vec![
        EmergencyContact::new("Crisis Text Line", "Text HOME to 741741"),
        EmergencyContact::new("National Suicide Prevention Lifeline", "988"),
        EmergencyContact::new("PTSD Foundation of America", "1-877-717-PTSD"),
    ]
}

pub fn grounding_techniques() -> Vec<String> {
    vec![
        GROUNDING_54321.to_string(),
        GROUNDING_BOX_BREATHING.to_string(),
        GROUNDING_MUSCLE_RELAXATION.to_string(),
    ]
}

/// Deterministic fields for `severity`, with no guidance yet
pub fn baseline_response(severity: Severity) -> PanicResponse {
    PanicResponse {
        immediate_response: immediate_response(severity).to_string(),
        emergency_contacts: emergency_contacts(),
        grounding_techniques: grounding_techniques(),
        ai_guidance: None,
    }
}

/// Payload returned when assembling the normal response panicked
pub fn last_resort_response() -> PanicResponse {
    PanicResponse {
        immediate_response: LAST_RESORT_RESPONSE.to_string(),
        emergency_contacts: vec![
            EmergencyContact::new("Crisis Text Line", "Text HOME to 741741"),
            EmergencyContact::new("National Suicide Prevention Lifeline", "988"),
        ],
        grounding_techniques: vec![
            GROUNDING_54321.to_string(),
            GROUNDING_BOX_BREATHING.to_string(),
        ],
        ai_guidance: Some(LAST_RESORT_GUIDANCE.to_string()),
    }
}
