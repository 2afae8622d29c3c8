//! Crisis Support Module
//!
//! The panic button. Unlike every other endpoint it has no error path: the
//! caller always receives a crisis-support payload.
//!
//! # Module Structure
//!
//! ```text
//! crisis/
//! ├── mod.rs          - Module exports
//! ├── responses.rs    - Canned responses, contacts and grounding techniques
//! ├── orchestrator.rs - Baseline + time-boxed AI guidance + panic guard
//! └── handlers.rs     - POST /api/ai/panic-button
//! ```

pub mod responses;

pub mod orchestrator;

pub mod handlers;

pub use handlers::panic_button;
pub use orchestrator::CrisisResponder;
pub use responses::{FALLBACK_GUIDANCE, KNOWN_FALLBACKS, LAST_RESORT_GUIDANCE};
