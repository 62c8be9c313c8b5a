//! Vision4Life Emission Engine
//!
//! Platform-agnostic calculation core for the Vision4Life carbon footprint
//! experience. This crate owns the per-category emission formulas, the
//! unified dispatcher, and the heal-scenario transformer, without any UI or
//! platform-specific dependencies; the presentation and decorative layers
//! consume its value types and render them.
//!
//! All factors are fixed educational policy, not science. Every entry point
//! is a pure, synchronous function of its inputs: the engine clones the
//! caller's [`InputState`] before deriving a healed variant and never holds
//! state between calls.

pub mod consumption;
pub mod diet;
pub mod energy;
pub mod error;
pub mod estimate;
pub mod factors;
pub mod heal;
pub mod mobility;
pub mod numbers;
pub mod profile;
pub mod result;
pub mod state;

// Re-export commonly used types
pub use error::EngineError;
pub use estimate::{Category, estimate, estimate_tag};
pub use factors::{
    ConsumptionFactors, DietFactors, EnergyFactors, FactorsConfig, HealRules, MobilityFactors,
};
pub use heal::{apply_heal_rule, heal};
pub use profile::{Mood, ProfileSummary, ProfileTotals, profile_summary};
pub use result::{CategoryResult, HealResult, Savings};
pub use state::{ClothingFreq, InputState, PlasticLevel, TransportMode};
