#![forbid(unsafe_code)]

//! Core domain model and business logic for the Mais Vida nutrition coach.
//!
//! This crate provides:
//! - Domain types (user metrics, goals, diet plans)
//! - Energy estimation (Mifflin-St Jeor BMR and fixed-activity TDEE)
//! - Macro allocation and meal plan composition
//! - Goal-keyed advice
//! - The input form and the two-state coach session

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod energy;
pub mod targets;
pub mod meals;
pub mod tips;
pub mod engine;
pub mod form;
pub mod session;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::{Config, OutputFormat};
pub use energy::{basal_metabolic_rate, estimate_energy, EnergyEstimate};
pub use targets::{allocate_macros, MacroTargets};
pub use meals::compose_meals;
pub use tips::tips_for_goal;
pub use engine::generate_plan;
pub use form::MetricsForm;
pub use session::CoachState;
