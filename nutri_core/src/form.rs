//! The coach input form.
//!
//! Holds the raw text of each field exactly as entered. The only validation
//! is presence of the required fields; numeric coercion happens at submit
//! time and a malformed entry coerces to NaN rather than an error, flowing
//! through the calculator unguarded.

use crate::error::{Error, Result};
use crate::types::{Goal, Sex, UserMetrics};

/// Raw form state for the coach screen.
///
/// Text fields keep whatever the user typed; selections are `None` until
/// made. The form is carried across a recompute so previously entered values
/// are never lost.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetricsForm {
    pub weight: String,
    pub height: String,
    pub age: String,
    /// Optional field; empty means "not provided"
    pub body_fat: String,
    pub sex: Option<Sex>,
    pub goal: Option<Goal>,
}

/// Coerce a form field the way a numeric input does: garbage becomes NaN.
fn parse_numeric(field: &str) -> f64 {
    field.trim().parse().unwrap_or(f64::NAN)
}

impl MetricsForm {
    /// Whether every required field is filled in.
    ///
    /// This is the single guard in the whole calculator: while it is false,
    /// submitting is a no-op. Body fat is not required.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Names of the required fields still empty or unselected, in form order.
    ///
    /// Presence means "not the empty string": a whitespace-only entry counts
    /// as present and coerces to NaN downstream.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.weight.is_empty() {
            missing.push("peso");
        }
        if self.height.is_empty() {
            missing.push("altura");
        }
        if self.age.is_empty() {
            missing.push("idade");
        }
        if self.sex.is_none() {
            missing.push("sexo");
        }
        if self.goal.is_none() {
            missing.push("objetivo");
        }
        missing
    }

    /// Coerce the form into metrics for the calculator.
    ///
    /// Fails only on missing required fields. Numeric fields that are present
    /// but malformed coerce to NaN and succeed.
    pub fn to_metrics(&self) -> Result<UserMetrics> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(Error::IncompleteForm(missing.join(", ")));
        }

        let body_fat_pct = if self.body_fat.is_empty() {
            None
        } else {
            Some(parse_numeric(&self.body_fat))
        };

        // Guarded above, so the selections are present
        let sex = self.sex.ok_or_else(|| Error::IncompleteForm("sexo".into()))?;
        let goal = self.goal.ok_or_else(|| Error::IncompleteForm("objetivo".into()))?;

        Ok(UserMetrics {
            weight_kg: parse_numeric(&self.weight),
            height_cm: parse_numeric(&self.height),
            age_years: parse_numeric(&self.age),
            sex,
            body_fat_pct,
            goal,
        })
    }
}
