//! The two-state coach session.
//!
//! The coach screen is either collecting input or showing a computed plan;
//! there is no third state. The form travels through both states so that
//! "Refazer Cálculo" brings the user back to a form still holding the values
//! they entered last time.

use crate::engine::generate_plan;
use crate::form::MetricsForm;
use crate::types::DietPlan;

/// Coach screen state
#[derive(Clone, Debug)]
pub enum CoachState {
    /// Editing the input form
    CollectingInput(MetricsForm),
    /// Displaying a computed plan; the form is kept for the next recompute
    ShowingPlan { form: MetricsForm, plan: DietPlan },
}

impl CoachState {
    /// A fresh session with an empty form
    pub fn new() -> Self {
        CoachState::CollectingInput(MetricsForm::default())
    }

    /// Submit the form and compute a plan.
    ///
    /// A no-op while the form is incomplete (the submit action is disabled,
    /// not an error) or while a plan is already showing.
    pub fn submit(self) -> Self {
        match self {
            CoachState::CollectingInput(form) => match form.to_metrics() {
                Ok(metrics) => {
                    tracing::debug!("Form complete, computing plan");
                    let plan = generate_plan(&metrics);
                    CoachState::ShowingPlan { form, plan }
                }
                Err(err) => {
                    tracing::debug!("Submit ignored: {}", err);
                    CoachState::CollectingInput(form)
                }
            },
            showing => showing,
        }
    }

    /// "Refazer Cálculo": discard the plan and return to the form.
    ///
    /// The form keeps its last-entered values. A no-op while collecting.
    pub fn recompute(self) -> Self {
        match self {
            CoachState::ShowingPlan { form, .. } => {
                tracing::debug!("Plan discarded, back to input form");
                CoachState::CollectingInput(form)
            }
            collecting => collecting,
        }
    }

    /// The form, whichever state we are in
    pub fn form(&self) -> &MetricsForm {
        match self {
            CoachState::CollectingInput(form) => form,
            CoachState::ShowingPlan { form, .. } => form,
        }
    }

    /// Mutable form access, only while collecting input
    pub fn form_mut(&mut self) -> Option<&mut MetricsForm> {
        match self {
            CoachState::CollectingInput(form) => Some(form),
            CoachState::ShowingPlan { .. } => None,
        }
    }

    /// The computed plan, if one is showing
    pub fn plan(&self) -> Option<&DietPlan> {
        match self {
            CoachState::CollectingInput(_) => None,
            CoachState::ShowingPlan { plan, .. } => Some(plan),
        }
    }
}

impl Default for CoachState {
    fn default() -> Self {
        Self::new()
    }
}
