use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::catalog::RetreatKey;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SuiteTier {
    Classic,
    #[default]
    Deluxe,
    Private,
}

impl SuiteTier {
    /// Scale applied to the package's base nightly rate.
    pub fn multiplier(&self) -> f64 {
        match self {
            SuiteTier::Classic => 1.0,
            SuiteTier::Deluxe => 1.2,
            SuiteTier::Private => 1.6,
        }
    }
}

/// Wizard screens in the order they are visited.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Dates,
    Guests,
    Personalize,
    Activities,
    Itinerary,
    Identity,
    Review,
}

impl WizardStep {
    pub const COUNT: usize = 7;

    pub const ALL: [WizardStep; WizardStep::COUNT] = [
        WizardStep::Dates,
        WizardStep::Guests,
        WizardStep::Personalize,
        WizardStep::Activities,
        WizardStep::Itinerary,
        WizardStep::Identity,
        WizardStep::Review,
    ];

    /// Indices past the last step saturate to Review.
    pub fn from_index(index: usize) -> WizardStep {
        WizardStep::ALL[index.min(WizardStep::COUNT - 1)]
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::Dates => "Dates",
            WizardStep::Guests => "Guests",
            WizardStep::Personalize => "Personalize",
            WizardStep::Activities => "Activities",
            WizardStep::Itinerary => "Itinerary",
            WizardStep::Identity => "Sign in",
            WizardStep::Review => "Review",
        }
    }
}

pub const MIN_GUESTS: u8 = 1;
pub const MAX_GUESTS: u8 = 6;

/// Every selection made during one open wizard instance.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BookingSession {
    pub retreat: RetreatKey,
    pub current_step_index: usize,
    pub selected_dates: BTreeSet<NaiveDate>,
    pub suite_tier: SuiteTier,
    pub guest_count: u8,
    pub children_flag: bool,
    pub selected_goals: BTreeSet<String>,
    pub selected_diet_tags: BTreeSet<String>,
    pub selected_activity_ids: BTreeSet<String>,
    pub selected_addon_ids: BTreeSet<String>,
    pub contact_name: String,
    pub contact_email: String,
    pub prep_guide_consent: bool,
}

impl BookingSession {
    pub fn current_step(&self) -> WizardStep {
        WizardStep::from_index(self.current_step_index)
    }
}
