use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::session::SuiteTier;

/// A single user interaction coming from the rendering surface.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(tag = "type")] // Use the "type" field to determine which variant to use
pub enum WizardIntent {
    #[serde(rename = "select_dates")]
    SelectDates { dates: Vec<NaiveDate> },

    #[serde(rename = "set_suite_tier")]
    SetSuiteTier { tier: SuiteTier },

    #[serde(rename = "set_guest_count")]
    SetGuestCount { count: i64 },

    #[serde(rename = "toggle_children_flag")]
    ToggleChildrenFlag,

    #[serde(rename = "toggle_goal")]
    ToggleGoal { goal: String },

    #[serde(rename = "toggle_diet_tag")]
    ToggleDietTag { tag: String },

    #[serde(rename = "toggle_activity")]
    ToggleActivity { id: String },

    #[serde(rename = "toggle_addon")]
    ToggleAddon { id: String },

    #[serde(rename = "set_contact_name")]
    SetContactName { name: String },

    #[serde(rename = "set_contact_email")]
    SetContactEmail { email: String },

    #[serde(rename = "toggle_consent")]
    ToggleConsent,

    #[serde(rename = "advance")]
    Advance,

    #[serde(rename = "retreat")]
    Retreat,

    /// Footer primary button: finishes at Review, advances elsewhere.
    #[serde(rename = "continue")]
    Continue,

    #[serde(rename = "finish")]
    Finish,

    #[serde(rename = "close")]
    Close,
}
