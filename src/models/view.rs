use chrono::NaiveDate;
use serde::Serialize;

use crate::models::catalog::{ActivityDefinition, ItineraryDay, RetreatKey};
use crate::models::session::{BookingSession, WizardStep};

/// Everything the rendering surface needs for one render pass.
#[derive(Debug, Serialize, Clone)]
pub struct WizardView {
    pub retreat: RetreatKey,
    pub title: &'static str,
    pub tagline: &'static str,
    pub completed: bool,
    pub step: WizardStep,
    pub step_label: &'static str,
    pub step_number: usize,
    pub step_count: usize,
    pub progress_percent: f64,
    pub is_terminal: bool,
    pub can_advance: bool,
    pub session: BookingSession,
    pub nights: u32,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub check_in_label: String,
    pub check_out_label: String,
    pub stay_summary: String,
    pub total: f64,
    pub total_display: String,
    pub planned_activities: Vec<ActivityDefinition>,
    pub sample_itinerary: &'static [ItineraryDay],
}
