use std::error::Error;
use std::fmt;

use chrono::NaiveDate;

use crate::models::catalog::RetreatKey;
use crate::models::intent::WizardIntent;
use crate::models::session::{BookingSession, WizardStep};
use crate::models::view::WizardView;
use crate::services::catalog_service::CatalogProvider;
use crate::services::notification_service::Toast;
use crate::services::pricing_service::PricingService;
use crate::services::session_service::SessionService;
use crate::services::step_service::StepService;
use crate::services::summary_service::SummaryService;

#[derive(Debug, Clone, PartialEq)]
pub enum ExperienceError {
    FlowNotFound(String),
    UnknownRetreat(String),
    FlowClosed,
    NotAtReview,
}

impl fmt::Display for ExperienceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExperienceError::FlowNotFound(id) => write!(f, "Experience {} not found", id),
            ExperienceError::UnknownRetreat(key) => write!(f, "Unknown retreat: {}", key),
            ExperienceError::FlowClosed => write!(f, "Experience is closed"),
            ExperienceError::NotAtReview => write!(f, "Booking has not reached review"),
        }
    }
}

impl Error for ExperienceError {}

/// What an intent did to the flow.
#[derive(Debug, Clone, PartialEq)]
pub enum IntentOutcome {
    Updated,
    Unchanged,
    /// `generation` identifies the session that finished.
    Finished { toast: Toast, generation: u64 },
    Closed,
}

/// One booking wizard instance. The session only exists while open.
#[derive(Debug, Clone)]
pub struct ExperienceFlow {
    open: bool,
    retreat: RetreatKey,
    session: Option<BookingSession>,
    completed: bool,
    /// Bumped whenever the session is replaced or dropped.
    generation: u64,
}

impl ExperienceFlow {
    pub fn new(retreat: RetreatKey) -> Self {
        ExperienceFlow {
            open: false,
            retreat,
            session: None,
            completed: false,
            generation: 0,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn retreat(&self) -> RetreatKey {
        self.retreat
    }

    pub fn session(&self) -> Option<&BookingSession> {
        self.session.as_ref()
    }

    /// Opens on `retreat` with a freshly seeded session, even if already open.
    pub fn open(&mut self, retreat: RetreatKey, today: NaiveDate, catalog: &dyn CatalogProvider) {
        self.open = true;
        self.completed = false;
        self.generation += 1;
        self.retreat = retreat;
        self.session = Some(SessionService::initialize(catalog.get_package(retreat), today));
    }

    /// Switching package while open throws away every selection.
    pub fn change_retreat(
        &mut self,
        retreat: RetreatKey,
        today: NaiveDate,
        catalog: &dyn CatalogProvider,
    ) {
        self.retreat = retreat;
        if self.open {
            self.completed = false;
            self.generation += 1;
            self.session = Some(SessionService::initialize(catalog.get_package(retreat), today));
        }
    }

    /// Safe to call repeatedly.
    pub fn close(&mut self) -> bool {
        let was_open = self.open;
        if was_open {
            self.generation += 1;
        }
        self.open = false;
        self.session = None;
        was_open
    }

    /// Terminal transition, only offered at Review.
    pub fn finish(&mut self) -> Result<Toast, ExperienceError> {
        let session = self.session.as_ref().ok_or(ExperienceError::FlowClosed)?;
        if session.current_step() != WizardStep::Review || self.completed {
            return Err(ExperienceError::NotAtReview);
        }
        self.completed = true;
        Ok(Toast::booking_complete())
    }

    pub fn apply(&mut self, intent: WizardIntent) -> Result<IntentOutcome, ExperienceError> {
        if let WizardIntent::Close = intent {
            self.close();
            return Ok(IntentOutcome::Closed);
        }

        let is_terminal = match self.session.as_ref() {
            Some(session) => StepService::is_terminal(session),
            None => return Err(ExperienceError::FlowClosed),
        };

        if self.completed {
            return Ok(IntentOutcome::Unchanged);
        }

        let finishing = match intent {
            WizardIntent::Finish => true,
            WizardIntent::Continue => is_terminal,
            _ => false,
        };
        if finishing {
            return match self.finish() {
                Ok(toast) => Ok(IntentOutcome::Finished {
                    toast,
                    generation: self.generation,
                }),
                Err(ExperienceError::NotAtReview) => Ok(IntentOutcome::Unchanged),
                Err(err) => Err(err),
            };
        }

        let session = self.session.as_mut().ok_or(ExperienceError::FlowClosed)?;
        let outcome = match intent {
            WizardIntent::SelectDates { dates } => {
                SessionService::select_dates(session, dates);
                IntentOutcome::Updated
            }
            WizardIntent::SetSuiteTier { tier } => {
                SessionService::set_suite_tier(session, tier);
                IntentOutcome::Updated
            }
            WizardIntent::SetGuestCount { count } => {
                SessionService::set_guest_count(session, count);
                IntentOutcome::Updated
            }
            WizardIntent::ToggleChildrenFlag => {
                SessionService::toggle_children_flag(session);
                IntentOutcome::Updated
            }
            WizardIntent::ToggleGoal { goal } => {
                SessionService::toggle_goal(session, goal);
                IntentOutcome::Updated
            }
            WizardIntent::ToggleDietTag { tag } => {
                SessionService::toggle_diet_tag(session, tag);
                IntentOutcome::Updated
            }
            WizardIntent::ToggleActivity { id } => {
                SessionService::toggle_activity(session, id);
                IntentOutcome::Updated
            }
            WizardIntent::ToggleAddon { id } => {
                SessionService::toggle_addon(session, id);
                IntentOutcome::Updated
            }
            WizardIntent::SetContactName { name } => {
                SessionService::set_contact_name(session, name);
                IntentOutcome::Updated
            }
            WizardIntent::SetContactEmail { email } => {
                SessionService::set_contact_email(session, email);
                IntentOutcome::Updated
            }
            WizardIntent::ToggleConsent => {
                SessionService::toggle_consent(session);
                IntentOutcome::Updated
            }
            WizardIntent::Advance | WizardIntent::Continue => {
                if StepService::advance(session) {
                    IntentOutcome::Updated
                } else {
                    IntentOutcome::Unchanged
                }
            }
            WizardIntent::Retreat => {
                if StepService::retreat(session) {
                    IntentOutcome::Updated
                } else {
                    IntentOutcome::Unchanged
                }
            }
            // handled above
            WizardIntent::Finish | WizardIntent::Close => IntentOutcome::Unchanged,
        };

        Ok(outcome)
    }

    /// Snapshot plus every derived field, recomputed on each call.
    pub fn view(&self, catalog: &dyn CatalogProvider) -> Result<WizardView, ExperienceError> {
        let session = self.session.as_ref().ok_or(ExperienceError::FlowClosed)?;
        let retreat = catalog.get_package(self.retreat);
        let theme = catalog.theme(self.retreat);

        let nights = SummaryService::nights(&session.selected_dates);
        let check_in = SummaryService::check_in(&session.selected_dates);
        let check_out = SummaryService::check_out(&session.selected_dates);
        let rate =
            PricingService::effective_nightly_rate(retreat.base_price_per_night, session.suite_tier);
        let total = PricingService::compute_total(
            nights,
            session.guest_count,
            rate,
            session.selected_addon_ids.iter(),
            catalog,
        );
        let step = session.current_step();

        Ok(WizardView {
            retreat: self.retreat,
            title: retreat.title,
            tagline: theme.tagline,
            completed: self.completed,
            step,
            step_label: step.label(),
            step_number: step.index() + 1,
            step_count: WizardStep::COUNT,
            progress_percent: StepService::progress_percent(session.current_step_index),
            is_terminal: StepService::is_terminal(session),
            can_advance: StepService::can_advance(session),
            session: session.clone(),
            nights,
            check_in,
            check_out,
            check_in_label: SummaryService::date_label(check_in),
            check_out_label: SummaryService::check_out_label(check_in, check_out),
            stay_summary: SummaryService::stay_summary(
                check_in,
                check_out,
                session.guest_count,
                nights,
            ),
            total,
            total_display: SummaryService::format_total(total),
            planned_activities: retreat
                .activities
                .iter()
                .filter(|activity| session.selected_activity_ids.contains(activity.id))
                .cloned()
                .collect(),
            sample_itinerary: retreat.sample_itinerary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::session::SuiteTier;
    use crate::services::catalog_service::DemoCatalog;
    use std::collections::BTreeSet;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn opened(retreat: RetreatKey) -> ExperienceFlow {
        let mut flow = ExperienceFlow::new(retreat);
        flow.open(retreat, today(), &DemoCatalog);
        flow
    }

    fn walk_to(flow: &mut ExperienceFlow, step: WizardStep) {
        while flow.session().unwrap().current_step() < step {
            if flow.session().unwrap().current_step() == WizardStep::Identity {
                flow.apply(WizardIntent::SetContactName { name: "Alex".to_string() }).unwrap();
                flow.apply(WizardIntent::SetContactEmail { email: "alex@example.com".to_string() })
                    .unwrap();
            }
            flow.apply(WizardIntent::Advance).unwrap();
        }
    }

    #[test]
    fn test_new_flow_is_closed() {
        let flow = ExperienceFlow::new(RetreatKey::Vegan);
        assert!(!flow.is_open());
        assert_eq!(flow.view(&DemoCatalog).unwrap_err(), ExperienceError::FlowClosed);
    }

    #[test]
    fn test_reset_on_reopen_with_other_package() {
        let mut flow = opened(RetreatKey::Weightloss);
        flow.apply(WizardIntent::ToggleActivity { id: "yoga".to_string() }).unwrap();
        flow.apply(WizardIntent::ToggleAddon { id: "spa".to_string() }).unwrap();
        flow.apply(WizardIntent::SetGuestCount { count: 5 }).unwrap();
        flow.apply(WizardIntent::Advance).unwrap();
        flow.apply(WizardIntent::Advance).unwrap();
        flow.close();

        flow.open(RetreatKey::Vegan, today(), &DemoCatalog);
        let session = flow.session().unwrap();
        let expected: BTreeSet<String> =
            ["farm", "cook", "sound"].iter().map(|s| s.to_string()).collect();
        assert_eq!(session.selected_activity_ids, expected);
        assert_eq!(session.current_step_index, 0);
        assert_eq!(session.guest_count, 2);
        assert!(session.selected_addon_ids.is_empty());
    }

    #[test]
    fn test_change_retreat_while_open_reseeds() {
        let mut flow = opened(RetreatKey::Mindfulness);
        flow.apply(WizardIntent::SetSuiteTier { tier: SuiteTier::Private }).unwrap();
        flow.apply(WizardIntent::Advance).unwrap();

        flow.change_retreat(RetreatKey::Detox, today(), &DemoCatalog);
        let session = flow.session().unwrap();
        assert_eq!(session.retreat, RetreatKey::Detox);
        assert_eq!(session.suite_tier, SuiteTier::Deluxe);
        assert_eq!(session.current_step_index, 0);
        assert!(session.selected_activity_ids.contains("walk"));
    }

    #[test]
    fn test_change_retreat_while_closed_only_records_key() {
        let mut flow = ExperienceFlow::new(RetreatKey::Vegan);
        flow.change_retreat(RetreatKey::Detox, today(), &DemoCatalog);
        assert_eq!(flow.retreat(), RetreatKey::Detox);
        assert!(flow.session().is_none());
    }

    #[test]
    fn test_view_derives_default_total() {
        // mindfulness: 200 * 1.2 * 2 guests * 2 nights
        let flow = opened(RetreatKey::Mindfulness);
        let view = flow.view(&DemoCatalog).unwrap();
        assert_eq!(view.nights, 2);
        assert!((view.total - 960.0).abs() < 1e-9);
        assert_eq!(view.total_display, "$960");
        assert_eq!(view.check_in, Some(today()));
        assert_eq!(view.step, WizardStep::Dates);
        assert_eq!(view.step_number, 1);
        assert_eq!(view.planned_activities.len(), 3);
    }

    #[test]
    fn test_view_tracks_every_mutation() {
        let mut flow = opened(RetreatKey::Mindfulness);
        flow.apply(WizardIntent::SelectDates {
            dates: vec![
                NaiveDate::from_ymd_opt(2026, 11, 4).unwrap(),
                NaiveDate::from_ymd_opt(2026, 11, 2).unwrap(),
                NaiveDate::from_ymd_opt(2026, 11, 3).unwrap(),
                NaiveDate::from_ymd_opt(2026, 11, 5).unwrap(),
            ],
        })
        .unwrap();
        flow.apply(WizardIntent::ToggleAddon { id: "airport".to_string() }).unwrap();
        flow.apply(WizardIntent::ToggleAddon { id: "spa".to_string() }).unwrap();

        // 200 * 1.2 * 2 * 3 + 50 + 95
        let view = flow.view(&DemoCatalog).unwrap();
        assert_eq!(view.nights, 3);
        assert!((view.total - 1585.0).abs() < 1e-9);
        assert_eq!(view.check_in, NaiveDate::from_ymd_opt(2026, 11, 2));
        assert_eq!(view.check_out, NaiveDate::from_ymd_opt(2026, 11, 5));
    }

    #[test]
    fn test_empty_dates_still_render() {
        let mut flow = opened(RetreatKey::Vegan);
        flow.apply(WizardIntent::SelectDates { dates: Vec::new() }).unwrap();
        let view = flow.view(&DemoCatalog).unwrap();
        assert_eq!(view.nights, 1);
        assert_eq!(view.check_in, None);
        assert_eq!(view.check_in_label, "—");
        assert_eq!(view.check_out_label, "—");
    }

    #[test]
    fn test_deselected_activities_drop_from_plan() {
        let mut flow = opened(RetreatKey::Vegan);
        flow.apply(WizardIntent::ToggleActivity { id: "cook".to_string() }).unwrap();
        let view = flow.view(&DemoCatalog).unwrap();
        let ids: Vec<_> = view.planned_activities.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["farm", "sound"]);
    }

    #[test]
    fn test_identity_gate_through_intents() {
        let mut flow = opened(RetreatKey::Detox);
        for _ in 0..5 {
            flow.apply(WizardIntent::Advance).unwrap();
        }
        assert_eq!(flow.session().unwrap().current_step(), WizardStep::Identity);
        assert_eq!(flow.apply(WizardIntent::Advance).unwrap(), IntentOutcome::Unchanged);

        flow.apply(WizardIntent::SetContactName { name: "Alex".to_string() }).unwrap();
        flow.apply(WizardIntent::SetContactEmail { email: "alex@example.com".to_string() })
            .unwrap();
        assert_eq!(flow.apply(WizardIntent::Advance).unwrap(), IntentOutcome::Updated);
        assert_eq!(flow.session().unwrap().current_step(), WizardStep::Review);
    }

    #[test]
    fn test_finish_outside_review_is_ignored() {
        let mut flow = opened(RetreatKey::Detox);
        assert_eq!(flow.apply(WizardIntent::Finish).unwrap(), IntentOutcome::Unchanged);
        assert!(!flow.is_completed());
        assert_eq!(flow.finish().unwrap_err(), ExperienceError::NotAtReview);
    }

    #[test]
    fn test_continue_finishes_at_review() {
        let mut flow = opened(RetreatKey::Weightloss);
        walk_to(&mut flow, WizardStep::Review);

        let outcome = flow.apply(WizardIntent::Continue).unwrap();
        assert_eq!(
            outcome,
            IntentOutcome::Finished {
                toast: Toast::booking_complete(),
                generation: flow.generation(),
            }
        );
        assert!(flow.is_completed());

        // one-way: further navigation and a second finish are ignored
        assert_eq!(flow.apply(WizardIntent::Retreat).unwrap(), IntentOutcome::Unchanged);
        assert_eq!(flow.apply(WizardIntent::Finish).unwrap(), IntentOutcome::Unchanged);
        assert_eq!(flow.session().unwrap().current_step(), WizardStep::Review);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut flow = opened(RetreatKey::Vegan);
        assert!(flow.close());
        assert!(!flow.close());
        assert_eq!(flow.apply(WizardIntent::Close).unwrap(), IntentOutcome::Closed);
        assert_eq!(
            flow.apply(WizardIntent::Advance).unwrap_err(),
            ExperienceError::FlowClosed
        );
    }

    #[test]
    fn test_generation_moves_with_each_session() {
        let mut flow = opened(RetreatKey::Vegan);
        let first = flow.generation();

        flow.change_retreat(RetreatKey::Detox, today(), &DemoCatalog);
        let second = flow.generation();
        assert_ne!(first, second);

        flow.close();
        let closed = flow.generation();
        assert_ne!(second, closed);

        // closing twice does not move it again
        flow.close();
        assert_eq!(flow.generation(), closed);

        flow.open(RetreatKey::Vegan, today(), &DemoCatalog);
        assert_ne!(flow.generation(), closed);
    }
}
