use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};

use crate::models::catalog::Retreat;
use crate::models::session::{BookingSession, SuiteTier, MAX_GUESTS, MIN_GUESTS};

/// Length of the date window a fresh session starts with.
const DEFAULT_STAY_DAYS: u64 = 3;
const DEFAULT_GUESTS: u8 = 2;

/// Adds the item when absent, removes it when present. Returns whether the
/// item is selected afterwards.
pub fn toggle_membership<T: Ord>(set: &mut BTreeSet<T>, item: T) -> bool {
    if set.remove(&item) {
        false
    } else {
        set.insert(item);
        true
    }
}

pub struct SessionService;

impl SessionService {
    /// Fresh session for `retreat`, replacing whatever came before.
    pub fn initialize(retreat: &Retreat, today: NaiveDate) -> BookingSession {
        let selected_dates = (0..DEFAULT_STAY_DAYS)
            .filter_map(|offset| today.checked_add_days(Days::new(offset)))
            .collect();

        BookingSession {
            retreat: retreat.id,
            current_step_index: 0,
            selected_dates,
            suite_tier: SuiteTier::Deluxe,
            guest_count: DEFAULT_GUESTS,
            children_flag: false,
            selected_goals: BTreeSet::new(),
            selected_diet_tags: BTreeSet::new(),
            selected_activity_ids: retreat
                .activities
                .iter()
                .map(|activity| activity.id.to_string())
                .collect(),
            selected_addon_ids: BTreeSet::new(),
            contact_name: String::new(),
            contact_email: String::new(),
            prep_guide_consent: true,
        }
    }

    pub fn select_dates<I>(session: &mut BookingSession, dates: I)
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        session.selected_dates = dates.into_iter().collect();
    }

    pub fn set_suite_tier(session: &mut BookingSession, tier: SuiteTier) {
        session.suite_tier = tier;
    }

    pub fn set_guest_count(session: &mut BookingSession, count: i64) {
        let clamped = count.clamp(i64::from(MIN_GUESTS), i64::from(MAX_GUESTS));
        session.guest_count = u8::try_from(clamped).unwrap_or(DEFAULT_GUESTS);
    }

    pub fn toggle_children_flag(session: &mut BookingSession) {
        session.children_flag = !session.children_flag;
    }

    pub fn toggle_goal(session: &mut BookingSession, goal: String) -> bool {
        toggle_membership(&mut session.selected_goals, goal)
    }

    pub fn toggle_diet_tag(session: &mut BookingSession, tag: String) -> bool {
        toggle_membership(&mut session.selected_diet_tags, tag)
    }

    pub fn toggle_activity(session: &mut BookingSession, id: String) -> bool {
        toggle_membership(&mut session.selected_activity_ids, id)
    }

    pub fn toggle_addon(session: &mut BookingSession, id: String) -> bool {
        toggle_membership(&mut session.selected_addon_ids, id)
    }

    pub fn set_contact_name(session: &mut BookingSession, name: String) {
        session.contact_name = name;
    }

    pub fn set_contact_email(session: &mut BookingSession, email: String) {
        session.contact_email = email;
    }

    pub fn toggle_consent(session: &mut BookingSession) {
        session.prep_guide_consent = !session.prep_guide_consent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::{RetreatKey, RETREATS};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn weightloss() -> &'static Retreat {
        &RETREATS[0]
    }

    #[test]
    fn test_initialize_defaults() {
        let session = SessionService::initialize(weightloss(), today());

        assert_eq!(session.retreat, RetreatKey::Weightloss);
        assert_eq!(session.current_step_index, 0);
        assert_eq!(session.suite_tier, SuiteTier::Deluxe);
        assert_eq!(session.guest_count, 2);
        assert!(!session.children_flag);
        assert!(session.selected_goals.is_empty());
        assert!(session.selected_diet_tags.is_empty());
        assert!(session.selected_addon_ids.is_empty());
        assert!(session.contact_name.is_empty());
        assert!(session.contact_email.is_empty());
        assert!(session.prep_guide_consent);
    }

    #[test]
    fn test_initialize_seeds_three_consecutive_days() {
        let session = SessionService::initialize(weightloss(), today());
        let dates: Vec<_> = session.selected_dates.iter().copied().collect();
        assert_eq!(
            dates,
            vec![
                today(),
                NaiveDate::from_ymd_opt(2026, 10, 20).unwrap(),
                NaiveDate::from_ymd_opt(2026, 10, 21).unwrap(),
            ]
        );
    }

    #[test]
    fn test_initialize_selects_every_activity() {
        let session = SessionService::initialize(weightloss(), today());
        let expected: BTreeSet<String> = ["yoga", "hike", "nutrition", "ice"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(session.selected_activity_ids, expected);
    }

    #[test]
    fn test_toggle_membership_round_trip() {
        let mut set = BTreeSet::new();
        assert!(toggle_membership(&mut set, "spa"));
        assert!(set.contains("spa"));
        assert!(!toggle_membership(&mut set, "spa"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_toggles_touch_only_their_own_field() {
        let mut session = SessionService::initialize(weightloss(), today());
        SessionService::toggle_goal(&mut session, "Boost metabolism".to_string());
        SessionService::toggle_diet_tag(&mut session, "Low-carb".to_string());
        SessionService::toggle_activity(&mut session, "hike".to_string());
        SessionService::toggle_addon(&mut session, "spa".to_string());

        assert!(session.selected_goals.contains("Boost metabolism"));
        assert!(session.selected_diet_tags.contains("Low-carb"));
        assert!(!session.selected_activity_ids.contains("hike"));
        assert_eq!(session.selected_activity_ids.len(), 3);
        assert!(session.selected_addon_ids.contains("spa"));
    }

    #[test]
    fn test_guest_count_is_clamped() {
        let mut session = SessionService::initialize(weightloss(), today());
        SessionService::set_guest_count(&mut session, 0);
        assert_eq!(session.guest_count, 1);
        SessionService::set_guest_count(&mut session, 12);
        assert_eq!(session.guest_count, 6);
        SessionService::set_guest_count(&mut session, 4);
        assert_eq!(session.guest_count, 4);
    }

    #[test]
    fn test_flags_flip() {
        let mut session = SessionService::initialize(weightloss(), today());
        SessionService::toggle_children_flag(&mut session);
        SessionService::toggle_consent(&mut session);
        assert!(session.children_flag);
        assert!(!session.prep_guide_consent);
    }

    #[test]
    fn test_select_dates_replaces_and_dedupes() {
        let mut session = SessionService::initialize(weightloss(), today());
        let day = NaiveDate::from_ymd_opt(2026, 12, 1).unwrap();
        SessionService::select_dates(&mut session, vec![day, day]);
        assert_eq!(session.selected_dates.len(), 1);

        SessionService::select_dates(&mut session, Vec::new());
        assert!(session.selected_dates.is_empty());
    }
}
