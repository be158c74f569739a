use crate::models::session::{BookingSession, WizardStep};

const LAST_STEP_INDEX: usize = WizardStep::COUNT - 1;

pub struct StepService;

impl StepService {
    /// Only the sign-in step blocks forward movement, and only until both
    /// contact fields are filled in.
    pub fn can_advance(session: &BookingSession) -> bool {
        match session.current_step() {
            WizardStep::Identity => {
                !session.contact_name.is_empty() && !session.contact_email.is_empty()
            }
            WizardStep::Review => false,
            _ => true,
        }
    }

    /// Moves one step forward. Returns false when the move was refused.
    pub fn advance(session: &mut BookingSession) -> bool {
        if !Self::can_advance(session) {
            log::debug!(
                "advance refused at step {} for {}",
                session.current_step_index,
                session.retreat
            );
            return false;
        }

        let next = (session.current_step_index + 1).min(LAST_STEP_INDEX);
        let moved = next != session.current_step_index;
        session.current_step_index = next;
        moved
    }

    /// Moves one step back; never re-validates.
    pub fn retreat(session: &mut BookingSession) -> bool {
        let prev = session.current_step_index.saturating_sub(1);
        let moved = prev != session.current_step_index;
        session.current_step_index = prev;
        moved
    }

    pub fn is_terminal(session: &BookingSession) -> bool {
        session.current_step_index >= LAST_STEP_INDEX
    }

    pub fn progress_percent(step_index: usize) -> f64 {
        let step_number = step_index.min(LAST_STEP_INDEX) + 1;
        step_number as f64 / WizardStep::COUNT as f64 * 100.0
    }
}
