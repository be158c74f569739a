use std::collections::BTreeSet;

use chrono::NaiveDate;

pub const DATE_PLACEHOLDER: &str = "—";

pub struct SummaryService;

impl SummaryService {
    /// A single selected day still counts as one night.
    pub fn nights(selected_dates: &BTreeSet<NaiveDate>) -> u32 {
        let count = u32::try_from(selected_dates.len()).unwrap_or(u32::MAX);
        count.saturating_sub(1).max(1)
    }

    pub fn check_in(selected_dates: &BTreeSet<NaiveDate>) -> Option<NaiveDate> {
        selected_dates.first().copied()
    }

    pub fn check_out(selected_dates: &BTreeSet<NaiveDate>) -> Option<NaiveDate> {
        selected_dates.last().copied()
    }

    /// "Mon, Oct 19" style label, or a dash when there is no date.
    pub fn date_label(date: Option<NaiveDate>) -> String {
        match date {
            Some(date) => date.format("%a, %b %-d").to_string(),
            None => DATE_PLACEHOLDER.to_string(),
        }
    }

    /// Check-out label; collapses to the placeholder when it equals check-in.
    pub fn check_out_label(check_in: Option<NaiveDate>, check_out: Option<NaiveDate>) -> String {
        match check_out {
            Some(out) if Some(out) != check_in => Self::date_label(Some(out)),
            _ => DATE_PLACEHOLDER.to_string(),
        }
    }

    pub fn pluralize(count: u32, noun: &str) -> String {
        if count > 1 {
            format!("{} {}s", count, noun)
        } else {
            format!("{} {}", count, noun)
        }
    }

    /// Footer line: dates, party size, and stay length.
    pub fn stay_summary(
        check_in: Option<NaiveDate>,
        check_out: Option<NaiveDate>,
        guests: u8,
        nights: u32,
    ) -> String {
        let mut dates = Self::date_label(check_in);
        if let Some(out) = check_out {
            if Some(out) != check_in {
                dates.push_str(&format!(" → {}", Self::date_label(Some(out))));
            }
        }

        format!(
            "{}  •  {} • {}",
            dates,
            Self::pluralize(u32::from(guests), "guest"),
            Self::pluralize(nights, "night")
        )
    }

    /// Whole-unit display of a total. Display only; totals stay unrounded.
    pub fn format_total(total: f64) -> String {
        format!("${:.0}", total)
    }
}
