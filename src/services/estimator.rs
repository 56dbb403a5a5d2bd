//! Recurring event estimation.
//!
//! Estimates Gregorian dates for Ramadan and the two Eid festivals in a
//! given lunar year. Dates come from the lunar calendar collaborator; the
//! confidence band reuses the lookahead tier thresholds. Estimates carry a
//! documented one-day uncertainty versus local sighting-based authorities.

use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use log::debug;

use crate::engine::{Clock, LunarCalendarConverter};
use crate::error::ScheduleError;
use crate::models::{
    ConfidenceBand, DateInterval, EventEstimate, EventKind, HijriDate, DHU_AL_HIJJAH,
    EVENT_DISCLOSURE, RAMADAN, SHAWWAL,
};
use crate::policy::horizon;

/// Fixed span assumed for the fasting month, in days. The true length is 29
/// or 30 depending on sighting.
pub const RAMADAN_SPAN_DAYS: i64 = 29;

/// Estimates recurring calendar events for planning purposes.
pub struct EventEstimator {
    calendar: Arc<dyn LunarCalendarConverter>,
    clock: Arc<dyn Clock>,
}

impl EventEstimator {
    pub fn new(calendar: Arc<dyn LunarCalendarConverter>, clock: Arc<dyn Clock>) -> Self {
        Self { calendar, clock }
    }

    /// Estimated first day of Ramadan in the given lunar year.
    pub fn ramadan_start(&self, hijri_year: i32) -> Result<EventEstimate, ScheduleError> {
        self.estimate(EventKind::RamadanStart, HijriDate::new(hijri_year, RAMADAN, 1))
    }

    /// Estimated last day of Ramadan: the start plus a fixed 29-day span.
    pub fn ramadan_end(&self, hijri_year: i32) -> Result<EventEstimate, ScheduleError> {
        let span = self.ramadan_span(hijri_year)?;
        let hijri_date = self.calendar.to_hijri(span.end)?;
        Ok(self.assemble(EventKind::RamadanEnd, span.end, hijri_date))
    }

    /// Estimated inclusive span of the fasting month.
    pub fn ramadan_span(&self, hijri_year: i32) -> Result<DateInterval, ScheduleError> {
        let start = self
            .calendar
            .to_gregorian(HijriDate::new(hijri_year, RAMADAN, 1))?;
        Ok(DateInterval::new(start, start + Duration::days(RAMADAN_SPAN_DAYS)))
    }

    /// Estimated date of Eid al-Fitr: the first day of Shawwal.
    pub fn eid_al_fitr(&self, hijri_year: i32) -> Result<EventEstimate, ScheduleError> {
        self.estimate(EventKind::EidAlFitr, HijriDate::new(hijri_year, SHAWWAL, 1))
    }

    /// Estimated date of Eid al-Adha: the tenth day of Dhu al-Hijjah.
    pub fn eid_al_adha(&self, hijri_year: i32) -> Result<EventEstimate, ScheduleError> {
        self.estimate(
            EventKind::EidAlAdha,
            HijriDate::new(hijri_year, DHU_AL_HIJJAH, 10),
        )
    }

    /// Confidence band for an estimated date, measured from today.
    pub fn confidence(&self, date: NaiveDate) -> ConfidenceBand {
        horizon::confidence_band(date, self.clock.today())
    }

    fn estimate(
        &self,
        kind: EventKind,
        hijri_date: HijriDate,
    ) -> Result<EventEstimate, ScheduleError> {
        let date = self.calendar.to_gregorian(hijri_date)?;
        Ok(self.assemble(kind, date, hijri_date))
    }

    fn assemble(&self, kind: EventKind, date: NaiveDate, hijri_date: HijriDate) -> EventEstimate {
        let confidence = self.confidence(date);
        debug!(
            "estimated {} at {} ({}) confidence {:?}",
            kind.name(),
            date,
            hijri_date,
            confidence
        );
        EventEstimate {
            kind,
            date,
            hijri_date,
            confidence,
            disclosure: EVENT_DISCLOSURE.to_string(),
        }
    }
}
