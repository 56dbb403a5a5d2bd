//! Lunar (Hijri) calendar date value type.
//!
//! Conversion between Gregorian and Hijri dates is performed by an external
//! collaborator; this type only carries the result.

use serde::{Deserialize, Serialize};

/// Month number of Ramadan, the fasting month.
pub const RAMADAN: u32 = 9;
/// Month number of Shawwal; Eid al-Fitr falls on its first day.
pub const SHAWWAL: u32 = 10;
/// Month number of Dhu al-Hijjah; Eid al-Adha falls on its tenth day.
pub const DHU_AL_HIJJAH: u32 = 12;

/// A Hijri calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HijriDate {
    pub year: i32,
    /// Month in 1..=12.
    pub month: u32,
    /// Day in 1..=30.
    pub day: u32,
}

impl HijriDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// English transliteration of the month name.
    pub fn month_name(&self) -> &'static str {
        match self.month {
            1 => "Muharram",
            2 => "Safar",
            3 => "Rabi al-Awwal",
            4 => "Rabi al-Thani",
            5 => "Jumada al-Awwal",
            6 => "Jumada al-Thani",
            7 => "Rajab",
            8 => "Shaban",
            9 => "Ramadan",
            10 => "Shawwal",
            11 => "Dhu al-Qadah",
            12 => "Dhu al-Hijjah",
            _ => "Unknown",
        }
    }

    /// Whether this date falls within the fasting month.
    pub fn is_in_ramadan(&self) -> bool {
        self.month == RAMADAN
    }
}

impl std::fmt::Display for HijriDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} AH", self.day, self.month_name(), self.year)
    }
}
