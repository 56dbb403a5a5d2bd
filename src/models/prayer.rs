//! Prayer identifiers, calculation parameter sets, and computed time entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The five canonical daily prayers, in fixed chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Prayer {
    /// Dawn prayer.
    Fajr,
    /// Midday prayer.
    Dhuhr,
    /// Afternoon prayer.
    Asr,
    /// Sunset prayer.
    Maghrib,
    /// Night prayer.
    Isha,
}

impl Prayer {
    /// All five prayers in canonical order. Every schedule carries exactly
    /// these, in exactly this order.
    pub const ALL: [Prayer; 5] = [
        Prayer::Fajr,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    /// English display name.
    pub fn name(&self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        }
    }
}

impl std::fmt::Display for Prayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single computed prayer time.
///
/// Immutable once produced. `offset_adjusted` records whether the
/// fasting-month Isha offset was applied to this entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrayerTimeEntry {
    pub prayer: Prayer,
    pub time: DateTime<Utc>,
    pub offset_adjusted: bool,
}

impl PrayerTimeEntry {
    pub fn new(prayer: Prayer, time: DateTime<Utc>) -> Self {
        Self {
            prayer,
            time,
            offset_adjusted: false,
        }
    }
}

/// Named astronomical parameter set used by the calculation engine.
///
/// A method fixes the twilight angles and the night-prayer rule. The engine
/// consumes the identifier; this crate only inspects whether the method
/// defines Isha as a fixed interval after sunset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMethod {
    #[default]
    MuslimWorldLeague,
    Egyptian,
    Karachi,
    UmmAlQura,
    Qatar,
    NorthAmerica,
    MoonsightingCommittee,
}

impl CalculationMethod {
    /// Whether this method defines the night prayer as a fixed interval
    /// after sunset rather than by a twilight angle.
    ///
    /// Only these methods are eligible for the fasting-month Isha offset.
    pub fn uses_fixed_isha_interval(&self) -> bool {
        matches!(self, CalculationMethod::UmmAlQura | CalculationMethod::Qatar)
    }
}

impl FromStr for CalculationMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "muslim_world_league" | "mwl" => Ok(CalculationMethod::MuslimWorldLeague),
            "egyptian" => Ok(CalculationMethod::Egyptian),
            "karachi" => Ok(CalculationMethod::Karachi),
            "umm_al_qura" => Ok(CalculationMethod::UmmAlQura),
            "qatar" => Ok(CalculationMethod::Qatar),
            "north_america" | "isna" => Ok(CalculationMethod::NorthAmerica),
            "moonsighting_committee" => Ok(CalculationMethod::MoonsightingCommittee),
            other => Err(format!(
                "Unknown calculation method '{}'. Use muslim_world_league, egyptian, karachi, \
                 umm_al_qura, qatar, north_america, or moonsighting_committee.",
                other
            )),
        }
    }
}

/// Jurisprudence school. Affects primarily the afternoon-prayer shadow
/// length used by the calculation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Madhab {
    #[default]
    Shafi,
    Hanafi,
}

impl FromStr for Madhab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "shafi" => Ok(Madhab::Shafi),
            "hanafi" => Ok(Madhab::Hanafi),
            other => Err(format!("Unknown madhab '{}'. Use shafi or hanafi.", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order_is_stable() {
        let names: Vec<&str> = Prayer::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Fajr", "Dhuhr", "Asr", "Maghrib", "Isha"]);
    }

    #[test]
    fn test_fixed_isha_interval_methods() {
        assert!(CalculationMethod::UmmAlQura.uses_fixed_isha_interval());
        assert!(CalculationMethod::Qatar.uses_fixed_isha_interval());
        assert!(!CalculationMethod::MuslimWorldLeague.uses_fixed_isha_interval());
        assert!(!CalculationMethod::Egyptian.uses_fixed_isha_interval());
        assert!(!CalculationMethod::MoonsightingCommittee.uses_fixed_isha_interval());
    }

    #[test]
    fn test_method_from_str_aliases() {
        assert_eq!(
            "umm_al_qura".parse::<CalculationMethod>().unwrap(),
            CalculationMethod::UmmAlQura
        );
        assert_eq!(
            "MWL".parse::<CalculationMethod>().unwrap(),
            CalculationMethod::MuslimWorldLeague
        );
        assert_eq!(
            "isna".parse::<CalculationMethod>().unwrap(),
            CalculationMethod::NorthAmerica
        );
        assert!("julian".parse::<CalculationMethod>().is_err());
    }

    #[test]
    fn test_madhab_from_str() {
        assert_eq!("shafi".parse::<Madhab>().unwrap(), Madhab::Shafi);
        assert_eq!("Hanafi".parse::<Madhab>().unwrap(), Madhab::Hanafi);
        assert!("maliki".parse::<Madhab>().is_err());
    }

    #[test]
    fn test_entry_starts_unadjusted() {
        let entry = PrayerTimeEntry::new(Prayer::Isha, Utc::now());
        assert!(!entry.offset_adjusted);
    }
}
