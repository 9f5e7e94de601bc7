use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shooting genres a photographer can offer. Photo categories reuse the
/// same set, so the directory filter and the gallery filter share one enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Specialization {
    Wedding,
    Portrait,
    Reportage,
    Lovestory,
    Fashion,
}

impl Specialization {
    pub const ALL: [Specialization; 5] = [
        Specialization::Wedding,
        Specialization::Portrait,
        Specialization::Reportage,
        Specialization::Lovestory,
        Specialization::Fashion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Specialization::Wedding => "wedding",
            Specialization::Portrait => "portrait",
            Specialization::Reportage => "reportage",
            Specialization::Lovestory => "lovestory",
            Specialization::Fashion => "fashion",
        }
    }
}

impl FromStr for Specialization {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wedding" => Ok(Specialization::Wedding),
            "portrait" => Ok(Specialization::Portrait),
            "reportage" => Ok(Specialization::Reportage),
            "lovestory" => Ok(Specialization::Lovestory),
            "fashion" => Ok(Specialization::Fashion),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Specialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ru,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::En => "en",
        }
    }
}

impl FromStr for Language {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ru" => Ok(Language::Ru),
            "en" => Ok(Language::En),
            _ => Err(()),
        }
    }
}

/// Booking lifecycle: new -> in_progress -> completed, or -> cancelled
/// from any active state. Completed and cancelled are terminal; only
/// terminal bookings can be soft-deleted by either side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    New,
    InProgress,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::New => "new",
            BookingStatus::InProgress => "in_progress",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::Cancelled)
    }
}

impl FromStr for BookingStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(BookingStatus::New),
            "in_progress" => Ok(BookingStatus::InProgress),
            "completed" => Ok(BookingStatus::Completed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportStatus {
    New,
    InProgress,
    Resolved,
    Closed,
}

impl SupportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SupportStatus::New => "new",
            SupportStatus::InProgress => "in_progress",
            SupportStatus::Resolved => "resolved",
            SupportStatus::Closed => "closed",
        }
    }
}

impl FromStr for SupportStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(SupportStatus::New),
            "in_progress" => Ok(SupportStatus::InProgress),
            "resolved" => Ok(SupportStatus::Resolved),
            "closed" => Ok(SupportStatus::Closed),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specialization_round_trips_through_str() {
        for spec in Specialization::ALL {
            assert_eq!(spec.as_str().parse::<Specialization>(), Ok(spec));
        }
        assert!("macro".parse::<Specialization>().is_err());
    }

    #[test]
    fn booking_terminal_states() {
        assert!(!BookingStatus::New.is_terminal());
        assert!(!BookingStatus::InProgress.is_terminal());
        assert!(BookingStatus::Completed.is_terminal());
        assert!(BookingStatus::Cancelled.is_terminal());
    }

    #[test]
    fn booking_status_serde_uses_snake_case() {
        let json = serde_json::to_string(&BookingStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        let back: BookingStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, BookingStatus::InProgress);
    }
}
