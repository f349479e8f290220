use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

/// Text shown for a metric the registry could not provide
pub const NOT_AVAILABLE: &str = "N/A";

/// A single health metric value
///
/// Every metric degrades independently: a missing registry field turns only
/// that metric into [`Metric::NotAvailable`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    /// Percentage in 0..=100, rendered with one decimal
    Percent(f64),
    /// Plain counter such as likes
    Count(u64),
    /// Granted out of maximum points
    Points { granted: u64, max: u64 },
    NotAvailable,
}

impl Metric {
    pub fn is_available(&self) -> bool {
        !matches!(self, Metric::NotAvailable)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Percent(value) => write!(f, "{:.1}%", value),
            Metric::Count(value) => write!(f, "{}", value),
            Metric::Points { granted, max } => write!(f, "{}/{}", granted, max),
            Metric::NotAvailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

impl Serialize for Metric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Health signals for one package
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthRecord {
    pub popularity: Metric,
    pub likes: Metric,
    pub pub_points: Metric,
    pub maintenance: Metric,
    pub quality: Metric,
}

impl HealthRecord {
    /// A record where every field is the not-available sentinel
    pub fn not_available() -> Self {
        Self {
            popularity: Metric::NotAvailable,
            likes: Metric::NotAvailable,
            pub_points: Metric::NotAvailable,
            maintenance: Metric::NotAvailable,
            quality: Metric::NotAvailable,
        }
    }

    pub fn is_fully_unavailable(&self) -> bool {
        self.metrics().iter().all(|(_, metric)| !metric.is_available())
    }

    /// Metrics with their display labels, in report order
    pub fn metrics(&self) -> [(&'static str, Metric); 5] {
        [
            ("Popularity", self.popularity),
            ("Likes", self.likes),
            ("Pub Points", self.pub_points),
            ("Maintenance", self.maintenance),
            ("Quality", self.quality),
        ]
    }
}

/// Raw score fields read from the registry, each optional
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreSnapshot {
    /// 0..=1
    pub popularity_score: Option<f64>,
    pub like_count: Option<u64>,
    pub granted_points: Option<u64>,
    pub max_points: Option<u64>,
    /// When the score card was last recomputed
    pub last_updated: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_display() {
        assert_eq!(Metric::Percent(87.456).to_string(), "87.5%");
        assert_eq!(Metric::Count(1234).to_string(), "1234");
        assert_eq!(
            Metric::Points {
                granted: 140,
                max: 160
            }
            .to_string(),
            "140/160"
        );
        assert_eq!(Metric::NotAvailable.to_string(), "N/A");
    }

    #[test]
    fn test_metric_serializes_as_display_string() {
        let json = serde_json::to_string(&Metric::Percent(50.0)).unwrap();
        assert_eq!(json, "\"50.0%\"");
        let json = serde_json::to_string(&Metric::NotAvailable).unwrap();
        assert_eq!(json, "\"N/A\"");
    }

    #[test]
    fn test_not_available_record() {
        let record = HealthRecord::not_available();
        assert!(record.is_fully_unavailable());
        assert!(record
            .metrics()
            .iter()
            .all(|(_, metric)| metric.to_string() == NOT_AVAILABLE));
    }

    #[test]
    fn test_partially_available_record() {
        let record = HealthRecord {
            likes: Metric::Count(3),
            ..HealthRecord::not_available()
        };
        assert!(!record.is_fully_unavailable());
    }
}
