use crate::dependency_analysis::domain::{HealthRecord, Metric, ScoreSnapshot};
use chrono::{DateTime, Utc};

/// Maintenance points lost per month since the score was last updated
const MAINTENANCE_DECAY_PER_MONTH: f64 = 5.0;

/// Length of a month for maintenance decay, in days
const DAYS_PER_MONTH: f64 = 30.0;

/// HealthScoring policy for turning raw registry scores into report metrics
///
/// Rules:
/// 1. popularity = popularityScore × 100
/// 2. likes = likeCount
/// 3. pub points = grantedPoints / maxPoints
/// 4. quality = grantedPoints / maxPoints × 100 (N/A when maxPoints is 0)
/// 5. maintenance = max(0, 100 − 5 × months since lastUpdated)
///
/// `lastUpdated` is when pub.dev last recomputed the score card, not the
/// date of the latest release.
///
/// Each metric is derived independently; a missing input only affects the
/// metrics that need it.
pub struct HealthScoring;

impl HealthScoring {
    /// Evaluates a snapshot relative to `now`
    pub fn evaluate(snapshot: &ScoreSnapshot, now: DateTime<Utc>) -> HealthRecord {
        HealthRecord {
            popularity: Self::popularity(snapshot.popularity_score),
            likes: snapshot
                .like_count
                .map(Metric::Count)
                .unwrap_or(Metric::NotAvailable),
            pub_points: match (snapshot.granted_points, snapshot.max_points) {
                (Some(granted), Some(max)) => Metric::Points { granted, max },
                _ => Metric::NotAvailable,
            },
            maintenance: Self::maintenance(snapshot.last_updated, now),
            quality: Self::quality(snapshot.granted_points, snapshot.max_points),
        }
    }

    fn popularity(score: Option<f64>) -> Metric {
        match score {
            Some(score) if score.is_finite() => Metric::Percent(score.clamp(0.0, 1.0) * 100.0),
            _ => Metric::NotAvailable,
        }
    }

    fn quality(granted: Option<u64>, max: Option<u64>) -> Metric {
        match (granted, max) {
            (Some(granted), Some(max)) if max > 0 => {
                let ratio = (granted as f64 / max as f64).min(1.0);
                Metric::Percent(ratio * 100.0)
            }
            _ => Metric::NotAvailable,
        }
    }

    fn maintenance(last_updated: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Metric {
        let Some(last_updated) = last_updated else {
            return Metric::NotAvailable;
        };

        // A score timestamp in the future counts as current
        let elapsed_days = (now - last_updated).num_seconds().max(0) as f64 / 86_400.0;
        let months = elapsed_days / DAYS_PER_MONTH;
        Metric::Percent((100.0 - months * MAINTENANCE_DECAY_PER_MONTH).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_evaluate_full_snapshot() {
        let snapshot = ScoreSnapshot {
            popularity_score: Some(0.954),
            like_count: Some(7400),
            granted_points: Some(140),
            max_points: Some(160),
            last_updated: Some(now() - Duration::days(60)),
        };

        let record = HealthScoring::evaluate(&snapshot, now());

        assert_eq!(record.popularity.to_string(), "95.4%");
        assert_eq!(record.likes.to_string(), "7400");
        assert_eq!(record.pub_points.to_string(), "140/160");
        assert_eq!(record.quality.to_string(), "87.5%");
        assert_eq!(record.maintenance.to_string(), "90.0%");
    }

    #[test]
    fn test_evaluate_empty_snapshot_is_fully_unavailable() {
        let record = HealthScoring::evaluate(&ScoreSnapshot::default(), now());
        assert!(record.is_fully_unavailable());
        assert_eq!(record, HealthRecord::not_available());
    }

    #[test]
    fn test_fields_degrade_independently() {
        let snapshot = ScoreSnapshot {
            like_count: Some(12),
            granted_points: Some(100),
            ..ScoreSnapshot::default()
        };

        let record = HealthScoring::evaluate(&snapshot, now());

        assert_eq!(record.likes, Metric::Count(12));
        assert_eq!(record.popularity, Metric::NotAvailable);
        // Points need both granted and max
        assert_eq!(record.pub_points, Metric::NotAvailable);
        assert_eq!(record.quality, Metric::NotAvailable);
        assert_eq!(record.maintenance, Metric::NotAvailable);
    }

    #[test]
    fn test_quality_with_zero_max_points() {
        let snapshot = ScoreSnapshot {
            granted_points: Some(0),
            max_points: Some(0),
            ..ScoreSnapshot::default()
        };

        let record = HealthScoring::evaluate(&snapshot, now());
        assert_eq!(record.quality, Metric::NotAvailable);
        assert_eq!(record.pub_points.to_string(), "0/0");
    }

    #[test]
    fn test_popularity_is_clamped() {
        let snapshot = ScoreSnapshot {
            popularity_score: Some(1.7),
            ..ScoreSnapshot::default()
        };
        let record = HealthScoring::evaluate(&snapshot, now());
        assert_eq!(record.popularity.to_string(), "100.0%");
    }

    #[test]
    fn test_maintenance_follows_score_age() {
        let snapshot = ScoreSnapshot {
            last_updated: Some(now() - Duration::days(15)),
            ..ScoreSnapshot::default()
        };
        let record = HealthScoring::evaluate(&snapshot, now());
        // Half a month since the score was recomputed
        assert_eq!(record.maintenance.to_string(), "97.5%");
    }

    #[test]
    fn test_maintenance_floors_at_zero() {
        let snapshot = ScoreSnapshot {
            last_updated: Some(now() - Duration::days(30 * 40)),
            ..ScoreSnapshot::default()
        };
        let record = HealthScoring::evaluate(&snapshot, now());
        assert_eq!(record.maintenance.to_string(), "0.0%");
    }

    #[test]
    fn test_maintenance_future_score_timestamp() {
        let snapshot = ScoreSnapshot {
            last_updated: Some(now() + Duration::days(3)),
            ..ScoreSnapshot::default()
        };
        let record = HealthScoring::evaluate(&snapshot, now());
        assert_eq!(record.maintenance.to_string(), "100.0%");
    }
}
