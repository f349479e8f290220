mod health_scoring;

pub use health_scoring::HealthScoring;
