pub mod aggregator;
pub mod clock;
pub mod eligibility;
pub mod readiness;
pub mod streak;
