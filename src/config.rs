/// Application-level constants
pub const APP_NAME: &str = "MediGuide";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Budget ceiling applied when a query does not set one (KRW).
pub const DEFAULT_COST_CEILING: u32 = 1_000_000;

/// Ceiling preset at the start of an interactive session (KRW).
pub const INITIAL_COST_CEILING: u32 = 500_000;

/// Accepted range and step for the interactive cost control (KRW).
pub const COST_CEILING_MIN: u32 = 100_000;
pub const COST_CEILING_MAX: u32 = 1_000_000;
pub const COST_CEILING_STEP: u32 = 50_000;

/// Maximum number of symptom suggestions returned for a query.
pub const SUGGESTION_LIMIT: usize = 5;

/// Default tracing filter when neither RUST_LOG nor --log-level is given.
pub fn default_log_filter() -> &'static str {
    "mediguide=warn"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_mediguide() {
        assert_eq!(APP_NAME, "MediGuide");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn cost_ceilings_are_ordered() {
        assert!(COST_CEILING_MIN <= INITIAL_COST_CEILING);
        assert!(INITIAL_COST_CEILING <= COST_CEILING_MAX);
        assert!(DEFAULT_COST_CEILING <= COST_CEILING_MAX);
    }

    #[test]
    fn cost_bounds_sit_on_the_step_grid() {
        assert_eq!(COST_CEILING_MIN % COST_CEILING_STEP, 0);
        assert_eq!(COST_CEILING_MAX % COST_CEILING_STEP, 0);
        assert_eq!(INITIAL_COST_CEILING % COST_CEILING_STEP, 0);
    }

    #[test]
    fn default_filter_targets_this_crate() {
        assert!(default_log_filter().starts_with("mediguide"));
    }
}
