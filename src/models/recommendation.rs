use serde::Serialize;

use super::doctor::Doctor;

/// A doctor surfaced by the matcher, with justification and cost estimate.
/// Borrows the catalog entry; serialized to the frontends as a full record.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation<'a> {
    pub doctor: &'a Doctor,
    pub reasoning: String,
    pub estimated_total_cost: u32,
    pub recommended_tests: Vec<String>,
}
