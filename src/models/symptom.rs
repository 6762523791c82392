use serde::{Deserialize, Serialize};

use super::enums::Severity;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Symptom {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub severity: Severity,
    /// Free-text associations, not required to name catalog entries.
    pub related_symptoms: Vec<String>,
}
