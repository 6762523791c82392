use serde::{Deserialize, Serialize};

/// Consultation pricing in KRW.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsultationFee {
    pub initial: u32,
    pub follow_up: u32,
}

/// A diagnostic test a doctor offers, priced in KRW.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalTest {
    pub name: String,
    pub cost: u32,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub address: String,
    pub phone: String,
    pub website: Option<String>,
}

/// One entry in the bundled specialist catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub hospital: String,
    pub department: String,
    /// Free-text focus areas, comma-separated in the source data.
    pub specialty: String,
    pub credentials: Vec<String>,
    pub experience: String,
    pub awards: Vec<String>,
    pub publications: Vec<String>,
    pub media_appearances: Vec<String>,
    pub consultation_fee: ConsultationFee,
    pub tests: Vec<MedicalTest>,
    pub location: Location,
    pub image: String,
    pub rating: f32,
    pub review_count: u32,
}
