pub mod doctor;
pub mod enums;
pub mod recommendation;
pub mod symptom;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}

pub use doctor::{ConsultationFee, Doctor, Location, MedicalTest};
pub use enums::Severity;
pub use recommendation::Recommendation;
pub use symptom::Symptom;
