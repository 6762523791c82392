//! Bundled symptom and doctor catalog.
//!
//! The dataset is compiled into the binary and never mutated at runtime.
//! Both collections keep their curated order; every read goes through the
//! `Catalog` facade so synthetic catalogs can be swapped in for tests.

mod doctors;
mod symptoms;

use std::sync::LazyLock;

use crate::models::{Doctor, Symptom};

static BUNDLED: LazyLock<Catalog> =
    LazyLock::new(|| Catalog::new(symptoms::bundled_symptoms(), doctors::bundled_doctors()));

pub struct Catalog {
    symptoms: Vec<Symptom>,
    doctors: Vec<Doctor>,
}

impl Catalog {
    pub fn new(symptoms: Vec<Symptom>, doctors: Vec<Doctor>) -> Self {
        Self { symptoms, doctors }
    }

    /// The catalog shipped with the application.
    pub fn bundled() -> &'static Catalog {
        &BUNDLED
    }

    /// All symptoms in curated order.
    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    /// All doctors in curated order.
    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    /// Exact-name symptom lookup. No normalization, mirroring the matcher.
    pub fn find_symptom(&self, name: &str) -> Option<&Symptom> {
        self.symptoms.iter().find(|s| s.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;

    #[test]
    fn bundled_catalog_sizes() {
        let catalog = Catalog::bundled();
        assert_eq!(catalog.symptoms().len(), 14);
        assert_eq!(catalog.doctors().len(), 11);
    }

    #[test]
    fn symptoms_keep_curated_order() {
        let catalog = Catalog::bundled();
        let names: Vec<&str> = catalog
            .symptoms()
            .iter()
            .take(5)
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, ["신체 비대칭", "만성피로", "소화불량", "두통", "수면장애"]);
    }

    #[test]
    fn doctors_keep_curated_order() {
        let catalog = Catalog::bundled();
        assert_eq!(catalog.doctors()[0].name, "나영무");
        assert_eq!(catalog.doctors()[10].name, "임동규");
    }

    #[test]
    fn find_symptom_is_exact_match() {
        let catalog = Catalog::bundled();
        let headache = catalog.find_symptom("두통").unwrap();
        assert_eq!(headache.category, "신경계");
        assert_eq!(headache.severity, Severity::High);
        assert!(catalog.find_symptom("두").is_none());
        assert!(catalog.find_symptom(" 두통").is_none());
    }

    #[test]
    fn every_doctor_has_four_credentials() {
        // The matcher's experience gate (more than 2 credentials) admits
        // every bundled doctor; pin that property of the data.
        let catalog = Catalog::bundled();
        assert!(catalog.doctors().iter().all(|d| d.credentials.len() == 4));
    }

    #[test]
    fn fee_and_test_amounts_are_positive() {
        let catalog = Catalog::bundled();
        for doctor in catalog.doctors() {
            assert!(doctor.consultation_fee.initial > 0);
            assert!(doctor.consultation_fee.follow_up > 0);
            for test in &doctor.tests {
                assert!(test.cost > 0, "{} has a zero-cost test", doctor.name);
            }
        }
    }
}
