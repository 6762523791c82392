//! Catalog integrity checks.
//!
//! Runs the bundled catalog (or a synthetic one) through structural and
//! cross-data checks and returns a categorized report. Errors mean the
//! data is unusable; warnings and info flag quality drift worth reviewing.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::catalog::Catalog;
use crate::specialty;

/// Categories a catalog symptom is allowed to carry.
pub const CATEGORIES: &[&str] = &[
    "근골격계",
    "전신증상",
    "소화기계",
    "신경계",
    "정신건강",
    "호흡기계",
    "피부계",
];

/// Contact format patterns (compiled once via LazyLock).
static RE_PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0\d{1,2}-\d{3,4}-\d{4}$").unwrap());
static RE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https?://(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b[-a-zA-Z0-9()@:%_+.~#?&/=]*$",
    )
    .unwrap()
});

/// A single integrity issue found in the catalog.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CatalogIssue {
    pub category: String,
    pub severity: String,
    pub description: String,
}

/// Result of a full catalog check.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CatalogReport {
    pub issues: Vec<CatalogIssue>,
    pub doctors_checked: usize,
    pub symptoms_checked: usize,
}

impl CatalogReport {
    pub fn error_count(&self) -> usize {
        self.issues.iter().filter(|i| i.severity == "error").count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues.iter().filter(|i| i.severity == "warning").count()
    }

    /// Warnings and info do not invalidate the catalog; errors do.
    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }

    pub fn render(&self) -> String {
        let status = if self.is_valid() { "PASS" } else { "FAIL" };
        let mut out = format!(
            "catalog check: {status}\n{} doctors, {} symptoms checked\nerrors: {}, warnings: {}\n",
            self.doctors_checked,
            self.symptoms_checked,
            self.error_count(),
            self.warning_count()
        );
        for issue in &self.issues {
            out.push_str(&format!(
                "[{}] {}: {}\n",
                issue.severity, issue.category, issue.description
            ));
        }
        out
    }
}

/// Run a full integrity check across the catalog.
///
/// Covers: id uniqueness, fee and test-cost sanity, contact formats,
/// credential and degree presence, category membership, description
/// quality, rating ranges, fracture coverage, near-duplicate hospital
/// names, and drift between the specialty tables and the catalog.
pub fn check_catalog(catalog: &Catalog) -> CatalogReport {
    let mut issues = Vec::new();

    check_doctors(catalog, &mut issues);
    check_symptoms(catalog, &mut issues);
    check_cross_data(catalog, &mut issues);

    for issue in issues.iter().filter(|i| i.severity != "info") {
        warn!(category = %issue.category, severity = %issue.severity, "{}", issue.description);
    }

    CatalogReport {
        issues,
        doctors_checked: catalog.doctors().len(),
        symptoms_checked: catalog.symptoms().len(),
    }
}

fn push(issues: &mut Vec<CatalogIssue>, category: &str, severity: &str, description: String) {
    issues.push(CatalogIssue {
        category: category.into(),
        severity: severity.into(),
        description,
    });
}

fn check_doctors(catalog: &Catalog, issues: &mut Vec<CatalogIssue>) {
    // 1. Unique ids
    let mut seen = HashSet::new();
    for doctor in catalog.doctors() {
        if !seen.insert(doctor.id.as_str()) {
            push(
                issues,
                "duplicate_id",
                "error",
                format!("duplicate doctor id '{}'", doctor.id),
            );
        }
    }

    for doctor in catalog.doctors() {
        let name = &doctor.name;

        // 2. Fee sanity (KRW)
        for (label, fee) in [
            ("initial", doctor.consultation_fee.initial),
            ("follow-up", doctor.consultation_fee.follow_up),
        ] {
            if fee == 0 {
                push(
                    issues,
                    "fee_range",
                    "error",
                    format!("doctor '{name}': {label} fee is zero"),
                );
            } else if fee > 1_000_000 {
                push(
                    issues,
                    "fee_range",
                    "warning",
                    format!("doctor '{name}': {label} fee seems high: {fee}"),
                );
            }
        }

        // 3. Test cost sanity
        for test in &doctor.tests {
            if test.cost == 0 {
                push(
                    issues,
                    "test_cost",
                    "error",
                    format!("doctor '{name}': test '{}' has zero cost", test.name),
                );
            } else if test.cost > 10_000_000 {
                push(
                    issues,
                    "test_cost",
                    "warning",
                    format!(
                        "doctor '{name}': test '{}' cost seems high: {}",
                        test.name, test.cost
                    ),
                );
            }
        }

        // 4. Contact formats
        if !doctor.location.phone.is_empty() && !RE_PHONE.is_match(&doctor.location.phone) {
            push(
                issues,
                "contact_format",
                "warning",
                format!(
                    "doctor '{name}': invalid phone format: {}",
                    doctor.location.phone
                ),
            );
        }
        if let Some(website) = &doctor.location.website {
            if !RE_URL.is_match(website) {
                push(
                    issues,
                    "contact_format",
                    "warning",
                    format!("doctor '{name}': invalid website URL: {website}"),
                );
            }
        }
        if doctor.location.address.is_empty() {
            push(
                issues,
                "contact_format",
                "warning",
                format!("doctor '{name}': missing address"),
            );
        }

        // 5. Credentials and degree
        if doctor.credentials.is_empty() {
            push(
                issues,
                "credentials",
                "warning",
                format!("doctor '{name}': no credentials listed"),
            );
        } else {
            let has_degree = doctor
                .credentials
                .iter()
                .any(|c| c.contains("의과대학") || c.contains("대학원"));
            if !has_degree {
                push(
                    issues,
                    "credentials",
                    "warning",
                    format!("doctor '{name}': no medical degree found in credentials"),
                );
            }
        }
    }
}

fn check_symptoms(catalog: &Catalog, issues: &mut Vec<CatalogIssue>) {
    let mut seen = HashSet::new();
    for symptom in catalog.symptoms() {
        if !seen.insert(symptom.id.as_str()) {
            push(
                issues,
                "duplicate_id",
                "error",
                format!("duplicate symptom id '{}'", symptom.id),
            );
        }

        if !CATEGORIES.contains(&symptom.category.as_str()) {
            push(
                issues,
                "category_set",
                "warning",
                format!(
                    "symptom '{}': unknown category '{}'",
                    symptom.name, symptom.category
                ),
            );
        }

        let chars = symptom.description.chars().count();
        if chars < 10 {
            push(
                issues,
                "description_length",
                "warning",
                format!("symptom '{}': description too short", symptom.name),
            );
        } else if chars > 500 {
            push(
                issues,
                "description_length",
                "warning",
                format!(
                    "symptom '{}': description very long ({chars} chars)",
                    symptom.name
                ),
            );
        }
    }
}

fn check_cross_data(catalog: &Catalog, issues: &mut Vec<CatalogIssue>) {
    // Rating ranges
    for doctor in catalog.doctors() {
        if !(0.0..=5.0).contains(&doctor.rating) {
            push(
                issues,
                "rating_range",
                "error",
                format!(
                    "doctor '{}': rating {} out of valid range (0-5)",
                    doctor.name, doctor.rating
                ),
            );
        } else if doctor.rating > 4.9 && doctor.review_count < 10 {
            push(
                issues,
                "rating_range",
                "warning",
                format!(
                    "doctor '{}': very high rating ({}) with few reviews ({})",
                    doctor.name, doctor.rating, doctor.review_count
                ),
            );
        }
    }

    // Fracture symptoms need fracture-capable doctors
    let fracture_symptoms = catalog
        .symptoms()
        .iter()
        .filter(|s| s.name.contains("골절"))
        .count();
    let fracture_specialists = catalog
        .doctors()
        .iter()
        .filter(|d| d.specialty.contains("골절") || d.department.contains("정형외과"))
        .count();
    if fracture_symptoms > 0 && fracture_specialists == 0 {
        push(
            issues,
            "coverage",
            "warning",
            "found fracture symptoms but no fracture specialists".into(),
        );
    }

    // Near-duplicate hospital names
    let mut hospitals: Vec<&str> = Vec::new();
    for doctor in catalog.doctors() {
        if !doctor.hospital.is_empty() && !hospitals.contains(&doctor.hospital.as_str()) {
            hospitals.push(&doctor.hospital);
        }
    }
    for (i, a) in hospitals.iter().enumerate() {
        for b in &hospitals[i + 1..] {
            if similar_names(a, b) {
                push(
                    issues,
                    "hospital_names",
                    "warning",
                    format!("similar hospital names found: '{a}' and '{b}'"),
                );
            }
        }
    }

    // Specialty table drift, both directions
    for name in specialty::MAPPED_SYMPTOMS {
        if catalog.find_symptom(name).is_none() {
            push(
                issues,
                "specialty_mapping",
                "warning",
                format!("symptom mapping for '{name}' has no catalog entry"),
            );
        }
    }
    for name in specialty::MAPPED_DOCTORS {
        if !catalog.doctors().iter().any(|d| d.name == *name) {
            push(
                issues,
                "specialty_mapping",
                "warning",
                format!("doctor mapping for '{name}' has no catalog entry"),
            );
        }
    }
    for symptom in catalog.symptoms() {
        if specialty::specialties_for_symptom(&symptom.name).is_empty() {
            push(
                issues,
                "specialty_mapping",
                "info",
                format!("no specialty mapping for symptom '{}'", symptom.name),
            );
        }
    }

    let categories: HashSet<&str> = catalog
        .symptoms()
        .iter()
        .map(|s| s.category.as_str())
        .collect();
    let specialties: HashSet<&str> = catalog
        .doctors()
        .iter()
        .map(|d| d.specialty.as_str())
        .collect();
    push(
        issues,
        "coverage",
        "info",
        format!(
            "coverage: {} symptom categories, {} specialties",
            categories.len(),
            specialties.len()
        ),
    );
}

/// Character-set overlap ratio above 0.8 counts as a near-duplicate.
fn similar_names(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    let sa: HashSet<char> = a.chars().collect();
    let sb: HashSet<char> = b.chars().collect();
    let common = sa.intersection(&sb).count();
    let total = sa.union(&sb).count();
    common as f32 / total as f32 > 0.8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ConsultationFee, Doctor, Location, Severity, Symptom};

    fn make_doctor(name: &str, hospital: &str) -> Doctor {
        Doctor {
            id: name.into(),
            name: name.into(),
            hospital: hospital.into(),
            department: "내과".into(),
            specialty: String::new(),
            credentials: vec!["의과대학 졸업".into(), "대학원 석사".into()],
            experience: String::new(),
            awards: vec![],
            publications: vec![],
            media_appearances: vec![],
            consultation_fee: ConsultationFee {
                initial: 30_000,
                follow_up: 20_000,
            },
            tests: vec![],
            location: Location {
                address: "서울특별시".into(),
                phone: "02-1234-5678".into(),
                website: None,
            },
            image: String::new(),
            rating: 4.5,
            review_count: 50,
        }
    }

    fn make_symptom(id: &str, name: &str, category: &str) -> Symptom {
        Symptom {
            id: id.into(),
            name: name.into(),
            description: "열흘 넘게 계속되는 불편한 증상".into(),
            category: category.into(),
            severity: Severity::Medium,
            related_symptoms: vec![],
        }
    }

    #[test]
    fn bundled_catalog_passes() {
        let report = check_catalog(Catalog::bundled());
        assert!(report.is_valid());
        assert_eq!(report.error_count(), 0);
        assert_eq!(report.doctors_checked, 11);
        assert_eq!(report.symptoms_checked, 14);
    }

    #[test]
    fn bundled_warnings_are_the_known_data_quirks() {
        // one doctor lists no formal degree, one website has a long TLD
        let report = check_catalog(Catalog::bundled());
        assert_eq!(report.warning_count(), 2);
        assert!(report
            .issues
            .iter()
            .any(|i| i.severity == "warning" && i.description.contains("이동환")));
        assert!(report
            .issues
            .iter()
            .any(|i| i.severity == "warning" && i.description.contains("박정호")));
    }

    #[test]
    fn bundled_unmapped_symptoms_surface_as_info() {
        let report = check_catalog(Catalog::bundled());
        let unmapped = report
            .issues
            .iter()
            .filter(|i| i.category == "specialty_mapping" && i.severity == "info")
            .count();
        // the six fracture entries have no specialty table row
        assert_eq!(unmapped, 6);
    }

    #[test]
    fn duplicate_doctor_ids_fail_validation() {
        let mut a = make_doctor("가의사", "가병원");
        let b = make_doctor("나의사", "나병원");
        a.id = b.id.clone();
        let catalog = Catalog::new(vec![], vec![a, b]);
        let report = check_catalog(&catalog);
        assert!(!report.is_valid());
        assert!(report
            .issues
            .iter()
            .any(|i| i.category == "duplicate_id" && i.severity == "error"));
    }

    #[test]
    fn zero_fee_is_an_error() {
        let mut doctor = make_doctor("가의사", "가병원");
        doctor.consultation_fee.initial = 0;
        let report = check_catalog(&Catalog::new(vec![], vec![doctor]));
        assert!(!report.is_valid());
    }

    #[test]
    fn bad_phone_format_is_a_warning() {
        let mut doctor = make_doctor("가의사", "가병원");
        doctor.location.phone = "1234-5678".into();
        let report = check_catalog(&Catalog::new(vec![], vec![doctor]));
        assert!(report.is_valid());
        assert!(report
            .issues
            .iter()
            .any(|i| i.category == "contact_format" && i.description.contains("phone")));
    }

    #[test]
    fn long_tld_fails_the_url_pattern() {
        let mut doctor = make_doctor("가의사", "가병원");
        doctor.location.website = Some("https://www.severance.healthcare".into());
        let report = check_catalog(&Catalog::new(vec![], vec![doctor]));
        assert!(report
            .issues
            .iter()
            .any(|i| i.description.contains("invalid website URL")));
    }

    #[test]
    fn similar_hospital_names_are_flagged() {
        let a = make_doctor("가의사", "HIMCHAN병원");
        let b = make_doctor("나의사", "HIMCHAN병원점");
        let report = check_catalog(&Catalog::new(vec![], vec![a, b]));
        assert!(report
            .issues
            .iter()
            .any(|i| i.category == "hospital_names"));
    }

    #[test]
    fn identical_hospital_names_are_not_flagged() {
        let a = make_doctor("가의사", "서울병원");
        let b = make_doctor("나의사", "서울병원");
        let report = check_catalog(&Catalog::new(vec![], vec![a, b]));
        assert!(!report
            .issues
            .iter()
            .any(|i| i.category == "hospital_names"));
    }

    #[test]
    fn unknown_category_is_a_warning() {
        let catalog = Catalog::new(vec![make_symptom("1", "기침", "순환기계")], vec![]);
        let report = check_catalog(&catalog);
        assert!(report
            .issues
            .iter()
            .any(|i| i.category == "category_set" && i.description.contains("순환기계")));
    }

    #[test]
    fn rating_out_of_range_is_an_error() {
        let mut doctor = make_doctor("가의사", "가병원");
        doctor.rating = 5.5;
        let report = check_catalog(&Catalog::new(vec![], vec![doctor]));
        assert!(!report.is_valid());
    }

    #[test]
    fn high_rating_with_few_reviews_is_a_warning() {
        let mut doctor = make_doctor("가의사", "가병원");
        doctor.rating = 5.0;
        doctor.review_count = 3;
        let report = check_catalog(&Catalog::new(vec![], vec![doctor]));
        assert!(report.is_valid());
        assert!(report
            .issues
            .iter()
            .any(|i| i.category == "rating_range" && i.severity == "warning"));
    }

    #[test]
    fn missing_fracture_specialists_is_a_warning() {
        let catalog = Catalog::new(
            vec![make_symptom("1", "골절의심", "근골격계")],
            vec![make_doctor("가의사", "가병원")],
        );
        let report = check_catalog(&catalog);
        assert!(report
            .issues
            .iter()
            .any(|i| i.category == "coverage" && i.severity == "warning"));
    }

    #[test]
    fn report_renders_status_and_counts() {
        let report = check_catalog(Catalog::bundled());
        let text = report.render();
        assert!(text.contains("PASS"));
        assert!(text.contains("11 doctors, 14 symptoms"));
    }
}
