//! Symptom-to-doctor matching core.
//!
//! Pure functions over a `Catalog`: symptom suggestions for a search box,
//! doctor recommendation with per-doctor cost gating, and KRW formatting.
//! Unknown symptom names never fail a query; they carry no matching signal
//! and only surface verbatim in fallback justification text.

use tracing::debug;

use crate::catalog::Catalog;
use crate::config;
use crate::models::{Doctor, Recommendation, Symptom};
use crate::specialty;

// ─── Suggestions ─────────────────────────────────────────────────────────────

/// Up to five catalog symptoms matching the query, in catalog order.
///
/// A blank query returns the first five entries as a starter list. Matching
/// is a case-insensitive substring scan over name, description, and
/// category; the query is used as typed, only the blank check trims.
pub fn suggest_symptoms<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Symptom> {
    if query.trim().is_empty() {
        return catalog
            .symptoms()
            .iter()
            .take(config::SUGGESTION_LIMIT)
            .collect();
    }

    let needle = query.to_lowercase();
    catalog
        .symptoms()
        .iter()
        .filter(|s| {
            s.name.to_lowercase().contains(&needle)
                || s.description.to_lowercase().contains(&needle)
                || s.category.to_lowercase().contains(&needle)
        })
        .take(config::SUGGESTION_LIMIT)
        .collect()
}

// ─── Recommendations ─────────────────────────────────────────────────────────

/// Match every catalog doctor against the selected symptoms and keep those
/// within budget.
///
/// A doctor is a specialty match for a selected symptom when any of the
/// symptom's mapped keywords is listed among the doctor's own keywords, or
/// appears as a substring of the doctor's department or specialty text.
/// Selected names must exist in the catalog to contribute any signal.
///
/// The cost estimate is the initial consultation fee plus every test whose
/// name or description contains a selected symptom's category. Doctors whose
/// estimate exceeds `max_cost` drop out entirely; tests are never shed to
/// fit the budget. The rest are kept when they had a specialty match or
/// bring more than two credentials, ordered by experience score descending
/// with catalog order breaking ties.
pub fn recommend<'a>(
    catalog: &'a Catalog,
    selected_symptoms: &[String],
    max_cost: u32,
) -> Vec<Recommendation<'a>> {
    debug!(selected = selected_symptoms.len(), max_cost, "matching doctors");

    let mut recommendations: Vec<Recommendation<'a>> = Vec::new();

    for doctor in catalog.doctors() {
        let doctor_specialties = specialty::specialties_for_doctor(&doctor.name);

        let mut reasoning = String::new();
        let mut has_specialty_match = false;

        for name in selected_symptoms {
            if catalog.find_symptom(name).is_none() {
                continue;
            }
            let specialties = specialty::specialties_for_symptom(name);

            let specialty_match = specialties.iter().any(|s| {
                doctor_specialties.contains(s)
                    || doctor.department.contains(s)
                    || doctor.specialty.contains(s)
            });

            if specialty_match {
                has_specialty_match = true;
                reasoning.push_str(&format!(
                    "{name} 증상에 대한 {} 전문의입니다. ",
                    doctor.department
                ));
            }
        }

        let mut recommended_tests = Vec::new();
        let mut estimated_total_cost = doctor.consultation_fee.initial;
        for test in &doctor.tests {
            let relevant = selected_symptoms.iter().any(|name| {
                catalog.find_symptom(name).is_some_and(|s| {
                    test.name.contains(&s.category) || test.description.contains(&s.category)
                })
            });
            if relevant {
                recommended_tests.push(test.name.clone());
                estimated_total_cost += test.cost;
            }
        }

        if estimated_total_cost > max_cost {
            continue;
        }

        if has_specialty_match || doctor.credentials.len() > 2 {
            if reasoning.is_empty() {
                reasoning = format!(
                    "{} 원장은 {} 전문의로 {} 증상에 대한 풍부한 경험을 가지고 있습니다.",
                    doctor.name,
                    doctor.department,
                    selected_symptoms.join(", ")
                );
            }
            recommendations.push(Recommendation {
                doctor,
                reasoning,
                estimated_total_cost,
                recommended_tests,
            });
        }
    }

    // Stable sort keeps catalog order for equal scores.
    recommendations.sort_by(|a, b| experience_score(b.doctor).cmp(&experience_score(a.doctor)));

    debug!(count = recommendations.len(), "matching finished");
    recommendations
}

/// Combined count of credentials, awards, and publications.
pub fn experience_score(doctor: &Doctor) -> usize {
    doctor.credentials.len() + doctor.awards.len() + doctor.publications.len()
}

// ─── Formatting ──────────────────────────────────────────────────────────────

/// Format a KRW amount with thousands separators and the 원 suffix.
pub fn format_cost(cost: u32) -> String {
    let digits = cost.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push('원');
    out
}
