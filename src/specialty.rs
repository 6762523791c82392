//! Fixed specialty keyword tables.
//!
//! Both tables are keyed by exact name. Symptoms and doctors outside the
//! tables get the empty slice; the matcher treats that as "no specialty
//! signal", not an error. Keyword lists are free text on purpose, so a
//! keyword can hit a department or specialty string by substring.

/// Specialties that treat a given catalog symptom.
pub fn specialties_for_symptom(name: &str) -> &'static [&'static str] {
    match name {
        "신체 비대칭" => &["재활의학과", "정형외과", "스포츠의학"],
        "만성피로" => &["가정의학과", "내분비내과", "기능의학"],
        "소화불량" => &["소화기내과", "가정의학과"],
        "두통" => &["신경과", "내과"],
        "수면장애" => &["정신건강의학과", "신경과"],
        "관절통" => &["정형외과", "재활의학과", "류마티스내과"],
        "호흡곤란" => &["호흡기내과", "심장내과"],
        "피부문제" => &["피부과", "알레르기내과"],
        _ => &[],
    }
}

/// Focus areas attributed to a given catalog doctor.
pub fn specialties_for_doctor(name: &str) -> &'static [&'static str] {
    match name {
        "나영무" => &["재활의학과", "스포츠의학", "체형교정"],
        "이동환" => &["가정의학과", "기능의학", "만성피로"],
        "김주성" => &["소화기내과", "염증성장질환"],
        "김병건" => &["신경과", "두통", "어지럼증"],
        "홍승철" => &["정신건강의학과", "수면의학"],
        _ => &[],
    }
}

/// Symptom names with a table entry, used by the catalog validator to
/// report drift against the catalog.
pub const MAPPED_SYMPTOMS: &[&str] = &[
    "신체 비대칭",
    "만성피로",
    "소화불량",
    "두통",
    "수면장애",
    "관절통",
    "호흡곤란",
    "피부문제",
];

/// Doctor names with a table entry.
pub const MAPPED_DOCTORS: &[&str] = &["나영무", "이동환", "김주성", "김병건", "홍승철"];
