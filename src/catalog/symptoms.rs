use crate::models::{Severity, Symptom};

/// The curated symptom list, in presentation order.
pub(super) fn bundled_symptoms() -> Vec<Symptom> {
    vec![
        Symptom {
            id: "1".into(),
            name: "신체 비대칭".into(),
            description: "몸이 뭔가 명확하게 아프진 않지만 비대칭인 느낌이 들어서 병원을 찾아가서 진료를 받고 싶은데, 어떤 병원을 가야할지 알려줘.".into(),
            category: "근골격계".into(),
            severity: Severity::Medium,
            related_symptoms: vec!["통증".into(), "불편감".into(), "자세 불균형".into()],
        },
        Symptom {
            id: "2".into(),
            name: "만성피로".into(),
            description: "푹 쉬어도 풀리지 않는 피로, 잠을 자도 개운하지 않고, 늘 기운이 없으며, 온몸이 쑤시는 듯한 느낌".into(),
            category: "전신증상".into(),
            severity: Severity::High,
            related_symptoms: vec!["수면장애".into(), "기운없음".into(), "스트레스".into()],
        },
        Symptom {
            id: "3".into(),
            name: "소화불량".into(),
            description: "자주 속이 더부룩하고, 가스가 차며, 스트레스를 받으면 바로 설사나 변비가 생기는 과민성 대장 증후군".into(),
            category: "소화기계".into(),
            severity: Severity::Medium,
            related_symptoms: vec!["복부팽만".into(), "설사".into(), "변비".into(), "복통".into()],
        },
        Symptom {
            id: "4".into(),
            name: "두통".into(),
            description: "진통제를 먹어도 그때뿐인 두통, 갑자기 세상이 빙 도는 듯한 어지럼증".into(),
            category: "신경계".into(),
            severity: Severity::High,
            related_symptoms: vec!["어지럼증".into(), "메스꺼움".into(), "시야장애".into()],
        },
        Symptom {
            id: "5".into(),
            name: "수면장애".into(),
            description: "잠자리에 누워도 2~3시간 뒤척이고, 자다 깨다를 반복하며, 낮에는 심하게 졸린 증상".into(),
            category: "정신건강".into(),
            severity: Severity::High,
            related_symptoms: vec!["불면증".into(), "과다수면".into(), "피로".into()],
        },
        Symptom {
            id: "6".into(),
            name: "관절통".into(),
            description: "특별한 이유 없이 관절이 아프고, 움직일 때마다 불편함을 느끼는 증상".into(),
            category: "근골격계".into(),
            severity: Severity::Medium,
            related_symptoms: vec!["통증".into(), "부종".into(), "관절강직".into()],
        },
        Symptom {
            id: "7".into(),
            name: "호흡곤란".into(),
            description: "가벼운 활동에도 숨이 차고, 가슴이 답답한 느낌이 드는 증상".into(),
            category: "호흡기계".into(),
            severity: Severity::High,
            related_symptoms: vec!["기침".into(), "가래".into(), "흉통".into()],
        },
        Symptom {
            id: "8".into(),
            name: "피부문제".into(),
            description: "갑자기 생긴 발진이나 가려움증, 피부가 건조하고 거칠어지는 증상".into(),
            category: "피부계".into(),
            severity: Severity::Low,
            related_symptoms: vec!["가려움".into(), "발진".into(), "건조함".into()],
        },
        Symptom {
            id: "9".into(),
            name: "골절의심".into(),
            description: "넘어지거나 부딪힌 후 특정 부위가 심하게 아프고, 움직이기 어려우며, 부어오르는 증상".into(),
            category: "근골격계".into(),
            severity: Severity::High,
            related_symptoms: vec!["통증".into(), "부종".into(), "운동제한".into(), "변형".into()],
        },
        Symptom {
            id: "10".into(),
            name: "스트레스골절".into(),
            description: "운동 후 지속적인 뼈 통증, 특히 달리기나 점프 후 악화되는 증상".into(),
            category: "근골격계".into(),
            severity: Severity::Medium,
            related_symptoms: vec!["운동통증".into(), "압통".into(), "활동제한".into()],
        },
        Symptom {
            id: "11".into(),
            name: "골다공증성골절".into(),
            description: "경미한 외상에도 쉽게 발생하는 골절, 특히 손목, 척추, 고관절 부위".into(),
            category: "근골격계".into(),
            severity: Severity::High,
            related_symptoms: vec!["약한외상".into(), "척추통증".into(), "키감소".into()],
        },
        Symptom {
            id: "12".into(),
            name: "발목골절회복".into(),
            description: "발목 골절 치료는 받았지만 아직 예전처럼 자유롭게 걷지 못하고, 운동이나 계단 오르내리기가 어려운 상태".into(),
            category: "근골격계".into(),
            severity: Severity::Medium,
            related_symptoms: vec![
                "보행제한".into(),
                "운동제한".into(),
                "발목경직".into(),
                "균형감각저하".into(),
            ],
        },
        Symptom {
            id: "13".into(),
            name: "손목골절회복".into(),
            description: "손목 골절 치료 후 깁스를 제거했지만 손목 움직임이 제한되고, 무거운 물건을 들거나 세밀한 작업이 어려운 상태".into(),
            category: "근골격계".into(),
            severity: Severity::Medium,
            related_symptoms: vec![
                "손목경직".into(),
                "악력저하".into(),
                "세밀동작제한".into(),
                "통증재발".into(),
            ],
        },
        Symptom {
            id: "14".into(),
            name: "손가락골절회복".into(),
            description: "손가락 골절 치료 후 기본적인 움직임은 가능하지만 완전히 구부리거나 펴지지 않고, 정교한 작업이나 악기연주가 어려운 상태".into(),
            category: "근골격계".into(),
            severity: Severity::Medium,
            related_symptoms: vec![
                "관절경직".into(),
                "미세동작제한".into(),
                "감각저하".into(),
                "기능제한".into(),
            ],
        },
    ]
}
