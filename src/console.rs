//! Interactive console frontend.
//!
//! A line-oriented loop over stdin driving a [`ConsultSession`]: bare text
//! searches the symptom catalog, `add`/`remove` manage the selection,
//! `cost` moves the budget ceiling, `go` runs the recommendation. Domain
//! output goes to stdout; usage chrome goes to stderr.

use std::io::{self, BufRead, Write};

use crate::catalog::Catalog;
use crate::config;
use crate::models::{Recommendation, Symptom};
use crate::recommend::format_cost;
use crate::shell::ConsultSession;

pub fn run_console(catalog: &Catalog) -> io::Result<()> {
    println!("{} v{}", config::APP_NAME, config::APP_VERSION);
    println!("증상에 맞는 최고의 전문의를 찾아드리는 의료 상담 플랫폼");
    eprintln!("type 'help' for commands, 'quit' to exit");

    let mut session = ConsultSession::new(catalog);
    let stdin = io::stdin();
    prompt()?;
    for line in stdin.lock().lines() {
        let line = line?;
        if !handle_line(&mut session, line.trim()) {
            break;
        }
        prompt()?;
    }
    Ok(())
}

fn prompt() -> io::Result<()> {
    let mut out = io::stdout();
    write!(out, "> ")?;
    out.flush()
}

/// Dispatch one input line against the session. Returns false to exit.
fn handle_line(session: &mut ConsultSession<'_>, line: &str) -> bool {
    if line.is_empty() {
        return true;
    }
    if line == "quit" || line == "exit" {
        return false;
    }
    if line == "help" {
        print_help();
        return true;
    }
    if line == "list" {
        println!("{}", render_selection(session));
        return true;
    }
    if line == "go" {
        if session.selected_symptoms().is_empty() {
            eprintln!("select at least one symptom first (search, then 'add <n>')");
        } else {
            session.submit();
            println!("{}", render_recommendations(session.recommendations()));
        }
        return true;
    }
    if let Some(arg) = line.strip_prefix("add ") {
        let arg = arg.trim();
        match resolve_symptom(session, arg) {
            Some(name) => {
                if session.add_symptom(&name) {
                    println!("{}", render_selection(session));
                } else {
                    eprintln!("'{name}' is already selected");
                }
            }
            None => eprintln!("no symptom matches '{arg}'"),
        }
        return true;
    }
    if let Some(arg) = line.strip_prefix("remove ") {
        let arg = arg.trim();
        let name = arg
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| session.selected_symptoms().get(i).cloned())
            .unwrap_or_else(|| arg.to_string());
        if session.remove_symptom(&name) {
            println!("{}", render_selection(session));
        } else {
            eprintln!("'{name}' is not selected");
        }
        return true;
    }
    if let Some(arg) = line.strip_prefix("cost ") {
        match arg.trim().replace(',', "").parse::<u32>() {
            Ok(amount) => {
                // snap to the slider grid, then clamp to its range
                let step = config::COST_CEILING_STEP;
                let snapped = amount.saturating_add(step / 2) / step * step;
                let applied = snapped.clamp(config::COST_CEILING_MIN, config::COST_CEILING_MAX);
                session.set_max_cost(applied);
                println!("최대 예상 비용: {}", format_cost(applied));
            }
            Err(_) => eprintln!("usage: cost <amount in KRW>"),
        }
        return true;
    }

    // anything else is a catalog search
    session.set_search_input(line);
    println!("{}", render_suggestions(session.suggestions()));
    true
}

/// Turn an `add` argument into a catalog symptom name. Accepts a 1-based
/// suggestion number or an exact name.
fn resolve_symptom(session: &ConsultSession<'_>, arg: &str) -> Option<String> {
    if let Ok(n) = arg.parse::<usize>() {
        return session
            .suggestions()
            .get(n.checked_sub(1)?)
            .map(|s| s.name.clone());
    }
    session
        .catalog()
        .find_symptom(arg)
        .map(|s| s.name.clone())
}

fn print_help() {
    eprintln!("commands:");
    eprintln!("  <text>           search symptoms by name, description, or category");
    eprintln!("  add <n|name>     add a symptom (suggestion number or exact name)");
    eprintln!("  remove <n|name>  remove a selected symptom");
    eprintln!("  cost <amount>    set the cost ceiling in KRW");
    eprintln!("  go               run the recommendation");
    eprintln!("  list             show the current selection");
    eprintln!("  quit             exit");
}

// ─── Rendering ───────────────────────────────────────────────────────────────

pub fn render_suggestions(suggestions: &[&Symptom]) -> String {
    if suggestions.is_empty() {
        return "검색 결과가 없습니다.".into();
    }
    let mut lines = vec!["검색 결과:".to_string()];
    for (i, symptom) in suggestions.iter().enumerate() {
        lines.push(format!("  {}. {}", i + 1, symptom.name));
        lines.push(format!("     {}", symptom.description));
    }
    lines.join("\n")
}

pub fn render_selection(session: &ConsultSession<'_>) -> String {
    let selected = if session.selected_symptoms().is_empty() {
        "없음".to_string()
    } else {
        session.selected_symptoms().join(", ")
    };
    format!(
        "선택된 증상: {selected}\n최대 예상 비용: {}",
        format_cost(session.max_cost())
    )
}

pub fn render_recommendations(recommendations: &[Recommendation<'_>]) -> String {
    if recommendations.is_empty() {
        return "조건에 맞는 전문의를 찾을 수 없습니다.\n증상이나 비용 범위를 조정해보세요."
            .into();
    }
    let mut out = format!("추천 전문의 ({}명)\n", recommendations.len());
    for (i, recommendation) in recommendations.iter().enumerate() {
        out.push('\n');
        out.push_str(&render_doctor_card(i + 1, recommendation));
        out.push('\n');
    }
    out.trim_end().to_string()
}

fn render_doctor_card(rank: usize, recommendation: &Recommendation<'_>) -> String {
    let doctor = recommendation.doctor;
    let credentials = doctor
        .credentials
        .iter()
        .take(3)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" / ");
    let mut lines = vec![
        format!(
            "{rank}. {} 원장 ({} {})",
            doctor.name, doctor.hospital, doctor.department
        ),
        format!("   평점: {} ({}건)", doctor.rating, doctor.review_count),
        format!("   전문분야: {}", doctor.specialty),
        format!("   주요 경력: {}", doctor.experience),
        format!("   학력 및 자격: {credentials}"),
        format!("   {}", recommendation.reasoning.trim_end()),
        format!(
            "   초진 진찰료: {}",
            format_cost(doctor.consultation_fee.initial)
        ),
    ];
    if !recommendation.recommended_tests.is_empty() {
        lines.push(format!(
            "   추천 검사: {}",
            recommendation.recommended_tests.join(", ")
        ));
    }
    lines.push(format!(
        "   총 예상 비용: {}",
        format_cost(recommendation.estimated_total_cost)
    ));
    lines.push(format!(
        "   위치: {} ({})",
        doctor.location.address, doctor.location.phone
    ));
    if let Some(website) = &doctor.location.website {
        lines.push(format!("   {website}"));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> ConsultSession<'static> {
        ConsultSession::new(Catalog::bundled())
    }

    #[test]
    fn search_caps_rendered_suggestions_at_five() {
        let mut s = session();
        s.set_search_input("골절");
        let text = render_suggestions(s.suggestions());
        assert!(text.contains("1. 골절의심"));
        assert!(text.contains("5."));
        assert!(!text.contains("6."));
    }

    #[test]
    fn no_matches_renders_the_empty_message() {
        let mut s = session();
        s.set_search_input("zzz");
        assert_eq!(render_suggestions(s.suggestions()), "검색 결과가 없습니다.");
    }

    #[test]
    fn fresh_selection_renders_empty_state() {
        let s = session();
        let text = render_selection(&s);
        assert!(text.contains("선택된 증상: 없음"));
        assert!(text.contains("500,000원"));
    }

    #[test]
    fn selection_lists_names_and_ceiling() {
        let mut s = session();
        s.add_symptom("두통");
        s.add_symptom("수면장애");
        s.set_max_cost(300_000);
        let text = render_selection(&s);
        assert!(text.contains("두통, 수면장애"));
        assert!(text.contains("300,000원"));
    }

    #[test]
    fn empty_results_render_the_adjust_hint() {
        let text = render_recommendations(&[]);
        assert!(text.contains("조건에 맞는 전문의를 찾을 수 없습니다."));
        assert!(text.contains("증상이나 비용 범위를 조정해보세요."));
    }

    #[test]
    fn cards_show_fees_and_totals() {
        let mut s = session();
        s.add_symptom("두통");
        s.submit();
        let text = render_recommendations(s.recommendations());
        assert!(text.contains("추천 전문의 (11명)"));
        assert!(text.contains("김병건 원장"));
        assert!(text.contains("초진 진찰료: 30,000원"));
        assert!(text.contains("위치:"));
    }

    #[test]
    fn cards_list_recommended_tests_when_present() {
        let mut s = session();
        s.add_symptom("수면장애");
        s.submit();
        let text = render_recommendations(s.recommendations());
        assert!(text.contains("추천 검사: 정신건강의학과 상담"));
        assert!(text.contains("총 예상 비용: 90,000원"));
    }

    #[test]
    fn quit_and_exit_end_the_loop() {
        let mut s = session();
        assert!(!handle_line(&mut s, "quit"));
        assert!(!handle_line(&mut s, "exit"));
        assert!(handle_line(&mut s, ""));
    }

    #[test]
    fn bare_text_runs_a_search() {
        let mut s = session();
        assert!(handle_line(&mut s, "두통"));
        assert_eq!(s.search_input(), "두통");
        assert!(!s.suggestions().is_empty());
    }

    #[test]
    fn add_accepts_a_suggestion_number() {
        let mut s = session();
        handle_line(&mut s, "두통");
        handle_line(&mut s, "add 1");
        assert_eq!(s.selected_symptoms(), ["두통"]);
    }

    #[test]
    fn add_accepts_an_exact_name() {
        let mut s = session();
        handle_line(&mut s, "add 수면장애");
        assert_eq!(s.selected_symptoms(), ["수면장애"]);
    }

    #[test]
    fn add_rejects_unknown_names() {
        let mut s = session();
        handle_line(&mut s, "add 없는증상");
        assert!(s.selected_symptoms().is_empty());
    }

    #[test]
    fn remove_accepts_a_selection_number() {
        let mut s = session();
        handle_line(&mut s, "add 두통");
        handle_line(&mut s, "add 수면장애");
        handle_line(&mut s, "remove 1");
        assert_eq!(s.selected_symptoms(), ["수면장애"]);
    }

    #[test]
    fn cost_clamps_to_the_slider_range() {
        let mut s = session();
        handle_line(&mut s, "cost 50000");
        assert_eq!(s.max_cost(), 100_000);
        handle_line(&mut s, "cost 2,000,000");
        assert_eq!(s.max_cost(), 1_000_000);
    }

    #[test]
    fn cost_snaps_to_the_slider_step() {
        let mut s = session();
        handle_line(&mut s, "cost 310000");
        assert_eq!(s.max_cost(), 300_000);
        handle_line(&mut s, "cost 330,000");
        assert_eq!(s.max_cost(), 350_000);
    }

    #[test]
    fn go_without_a_selection_is_a_no_op() {
        let mut s = session();
        handle_line(&mut s, "go");
        assert!(!s.show_results());
    }

    #[test]
    fn go_submits_the_selection() {
        let mut s = session();
        handle_line(&mut s, "add 관절통");
        handle_line(&mut s, "go");
        assert!(s.show_results());
        assert!(!s.recommendations().is_empty());
    }
}
