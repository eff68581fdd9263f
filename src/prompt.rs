//! System-instruction generation
//!
//! Turns the campaign settings into the context text injected ahead of
//! every user turn.

use crate::settings::Settings;

const PERSONA: &str = "你是專業的校園/社團活動行銷與企劃助手，回答要實用、可執行。";

const OUTPUT_ORDER: &str =
    "輸出優先：活動清單/示範（含地點/時間/費用）→ 社群貼文範本（含 emoji/hashtag）→ 可執行的行銷建議。";

/// Build the system instruction for the current settings
///
/// Line order is fixed: persona, budget, audiences, platforms, tone,
/// hashtags, CTA, output order. Optional lines are omitted when their
/// setting is absent or blank.
pub fn build_system_prompt(settings: &Settings) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(8);

    lines.push(PERSONA.to_string());

    if let Some(budget) = settings.budget_max {
        lines.push(format!("・預算上限：每人 NT${}", budget));
    }
    if !settings.audiences.is_empty() {
        lines.push(format!("・宣傳對象：{}", settings.audiences.join("、")));
    }
    if !settings.platforms.is_empty() {
        lines.push(format!("・發文平台：{}", settings.platforms.join(" / ")));
    }
    lines.push(format!("・文案語氣：{}", settings.tone.label()));
    if !settings.hashtags.trim().is_empty() {
        lines.push(format!("・Hashtags：{}", settings.hashtags));
    }
    if !settings.cta.trim().is_empty() {
        lines.push(format!("・CTA：{}", settings.cta));
    }

    lines.push(OUTPUT_ORDER.to_string());

    lines.join("\n")
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod prompt_tests;
