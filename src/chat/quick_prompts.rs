//! Canned quick-prompts, submitted as if typed into the composer

pub const QUICK_PROMPTS: [&str; 3] = [
    "幫我找本週末台北 3 場適合大學生的社團活動（附地點/時間/費用）。",
    "寫 3 則不同語氣（活潑/專業/走心）的招募文案，每則 80~120 字。",
    "把以下貼文優化、加入 hashtag 與更明確 CTA：\n【在此貼上原文】",
];

/// Quick-prompt bound to `Alt+{digit}`, 1-based
pub fn quick_prompt_for_digit(digit: char) -> Option<&'static str> {
    let index = digit.to_digit(10)?.checked_sub(1)? as usize;
    QUICK_PROMPTS.get(index).copied()
}

/// First line of a quick-prompt, for the hint bar
pub fn short_label(prompt: &str) -> &str {
    prompt.lines().next().unwrap_or(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_map_to_prompts() {
        assert_eq!(quick_prompt_for_digit('1'), Some(QUICK_PROMPTS[0]));
        assert_eq!(quick_prompt_for_digit('2'), Some(QUICK_PROMPTS[1]));
        assert_eq!(quick_prompt_for_digit('3'), Some(QUICK_PROMPTS[2]));
    }

    #[test]
    fn test_out_of_range_digits() {
        assert_eq!(quick_prompt_for_digit('0'), None);
        assert_eq!(quick_prompt_for_digit('4'), None);
        assert_eq!(quick_prompt_for_digit('x'), None);
    }

    #[test]
    fn test_short_label_stops_at_newline() {
        assert_eq!(short_label(QUICK_PROMPTS[2]), "把以下貼文優化、加入 hashtag 與更明確 CTA：");
        assert_eq!(short_label(QUICK_PROMPTS[0]), QUICK_PROMPTS[0]);
    }
}
