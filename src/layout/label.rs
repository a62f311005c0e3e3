//! Bar label truncation.
//!
//! No text is measured: a bar's duration in days stands in for its rendered
//! width, and longer bars are allowed longer labels.

const ELLIPSIS: &str = "...";

/// Duration bracket that decides how aggressively a label is shortened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelTier {
    /// Up to 3 days: initials, or 3 characters.
    Tiny,
    /// 4 to 7 days: 8 characters.
    Short,
    /// 8 to 14 days: 15 characters.
    Medium,
    /// More than 14 days: 25 characters.
    Long,
}

impl LabelTier {
    pub fn for_duration(duration_days: i64) -> Self {
        match duration_days {
            d if d <= 3 => LabelTier::Tiny,
            d if d <= 7 => LabelTier::Short,
            d if d <= 14 => LabelTier::Medium,
            _ => LabelTier::Long,
        }
    }

    /// Characters kept before the ellipsis.
    pub fn max_chars(self) -> usize {
        match self {
            LabelTier::Tiny => 3,
            LabelTier::Short => 8,
            LabelTier::Medium => 15,
            LabelTier::Long => 25,
        }
    }
}

/// Shorten a task name to something that plausibly fits its bar.
pub fn truncate_bar_label(name: &str, duration_days: i64) -> String {
    let tier = LabelTier::for_duration(duration_days);
    if tier == LabelTier::Tiny {
        let words: Vec<&str> = name.split_whitespace().collect();
        if words.len() > 1 {
            return initials(&words);
        }
    }
    truncate_chars(name, tier.max_chars())
}

fn initials(words: &[&str]) -> String {
    words
        .iter()
        .filter_map(|w| w.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((cut, _)) => format!("{}{}", &s[..cut], ELLIPSIS),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries_are_inclusive() {
        assert_eq!(LabelTier::for_duration(0), LabelTier::Tiny);
        assert_eq!(LabelTier::for_duration(3), LabelTier::Tiny);
        assert_eq!(LabelTier::for_duration(4), LabelTier::Short);
        assert_eq!(LabelTier::for_duration(7), LabelTier::Short);
        assert_eq!(LabelTier::for_duration(8), LabelTier::Medium);
        assert_eq!(LabelTier::for_duration(14), LabelTier::Medium);
        assert_eq!(LabelTier::for_duration(15), LabelTier::Long);
        assert_eq!(LabelTier::for_duration(-5), LabelTier::Tiny);
    }

    #[test]
    fn tiny_bars_use_initials_for_multi_word_names() {
        assert_eq!(truncate_bar_label("Design Review", 2), "DR");
        assert_eq!(truncate_bar_label("user acceptance   testing", 3), "UAT");
        assert_eq!(truncate_bar_label("a b", 1), "AB");
    }

    #[test]
    fn tiny_bars_cut_single_words_to_three_chars() {
        assert_eq!(truncate_bar_label("Backend", 3), "Bac...");
        assert_eq!(truncate_bar_label("API", 3), "API");
        assert_eq!(truncate_bar_label("Go", 0), "Go");
    }

    #[test]
    fn longer_bars_keep_more_characters() {
        let name = "Requirements Gathering And Sign-off";
        assert_eq!(truncate_bar_label(name, 4), "Requirem...");
        assert_eq!(truncate_bar_label(name, 7), "Requirem...");
        assert_eq!(truncate_bar_label(name, 8), "Requirements Ga...");
        assert_eq!(truncate_bar_label(name, 14), "Requirements Ga...");
        assert_eq!(truncate_bar_label(name, 15), "Requirements Gathering An...");
    }

    #[test]
    fn names_at_the_limit_are_unchanged() {
        assert_eq!(truncate_bar_label("Deploy12", 5), "Deploy12");
        assert_eq!(truncate_bar_label("Backend", 19), "Backend");
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(truncate_bar_label("Überprüfung", 2), "Übe...");
        assert_eq!(truncate_bar_label("Ålesund Öresund", 2), "ÅÖ");
    }

    #[test]
    fn truncation_is_idempotent_within_a_tier() {
        for (name, days) in [
            ("Backend", 2),
            ("Design Review", 2),
            ("Requirements Gathering", 5),
            ("Requirements Gathering", 10),
            ("Requirements Gathering And Sign-off", 30),
        ] {
            let once = truncate_bar_label(name, days);
            assert_eq!(truncate_bar_label(&once, days), once, "{name} / {days}");
        }
    }
}
