//! Presentation rules for record text. None of these touch the record itself.

use std::borrow::Cow;

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// Shortens text that is strictly longer than `max_chars` to its first
/// `keep_chars` characters followed by [`ELLIPSIS`].
///
/// Lengths are counted in characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Truncation {
    pub max_chars: usize,
    pub keep_chars: usize,
}

impl Truncation {
    pub const fn new(max_chars: usize, keep_chars: usize) -> Self {
        Self { max_chars, keep_chars }
    }

    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if text.chars().count() <= self.max_chars {
            return Cow::Borrowed(text);
        }
        let mut shortened: String = text.chars().take(self.keep_chars).collect();
        shortened.push_str(ELLIPSIS);
        Cow::Owned(shortened)
    }
}

/// The record id as printed in the roll number column.
pub fn display_id<'a>(id: &'a str, rule: &Truncation) -> Cow<'a, str> {
    rule.apply(id)
}

/// The display name as printed in the name column: upper-cased, then
/// truncated, so case mappings that add characters still respect the limit.
pub fn display_name(name: &str, rule: &Truncation) -> String {
    let upper = name.to_uppercase();
    rule.apply(&upper).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID_RULE: Truncation = Truncation::new(12, 9);
    const NAME_RULE: Truncation = Truncation::new(28, 25);

    #[test]
    fn id_of_thirteen_chars_is_truncated() {
        let shown = display_id("A1234567890XY", &ID_RULE);
        assert_eq!(shown, "A12345678...");
        assert_eq!(shown.chars().count(), 12);
    }

    #[test]
    fn id_of_exactly_twelve_chars_is_untouched() {
        assert!(matches!(display_id("A1234567890X", &ID_RULE), Cow::Borrowed("A1234567890X")));
    }

    #[test]
    fn long_name_is_truncated_and_upper_cased() {
        let name = "Maximiliana Evangelina Fairweather";
        assert!(name.chars().count() > 28);
        let shown = display_name(name, &NAME_RULE);
        assert_eq!(shown, "MAXIMILIANA EVANGELINA FA...");
        assert_eq!(shown.chars().count(), 28);
    }

    #[test]
    fn name_at_limit_is_only_upper_cased() {
        let name = "abcdefghijklmnopqrstuvwxyzab";
        assert_eq!(name.chars().count(), 28);
        assert_eq!(display_name(name, &NAME_RULE), "ABCDEFGHIJKLMNOPQRSTUVWXYZAB");
    }

    #[test]
    fn expanding_case_mapping_stays_within_limit() {
        let shown = display_name(&"ß".repeat(30), &NAME_RULE);
        assert_eq!(shown.chars().count(), 28);
        assert!(shown.ends_with(ELLIPSIS));

        // 15 characters, 30 once upper-cased
        let shown = display_name(&"ß".repeat(15), &NAME_RULE);
        assert_eq!(shown, format!("{}...", "S".repeat(25)));
        assert_eq!(shown.chars().count(), 28);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let id = "ÅÅÅÅÅÅÅÅÅÅÅÅ";
        assert_eq!(display_id(id, &ID_RULE), id);
        let longer = "ÅÅÅÅÅÅÅÅÅÅÅÅÅ";
        assert_eq!(display_id(longer, &ID_RULE), "ÅÅÅÅÅÅÅÅÅ...");
    }
}
