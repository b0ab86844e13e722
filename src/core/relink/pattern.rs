//! The chapter naming convention.
//!
//! Digits are ASCII only (`[0-9]`, not Unicode `\d`).

use regex::Regex;
use std::sync::OnceLock;

/// Literal prefix shared by every numbered name.
pub const CHAPTER_PREFIX: &str = "chapter_";

/// Reference form rewritten inside files: `./<name>`.
pub const REFERENCE_PREFIX: &str = "./";

/// Whole-name match: `chapter_<digits>_<rest>`, capturing a non-empty `<rest>`.
pub fn numbered_name() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"^{}[0-9]+_(.+)$", regex::escape(CHAPTER_PREFIX)))
            .expect("Invalid regex pattern")
    })
}

/// Unanchored prefix match used when stripping: `chapter_<digits>_`.
pub fn numbered_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"{}[0-9]+_", regex::escape(CHAPTER_PREFIX)))
            .expect("Invalid regex pattern")
    })
}

/// `./<name>` for a file or directory name.
pub fn reference_to(name: &str) -> String {
    format!("{}{}", REFERENCE_PREFIX, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_name_captures_remainder() {
        let caps = numbered_name().captures("chapter_01_intro").unwrap();
        assert_eq!(&caps[1], "intro");
    }

    #[test]
    fn numbered_name_is_greedy_on_digits_only() {
        let caps = numbered_name().captures("chapter_01_02_notes.md").unwrap();
        assert_eq!(&caps[1], "02_notes.md");
    }

    #[test]
    fn non_ascii_digits_do_not_match() {
        // Arabic-indic digit one
        assert!(!numbered_name().is_match("chapter_\u{0661}_intro"));
        assert!(!numbered_prefix().is_match("chapter_\u{0661}_"));
    }

    #[test]
    fn patterns_are_built_from_chapter_prefix() {
        let numbered = format!("{}12_setup", CHAPTER_PREFIX);
        let caps = numbered_name().captures(&numbered).unwrap();
        assert_eq!(&caps[1], "setup");
        assert_eq!(
            numbered_prefix().find(&numbered).unwrap().as_str(),
            format!("{}12_", CHAPTER_PREFIX)
        );
    }

    #[test]
    fn reference_to_prefixes_dot_slash() {
        assert_eq!(reference_to("intro"), "./intro");
    }
}
