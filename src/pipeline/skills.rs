//! Skills decomposition: a raw skills block → clean skill tokens.
//!
//! Skills sections arrive comma-, bullet-, pipe-, slash-, or
//! newline-separated, often mixed within one resume. Normalising every
//! separator glyph to a comma first means a single split pass handles all
//! of them.

use once_cell::sync::Lazy;
use regex::Regex;

/// Bullet and separator glyphs that act as token boundaries.
static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[•●▪▸►\-–|/]").expect("valid regex"));

/// Runs of commas and newlines left after normalisation.
static TOKEN_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,\n]+").expect("valid regex"));

/// Tokens longer than this are sentences that leaked in, not skills.
const MAX_TOKEN_CHARS: usize = 60;

/// Decompose a skills block into individual skill tokens.
///
/// Tokens are kept in encounter order and not deduplicated. A token
/// survives when its character count is strictly between 1 and 60 and it is
/// not purely numeric (years and phone fragments are separator debris, not
/// skills).
pub fn decompose(raw: &str) -> Vec<String> {
    let normalised = SEPARATORS.replace_all(raw, ",");
    TOKEN_SPLIT
        .split(&normalised)
        .map(str::trim)
        .filter(|t| {
            let chars = t.chars().count();
            chars > 1 && chars < MAX_TOKEN_CHARS && !t.chars().all(|c| c.is_ascii_digit())
        })
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_comma_separated_list() {
        assert_eq!(
            decompose("Python, SQL, Excel"),
            vec!["Python", "SQL", "Excel"]
        );
    }

    #[test]
    fn normalises_bullets_pipes_and_newlines() {
        let raw = "• Rust\n● Go | Docker / Kubernetes";
        assert_eq!(decompose(raw), vec!["Rust", "Go", "Docker", "Kubernetes"]);
    }

    #[test]
    fn drops_overlong_phrases() {
        let phrase = "a".repeat(75);
        assert!(decompose(&phrase).is_empty());

        // Exactly 60 characters is still too long; 59 survives.
        assert!(decompose(&"b".repeat(60)).is_empty());
        assert_eq!(decompose(&"c".repeat(59)).len(), 1);
    }

    #[test]
    fn drops_single_characters_and_pure_numbers() {
        assert!(decompose("2024").is_empty());
        assert!(decompose("R").is_empty());
        // Mixed alphanumerics are fine.
        assert_eq!(decompose("C99"), vec!["C99"]);
    }

    #[test]
    fn preserves_duplicates_and_order() {
        assert_eq!(
            decompose("SQL, Python, SQL"),
            vec!["SQL", "Python", "SQL"]
        );
    }

    #[test]
    fn empty_input_yields_empty_list() {
        assert!(decompose("").is_empty());
        assert!(decompose("   \n  ").is_empty());
    }
}
