//! Experience decomposition: a raw experience block → job entries.
//!
//! Entry boundaries are blank-line gaps. Within an entry, three secondary
//! heuristics recover structure:
//!
//! 1. a month-name + year date range anywhere in the block becomes the
//!    entry's `duration`, and lines carrying it are dropped from the
//!    description;
//! 2. the first non-empty line is the header, split once on an
//!    `at` / `@` / `|` / `-` separator into title and company;
//! 3. everything else, joined with single spaces, is the description.

use crate::output::ExperienceEntry;
use once_cell::sync::Lazy;
use regex::Regex;

/// Two or more consecutive newlines separate entries.
pub(crate) static BLANK_LINE_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{2,}").expect("valid regex"));

/// `Mon YYYY – Mon YYYY` / `Mon YYYY to Present` style date ranges.
///
/// Month abbreviations match case-insensitively with optional full-name
/// tails ("Jan", "January"); the end side accepts a month + optional year,
/// "Present", or "Current".
static DATE_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*[\s,.\-]+\d{4}\s*(?:-|–|to)+\s*(?:(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec|Present|Current)[a-z]*)?[\s,.\-]*(?:\d{4})?",
    )
    .expect("valid regex")
});

/// Header separators: whitespace-delimited `at`, `@`, `|`, or `-`.
static HEADER_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s+(?:at|@|\||-)\s+").expect("valid regex"));

/// Decompose an experience block into individual job entries.
///
/// Empty input yields an empty list, never an error.
pub fn decompose(raw: &str) -> Vec<ExperienceEntry> {
    BLANK_LINE_SPLIT
        .split(raw.trim())
        .filter_map(parse_entry)
        .collect()
}

fn parse_entry(block: &str) -> Option<ExperienceEntry> {
    let block = block.trim();
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    let header = *lines.first()?;

    let date_match = DATE_RANGE.find(block);
    let duration = date_match
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();

    let mut parts = HEADER_SPLIT.splitn(header, 2);
    let title = parts.next().unwrap_or(header).trim().to_string();
    let company = parts
        .next()
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    let description = lines[1..]
        .iter()
        .filter(|l| date_match.is_none() || !DATE_RANGE.is_match(l))
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string();

    Some(ExperienceEntry {
        title,
        company,
        duration,
        description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_title_and_company_on_at() {
        let entries = decompose("Data Analyst at Acme Corp\nJan 2022 - Present\nBuilt dashboards.");
        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert_eq!(e.title, "Data Analyst");
        assert_eq!(e.company, "Acme Corp");
        assert_eq!(e.duration, "Jan 2022 - Present");
        assert_eq!(e.description, "Built dashboards.");
    }

    #[test]
    fn header_without_separator_becomes_title() {
        let entries = decompose("Freelance Consultant\nAdvised clients on data tooling.");
        assert_eq!(entries[0].title, "Freelance Consultant");
        assert!(entries[0].company.is_empty());
        assert_eq!(entries[0].description, "Advised clients on data tooling.");
    }

    #[test]
    fn pipe_and_at_sign_separators() {
        let entries = decompose("Backend Engineer | Initech\n\nSRE @ Globex");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].company, "Initech");
        assert_eq!(entries[1].title, "SRE");
        assert_eq!(entries[1].company, "Globex");
    }

    #[test]
    fn full_month_names_and_to_separator() {
        let entries = decompose("Intern at Hooli\nJune 2020 to September 2020\nWrote tests.");
        assert_eq!(entries[0].duration, "June 2020 to September 2020");
        assert_eq!(entries[0].description, "Wrote tests.");
    }

    #[test]
    fn open_ended_range_without_end() {
        let entries = decompose("Analyst at Initrode\nMar 2023 - Current\nReporting.");
        assert_eq!(entries[0].duration, "Mar 2023 - Current");
    }

    #[test]
    fn date_lines_are_excluded_from_description() {
        let raw = "Engineer at Acme\nFeb 2019 - Dec 2021\nShipped v2.\nAlso Feb 2019 - Dec 2021 on a second line.";
        let entries = decompose(raw);
        assert_eq!(entries[0].description, "Shipped v2.");
    }

    #[test]
    fn blank_line_gaps_separate_entries() {
        let raw = "Dev at A\nDid a.\n\n\nDev at B\nDid b.";
        let entries = decompose(raw);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].company, "A");
        assert_eq!(entries[1].company, "B");
    }

    #[test]
    fn empty_and_whitespace_blocks_are_dropped() {
        assert!(decompose("").is_empty());
        assert!(decompose("\n\n   \n\n").is_empty());
    }
}
