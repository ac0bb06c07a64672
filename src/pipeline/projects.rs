//! Projects decomposition: a raw projects block → project entries.
//!
//! Blocks split on blank-line gaps like experience entries. The extra
//! heuristic here is the technology hint: a `Tech:` / `Technologies:` /
//! `Built with:` prefix, optionally wrapped in parentheses, or a bare
//! parenthesized comma list. Its captured list becomes `technologies`, and
//! the hint text is scrubbed from both the project name and the
//! description.

use crate::output::ProjectEntry;
use crate::pipeline::experience::BLANK_LINE_SPLIT;
use once_cell::sync::Lazy;
use regex::Regex;

/// Keyworded technology hints, optionally parenthesized:
/// `Tech: X, Y`, `Technologies: X`, `Built with: X`, `(Tech: X, Y)`.
static TECH_HINT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\(?\s*(?:tech(?:nologies)?|built\s+with)\s*:?\s+([^)\r\n]+)\)?")
        .expect("valid regex")
});

/// Bare parenthesized list. The required comma keeps single-word asides
/// like "(ongoing)" out of the technologies list.
static PAREN_LIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(([^)\n]+,[^)\n]+)\)").expect("valid regex"));

/// Decompose a projects block into individual project entries.
pub fn decompose(raw: &str) -> Vec<ProjectEntry> {
    BLANK_LINE_SPLIT
        .split(raw.trim())
        .filter_map(parse_entry)
        .collect()
}

/// Find the technology hint in a block: keyworded form first, bare
/// parenthesized list second.
fn find_tech_hint(block: &str) -> Option<(String, Vec<String>)> {
    let captures = TECH_HINT.captures(block).or_else(|| PAREN_LIST.captures(block))?;
    let full = captures.get(0)?.as_str().trim().to_string();
    let technologies = captures
        .get(1)?
        .as_str()
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();
    Some((full, technologies))
}

fn parse_entry(block: &str) -> Option<ProjectEntry> {
    let block = block.trim();
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    let first = *lines.first()?;

    let hint = find_tech_hint(block);
    let technologies = hint
        .as_ref()
        .map(|(_, techs)| techs.clone())
        .unwrap_or_default();

    // The hint often sits on the name line itself ("Tracker (Tech: …)");
    // scrub it so the name is just the project name.
    let name = match &hint {
        Some((full, _)) if first.contains(full.as_str()) => {
            let scrubbed = first.replace(full.as_str(), "");
            let scrubbed = scrubbed.trim();
            if scrubbed.is_empty() {
                first.to_string()
            } else {
                scrubbed.to_string()
            }
        }
        _ => first.to_string(),
    };

    let description = lines[1..]
        .iter()
        .filter(|l| match &hint {
            Some((full, _)) => !l.contains(full.as_str()),
            None => true,
        })
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string();

    Some(ProjectEntry {
        name,
        technologies,
        description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_parenthesized_tech_hint() {
        let entries = decompose("Sales Tracker (Tech: Python, Pandas)\nAutomated reporting tool.");
        assert_eq!(entries.len(), 1);
        let p = &entries[0];
        assert_eq!(p.name, "Sales Tracker");
        assert_eq!(p.technologies, vec!["Python", "Pandas"]);
        assert_eq!(p.description, "Automated reporting tool.");
    }

    #[test]
    fn tech_hint_on_its_own_line() {
        let entries = decompose("Chess Engine\nTechnologies: Rust, WebAssembly\nAlpha-beta search with a web frontend.");
        let p = &entries[0];
        assert_eq!(p.name, "Chess Engine");
        assert_eq!(p.technologies, vec!["Rust", "WebAssembly"]);
        assert_eq!(p.description, "Alpha-beta search with a web frontend.");
    }

    #[test]
    fn built_with_variant() {
        let entries = decompose("Portfolio Site\nBuilt with: Astro, Tailwind\nStatic site.");
        assert_eq!(entries[0].technologies, vec!["Astro", "Tailwind"]);
    }

    #[test]
    fn bare_parenthesized_list() {
        let entries = decompose("Weather Bot (Python, Flask)\nPosts daily forecasts.");
        let p = &entries[0];
        assert_eq!(p.name, "Weather Bot");
        assert_eq!(p.technologies, vec!["Python", "Flask"]);
    }

    #[test]
    fn single_word_parenthetical_is_not_a_tech_list() {
        let entries = decompose("Compiler Playground (ongoing)\nToy language experiments.");
        let p = &entries[0];
        assert_eq!(p.name, "Compiler Playground (ongoing)");
        assert!(p.technologies.is_empty());
        assert_eq!(p.description, "Toy language experiments.");
    }

    #[test]
    fn no_hint_yields_empty_technologies() {
        let entries = decompose("Dotfiles\nShell configuration shared across machines.");
        assert!(entries[0].technologies.is_empty());
        assert_eq!(entries[0].name, "Dotfiles");
    }

    #[test]
    fn multiple_projects_split_on_blank_lines() {
        let raw = "Tracker (Tech: Go, SQLite)\nTracks things.\n\nScraper\nBuilt with: Python\nScrapes things.";
        let entries = decompose(raw);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Tracker");
        assert_eq!(entries[1].name, "Scraper");
        assert_eq!(entries[1].technologies, vec!["Python"]);
        assert_eq!(entries[1].description, "Scrapes things.");
    }

    #[test]
    fn empty_input_yields_empty_list() {
        assert!(decompose("").is_empty());
    }
}
