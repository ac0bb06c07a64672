//! Section location: find skills / experience / projects spans in the
//! linearized text stream.
//!
//! Resumes have no schema, but they do have headings. The locator scans the
//! stream line by line and matches each line against a fixed catalog of
//! heading phrases. Tracked headings open a span; a second, disjoint catalog
//! of generic headings ("Education", "Certifications", …) only *closes* the
//! preceding span — it never opens one of its own. A span always runs from
//! the end of its heading line to the start of the next heading of any kind,
//! or to the end of the stream.
//!
//! The catalogs are data, not code: matching is a case-insensitive
//! membership test after trimming and optional trailing-colon removal, so
//! adding a heading variant is a one-line change with no scanning-loop risk.

use std::collections::HashMap;
use std::ops::Range;

/// Identity of a tracked resume section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Skills,
    Experience,
    Projects,
}

/// Heading phrases that open a tracked section span.
///
/// Phrases are lowercase; matching normalises the candidate line first.
const TRACKED_HEADINGS: &[(SectionId, &[&str])] = &[
    (
        SectionId::Skills,
        &[
            "skill",
            "skills",
            "technical skill",
            "technical skills",
            "key skills",
            "skill summary",
            "skills summary",
            "skill and summary",
            "skills and summary",
            "skill & summary",
            "skills & summary",
            "core competency",
            "core competencies",
            "technologies",
            "tools & technologies",
            "tools and technologies",
            "programming language",
            "programming languages",
        ],
    ),
    (
        SectionId::Experience,
        &[
            "experience",
            "work experience",
            "professional experience",
            "employment",
            "employment history",
            "internship",
            "internships",
            "work history",
            "career history",
        ],
    ),
    (
        SectionId::Projects,
        &[
            "project",
            "projects",
            "personal projects",
            "academic projects",
            "side projects",
            "notable projects",
            "selected projects",
        ],
    ),
];

/// Generic headings that terminate the preceding span without opening one.
const TERMINATOR_HEADINGS: &[&str] = &[
    "education",
    "certification",
    "certifications",
    "award",
    "awards",
    "achievement",
    "achievements",
    "honours",
    "honors",
    "publication",
    "publications",
    "reference",
    "references",
    "languages",
    "hobbies",
    "interest",
    "interests",
    "volunteer",
    "activities",
    "summary",
    "objective",
    "profile",
    "contact",
    "accomplishment",
    "accomplishments",
    "leadership",
];

/// What a scanned line turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Heading {
    Tracked(SectionId),
    Terminator,
}

/// Match one line against both catalogs.
///
/// A heading line carries nothing but the phrase, optionally followed by a
/// single colon. Tracked phrases take precedence over terminators.
fn match_heading(line: &str) -> Option<Heading> {
    let trimmed = line.trim();
    let bare = trimmed.strip_suffix(':').unwrap_or(trimmed).trim_end();
    if bare.is_empty() {
        return None;
    }
    let lower = bare.to_lowercase();

    for (id, phrases) in TRACKED_HEADINGS {
        if phrases.contains(&lower.as_str()) {
            return Some(Heading::Tracked(*id));
        }
    }
    if TERMINATOR_HEADINGS.contains(&lower.as_str()) {
        return Some(Heading::Terminator);
    }
    None
}

/// Locate the content span of each tracked section in `text`.
///
/// Returned ranges are half-open byte offsets into `text`, starting after
/// the heading's own line. Spans of distinct sections never overlap: every
/// span ends at the next heading of *any* identity, so the spans partition
/// disjoint slices of the stream.
///
/// When the same section's heading appears twice, the later occurrence wins
/// and the earlier content is discarded.
///
/// Absence of a heading is not an error: the section is simply missing from
/// the map and the downstream decomposer receives empty input.
pub fn locate_sections(text: &str) -> HashMap<SectionId, Range<usize>> {
    // (line start, content start after the heading line, identity)
    let mut headings: Vec<(usize, usize, Option<SectionId>)> = Vec::new();

    let mut offset = 0usize;
    for line in text.split('\n') {
        let line_end = offset + line.len();
        // Content starts past the newline; a heading on the final,
        // unterminated line owns an empty span.
        let content_start = (line_end + 1).min(text.len());
        match match_heading(line) {
            Some(Heading::Tracked(id)) => headings.push((offset, content_start, Some(id))),
            Some(Heading::Terminator) => headings.push((offset, content_start, None)),
            None => {}
        }
        offset = line_end + 1;
    }

    let mut spans: HashMap<SectionId, Range<usize>> = HashMap::new();
    for (i, &(_, content_start, id)) in headings.iter().enumerate() {
        let Some(id) = id else { continue };
        let end = headings
            .get(i + 1)
            .map(|&(next_start, _, _)| next_start)
            .unwrap_or(text.len());
        spans.insert(id, content_start..end.max(content_start));
    }
    spans
}

/// Slice a located span out of the stream, trimmed; empty when absent.
pub fn section_text<'a>(
    text: &'a str,
    spans: &HashMap<SectionId, Range<usize>>,
    id: SectionId,
) -> &'a str {
    spans
        .get(&id)
        .map(|r| text[r.clone()].trim())
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_plain_and_colon_headings() {
        assert_eq!(match_heading("Skills"), Some(Heading::Tracked(SectionId::Skills)));
        assert_eq!(
            match_heading("  Technical Skills:  "),
            Some(Heading::Tracked(SectionId::Skills))
        );
        assert_eq!(
            match_heading("CORE COMPETENCIES"),
            Some(Heading::Tracked(SectionId::Skills))
        );
        assert_eq!(
            match_heading("Skills & Summary"),
            Some(Heading::Tracked(SectionId::Skills))
        );
        assert_eq!(
            match_heading("Skill and Summary:"),
            Some(Heading::Tracked(SectionId::Skills))
        );
        assert_eq!(
            match_heading("Internships"),
            Some(Heading::Tracked(SectionId::Experience))
        );
        assert_eq!(
            match_heading("Academic Projects:"),
            Some(Heading::Tracked(SectionId::Projects))
        );
        assert_eq!(match_heading("Education"), Some(Heading::Terminator));
    }

    #[test]
    fn rejects_lines_with_extra_content() {
        assert_eq!(match_heading("Skills I bring to the table"), None);
        assert_eq!(match_heading("My projects include"), None);
        assert_eq!(match_heading(""), None);
        assert_eq!(match_heading(":"), None);
    }

    #[test]
    fn tracked_heading_closes_previous_span() {
        let text = "Skills\nPython\nExperience\nAcme Corp\n";
        let spans = locate_sections(text);

        let skills = spans[&SectionId::Skills].clone();
        assert_eq!(&text[skills], "Python\n");
        let exp = spans[&SectionId::Experience].clone();
        assert_eq!(&text[exp], "Acme Corp\n");
    }

    #[test]
    fn terminator_closes_span_but_opens_none() {
        let text = "Projects\nSolver\nEducation\nBSc Physics\n";
        let spans = locate_sections(text);

        assert_eq!(&text[spans[&SectionId::Projects].clone()], "Solver\n");
        assert_eq!(spans.len(), 1);
    }

    #[test]
    fn missing_heading_yields_no_span() {
        let spans = locate_sections("Just a cover letter with no headings.\n");
        assert!(spans.is_empty());
    }

    #[test]
    fn last_heading_wins_for_duplicate_identity() {
        let text = "Projects\nFirst batch\n\nProjects\nSecond batch\n";
        let spans = locate_sections(text);
        assert_eq!(&text[spans[&SectionId::Projects].clone()], "Second batch\n");
    }

    #[test]
    fn heading_on_final_line_owns_empty_span() {
        let text = "Experience\nAcme\n\nSkills";
        let spans = locate_sections(text);
        let skills = spans[&SectionId::Skills].clone();
        assert_eq!(skills.start, skills.end);
        assert_eq!(section_text(text, &spans, SectionId::Skills), "");
    }

    #[test]
    fn spans_never_overlap_across_generated_layouts() {
        // Exercise every ordering of the three tracked headings with and
        // without interleaved terminators and duplicated headings.
        let headings = ["Skills", "Experience", "Projects"];
        let fillers = ["alpha beta", "gamma, delta", "epsilon"];
        let mut layouts: Vec<String> = Vec::new();

        for a in 0..3 {
            for b in 0..3 {
                for c in 0..3 {
                    if a == b || b == c || a == c {
                        continue;
                    }
                    for terminator in [None, Some("Education")] {
                        let mut doc = String::new();
                        for (slot, &h) in [a, b, c].iter().enumerate() {
                            doc.push_str(headings[h]);
                            doc.push('\n');
                            doc.push_str(fillers[slot]);
                            doc.push('\n');
                            if let Some(t) = terminator {
                                doc.push_str(t);
                                doc.push('\n');
                            }
                        }
                        layouts.push(doc);
                    }
                }
            }
        }
        // Duplicate-heading layout as well.
        layouts.push("Skills\nx\nSkills\ny\nExperience\nz\n".to_string());

        for doc in &layouts {
            let spans = locate_sections(doc);
            let ranges: Vec<_> = spans.values().cloned().collect();
            for i in 0..ranges.len() {
                for j in (i + 1)..ranges.len() {
                    let (a, b) = (&ranges[i], &ranges[j]);
                    assert!(
                        a.end <= b.start || b.end <= a.start,
                        "overlapping spans {a:?} and {b:?} in {doc:?}"
                    );
                }
            }
        }
    }
}
