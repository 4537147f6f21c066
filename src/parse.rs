//! Text munging for the people listings embedded in paper exports.

use std::sync::OnceLock;

use regex_lite::Regex;
use tracing::warn;

/// Suffix the platform appends to revised paper titles.
pub const REVISION_TITLE_SUFFIX: &str = " (Revision)";

/// Marker appended to an email to flag e.g. the corresponding author.
const EMAIL_MARKER: char = '*';

/// One entry of an author/reviewer listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListedPerson {
    pub name: String,
    pub affiliation: String,
    pub email: String,
}

fn name_affiliation_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?P<name>[^(]*) \((?P<affiliation>.*)\)").expect("static pattern compiles")
    })
}

/// Splits a `"Name (Affiliation); Name (Affiliation)"` listing and the
/// parallel `"email; email*"` listing into ordered triples.
///
/// Segments are paired positionally; surplus segments on either side are
/// ignored. A name segment that does not look like `Name (Affiliation)` is
/// dropped with a warning and does not consume a position.
pub fn separate_name_affiliation_email(names: &str, emails: &str) -> Vec<ListedPerson> {
    let pattern = name_affiliation_pattern();
    names
        .trim()
        .split(';')
        .zip(emails.trim().split(';'))
        .filter_map(|(segment, email)| {
            let segment = segment.trim();
            match pattern.captures(segment) {
                Some(captures) => Some(ListedPerson {
                    name: captures["name"].trim().to_string(),
                    affiliation: captures["affiliation"].trim().to_string(),
                    email: email.trim().trim_matches(EMAIL_MARKER).to_string(),
                }),
                None => {
                    if !segment.is_empty() {
                        warn!(segment, "dropping unparseable name/affiliation segment");
                    }
                    None
                }
            }
        })
        .collect()
}

/// Joins the name parts of the people export; a blank middle initial is
/// left out.
pub fn full_name(first: &str, middle: &str, last: &str) -> String {
    let (first, middle, last) = (first.trim(), middle.trim(), last.trim());
    if middle.is_empty() {
        format!("{first} {last}")
    } else {
        format!("{first} {middle} {last}")
    }
}

/// Cuts a title at the last occurrence of the revision suffix.
pub fn strip_revision_suffix(title: &str) -> &str {
    match title.rfind(REVISION_TITLE_SUFFIX) {
        Some(idx) => &title[..idx],
        None => title,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(name: &str, affiliation: &str, email: &str) -> ListedPerson {
        ListedPerson {
            name: name.into(),
            affiliation: affiliation.into(),
            email: email.into(),
        }
    }

    #[test]
    fn splits_listing_preserving_order_and_stripping_markers() {
        let parsed = separate_name_affiliation_email(
            " Ada Lovelace (Analytical Engines Ltd); Alan Turing (University of Manchester) ",
            "ada@x.org*; alan@x.org ",
        );

        assert_eq!(
            parsed,
            vec![
                person("Ada Lovelace", "Analytical Engines Ltd", "ada@x.org"),
                person("Alan Turing", "University of Manchester", "alan@x.org"),
            ]
        );
    }

    #[test]
    fn drops_segments_without_affiliation() {
        let parsed = separate_name_affiliation_email(
            "Ada Lovelace; Alan Turing (Manchester); Grace Hopper (Navy)",
            "ada@x.org; alan@x.org; grace@x.org",
        );

        assert_eq!(
            parsed,
            vec![
                person("Alan Turing", "Manchester", "alan@x.org"),
                person("Grace Hopper", "Navy", "grace@x.org"),
            ]
        );
    }

    #[test]
    fn nested_parentheses_stay_in_affiliation() {
        let parsed = separate_name_affiliation_email("Edgar Codd (IBM (Research))", "ted@ibm.com");
        assert_eq!(parsed, vec![person("Edgar Codd", "IBM (Research)", "ted@ibm.com")]);
    }

    #[test]
    fn empty_listing_yields_nothing() {
        assert!(separate_name_affiliation_email("", "").is_empty());
    }

    #[test]
    fn surplus_emails_are_ignored() {
        let parsed = separate_name_affiliation_email("A B (Org)", "a@x.com; b@x.com");
        assert_eq!(parsed, vec![person("A B", "Org", "a@x.com")]);
    }

    #[test]
    fn full_name_skips_blank_middle_initial() {
        assert_eq!(full_name(" Ada ", "", "Lovelace"), "Ada Lovelace");
        assert_eq!(full_name("Alan", "M", "Turing"), "Alan M Turing");
    }

    #[test]
    fn revision_suffix_is_cut_at_last_occurrence() {
        assert_eq!(strip_revision_suffix("Fast Joins (Revision)"), "Fast Joins");
        assert_eq!(
            strip_revision_suffix("A (Revision) of B (Revision) "),
            "A (Revision) of B"
        );
        assert_eq!(strip_revision_suffix("Fast Joins"), "Fast Joins");
    }
}
