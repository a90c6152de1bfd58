//! Remapping rules.
//!
//! Each destination column resolves its value through one [`Rule`]. Rules
//! are pure string functions over the source record; counting and writing
//! belong to the caller.

use std::collections::HashMap;

/// Literal prefix stripped from the Elements designation before splitting.
const DESIGNATION_PREFIX: &str = "Elements ";

/// Separator style for two-field combines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinStyle {
    /// `", "` — the usual list separator.
    Comma,
    /// `":: "` — for fields whose cell values themselves contain commas,
    /// such as transcribed imprints.
    Colon,
}

impl JoinStyle {
    pub fn separator(self) -> &'static str {
        match self {
            JoinStyle::Comma => ", ",
            JoinStyle::Colon => ":: ",
        }
    }
}

/// How a destination column derives its value from the source record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Copy one source column. Absent or empty sources yield `""`.
    Copy { source: &'static str },

    /// Join the trimmed non-empty values of two source columns, in order.
    /// Both empty yields `""`.
    Combine {
        first: &'static str,
        second: &'static str,
        style: JoinStyle,
    },

    /// First `;`-segment of the designation field, `"Elements "` prefix
    /// removed, trimmed.
    DesignationBooks { source: &'static str },

    /// Everything after the first `;` of the designation field, segments
    /// trimmed and rejoined with `", "`. Empty when no `;` was present.
    DesignationExtras { source: &'static str },

    /// Seed a list with a literal tag, append the source value only when
    /// non-empty, join with `", "`.
    Tagged {
        tag: &'static str,
        source: &'static str,
    },

    /// Declared by the destination table but never populated by this
    /// variant; always `""`.
    Blank,
}

impl Rule {
    /// Resolve this rule against one source record.
    pub fn apply(&self, record: &HashMap<String, String>) -> String {
        match self {
            Rule::Copy { source } => cell(record, source).to_string(),
            Rule::Combine {
                first,
                second,
                style,
            } => combine(cell(record, first), cell(record, second), *style),
            Rule::DesignationBooks { source } => designation_split(cell(record, source)).0,
            Rule::DesignationExtras { source } => designation_split(cell(record, source)).1,
            Rule::Tagged { tag, source } => tagged(tag, cell(record, source)),
            Rule::Blank => String::new(),
        }
    }

    /// Source columns this rule reads.
    pub fn sources(&self) -> Vec<&'static str> {
        match self {
            Rule::Copy { source }
            | Rule::DesignationBooks { source }
            | Rule::DesignationExtras { source }
            | Rule::Tagged { source, .. } => vec![source],
            Rule::Combine { first, second, .. } => vec![first, second],
            Rule::Blank => Vec::new(),
        }
    }
}

fn cell<'a>(record: &'a HashMap<String, String>, column: &str) -> &'a str {
    record.get(column).map(String::as_str).unwrap_or("")
}

fn combine(first: &str, second: &str, style: JoinStyle) -> String {
    let parts: Vec<&str> = [first, second]
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    parts.join(style.separator())
}

/// Split a designation like `"Elements I, II; with commentary"` into the
/// books segment (`"I, II"`) and the remainder (`"with commentary"`).
fn designation_split(value: &str) -> (String, String) {
    let stripped = value.strip_prefix(DESIGNATION_PREFIX).unwrap_or(value);
    match stripped.split_once(';') {
        None => (stripped.trim().to_string(), String::new()),
        Some((books, rest)) => {
            let extras = rest
                .split(';')
                .map(str::trim)
                .collect::<Vec<_>>()
                .join(", ");
            (books.trim().to_string(), extras.trim().to_string())
        }
    }
}

fn tagged(tag: &str, value: &str) -> String {
    let mut parts = vec![tag];
    if !value.is_empty() {
        parts.push(value);
    }
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(cells: &[(&str, &str)]) -> HashMap<String, String> {
        cells
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_copy_missing_column_is_empty() {
        let rule = Rule::Copy { source: "city" };
        assert_eq!(rule.apply(&record(&[("year", "1570")])), "");
    }

    #[test]
    fn test_combine_comma() {
        let rule = Rule::Combine {
            first: "author",
            second: "editor_name",
            style: JoinStyle::Comma,
        };
        assert_eq!(
            rule.apply(&record(&[("author", "A"), ("editor_name", "B")])),
            "A, B"
        );
        assert_eq!(
            rule.apply(&record(&[("author", "A"), ("editor_name", "")])),
            "A"
        );
        assert_eq!(
            rule.apply(&record(&[("author", ""), ("editor_name", " B ")])),
            "B"
        );
        assert_eq!(
            rule.apply(&record(&[("author", ""), ("editor_name", "")])),
            ""
        );
    }

    #[test]
    fn test_combine_colon() {
        let rule = Rule::Combine {
            first: "imprint_transcription",
            second: "imprint_continued",
            style: JoinStyle::Colon,
        };
        assert_eq!(
            rule.apply(&record(&[
                ("imprint_transcription", "X"),
                ("imprint_continued", "Y"),
            ])),
            "X:: Y"
        );
    }

    #[test]
    fn test_designation_split_with_semicolon() {
        let rec = record(&[("Elements_designation", "Elements I, II; with commentary by X")]);
        let books = Rule::DesignationBooks {
            source: "Elements_designation",
        };
        let extras = Rule::DesignationExtras {
            source: "Elements_designation",
        };
        assert_eq!(books.apply(&rec), "I, II");
        assert_eq!(extras.apply(&rec), "with commentary by X");
    }

    #[test]
    fn test_designation_split_without_semicolon() {
        let rec = record(&[("Elements_designation", "Elements III")]);
        let books = Rule::DesignationBooks {
            source: "Elements_designation",
        };
        let extras = Rule::DesignationExtras {
            source: "Elements_designation",
        };
        assert_eq!(books.apply(&rec), "III");
        assert_eq!(extras.apply(&rec), "");
    }

    #[test]
    fn test_designation_split_several_segments() {
        let rec = record(&[("Elements_designation", "Elements I-VI; enlarged; corrected")]);
        let extras = Rule::DesignationExtras {
            source: "Elements_designation",
        };
        assert_eq!(extras.apply(&rec), "enlarged, corrected");
    }

    #[test]
    fn test_designation_without_prefix_passes_through() {
        let rec = record(&[("Elements_designation", "I, II")]);
        let books = Rule::DesignationBooks {
            source: "Elements_designation",
        };
        assert_eq!(books.apply(&rec), "I, II");
    }

    #[test]
    fn test_tagged_empty_source_is_just_the_tag() {
        let rule = Rule::Tagged {
            tag: "origin_eip_csv",
            source: "title_source",
        };
        assert_eq!(rule.apply(&record(&[("title_source", "")])), "origin_eip_csv");
        assert_eq!(rule.apply(&record(&[])), "origin_eip_csv");
    }

    #[test]
    fn test_tagged_non_empty_source_is_appended() {
        let rule = Rule::Tagged {
            tag: "origin_eip_csv",
            source: "title_source",
        };
        assert_eq!(
            rule.apply(&record(&[("title_source", "S2")])),
            "origin_eip_csv, S2"
        );
    }

    #[test]
    fn test_blank_is_empty() {
        assert_eq!(Rule::Blank.apply(&record(&[("key", "a1")])), "");
    }

    #[test]
    fn test_sources() {
        let rule = Rule::Combine {
            first: "a",
            second: "b",
            style: JoinStyle::Comma,
        };
        assert_eq!(rule.sources(), vec!["a", "b"]);
        assert!(Rule::Blank.sources().is_empty());
    }
}
