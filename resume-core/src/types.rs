//! Domain types for the resume record.
//!
//! Every field is optional. JSON keys are camelCase (`lastUpdated`,
//! `highSchool`); unknown keys are ignored and `null` reads as absent.

use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Text values
// ---------------------------------------------------------------------------

/// A leaf scalar from the resume document.
///
/// Resume files written by hand routinely carry numbers where text is
/// expected (`"gpa": 3.8`), so numbers and booleans are accepted. Numbers
/// keep their JSON spelling; booleans render as `True` / `False`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Text {
    Str(String),
    Num(serde_json::Number),
    Bool(bool),
}

impl Text {
    /// `true` for a non-empty string, a non-zero number, or `true`.
    pub fn is_truthy(&self) -> bool {
        match self {
            Text::Str(s) => !s.is_empty(),
            Text::Num(n) => n.as_f64().is_some_and(|v| v != 0.0),
            Text::Bool(b) => *b,
        }
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Text::Str(s) => f.write_str(s),
            Text::Num(n) => fmt::Display::fmt(n, f),
            Text::Bool(true) => f.write_str("True"),
            Text::Bool(false) => f.write_str("False"),
        }
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Presence
// ---------------------------------------------------------------------------

/// Whether a value counts as "present" when deciding what to render.
///
/// Sections, contact fields and optional sub-blocks are all gated through
/// this one rule so that an empty string, an empty list and an absent key
/// behave the same way everywhere.
pub trait Presence {
    fn is_present(&self) -> bool;
}

impl Presence for Text {
    fn is_present(&self) -> bool {
        self.is_truthy()
    }
}

impl<T> Presence for Vec<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Presence> Presence for Option<T> {
    fn is_present(&self) -> bool {
        self.as_ref().is_some_and(Presence::is_present)
    }
}

/// A mapping is present when its source object had any key at all, known or
/// not, and whatever the value. `{}` is absent.
impl Presence for HighSchool {
    fn is_present(&self) -> bool {
        self.key_count > 0
            || self.name.is_some()
            || self.date.is_some()
            || self.note.is_some()
            || self.gpa.is_some()
    }
}

impl Presence for Coursework {
    fn is_present(&self) -> bool {
        self.key_count > 0 || self.courses.is_some() || self.awards.is_some()
    }
}

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// One degree or school attended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub institution: Option<Text>,
    #[serde(default)]
    pub degree: Option<Text>,
    #[serde(default)]
    pub date: Option<Text>,
    #[serde(default)]
    pub gpa: Option<Text>,
}

/// Secondary school, rendered after the `education` entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct HighSchool {
    pub name: Option<Text>,
    pub date: Option<Text>,
    /// Shown in the degree line.
    pub note: Option<Text>,
    pub gpa: Option<Text>,
    /// Keys in the source object, including unknown and `null`-valued ones.
    pub key_count: usize,
}

#[derive(Deserialize)]
struct HighSchoolFields {
    #[serde(default)]
    name: Option<Text>,
    #[serde(default)]
    date: Option<Text>,
    #[serde(default)]
    note: Option<Text>,
    #[serde(default)]
    gpa: Option<Text>,
}

impl TryFrom<Map<String, Value>> for HighSchool {
    type Error = serde_json::Error;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let key_count = map.len();
        let HighSchoolFields { name, date, note, gpa } =
            serde_json::from_value(Value::Object(map))?;
        Ok(Self { name, date, note, gpa, key_count })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Coursework {
    pub courses: Option<Vec<Text>>,
    pub awards: Option<Vec<Text>>,
    /// Keys in the source object, including unknown and `null`-valued ones.
    pub key_count: usize,
}

#[derive(Deserialize)]
struct CourseworkFields {
    #[serde(default)]
    courses: Option<Vec<Text>>,
    #[serde(default)]
    awards: Option<Vec<Text>>,
}

impl TryFrom<Map<String, Value>> for Coursework {
    type Error = serde_json::Error;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let key_count = map.len();
        let CourseworkFields { courses, awards } = serde_json::from_value(Value::Object(map))?;
        Ok(Self { courses, awards, key_count })
    }
}

/// A named group of skills, e.g. "Languages".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SkillCategory {
    #[serde(default)]
    pub category: Option<Text>,
    #[serde(default)]
    pub items: Option<Vec<Text>>,
}

/// One job or position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Experience {
    #[serde(default)]
    pub organization: Option<Text>,
    #[serde(default)]
    pub role: Option<Text>,
    #[serde(default)]
    pub date: Option<Text>,
    #[serde(default)]
    pub details: Option<Vec<Text>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub name: Option<Text>,
    #[serde(default)]
    pub date: Option<Text>,
    #[serde(default)]
    pub technologies: Option<Vec<Text>>,
    #[serde(default)]
    pub details: Option<Vec<Text>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Hobby {
    #[serde(default)]
    pub name: Option<Text>,
    #[serde(default)]
    pub date: Option<Text>,
    #[serde(default)]
    pub details: Option<Vec<Text>>,
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// Root of a resume document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    #[serde(default)]
    pub name: Option<Text>,
    #[serde(default)]
    pub email: Option<Text>,
    /// Handle without scheme, e.g. `linkedin.com/in/jane`.
    #[serde(default)]
    pub linkedin: Option<Text>,
    /// Handle without scheme, e.g. `github.com/jane`.
    #[serde(default)]
    pub github: Option<Text>,
    /// Full URL, used as-is.
    #[serde(default)]
    pub website: Option<Text>,
    #[serde(default)]
    pub last_updated: Option<Text>,
    #[serde(default)]
    pub education: Option<Vec<Education>>,
    #[serde(default)]
    pub high_school: Option<HighSchool>,
    #[serde(default)]
    pub coursework: Option<Coursework>,
    #[serde(default)]
    pub skills: Option<Vec<SkillCategory>>,
    #[serde(default)]
    pub experience: Option<Vec<Experience>>,
    #[serde(default)]
    pub projects: Option<Vec<Project>>,
    #[serde(default)]
    pub hobbies: Option<Vec<Hobby>>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn text(json: &str) -> Text {
        serde_json::from_str(json).expect("text")
    }

    #[rstest]
    #[case(r#""Rust""#, true)]
    #[case(r#""""#, false)]
    #[case("3.8", true)]
    #[case("0", false)]
    #[case("0.0", false)]
    #[case("true", true)]
    #[case("false", false)]
    fn text_truthiness(#[case] json: &str, #[case] expected: bool) {
        assert_eq!(text(json).is_present(), expected, "{json}");
    }

    #[test]
    fn numbers_keep_json_spelling() {
        assert_eq!(text(r#""a & b""#).to_string(), "a & b");
        assert_eq!(text("3.8").to_string(), "3.8");
        assert_eq!(text("4").to_string(), "4");
        assert_eq!(text("4.0").to_string(), "4.0");
    }

    #[rstest]
    #[case("true", "True")]
    #[case("false", "False")]
    fn booleans_render_capitalised(#[case] json: &str, #[case] expected: &str) {
        assert_eq!(text(json).to_string(), expected);
    }

    #[test]
    fn null_reads_as_absent() {
        let record: ResumeRecord =
            serde_json::from_str(r#"{"name": null, "skills": null}"#).expect("parse");
        assert!(record.name.is_none());
        assert!(record.skills.is_none());
    }

    #[test]
    fn camel_case_keys() {
        let record: ResumeRecord = serde_json::from_str(
            r#"{"lastUpdated": "May 2024", "highSchool": {"name": "Central High"}}"#,
        )
        .expect("parse");
        assert_eq!(record.last_updated, Some(Text::from("May 2024")));
        assert_eq!(
            record.high_school.and_then(|hs| hs.name),
            Some(Text::from("Central High"))
        );
    }

    #[test]
    fn option_presence() {
        let none: Option<Vec<Text>> = None;
        let empty: Option<Vec<Text>> = Some(vec![]);
        let one: Option<Vec<Text>> = Some(vec![Text::from("x")]);
        assert!(!none.is_present());
        assert!(!empty.is_present());
        assert!(one.is_present());
    }

    #[rstest]
    #[case(r#"{"note": "x"}"#, true)]
    #[case(r#"{"courses": null}"#, true)]
    #[case(r#"{"courses": [], "awards": []}"#, true)]
    #[case(r#"{"courses": ["Algorithms"]}"#, true)]
    #[case("{}", false)]
    fn coursework_presence_counts_keys(#[case] json: &str, #[case] expected: bool) {
        let block: Coursework = serde_json::from_str(json).expect("coursework");
        assert_eq!(block.is_present(), expected, "{json}");
    }

    #[rstest]
    #[case(r#"{"name": null}"#, true)]
    #[case(r#"{"name": ""}"#, true)]
    #[case(r#"{"motto": "x"}"#, true)]
    #[case("{}", false)]
    fn high_school_presence_counts_keys(#[case] json: &str, #[case] expected: bool) {
        let hs: HighSchool = serde_json::from_str(json).expect("high school");
        assert_eq!(hs.is_present(), expected, "{json}");
    }

    #[test]
    fn mapping_fields_still_parse() {
        let block: Coursework =
            serde_json::from_str(r#"{"courses": ["OS"], "awards": null, "extra": 1}"#)
                .expect("coursework");
        assert_eq!(block.courses, Some(vec![Text::from("OS")]));
        assert!(block.awards.is_none());
        assert_eq!(block.key_count, 3);
    }

    #[test]
    fn mapping_field_of_wrong_shape_is_a_data_error() {
        let err = serde_json::from_str::<ResumeRecord>(r#"{"coursework": {"courses": "OS"}}"#)
            .expect_err("shape");
        assert_eq!(err.classify(), serde_json::error::Category::Data);
    }

    #[test]
    fn hand_built_mappings_use_their_fields() {
        assert!(!Coursework::default().is_present());
        let keyed = Coursework { courses: Some(vec![]), ..Coursework::default() };
        assert!(keyed.is_present());
        let named = HighSchool { name: Some(Text::from("")), ..HighSchool::default() };
        assert!(named.is_present());
    }
}
