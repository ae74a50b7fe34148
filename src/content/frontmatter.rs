//! Front-matter parsing

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use super::ContentError;
use crate::helpers::parse_date;

/// Custom deserializer that accepts any YAML scalar as a string
///
/// `date: 2025-01-01` arrives as a string, but `title: 1984` arrives as an
/// integer; both should end up as text.
fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct ScalarString;

    impl<'de> Visitor<'de> for ScalarString {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, number or boolean")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(ScalarString)
}

/// Front-matter data from a post
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    #[serde(deserialize_with = "scalar_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub date: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub excerpt: Option<String>,
    /// Posts are published unless they opt out
    pub published: bool,

    /// Additional custom fields, in source order
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl Default for FrontMatter {
    fn default() -> Self {
        Self {
            title: None,
            date: None,
            excerpt: None,
            published: true,
            extra: IndexMap::new(),
        }
    }
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str), ContentError> {
        let content = content.trim_start_matches('\u{feff}').trim_start();

        // The opening delimiter must be a line of its own
        let rest = match content.strip_prefix("---") {
            Some(rest) => rest,
            None => return Ok((FrontMatter::default(), content)),
        };
        let rest = match rest
            .strip_prefix("\r\n")
            .or_else(|| rest.strip_prefix('\n'))
        {
            Some(rest) => rest,
            None => return Ok((FrontMatter::default(), content)),
        };

        let mut offset = 0;
        for line in rest.split_inclusive('\n') {
            if line.trim_end_matches(['\n', '\r']) == "---" {
                let yaml_content = &rest[..offset];
                let remaining = rest[offset + line.len()..].trim_start_matches(['\n', '\r']);

                if yaml_content.trim().is_empty() {
                    return Ok((FrontMatter::default(), remaining));
                }

                let fm = serde_yaml::from_str::<FrontMatter>(yaml_content)?;
                return Ok((fm, remaining));
            }
            offset += line.len();
        }

        Err(ContentError::UnterminatedFrontMatter)
    }

    /// The required `title` field
    pub fn require_title(&self) -> Result<&str, ContentError> {
        self.title
            .as_deref()
            .ok_or(ContentError::MissingField { field: "title" })
    }

    /// The required `date` field, parsed
    pub fn require_date(&self) -> Result<NaiveDateTime, ContentError> {
        let value = self
            .date
            .as_deref()
            .ok_or(ContentError::MissingField { field: "date" })?;
        parse_date(value).ok_or_else(|| ContentError::InvalidDate {
            value: value.to_string(),
        })
    }
}
