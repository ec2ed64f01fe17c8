//! Supported languages and their verse tables.
//!
//! The set of languages is closed: each variant is bound at compile time to
//! the SQLite table holding its verses and to the label of the single
//! version stored for it. Table names never come from user input.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// A language with its own verse table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub enum Language {
    Ko,
    En,
    Mn,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown language code: '{0}' (expected ko, en or mn)")]
pub struct LanguageError(pub String);

impl Language {
    /// The language citations are written in and keyed by.
    pub const SOURCE: Language = Language::Ko;

    pub const ALL: [Language; 3] = [Language::Ko, Language::En, Language::Mn];

    pub fn code(self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
            Language::Mn => "mn",
        }
    }

    /// Verse table for this language.
    pub fn table(self) -> &'static str {
        match self {
            Language::Ko => "bible_ko_KRV",
            Language::En => "bible_en_ESV",
            Language::Mn => "bible_mn_MUV",
        }
    }

    /// Label of the version stored in [`table`](Language::table).
    pub fn version(self) -> &'static str {
        match self {
            Language::Ko => "개역한글",
            Language::En => "ESV",
            Language::Mn => "MUV",
        }
    }

    pub fn is_source(self) -> bool {
        self == Self::SOURCE
    }

    /// Parse a language code, falling back to the source language when the
    /// code is unknown.
    pub fn parse_or_source(code: &str) -> Language {
        match code.parse() {
            Ok(lang) => lang,
            Err(e) => {
                log::warn!("{}; using '{}'", e, Self::SOURCE.code());
                Self::SOURCE
            }
        }
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ko" => Ok(Language::Ko),
            "en" => Ok(Language::En),
            "mn" => Ok(Language::Mn),
            _ => Err(LanguageError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Language {
    type Error = LanguageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code().to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert_eq!(" mn ".parse::<Language>().unwrap(), Language::Mn);
    }

    #[test]
    fn test_unknown_code_is_error() {
        assert_eq!(
            "fr".parse::<Language>(),
            Err(LanguageError("fr".to_string()))
        );
    }

    #[test]
    fn test_unknown_code_falls_back_to_source() {
        assert_eq!(Language::parse_or_source("xx"), Language::Ko);
        assert_eq!(Language::parse_or_source("en"), Language::En);
    }

    #[test]
    fn test_tables_are_distinct() {
        let tables: std::collections::HashSet<_> =
            Language::ALL.iter().map(|l| l.table()).collect();
        assert_eq!(tables.len(), 3);
    }
}
