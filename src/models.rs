//! Core data models used throughout the crate.
//!
//! These types represent the verses, citations and plan entries that flow
//! through the lookup and delivery pipeline.

/// A verse as stored in a language table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verse {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub content: String,
}

/// A verse returned from a lookup, ordered by `number` within a chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseRow {
    pub number: u32,
    pub content: String,
}

/// A parsed scripture reference.
///
/// `verse_end` is only ever set together with `verse_start`. With neither
/// bound the citation denotes the whole chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citation {
    pub book: String,
    pub chapter: u32,
    pub verse_start: Option<u32>,
    pub verse_end: Option<u32>,
}

impl Citation {
    pub fn chapter(book: impl Into<String>, chapter: u32) -> Self {
        Self {
            book: book.into(),
            chapter,
            verse_start: None,
            verse_end: None,
        }
    }

    /// The verse window selected by this citation, inclusive.
    pub fn verses(&self) -> VerseRange {
        match (self.verse_start, self.verse_end) {
            (Some(start), Some(end)) => VerseRange::Span(start, end),
            (Some(start), None) => VerseRange::Single(start),
            _ => VerseRange::Chapter,
        }
    }
}

/// Verse predicate applied on top of the (book, chapter) filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerseRange {
    Chapter,
    Single(u32),
    Span(u32, u32),
}

impl VerseRange {
    pub fn contains(&self, verse: u32) -> bool {
        match *self {
            VerseRange::Chapter => true,
            VerseRange::Single(v) => v == verse,
            VerseRange::Span(start, end) => (start..=end).contains(&verse),
        }
    }
}

/// One day of a reading plan: New Testament, Psalms, Proverbs, QT passage.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlanEntry {
    pub new_testament: String,
    pub psalms: String,
    pub proverbs: String,
    pub quiet_time: String,
}
