//! Scraped metadata for a single media item.
//!
//! A `MediaRecord` is produced by the scraping layer and consumed read-only
//! by the rule evaluator and folder resolver. The set of fields a location
//! rule can reference is closed and enumerated by [`Field`].

use serde::{Deserialize, Serialize};

/// Metadata describing one media item.
///
/// All fields are plain strings as delivered by the scraper; missing values
/// are empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaRecord {
    /// Catalog identifier (e.g. "ABC-123").
    pub number: String,
    /// Item title.
    pub title: String,
    /// Primary performer string. Multi-performer items arrive as one long
    /// joined string.
    pub actor: String,
    /// Producing studio.
    pub studio: String,
    /// Director.
    pub director: String,
    /// Release date.
    pub release: String,
    /// Release year.
    pub year: String,
    /// Series the item belongs to.
    pub series: String,
    /// Publisher label.
    pub label: String,
}

/// The fields a location rule may reference by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Number,
    Title,
    Actor,
    Studio,
    Director,
    Release,
    Year,
    Series,
    Label,
}

impl Field {
    /// Maps a bare rule token to a field, if it names one.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "number" => Some(Self::Number),
            "title" => Some(Self::Title),
            "actor" => Some(Self::Actor),
            "studio" => Some(Self::Studio),
            "director" => Some(Self::Director),
            "release" => Some(Self::Release),
            "year" => Some(Self::Year),
            "series" => Some(Self::Series),
            "label" => Some(Self::Label),
            _ => None,
        }
    }

    /// The token name this field answers to in a rule.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Title => "title",
            Self::Actor => "actor",
            Self::Studio => "studio",
            Self::Director => "director",
            Self::Release => "release",
            Self::Year => "year",
            Self::Series => "series",
            Self::Label => "label",
        }
    }
}

impl MediaRecord {
    /// Returns the value of the given field.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Number => &self.number,
            Field::Title => &self.title,
            Field::Actor => &self.actor,
            Field::Studio => &self.studio,
            Field::Director => &self.director,
            Field::Release => &self.release,
            Field::Year => &self.year,
            Field::Series => &self.series,
            Field::Label => &self.label,
        }
    }
}
