//! Location rule templates.
//!
//! A rule is a sequence of tokens joined by the ` + ` operator. Each token
//! is a single-quoted literal, a recognized metadata field name, or an
//! arbitrary word that passes through unchanged. A token that resolves to
//! `/` splits the result into path segments; everything else concatenates.
//!
//! This is deliberately a substitution language, not an expression grammar:
//! no arithmetic, no conditionals, no escapes beyond the quote stripping.

use std::path::MAIN_SEPARATOR_STR;

use crate::metadata::{Field, MediaRecord};

const CONCAT_OPERATOR: &str = " + ";

#[derive(Debug, Clone)]
enum Token {
    /// Single-quoted literal, quotes stripped.
    Literal(String),
    /// Recognized metadata field.
    Field(Field),
    /// Unrecognized bare token, kept verbatim.
    Verbatim(String),
}

/// A parsed location rule template.
#[derive(Debug, Clone)]
pub struct LocationRule {
    tokens: Vec<Token>,
}

impl LocationRule {
    /// Parses a rule string. Parsing never fails: unknown tokens survive
    /// as verbatim text.
    pub fn parse(rule: &str) -> Self {
        let tokens = rule
            .split(CONCAT_OPERATOR)
            .map(|part| {
                let part = part.trim();
                if part.len() >= 2 && part.starts_with('\'') && part.ends_with('\'') {
                    Token::Literal(part[1..part.len() - 1].to_string())
                } else if let Some(field) = Field::parse(part) {
                    Token::Field(field)
                } else {
                    Token::Verbatim(part.to_string())
                }
            })
            .collect();

        Self { tokens }
    }

    /// Whether the rule substitutes the given field anywhere.
    pub fn references(&self, field: Field) -> bool {
        self.tokens
            .iter()
            .any(|token| matches!(token, Token::Field(f) if *f == field))
    }

    /// Evaluates the rule against a record, producing a folder string.
    ///
    /// Resolved parts equal to `/` act as segment boundaries; parts within
    /// a segment concatenate directly and segments join with the platform
    /// separator. With no boundaries at all the parts concatenate as-is.
    pub fn evaluate(&self, record: &MediaRecord) -> String {
        let parts: Vec<&str> = self
            .tokens
            .iter()
            .map(|token| match token {
                Token::Literal(text) => text.as_str(),
                Token::Field(field) => record.field(*field),
                Token::Verbatim(text) => text.as_str(),
            })
            .collect();

        let mut segments: Vec<String> = Vec::new();
        let mut current = String::new();
        for part in &parts {
            if *part == "/" {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            } else {
                current.push_str(part);
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }

        let result = if segments.is_empty() {
            parts.concat()
        } else {
            segments.join(MAIN_SEPARATOR_STR)
        };

        result.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> MediaRecord {
        MediaRecord {
            number: "ABC-123".to_string(),
            title: "Some Title".to_string(),
            actor: "Jane Doe".to_string(),
            studio: "Acme".to_string(),
            year: "2024".to_string(),
            ..Default::default()
        }
    }

    fn join(parts: &[&str]) -> String {
        parts.join(MAIN_SEPARATOR_STR)
    }

    #[test]
    fn test_fields_and_separator() {
        let rule = LocationRule::parse("actor + '/' + number");
        assert_eq!(rule.evaluate(&record()), join(&["Jane Doe", "ABC-123"]));
    }

    #[test]
    fn test_segment_concatenation() {
        let rule = LocationRule::parse("studio + '/' + number + ' ' + title");
        assert_eq!(
            rule.evaluate(&record()),
            join(&["Acme", "ABC-123 Some Title"])
        );
    }

    #[test]
    fn test_unknown_token_passes_through() {
        let rule = LocationRule::parse("genre + '/' + number");
        assert_eq!(rule.evaluate(&record()), join(&["genre", "ABC-123"]));
    }

    #[test]
    fn test_single_segment_returned_as_is() {
        let rule = LocationRule::parse("number + '-' + year");
        assert_eq!(rule.evaluate(&record()), "ABC-123-2024");
    }

    #[test]
    fn test_separator_only_rule() {
        let rule = LocationRule::parse("'/'");
        assert_eq!(rule.evaluate(&record()), "/");
    }

    #[test]
    fn test_field_value_acting_as_separator() {
        let rule = LocationRule::parse("actor + series + number");
        let mut rec = record();
        rec.series = "/".to_string();
        assert_eq!(rule.evaluate(&rec), join(&["Jane Doe", "ABC-123"]));
    }

    #[test]
    fn test_consecutive_separators_collapse() {
        let rule = LocationRule::parse("actor + '/' + '/' + number");
        assert_eq!(rule.evaluate(&record()), join(&["Jane Doe", "ABC-123"]));
    }

    #[test]
    fn test_references() {
        let rule = LocationRule::parse("actor + '/' + number");
        assert!(rule.references(Field::Actor));
        assert!(rule.references(Field::Number));
        assert!(!rule.references(Field::Title));
    }

    #[test]
    fn test_quoted_literal_keeps_inner_spaces() {
        let rule = LocationRule::parse("number + ' - ' + title");
        assert_eq!(rule.evaluate(&record()), "ABC-123 - Some Title");
    }

    #[test]
    fn test_result_is_trimmed() {
        let rule = LocationRule::parse("' ' + number + ' '");
        assert_eq!(rule.evaluate(&record()), "ABC-123");
    }

    #[test]
    fn test_empty_field_values() {
        let rule = LocationRule::parse("director + '/' + number");
        assert_eq!(rule.evaluate(&record()), "ABC-123");
    }
}
