// 📐 Shape Layer - Item Candidate Validation
// Raw form input → validated values ready to become a MenuItem

use crate::entities::Course;
use thiserror::Error;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Why a candidate was rejected. Both kinds are recoverable: the form shows
/// the message and the user corrects the input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// One or more required inputs were empty after trimming
    #[error("Please fill in all required fields ({})", .fields.join(", "))]
    MissingFields { fields: Vec<&'static str> },

    /// Price was not a finite number greater than zero
    #[error("Price must be a number greater than 0 (got {input:?})")]
    InvalidPrice { input: String },
}

impl ValidationError {
    /// Short heading for an alert/status line
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::MissingFields { .. } => "Missing fields",
            ValidationError::InvalidPrice { .. } => "Invalid price",
        }
    }
}

// ============================================================================
// ITEM CANDIDATE
// ============================================================================

/// Unvalidated add-item form input, kept as the user typed it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemCandidate {
    pub name: String,
    pub description: String,
    pub category: Course,
    /// Price text, e.g. "49.50"
    pub price: String,
    /// Image URL
    pub image: String,
    /// Comma-separated ingredient list
    pub ingredients: String,
}

/// Candidate that passed validation. Strings are trimmed.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ValidatedItem {
    pub name: String,
    pub description: String,
    pub category: Course,
    pub price: f64,
    pub image: String,
    pub ingredients: Vec<String>,
}

impl ItemCandidate {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: Course,
        price: impl Into<String>,
    ) -> Self {
        ItemCandidate {
            name: name.into(),
            description: description.into(),
            category,
            price: price.into(),
            ..Default::default()
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_ingredients(mut self, ingredients: impl Into<String>) -> Self {
        self.ingredients = ingredients.into();
        self
    }

    /// Check required fields first, then the price.
    pub(crate) fn validate(&self) -> Result<ValidatedItem, ValidationError> {
        let required = [
            ("name", &self.name),
            ("description", &self.description),
            ("price", &self.price),
            ("image", &self.image),
        ];

        let missing: Vec<&'static str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| *field)
            .collect();

        if !missing.is_empty() {
            return Err(ValidationError::MissingFields { fields: missing });
        }

        let price = parse_price(&self.price)?;

        Ok(ValidatedItem {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            category: self.category,
            price,
            image: self.image.trim().to_string(),
            ingredients: parse_ingredients(&self.ingredients),
        })
    }
}

// ============================================================================
// FIELD PARSERS
// ============================================================================

/// Parse a price as typed. Must be finite and strictly positive.
pub fn parse_price(raw: &str) -> Result<f64, ValidationError> {
    let invalid = || ValidationError::InvalidPrice {
        input: raw.to_string(),
    };

    let value: f64 = raw.trim().parse().map_err(|_| invalid())?;

    // "NaN" and "inf" parse as f64
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid());
    }

    Ok(value)
}

/// Split on commas, trim each part, drop empty parts.
pub fn parse_ingredients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> ItemCandidate {
        ItemCandidate::new("Calamari", "Grilled squid", Course::Starter, "89.90")
            .with_image("https://example.com/calamari.jpg")
            .with_ingredients("squid, lemon, garlic")
    }

    #[test]
    fn test_parse_ingredients_drops_empty_segments() {
        assert_eq!(parse_ingredients("a, b ,, c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_ingredients_empty_input() {
        assert!(parse_ingredients("").is_empty());
        assert!(parse_ingredients(" , ,").is_empty());
    }

    #[test]
    fn test_parse_price_valid() {
        assert_eq!(parse_price("50"), Ok(50.0));
        assert_eq!(parse_price(" 44.99 "), Ok(44.99));
    }

    #[test]
    fn test_parse_price_rejects_non_positive() {
        for raw in ["0", "-5", "0.0"] {
            assert_eq!(
                parse_price(raw),
                Err(ValidationError::InvalidPrice {
                    input: raw.to_string()
                })
            );
        }
    }

    #[test]
    fn test_parse_price_rejects_non_numeric() {
        for raw in ["abc", "12abc", "NaN", "inf", "R50"] {
            assert!(
                matches!(parse_price(raw), Err(ValidationError::InvalidPrice { .. })),
                "{} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_validate_complete_candidate() {
        let validated = complete().validate().unwrap();

        assert_eq!(validated.name, "Calamari");
        assert_eq!(validated.price, 89.90);
        assert_eq!(validated.ingredients, vec!["squid", "lemon", "garlic"]);
    }

    #[test]
    fn test_validate_trims_text_fields() {
        let mut candidate = complete();
        candidate.name = "  Calamari  ".to_string();

        let validated = candidate.validate().unwrap();
        assert_eq!(validated.name, "Calamari");
    }

    #[test]
    fn test_validate_reports_every_missing_field() {
        let candidate = ItemCandidate::new(" ", "", Course::Main, "10");

        let err = candidate.validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingFields {
                fields: vec!["name", "description", "image"]
            }
        );
        assert_eq!(err.title(), "Missing fields");
        assert_eq!(
            err.to_string(),
            "Please fill in all required fields (name, description, image)"
        );
    }

    #[test]
    fn test_missing_fields_checked_before_price() {
        let mut candidate = complete();
        candidate.name.clear();
        candidate.price = "-1".to_string();

        assert!(matches!(
            candidate.validate(),
            Err(ValidationError::MissingFields { .. })
        ));
    }

    #[test]
    fn test_ingredients_are_optional() {
        let mut candidate = complete();
        candidate.ingredients.clear();

        let validated = candidate.validate().unwrap();
        assert!(validated.ingredients.is_empty());
    }

    #[test]
    fn test_invalid_price_title() {
        let mut candidate = complete();
        candidate.price = "free".to_string();

        let err = candidate.validate().unwrap_err();
        assert_eq!(err.title(), "Invalid price");
    }
}
