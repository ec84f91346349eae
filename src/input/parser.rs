//! Parse request parameters into an `Input`

use super::data::{Input, ASK_PRICE_KEY, EXPENSE_KEY, INCOME_KEY, INTEREST_RATE_KEY};
use crate::error::{AffordabilityError, Result};
use std::collections::HashMap;

/// Build an `Input` from string-keyed parameters.
///
/// `lookup` returns the raw value for a key. Every field must be present and
/// parse as a finite `f64`; values are neither trimmed nor range-checked.
pub fn parse_query<'a, F>(lookup: F) -> Result<Input>
where
    F: Fn(&str) -> Option<&'a str>,
{
    Ok(Input {
        ask_price: parse_field(&lookup, ASK_PRICE_KEY)?,
        income: parse_field(&lookup, INCOME_KEY)?,
        expense: parse_field(&lookup, EXPENSE_KEY)?,
        interest_rate: parse_field(&lookup, INTEREST_RATE_KEY)?,
    })
}

fn parse_field<'a, F>(lookup: &F, field: &'static str) -> Result<f64>
where
    F: Fn(&str) -> Option<&'a str>,
{
    let raw = lookup(field).ok_or(AffordabilityError::Missing { field })?;
    let value: f64 = raw.parse().map_err(|source| AffordabilityError::Malformed {
        field,
        value: raw.to_string(),
        source,
    })?;

    if !value.is_finite() {
        return Err(AffordabilityError::NonFinite {
            field,
            value: raw.to_string(),
        });
    }

    Ok(value)
}

impl Input {
    /// Parse from a map of query string parameters
    pub fn from_query_map(params: &HashMap<String, String>) -> Result<Self> {
        parse_query(|key| params.get(key).map(String::as_str))
    }

    /// Parse from a JSON payload with the same keys as the query string
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn full_query() -> HashMap<String, String> {
        params(&[
            ("ask_price", "500000"),
            ("income", "10000"),
            ("expense", "2000"),
            ("interest_rate", "5.0"),
        ])
    }

    #[test]
    fn test_parse_full_query() {
        let input = Input::from_query_map(&full_query()).unwrap();
        assert_eq!(input, Input::new(500_000.0, 10_000.0, 2_000.0, 5.0));
    }

    #[test]
    fn test_missing_field() {
        let mut query = full_query();
        query.remove("expense");

        let err = Input::from_query_map(&query).unwrap_err();
        assert!(matches!(err, AffordabilityError::Missing { field: "expense" }));
    }

    #[test]
    fn test_malformed_field() {
        let mut query = full_query();
        query.insert("interest_rate".to_string(), "5%".to_string());

        let err = Input::from_query_map(&query).unwrap_err();
        match err {
            AffordabilityError::Malformed { field, value, .. } => {
                assert_eq!(field, "interest_rate");
                assert_eq!(value, "5%");
            }
            other => panic!("Expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_and_padded_values_are_malformed() {
        let mut query = full_query();
        query.insert("income".to_string(), String::new());
        assert!(Input::from_query_map(&query).is_err());

        query.insert("income".to_string(), " 10000".to_string());
        assert!(Input::from_query_map(&query).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut query = full_query();
        query.insert("ask_price".to_string(), "inf".to_string());
        assert!(matches!(
            Input::from_query_map(&query),
            Err(AffordabilityError::NonFinite { field: "ask_price", .. })
        ));

        query.insert("ask_price".to_string(), "NaN".to_string());
        assert!(Input::from_query_map(&query).is_err());
    }

    #[test]
    fn test_negative_values_are_not_rejected() {
        let mut query = full_query();
        query.insert("income".to_string(), "-100".to_string());

        let input = Input::from_query_map(&query).unwrap();
        assert_eq!(input.income, -100.0);
    }

    #[test]
    fn test_from_json() {
        let input = Input::from_json(
            r#"{"ask_price": 300000, "income": 8000.5, "expense": 5000, "interest_rate": 6}"#,
        )
        .unwrap();
        assert_eq!(input, Input::new(300_000.0, 8_000.5, 5_000.0, 6.0));
    }

    #[test]
    fn test_from_json_missing_or_mistyped() {
        let missing = Input::from_json(r#"{"ask_price": 1, "income": 2, "expense": 3}"#);
        assert!(matches!(missing, Err(AffordabilityError::Json(_))));

        let mistyped = Input::from_json(
            r#"{"ask_price": "1", "income": 2, "expense": 3, "interest_rate": 4}"#,
        );
        assert!(mistyped.is_err());
    }
}
