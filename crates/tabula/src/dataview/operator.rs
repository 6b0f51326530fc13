//! Filter operators and operator sanitizing.

use super::field::Field;
use crate::error::TabulaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Filter comparison mode.
///
/// `Is` and `IsNot` compare a single value; the others compare sets and are
/// never offered alongside the single-selection pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operator {
    Is,
    IsNot,
    IsAny,
    IsNone,
    IsAll,
    IsNotAll,
}

impl Operator {
    pub const ALL: [Operator; 6] = [
        Operator::Is,
        Operator::IsNot,
        Operator::IsAny,
        Operator::IsNone,
        Operator::IsAll,
        Operator::IsNotAll,
    ];

    /// Operators offered when a field declares none.
    pub const DEFAULT: [Operator; 2] = [Operator::IsAny, Operator::IsNone];

    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Is => "is",
            Operator::IsNot => "isNot",
            Operator::IsAny => "isAny",
            Operator::IsNone => "isNone",
            Operator::IsAll => "isAll",
            Operator::IsNotAll => "isNotAll",
        }
    }

    pub fn is_single_selection(self) -> bool {
        matches!(self, Operator::Is | Operator::IsNot)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = TabulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| TabulaError::UnknownOperator(s.to_string()))
    }
}

impl From<Operator> for String {
    fn from(op: Operator) -> Self {
        op.as_str().to_string()
    }
}

/// Returns the operators a field can actually be filtered with.
///
/// Starts from the declared `filterBy.operators` (or [`Operator::DEFAULT`]
/// when none are declared), drops unknown tokens and repeats, and if either
/// single-selection operator survives keeps only `is`/`isNot`. An empty
/// result means the field is not filterable.
pub fn sanitize_operators<T>(field: &Field<T>) -> Vec<Operator> {
    let declared = field
        .filter_by
        .as_ref()
        .and_then(|filter_by| filter_by.operators.as_deref())
        .filter(|operators| !operators.is_empty());

    let mut operators: Vec<Operator> = Vec::new();
    match declared {
        Some(tokens) => {
            for token in tokens {
                match token.parse::<Operator>() {
                    Ok(op) if !operators.contains(&op) => operators.push(op),
                    Ok(_) => {}
                    Err(_) => {
                        tracing::debug!(field = %field.id, %token, "dropping unknown operator")
                    }
                }
            }
        }
        None => operators.extend(Operator::DEFAULT),
    }

    if operators.iter().any(|op| op.is_single_selection()) {
        operators.retain(|op| op.is_single_selection());
    }
    operators
}
