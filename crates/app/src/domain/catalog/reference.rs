//! Composite product references.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::catalog::models::{Origin, UnknownOrigin};

/// Separator between origin and id in the joined form.
pub const SEPARATOR: char = '_';

/// The origin-qualified identifier addressing a product across both catalogs.
///
/// Joined form is `origin_id` (`brazil_5`). Parsing splits on the FIRST
/// separator, so ids that themselves contain the separator survive the round
/// trip. The origin prefix makes cross-origin id collisions impossible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductRef {
    pub origin: Origin,
    pub id: String,
}

impl ProductRef {
    #[must_use]
    pub fn new(origin: Origin, id: impl Into<String>) -> Self {
        Self {
            origin,
            id: id.into(),
        }
    }
}

impl fmt::Display for ProductRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.origin, self.id)
    }
}

/// A reference string that cannot be split back into (origin, id).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseRefError {
    #[error("reference has no `{SEPARATOR}` separator")]
    MissingSeparator,

    #[error(transparent)]
    UnknownOrigin(#[from] UnknownOrigin),
}

impl FromStr for ProductRef {
    type Err = ParseRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (origin, id) = s.split_once(SEPARATOR).ok_or(ParseRefError::MissingSeparator)?;

        Ok(Self {
            origin: origin.parse()?,
            id: id.to_string(),
        })
    }
}

impl TryFrom<String> for ProductRef {
    type Error = ParseRefError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProductRef> for String {
    fn from(value: ProductRef) -> Self {
        value.to_string()
    }
}
