use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Whether a relationship yields a single optional record or a sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Cardinality {
    /// At most one target record, located through a foreign key stored on the owner.
    One,
    /// Any number of target records whose foreign key points back at the owner.
    Many,
}

impl Cardinality {
    /// Returns the cardinality as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Cardinality::One => "one",
            Cardinality::Many => "many",
        }
    }
}

impl FromStr for Cardinality {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "one" | "has_one" | "belongs_to" => Ok(Cardinality::One),
            "many" | "has_many" => Ok(Cardinality::Many),
            _ => Err(ModelError::InvalidCardinality(s.to_string())),
        }
    }
}

impl TryFrom<&str> for Cardinality {
    type Error = ModelError;
    fn try_from(s: &str) -> ModelResult<Self> {
        s.parse()
    }
}

impl TryFrom<String> for Cardinality {
    type Error = ModelError;
    fn try_from(s: String) -> ModelResult<Self> {
        s.parse()
    }
}

impl From<Cardinality> for String {
    fn from(c: Cardinality) -> Self {
        c.as_str().to_string()
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
