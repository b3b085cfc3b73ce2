use serde::{Deserialize, Serialize};

/// The value every encoding strategy is measured against.
///
/// `Default` is the zero value adapters hand back when decoding fails:
/// empty strings and no tags.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// Short identifier
    pub name: String,
    /// Short description
    pub details: String,
    /// Ordered tags, possibly empty
    pub tags: Vec<String>,
}

impl Record {
    /// Create a new record
    pub fn new<N, D, I, T>(name: N, details: D, tags: I) -> Self
    where
        N: Into<String>,
        D: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            name: name.into(),
            details: details.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// The fixed sample used by the benchmark binary
    pub fn sample() -> Self {
        Self::new("arham", "jain", ["97", "male"])
    }

    /// True for the zero value
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.details.is_empty() && self.tags.is_empty()
    }
}
