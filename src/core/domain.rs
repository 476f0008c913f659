use indexmap::IndexSet;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ChartError, ChartResult};

/// Ordered, duplicate-free set of category keys.
///
/// Insertion order is meaningful: it is the top-to-bottom order of the bands
/// built from this domain.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryDomain {
    keys: IndexSet<String>,
}

impl CategoryDomain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a domain from keys, failing on the first repeated key.
    pub fn from_keys<I, K>(keys: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let mut domain = Self::new();
        for key in keys {
            let key = key.into();
            if !domain.keys.insert(key.clone()) {
                return Err(ChartError::DuplicateKey { key });
            }
        }
        Ok(domain)
    }

    /// Adds `key` at the end unless it is already present. Returns `true` if added.
    pub fn insert(&mut self, key: impl Into<String>) -> bool {
        self.keys.insert(key.into())
    }

    #[must_use]
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.keys.get_index_of(key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}

impl Serialize for CategoryDomain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.keys.iter())
    }
}

impl<'de> Deserialize<'de> for CategoryDomain {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let keys = Vec::<String>::deserialize(deserializer)?;
        Self::from_keys(keys).map_err(serde::de::Error::custom)
    }
}
