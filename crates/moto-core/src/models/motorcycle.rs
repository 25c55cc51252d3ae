//! Motorcycle model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Natural key identifying a motorcycle across the remote catalogue and the
/// local store: make plus model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MotoKey {
    pub make: String,
    pub model: String,
}

impl MotoKey {
    pub fn new(make: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
        }
    }
}

impl fmt::Display for MotoKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.make, self.model)
    }
}

/// A motorcycle entry as served by the catalogue API.
///
/// Every specification field is optional on the wire; only make and model are
/// guaranteed. `favourite` never comes from the remote payload: it is derived
/// from presence in the local store on every reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Motorcycle {
    pub make: String,
    pub model: String,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub displacement: Option<String>,
    #[serde(default, rename = "type")]
    pub engine_type: Option<String>,
    #[serde(default)]
    pub power: Option<String>,
    #[serde(default)]
    pub torque: Option<String>,
    #[serde(default)]
    pub gearbox: Option<String>,
    #[serde(default)]
    pub front_tire: Option<String>,
    #[serde(default)]
    pub rear_tire: Option<String>,
    #[serde(default)]
    pub total_weight: Option<String>,
    /// Marked when the entry is present in the local favourites store.
    #[serde(skip)]
    pub favourite: bool,
}

impl Motorcycle {
    /// Create a bare entry with just the natural key fields set.
    #[must_use]
    pub fn new(make: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            ..Self::default()
        }
    }

    /// The natural key of this entry.
    #[must_use]
    pub fn key(&self) -> MotoKey {
        MotoKey::new(self.make.clone(), self.model.clone())
    }

    /// Case-normalized model name used for ordering.
    #[must_use]
    pub fn sort_key(&self) -> String {
        self.model.to_uppercase()
    }
}
