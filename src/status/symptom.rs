//! Self-reported symptoms.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A symptom the user can report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symptom {
    Cough,
    Temperature,
}

impl Symptom {
    /// Every reportable symptom
    pub const ALL: [Symptom; 2] = [Symptom::Cough, Symptom::Temperature];

    /// Get the symptom name (pure)
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cough => "cough",
            Self::Temperature => "temperature",
        }
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unordered symptom set; ordered storage keeps serialization stable.
pub type Symptoms = BTreeSet<Symptom>;
