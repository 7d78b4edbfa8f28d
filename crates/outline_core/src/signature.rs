use std::fmt;

use crate::pairing::Unit;

/// Cheap change-detection key over a unit list.
///
/// Collapses the unit count, the last unit's raw text and the last unit's
/// preview into one string, so a reply that is still streaming changes the
/// key even when no unit was added.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature(String);

impl Signature {
    pub fn of<N>(units: &[Unit<N>]) -> Self {
        let (raw, preview) = units
            .last()
            .map(|unit| (unit.raw_text.as_str(), unit.preview.as_str()))
            .unwrap_or(("", ""));
        Self(format!("{}:{}:{}", units.len(), raw, preview))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
