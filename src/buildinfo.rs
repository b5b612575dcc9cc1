//! Build units and their declared build timestamps.
//!
//! The build-date consistency check compares when the protected software was
//! built against the license's expiration cutoff. Rather than inspecting
//! compiled artifacts at runtime, each build unit declares its timestamps
//! through the [`BuildUnit`] capability — typically fed from a build-script
//! constant or embedded manifest.

use crate::LicheckError;
use chrono::{DateTime, Utc};

/// A compiled artifact that can declare when it was built.
///
/// A unit may declare zero timestamps; it then trivially satisfies the
/// build-date check.
pub trait BuildUnit {
    /// The unit's declared build timestamps.
    fn build_timestamps(&self) -> Vec<DateTime<Utc>>;
}

/// A named build unit with explicit timestamps.
#[derive(Debug, Clone)]
pub struct BuildRecord {
    component: String,
    timestamps: Vec<DateTime<Utc>>,
}

impl BuildRecord {
    /// Create a record for a named component.
    pub fn new(component: impl Into<String>, timestamps: Vec<DateTime<Utc>>) -> Self {
        Self {
            component: component.into(),
            timestamps,
        }
    }

    /// Create a record from RFC 3339 timestamp strings, as embedded by
    /// build scripts.
    ///
    /// # Errors
    /// Returns [`LicheckError::InvalidTimestamp`] on the first string that
    /// does not parse.
    pub fn from_rfc3339(
        component: impl Into<String>,
        timestamps: &[&str],
    ) -> Result<Self, LicheckError> {
        let parsed = timestamps
            .iter()
            .map(|s| {
                DateTime::parse_from_rfc3339(s)
                    .map(|dt| dt.with_timezone(&Utc))
                    .map_err(|e| LicheckError::InvalidTimestamp(format!("{} ({})", s, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(component, parsed))
    }

    /// The component name this record describes.
    pub fn component(&self) -> &str {
        &self.component
    }
}

impl BuildUnit for BuildRecord {
    fn build_timestamps(&self) -> Vec<DateTime<Utc>> {
        self.timestamps.clone()
    }
}
