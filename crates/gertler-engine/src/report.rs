//! JSON export of a design for download or hand-off.

use std::path::Path;

use gertler_core::{GertlerError, Result};
use gertler_geometry::BodyDimensions;
use serde::{Deserialize, Serialize};

use crate::aggregate::Summary;
use crate::inputs::Inputs;
use crate::pipeline::DerivedState;

/// Contact details attached to an exported report. Passed through untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// Design inputs with the figures derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub inputs: Inputs,
    pub dimensions: BodyDimensions,
    pub summary: Summary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactInfo>,
}

impl Report {
    pub fn new(inputs: Inputs, state: &DerivedState) -> Self {
        Self {
            inputs,
            dimensions: state.dimensions,
            summary: state.summary,
            contact: None,
        }
    }

    pub fn with_contact(mut self, contact: ContactInfo) -> Self {
        self.contact = Some(contact);
        self
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GertlerError::Report(format!("failed to serialize report: {}", e)))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| GertlerError::Report(format!("failed to parse report: {}", e)))
    }
}

/// Write `report` as pretty JSON to `path`.
pub fn write_report(path: impl AsRef<Path>, report: &Report) -> Result<()> {
    let path = path.as_ref();
    let json = report.to_json()?;
    std::fs::write(path, json)?;
    eprintln!("Wrote design report to {}", path.display());
    Ok(())
}

/// Read a report previously written with [`write_report`].
pub fn read_report(path: impl AsRef<Path>) -> Result<Report> {
    let text = std::fs::read_to_string(path)?;
    Report::from_json(&text)
}
