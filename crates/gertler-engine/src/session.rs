//! Owner of the latest valid derived state.

use gertler_core::{GertlerError, Result};
use gertler_geometry::HullMesh;

use crate::config::EngineConfig;
use crate::inputs::Inputs;
use crate::pipeline::{compute_with, DerivedState};

/// Holds the current inputs and the last snapshot that computed cleanly.
///
/// A failed update keeps the previous snapshot and records the failure as a
/// warning instead of clearing the view.
#[derive(Debug)]
pub struct Session {
    config: EngineConfig,
    inputs: Inputs,
    snapshot: Option<DerivedState>,
    warning: Option<GertlerError>,
}

impl Session {
    /// Start from the default inputs.
    pub fn new(config: EngineConfig) -> Self {
        let mut session = Self {
            config,
            inputs: Inputs::default(),
            snapshot: None,
            warning: None,
        };
        // A failure here is kept as the warning
        let _ = session.update(Inputs::default());
        session
    }

    /// Recompute for `inputs`. On error the last snapshot stays in place and
    /// the returned error is the stored warning.
    pub fn update(&mut self, inputs: Inputs) -> std::result::Result<&DerivedState, &GertlerError> {
        self.inputs = inputs;
        match compute_with(&inputs, &self.config) {
            Ok(state) => {
                self.warning = None;
                Ok(self.snapshot.insert(state))
            }
            Err(err) => Err(self.warning.insert(err)),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn inputs(&self) -> &Inputs {
        &self.inputs
    }

    pub fn snapshot(&self) -> Option<&DerivedState> {
        self.snapshot.as_ref()
    }

    pub fn warning(&self) -> Option<&GertlerError> {
        self.warning.as_ref()
    }

    /// Hull mesh of the current snapshot at the configured ring spacing.
    pub fn hull_mesh(&self) -> Option<Result<HullMesh>> {
        self.snapshot
            .as_ref()
            .map(|state| state.hull_mesh(self.config.hull_angle_step_deg))
    }
}
