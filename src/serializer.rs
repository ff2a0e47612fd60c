//! Serializer: emits the result record in the stable shape defined by spec §6.

use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::metrics::Metrics;
use crate::timeline::Segment;

#[derive(Debug, Serialize)]
pub struct RunResult {
    pub timeline: Vec<Segment>,
    pub metrics: Metrics,
}

impl RunResult {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let json = self.to_json_pretty()?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
