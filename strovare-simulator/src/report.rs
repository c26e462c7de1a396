//! ## strovare-simulator::report
//! **Final fleet report and determinism hashing**

use std::fmt;

use strovare_core::grid::Position;
use strovare_core::heading::Heading;
use strovare_core::rover::RoverId;

/// One rover's final state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReportEntry {
    pub id: RoverId,
    pub position: Position,
    pub heading: Heading,
}

/// Final state of every rover, one line per rover in deployment order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MissionReport {
    entries: Vec<ReportEntry>,
}

impl MissionReport {
    pub(crate) fn push(&mut self, entry: ReportEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Hex-encoded BLAKE3 hash of the rendered report.
    ///
    /// Replaying the same plan must reproduce the same hash; a mismatch
    /// against a recorded value flags a nondeterminism regression.
    pub fn state_hash(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.to_string().as_bytes());
        hex::encode(hasher.finalize().as_bytes())
    }
}

impl fmt::Display for MissionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{} {} {}", entry.position.x, entry.position.y, entry.heading)?;
        }
        Ok(())
    }
}
