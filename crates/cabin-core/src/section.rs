//! Cabin section tag shared by seats, agents, and reporting.

/// Which half of the cabin a seat belongs to.  The middle bathroom sits on
/// the boundary between the two.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Section {
    Front,
    Rear,
}

impl Section {
    /// Human-readable label, useful for log fields and report columns.
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Front => "front",
            Section::Rear  => "rear",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
