//! The two-flag barrier gating snapshot finalization.

/// Tracks the two finalize prerequisites: the language list and the full
/// catalog. The two events have no defined order relative to each other,
/// and the server may repeat either one.
#[derive(Debug, Default)]
pub struct ReadinessGate {
    languages: bool,
    catalog: bool,
    fired: bool,
}

impl ReadinessGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the language list as arrived. Returns `true` if this call
    /// made the gate fire.
    pub fn languages_ready(&mut self) -> bool {
        self.languages = true;
        self.check()
    }

    /// Marks the catalog as arrived. Returns `true` if this call made the
    /// gate fire.
    pub fn catalog_ready(&mut self) -> bool {
        self.catalog = true;
        self.check()
    }

    /// Whether the gate has fired.
    pub fn is_ready(&self) -> bool {
        self.fired
    }

    fn check(&mut self) -> bool {
        if self.languages && self.catalog && !self.fired {
            self.fired = true;
            return true;
        }
        false
    }
}
