//! Per-evaluation options

/// Options controlling one user-evaluation call.
///
/// Reason collection is opt-in: with `include_reasons` off, diagnostic
/// messages are discarded instead of accumulated, so evaluations allocate
/// nothing for them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecideOptions {
    /// Collect human-readable decision reasons for this evaluation
    pub include_reasons: bool,
}

impl DecideOptions {
    /// Create options with every flag off
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable reason collection
    pub fn with_include_reasons(mut self) -> Self {
        self.include_reasons = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_off() {
        assert!(!DecideOptions::new().include_reasons);
    }

    #[test]
    fn test_builder() {
        assert!(DecideOptions::new().with_include_reasons().include_reasons);
    }
}
