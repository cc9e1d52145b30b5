//! Scanner configuration.

/// What the scanner does once every character has been consumed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EndOfInput {
    /// Stop scanning. Nothing is matched against end of input.
    #[default]
    Stop,
    /// Present [`crate::core::Symbol::End`] to the current state once, so
    /// the model can emit a pending token or reject truncated input.
    Sentinel,
}

/// Options for a [`crate::scan::Scanner`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanConfig {
    pub(crate) end_of_input: EndOfInput,
    pub(crate) detect_feed_cycles: bool,
}

impl ScanConfig {
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::new()
    }

    pub fn end_of_input(&self) -> EndOfInput {
        self.end_of_input
    }

    pub fn detect_feed_cycles(&self) -> bool {
        self.detect_feed_cycles
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            end_of_input: EndOfInput::Stop,
            detect_feed_cycles: true,
        }
    }
}

/// Builder for scanner configuration
pub struct ScanConfigBuilder {
    end_of_input: EndOfInput,
    detect_feed_cycles: bool,
}

impl ScanConfigBuilder {
    pub fn new() -> Self {
        let defaults = ScanConfig::default();
        Self {
            end_of_input: defaults.end_of_input,
            detect_feed_cycles: defaults.detect_feed_cycles,
        }
    }

    /// Set the end-of-input policy
    pub fn end_of_input(mut self, policy: EndOfInput) -> Self {
        self.end_of_input = policy;
        self
    }

    /// Fail with `FeedCycle` instead of looping forever
    pub fn detect_feed_cycles(mut self, enabled: bool) -> Self {
        self.detect_feed_cycles = enabled;
        self
    }

    pub fn build(self) -> ScanConfig {
        ScanConfig {
            end_of_input: self.end_of_input,
            detect_feed_cycles: self.detect_feed_cycles,
        }
    }
}

impl Default for ScanConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
