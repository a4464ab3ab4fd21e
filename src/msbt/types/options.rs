//! Parser configuration.

/// What the dispatcher does with a section tag it has no decoder for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownSectionPolicy {
    /// Abort with [`MsbtError::UnknownSectionTag`](super::error::MsbtError::UnknownSectionTag).
    #[default]
    Reject,
    /// Skip the declared body plus padding and record a warning.
    Skip,
}

/// Options controlling how strictly a file is decoded.
///
/// The default matches the reference behaviour: unknown sections are
/// rejected and attribute count mismatches are reported as warnings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub unknown_sections: UnknownSectionPolicy,
    /// Turn an `ATR1` / `LBL1` count mismatch into a hard error.
    pub strict_attribute_count: bool,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unknown_sections(mut self, policy: UnknownSectionPolicy) -> Self {
        self.unknown_sections = policy;
        self
    }

    pub fn strict_attribute_count(mut self, strict: bool) -> Self {
        self.strict_attribute_count = strict;
        self
    }
}
