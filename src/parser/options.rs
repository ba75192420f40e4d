//! Options controlling how source documents become HTML.

/// Options for synthesizing HTML from a source document.
#[derive(Debug, Clone, Default)]
pub struct SynthesisOptions {
    /// Whether the first level-1 heading becomes a separate title page
    pub mode: OutputMode,

    /// What to do with paragraphs whose style has no HTML mapping
    pub unknown_styles: UnknownStylePolicy,
}

impl SynthesisOptions {
    /// Create new synthesis options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set output mode.
    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    /// Render everything as one fragment.
    pub fn single(mut self) -> Self {
        self.mode = OutputMode::Single;
        self
    }

    /// Set the unmapped style policy.
    pub fn with_unknown_styles(mut self, policy: UnknownStylePolicy) -> Self {
        self.unknown_styles = policy;
        self
    }

    /// Drop paragraphs with unmapped styles instead of rendering them.
    pub fn drop_unknown_styles(mut self) -> Self {
        self.unknown_styles = UnknownStylePolicy::Drop;
        self
    }
}

/// Output layout variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Title page rendered separately and placed before the body
    #[default]
    Split,
    /// One fragment rendered with the body template
    Single,
}

/// Handling of paragraph styles outside the known set.
///
/// Both policies log a warning and record the style name in the
/// synthesis report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownStylePolicy {
    /// Render as a body paragraph
    #[default]
    Paragraph,
    /// Leave the paragraph out
    Drop,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesis_options_builder() {
        let options = SynthesisOptions::new().single().drop_unknown_styles();

        assert_eq!(options.mode, OutputMode::Single);
        assert_eq!(options.unknown_styles, UnknownStylePolicy::Drop);
    }

    #[test]
    fn test_default_options() {
        let options = SynthesisOptions::default();
        assert_eq!(options.mode, OutputMode::Split);
        assert_eq!(options.unknown_styles, UnknownStylePolicy::Paragraph);
    }
}
