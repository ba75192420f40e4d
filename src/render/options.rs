//! Rendering options and configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Options for turning HTML documents into PDF.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Chrome/Chromium executable; searched for on the system when unset
    pub chrome_path: Option<PathBuf>,

    /// Run the browser inside its sandbox
    pub sandbox: bool,

    /// Limit for page navigation and for the browser sitting idle
    pub timeout: Duration,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific browser executable.
    pub fn with_chrome_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.chrome_path = Some(path.into());
        self
    }

    /// Enable or disable the browser sandbox.
    pub fn with_sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Set the navigation and idle timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            chrome_path: None,
            sandbox: true,
            timeout: Duration::from_secs(60),
        }
    }
}
