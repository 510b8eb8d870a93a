//! Non-fatal diagnostics.
//!
//! Fatal conditions are `ResolveError`s returned through the pipeline.
//! Warnings go through this sink: they are logged unless the run is quiet,
//! and always kept so callers can report them.

#[derive(Debug, Default)]
pub struct Diagnostics {
    quiet: bool,
    warnings: Vec<String>,
}

impl Diagnostics {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            warnings: Vec::new(),
        }
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        if !self.quiet {
            tracing::warn!("{}", message);
        }
        self.warnings.push(message);
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<String> {
        self.warnings
    }
}
