/// What a run does with the manifest once it is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunMode {
    /// Write `files.json` into the target directory
    #[default]
    Write,
    /// Print the manifest to stdout, leave the directory untouched
    Stdout,
    /// Compare against the existing `files.json` without writing
    Check,
}

/// Behaviour when the filesystem cannot report a creation time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MtimeFallback {
    /// Substitute the modification time and log a warning
    #[default]
    Allow,
    /// Treat the missing creation time as a fatal error
    Deny,
}

/// Where an entry's timestamp actually came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampSource {
    Birth,
    Modified,
}
