//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show everything, including tool output from pip and venv.
    Verbose,
    /// Show progress and status.
    #[default]
    Normal,
    /// Show spinners, final status, warnings and errors only.
    Quiet,
}

impl OutputMode {
    /// Pick the mode for the global `--verbose`/`--quiet` flags.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this mode passes subprocess output through.
    pub fn shows_command_output(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows step-by-step progress lines such as
    /// `Creating directory` and `Writing ...`.
    pub fn shows_progress(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }
}
