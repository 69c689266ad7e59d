//! The `generate` command.

use crate::archive::ArchiveFetcher;
use crate::config::Settings;
use crate::environment::VenvBuilder;
use crate::error::Result;
use crate::provision::Provisioner;
use crate::releases::ReleaseCatalog;
use crate::runtime::{CommandShimSource, InterpreterProbe};
use crate::ui::UserInterface;

use super::dispatcher::Command;

/// Provisions every runtime and writes its launcher.
pub struct GenerateCommand {
    settings: Settings,
    catalog: ReleaseCatalog,
}

impl GenerateCommand {
    /// Create a generate command using the built-in catalog.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            catalog: ReleaseCatalog::builtin(),
        }
    }
}

impl Command for GenerateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let fetcher = ArchiveFetcher::with_timeout(&self.settings.root, self.settings.timeout)?;
        let shims = CommandShimSource::new(&self.settings.shims_command);
        let builder = VenvBuilder::new(!ui.output_mode().shows_command_output());
        let provisioner = Provisioner::new(
            &self.settings,
            &self.catalog,
            &fetcher,
            &shims,
            &InterpreterProbe,
            &builder,
        );

        let written = provisioner.run(ui)?;
        tracing::info!("Wrote {} launcher(s)", written.len());
        if !written.is_empty() {
            ui.success(&format!(
                "{} launcher(s) ready in {}",
                written.len(),
                self.settings.bin_dir.display()
            ));
        }

        Ok(())
    }
}
