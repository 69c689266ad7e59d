//! The `plan` command.

use crate::cli::args::PlanArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::provision::{plan, PlannedScript};
use crate::releases::{Installation, ReleaseCatalog};
use crate::runtime::{CommandShimSource, InterpreterProbe};
use crate::ui::UserInterface;

use super::dispatcher::Command;

/// Shows which release each runtime would use.
pub struct PlanCommand {
    settings: Settings,
    args: PlanArgs,
}

impl PlanCommand {
    pub fn new(settings: Settings, args: PlanArgs) -> Self {
        Self { settings, args }
    }
}

impl Command for PlanCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let catalog = ReleaseCatalog::builtin();
        let shims = CommandShimSource::new(&self.settings.shims_command);
        let planned = plan(&catalog, &shims, &InterpreterProbe, &self.settings.bin_dir)?;

        // Printed in every output mode, including quiet.
        if self.args.json {
            let json = serde_json::to_string_pretty(&planned).map_err(anyhow::Error::from)?;
            println!("{}", json);
            return Ok(());
        }

        if planned.is_empty() {
            ui.warning("No supported runtimes found");
        }
        for row in &planned {
            println!("{}", format_row(row));
        }

        Ok(())
    }
}

fn format_row(row: &PlannedScript) -> String {
    let kind = match row.installation {
        Installation::Script { .. } => "script",
        Installation::Environment => "environment",
    };
    format!(
        "{:<8} {:<6} virtualenv-{:<9} {:<12} {} -> {}",
        row.label,
        row.version.to_string(),
        row.release,
        kind,
        row.runtime.display(),
        row.script.display()
    )
}
