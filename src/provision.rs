//! End-to-end provisioning.
//!
//! [`Provisioner`] wires the pipeline together: discover runtimes, resolve
//! each to a release, then fetch, verify and unpack the release archive,
//! materialize an environment where needed, and finally write the
//! launcher. Every runtime is resolved before anything is downloaded or
//! written, so an unsupported runtime aborts the run with no side effects.

use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::archive::{unpack_archive, verify_digest, ArchiveFetcher};
use crate::config::Settings;
use crate::environment::{EnvironmentBuilder, Materializer};
use crate::error::{Result, ShimsError};
use crate::releases::{Installation, IsolationRelease, ReleaseCatalog};
use crate::runtime::{discover, RuntimeVersion, ShimSource, VersionProbe};
use crate::scripts::{GeneratedScript, ScriptGenerator};
use crate::ui::UserInterface;

/// A runtime paired with the release it will use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedScript {
    pub label: String,
    pub runtime: PathBuf,
    pub version: RuntimeVersion,
    pub release: String,
    pub installation: Installation,
    pub script: PathBuf,
}

/// Discover runtimes and resolve their releases without side effects.
///
/// Fails on the first runtime with no compatible release.
pub fn plan(
    catalog: &ReleaseCatalog,
    shims: &dyn ShimSource,
    probe: &dyn VersionProbe,
    bin_dir: &Path,
) -> Result<Vec<PlannedScript>> {
    let generator = ScriptGenerator::new(bin_dir);
    let runtimes = discover(shims, probe)?;

    runtimes
        .into_iter()
        .map(|runtime| {
            let release = catalog.resolve(&runtime.name, runtime.version)?;
            Ok(PlannedScript {
                script: generator.script_path(&runtime.label),
                label: runtime.label,
                runtime: runtime.executable,
                version: runtime.version,
                release: release.version.clone(),
                installation: release.installation.clone(),
            })
        })
        .collect()
}

/// Runs discovery, resolution and generation against one root.
pub struct Provisioner<'a> {
    settings: &'a Settings,
    catalog: &'a ReleaseCatalog,
    fetcher: &'a ArchiveFetcher,
    shims: &'a dyn ShimSource,
    probe: &'a dyn VersionProbe,
    builder: &'a dyn EnvironmentBuilder,
}

impl<'a> Provisioner<'a> {
    pub fn new(
        settings: &'a Settings,
        catalog: &'a ReleaseCatalog,
        fetcher: &'a ArchiveFetcher,
        shims: &'a dyn ShimSource,
        probe: &'a dyn VersionProbe,
        builder: &'a dyn EnvironmentBuilder,
    ) -> Self {
        Self {
            settings,
            catalog,
            fetcher,
            shims,
            probe,
            builder,
        }
    }

    /// Provision every discovered runtime and write its launcher.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<Vec<GeneratedScript>> {
        let planned = plan(
            self.catalog,
            self.shims,
            self.probe,
            &self.settings.bin_dir,
        )?;
        if planned.is_empty() {
            ui.warning("No supported runtimes found");
        }

        self.prepare_dirs(ui)?;

        let generator = ScriptGenerator::new(&self.settings.bin_dir);
        let materializer = Materializer::new(&self.settings.venvs_dir, self.builder);
        let mut unpacked: HashMap<String, PathBuf> = HashMap::new();
        let mut written = Vec::with_capacity(planned.len());

        for entry in &planned {
            let release = self.release(&entry.release)?;
            let base = match unpacked.get(&release.version) {
                Some(base) => base.clone(),
                None => {
                    let base = self.prepare_release(release, ui)?;
                    unpacked.insert(release.version.clone(), base.clone());
                    base
                }
            };

            let script = match &release.installation {
                Installation::Script { entry: relative } => {
                    let entry_script = base.join(relative);
                    if !entry_script.exists() {
                        return Err(ShimsError::EntryPointMissing { path: entry_script });
                    }
                    ui.message(&format!(
                        "Writing {} for {:?} with virtualenv-{}.",
                        file_name(&entry.script),
                        entry.runtime,
                        release.version
                    ));
                    generator.write_wrapper(&entry.label, &entry.runtime, &entry_script)?
                }
                Installation::Environment => {
                    let mut spinner = ui.start_spinner(&format!(
                        "Installing virtualenv-{} for {}",
                        release.version,
                        entry.runtime.display()
                    ));
                    let materialized = match materializer.materialize(&entry.runtime, &base) {
                        Ok(materialized) => materialized,
                        Err(e) => {
                            spinner.finish_error(&format!(
                                "Installing virtualenv-{} failed",
                                release.version
                            ));
                            return Err(e);
                        }
                    };
                    if materialized.cached {
                        spinner.finish_skipped(&format!(
                            "Reusing environment for {}",
                            entry.runtime.display()
                        ));
                    } else {
                        spinner.finish_success(&format!(
                            "Installed virtualenv-{} for {}",
                            release.version,
                            entry.runtime.display()
                        ));
                    }

                    ui.message(&format!(
                        "Linking {} to {:?} for {:?}.",
                        file_name(&entry.script),
                        materialized.entry_point,
                        entry.runtime
                    ));
                    generator.link(&entry.label, &materialized.entry_point)?
                }
            };
            written.push(script);
        }

        Ok(written)
    }

    /// Create the launcher and environment directories if absent.
    pub fn prepare_dirs(&self, ui: &mut dyn UserInterface) -> Result<()> {
        fs::create_dir_all(&self.settings.root)?;
        for dir in self.settings.output_dirs() {
            if !dir.is_dir() {
                ui.message(&format!("Creating directory {}", dir.display()));
                fs::create_dir_all(dir)?;
            }
        }
        Ok(())
    }

    /// Fetch, verify and unpack a release archive; returns the unpacked dir.
    fn prepare_release(
        &self,
        release: &IsolationRelease,
        ui: &mut dyn UserInterface,
    ) -> Result<PathBuf> {
        let local = self.fetcher.local_path(&release.url)?;
        let archive = if local.exists() {
            tracing::debug!("Using downloaded archive {}", local.display());
            local
        } else {
            let mut spinner = ui.start_spinner(&format!("Downloading {}", file_name(&local)));
            match self.fetcher.fetch(&release.url) {
                Ok(path) => {
                    spinner.finish_success(&format!("Downloaded {}", file_name(&path)));
                    path
                }
                Err(e) => {
                    spinner.finish_error(&format!("Downloading {} failed", file_name(&local)));
                    return Err(e);
                }
            }
        };

        if !verify_digest(&archive, &release.sha256)? {
            return Err(ShimsError::IntegrityMismatch {
                release: release.version.clone(),
                path: archive,
            });
        }

        unpack_archive(&archive, &self.settings.root)
    }

    fn release(&self, version: &str) -> Result<&'a IsolationRelease> {
        self.catalog
            .release(version)
            .ok_or_else(|| ShimsError::InvalidCatalog {
                message: format!("unknown release '{}'", version),
            })
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
