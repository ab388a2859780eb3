use anyhow::{Context, Result};
use torist_core::{ChecklistRegistry, RegistryCache, RegistryError};
use torist_display::{Locale, Messages};
use tracing::info;

use torist_cli::report::{LabelsReport, ViewReport};

use crate::cli::{Cli, ViewArgs};

pub fn run_labels(cli: &Cli) -> Result<LabelsReport> {
    let registry = load_registry(cli)?;
    Ok(LabelsReport::from_registry(registry))
}

pub fn run_view(cli: &Cli, args: &ViewArgs) -> Result<ViewReport> {
    let registry = load_registry(cli)?;

    let mut compares: Vec<&str> = args.compare.iter().map(String::as_str).collect();
    if compares.is_empty()
        && !args.no_default_compare
        && let Some(default) = registry.default_compare(&args.base)
    {
        info!(compare = default, "using default compare checklist");
        compares.push(default);
    }

    let view = registry
        .merge_labels(&args.base, &compares)
        .with_context(|| format!("merge {}", args.base))?;
    ViewReport::from_view(&view, args.query.as_deref(), args.limit, Locale::from(cli.locale))
}

fn load_registry(cli: &Cli) -> Result<&'static ChecklistRegistry> {
    let messages = Messages::for_locale(Locale::from(cli.locale));
    RegistryCache::shared()
        .get_or_build(&cli.index_dir)
        .map_err(|err| {
            let headline = match err {
                RegistryError::NoChecklists { .. } => messages.no_data,
                RegistryError::MissingDirectory { .. } | RegistryError::DirectoryRead(_) => {
                    messages.folder_missing
                }
            };
            anyhow::Error::new(err).context(headline)
        })
}
