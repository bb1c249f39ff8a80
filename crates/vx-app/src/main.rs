use anyhow::Result;
use clap::Parser;

use vx_core::config::{self, Justify, RenderConfig};
use vx_core::ramp;
use vx_export::storage::DirStore;

pub mod batch;
pub mod cli;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Info))
        .init();

    // 3. Charger la config
    let mut config = resolve_config(&cli)?;

    // 4. Appliquer les overrides CLI
    apply_overrides(&cli, &mut config);
    config.clamp_all();

    // 5. Lancer le lot
    let store = DirStore::new(&cli.out);
    batch::run_batch(&cli.input, &store, &config)
}

/// Resolve config: fichier si présent, défauts sinon.
fn resolve_config(cli: &cli::Cli) -> Result<RenderConfig> {
    if cli.config.exists() {
        config::load_config(&cli.config)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(RenderConfig::default())
    }
}

/// Applique les drapeaux CLI par-dessus la config résolue.
fn apply_overrides(cli: &cli::Cli, config: &mut RenderConfig) {
    if let Some(ref name) = cli.ramp {
        match ramp::preset(name) {
            Some(r) => config.ramp = r.to_string(),
            None => log::warn!("Rampe inconnue '{name}', rampe de la config conservée."),
        }
    }
    if let Some(ref justify) = cli.justify {
        config.justify = match justify.as_str() {
            "left" => Justify::Left,
            "right" => Justify::Right,
            _ => {
                log::warn!("Justification inconnue '{justify}', utilisation du défaut.");
                config.justify
            }
        };
    }
    if !cli.caption.is_empty() {
        config.caption_lines.clone_from(&cli.caption);
    }
    if let Some(v) = cli.scale {
        config.scale_factor = v;
    }
    if let Some(v) = cli.max_size {
        config.max_size = v;
    }
    if let Some(v) = cli.contrast {
        config.contrast = v;
    }
}
