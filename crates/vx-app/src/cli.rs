use std::path::PathBuf;

use clap::Parser;

/// vecscii — Batch raster → ASCII-art SVG converter.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Dossier d'entrée contenant les images (PNG, JPEG).
    #[arg(long, default_value = "input")]
    pub input: PathBuf,

    /// Dossier de sortie des documents SVG.
    #[arg(long, default_value = "output")]
    pub out: PathBuf,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Ligne de légende ancrée en bas de la grille (répétable).
    #[arg(long = "caption")]
    pub caption: Vec<String>,

    /// Justification de la légende : left ou right.
    #[arg(long)]
    pub justify: Option<String>,

    /// Rampe de densité : classic, full, compact, blocks, minimal.
    #[arg(long)]
    pub ramp: Option<String>,

    /// Facteur d'échelle du canvas SVG (pixels par cellule).
    #[arg(long)]
    pub scale: Option<u32>,

    /// Boîte englobante du resize (côté le plus long, en pixels).
    #[arg(long)]
    pub max_size: Option<u32>,

    /// Contraste appliqué avant conversion (1.0 = neutre).
    #[arg(long)]
    pub contrast: Option<f32>,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
