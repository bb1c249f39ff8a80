use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::caption::CaptionPlacement;
use crate::ramp::RAMP_CLASSIC;

/// Justification des lignes de légende.
///
/// # Example
/// ```
/// use vx_core::config::Justify;
/// assert!(matches!(Justify::default(), Justify::Left));
/// ```
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Justify {
    /// Légende collée à la colonne 0.
    #[default]
    Left,
    /// Légende collée à la dernière colonne.
    Right,
}

/// Configuration complète d'une conversion.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use vx_core::config::RenderConfig;
/// let config = RenderConfig::default();
/// assert_eq!(config.scale_factor, 10);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RenderConfig {
    // === Rendu ===
    /// Rampe de densité, du glyphe le plus dense au plus clair.
    pub ramp: String,
    /// Facteur d'échelle du canvas SVG (pixels par cellule).
    pub scale_factor: u32,
    /// Boîte englobante du resize (côté le plus long, en pixels).
    pub max_size: u32,
    /// Contraste appliqué avant conversion [0.1, 3.0]. 1.0 = neutre.
    pub contrast: f32,
    /// Brightness offset [-1.0, 1.0]. 0.0 = neutre.
    pub brightness: f32,
    /// Famille de police des glyphes (monospace pour l'alignement).
    pub font_family: String,
    /// Couleur de fond du canvas.
    pub background: String,
    /// Couleur des glyphes.
    pub foreground: String,

    // === Légende ===
    /// Lignes de légende ancrées en bas de la grille.
    pub caption_lines: Vec<String>,
    /// Justification de la légende.
    pub justify: Justify,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            ramp: RAMP_CLASSIC.to_string(),
            scale_factor: 10,
            max_size: 200,
            contrast: 1.5,
            brightness: 0.0,
            font_family: "Courier, monospace".to_string(),
            background: "black".to_string(),
            foreground: "white".to_string(),
            caption_lines: Vec::new(),
            justify: Justify::Left,
        }
    }
}

impl RenderConfig {
    /// Clamp all numeric fields to their valid ranges.
    /// Called after TOML deserialization to prevent out-of-range values.
    pub fn clamp_all(&mut self) {
        self.scale_factor = self.scale_factor.clamp(1, 100);
        self.max_size = self.max_size.clamp(8, 4096);
        self.contrast = self.contrast.clamp(0.1, 3.0);
        self.brightness = self.brightness.clamp(-1.0, 1.0);
    }

    /// Construit le placement de légende depuis les champs caption.
    ///
    /// # Example
    /// ```
    /// use vx_core::config::{Justify, RenderConfig};
    /// use vx_core::caption::CaptionPlacement;
    /// let mut config = RenderConfig::default();
    /// assert_eq!(config.caption_placement(), CaptionPlacement::None);
    /// config.caption_lines = vec!["Titre".into()];
    /// config.justify = Justify::Right;
    /// assert!(matches!(config.caption_placement(), CaptionPlacement::Right(_)));
    /// ```
    #[must_use]
    pub fn caption_placement(&self) -> CaptionPlacement {
        if self.caption_lines.is_empty() {
            return CaptionPlacement::None;
        }
        match self.justify {
            Justify::Left => CaptionPlacement::Left(self.caption_lines.clone()),
            Justify::Right => CaptionPlacement::Right(self.caption_lines.clone()),
        }
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    render: Option<RenderSection>,
    caption: Option<CaptionSection>,
}

/// Render section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct RenderSection {
    ramp: Option<String>,
    scale_factor: Option<u32>,
    max_size: Option<u32>,
    contrast: Option<f32>,
    brightness: Option<f32>,
    font_family: Option<String>,
    background: Option<String>,
    foreground: Option<String>,
}

/// Caption section of the TOML config, all fields optional.
#[derive(Deserialize)]
struct CaptionSection {
    lines: Option<Vec<String>>,
    justify: Option<Justify>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use vx_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<RenderConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;

    parse_config(&content)
        .with_context(|| format!("Erreur de parsing TOML dans {}", path.display()))
}

/// Parse un document TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the document is not valid TOML.
pub fn parse_config(content: &str) -> Result<RenderConfig> {
    let file: ConfigFile = toml::from_str(content)?;

    let mut config = RenderConfig::default();

    if let Some(r) = file.render {
        if let Some(v) = r.ramp {
            config.ramp = v;
        }
        if let Some(v) = r.scale_factor {
            config.scale_factor = v;
        }
        if let Some(v) = r.max_size {
            config.max_size = v;
        }
        if let Some(v) = r.contrast {
            config.contrast = v;
        }
        if let Some(v) = r.brightness {
            config.brightness = v;
        }
        if let Some(v) = r.font_family {
            config.font_family = v;
        }
        if let Some(v) = r.background {
            config.background = v;
        }
        if let Some(v) = r.foreground {
            config.foreground = v;
        }
    }

    if let Some(c) = file.caption {
        if let Some(v) = c.lines {
            config.caption_lines = v;
        }
        if let Some(v) = c.justify {
            config.justify = v;
        }
    }

    config.clamp_all();
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_pipeline() {
        let config = RenderConfig::default();
        assert_eq!(config.scale_factor, 10);
        assert_eq!(config.max_size, 200);
        assert!((config.contrast - 1.5).abs() < f32::EPSILON);
        assert_eq!(config.font_family, "Courier, monospace");
        assert_eq!(config.background, "black");
        assert_eq!(config.foreground, "white");
    }

    #[test]
    fn clamp_all_bounds_values() {
        let mut config = RenderConfig {
            scale_factor: 0,
            max_size: 100_000,
            contrast: 99.0,
            brightness: -5.0,
            ..RenderConfig::default()
        };
        config.clamp_all();
        assert_eq!(config.scale_factor, 1);
        assert_eq!(config.max_size, 4096);
        assert!((config.contrast - 3.0).abs() < f32::EPSILON);
        assert!((config.brightness + 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn partial_toml_merges_over_defaults() {
        let config = parse_config(
            r#"
            [render]
            scale_factor = 4

            [caption]
            lines = ["Artwork Title"]
            justify = "right"
            "#,
        )
        .unwrap();
        assert_eq!(config.scale_factor, 4);
        assert_eq!(config.max_size, 200);
        assert_eq!(config.justify, Justify::Right);
        assert_eq!(config.caption_lines, vec!["Artwork Title".to_string()]);
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.scale_factor, 10);
        assert_eq!(config.ramp, RAMP_CLASSIC);
    }

    #[test]
    fn invalid_toml_is_rejected() {
        assert!(parse_config("[render\nscale_factor = ").is_err());
    }

    #[test]
    fn empty_caption_lines_mean_no_placement() {
        let config = RenderConfig::default();
        assert_eq!(config.caption_placement(), CaptionPlacement::None);
    }
}
