use std::path::{Path, PathBuf};

use anyhow::Result;

use vx_ascii::compositor::compose;
use vx_ascii::luminance::luminance_sequence;
use vx_core::caption::CaptionPlacement;
use vx_core::config::RenderConfig;
use vx_core::ramp::RampLut;
use vx_export::storage::OutputStore;
use vx_export::svg::{SvgOptions, render_document};
use vx_source::enhance::apply_contrast;
use vx_source::folder::scan_images;
use vx_source::image::load_image;
use vx_source::resize::Resizer;

/// Convertit toutes les images d'un dossier en documents SVG.
///
/// Chaque image est indépendante : un échec (décodage, légende trop large,
/// écriture) est journalisé avec le fichier en cause, puis le lot continue.
///
/// # Errors
/// Retourne une erreur si le dossier d'entrée est illisible ou vide.
pub fn run_batch(input: &Path, store: &impl OutputStore, config: &RenderConfig) -> Result<()> {
    let files = scan_images(input)?;
    if files.is_empty() {
        anyhow::bail!("Aucune image trouvée dans {}", input.display());
    }
    log::info!(
        "{} image(s) à convertir depuis {}",
        files.len(),
        input.display()
    );

    let lut = RampLut::new(&config.ramp);
    let caption = config.caption_placement();
    let mut resizer = Resizer::new();
    let mut converted = 0usize;

    for path in &files {
        match convert_one(path, store, config, &lut, &caption, &mut resizer) {
            Ok(saved) => {
                converted += 1;
                log::info!("Sauvé : {}", saved.display());
            }
            Err(e) => log::error!("Échec sur {} : {e:#}", path.display()),
        }
    }

    log::info!(
        "Conversion terminée : {converted}/{} réussie(s)",
        files.len()
    );
    Ok(())
}

/// Pipeline complet pour une image : decode → resize → enhance → luminance
/// → composition → rendu SVG → persistance. Retourne le chemin écrit.
fn convert_one(
    path: &Path,
    store: &impl OutputStore,
    config: &RenderConfig,
    lut: &RampLut,
    caption: &CaptionPlacement,
    resizer: &mut Resizer,
) -> Result<PathBuf> {
    let decoded = load_image(path)?;
    let mut frame = resizer.resize_to_fit(&decoded, config.max_size)?;
    apply_contrast(&mut frame, config.contrast, config.brightness);

    let luminance = luminance_sequence(&frame);
    let grid = compose(&luminance, frame.width, frame.height, lut, caption)?;
    let document = render_document(&grid, &SvgOptions::from(config));

    let identifier = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    store.persist(identifier, &document.to_svg())
}
