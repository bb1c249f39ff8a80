use std::path::Path;

use anyhow::{Context, Result};
use vx_core::frame::FrameBuffer;

/// Charge une image depuis le disque, convertie en RGB.
///
/// # Errors
/// Retourne une erreur si le fichier est illisible, corrompu, ou dans un
/// format non supporté.
///
/// # Example
/// ```no_run
/// use vx_source::image::load_image;
/// use std::path::Path;
/// let frame = load_image(Path::new("input/photo.png")).unwrap();
/// ```
pub fn load_image(path: &Path) -> Result<FrameBuffer> {
    let img =
        image::open(path).with_context(|| format!("Impossible de charger {}", path.display()))?;
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    let frame = FrameBuffer::from_raw(width, height, rgb.into_raw())
        .with_context(|| format!("Buffer décodé invalide pour {}", path.display()))?;
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_error() {
        let err = load_image(Path::new("/nonexistent/nope.png")).unwrap_err();
        assert!(err.to_string().contains("nope.png"));
    }
}
