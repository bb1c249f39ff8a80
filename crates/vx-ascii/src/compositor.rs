use vx_core::caption::CaptionPlacement;
use vx_core::error::CoreError;
use vx_core::frame::GlyphGrid;
use vx_core::ramp::RampLut;

/// Compose une grille de glyphes depuis une séquence de luminance.
///
/// Une cellule par pixel source : glyphe de densité via la LUT, remplacé par
/// un caractère de légende dans les dernières rangées quand le placement
/// l'exige. Pure — aucune I/O, aucun état partagé.
///
/// # Errors
/// - `LengthMismatch` si `luminance.len() != width * height` (rejet immédiat,
///   jamais de troncature ni de padding) ;
/// - `InvalidDimensions` si `width` ou `height` vaut zéro ;
/// - `CaptionTooWide` / `CaptionTooTall` si la légende ne tient pas.
///
/// # Example
/// ```
/// use vx_ascii::compositor::compose;
/// use vx_core::caption::CaptionPlacement;
/// use vx_core::ramp::RampLut;
///
/// let lut = RampLut::new("@%#*+=-:. ");
/// let grid = compose(&[0, 255], 2, 1, &lut, &CaptionPlacement::None).unwrap();
/// assert_eq!(grid.get(0, 0), ' ');
/// assert_eq!(grid.get(1, 0), '@');
/// ```
pub fn compose(
    luminance: &[u8],
    width: u32,
    height: u32,
    lut: &RampLut,
    caption: &CaptionPlacement,
) -> Result<GlyphGrid, CoreError> {
    if width == 0 || height == 0 {
        return Err(CoreError::InvalidDimensions { width, height });
    }
    let expected = (width * height) as usize;
    if luminance.len() != expected {
        return Err(CoreError::LengthMismatch {
            expected,
            actual: luminance.len(),
        });
    }
    caption.validate(width, height)?;

    let mut grid = GlyphGrid::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let glyph = match caption.overlay(x, y, width, height) {
                Some(ch) => ch,
                None => lut.map(luminance[(y * width + x) as usize]),
            };
            grid.set(x, y, glyph);
        }
    }
    Ok(grid)
}
