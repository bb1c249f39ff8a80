use vx_core::frame::FrameBuffer;

/// Extrait la séquence de luminance d'une frame, en ordre raster.
///
/// Une valeur par pixel, `L = floor(0.2126*r + 0.7152*g + 0.0722*b)`.
/// Fonction totale : aucune entrée RGB n'échoue.
///
/// # Example
/// ```
/// use vx_ascii::luminance::luminance_sequence;
/// use vx_core::frame::FrameBuffer;
///
/// let mut fb = FrameBuffer::new(2, 1);
/// fb.data[3..6].copy_from_slice(&[255, 255, 255]);
/// assert_eq!(luminance_sequence(&fb), vec![0, 255]);
/// ```
#[must_use]
pub fn luminance_sequence(frame: &FrameBuffer) -> Vec<u8> {
    let mut values = Vec::with_capacity((frame.width * frame.height) as usize);
    for y in 0..frame.height {
        for x in 0..frame.width {
            values.push(frame.luminance(x, y));
        }
    }
    values
}
