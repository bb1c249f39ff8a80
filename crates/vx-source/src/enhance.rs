use vx_core::frame::FrameBuffer;

/// Applique contraste et brightness à la frame, canal par canal.
///
/// Contraste : multiplication autour du pivot 128. Brightness : offset.
/// Résultat clampé à [0, 255]. Une table de 256 entrées est précalculée
/// puis appliquée à tous les bytes.
///
/// # Example
/// ```
/// use vx_core::frame::FrameBuffer;
/// use vx_source::enhance::apply_contrast;
///
/// let mut fb = FrameBuffer::new(1, 1);
/// fb.data.copy_from_slice(&[64, 128, 192]);
/// apply_contrast(&mut fb, 1.5, 0.0);
/// assert_eq!(fb.pixel(0, 0), (32, 128, 224));
/// ```
pub fn apply_contrast(frame: &mut FrameBuffer, contrast: f32, brightness: f32) {
    if (contrast - 1.0).abs() < f32::EPSILON && brightness.abs() < f32::EPSILON {
        return;
    }
    let mut lut = [0u8; 256];
    for (v, slot) in lut.iter_mut().enumerate() {
        let adjusted = (v as f32 - 128.0) * contrast + 128.0 + brightness * 255.0;
        *slot = adjusted.clamp(0.0, 255.0) as u8;
    }
    for byte in &mut frame.data {
        *byte = lut[*byte as usize];
    }
}
