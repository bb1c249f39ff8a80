use anyhow::{Context, Result};
use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer as FirResizer};
use vx_core::frame::FrameBuffer;

/// Resizer réutilisable wrappant fast_image_resize, convolution Lanczos3.
///
/// # Example
/// ```
/// use vx_source::resize::Resizer;
/// let r = Resizer::new();
/// ```
pub struct Resizer {
    inner: FirResizer,
    options: ResizeOptions,
    /// Scratch buffer for source (owned copy, the fir API wants &mut).
    src_buf: Vec<u8>,
}

impl Resizer {
    /// Create a new resizer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: FirResizer::new(),
            options: ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3)),
            src_buf: Vec::new(),
        }
    }

    /// Resize `src` into `dst`. Dimensions of `dst` determine output size.
    ///
    /// # Errors
    /// Returns an error if the resize operation fails.
    ///
    /// # Example
    /// ```
    /// use vx_source::resize::Resizer;
    /// use vx_core::frame::FrameBuffer;
    /// let mut r = Resizer::new();
    /// let src = FrameBuffer::new(100, 100);
    /// let mut dst = FrameBuffer::new(50, 50);
    /// r.resize_into(&src, &mut dst).unwrap();
    /// ```
    pub fn resize_into(&mut self, src: &FrameBuffer, dst: &mut FrameBuffer) -> Result<()> {
        if src.width == dst.width && src.height == dst.height {
            dst.data.copy_from_slice(&src.data);
            return Ok(());
        }

        self.src_buf.clear();
        self.src_buf.extend_from_slice(&src.data);

        let src_image =
            Image::from_slice_u8(src.width, src.height, &mut self.src_buf, PixelType::U8x3)
                .context("Invalid source dimensions")?;

        let mut dst_image =
            Image::from_slice_u8(dst.width, dst.height, &mut dst.data, PixelType::U8x3)
                .context("Invalid destination dimensions")?;

        self.inner
            .resize(&src_image, &mut dst_image, Some(&self.options))
            .context("Resize failed")?;

        Ok(())
    }

    /// Redimensionne `src` pour tenir dans une boîte `max_size`×`max_size`,
    /// en préservant le ratio d'aspect. Le côté le plus long est porté à
    /// `max_size`, y compris pour les images plus petites.
    ///
    /// # Errors
    /// Returns an error if the resize operation fails.
    ///
    /// # Example
    /// ```
    /// use vx_source::resize::Resizer;
    /// use vx_core::frame::FrameBuffer;
    /// let mut r = Resizer::new();
    /// let src = FrameBuffer::new(400, 200);
    /// let dst = r.resize_to_fit(&src, 200).unwrap();
    /// assert_eq!((dst.width, dst.height), (200, 100));
    /// ```
    pub fn resize_to_fit(&mut self, src: &FrameBuffer, max_size: u32) -> Result<FrameBuffer> {
        let (width, height) = fit_within(src.width, src.height, max_size);
        let mut dst = FrameBuffer::new(width, height);
        self.resize_into(src, &mut dst)?;
        Ok(dst)
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Dimensions cibles pour tenir dans une boîte `max_size`, ratio préservé.
///
/// Le côté le plus long devient `max_size`, l'autre est tronqué à l'entier.
/// Un côté dégénéré est relevé à 1 pixel.
///
/// # Example
/// ```
/// use vx_source::resize::fit_within;
/// assert_eq!(fit_within(400, 200, 200), (200, 100));
/// assert_eq!(fit_within(100, 300, 150), (50, 150));
/// ```
#[must_use]
pub fn fit_within(width: u32, height: u32, max_size: u32) -> (u32, u32) {
    let longer = width.max(height).max(1);
    let scaled_w = (u64::from(width) * u64::from(max_size) / u64::from(longer)) as u32;
    let scaled_h = (u64::from(height) * u64::from(max_size) / u64::from(longer)) as u32;
    (scaled_w.max(1), scaled_h.max(1))
}
