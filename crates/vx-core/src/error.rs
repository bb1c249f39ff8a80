use thiserror::Error;

/// Errors originating from the core module.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid width/height dimensions.
    #[error("Dimensions invalides : {width}×{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Sequence length does not match the grid it describes.
    #[error("Longueur de séquence invalide : {actual} valeurs pour {expected} cellules")]
    LengthMismatch {
        /// Expected length (width × height).
        expected: usize,
        /// Actual length received.
        actual: usize,
    },

    /// A caption line is wider than the glyph grid.
    #[error("Ligne de légende {line} trop large : {len} caractères pour {width} colonnes")]
    CaptionTooWide {
        /// Zero-based caption line index.
        line: usize,
        /// Character count of the offending line.
        len: usize,
        /// Grid width in columns.
        width: u32,
    },

    /// More caption lines than the glyph grid has rows.
    #[error("Trop de lignes de légende : {lines} pour {height} rangées")]
    CaptionTooTall {
        /// Number of caption lines supplied.
        lines: usize,
        /// Grid height in rows.
        height: u32,
    },
}
