use std::fmt::Write as _;

use vx_core::config::RenderConfig;
use vx_core::frame::GlyphGrid;

/// Options de rendu SVG.
///
/// # Example
/// ```
/// use vx_export::svg::SvgOptions;
/// let options = SvgOptions::default();
/// assert_eq!(options.scale_factor, 10);
/// ```
#[derive(Clone, Debug)]
pub struct SvgOptions {
    /// Pixels de canvas par cellule de grille.
    pub scale_factor: u32,
    /// Famille de police (monospace pour des cellules alignées).
    pub font_family: String,
    /// Couleur de fond du canvas.
    pub background: String,
    /// Couleur des glyphes.
    pub foreground: String,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            scale_factor: 10,
            font_family: "Courier, monospace".to_string(),
            background: "black".to_string(),
            foreground: "white".to_string(),
        }
    }
}

impl From<&RenderConfig> for SvgOptions {
    fn from(config: &RenderConfig) -> Self {
        Self {
            scale_factor: config.scale_factor,
            font_family: config.font_family.clone(),
            background: config.background.clone(),
            foreground: config.foreground.clone(),
        }
    }
}

/// Document vectoriel en mémoire : un canvas, un rectangle de fond, un
/// élément texte centré par cellule. Créé une fois par image, sérialisé,
/// puis abandonné.
pub struct SvgDocument {
    /// Canvas width in pixels (`grid.width * scale_factor`).
    pub canvas_width: u32,
    /// Canvas height in pixels (`grid.height * scale_factor`).
    pub canvas_height: u32,
    /// Uniform cell edge in pixels.
    pub cell_size: u32,
    body: String,
}

impl SvgDocument {
    /// Sérialise le document en texte SVG.
    ///
    /// Sortie déterministe : mêmes entrées, mêmes bytes.
    #[must_use]
    pub fn to_svg(&self) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <svg xmlns=\"http://www.w3.org/2000/svg\" baseProfile=\"full\" \
             width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.canvas_width,
            h = self.canvas_height,
            body = self.body,
        )
    }
}

/// Rend une grille de glyphes en document SVG. Pure — la persistance est
/// une étape séparée (voir [`crate::storage`]).
///
/// Géométrie : canvas `width*scale × height*scale`, cellules carrées de côté
/// `max(scaled) / max(dimensions)`, glyphe ancré au centre de sa cellule,
/// `font-size` = côté de cellule.
///
/// # Example
/// ```
/// use vx_core::frame::GlyphGrid;
/// use vx_export::svg::{SvgOptions, render_document};
///
/// let grid = GlyphGrid::new(10, 5);
/// let doc = render_document(&grid, &SvgOptions::default());
/// assert_eq!(doc.canvas_width, 100);
/// assert_eq!(doc.canvas_height, 50);
/// assert_eq!(doc.cell_size, 10);
/// ```
#[must_use]
pub fn render_document(grid: &GlyphGrid, options: &SvgOptions) -> SvgDocument {
    let canvas_width = grid.width * options.scale_factor;
    let canvas_height = grid.height * options.scale_factor;
    // Lié au côté le plus long : cellules carrées quel que soit le ratio.
    let cell_size = canvas_width.max(canvas_height) / grid.width.max(grid.height).max(1);

    let font_family = escape(&options.font_family);
    let foreground = escape(&options.foreground);

    let mut body = String::with_capacity((grid.glyphs.len() + 1) * 96);
    let _ = writeln!(
        body,
        "<rect x=\"0\" y=\"0\" width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        escape(&options.background),
    );

    for y in 0..grid.height {
        for x in 0..grid.width {
            let cx = x * cell_size + cell_size / 2;
            let cy = y * cell_size + cell_size / 2;
            let _ = writeln!(
                body,
                "<text x=\"{cx}\" y=\"{cy}\" text-anchor=\"middle\" \
                 dominant-baseline=\"middle\" font-size=\"{cell_size}\" \
                 font-family=\"{font_family}\" fill=\"{foreground}\">{}</text>",
                escape_char(grid.get(x, y)),
            );
        }
    }

    SvgDocument {
        canvas_width,
        canvas_height,
        cell_size,
        body,
    }
}

/// Échappe une valeur pour insertion en contenu ou attribut XML.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        push_escaped(&mut out, ch);
    }
    out
}

/// Échappe un glyphe isolé.
fn escape_char(ch: char) -> String {
    let mut out = String::new();
    push_escaped(&mut out, ch);
    out
}

fn push_escaped(out: &mut String, ch: char) {
    match ch {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&apos;"),
        _ => out.push(ch),
    }
}
