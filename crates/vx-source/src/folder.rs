use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Extensions image reconnues.
const IMAGE_EXTS: &[&str] = &["png", "jpg", "jpeg"];

/// Liste les images d'un dossier, triées pour un ordre de batch déterministe.
///
/// Seul le premier niveau est parcouru ; les fichiers sans extension image
/// sont ignorés (tracés en debug).
///
/// # Errors
/// Retourne une erreur si le dossier n'existe pas ou ne peut être lu.
///
/// # Example
/// ```no_run
/// use vx_source::folder::scan_images;
/// use std::path::Path;
/// let files = scan_images(Path::new("input")).unwrap();
/// ```
pub fn scan_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Impossible de lire le dossier {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Entrée illisible dans {}", dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) if IMAGE_EXTS.contains(&ext.to_lowercase().as_str()) => files.push(path),
            _ => log::debug!("Ignoré (extension non supportée) : {}", path.display()),
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_only_image_extensions_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.jpg", "a.png", "notes.txt", "c.JPEG", "d.gif"] {
            std::fs::write(dir.path().join(name), b"stub").unwrap();
        }
        let files = scan_images(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.png", "b.jpg", "c.JPEG"]);
    }

    #[test]
    fn subdirectories_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("nested.png")).unwrap();
        assert!(scan_images(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let err = scan_images(Path::new("/nonexistent/input")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/input"));
    }
}
