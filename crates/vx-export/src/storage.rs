use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Capacité d'écriture des documents produits.
///
/// Injecté dans le pipeline pour que le rendu reste une fonction pure ;
/// la persistance est l'unique étape faillible côté sortie.
///
/// # Example
/// ```
/// use vx_export::storage::OutputStore;
/// use std::path::PathBuf;
///
/// struct NullStore;
/// impl OutputStore for NullStore {
///     fn persist(&self, identifier: &str, _contents: &str) -> anyhow::Result<PathBuf> {
///         Ok(PathBuf::from(format!("{identifier}.svg")))
///     }
/// }
/// ```
pub trait OutputStore {
    /// Écrit `contents` sous l'identifiant donné et retourne le chemin final.
    ///
    /// # Errors
    /// Retourne une erreur si la destination ne peut être créée ou écrite.
    fn persist(&self, identifier: &str, contents: &str) -> Result<PathBuf>;
}

/// Store adossé à un dossier : écrit `<root>/<identifier>.svg`.
///
/// # Example
/// ```
/// use vx_export::storage::DirStore;
/// let store = DirStore::new("output");
/// ```
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    /// Create a store rooted at `root`. The directory is created lazily at
    /// the first persist.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl OutputStore for DirStore {
    fn persist(&self, identifier: &str, contents: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("Impossible de créer {}", self.root.display()))?;
        let path = self.root.join(format!("{identifier}.svg"));
        // fs::write borne la durée de vie du handle : il est relâché que
        // l'écriture réussisse ou non.
        fs::write(&path, contents)
            .with_context(|| format!("Impossible d'écrire {}", path.display()))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persist_writes_identifier_dot_svg() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirStore::new(dir.path());
        let path = store.persist("artwork", "<svg/>").unwrap();
        assert_eq!(path, dir.path().join("artwork.svg"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<svg/>");
    }

    #[test]
    fn persist_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("svg");
        let store = DirStore::new(&nested);
        let path = store.persist("a", "x").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn persist_overwrites_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirStore::new(dir.path());
        store.persist("a", "premier").unwrap();
        let path = store.persist("a", "second").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "second");
    }

    #[test]
    fn unwritable_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        // Un fichier à la place du dossier racine : create_dir_all échoue.
        let blocking = dir.path().join("occupied");
        std::fs::write(&blocking, b"").unwrap();
        let store = DirStore::new(&blocking);
        assert!(store.persist("a", "x").is_err());
    }
}
