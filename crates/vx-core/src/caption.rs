use crate::error::CoreError;

/// Placement d'une légende dans les dernières rangées de la grille.
///
/// Les lignes sont ancrées en bas, alignées ordinalement : la dernière ligne
/// de légende occupe la dernière rangée de la grille.
///
/// # Example
/// ```
/// use vx_core::caption::CaptionPlacement;
/// let caption = CaptionPlacement::Left(vec!["HI".into()]);
/// assert_eq!(caption.overlay(0, 4, 10, 5), Some('H'));
/// assert_eq!(caption.overlay(2, 4, 10, 5), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CaptionPlacement {
    /// Pas de légende.
    #[default]
    None,
    /// Lignes justifiées à gauche.
    Left(Vec<String>),
    /// Lignes justifiées à droite.
    Right(Vec<String>),
}

impl CaptionPlacement {
    /// Lignes de légende (vide pour `None`).
    #[must_use]
    pub fn lines(&self) -> &[String] {
        match self {
            Self::None => &[],
            Self::Left(lines) | Self::Right(lines) => lines,
        }
    }

    /// Vérifie que la légende tient dans une grille `width`×`height`.
    ///
    /// Appelé AVANT tout rendu : une ligne plus large que la grille ou un
    /// nombre de lignes supérieur au nombre de rangées est rejeté, jamais
    /// tronqué. Les longueurs sont comptées en `char`s, pas en bytes.
    ///
    /// # Errors
    /// `CaptionTooTall` si `lines() > height`, `CaptionTooWide` si une ligne
    /// dépasse `width` caractères.
    pub fn validate(&self, width: u32, height: u32) -> Result<(), CoreError> {
        let lines = self.lines();
        if lines.len() > height as usize {
            return Err(CoreError::CaptionTooTall {
                lines: lines.len(),
                height,
            });
        }
        for (line, text) in lines.iter().enumerate() {
            let len = text.chars().count();
            if len > width as usize {
                return Err(CoreError::CaptionTooWide { line, len, width });
            }
        }
        Ok(())
    }

    /// Caractère de légende pour la cellule (x, y), ou `None` si la cellule
    /// garde son glyphe de densité.
    ///
    /// Seules les `lines()` dernières rangées sont concernées :
    /// `line_index = y + lines() - height`, négatif ailleurs.
    ///
    /// # Example
    /// ```
    /// use vx_core::caption::CaptionPlacement;
    /// let caption = CaptionPlacement::Right(vec!["HI".into()]);
    /// assert_eq!(caption.overlay(8, 4, 10, 5), Some('H'));
    /// assert_eq!(caption.overlay(9, 4, 10, 5), Some('I'));
    /// assert_eq!(caption.overlay(7, 4, 10, 5), None);
    /// ```
    #[must_use]
    pub fn overlay(&self, x: u32, y: u32, width: u32, height: u32) -> Option<char> {
        let (lines, right_justified) = match self {
            Self::None => return None,
            Self::Left(lines) => (lines, false),
            Self::Right(lines) => (lines, true),
        };
        let line_index = (y + lines.len() as u32).checked_sub(height)?;
        let line = lines.get(line_index as usize)?;
        let len = line.chars().count() as u32;
        if right_justified {
            let start = width.checked_sub(len)?;
            if x >= start {
                line.chars().nth((x - start) as usize)
            } else {
                None
            }
        } else if x < len {
            line.chars().nth(x as usize)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_never_overrides() {
        let caption = CaptionPlacement::None;
        for y in 0..5 {
            for x in 0..10 {
                assert_eq!(caption.overlay(x, y, 10, 5), None);
            }
        }
    }

    #[test]
    fn left_justified_last_row() {
        let caption = CaptionPlacement::Left(vec!["HI".into()]);
        assert_eq!(caption.overlay(0, 4, 10, 5), Some('H'));
        assert_eq!(caption.overlay(1, 4, 10, 5), Some('I'));
        for x in 2..10 {
            assert_eq!(caption.overlay(x, 4, 10, 5), None);
        }
        // Rangées au-dessus : jamais de légende.
        for y in 0..4 {
            assert_eq!(caption.overlay(0, y, 10, 5), None);
        }
    }

    #[test]
    fn right_justified_last_row() {
        let caption = CaptionPlacement::Right(vec!["HI".into()]);
        assert_eq!(caption.overlay(8, 4, 10, 5), Some('H'));
        assert_eq!(caption.overlay(9, 4, 10, 5), Some('I'));
        for x in 0..8 {
            assert_eq!(caption.overlay(x, 4, 10, 5), None);
        }
    }

    #[test]
    fn multiline_anchors_to_bottom() {
        let caption = CaptionPlacement::Left(vec!["AB".into(), "CD".into()]);
        // Avant-dernière rangée ← première ligne, dernière rangée ← seconde.
        assert_eq!(caption.overlay(0, 3, 10, 5), Some('A'));
        assert_eq!(caption.overlay(1, 3, 10, 5), Some('B'));
        assert_eq!(caption.overlay(0, 4, 10, 5), Some('C'));
        assert_eq!(caption.overlay(1, 4, 10, 5), Some('D'));
        assert_eq!(caption.overlay(0, 2, 10, 5), None);
    }

    #[test]
    fn validate_accepts_fitting_caption() {
        let caption = CaptionPlacement::Left(vec!["1234567890".into()]);
        assert!(caption.validate(10, 5).is_ok());
    }

    #[test]
    fn validate_rejects_wide_line() {
        let caption = CaptionPlacement::Left(vec!["ok".into(), "trop large !".into()]);
        let err = caption.validate(10, 5).unwrap_err();
        assert!(matches!(
            err,
            CoreError::CaptionTooWide {
                line: 1,
                len: 12,
                width: 10
            }
        ));
    }

    #[test]
    fn validate_rejects_too_many_lines() {
        let lines: Vec<String> = (0..6).map(|i| format!("l{i}")).collect();
        let err = CaptionPlacement::Right(lines).validate(10, 5).unwrap_err();
        assert!(matches!(
            err,
            CoreError::CaptionTooTall {
                lines: 6,
                height: 5
            }
        ));
    }

    #[test]
    fn width_counted_in_chars_not_bytes() {
        // "héhé" : 4 chars, 6 bytes. Doit tenir dans 4 colonnes.
        let caption = CaptionPlacement::Left(vec!["héhé".into()]);
        assert!(caption.validate(4, 2).is_ok());
        assert_eq!(caption.overlay(1, 1, 4, 2), Some('é'));
    }
}
