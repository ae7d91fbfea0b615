//! Highlight classes attached to rendered bytes.

/// Highlight class of a single rendered byte.
///
/// Classes are what rows store; colours are only looked up while drawing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HighlightClass {
    #[default]
    Normal,
    Number,
    /// Temporary marker for the current search match.
    Match,
}

impl HighlightClass {
    /// SGR foreground colour code for this class.
    ///
    /// `None` means the terminal's default foreground.
    #[must_use]
    pub const fn color_code(self) -> Option<u8> {
        match self {
            Self::Number => Some(31),
            Self::Match => Some(34),
            Self::Normal => None,
        }
    }

    #[must_use]
    pub const fn is_normal(self) -> bool {
        matches!(self, Self::Normal)
    }
}
