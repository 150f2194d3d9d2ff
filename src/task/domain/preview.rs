//! Shortened display form for long task descriptions.

/// Marker appended to truncated text.
pub const ELLIPSIS: char = '…';

/// Display form of a piece of text cut to a character limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPreview {
    text: String,
    truncated: bool,
}

impl TextPreview {
    /// Builds a preview of `text` that shows at most `limit` characters.
    ///
    /// Text longer than `limit` characters is cut and suffixed with
    /// [`ELLIPSIS`]; shorter text is kept whole.
    #[must_use]
    pub fn new(text: &str, limit: usize) -> Self {
        let mut chars = text.char_indices();
        match chars.nth(limit) {
            Some((cut, _)) => {
                let mut shown = text.get(..cut).unwrap_or(text).to_owned();
                shown.push(ELLIPSIS);
                Self {
                    text: shown,
                    truncated: true,
                }
            }
            None => Self {
                text: text.to_owned(),
                truncated: false,
            },
        }
    }

    /// Returns the text to display.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns `true` when the original text was cut.
    ///
    /// Collaborators use this to offer an "expand" affordance.
    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        self.truncated
    }
}
