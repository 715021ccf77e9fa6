//! Indentation configuration for generated documents.

/// Indentation style for generated documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width.
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// Build from a configured width; 0 selects tabs.
    pub fn from_width(width: u8) -> Self {
        match width {
            0 => Self::Tab,
            n => Self::Spaces(n),
        }
    }

    /// Write one indent level into `buffer`.
    pub fn write_to(&self, buffer: &mut String) {
        match self {
            Self::Spaces(n) => buffer.extend(std::iter::repeat_n(' ', usize::from(*n))),
            Self::Tab => buffer.push('\t'),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::Spaces(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_width() {
        assert_eq!(Indent::from_width(0), Indent::Tab);
        assert_eq!(Indent::from_width(2), Indent::Spaces(2));
    }

    #[test]
    fn test_write_to() {
        let mut s = String::new();
        Indent::Spaces(3).write_to(&mut s);
        Indent::Tab.write_to(&mut s);
        assert_eq!(s, "   \t");
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::Spaces(4));
    }
}
