//! Indentation configuration for formatted output.

const SPACES: &str = "                ";

/// Indentation unit applied once per nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width, capped at 16.
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 2-space indentation, the JavaScript convention.
    pub const JAVASCRIPT: Self = Self::Spaces(2);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(width) => &SPACES[..usize::from(*width).min(SPACES.len())],
            Self::Tab => "\t",
        }
    }

    /// Prefix for the given nesting depth.
    pub fn repeat(&self, level: usize) -> String {
        self.as_str().repeat(level)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVASCRIPT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
        assert_eq!(Indent::Spaces(4).as_str(), "    ");
        assert_eq!(Indent::Spaces(0).as_str(), "");
        assert_eq!(Indent::Spaces(40).as_str().len(), 16);
        assert_eq!(Indent::Tab.as_str(), "\t");
    }

    #[test]
    fn test_repeat() {
        assert_eq!(Indent::Spaces(2).repeat(3), "      ");
        assert_eq!(Indent::Tab.repeat(2), "\t\t");
        assert_eq!(Indent::Tab.repeat(0), "");
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::Spaces(2));
    }
}
