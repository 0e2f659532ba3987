use std::fmt;

/// The weight styles shipped in a Noto Sans CJK release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Regular,
    Thin,
    Light,
    Medium,
    Bold,
    Black,
}

impl Style {
    /// All styles, in processing order
    pub const ALL: [Style; 6] = [
        Style::Regular,
        Style::Thin,
        Style::Light,
        Style::Medium,
        Style::Bold,
        Style::Black,
    ];

    /// Style name as it appears in file names and name records
    pub fn name(self) -> &'static str {
        match self {
            Style::Regular => "Regular",
            Style::Thin => "Thin",
            Style::Light => "Light",
            Style::Medium => "Medium",
            Style::Bold => "Bold",
            Style::Black => "Black",
        }
    }

    /// True for the styles that stay in the base family (`Regular` and
    /// `Bold`); every other style is exposed as its own family with a
    /// `Regular` subfamily plus typographic family/subfamily records.
    pub fn is_style_linked(self) -> bool {
        matches!(self, Style::Regular | Style::Bold)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn processing_order_starts_with_regular() {
        assert_eq!(Style::ALL[0], Style::Regular);
        assert_eq!(Style::ALL.len(), 6);
    }

    #[test]
    fn only_regular_and_bold_are_style_linked() {
        let linked: Vec<Style> = Style::ALL
            .into_iter()
            .filter(|s| s.is_style_linked())
            .collect();
        assert_eq!(linked, vec![Style::Regular, Style::Bold]);
    }
}
