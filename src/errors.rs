use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum PosterError {
    UnknownPalette(String),
    EmptyPalette(String),
    InvalidConfig(String),
    SvgGenerationError(String),
}

impl std::error::Error for PosterError {}

impl fmt::Display for PosterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PosterError::UnknownPalette(name) => write!(f, "Unknown palette: {:?}", name),
            PosterError::EmptyPalette(name) => write!(f, "Palette {:?} has no colors", name),
            PosterError::InvalidConfig(msg) => write!(f, "Invalid poster config: {}", msg),
            PosterError::SvgGenerationError(msg) => write!(f, "Svg generation error: {}", msg),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display_names_palette() {
        let err = PosterError::UnknownPalette("Neon Void".into());
        assert_eq!(err.to_string(), "Unknown palette: \"Neon Void\"");
    }
}
