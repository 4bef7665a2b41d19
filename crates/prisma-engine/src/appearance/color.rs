/// Fill colors available to sample shapes.
///
/// Each solid variant maps to a fixed RGBA literal baked into the
/// generated fragment shader; [`ShapeColor::Rainbow`] cycles with the time
/// uniform instead.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum ShapeColor {
    Red,
    Blue,
    Yellow,
    Green,
    Black,
    #[default]
    White,
    Orange,
    Gray,
    Rainbow,
}

impl ShapeColor {
    /// Linear RGBA for solid variants; `None` for time-animated fills.
    pub fn rgba(self) -> Option<[f32; 4]> {
        let c = match self {
            Self::Red => [1.0, 0.0, 0.0, 1.0],
            Self::Blue => [0.0, 0.0, 1.0, 1.0],
            Self::Yellow => [1.0, 1.0, 0.0, 1.0],
            Self::Green => [0.0, 1.0, 0.0, 1.0],
            Self::Black => [0.0, 0.0, 0.0, 1.0],
            Self::White => [1.0, 1.0, 1.0, 1.0],
            Self::Orange => [1.0, 0.5, 0.0, 1.0],
            Self::Gray => [0.5, 0.5, 0.5, 1.0],
            Self::Rainbow => return None,
        };
        Some(c)
    }
}

/// Surface texture selector.
///
/// Reserved: carried by `Appearance` but not yet consulted by shader
/// generation.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Texture {
    #[default]
    None,
    Wood,
    Metal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solids_have_opaque_alpha() {
        for color in [
            ShapeColor::Red,
            ShapeColor::Blue,
            ShapeColor::Yellow,
            ShapeColor::Green,
            ShapeColor::Black,
            ShapeColor::White,
            ShapeColor::Orange,
            ShapeColor::Gray,
        ] {
            let rgba = color.rgba().expect("solid color");
            assert_eq!(rgba[3], 1.0);
        }
    }

    #[test]
    fn rainbow_has_no_fixed_color() {
        assert!(ShapeColor::Rainbow.rgba().is_none());
    }
}
