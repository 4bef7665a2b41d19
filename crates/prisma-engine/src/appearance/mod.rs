//! Visual appearance policy.
//!
//! Maps a color enumeration to fragment-shader source text and supplies
//! the fixed passthrough vertex shader. `render::ShapeRenderer` compiles
//! the generated WGSL into a pipeline; this module never touches the GPU.

mod color;
mod shader;

pub use color::{ShapeColor, Texture};

/// Per-shape appearance: fill color plus a (reserved) texture selector.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Appearance {
    pub color: ShapeColor,
    /// Not yet consulted by shader generation; carried for future use.
    pub texture: Texture,
}

impl Appearance {
    pub fn new(color: ShapeColor) -> Self {
        Self {
            color,
            texture: Texture::None,
        }
    }

    /// Complete WGSL module (vertex + fragment stage) for this appearance.
    pub fn shader_source(&self) -> String {
        shader::module_source(self.color)
    }

    /// Whether the fragment stage reads the time uniform.
    ///
    /// Non-animated appearances skip the per-frame uniform write.
    pub fn is_animated(&self) -> bool {
        matches!(self.color, ShapeColor::Rainbow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_module_has_both_entry_points() {
        for color in [
            ShapeColor::Red,
            ShapeColor::Blue,
            ShapeColor::Yellow,
            ShapeColor::Green,
            ShapeColor::Black,
            ShapeColor::White,
            ShapeColor::Orange,
            ShapeColor::Gray,
            ShapeColor::Rainbow,
        ] {
            let src = Appearance::new(color).shader_source();
            assert!(src.contains("fn vs_main"), "{color:?} missing vertex stage");
            assert!(src.contains("fn fs_main"), "{color:?} missing fragment stage");
        }
    }

    #[test]
    fn solid_colors_embed_their_rgba_literal() {
        let src = Appearance::new(ShapeColor::Orange).shader_source();
        assert!(src.contains("vec4<f32>(1.0, 0.5, 0.0, 1.0)"), "{src}");
    }

    #[test]
    fn rainbow_reads_the_time_uniform() {
        let src = Appearance::new(ShapeColor::Rainbow).shader_source();
        assert!(src.contains("u_time.secs"));
    }

    #[test]
    fn solid_fragments_do_not_read_time() {
        let src = Appearance::new(ShapeColor::Blue).shader_source();
        // The uniform is declared (shared bind group layout) but unread.
        assert!(src.contains("var<uniform> u_time"));
        assert!(!src.contains("u_time.secs"));
    }

    #[test]
    fn only_rainbow_is_animated() {
        assert!(Appearance::new(ShapeColor::Rainbow).is_animated());
        assert!(!Appearance::new(ShapeColor::Red).is_animated());
        assert!(!Appearance::new(ShapeColor::White).is_animated());
    }

    #[test]
    fn default_appearance_is_white_untextured() {
        let a = Appearance::default();
        assert_eq!(a.color, ShapeColor::White);
        assert_eq!(a.texture, Texture::None);
    }
}
