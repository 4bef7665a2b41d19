//! WGSL source generation.
//!
//! Every module shares the same header: the time uniform declaration and
//! the fixed NDC-passthrough vertex stage. Declaring `u_time` even in
//! solid-color modules lets a single bind group layout serve all
//! pipelines; the original shaders did the equivalent with a uniform that
//! resolved to location -1 when unused.

use super::ShapeColor;

const MODULE_HEADER: &str = "\
struct TimeUniform {
    secs: f32,
    _pad0: f32,
    _pad1: f32,
    _pad2: f32,
}

@group(0) @binding(0) var<uniform> u_time: TimeUniform;

@vertex
fn vs_main(@location(0) pos: vec2<f32>) -> @builtin(position) vec4<f32> {
    return vec4<f32>(pos, 0.0, 1.0);
}
";

const RAINBOW_FRAGMENT: &str = "\
@fragment
fn fs_main() -> @location(0) vec4<f32> {
    let t = u_time.secs;
    return vec4<f32>(abs(sin(t)), abs(sin(t * 0.7)), abs(cos(t * 1.3)), 1.0);
}
";

/// Builds the complete WGSL module for a fill color.
pub(super) fn module_source(color: ShapeColor) -> String {
    match color.rgba() {
        Some([r, g, b, a]) => format!(
            "{MODULE_HEADER}\n\
             @fragment\n\
             fn fs_main() -> @location(0) vec4<f32> {{\n\
             \x20   return vec4<f32>({r:?}, {g:?}, {b:?}, {a:?});\n\
             }}\n"
        ),
        None => format!("{MODULE_HEADER}\n{RAINBOW_FRAGMENT}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals_are_valid_wgsl_floats() {
        // f32 Debug formatting always includes a decimal point, which is
        // what WGSL float literals require.
        let src = module_source(ShapeColor::Gray);
        assert!(src.contains("vec4<f32>(0.5, 0.5, 0.5, 1.0)"), "{src}");
    }

    #[test]
    fn rainbow_uses_the_shared_header() {
        let src = module_source(ShapeColor::Rainbow);
        assert!(src.starts_with("struct TimeUniform"));
        assert!(src.contains("abs(sin(t))"));
    }
}
