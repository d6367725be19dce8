//! SVG serialization of colored circles.
use std::fmt;

use crate::color::{ColoredCircle, Rgb};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// A standalone SVG document over a `width × height` pixel canvas.
///
/// Formatting writes the document; a `background` adds a full-size rectangle behind the circles.
#[derive(Debug, Clone, Copy)]
pub struct SvgDocument<'a> {
    pub width: u32,
    pub height: u32,
    pub circles: &'a [ColoredCircle],
    pub background: Option<Rgb>,
}

impl fmt::Display for SvgDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = (self.width, self.height);
        write!(
            f,
            r#"<svg width="{width}" height="{height}" viewBox="0 0 {width} {height}" xmlns="{SVG_NS}">"#
        )?;
        if let Some(bg) = self.background {
            write!(
                f,
                r#"<rect x="0" y="0" width="{width}" height="{height}" fill="{bg}"/>"#
            )?;
        }
        for ColoredCircle { circle, color } in self.circles {
            write!(
                f,
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
                circle.x, circle.y, circle.radius, color
            )?;
        }
        f.write_str("</svg>")
    }
}

/// Renders `circles` as a standalone SVG document of the given pixel size.
pub fn to_svg_string(
    width: u32,
    height: u32,
    circles: &[ColoredCircle],
    background: Option<Rgb>,
) -> String {
    SvgDocument {
        width,
        height,
        circles,
        background,
    }
    .to_string()
}
