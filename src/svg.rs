use std::fmt::Write;

use crate::surface::DrawCommand;
use crate::vector::Vec2;

/// Append the SVG path data `M x y L x y ...` for a polyline.
pub fn path(points: &[Vec2], d: &mut String) {
    let mut points = points.iter();
    if let Some(Vec2 { x, y }) = points.next() {
        write!(d, "M {x} {y}").unwrap();
    }
    for Vec2 { x, y } in points {
        write!(d, " L {x} {y}").unwrap();
    }
}

/// Render one recorded frame as a standalone SVG document.
pub fn document(commands: &[DrawCommand]) -> String {
    let (width, height) = commands
        .iter()
        .find_map(|cmd| match cmd {
            DrawCommand::Clear { width, height } => Some((*width, *height)),
            _ => None,
        })
        .unwrap_or((0., 0.));

    let mut out = String::new();
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    )
    .unwrap();

    for cmd in commands {
        match cmd {
            DrawCommand::Clear { .. } => {}
            DrawCommand::StrokePath { points, stroke } => {
                let mut d = String::new();
                path(points, &mut d);
                writeln!(
                    out,
                    r#"  <path d="{d}" fill="none" stroke="{}" stroke-width="{}"/>"#,
                    stroke.color, stroke.width
                )
                .unwrap();
            }
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => {
                writeln!(
                    out,
                    r#"  <circle cx="{}" cy="{}" r="{radius}" fill="{color}"/>"#,
                    center.x, center.y
                )
                .unwrap();
            }
        }
    }

    out.push_str("</svg>\n");
    out
}
