use std::fmt::Write as _;

use crate::{
    foundation::core::Size,
    render::primitive::{RenderPrimitive, TextStyle},
};

/// Append-only primitive buffer for one rendered artifact.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    size: Size,
    primitives: Vec<RenderPrimitive>,
}

impl Canvas {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            primitives: Vec::new(),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn push(&mut self, primitive: RenderPrimitive) {
        self.primitives.push(primitive);
    }

    pub fn extend(&mut self, primitives: impl IntoIterator<Item = RenderPrimitive>) {
        self.primitives.extend(primitives);
    }

    pub fn primitives(&self) -> &[RenderPrimitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Serialize to a standalone SVG document. Output is byte-stable for equal canvases.
    pub fn to_svg(&self) -> String {
        let mut out = String::with_capacity(128 + self.primitives.len() * 160);
        let (w, h) = (num(self.size.width), num(self.size.height));
        let _ = writeln!(out, r#"<?xml version="1.0" encoding="utf-8" ?>"#);
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        );
        for p in &self.primitives {
            write_primitive(&mut out, p);
        }
        out.push_str("</svg>\n");
        out
    }
}

fn write_primitive(out: &mut String, p: &RenderPrimitive) {
    match p {
        RenderPrimitive::Rect {
            rect,
            corner_radius,
            fill,
            opacity,
        } => {
            let _ = writeln!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" ry="{}" fill="{}" fill-opacity="{}" />"#,
                num(rect.x0),
                num(rect.y0),
                num(rect.width()),
                num(rect.height()),
                num(*corner_radius),
                num(*corner_radius),
                escape(fill),
                num(*opacity),
            );
        }
        RenderPrimitive::Text {
            pos,
            content,
            style,
        } => {
            let _ = writeln!(
                out,
                r#"<text x="{}" y="{}" {}>{}</text>"#,
                num(pos.x),
                num(pos.y),
                text_attrs(style),
                escape(content),
            );
        }
        RenderPrimitive::Line {
            line,
            stroke,
            width,
        } => {
            let _ = writeln!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" />"#,
                num(line.p0.x),
                num(line.p0.y),
                num(line.p1.x),
                num(line.p1.y),
                escape(stroke),
                num(*width),
            );
        }
    }
}

fn text_attrs(style: &TextStyle) -> String {
    format!(
        r#"font-size="{}" font-family="{}" font-weight="{}" text-anchor="{}" fill="{}""#,
        num(style.font_size),
        escape(&style.font_family),
        escape(&style.font_weight),
        style.anchor.as_svg(),
        escape(&style.fill),
    )
}

/// Shortest stable decimal form, at most two fractional digits.
fn num(v: f64) -> String {
    let v = if v.is_finite() { v } else { 0.0 };
    let mut s = format!("{:.2}", v);
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
