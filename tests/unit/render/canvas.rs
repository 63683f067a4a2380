use super::*;
use crate::{
    foundation::core::{Line, Point, Rect},
    render::primitive::TextAnchor,
};

fn sample() -> Canvas {
    let mut c = Canvas::new(Size::new(100.0, 50.5));
    c.push(RenderPrimitive::Rect {
        rect: Rect::new(2.0, 2.0, 42.0, 42.0),
        corner_radius: 6.0,
        fill: "#eeeeee".to_string(),
        opacity: 0.8,
    });
    c.push(RenderPrimitive::Text {
        pos: Point::new(8.0, 24.0),
        content: "Tom & Jerry <3".to_string(),
        style: TextStyle {
            font_size: 12.0,
            font_family: "sans-serif".to_string(),
            font_weight: "normal".to_string(),
            anchor: TextAnchor::Start,
            fill: "#000".to_string(),
        },
    });
    c.push(RenderPrimitive::Line {
        line: Line::new((0.0, 45.0), (100.0, 45.0)),
        stroke: "black".to_string(),
        width: 1.0,
    });
    c
}

#[test]
fn svg_contains_each_primitive_in_order() {
    let svg = sample().to_svg();
    let rect_at = svg.find("<rect").unwrap();
    let text_at = svg.find("<text").unwrap();
    let line_at = svg.find("<line").unwrap();
    assert!(rect_at < text_at && text_at < line_at);
    assert!(svg.contains(r#"width="100" height="50.5""#));
    assert!(svg.contains(r#"rx="6""#));
    assert!(svg.contains(r#"fill-opacity="0.8""#));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn text_content_is_escaped() {
    let svg = sample().to_svg();
    assert!(svg.contains("Tom &amp; Jerry &lt;3"));
    assert!(!svg.contains("Tom & Jerry"));
}

#[test]
fn serialization_is_stable() {
    assert_eq!(sample().to_svg(), sample().to_svg());
}

#[test]
fn number_formatting_trims_zeros() {
    assert_eq!(num(10.0), "10");
    assert_eq!(num(10.5), "10.5");
    assert_eq!(num(1.0 / 3.0), "0.33");
    assert_eq!(num(-0.001), "0");
    assert_eq!(num(f64::NAN), "0");
}
