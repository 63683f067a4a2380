use crate::foundation::core::{Line, Point, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_svg(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub font_size: f64,
    pub font_family: String,
    pub font_weight: String,
    pub anchor: TextAnchor,
    pub fill: String,
}

/// A drawing instruction in absolute canvas coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderPrimitive {
    Rect {
        rect: Rect,
        corner_radius: f64,
        fill: String,
        opacity: f64,
    },
    Text {
        /// Baseline anchor point.
        pos: Point,
        content: String,
        style: TextStyle,
    },
    Line {
        line: Line,
        stroke: String,
        width: f64,
    },
}

impl RenderPrimitive {
    pub fn text_content(&self) -> Option<&str> {
        match self {
            Self::Text { content, .. } => Some(content),
            _ => None,
        }
    }

    pub fn is_rect(&self) -> bool {
        matches!(self, Self::Rect { .. })
    }

    pub fn is_line(&self) -> bool {
        matches!(self, Self::Line { .. })
    }
}
