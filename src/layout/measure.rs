use std::cell::RefCell;

use crate::foundation::error::{CalsvgError, CalsvgResult};

/// Average glyph advance as a fraction of the font size.
pub const AVG_GLYPH_RATIO: f64 = 0.6;

/// Estimates the rendered width of a run of text.
///
/// Layout code depends only on this capability, so a crude heuristic and a real
/// font-metrics provider are interchangeable.
pub trait WidthEstimator {
    fn estimate_width(&self, text: &str, font_size: f64) -> f64;
}

/// `chars * font_size * AVG_GLYPH_RATIO`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicEstimator;

impl WidthEstimator for HeuristicEstimator {
    fn estimate_width(&self, text: &str, font_size: f64) -> f64 {
        text.chars().count() as f64 * font_size * AVG_GLYPH_RATIO
    }
}

/// Measures text by shaping it with Parley against a supplied font.
pub struct FontMetricsEstimator {
    family_name: String,
    contexts: RefCell<ParleyContexts>,
}

struct ParleyContexts {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
}

impl FontMetricsEstimator {
    /// Register `font_bytes` (TTF/OTF/TTC) and measure with its first family.
    pub fn from_font_bytes(font_bytes: Vec<u8>) -> CalsvgResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            CalsvgError::validation("no font families registered from font bytes")
        })?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| CalsvgError::validation("registered font family has no name"))?
            .to_string();

        Ok(Self {
            family_name,
            contexts: RefCell::new(ParleyContexts {
                font_ctx,
                layout_ctx: parley::LayoutContext::new(),
            }),
        })
    }

    pub fn from_path(path: &std::path::Path) -> CalsvgResult<Self> {
        use anyhow::Context as _;
        let bytes =
            std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
        Self::from_font_bytes(bytes)
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }
}

impl std::fmt::Debug for FontMetricsEstimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontMetricsEstimator")
            .field("family_name", &self.family_name)
            .finish()
    }
}

impl WidthEstimator for FontMetricsEstimator {
    fn estimate_width(&self, text: &str, font_size: f64) -> f64 {
        if text.is_empty() || !font_size.is_finite() || font_size <= 0.0 {
            return 0.0;
        }
        let mut guard = self.contexts.borrow_mut();
        let ParleyContexts {
            font_ctx,
            layout_ctx,
        } = &mut *guard;

        let mut builder = layout_ctx.ranged_builder(font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(font_size as f32));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);

        let mut w = 0.0f64;
        for line in layout.lines() {
            w = w.max(f64::from(line.metrics().advance));
        }
        w
    }
}
