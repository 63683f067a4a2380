//! Best-effort conversion of `<text>` elements into outline paths.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;

use crate::foundation::error::{CalsvgError, CalsvgResult};

/// Fonts available to the outline pass.
///
/// When extra font files are given, the first family loaded from them also
/// answers the generic `serif` and `sans-serif` families.
#[derive(Clone, Debug, Default)]
pub struct OutlineFonts {
    pub load_system_fonts: bool,
    pub extra_font_files: Vec<PathBuf>,
}

impl OutlineFonts {
    fn build_db(&self) -> Arc<usvg::fontdb::Database> {
        let mut db = usvg::fontdb::Database::new();
        if self.load_system_fonts {
            db.load_system_fonts();
        }
        let mut primary: Option<String> = None;
        for path in &self.extra_font_files {
            let before = db.len();
            if let Err(err) = db.load_font_file(path) {
                tracing::warn!(font = %path.display(), %err, "failed to load font for outlining");
                continue;
            }
            if primary.is_none() {
                primary = first_family_after(&db, before);
            }
        }
        if let Some(family) = primary {
            tracing::debug!(%family, "outlining generic families with supplied font");
            db.set_serif_family(family.clone());
            db.set_sans_serif_family(family);
        }
        Arc::new(db)
    }
}

fn first_family_after(db: &usvg::fontdb::Database, skip: usize) -> Option<String> {
    db.faces()
        .skip(skip)
        .find_map(|face| face.families.first().map(|(name, _)| name.clone()))
}

/// Re-parse `svg` with `usvg` and serialize it back; text nodes come out as paths.
///
/// Fails when no font is available or when any text element could not be laid
/// out, since usvg drops such nodes instead of reporting them.
pub fn outline_text(svg: &str, fonts: &OutlineFonts) -> CalsvgResult<String> {
    let fontdb = fonts.build_db();
    if fontdb.is_empty() {
        return Err(CalsvgError::validation("no fonts available for outlining"));
    }
    let opts = usvg::Options {
        fontdb,
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(svg, &opts).context("parse svg for outlining")?;

    let expected = svg.matches("<text").count();
    let laid_out = count_text_nodes(tree.root());
    if laid_out < expected {
        return Err(CalsvgError::validation(format!(
            "only {laid_out} of {expected} text elements could be outlined"
        )));
    }
    Ok(tree.to_string(&usvg::WriteOptions::default()))
}

fn count_text_nodes(group: &usvg::Group) -> usize {
    group
        .children()
        .iter()
        .map(|node| match node {
            usvg::Node::Text(_) => 1,
            usvg::Node::Group(g) => count_text_nodes(g),
            _ => 0,
        })
        .sum()
}

/// Outline text when possible; on failure keep the text SVG and log a warning.
pub fn outline_or_keep(svg: String, fonts: &OutlineFonts) -> String {
    match outline_text(&svg, fonts) {
        Ok(outlined) => outlined,
        Err(err) => {
            tracing::warn!(%err, "text outlining failed; keeping text elements");
            svg
        }
    }
}
