//! Per-file metadata extraction.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::warn;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use read_fonts::tables::name::NameId;
use read_fonts::TableProvider;
use serde::{Deserialize, Serialize};
use skrifa::{FontRef, MetadataProvider};

use crate::scripts::ScriptSupport;
use crate::style::{weight_style, FontStyle, WeightStyle};

/// Metadata extracted from one font file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontFaceInfo {
    pub path: PathBuf,
    pub family_name: Option<String>,
    pub subfamily_name: Option<String>,
    pub postscript_name: Option<String>,
    pub full_name: Option<String>,
    pub version: Option<String>,
    pub named_variations: Vec<NamedVariation>,
    pub weight: u16,
    pub style: FontStyle,
    pub supports_cyrillic: bool,
    pub supports_japanese: bool,
    pub supports_korean: bool,
    pub supports_chinese: bool,
}

/// One fvar named instance: its subfamily name plus `(axis tag, user
/// coordinate)` pairs in axis order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedVariation {
    pub name: String,
    pub coordinates: Vec<(String, f32)>,
}

/// Extract metadata from the font at `path`.
///
/// Open/parse failures are logged at warn level and yield `None`; they never
/// propagate to the caller.
pub fn inspect(path: &Path) -> Option<FontFaceInfo> {
    match load_face(path) {
        Ok(info) => Some(info),
        Err(err) => {
            warn!("Skipping {}: {err:#}", path.display());
            None
        }
    }
}

/// Inspect a batch of paths in parallel, dropping files that fail to parse.
/// Results are sorted by path. `jobs` caps the rayon pool when set.
pub fn inspect_all(paths: &[PathBuf], jobs: Option<usize>) -> Vec<FontFaceInfo> {
    let run = || {
        let mut faces: Vec<FontFaceInfo> =
            paths.par_iter().filter_map(|path| inspect(path)).collect();
        faces.sort_by(|a, b| a.path.cmp(&b.path));
        faces
    };

    if let Some(jobs) = jobs {
        match ThreadPoolBuilder::new().num_threads(jobs).build() {
            Ok(pool) => pool.install(run),
            Err(err) => {
                warn!("falling back to the default thread pool: {err}");
                run()
            }
        }
    } else {
        run()
    }
}

fn load_face(path: &Path) -> Result<FontFaceInfo> {
    let data = fs::read(path).with_context(|| format!("reading font {}", path.display()))?;
    let font = FontRef::new(&data).with_context(|| format!("parsing font {}", path.display()))?;

    let subfamily_name = name_string(&font, NameId::SUBFAMILY_NAME);
    let WeightStyle { weight, style } = weight_style(subfamily_name.as_deref().unwrap_or(""));
    let support = ScriptSupport::detect(&font.charmap());

    Ok(FontFaceInfo {
        family_name: name_string(&font, NameId::FAMILY_NAME),
        subfamily_name,
        postscript_name: name_string(&font, NameId::POSTSCRIPT_NAME),
        full_name: name_string(&font, NameId::FULL_NAME),
        version: name_string(&font, NameId::VERSION_STRING),
        named_variations: collect_named_variations(&font),
        weight,
        style,
        supports_cyrillic: support.cyrillic,
        supports_japanese: support.japanese,
        supports_korean: support.korean,
        supports_chinese: support.chinese,
        path: path.to_path_buf(),
    })
}

/// First non-empty Unicode name-table entry for `id`, trimmed.
fn name_string(font: &FontRef, id: NameId) -> Option<String> {
    let table = font.name().ok()?;
    let data = table.string_data();

    for record in table.name_record() {
        if record.name_id() != id || !record.is_unicode() {
            continue;
        }
        if let Ok(entry) = record.string(data) {
            let rendered = entry.to_string();
            let trimmed = rendered.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }

    None
}

fn collect_named_variations(font: &FontRef) -> Vec<NamedVariation> {
    let Ok(fvar) = font.fvar() else {
        return Vec::new();
    };
    let Ok(axes) = fvar.axes() else {
        return Vec::new();
    };
    let Ok(instances) = fvar.instances() else {
        return Vec::new();
    };

    let axis_tags: Vec<String> = axes.iter().map(|axis| axis.axis_tag().to_string()).collect();

    let mut variations = Vec::new();
    for instance in instances.iter().flatten() {
        let name = name_string(font, instance.subfamily_name_id).unwrap_or_default();
        let coordinates = axis_tags
            .iter()
            .cloned()
            .zip(
                instance
                    .coordinates
                    .iter()
                    .map(|coord| coord.get().to_f64() as f32),
            )
            .collect();

        variations.push(NamedVariation { name, coordinates });
    }

    variations
}
