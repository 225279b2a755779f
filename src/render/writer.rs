//! Output layout on disk.
//!
//! ```text
//! <out>/<format>/primitives/<category>.<ext>
//! <out>/<format>/brands/<brand>/semantic/<name>.<ext>
//! <out>/<format>/brands/<brand>/components/<bucket>.<ext>
//! ```
//!
//! Each format directory is removed before writing, so stale files from an
//! earlier build never survive. Empty artifacts are not written.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, StrataError};
use crate::layers::{Artifact, BuildOutput, LayerKind};

use super::{css, js, relative_path, render, Format, ReferenceTable};

/// Files written by one call to [`write_build`].
#[derive(Debug, Default)]
pub struct WriteSummary {
    pub files: Vec<PathBuf>,
    /// Empty artifacts that were not written, counted once per format.
    pub skipped: usize,
}

/// Path of an artifact's file, relative to the format directory.
pub fn artifact_path(artifact: &Artifact, format: Format) -> PathBuf {
    let file = format!("{}.{}", artifact.name(), format.extension());
    match (&artifact.brand, artifact.layer()) {
        (None, _) => Path::new(LayerKind::Primitive.dir()).join(file),
        (Some(brand), layer) => Path::new("brands").join(brand).join(layer.dir()).join(file),
    }
}

/// Render and write every non-empty artifact in each format.
pub fn write_build(build: &BuildOutput, formats: &[Format], out_dir: &Path) -> Result<WriteSummary> {
    let mut summary = WriteSummary::default();

    for &format in formats {
        let root = out_dir.join(format.name());
        clear_dir(&root)?;

        let primitive_refs = ReferenceTable::for_brand(build, None);
        for artifact in &build.primitives {
            emit(&root, format, artifact, &primitive_refs, &mut summary)?;
        }

        for brand in build.brands() {
            let refs = ReferenceTable::for_brand(build, Some(brand));
            let artifacts = build
                .semantic
                .iter()
                .chain(&build.components)
                .filter(|a| a.brand.as_deref() == Some(brand));
            for artifact in artifacts {
                emit(&root, format, artifact, &refs, &mut summary)?;
            }
        }

        match format {
            Format::Css => write_css_bundles(build, &root, &mut summary)?,
            Format::Js => write_js_index(build, &root, &mut summary)?,
            _ => {}
        }
    }

    Ok(summary)
}

fn emit(
    root: &Path,
    format: Format,
    artifact: &Artifact,
    refs: &ReferenceTable<'_>,
    summary: &mut WriteSummary,
) -> Result<()> {
    if artifact.is_empty() {
        summary.skipped += 1;
        return Ok(());
    }
    let path = root.join(artifact_path(artifact, format));
    write_file(&path, &render(format, artifact, refs))?;
    summary.files.push(path);
    Ok(())
}

/// `brands/<brand>/bundle.css` importing primitives, then the brand's
/// semantic and component files.
fn write_css_bundles(build: &BuildOutput, root: &Path, summary: &mut WriteSummary) -> Result<()> {
    for brand in build.brands() {
        let bundle = Path::new("brands").join(brand).join("bundle.css");
        let imports: Vec<String> = build
            .primitives
            .iter()
            .chain(
                build
                    .semantic
                    .iter()
                    .chain(&build.components)
                    .filter(|a| a.brand.as_deref() == Some(brand)),
            )
            .filter(|a| !a.is_empty())
            .map(|a| relative_path(&bundle, &artifact_path(a, Format::Css)))
            .map(|p| p.trim_start_matches("./").to_string())
            .collect();

        let path = root.join(&bundle);
        write_file(&path, &css::bundle(&imports))?;
        summary.files.push(path);
    }
    Ok(())
}

fn write_js_index(build: &BuildOutput, root: &Path, summary: &mut WriteSummary) -> Result<()> {
    let artifacts: Vec<&Artifact> = build.primitives.iter().filter(|a| !a.is_empty()).collect();
    if artifacts.is_empty() {
        return Ok(());
    }
    let path = root.join(LayerKind::Primitive.dir()).join("index.js");
    write_file(&path, &js::primitives_index(&artifacts))?;
    summary.files.push(path);
    Ok(())
}

fn clear_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir).map_err(|e| StrataError::Io {
            path: dir.to_path_buf(),
            message: format!("Failed to clear output directory: {}", e),
        })?;
    }
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StrataError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }
    fs::write(path, content).map_err(|e| StrataError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write file: {}", e),
    })
}
