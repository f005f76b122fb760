//! TMX (Tiled XML map) document writing.
//!
//! The asset directory of a tile set holds the tile-set images, `.tsx` files
//! and a `template.tmx` document with `{{.Width}}`, `{{.Height}}` and
//! `{{.CSV}}` placeholders. Exporting copies the assets (except `.tmx` files)
//! into the export directory and writes the filled-in document as `map.tmx`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ExportError, TemplateError};
use crate::export::{populate, TmxExport};
use crate::map::Map;
use crate::template::TmxTemplate;

pub const WIDTH_PLACEHOLDER: &str = "{{.Width}}";
pub const HEIGHT_PLACEHOLDER: &str = "{{.Height}}";
pub const CSV_PLACEHOLDER: &str = "{{.CSV}}";

/// Name of the document template inside the asset directory
pub const TEMPLATE_FILE: &str = "template.tmx";
/// Name of the generated document inside the export directory
pub const OUTPUT_FILE: &str = "map.tmx";

/// Fill a document template with the exported map data.
pub fn render_document(template_text: &str, export: &TmxExport) -> Result<String, TemplateError> {
    if !template_text.contains(CSV_PLACEHOLDER) {
        return Err(TemplateError::MissingPlaceholder(CSV_PLACEHOLDER));
    }
    Ok(template_text
        .replace(WIDTH_PLACEHOLDER, &export.width.to_string())
        .replace(HEIGHT_PLACEHOLDER, &export.height.to_string())
        .replace(CSV_PLACEHOLDER, &export.csv))
}

fn is_tmx(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case("tmx"))
}

/// Recursively copy `src` into `dest`, skipping `.tmx` files.
/// Returns the number of files copied.
///
/// `dest` may live inside `src`; it is not copied into itself.
pub fn copy_assets(src: &Path, dest: &Path) -> io::Result<usize> {
    fs::create_dir_all(dest)?;
    let dest_root = fs::canonicalize(dest)?;
    copy_tree(src, dest, &dest_root)
}

fn copy_tree(src: &Path, dest: &Path, dest_root: &Path) -> io::Result<usize> {
    fs::create_dir_all(dest)?;
    let mut copied = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let path = entry.path();
        let target = dest.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            if fs::canonicalize(&path)? == dest_root {
                debug!(dir = %path.display(), "Skipping export directory");
                continue;
            }
            copied += copy_tree(&path, &target, dest_root)?;
        } else if !is_tmx(&path) {
            debug!(from = %path.display(), to = %target.display(), "Copying asset");
            fs::copy(&path, &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Writes a map and its tile-set assets to an export directory
pub struct TmxWriter {
    /// Directory holding the tile-set assets and `template.tmx`
    asset_dir: PathBuf,
    /// Directory the export is written to (created if missing)
    export_dir: PathBuf,
}

impl TmxWriter {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(asset_dir: P, export_dir: Q) -> Self {
        Self {
            asset_dir: asset_dir.as_ref().to_path_buf(),
            export_dir: export_dir.as_ref().to_path_buf(),
        }
    }

    /// Asset directory for a template under a root of tile-set folders.
    pub fn for_template<P: AsRef<Path>, Q: AsRef<Path>>(
        assets_root: P,
        template: &TmxTemplate,
        export_dir: Q,
    ) -> Self {
        Self::new(assets_root.as_ref().join(&template.name), export_dir)
    }

    pub fn output_path(&self) -> PathBuf {
        self.export_dir.join(OUTPUT_FILE)
    }

    /// Export the map: copy assets, fill the document template and write it.
    /// Returns the path of the written document.
    pub fn write(&self, map: &Map, template: &TmxTemplate) -> Result<PathBuf, ExportError> {
        let copied = copy_assets(&self.asset_dir, &self.export_dir)?;
        info!(files = copied, dir = %self.export_dir.display(), "Copied tile-set assets");

        let export = populate(map, template)?;
        let template_text = fs::read_to_string(self.asset_dir.join(TEMPLATE_FILE))?;
        let document = render_document(&template_text, &export)?;

        let path = self.output_path();
        fs::write(&path, document)?;
        info!(path = %path.display(), "Wrote TMX map");
        Ok(path)
    }
}
