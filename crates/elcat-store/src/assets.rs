//! # SVG Asset Bundle
//!
//! Serves SVG files from a fixed directory for the viewer. This path is
//! best-effort: the HTTP layer never fails a request because one asset is
//! missing or unreadable. It substitutes [`placeholder_svg`] instead, so
//! the viewer still has something to draw.
//!
//! [`AssetBundle::fetch`] keeps the precise outcome (`NotFound`,
//! `InvalidPath`, `FileRead`) for callers that need it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use elcat_core::safe_path;
use elcat_core::{ReadError, ScanError};

/// Extension appended to requested names that lack it.
pub const SVG_EXTENSION: &str = ".svg";

/// One entry of the `/api/svgs` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SvgAsset {
    /// Filename, including the `.svg` extension.
    pub name: String,
    /// SVG markup.
    pub data: String,
}

/// The SVG asset directory.
#[derive(Debug, Clone)]
pub struct AssetBundle {
    dir: PathBuf,
}

impl AssetBundle {
    /// Create a bundle over `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The asset directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Fetch one asset, appending `.svg` to `name` if missing.
    pub async fn fetch(&self, name: &str) -> Result<SvgAsset, ReadError> {
        let name = with_extension(name);
        let path = safe_path::resolve(&self.dir, &name)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(SvgAsset {
                data: String::from_utf8_lossy(&bytes).into_owned(),
                name,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(ReadError::NotFound(name)),
            Err(source) => Err(ReadError::FileRead { file: name, source }),
        }
    }

    /// Fetch one asset, or a placeholder describing why it failed.
    pub async fn fetch_or_placeholder(&self, name: &str) -> SvgAsset {
        match self.fetch(name).await {
            Ok(asset) => asset,
            Err(e) => {
                let name = with_extension(name);
                tracing::debug!(asset = %name, error = %e, "serving placeholder svg");
                placeholder_svg(&name, &e.to_string())
            }
        }
    }

    /// Every `*.svg` file in the asset directory, sorted by name.
    /// Subdirectories are skipped even when their name ends in `.svg`.
    ///
    /// Individual files that fail to read become placeholders.
    ///
    /// # Errors
    ///
    /// Fails only when the directory itself cannot be listed.
    pub async fn fetch_all(&self) -> Result<Vec<SvgAsset>, ScanError> {
        let unreadable = |source: std::io::Error| ScanError::DirectoryUnreadable {
            path: self.dir.clone(),
            source,
        };
        let mut listing = tokio::fs::read_dir(&self.dir).await.map_err(unreadable)?;

        let mut names = Vec::new();
        while let Some(entry) = listing.next_entry().await.map_err(unreadable)? {
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if !name.ends_with(SVG_EXTENSION) {
                continue;
            }
            // Follows symlinks. An entry that cannot be inspected is kept and
            // surfaces as a placeholder.
            if let Ok(metadata) = tokio::fs::metadata(entry.path()).await {
                if metadata.is_dir() {
                    continue;
                }
            }
            names.push(name);
        }
        names.sort();

        let mut assets = Vec::with_capacity(names.len());
        for name in &names {
            assets.push(self.fetch_or_placeholder(name).await);
        }
        Ok(assets)
    }
}

fn with_extension(name: &str) -> String {
    if name.ends_with(SVG_EXTENSION) {
        name.to_string()
    } else {
        format!("{name}{SVG_EXTENSION}")
    }
}

fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

/// Generate the placeholder shown for an asset that could not be served.
///
/// Both strings are XML-escaped; `name` comes from the query string.
pub fn placeholder_svg(name: &str, message: &str) -> SvgAsset {
    let data = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
		<rect width="100" height="100" fill="red" opacity="0.3"/>
		<text x="50" y="50" font-family="Arial" font-size="10" text-anchor="middle" fill="black">
			<tspan x="50" dy="-1em">{}</tspan>
			<tspan x="50" dy="1.2em">Not Found</tspan>
			<tspan x="50" dy="1.2em">{}</tspan>
		</text>
	</svg>"#,
        escape_xml(name),
        escape_xml(message)
    );
    SvgAsset {
        name: name.to_string(),
        data,
    }
}
