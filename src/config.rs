//! Editor settings read from a TOML file.
//!
//! Every key is optional; missing keys fall back to the editor defaults
//! (Consolas 12 pt on A4 with 50 pt margins).
//!
//! ```toml
//! [font]
//! name = "Fira Mono"
//! size = 11
//!
//! [page]
//! size = "letter"
//! landscape = false
//! margin = 72
//! ```

use crate::error::{Result, TextPageError};
use crate::layout::PaginationConfig;
use crate::pagesize::{self, PageOrientation, PageSize};
use crate::units::Pt;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct EditorConfig {
    pub font: FontConfig,
    pub page: PageConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// The face the host editor displays with. Informational only: layout
    /// measures with [crate::layout::Monospace::courier] (or a [crate::Font]
    /// the host loads itself) and export always draws in Courier.
    pub name: String,
    pub size: Pt,
}

impl Default for FontConfig {
    fn default() -> Self {
        FontConfig {
            name: "Consolas".to_string(),
            size: Pt(12.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// A named paper size, see [pagesize::by_name]
    pub size: String,
    /// Explicit dimensions; when both are given they win over `size`
    pub width: Option<Pt>,
    pub height: Option<Pt>,
    pub landscape: bool,
    pub margin: Pt,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            size: "A4".to_string(),
            width: None,
            height: None,
            landscape: false,
            margin: Pt(50.0),
        }
    }
}

impl PageConfig {
    pub fn page_size(&self) -> Result<PageSize> {
        let size = match (self.width, self.height) {
            (Some(width), Some(height)) => (width, height),
            _ => pagesize::by_name(&self.size).ok_or_else(|| {
                TextPageError::InvalidConfig(format!("unknown page size {:?}", self.size))
            })?,
        };
        Ok(if self.landscape {
            size.landscape()
        } else {
            size
        })
    }
}

impl EditorConfig {
    pub fn from_toml_str(source: &str) -> Result<EditorConfig> {
        Ok(toml::from_str(source)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<EditorConfig> {
        let source = std::fs::read_to_string(path.as_ref())?;
        let config = EditorConfig::from_toml_str(&source)?;
        tracing::debug!(path = %path.as_ref().display(), ?config, "loaded editor config");
        Ok(config)
    }

    /// The validated layout settings described by this configuration
    pub fn pagination(&self) -> Result<PaginationConfig> {
        let config = PaginationConfig::new(self.page.page_size()?, self.page.margin, self.font.size);
        config.validate()?;
        Ok(config)
    }
}
