//! Gallery settings
//!
//! Presentation knobs for the terminal showcase. None of these change what a
//! component renders for a given set of props; they only pick the props the
//! gallery passes.

use serde::Deserialize;

use crate::components::ItemDecoration;
use crate::style::Size;

#[derive(Debug, Clone)]
pub struct GalleryConfig {
    /// Size used for components the gallery does not size explicitly
    pub default_size: Size,

    /// Per-item list decoration ("none" or "marker")
    pub list_decoration: ItemDecoration,

    /// Show the logs panel under the gallery
    pub show_logs: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            default_size: Size::Medium,
            list_decoration: ItemDecoration::None,
            show_logs: true,
        }
    }
}

/// Gallery settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileGallery {
    pub default_size: Option<String>,
    pub list_decoration: Option<String>,
    pub show_logs: Option<bool>,
}

impl GalleryConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileGallery>, warnings: &mut Vec<String>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let default_size = match file.default_size {
            Some(s) => Size::parse(&s).unwrap_or_else(|| {
                warnings.push(format!("unknown gallery.default_size {s:?}, using \"medium\""));
                defaults.default_size
            }),
            None => defaults.default_size,
        };

        let list_decoration = match file.list_decoration {
            Some(s) => ItemDecoration::parse(&s).unwrap_or_else(|| {
                warnings.push(format!("unknown gallery.list_decoration {s:?}, using \"none\""));
                ItemDecoration::None
            }),
            None => defaults.list_decoration,
        };

        Self {
            default_size,
            list_decoration,
            show_logs: file.show_logs.unwrap_or(defaults.show_logs),
        }
    }
}
