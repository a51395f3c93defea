use serde::{Deserialize, Serialize};

pub const STORAGE_KEY: &str = "columnsData";
pub const DEFAULT_COLUMN_SPAN: u32 = 10;
pub const RESIZE_MARGIN_PX: f64 = 10.0;
pub const FALLBACK_ROOT_FONT_PX: f64 = 16.0;
pub const DEFAULT_COLUMN_TITLE: &str = "New Column";

/// Board tunables. Created once by the app and shared through context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub storage_key: String,
    pub default_span: u32,
    /// Width of the resize zone at a column's right edge.
    pub resize_margin_px: f64,
    /// Grid unit used when the document font size cannot be read.
    pub fallback_root_font_px: f64,
    pub default_column_title: String,
    pub show_ghost: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            default_span: DEFAULT_COLUMN_SPAN,
            resize_margin_px: RESIZE_MARGIN_PX,
            fallback_root_font_px: FALLBACK_ROOT_FONT_PX,
            default_column_title: DEFAULT_COLUMN_TITLE.to_string(),
            show_ghost: true,
        }
    }
}
