//! Header cell configuration.
//!
//! All fields have defaults, so a configuration file only needs to name the
//! values it changes:
//!
//! ```toml
//! resize_handle_width = 6.0
//! drag_drop_key = "orders-grid"
//!
//! [classes]
//! cell = "orders-cell"
//! ```

use std::path::Path;

use horizon_grid_core::logging::targets;
use horizon_grid_core::{PerfSpan, grid_debug, grid_warn};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{Column, ColumnKey, DEFAULT_MIN_WIDTH};

/// Class names applied to header cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    /// Base class of every cell.
    pub cell: String,
    /// Added to sortable columns.
    pub sortable: String,
    /// Added to resizable columns.
    pub resizable: String,
    /// Added to draggable columns.
    pub draggable: String,
    /// Added to frozen columns.
    pub frozen: String,
    /// Added to the last frozen column.
    pub frozen_last: String,
    /// Added while the cell is being dragged.
    pub dragging: String,
    /// Added while a drag hovers over the cell.
    pub over: String,
    /// Class of the resize handle element.
    pub resize_handle: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            cell: "hg-cell".into(),
            sortable: "hg-cell-sortable".into(),
            resizable: "hg-cell-resizable".into(),
            draggable: "hg-cell-draggable".into(),
            frozen: "hg-cell-frozen".into(),
            frozen_last: "hg-cell-frozen-last".into(),
            dragging: "hg-cell-dragging".into(),
            over: "hg-cell-drag-over".into(),
            resize_handle: "hg-resize-handle".into(),
        }
    }
}

/// Configuration shared by the header cells of one grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderCellConfig {
    /// Class names.
    pub classes: ClassNames,
    /// Thickness of the resize handle strip, in pixels.
    pub resize_handle_width: f32,
    /// Height of one header row, in pixels.
    pub header_row_height: f32,
    /// Minimum width for columns created from this configuration.
    pub default_min_width: f32,
    /// Payload format under which dragged column keys are stored.
    ///
    /// Grids on the same page should use distinct keys so columns cannot be
    /// dropped into a foreign grid.
    pub drag_drop_key: String,
}

impl Default for HeaderCellConfig {
    fn default() -> Self {
        Self {
            classes: ClassNames::default(),
            resize_handle_width: 10.0,
            header_row_height: 35.0,
            default_min_width: DEFAULT_MIN_WIDTH,
            drag_drop_key: "horizon-grid-column".into(),
        }
    }
}

impl HeaderCellConfig {
    /// Creates a column that uses this configuration's minimum width.
    pub fn column(&self, key: impl Into<ColumnKey>, idx: usize) -> Column {
        Column::new(key, idx).with_min_width(self.default_min_width)
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| Error::parse(e.to_string()))?;
        config.warn_on_suspicious_values();
        Ok(config)
    }

    /// Loads a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let _perf = PerfSpan::new("load_header_cell_config");
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_toml_str(&text)?;
        grid_debug!(targets::CONFIG, path = %path.display(), "loaded header cell configuration");
        Ok(config)
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::serialize(e.to_string()))
    }

    /// Writes the configuration to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = self.to_toml_string()?;
        std::fs::write(path, text).map_err(|e| Error::io(path, e))
    }

    fn warn_on_suspicious_values(&self) {
        if self.resize_handle_width <= 0.0 {
            grid_warn!(
                targets::CONFIG,
                width = self.resize_handle_width,
                "resize handle width is not positive; columns cannot be resized by pointer"
            );
        }
        if self.drag_drop_key.is_empty() {
            grid_warn!(
                targets::CONFIG,
                "empty drag_drop_key; column drops will be ignored"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HeaderCellConfig::default();
        assert_eq!(config.resize_handle_width, 10.0);
        assert_eq!(config.header_row_height, 35.0);
        assert_eq!(config.default_min_width, 50.0);
        assert_eq!(config.classes.cell, "hg-cell");
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config = HeaderCellConfig::from_toml_str(
            r#"
            resize_handle_width = 6.0

            [classes]
            cell = "orders-cell"
            "#,
        )
        .unwrap();

        assert_eq!(config.resize_handle_width, 6.0);
        assert_eq!(config.header_row_height, 35.0);
        assert_eq!(config.classes.cell, "orders-cell");
        assert_eq!(config.classes.sortable, "hg-cell-sortable");
    }

    #[test]
    fn test_column_uses_default_min_width() {
        let mut config = HeaderCellConfig::default();
        config.default_min_width = 72.0;
        let column = config.column("total", 4);
        assert_eq!(column.idx, 4);
        assert_eq!(column.clamp_width(10.0), 72.0);
    }

    #[test]
    fn test_empty_toml() {
        let config = HeaderCellConfig::from_toml_str("").unwrap();
        assert_eq!(config, HeaderCellConfig::default());
    }

    #[test]
    fn test_malformed_toml() {
        let err = HeaderCellConfig::from_toml_str("resize_handle_width = ").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));

        let err = HeaderCellConfig::from_toml_str("resize_handle_width = \"wide\"").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = HeaderCellConfig::default();
        config.drag_drop_key = "orders".into();
        config.classes.over = "drop-target".into();

        let text = config.to_toml_string().unwrap();
        assert_eq!(HeaderCellConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_load_and_save_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.toml");

        let mut config = HeaderCellConfig::default();
        config.header_row_height = 28.0;
        config.save(&path).unwrap();

        let loaded = HeaderCellConfig::load(&path).unwrap();
        assert_eq!(loaded.header_row_height, 28.0);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = HeaderCellConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
