//! Layered tile maps with visible-range culling

use std::collections::HashMap;

use ember_core::{Color, EmberError, Result, Surface};
use serde::{Deserialize, Serialize};

/// A grid of tile ids, layer -> row -> col. Id 0 is the empty tile.
///
/// Maps are data: game modules keep them in TOML documents and load them
/// with [`from_toml_str`](Self::from_toml_str).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileMap {
    /// Width in tiles
    pub width: usize,
    /// Height in tiles
    pub height: usize,
    /// Tile side length in world units
    pub tile_size: f32,
    pub layers: Vec<Vec<Vec<u16>>>,
}

impl TileMap {
    /// Parse and validate a map from a TOML document
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let map: TileMap = toml::from_str(s)?;
        map.validate()?;
        Ok(map)
    }

    /// Check that every layer is exactly height rows of width columns
    pub fn validate(&self) -> Result<()> {
        if self.tile_size <= 0.0 {
            return Err(EmberError::ValueOutOfRange {
                field: "tile_size".into(),
                min: f64::MIN_POSITIVE,
                max: f64::MAX,
                value: self.tile_size as f64,
            });
        }
        for (i, layer) in self.layers.iter().enumerate() {
            if layer.len() != self.height {
                return Err(EmberError::ValidationError(format!(
                    "layer {i} has {} rows, expected {}",
                    layer.len(),
                    self.height
                )));
            }
            for (r, row) in layer.iter().enumerate() {
                if row.len() != self.width {
                    return Err(EmberError::ValidationError(format!(
                        "layer {i} row {r} has {} columns, expected {}",
                        row.len(),
                        self.width
                    )));
                }
            }
        }
        Ok(())
    }

    /// Tile id at a world coordinate; 0 outside the map or layer range
    pub fn tile_at(&self, x: f32, y: f32, layer: usize) -> u16 {
        let col = (x / self.tile_size).floor();
        let row = (y / self.tile_size).floor();
        if col < 0.0 || row < 0.0 {
            return 0;
        }
        let (col, row) = (col as usize, row as usize);
        self.layers
            .get(layer)
            .and_then(|l| l.get(row))
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(0)
    }
}

/// Draw every layer of the visible tile range, one filled rect per
/// non-empty tile. Tiles outside the camera rectangle are culled; ids with
/// no palette entry are skipped.
pub fn draw_layers(
    surface: &mut dyn Surface,
    map: &TileMap,
    palette: &HashMap<u16, Color>,
    cam_x: f32,
    cam_y: f32,
    view_w: f32,
    view_h: f32,
) {
    let tile_size = map.tile_size;
    let start_col = ((cam_x / tile_size).floor().max(0.0)) as usize;
    let end_col = (((cam_x + view_w) / tile_size).ceil() as usize).min(map.width);
    let start_row = ((cam_y / tile_size).floor().max(0.0)) as usize;
    let end_row = (((cam_y + view_h) / tile_size).ceil() as usize).min(map.height);

    for layer in &map.layers {
        for r in start_row..end_row {
            for c in start_col..end_col {
                let tile = layer[r][c];
                if tile == 0 {
                    continue;
                }
                let Some(&color) = palette.get(&tile) else {
                    continue;
                };
                surface.fill_rect(
                    c as f32 * tile_size,
                    r as f32 * tile_size,
                    tile_size,
                    tile_size,
                    color,
                );
            }
        }
    }
}
