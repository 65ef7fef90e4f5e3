//! Level data source: Tiled-format JSON maps.
//!
//! Only the parts of the Tiled format the level needs are read:
//!
//! | JSON                        | Parsed into                     |
//! |-----------------------------|---------------------------------|
//! | `tilelayer` layers          | [`TileLayer`] (indices, `-1` = empty) |
//! | `objectgroup` layers        | `Vec<`[`PlacementRecord`]`>` keyed by layer name |
//! | `width`/`height`/`tile*`    | map geometry on [`LevelData`]   |
//!
//! Everything else (tilesets, image layers, custom properties on the map) is
//! ignored.  Object fields other than `name`, `x` and `y` are preserved
//! untouched in [`PlacementRecord::payload`].
//!
//! The reference level ships inside the binary; [`load_level_data`] prefers a
//! file on disk when one is present and valid.

use std::collections::HashMap;

use bevy::prelude::*;
use serde::Deserialize;

use crate::config::LevelConfig;
use crate::constants::EMPTY_TILE;
use crate::error::{LevelError, LevelResult};

/// The reference level, compiled in.
pub const EMBEDDED_LEVEL_JSON: &str = include_str!("../../assets/levels/level.json");

/// Tiled stores flip/rotation flags in the top bits of every gid.
const GID_FLAG_MASK: u32 = 0x1FFF_FFFF;

// ── Parsed model ──────────────────────────────────────────────────────────────

/// One object placed in an object layer.  Immutable once read.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementRecord {
    /// Identifier of the placed thing, e.g. `"lettuce"`.
    pub name: String,
    /// Raw (unscaled) position in map pixels, y pointing down.
    pub position: Vec2,
    /// Every other field of the Tiled object, uninterpreted.
    pub payload: serde_json::Value,
}

/// A rectangular grid of tile indices.
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayer {
    pub name: String,
    pub width: u32,
    pub height: u32,
    /// Row-major tile indices; [`EMPTY_TILE`] marks "no tile, no collision".
    pub tiles: Vec<i32>,
}

/// A horizontal run of consecutive non-empty tiles in one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRun {
    pub row: u32,
    pub start_col: u32,
    pub len: u32,
}

impl TileLayer {
    /// Tile index at (`col`, `row`), or [`EMPTY_TILE`] outside the layer.
    pub fn tile(&self, col: u32, row: u32) -> i32 {
        if col >= self.width || row >= self.height {
            return EMPTY_TILE;
        }
        let index = row as usize * self.width as usize + col as usize;
        self.tiles
            .get(index)
            .copied()
            .unwrap_or(EMPTY_TILE)
    }

    /// Number of tiles that are not [`EMPTY_TILE`].
    pub fn solid_count(&self) -> usize {
        self.tiles.iter().filter(|&&t| t != EMPTY_TILE).count()
    }

    /// Merge every row's consecutive non-empty tiles into runs.
    ///
    /// One collider per run instead of per tile keeps bodies from catching on
    /// the seams between neighbouring tiles.
    pub fn solid_runs(&self) -> Vec<TileRun> {
        let mut runs = Vec::new();
        for row in 0..self.height {
            let mut current: Option<TileRun> = None;
            for col in 0..self.width {
                if self.tile(col, row) != EMPTY_TILE {
                    match current.as_mut() {
                        Some(run) => run.len += 1,
                        None => {
                            current = Some(TileRun {
                                row,
                                start_col: col,
                                len: 1,
                            })
                        }
                    }
                } else if let Some(run) = current.take() {
                    runs.push(run);
                }
            }
            if let Some(run) = current.take() {
                runs.push(run);
            }
        }
        runs
    }
}

/// A fully parsed level.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct LevelData {
    /// Map width in tiles.
    pub width: u32,
    /// Map height in tiles.
    pub height: u32,
    pub tile_width: u32,
    pub tile_height: u32,
    pub tile_layers: Vec<TileLayer>,
    /// Object layers by name, each in file order.
    pub object_layers: HashMap<String, Vec<PlacementRecord>>,
}

impl LevelData {
    /// Parse a Tiled JSON map.
    pub fn from_tiled_json(json: &str) -> LevelResult<Self> {
        let raw: RawMap = serde_json::from_str(json)?;
        let invalid = || LevelError::InvalidDimensions {
            width: raw.width,
            height: raw.height,
            tile_width: raw.tilewidth,
            tile_height: raw.tileheight,
        };
        if raw.width == 0 || raw.height == 0 || raw.tilewidth == 0 || raw.tileheight == 0 {
            return Err(invalid());
        }
        // Tile count and pixel size must both fit in a u32.
        let expected = raw.width.checked_mul(raw.height).ok_or_else(invalid)? as usize;
        raw.width.checked_mul(raw.tilewidth).ok_or_else(invalid)?;
        raw.height.checked_mul(raw.tileheight).ok_or_else(invalid)?;
        let mut level = LevelData {
            width: raw.width,
            height: raw.height,
            tile_width: raw.tilewidth,
            tile_height: raw.tileheight,
            ..Default::default()
        };

        for layer in raw.layers {
            match layer {
                RawLayer::Tiles { name, data } => {
                    if data.len() != expected {
                        return Err(LevelError::TileLayerSize {
                            layer: name,
                            got: data.len(),
                            expected,
                        });
                    }
                    level.tile_layers.push(TileLayer {
                        name,
                        width: raw.width,
                        height: raw.height,
                        tiles: data.into_iter().map(gid_to_index).collect(),
                    });
                }
                RawLayer::Objects { name, objects } => {
                    let records = objects
                        .into_iter()
                        .map(|o| PlacementRecord {
                            name: o.name,
                            position: Vec2::new(o.x, o.y),
                            payload: serde_json::Value::Object(o.rest),
                        })
                        .collect();
                    level.object_layers.insert(name, records);
                }
                RawLayer::Other => {}
            }
        }

        Ok(level)
    }

    /// Read and parse a level file from disk.
    pub fn load(path: &str) -> LevelResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_tiled_json(&contents)
    }

    /// The reference level compiled into the binary.
    pub fn embedded() -> LevelResult<Self> {
        Self::from_tiled_json(EMBEDDED_LEVEL_JSON)
    }

    /// Placements of the named object layer; empty when the layer is absent.
    pub fn placements(&self, layer: &str) -> &[PlacementRecord] {
        self.object_layers
            .get(layer)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn tile_layer(&self, name: &str) -> Option<&TileLayer> {
        self.tile_layers.iter().find(|l| l.name == name)
    }

    /// Unscaled map size in pixels.
    pub fn pixel_size(&self) -> Vec2 {
        Vec2::new(
            self.width as f32 * self.tile_width as f32,
            self.height as f32 * self.tile_height as f32,
        )
    }
}

/// Tiled gid → tile index.  gid 0 (no tile) becomes [`EMPTY_TILE`].
fn gid_to_index(gid: u32) -> i32 {
    let gid = gid & GID_FLAG_MASK;
    if gid == 0 {
        EMPTY_TILE
    } else {
        (gid - 1) as i32
    }
}

// ── Raw JSON shape ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RawMap {
    width: u32,
    height: u32,
    tilewidth: u32,
    tileheight: u32,
    #[serde(default)]
    layers: Vec<RawLayer>,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum RawLayer {
    #[serde(rename = "tilelayer")]
    Tiles {
        name: String,
        #[serde(default)]
        data: Vec<u32>,
    },
    #[serde(rename = "objectgroup")]
    Objects {
        name: String,
        #[serde(default)]
        objects: Vec<RawObject>,
    },
    #[serde(other)]
    Other,
}

#[derive(Deserialize)]
struct RawObject {
    #[serde(default)]
    name: String,
    #[serde(default)]
    x: f32,
    #[serde(default)]
    y: f32,
    #[serde(flatten)]
    rest: serde_json::Map<String, serde_json::Value>,
}

// ── Startup ───────────────────────────────────────────────────────────────────

/// Startup system: load the level named by `config.level_path`, falling back
/// to the embedded reference level.
///
/// Never fails: an unreadable disk file and an unparsable embedded level both
/// degrade to the next option, ending with an empty level.
pub fn load_level_data(mut commands: Commands, config: Res<LevelConfig>) {
    let path = config.level_path.as_str();
    let level = match LevelData::load(path) {
        Ok(level) => {
            println!("✓ Loaded level from {path}");
            level
        }
        Err(LevelError::Io { .. }) => {
            println!("ℹ No {path} found; using embedded level");
            embedded_or_empty()
        }
        Err(e) => {
            eprintln!("⚠ {e}; using embedded level");
            embedded_or_empty()
        }
    };
    info!(
        "level: {}×{} tiles, {} object layer(s)",
        level.width,
        level.height,
        level.object_layers.len()
    );
    commands.insert_resource(level);
}

fn embedded_or_empty() -> LevelData {
    LevelData::embedded().unwrap_or_else(|e| {
        error!("embedded level is invalid: {e}");
        LevelData::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_MAP: &str = r#"{
        "width": 4, "height": 2, "tilewidth": 16, "tileheight": 16,
        "layers": [
            { "type": "tilelayer", "name": "Platform", "data": [0, 3, 3, 0, 1, 1, 0, 1] },
            { "type": "imagelayer", "name": "Sky", "image": "sky.png" },
            { "type": "objectgroup", "name": "Food", "objects": [
                { "name": "lettuce", "x": 10, "y": 20, "gid": 41, "properties": [{ "name": "bonus", "value": 3 }] },
                { "name": "shells", "x": 30.5, "y": 4 }
            ] }
        ]
    }"#;

    #[test]
    fn parses_layers_and_placements() {
        let level = LevelData::from_tiled_json(SMALL_MAP).expect("valid map");
        assert_eq!(level.pixel_size(), Vec2::new(64.0, 32.0));

        let platform = level.tile_layer("Platform").expect("platform layer");
        assert_eq!(platform.tiles, vec![-1, 2, 2, -1, 0, 0, -1, 0]);
        assert_eq!(platform.solid_count(), 5);

        let food = level.placements("Food");
        assert_eq!(food.len(), 2);
        assert_eq!(food[0].name, "lettuce");
        assert_eq!(food[0].position, Vec2::new(10.0, 20.0));
        assert_eq!(food[0].payload["gid"], 41);
        assert_eq!(food[1].position, Vec2::new(30.5, 4.0));
    }

    #[test]
    fn missing_layer_has_no_placements() {
        let level = LevelData::from_tiled_json(SMALL_MAP).expect("valid map");
        assert!(level.placements("Enemies").is_empty());
        assert!(level.tile_layer("Background").is_none());
    }

    #[test]
    fn solid_runs_merge_adjacent_tiles_per_row() {
        let level = LevelData::from_tiled_json(SMALL_MAP).expect("valid map");
        let runs = level.tile_layer("Platform").unwrap().solid_runs();
        assert_eq!(
            runs,
            vec![
                TileRun { row: 0, start_col: 1, len: 2 },
                TileRun { row: 1, start_col: 0, len: 2 },
                TileRun { row: 1, start_col: 3, len: 1 },
            ]
        );
    }

    #[test]
    fn flipped_gids_keep_their_tile_index() {
        assert_eq!(gid_to_index(0x8000_0003), 2);
        assert_eq!(gid_to_index(0), EMPTY_TILE);
    }

    #[test]
    fn tile_layer_size_mismatch_is_an_error() {
        let json = r#"{ "width": 2, "height": 2, "tilewidth": 8, "tileheight": 8,
            "layers": [{ "type": "tilelayer", "name": "Platform", "data": [1, 1, 1] }] }"#;
        match LevelData::from_tiled_json(json) {
            Err(LevelError::TileLayerSize { got, expected, .. }) => {
                assert_eq!(got, 3);
                assert_eq!(expected, 4);
            }
            other => panic!("expected TileLayerSize, got {other:?}"),
        }
    }

    #[test]
    fn zero_sized_map_is_rejected() {
        let json = r#"{ "width": 0, "height": 2, "tilewidth": 8, "tileheight": 8 }"#;
        assert!(matches!(
            LevelData::from_tiled_json(json),
            Err(LevelError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn oversized_map_is_rejected() {
        let json = r#"{ "width": 100000, "height": 100000, "tilewidth": 16, "tileheight": 16 }"#;
        assert!(matches!(
            LevelData::from_tiled_json(json),
            Err(LevelError::InvalidDimensions { .. })
        ));

        let json = r#"{ "width": 2, "height": 2, "tilewidth": 4000000000, "tileheight": 16 }"#;
        assert!(matches!(
            LevelData::from_tiled_json(json),
            Err(LevelError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn garbage_is_a_parse_error() {
        assert!(matches!(
            LevelData::from_tiled_json("not json"),
            Err(LevelError::Parse(_))
        ));
    }

    #[test]
    fn embedded_level_has_eight_food_items() {
        let level = LevelData::embedded().expect("embedded level parses");
        let names: Vec<&str> = level
            .placements("Food")
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names.len(), 8);
        assert_eq!(names.first(), Some(&"lettuce"));
        assert_eq!(names.last(), Some(&"shells"));
        assert!(level.tile_layer("Platform").is_some());
        assert!(level.tile_layer("Background").is_some());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            LevelData::load("definitely/not/here.json"),
            Err(LevelError::Io { .. })
        ));
    }
}
