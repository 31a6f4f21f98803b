use std::fmt;

use serde::{Deserialize, Serialize};

use crate::api::error::LevelError;

/// Code of a cell with nothing in it.
pub const EMPTY_CELL: &str = "-1";

/// The layers a level layout is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Terrain,
    Grass,
    Crates,
    Coins,
    FgPalms,
    BgPalms,
    Enemies,
    Constraints,
    Player,
}

impl LayerKind {
    pub const ALL: [LayerKind; 9] = [
        LayerKind::Terrain,
        LayerKind::Grass,
        LayerKind::Crates,
        LayerKind::Coins,
        LayerKind::FgPalms,
        LayerKind::BgPalms,
        LayerKind::Enemies,
        LayerKind::Constraints,
        LayerKind::Player,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LayerKind::Terrain => "terrain",
            LayerKind::Grass => "grass",
            LayerKind::Crates => "crates",
            LayerKind::Coins => "coins",
            LayerKind::FgPalms => "fg palms",
            LayerKind::BgPalms => "bg palms",
            LayerKind::Enemies => "enemies",
            LayerKind::Constraints => "constraints",
            LayerKind::Player => "player",
        }
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where level layouts come from: one grid of cell codes per layer,
/// indexed `[row][col]`. A missing layer is treated as empty.
pub trait LayoutSource {
    fn layer(&self, layer: LayerKind) -> Option<&[Vec<String>]>;
}

/// A level layout deserialized from JSON, one key per layer.
///
/// ```json
/// { "terrain": [["-1", "-1"], ["0", "1"]], "player": [["0", "-1"], ["-1", "-1"]] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelData {
    pub terrain: Vec<Vec<String>>,
    pub grass: Vec<Vec<String>>,
    pub crates: Vec<Vec<String>>,
    pub coins: Vec<Vec<String>>,
    #[serde(rename = "fg palms")]
    pub fg_palms: Vec<Vec<String>>,
    #[serde(rename = "bg palms")]
    pub bg_palms: Vec<Vec<String>>,
    pub enemies: Vec<Vec<String>>,
    pub constraints: Vec<Vec<String>>,
    pub player: Vec<Vec<String>>,
}

impl LevelData {
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn layer_mut(&mut self, layer: LayerKind) -> &mut Vec<Vec<String>> {
        match layer {
            LayerKind::Terrain => &mut self.terrain,
            LayerKind::Grass => &mut self.grass,
            LayerKind::Crates => &mut self.crates,
            LayerKind::Coins => &mut self.coins,
            LayerKind::FgPalms => &mut self.fg_palms,
            LayerKind::BgPalms => &mut self.bg_palms,
            LayerKind::Enemies => &mut self.enemies,
            LayerKind::Constraints => &mut self.constraints,
            LayerKind::Player => &mut self.player,
        }
    }

    /// Set one cell, growing the grid with empty cells as needed.
    pub fn set(&mut self, layer: LayerKind, row: usize, col: usize, code: &str) {
        let grid = self.layer_mut(layer);
        if grid.len() <= row {
            grid.resize_with(row + 1, Vec::new);
        }
        let cells = &mut grid[row];
        if cells.len() <= col {
            cells.resize(col + 1, EMPTY_CELL.to_string());
        }
        cells[col] = code.to_string();
    }
}

impl LayoutSource for LevelData {
    fn layer(&self, layer: LayerKind) -> Option<&[Vec<String>]> {
        let grid = match layer {
            LayerKind::Terrain => &self.terrain,
            LayerKind::Grass => &self.grass,
            LayerKind::Crates => &self.crates,
            LayerKind::Coins => &self.coins,
            LayerKind::FgPalms => &self.fg_palms,
            LayerKind::BgPalms => &self.bg_palms,
            LayerKind::Enemies => &self.enemies,
            LayerKind::Constraints => &self.constraints,
            LayerKind::Player => &self.player,
        };
        Some(grid.as_slice())
    }
}
