//! Tile definition schema. Solidity drives collision/raycast; the sprite
//! cells are read-only data for the renderer's draw submission.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct TileDef {
    pub name: String,
    #[serde(default)]
    pub is_solid: bool,
    /// Sprite-sheet cell for the floor quad.
    #[serde(default)]
    pub floor_cell: [u32; 2],
    /// Sprite-sheet cell for wall faces.
    #[serde(default)]
    pub wall_cell: [u32; 2],
}
