//! Tile grid built from a map definition's ASCII rows. Tiles are unit
//! squares on the XY plane; solid tiles extend from z=0 to z=1.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use data_runtime::{Defs, MapDef, TileDef};
use glam::{IVec2, Vec2, Vec3};

#[derive(Debug, Clone)]
pub struct Tile {
    pub solid: bool,
    pub def: Arc<TileDef>,
}

#[derive(Debug, Clone)]
pub struct TileGrid {
    dims: IVec2,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Build the grid from a map definition. Every row must be the same
    /// width and every glyph must appear in the legend.
    pub fn from_map_def(def: &MapDef, defs: &Defs) -> Result<Self> {
        let height = def.rows.len();
        if height == 0 {
            bail!("map {:?} has no rows", def.name);
        }
        let width = def.rows[0].chars().count();
        let mut tiles = Vec::with_capacity(width * height);
        // rows[0] is drawn at the top of the picture, so it maps to y = height-1.
        for (i, row) in def.rows.iter().enumerate().rev() {
            if row.chars().count() != width {
                bail!(
                    "map {:?} row {} is {} tiles wide, expected {}",
                    def.name,
                    i,
                    row.chars().count(),
                    width
                );
            }
            for glyph in row.chars() {
                let name = def
                    .legend
                    .get(&glyph.to_string())
                    .with_context(|| format!("map {:?}: glyph {:?} not in legend", def.name, glyph))?;
                let tile_def = defs
                    .tile(name)
                    .with_context(|| format!("map {:?}: unknown tile {:?}", def.name, name))?;
                tiles.push(Tile {
                    solid: tile_def.is_solid,
                    def: tile_def,
                });
            }
        }
        Ok(Self {
            dims: IVec2::new(width as i32, height as i32),
            tiles,
        })
    }

    #[inline]
    pub fn dims(&self) -> IVec2 {
        self.dims
    }

    pub fn tile(&self, coords: IVec2) -> Option<&Tile> {
        if coords.x < 0 || coords.y < 0 || coords.x >= self.dims.x || coords.y >= self.dims.y {
            return None;
        }
        self.tiles.get((coords.y * self.dims.x + coords.x) as usize)
    }

    /// Out-of-bounds coordinates are treated as open.
    #[inline]
    pub fn is_solid(&self, coords: IVec2) -> bool {
        self.tile(coords).map(|t| t.solid).unwrap_or(false)
    }

    /// Tile containing an XY position. Positions on a shared edge belong to
    /// the tile with the larger coordinate.
    #[inline]
    pub fn coords_for(&self, p: Vec2) -> IVec2 {
        IVec2::new(p.x.floor() as i32, p.y.floor() as i32)
    }

    /// XY axis-aligned bounds of a tile: `(min, max)` corners.
    #[inline]
    pub fn tile_bounds(&self, coords: IVec2) -> (Vec2, Vec2) {
        let min = Vec2::new(coords.x as f32, coords.y as f32);
        (min, min + Vec2::ONE)
    }

    /// True when `p` sits inside the map volume, padded by `tol` on every
    /// face. Used by ray casts to stop Z-plane hits outside the map.
    pub fn position_in_bounds(&self, p: Vec3, tol: f32) -> bool {
        p.x >= -tol
            && p.x <= self.dims.x as f32 + tol
            && p.y >= -tol
            && p.y <= self.dims.y as f32 + tol
            && p.z >= -tol
            && p.z <= 1.0 + tol
    }
}
