//! Core data structures for the collider brush
//!
//! This crate provides the tile map types the brush paints on:
//! - `ColliderShape` - Collider shape mode of a cell (None, Grid, Sprite)
//! - `CellCoord` - Column, row and layer index of a cell
//! - `Level` - A map with tile layers and per-cell collider shapes
//! - `Tileset` - Tile definitions shared by every placed instance
//! - `TileMap` / `TileDefinitions` - Traits the brush reads and writes through

mod cell;
mod collider;
mod layer;
mod level;
mod map;
mod tileset;

pub use cell::{CellCoord, TileId, TileRef};
pub use collider::ColliderShape;
pub use layer::{tile_index, Layer, LayerData, LayerType, OCCUPIED_CELL};
pub use level::Level;
pub use map::{TileDefinitions, TileMap};
pub use tileset::{TileProperties, Tileset};
