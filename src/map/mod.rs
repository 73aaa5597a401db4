pub mod engine;
pub mod handle;
pub mod local_tiles;
pub mod places;
pub mod provider;
pub mod tile_engine;
