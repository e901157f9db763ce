pub mod error;
pub mod sheet;
pub mod key;
pub mod table;
pub mod classify;

pub use classify::{classify, sample_tile, Classification, Duplicate};
pub use key::{Corner, Edge, SolidityKey};
pub use sheet::{Rgba, TileSheet, SOLID, TILE_SIZE};
pub use table::TileIndexTable;
