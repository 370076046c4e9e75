pub mod feature;
pub mod indexer;
pub mod tile;

pub use feature::{build_feature_collection, build_tile_feature};
pub use indexer::TileIndexer;
pub use tile::Tile;
