pub mod constants;
pub mod geometry;
pub mod grid;
pub mod level;

pub use constants::{
    AREA_EXTENTS, BASE_TILE_SIZE, BRAZIL_ALBERS_CRS, MARCO_ZERO_X, MARCO_ZERO_Y, MIN_TILE_SIZE,
    WGS84_CRS,
};
pub use geometry::{create_square, create_square_from_rect};
pub use grid::TileGrid;
pub use level::tile_size_for_level;
