use crate::core::constants::{BASE_TILE_SIZE, MIN_TILE_SIZE};
use crate::error::BrGridError;

/// Returns the tile edge length in meters for a resolution level.
///
/// The size halves with every level, starting from [`BASE_TILE_SIZE`] at
/// level 0, and is clamped below at [`MIN_TILE_SIZE`]. Beyond the clamp
/// crossover all levels share the same size, so callers must not assume the
/// sequence is strictly decreasing.
///
/// # Example
/// ```
/// use brgrid_rs::tile_size_for_level;
///
/// # fn main() -> Result<(), brgrid_rs::BrGridError> {
/// assert_eq!(tile_size_for_level(0)?, 100_000.0);
/// assert_eq!(tile_size_for_level(1)?, 50_000.0);
/// # Ok(())
/// # }
/// ```
pub fn tile_size_for_level(level: i32) -> Result<f64, BrGridError> {
    if level < 0 {
        return Err(BrGridError::InvalidLevel(level));
    }

    let size = BASE_TILE_SIZE / 2f64.powi(level);
    Ok(if size < MIN_TILE_SIZE { MIN_TILE_SIZE } else { size })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_halves_per_level() -> Result<(), BrGridError> {
        assert_eq!(tile_size_for_level(0)?, 100_000.0);
        assert_eq!(tile_size_for_level(1)?, 50_000.0);
        assert_eq!(tile_size_for_level(2)?, 25_000.0);
        assert_eq!(tile_size_for_level(5)?, 3_125.0);
        Ok(())
    }

    #[test]
    fn test_clamp_crossover() -> Result<(), BrGridError> {
        // Level 16 is the last level above the 1 m floor for a 100 km base.
        assert_eq!(tile_size_for_level(16)?, 100_000.0 / 65_536.0);
        assert!(tile_size_for_level(16)? > MIN_TILE_SIZE);
        assert_eq!(tile_size_for_level(17)?, MIN_TILE_SIZE);
        assert_eq!(tile_size_for_level(18)?, MIN_TILE_SIZE);
        assert_eq!(tile_size_for_level(30)?, MIN_TILE_SIZE);
        Ok(())
    }

    #[test]
    fn test_negative_level_is_rejected() {
        assert!(matches!(
            tile_size_for_level(-1),
            Err(BrGridError::InvalidLevel(-1))
        ));
        assert!(matches!(
            tile_size_for_level(-7),
            Err(BrGridError::InvalidLevel(-7))
        ));
    }
}
