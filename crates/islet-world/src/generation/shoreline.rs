use islet_blocks::Block;
use islet_chunk::VoxelGrid;

use crate::worldgen::{SHORE_RADIUS, WATER_LEVEL};

/// Turns exposed dirt and grass next to water into sand.
///
/// Only the two layers `WATER_LEVEL - 1` and `WATER_LEVEL` are scanned. A
/// voxel is converted when the cell above it is air or water and some water
/// voxel on the same layer lies within `SHORE_RADIUS` in x and z. Returns the
/// number of voxels converted.
pub fn apply_shoreline(grid: &mut VoxelGrid) -> usize {
    let size = grid.size();
    let mut converted = 0;
    for y in (WATER_LEVEL - 1)..=WATER_LEVEL {
        if y >= grid.height() {
            break;
        }
        // The top layer has nothing above it to be exposed to.
        if y + 1 >= grid.height() {
            continue;
        }
        for x in 0..size {
            for z in 0..size {
                let id = grid.get(y, x, z);
                if id != Block::Grass && id != Block::Dirt {
                    continue;
                }
                let above = grid.get(y + 1, x, z);
                if above != Block::Air && above != Block::Water {
                    continue;
                }
                if water_nearby(grid, y, x, z) {
                    grid.set(y, x, z, Block::Sand);
                    converted += 1;
                }
            }
        }
    }
    converted
}

// PERF: 5x5 probe per candidate; fine for a single full-volume pass.
fn water_nearby(grid: &VoxelGrid, y: usize, x: usize, z: usize) -> bool {
    let (y, x, z) = (y as i32, x as i32, z as i32);
    for bx in -SHORE_RADIUS..=SHORE_RADIUS {
        for bz in -SHORE_RADIUS..=SHORE_RADIUS {
            if grid.get_checked(y, x + bx, z + bz) == Some(Block::Water) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pond() -> VoxelGrid {
        // Dirt floor at the water level with a single water cell in the middle.
        let mut grid = VoxelGrid::with_extent(9, 10).unwrap();
        grid.fill_space(0, WATER_LEVEL, 0, 8, WATER_LEVEL, 8, Block::Grass);
        grid.set(WATER_LEVEL, 4, 4, Block::Water);
        grid
    }

    #[test]
    fn beach_band_is_two_wide() {
        let mut grid = pond();
        let converted = apply_shoreline(&mut grid);
        assert_eq!(converted, 24);
        assert_eq!(grid.get(WATER_LEVEL, 2, 2), Block::Sand);
        assert_eq!(grid.get(WATER_LEVEL, 6, 6), Block::Sand);
        assert_eq!(grid.get(WATER_LEVEL, 1, 4), Block::Grass);
        assert_eq!(grid.get(WATER_LEVEL, 4, 4), Block::Water);
    }

    #[test]
    fn covered_ground_stays() {
        let mut grid = pond();
        grid.set(WATER_LEVEL + 1, 3, 3, Block::Log);
        apply_shoreline(&mut grid);
        assert_eq!(grid.get(WATER_LEVEL, 3, 3), Block::Grass);
    }

    #[test]
    fn other_layers_untouched() {
        let mut grid = VoxelGrid::with_extent(9, 10).unwrap();
        let y = WATER_LEVEL + 1;
        grid.fill_space(0, y, 0, 8, y, 8, Block::Dirt);
        grid.set(y, 4, 4, Block::Water);
        assert_eq!(apply_shoreline(&mut grid), 0);
    }

    #[test]
    fn stone_is_not_beach() {
        let mut grid = VoxelGrid::with_extent(9, 10).unwrap();
        let y = WATER_LEVEL - 1;
        grid.fill_space(0, y, 0, 8, y, 8, Block::Stone);
        grid.set(y, 4, 4, Block::Water);
        assert_eq!(apply_shoreline(&mut grid), 0);
    }

    #[test]
    fn water_below_does_not_count() {
        let mut grid = VoxelGrid::with_extent(9, 10).unwrap();
        grid.fill_space(0, WATER_LEVEL - 1, 0, 8, WATER_LEVEL - 1, 8, Block::Water);
        grid.fill_space(0, WATER_LEVEL, 0, 8, WATER_LEVEL, 8, Block::Grass);
        assert_eq!(apply_shoreline(&mut grid), 0);
    }
}
