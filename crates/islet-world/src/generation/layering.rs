use islet_blocks::Block;
use islet_chunk::VoxelGrid;

use super::heightmap::HeightField;
use crate::worldgen::WATER_LEVEL;

/// Stone, dirt, and grass bands for one column of height `height`.
///
/// Columns taller than 3 get stone up to `height - 3` with dirt above it;
/// shorter ones are all dirt. Grass caps the column only at or above the
/// water level. Nothing is written above the top layer of the grid.
pub fn layer_column(grid: &mut VoxelGrid, x: usize, z: usize, height: usize) {
    let ceiling = grid.height() - 1;
    let dirt_top = height.min(ceiling);

    if height > 3 {
        let stone_top = height - 3;
        grid.fill_space(x, 1, z, x, stone_top, z, Block::Stone);
        if stone_top < dirt_top {
            grid.fill_space(x, stone_top + 1, z, x, dirt_top, z, Block::Dirt);
        }
    } else if dirt_top >= 1 {
        grid.fill_space(x, 1, z, x, dirt_top, z, Block::Dirt);
    }

    if height >= WATER_LEVEL && height < grid.height() {
        grid.set(height, x, z, Block::Grass);
    }
}

/// Layers every column from the height field. Returns the number of columns
/// that ended up with a grass cap.
pub fn write_terrain(grid: &mut VoxelGrid, field: &HeightField<'_>) -> usize {
    let size = grid.size();
    let mut grass_columns = 0;
    for x in 0..size {
        for z in 0..size {
            let height = field.height_at(x, z);
            layer_column(grid, x, z, height);
            if height >= WATER_LEVEL && height < grid.height() {
                grass_columns += 1;
            }
        }
    }
    grass_columns
}
