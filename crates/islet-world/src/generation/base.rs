use islet_blocks::Block;
use islet_chunk::VoxelGrid;

use crate::worldgen::WATER_LEVEL;

/// Bedrock floor at height 0, water from 1 up to the water level.
pub fn write_base_layers(grid: &mut VoxelGrid) {
    let edge = grid.size() - 1;
    grid.fill_space(0, 0, 0, edge, 0, edge, Block::Bedrock);
    grid.fill_space(0, 1, 0, edge, WATER_LEVEL, edge, Block::Water);
}
