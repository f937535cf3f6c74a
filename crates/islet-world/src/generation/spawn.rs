use islet_blocks::Block;
use islet_chunk::VoxelGrid;

use crate::player::Player;

/// Where the player was placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnPoint {
    pub x: usize,
    pub y: usize,
    pub z: usize,
    /// No air in the centre column: the player was left inside the top
    /// voxel of it.
    pub buried: bool,
}

/// Places the player in the lowest air voxel of the centre column.
///
/// When the column has no air the player ends at `height - 1` and the
/// result is flagged `buried`; this is not treated as an error.
pub fn resolve_spawn(grid: &VoxelGrid, player: &mut Player) -> SpawnPoint {
    let x = grid.size() / 2;
    let z = grid.size() / 2;
    let top = grid.height() - 1;
    let found = (0..=top).find(|&y| grid.get(y, x, z) == Block::Air);
    let spawn = SpawnPoint {
        x,
        y: found.unwrap_or(top),
        z,
        buried: found.is_none(),
    };
    if spawn.buried {
        log::warn!(
            "no air in spawn column ({}, {}); player left inside terrain at y={}",
            x,
            z,
            spawn.y
        );
    }
    player.x = spawn.x as i32;
    player.y = spawn.y as i32;
    player.z = spawn.z as i32;
    spawn
}
