//! Multi-voxel structures stamped into the world volume.
#![forbid(unsafe_code)]

use islet_blocks::Block;
use islet_chunk::VoxelGrid;

/// Places a tree rooted at an air voxel directly above the ground.
///
/// Placement never fails: parts that would leave the grid are dropped and
/// occupied cells are handled by the implementation as it sees fit.
pub trait TreePlacer {
    fn add_tree(&mut self, grid: &mut VoxelGrid, x: usize, y: usize, z: usize);
}

impl<F> TreePlacer for F
where
    F: FnMut(&mut VoxelGrid, usize, usize, usize),
{
    fn add_tree(&mut self, grid: &mut VoxelGrid, x: usize, y: usize, z: usize) {
        self(grid, x, y, z)
    }
}

/// Log trunk with a two-tier leaf canopy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OakTree {
    pub trunk_height: i32,
    pub leaf_radius: i32,
}

impl Default for OakTree {
    fn default() -> Self {
        Self {
            trunk_height: 4,
            leaf_radius: 2,
        }
    }
}

impl OakTree {
    /// Cells this tree would write, in stamp order, without clipping.
    pub fn footprint(&self, x: i32, y: i32, z: i32) -> Vec<(i32, i32, i32, Block)> {
        let th = self.trunk_height.max(1);
        let r = self.leaf_radius.max(0);
        let mut out = Vec::new();
        for dy in 0..th {
            out.push((x, y + dy, z, Block::Log));
        }
        // Wide tier hugs the top of the trunk, narrow tier caps it.
        for dy in (th - 2)..=(th + 1) {
            let rad = if dy < th { r } else { (r - 1).max(0) };
            for dx in -rad..=rad {
                for dz in -rad..=rad {
                    if rad > 0 && dx.abs() == rad && dz.abs() == rad {
                        continue;
                    }
                    if dx == 0 && dz == 0 && dy < th {
                        continue;
                    }
                    out.push((x + dx, y + dy, z + dz, Block::Leaves));
                }
            }
        }
        out
    }
}

impl TreePlacer for OakTree {
    fn add_tree(&mut self, grid: &mut VoxelGrid, x: usize, y: usize, z: usize) {
        for (cx, cy, cz, block) in self.footprint(x as i32, y as i32, z as i32) {
            match block {
                // Leaves only claim open air so neighbouring trunks survive.
                Block::Leaves => {
                    if grid.get_checked(cy, cx, cz) == Some(Block::Air) {
                        grid.set_checked(cy, cx, cz, block);
                    }
                }
                _ => {
                    grid.set_checked(cy, cx, cz, block);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trunk_rises_from_root() {
        let mut grid = VoxelGrid::with_extent(9, 12).unwrap();
        OakTree::default().add_tree(&mut grid, 4, 3, 4);
        for y in 3..7 {
            assert_eq!(grid.get(y, 4, 4), Block::Log);
        }
        assert_eq!(grid.get(2, 4, 4), Block::Air);
        assert_eq!(grid.get(7, 4, 4), Block::Leaves);
        assert!(grid.count(Block::Leaves) > 0);
    }

    #[test]
    fn clips_at_grid_edges() {
        let mut grid = VoxelGrid::with_extent(5, 7).unwrap();
        OakTree::default().add_tree(&mut grid, 0, 4, 0);
        assert_eq!(grid.get(4, 0, 0), Block::Log);
        assert_eq!(grid.get(6, 0, 0), Block::Log);
        assert_eq!(grid.count(Block::Log), 3);
    }

    #[test]
    fn leaves_do_not_replace_solid_cells() {
        let mut grid = VoxelGrid::with_extent(9, 12).unwrap();
        grid.set(6, 5, 4, Block::Log);
        OakTree::default().add_tree(&mut grid, 4, 3, 4);
        assert_eq!(grid.get(6, 5, 4), Block::Log);
    }

    #[test]
    fn closures_are_placers() {
        let mut roots = Vec::new();
        let mut placer = |_: &mut VoxelGrid, x: usize, y: usize, z: usize| roots.push((x, y, z));
        let mut grid = VoxelGrid::with_extent(5, 7).unwrap();
        placer.add_tree(&mut grid, 1, 2, 3);
        assert_eq!(roots, vec![(1, 2, 3)]);
    }
}
