//! The world volume and its box-fill primitive.
#![forbid(unsafe_code)]

use islet_blocks::Block;
use thiserror::Error;

/// Horizontal extent (x and z) of a default world.
pub const WORLD_SIZE: usize = 32;
/// Vertical extent of a default world.
pub const WORLD_HEIGHT: usize = 20;

/// Smallest horizontal extent the natural generator can work with: trees keep
/// a 2 voxel margin on both sides and still need one column to land on.
pub const MIN_WORLD_SIZE: usize = 5;
/// Smallest vertical extent: bedrock, the water slab, and one air layer above it.
pub const MIN_WORLD_HEIGHT: usize = 7;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtentError {
    #[error("world extent {size}x{height}x{size} is below the minimum {min_size}x{min_height}x{min_size}")]
    TooSmall {
        size: usize,
        height: usize,
        min_size: usize,
        min_height: usize,
    },
    #[error("world extent {size}x{height}x{size} does not fit in memory")]
    TooLarge { size: usize, height: usize },
}

/// Voxel grid indexed by (height, x, z), stored as one flat buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoxelGrid {
    size: usize,
    height: usize,
    blocks: Vec<Block>,
}

impl Default for VoxelGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl VoxelGrid {
    /// An all-air grid with the default `WORLD_SIZE x WORLD_HEIGHT x WORLD_SIZE` extent.
    pub fn new() -> Self {
        Self {
            size: WORLD_SIZE,
            height: WORLD_HEIGHT,
            blocks: vec![Block::Air; WORLD_SIZE * WORLD_HEIGHT * WORLD_SIZE],
        }
    }

    pub fn with_extent(size: usize, height: usize) -> Result<Self, ExtentError> {
        if size < MIN_WORLD_SIZE || height < MIN_WORLD_HEIGHT {
            return Err(ExtentError::TooSmall {
                size,
                height,
                min_size: MIN_WORLD_SIZE,
                min_height: MIN_WORLD_HEIGHT,
            });
        }
        // Coordinates are handed around as i32 by the generator.
        let len = size
            .checked_mul(size)
            .and_then(|n| n.checked_mul(height))
            .filter(|_| size <= i32::MAX as usize && height <= i32::MAX as usize)
            .ok_or(ExtentError::TooLarge { size, height })?;
        Ok(Self {
            size,
            height,
            blocks: vec![Block::Air; len],
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[inline]
    pub fn idx(&self, y: usize, x: usize, z: usize) -> usize {
        (y * self.size + z) * self.size + x
    }

    #[inline]
    pub fn contains(&self, y: i32, x: i32, z: i32) -> bool {
        y >= 0
            && x >= 0
            && z >= 0
            && (y as usize) < self.height
            && (x as usize) < self.size
            && (z as usize) < self.size
    }

    /// Reads one voxel. Coordinates must be inside the grid.
    #[inline]
    pub fn get(&self, y: usize, x: usize, z: usize) -> Block {
        self.blocks[self.idx(y, x, z)]
    }

    /// Writes one voxel. Coordinates must be inside the grid.
    #[inline]
    pub fn set(&mut self, y: usize, x: usize, z: usize, block: Block) {
        let i = self.idx(y, x, z);
        self.blocks[i] = block;
    }

    /// Signed read; `None` outside the grid.
    #[inline]
    pub fn get_checked(&self, y: i32, x: i32, z: i32) -> Option<Block> {
        if !self.contains(y, x, z) {
            return None;
        }
        Some(self.get(y as usize, x as usize, z as usize))
    }

    /// Signed write; returns false and leaves the grid untouched outside it.
    #[inline]
    pub fn set_checked(&mut self, y: i32, x: i32, z: i32, block: Block) -> bool {
        if !self.contains(y, x, z) {
            return false;
        }
        self.set(y as usize, x as usize, z as usize, block);
        true
    }

    /// Inclusive axis-aligned box write. The box is clipped to the grid; an
    /// inverted or fully outside box writes nothing.
    #[allow(clippy::too_many_arguments)]
    pub fn fill_space(
        &mut self,
        x0: usize,
        y0: usize,
        z0: usize,
        x1: usize,
        y1: usize,
        z1: usize,
        block: Block,
    ) {
        let x1 = x1.min(self.size.saturating_sub(1));
        let y1 = y1.min(self.height.saturating_sub(1));
        let z1 = z1.min(self.size.saturating_sub(1));
        if x0 > x1 || y0 > y1 || z0 > z1 {
            return;
        }
        for y in y0..=y1 {
            for z in z0..=z1 {
                // x is the contiguous axis
                let start = self.idx(y, x0, z);
                let end = self.idx(y, x1, z);
                self.blocks[start..=end].fill(block);
            }
        }
    }

    /// Highest non-air voxel in a column.
    pub fn top_non_air(&self, x: usize, z: usize) -> Option<usize> {
        (0..self.height).rev().find(|&y| !self.get(y, x, z).is_air())
    }

    pub fn count(&self, block: Block) -> usize {
        self.blocks.iter().filter(|&&b| b == block).count()
    }
}
