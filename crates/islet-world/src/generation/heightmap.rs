use crate::random::RandomSource;
use crate::worldgen::{COARSE_HIGH, COARSE_LOW, GRID_STEP, WATER_LEVEL, coarse_grid_size};

/// Low-resolution height lattice, one sample every `GRID_STEP` voxels.
///
/// Lives only for the duration of a generation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoarseHeightmap {
    size: usize,
    samples: Vec<u8>,
}

impl CoarseHeightmap {
    /// Draws every lattice sample as `low + high`, gx outer and gz inner,
    /// `low` before `high`.
    pub fn generate(world_size: usize, rng: &mut impl RandomSource) -> Self {
        let size = coarse_grid_size(world_size);
        let mut samples = Vec::with_capacity(size * size);
        for _gx in 0..size {
            for _gz in 0..size {
                let low = rng.next_in_range(COARSE_LOW.0, COARSE_LOW.1);
                let high = rng.next_in_range(COARSE_HIGH.0, COARSE_HIGH.1);
                samples.push((low + high) as u8);
            }
        }
        Self { size, samples }
    }

    /// Builds a lattice from explicit samples laid out `[gx][gz]`. Returns
    /// `None` unless there are `size * size` samples and `size >= 2`.
    pub fn from_samples(size: usize, samples: Vec<u8>) -> Option<Self> {
        if size < 2 || samples.len() != size * size {
            return None;
        }
        Some(Self { size, samples })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get(&self, gx: usize, gz: usize) -> u8 {
        self.samples[gx * self.size + gz]
    }

    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }
}

/// Integer bilinear blend of four lattice corners. Weights are
/// `GRID_STEP - lerp` and `lerp` per axis; the sum is divided by
/// `GRID_STEP * GRID_STEP` with truncation.
#[inline]
pub fn bilinear(h00: u8, h10: u8, h01: u8, h11: u8, lerp_x: u32, lerp_z: u32) -> u32 {
    let step = GRID_STEP as u32;
    let inv_x = step - lerp_x;
    let inv_z = step - lerp_z;
    let sum = u32::from(h00) * inv_x * inv_z
        + u32::from(h10) * lerp_x * inv_z
        + u32::from(h01) * inv_x * lerp_z
        + u32::from(h11) * lerp_x * lerp_z;
    sum / (step * step)
}

/// Per-column height derived on demand from a coarse lattice.
#[derive(Clone, Copy, Debug)]
pub struct HeightField<'a> {
    coarse: &'a CoarseHeightmap,
    world_height: usize,
}

impl<'a> HeightField<'a> {
    pub fn new(coarse: &'a CoarseHeightmap, world_height: usize) -> Self {
        Self {
            coarse,
            world_height,
        }
    }

    /// Interpolated height before the shoreline bias and ceiling clamp.
    pub fn raw_height_at(&self, x: usize, z: usize) -> u32 {
        let grid_x = x / GRID_STEP;
        let lerp_x = (x - grid_x * GRID_STEP) as u32;
        let grid_z = z / GRID_STEP;
        let lerp_z = (z - grid_z * GRID_STEP) as u32;

        // Keep a valid "next" sample on the last row/column.
        let last = self.coarse.size() - 1;
        let gx0 = if grid_x < last { grid_x } else { last - 1 };
        let gz0 = if grid_z < last { grid_z } else { last - 1 };
        let (gx1, gz1) = (gx0 + 1, gz0 + 1);

        bilinear(
            self.coarse.get(gx0, gz0),
            self.coarse.get(gx1, gz0),
            self.coarse.get(gx0, gz1),
            self.coarse.get(gx1, gz1),
            lerp_x,
            lerp_z,
        )
    }

    /// Final column height: low ground is nudged up one voxel and the result
    /// never exceeds the top layer of the world.
    pub fn height_at(&self, x: usize, z: usize) -> usize {
        let mut height = self.raw_height_at(x, z) as usize;
        if height > 0 && height < WATER_LEVEL + 2 {
            height += 1;
        }
        height.min(self.world_height - 1)
    }
}
