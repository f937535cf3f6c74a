use islet_blocks::Block;
use islet_chunk::VoxelGrid;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverviewMode {
    /// Colour of the topmost non-air voxel per column.
    Surface,
    /// Greyscale of the topmost non-air height.
    HeightMap,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OverviewError {
    #[error("overview scale must be between 1 and {max}, got {scale}")]
    InvalidScale { scale: usize, max: usize },
}

pub const MAX_OVERVIEW_SCALE: usize = 64;

/// Packed RGB8 image, row-major, `z` down and `x` across.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverviewImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl OverviewImage {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height * 3],
        }
    }

    #[inline]
    pub fn put_pixel(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        let idx = (y * self.width + x) * 3;
        self.data[idx..idx + 3].copy_from_slice(&rgb);
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let idx = (y * self.width + x) * 3;
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }

    /// Nearest-neighbour upscale by an integer factor.
    pub fn upscale(&self, scale: usize) -> Result<OverviewImage, OverviewError> {
        if scale == 0 || scale > MAX_OVERVIEW_SCALE {
            return Err(OverviewError::InvalidScale {
                scale,
                max: MAX_OVERVIEW_SCALE,
            });
        }
        let mut out = OverviewImage::new(self.width * scale, self.height * scale);
        for y in 0..out.height {
            for x in 0..out.width {
                out.put_pixel(x, y, self.pixel(x / scale, y / scale));
            }
        }
        Ok(out)
    }
}

pub fn render_overview(grid: &VoxelGrid, mode: OverviewMode) -> OverviewImage {
    let size = grid.size();
    let top = (grid.height() - 1).max(1);
    let mut img = OverviewImage::new(size, size);
    for z in 0..size {
        for x in 0..size {
            let surface = grid.top_non_air(x, z);
            let rgb = match (mode, surface) {
                (_, None) => [0, 0, 0],
                (OverviewMode::Surface, Some(y)) => shade(grid.get(y, x, z), y, top),
                (OverviewMode::HeightMap, Some(y)) => {
                    let v = (y * 255 / top) as u8;
                    [v, v, v]
                }
            };
            img.put_pixel(x, z, rgb);
        }
    }
    img
}

// Darken low ground a little so relief is readable in surface mode.
fn shade(block: Block, y: usize, top: usize) -> [u8; 3] {
    let [r, g, b] = block.map_color();
    let f = 160 + (y * 95 / top) as u32;
    let s = |c: u8| ((u32::from(c) * f) / 255) as u8;
    [s(r), s(g), s(b)]
}
