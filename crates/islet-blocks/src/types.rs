use serde::{Deserialize, Serialize};

/// One material identifier stored per voxel.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Block {
    #[default]
    Air = 0,
    Bedrock = 1,
    Water = 2,
    Stone = 3,
    Dirt = 4,
    Grass = 5,
    Sand = 6,
    CoalOre = 7,
    IronOre = 8,
    Log = 9,
    Leaves = 10,
}

impl Block {
    pub const COUNT: usize = 11;

    pub const ALL: [Block; Block::COUNT] = [
        Block::Air,
        Block::Bedrock,
        Block::Water,
        Block::Stone,
        Block::Dirt,
        Block::Grass,
        Block::Sand,
        Block::CoalOre,
        Block::IronOre,
        Block::Log,
        Block::Leaves,
    ];

    #[inline]
    pub const fn id(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn from_id(id: u8) -> Option<Block> {
        Block::ALL.get(id as usize).copied()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Block::Air => "air",
            Block::Bedrock => "bedrock",
            Block::Water => "water",
            Block::Stone => "stone",
            Block::Dirt => "dirt",
            Block::Grass => "grass",
            Block::Sand => "sand",
            Block::CoalOre => "coal_ore",
            Block::IronOre => "iron_ore",
            Block::Log => "log",
            Block::Leaves => "leaves",
        }
    }

    pub fn from_name(name: &str) -> Option<Block> {
        Block::ALL.iter().copied().find(|b| b.name() == name)
    }

    #[inline]
    pub const fn is_air(self) -> bool {
        matches!(self, Block::Air)
    }

    /// Anything a player can stand on. Water and air are not.
    #[inline]
    pub const fn is_solid(self) -> bool {
        !matches!(self, Block::Air | Block::Water)
    }

    #[inline]
    pub const fn is_ore(self) -> bool {
        matches!(self, Block::CoalOre | Block::IronOre)
    }

    /// Flat colour used by the top-down overview.
    pub const fn map_color(self) -> [u8; 3] {
        match self {
            Block::Air => [0, 0, 0],
            Block::Bedrock => [40, 40, 40],
            Block::Water => [48, 96, 200],
            Block::Stone => [128, 128, 128],
            Block::Dirt => [134, 96, 67],
            Block::Grass => [92, 160, 60],
            Block::Sand => [219, 207, 142],
            Block::CoalOre => [60, 60, 60],
            Block::IronOre => [190, 150, 120],
            Block::Log => [102, 81, 50],
            Block::Leaves => [48, 110, 36],
        }
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
