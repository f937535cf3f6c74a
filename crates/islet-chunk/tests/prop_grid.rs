use islet_blocks::Block;
use islet_chunk::{MIN_WORLD_HEIGHT, MIN_WORLD_SIZE, VoxelGrid};
use proptest::prelude::*;

fn size() -> impl Strategy<Value = usize> {
    MIN_WORLD_SIZE..=12
}

fn height() -> impl Strategy<Value = usize> {
    MIN_WORLD_HEIGHT..=12
}

proptest! {
    // idx maps each (y,x,z) within bounds to unique in-range indices
    #[test]
    fn idx_is_unique_and_in_range(s in size(), h in height()) {
        let g = VoxelGrid::with_extent(s, h).unwrap();
        let expect = s * s * h;
        let mut seen = vec![false; expect];
        for y in 0..h { for x in 0..s { for z in 0..s {
            let i = g.idx(y, x, z);
            prop_assert!(i < expect);
            prop_assert!(!seen[i]);
            seen[i] = true;
        }}}
        prop_assert!(seen.into_iter().all(|b| b));
    }

    // fill_space touches exactly the clipped box and nothing else
    #[test]
    fn fill_space_matches_box(
        s in size(), h in height(),
        a in (0usize..14, 0usize..14, 0usize..14),
        b in (0usize..14, 0usize..14, 0usize..14),
    ) {
        let mut g = VoxelGrid::with_extent(s, h).unwrap();
        g.fill_space(a.0, a.1, a.2, b.0, b.1, b.2, Block::Sand);
        for y in 0..h { for x in 0..s { for z in 0..s {
            let inside = x >= a.0 && x <= b.0 && y >= a.1 && y <= b.1 && z >= a.2 && z <= b.2;
            let expect = if inside { Block::Sand } else { Block::Air };
            prop_assert_eq!(g.get(y, x, z), expect);
        }}}
    }

    // checked accessors agree with contains
    #[test]
    fn checked_access_agrees_with_contains(
        s in size(), h in height(),
        y in -2i32..16, x in -2i32..16, z in -2i32..16,
    ) {
        let mut g = VoxelGrid::with_extent(s, h).unwrap();
        let inside = g.contains(y, x, z);
        prop_assert_eq!(g.set_checked(y, x, z, Block::Stone), inside);
        match g.get_checked(y, x, z) {
            Some(b) => { prop_assert!(inside); prop_assert_eq!(b, Block::Stone); }
            None => prop_assert!(!inside),
        }
        prop_assert_eq!(g.count(Block::Stone), usize::from(inside));
    }
}
