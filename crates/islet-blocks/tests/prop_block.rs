use islet_blocks::Block;
use proptest::prelude::*;
use serde::Deserialize;

proptest! {
    // from_id accepts exactly the table range
    #[test]
    fn from_id_accepts_only_known_ids(id in any::<u8>()) {
        match Block::from_id(id) {
            Some(b) => {
                prop_assert!((id as usize) < Block::COUNT);
                prop_assert_eq!(b.id(), id);
            }
            None => prop_assert!((id as usize) >= Block::COUNT),
        }
    }

    // names never collide with an unrelated lookup
    #[test]
    fn unknown_names_are_rejected(s in "[a-z_]{1,12}") {
        if let Some(b) = Block::from_name(&s) {
            prop_assert_eq!(b.name(), s.as_str());
        }
    }
}

#[test]
fn ore_flags() {
    let ores: Vec<Block> = Block::ALL.iter().copied().filter(|b| b.is_ore()).collect();
    assert_eq!(ores, vec![Block::CoalOre, Block::IronOre]);
}

#[test]
fn deserializes_snake_case_names() {
    #[derive(Deserialize)]
    struct Palette {
        top: Block,
        under: Vec<Block>,
    }
    let p: Palette = toml::from_str(
        r#"
        top = "grass"
        under = ["dirt", "coal_ore", "iron_ore"]
    "#,
    )
    .unwrap();
    assert_eq!(p.top, Block::Grass);
    assert_eq!(p.under, vec![Block::Dirt, Block::CoalOre, Block::IronOre]);
}
