use super::builders::ItemBuilder;
use crate::items::{ItemCategory, ItemDefinition};

// Stackable objects usable as slingshot ammunition. The ores, wood and
// stone are matched through the legacy id whitelist; eggs, fruit and
// vegetables classify by category code.
pub fn get_ammunition_definitions() -> Vec<ItemDefinition> {
    vec![
        ItemBuilder::new("Stone", "A common material with many uses. Cheap slingshot fodder.", ItemCategory::Material)
            .object_id("390")
            .category_code(-16)
            .icon("stone.png")
            .stackable(999)
            .build(),

        ItemBuilder::new("Wood", "A sturdy yet flexible plant material.", ItemCategory::Material)
            .object_id("388")
            .category_code(-16)
            .icon("wood.png")
            .stackable(999)
            .build(),

        ItemBuilder::new("Coal", "A combustible rock. Stings on impact.", ItemCategory::Material)
            .object_id("382")
            .category_code(-15)
            .icon("coal.png")
            .stackable(999)
            .build(),

        ItemBuilder::new("Copper Ore", "A common ore that packs a decent punch.", ItemCategory::Material)
            .object_id("378")
            .category_code(-15)
            .icon("copper_ore.png")
            .stackable(999)
            .build(),

        ItemBuilder::new("Iron Ore", "A fairly common ore. Harder hitting than copper.", ItemCategory::Material)
            .object_id("380")
            .category_code(-15)
            .icon("iron_ore.png")
            .stackable(999)
            .build(),

        ItemBuilder::new("Gold Ore", "A precious ore. Expensive ammunition.", ItemCategory::Material)
            .object_id("384")
            .category_code(-15)
            .icon("gold_ore.png")
            .stackable(999)
            .build(),

        ItemBuilder::new("Iridium Ore", "An exotic ore. Devastating when fired.", ItemCategory::Material)
            .object_id("386")
            .category_code(-15)
            .icon("iridium_ore.png")
            .stackable(999)
            .build(),

        ItemBuilder::new("Explosive Ammo", "Explodes on impact.", ItemCategory::Ammunition)
            .object_id("441")
            .category_code(-8)
            .icon("explosive_ammo.png")
            .stackable(999)
            .build(),
    ]
}
