use super::builders::ItemBuilder;
use crate::items::{ItemCategory, ItemDefinition};
use crate::models::HolderKind;

pub fn get_tool_definitions() -> Vec<ItemDefinition> {
    vec![
        // === FISHING RODS ===
        // All rods share one attachment slot for bait

        ItemBuilder::new("Bamboo Pole", "A basic fishing rod. It gets the job done.", ItemCategory::Tool)
            .tool_id("BambooPole")
            .icon("bamboo_pole.png")
            .equippable()
            .holder(HolderKind::FishingRod)
            .build(),

        ItemBuilder::new("Fiberglass Rod", "A lightweight rod that can carry bait.", ItemCategory::Tool)
            .tool_id("FiberglassRod")
            .icon("fiberglass_rod.png")
            .equippable()
            .holder(HolderKind::FishingRod)
            .build(),

        ItemBuilder::new("Iridium Rod", "A first-class rod for serious anglers.", ItemCategory::Tool)
            .tool_id("IridiumRod")
            .icon("iridium_rod.png")
            .equippable()
            .holder(HolderKind::FishingRod)
            .build(),

        // === SLINGSHOTS ===

        ItemBuilder::new("Slingshot", "Fires whatever stackable object is loaded into it.", ItemCategory::RangedWeapon)
            .weapon_id("32")
            .icon("slingshot.png")
            .equippable()
            .holder(HolderKind::Slingshot)
            .build(),

        ItemBuilder::new("Master Slingshot", "A stronger frame for heavier ammunition.", ItemCategory::RangedWeapon)
            .weapon_id("33")
            .icon("master_slingshot.png")
            .equippable()
            .holder(HolderKind::Slingshot)
            .build(),
    ]
}
