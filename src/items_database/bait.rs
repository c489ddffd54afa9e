use super::builders::ItemBuilder;
use crate::items::ItemCategory;
use crate::stack_policies::BAIT_CATEGORY;

pub fn get_bait_definitions() -> Vec<crate::items::ItemDefinition> {
    vec![
        // Standard bait, the workhorse of every rod
        ItemBuilder::new("Bait", "Causes fish to bite faster.", ItemCategory::Bait)
            .object_id("685")
            .category_code(BAIT_CATEGORY)
            .icon("bait.png")
            .stackable(999)
            .build(),

        ItemBuilder::new("Wild Bait", "Slightly increases the chance to catch two fish at once.", ItemCategory::Bait)
            .object_id("774")
            .category_code(BAIT_CATEGORY)
            .icon("wild_bait.png")
            .stackable(999)
            .build(),

        ItemBuilder::new("Magnet", "Attracts treasure instead of fish.", ItemCategory::Bait)
            .object_id("703")
            .category_code(BAIT_CATEGORY)
            .icon("magnet.png")
            .stackable(999)
            .build(),

        ItemBuilder::new("Magic Bait", "Lets you catch any fish regardless of season or time.", ItemCategory::Bait)
            .object_id("908")
            .category_code(BAIT_CATEGORY)
            .icon("magic_bait.png")
            .stackable(999)
            .build(),
    ]
}
