mod builders;
mod tools;
mod bait;
mod ammunition;

use crate::items::ItemDefinition;

pub fn get_initial_item_definitions() -> Vec<ItemDefinition> {
    let mut items = Vec::new();

    // Combine all category definitions
    items.extend(tools::get_tool_definitions());
    items.extend(bait::get_bait_definitions());
    items.extend(ammunition::get_ammunition_definitions());

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HolderKind;
    use crate::stack_policies::{is_slingshot_ammo, BAIT_CATEGORY};

    #[test]
    fn seeded_names_are_unique() {
        let defs = get_initial_item_definitions();
        for (i, a) in defs.iter().enumerate() {
            for b in defs.iter().skip(i + 1) {
                assert_ne!(a.name, b.name, "duplicate item name in seed data");
            }
        }
    }

    #[test]
    fn seeded_holders_are_not_stackable() {
        for def in get_initial_item_definitions() {
            if def.holder_kind.is_some() {
                assert!(!def.is_stackable, "holder '{}' must not stack", def.name);
                assert!(def.is_equippable, "holder '{}' must be equippable", def.name);
            }
        }
    }

    #[test]
    fn seeded_stackables_have_positive_capacity() {
        for def in get_initial_item_definitions() {
            if def.is_stackable {
                assert!(def.stack_size >= 1, "stackable '{}' needs capacity", def.name);
            }
        }
    }

    #[test]
    fn catalogue_covers_both_resource_kinds() {
        let defs = get_initial_item_definitions();
        assert!(defs.iter().any(|d| d.category_code == BAIT_CATEGORY));
        assert!(defs.iter().any(is_slingshot_ammo));
        assert!(defs.iter().any(|d| d.holder_kind == Some(HolderKind::FishingRod)));
        assert!(defs.iter().any(|d| d.holder_kind == Some(HolderKind::Slingshot)));
    }
}
