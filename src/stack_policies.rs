use std::collections::HashSet;
use lazy_static::lazy_static;

use crate::items::{InventoryItem, ItemDefinition};
use crate::models::HolderKind;

// Host category codes. These must match the host's values exactly or
// classification silently diverges from what players expect.
pub(crate) const BAIT_CATEGORY: i32 = -21;
pub(crate) const AMMO_CATEGORY_CODES: [i32; 3] = [-5, -79, -75];

lazy_static! {
    // Ammo items that predate category-based classification; matched by
    // qualified id regardless of their category code.
    pub(crate) static ref LEGACY_AMMO_QUALIFIED_IDS: HashSet<&'static str> = {
        let mut ids = HashSet::new();
        ids.insert("(O)378"); // Copper Ore
        ids.insert("(O)380"); // Iron Ore
        ids.insert("(O)382"); // Coal
        ids.insert("(O)384"); // Gold Ore
        ids.insert("(O)386"); // Iridium Ore
        ids.insert("(O)388"); // Wood
        ids.insert("(O)390"); // Stone
        ids.insert("(O)441"); // Explosive Ammo
        ids
    };
}

/// Whether an item definition counts as slingshot ammunition.
///
/// Legacy ids are matched explicitly; everything else is classified
/// structurally: a plain (non-big-craftable) object whose category code is
/// one of the ammo codes.
pub(crate) fn is_slingshot_ammo(def: &ItemDefinition) -> bool {
    if LEGACY_AMMO_QUALIFIED_IDS.contains(def.qualified_item_id.as_str()) {
        return true;
    }
    if !def.is_generic_object || def.is_big_craftable {
        return false;
    }
    AMMO_CATEGORY_CODES.contains(&def.category_code)
}

/// Decides which holders a freshly added resource item can top up.
///
/// One implementation per resource kind; the consolidation engine is generic
/// over this trait, so new kinds plug in without touching the scan/merge
/// logic. All methods are pure.
pub(crate) trait StackPolicy {
    /// Tag used in log messages.
    fn label(&self) -> &'static str;

    /// Does this policy handle the added item at all?
    fn classifies(&self, added_def: &ItemDefinition) -> bool;

    /// Is this definition a holder this policy tops up?
    fn holds(&self, def: &ItemDefinition) -> bool;

    /// Is the holder's attached stack "the same resource" as the added item?
    /// Only called with a real attached stack.
    fn is_compatible(
        &self,
        attached: &InventoryItem,
        attached_def: &ItemDefinition,
        added: &InventoryItem,
        added_def: &ItemDefinition,
    ) -> bool;
}

/// Bait into fishing rods.
pub(crate) struct BaitStacking;

impl StackPolicy for BaitStacking {
    fn label(&self) -> &'static str {
        "Bait"
    }

    fn classifies(&self, added_def: &ItemDefinition) -> bool {
        added_def.category_code == BAIT_CATEGORY
    }

    fn holds(&self, def: &ItemDefinition) -> bool {
        def.holder_kind == Some(HolderKind::FishingRod)
    }

    fn is_compatible(
        &self,
        _attached: &InventoryItem,
        attached_def: &ItemDefinition,
        added: &InventoryItem,
        added_def: &ItemDefinition,
    ) -> bool {
        // Name is compared too: reskinned baits can share a qualified id
        // under host aliasing while being distinct resources.
        self.classifies(added_def)
            && attached_def.qualified_item_id == added_def.qualified_item_id
            && attached_def.name == added_def.name
            && added.quantity > 0
    }
}

/// Ammo into slingshots.
pub(crate) struct AmmoStacking;

impl StackPolicy for AmmoStacking {
    fn label(&self) -> &'static str {
        "Ammo"
    }

    fn classifies(&self, added_def: &ItemDefinition) -> bool {
        is_slingshot_ammo(added_def)
    }

    fn holds(&self, def: &ItemDefinition) -> bool {
        def.holder_kind == Some(HolderKind::Slingshot)
    }

    fn is_compatible(
        &self,
        _attached: &InventoryItem,
        attached_def: &ItemDefinition,
        added: &InventoryItem,
        added_def: &ItemDefinition,
    ) -> bool {
        attached_def.item_id == added_def.item_id
            && self.classifies(added_def)
            && added.quantity > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::ItemCategory;
    use crate::models::ItemLocation;

    fn object_def(item_id: &str, name: &str, category_code: i32) -> ItemDefinition {
        ItemDefinition {
            id: 0,
            item_id: item_id.to_string(),
            qualified_item_id: format!("(O){}", item_id),
            name: name.to_string(),
            description: String::new(),
            category: ItemCategory::Material,
            category_code,
            icon_asset_name: String::new(),
            is_stackable: true,
            stack_size: 999,
            is_equippable: false,
            holder_kind: None,
            is_generic_object: true,
            is_big_craftable: false,
        }
    }

    fn instance(def_id: u64, quantity: u32) -> InventoryItem {
        InventoryItem { instance_id: 0, item_def_id: def_id, quantity, location: ItemLocation::Unknown }
    }

    #[test]
    fn legacy_ids_classify_as_ammo_regardless_of_category() {
        let mut def = object_def("441", "Explosive Ammo", 0);
        assert!(is_slingshot_ammo(&def));
        def.is_big_craftable = true; // Whitelist wins even over flags
        assert!(is_slingshot_ammo(&def));
    }

    #[test]
    fn ammo_category_codes_classify_plain_objects() {
        assert!(is_slingshot_ammo(&object_def("176", "Egg", -5)));
        assert!(is_slingshot_ammo(&object_def("634", "Apricot", -79)));
        assert!(is_slingshot_ammo(&object_def("24", "Parsnip", -75)));
        assert!(!is_slingshot_ammo(&object_def("168", "Trash", -20)));
    }

    #[test]
    fn big_craftables_and_non_objects_are_not_ammo() {
        let mut def = object_def("176", "Egg", -5);
        def.is_big_craftable = true;
        assert!(!is_slingshot_ammo(&def));

        let mut def = object_def("176", "Egg", -5);
        def.is_generic_object = false;
        assert!(!is_slingshot_ammo(&def));
    }

    #[test]
    fn bait_compatibility_requires_qualified_id_and_name() {
        let policy = BaitStacking;
        let attached_def = object_def("685", "Bait", BAIT_CATEGORY);
        let added_def = object_def("685", "Bait", BAIT_CATEGORY);
        assert!(policy.is_compatible(&instance(1, 20), &attached_def, &instance(2, 10), &added_def));

        let reskinned = object_def("685", "Seafoam Bait", BAIT_CATEGORY);
        assert!(!policy.is_compatible(&instance(1, 20), &attached_def, &instance(2, 10), &reskinned));

        let not_bait = object_def("685", "Bait", -5);
        assert!(!policy.is_compatible(&instance(1, 20), &attached_def, &instance(2, 10), &not_bait));
    }

    #[test]
    fn ammo_compatibility_matches_item_id_only() {
        let policy = AmmoStacking;
        let attached_def = object_def("390", "Stone", -16);
        let added_def = object_def("390", "Stone", -16); // Legacy id carries it
        assert!(policy.is_compatible(&instance(1, 70), &attached_def, &instance(2, 20), &added_def));

        let other = object_def("388", "Wood", -16);
        assert!(!policy.is_compatible(&instance(1, 70), &attached_def, &instance(2, 20), &other));
    }

    #[test]
    fn policies_gate_holder_kinds() {
        let mut rod = object_def("BambooPole", "Bamboo Pole", 0);
        rod.holder_kind = Some(HolderKind::FishingRod);
        let mut slingshot = object_def("32", "Slingshot", 0);
        slingshot.holder_kind = Some(HolderKind::Slingshot);

        assert!(BaitStacking.holds(&rod));
        assert!(!BaitStacking.holds(&slingshot));
        assert!(AmmoStacking.holds(&slingshot));
        assert!(!AmmoStacking.holds(&rod));
    }
}
