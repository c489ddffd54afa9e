use spacetimedb::{ReducerContext, SpacetimeType, Table};
use log;
use serde::{Deserialize, Serialize};

use crate::items_database;
use crate::models::{HolderKind, ItemLocation};

// --- Item Enums and Structs ---

// Define categories or types for items
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, SpacetimeType)]
pub enum ItemCategory {
    Tool,
    Material,
    Bait,
    Ammunition,
    RangedWeapon,
    // Add other categories as needed (Consumable, Wearable, etc.)
}

#[spacetimedb::table(name = item_definition, public)]
#[derive(Clone, Debug)]
pub struct ItemDefinition {
    #[primary_key]
    #[auto_inc]
    pub id: u64,
    pub item_id: String,           // Host item id, e.g. "378"
    pub qualified_item_id: String, // Host qualified id, e.g. "(O)378"
    pub name: String,
    pub description: String,       // Optional flavor text
    pub category: ItemCategory,
    pub category_code: i32,        // Host numeric category code (bait is -21)
    pub icon_asset_name: String,   // e.g. "bait.png", used by client
    pub is_stackable: bool,        // Can multiple instances exist in one inventory slot?
    pub stack_size: u32,           // Max number per stack (if stackable)
    pub is_equippable: bool,       // Can this item be equipped (held in hand)?
    pub holder_kind: Option<HolderKind>, // Some(..) marks this as a holder with an attachment slot
    pub is_generic_object: bool,   // Plain world object, as opposed to a tool
    pub is_big_craftable: bool,    // Furniture-like placeable object
}

// --- Inventory Table ---

// Represents an instance of an item in a container slot or attached to a holder
#[spacetimedb::table(name = inventory_item, public)]
#[derive(Clone, Debug)]
pub struct InventoryItem {
    #[primary_key]
    #[auto_inc]
    pub instance_id: u64,      // Unique ID for this specific item instance
    pub item_def_id: u64,      // Links to ItemDefinition table (FK)
    pub quantity: u32,         // How many of this item
    pub location: ItemLocation,
}

// --- Constants ---

pub(crate) const NUM_PLAYER_INVENTORY_SLOTS: u16 = 24;
pub(crate) const NUM_BOX_SLOTS: u8 = 18;

// --- Item Reducers ---

// Reducer to seed initial item definitions if the table is empty
#[spacetimedb::reducer]
pub fn seed_items(ctx: &ReducerContext) -> Result<(), String> {
    let items = ctx.db.item_definition();
    if items.iter().count() > 0 {
        log::info!("Item definitions already seeded ({}). Skipping.", items.iter().count());
        return Ok(());
    }

    log::info!("Seeding initial item definitions...");

    let initial_items = items_database::get_initial_item_definitions();

    let mut seeded_count = 0;
    for item_def in initial_items {
        match items.try_insert(item_def) {
            Ok(_) => seeded_count += 1,
            Err(e) => log::error!("Failed to insert item definition during seeding: {}", e),
        }
    }

    log::info!("Finished seeding {} item definitions.", seeded_count);
    Ok(())
}

// --- Helper Functions ---

// Helper to look up an item's definition row
pub(crate) fn get_item_definition(ctx: &ReducerContext, item_def_id: u64) -> Result<ItemDefinition, String> {
    ctx.db
        .item_definition().id().find(item_def_id)
        .ok_or_else(|| format!("Definition {} not found.", item_def_id))
}

// Helper to find the resource stack currently attached to a holder, if any
pub(crate) fn find_attached_item(ctx: &ReducerContext, holder_instance_id: u64) -> Option<InventoryItem> {
    ctx.db
        .inventory_item().iter()
        .find(|i| matches!(&i.location, ItemLocation::Attached(data) if data.holder_instance_id == holder_instance_id))
}

/// Removes an item instance while leaving its slot empty.
///
/// Slots are addressed positionally, so deleting the row vacates the slot
/// without shifting any other item in the container. The location is set to
/// Unknown before the delete so clients never observe a live row in a slot
/// it no longer occupies.
pub(crate) fn remove_item_keep_slot(ctx: &ReducerContext, instance_id: u64) -> Result<(), String> {
    let inventory_items = ctx.db.inventory_item();
    let mut item_to_delete = inventory_items.instance_id().find(instance_id)
        .ok_or_else(|| format!("Item instance {} not found for removal.", instance_id))?;
    let vacated_slot = item_to_delete.location.clone();
    item_to_delete.location = ItemLocation::Unknown;
    inventory_items.instance_id().update(item_to_delete);
    inventory_items.instance_id().delete(instance_id);
    log::debug!("[RemoveKeepSlot] Item {} removed, slot {:?} left empty.", instance_id, vacated_slot);
    Ok(())
}

// --- Merge Arithmetic ---

/// Result of merging an incoming stack into a holder's attached stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MergeOutcome {
    /// The incoming stack was fully absorbed; its source instance is spent.
    Absorbed,
    /// The attached stack hit its capacity; `remaining` stays with the source.
    Overflowed { remaining: u32 },
}

/// Calculates the result of merging `incoming` units into an attached stack
/// of `attached_quantity` capped at `stack_size`.
///
/// Returns the attached stack's new quantity and the outcome. Quantity is
/// conserved: new quantity plus any `remaining` always equals
/// `attached_quantity + incoming`, and the new quantity never exceeds
/// `stack_size`. Widened internally so the sum cannot wrap.
pub(crate) fn merge_stacks(attached_quantity: u32, stack_size: u32, incoming: u32) -> (u32, MergeOutcome) {
    debug_assert!(attached_quantity <= stack_size, "attached stack over capacity");
    let combined = attached_quantity as u64 + incoming as u64;
    if combined > stack_size as u64 {
        let remaining = (combined - stack_size as u64) as u32;
        (stack_size, MergeOutcome::Overflowed { remaining })
    } else {
        (combined as u32, MergeOutcome::Absorbed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_within_capacity_absorbs() {
        let (new_qty, outcome) = merge_stacks(20, 999, 10);
        assert_eq!(new_qty, 30);
        assert_eq!(outcome, MergeOutcome::Absorbed);
    }

    #[test]
    fn merge_at_exact_capacity_absorbs() {
        let (new_qty, outcome) = merge_stacks(70, 75, 5);
        assert_eq!(new_qty, 75);
        assert_eq!(outcome, MergeOutcome::Absorbed);
    }

    #[test]
    fn merge_over_capacity_overflows() {
        let (new_qty, outcome) = merge_stacks(70, 75, 20);
        assert_eq!(new_qty, 75);
        assert_eq!(outcome, MergeOutcome::Overflowed { remaining: 15 });
    }

    #[test]
    fn merge_into_full_stack_leaves_everything_with_source() {
        let (new_qty, outcome) = merge_stacks(75, 75, 20);
        assert_eq!(new_qty, 75);
        assert_eq!(outcome, MergeOutcome::Overflowed { remaining: 20 });
    }

    #[test]
    fn merge_conserves_quantity() {
        for (attached, cap, incoming) in [(0u32, 1u32, 1u32), (2, 5, 5), (500, 999, 999), (75, 75, 0)] {
            let (new_qty, outcome) = merge_stacks(attached, cap, incoming);
            let remaining = match outcome {
                MergeOutcome::Absorbed => 0,
                MergeOutcome::Overflowed { remaining } => remaining,
            };
            assert_eq!(new_qty as u64 + remaining as u64, attached as u64 + incoming as u64);
            assert!(new_qty <= cap);
        }
    }

    #[test]
    fn merge_does_not_wrap_on_huge_stacks() {
        let (new_qty, outcome) = merge_stacks(u32::MAX - 1, u32::MAX, u32::MAX);
        assert_eq!(new_qty, u32::MAX);
        assert_eq!(outcome, MergeOutcome::Overflowed { remaining: u32::MAX - 1 });
    }
}
