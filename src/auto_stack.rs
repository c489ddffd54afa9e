use spacetimedb::{ReducerContext, Table};
use log;

use crate::items::{
    find_attached_item, get_item_definition, merge_stacks, remove_item_keep_slot,
    InventoryItem, ItemDefinition, MergeOutcome, NUM_BOX_SLOTS, NUM_PLAYER_INVENTORY_SLOTS,
};
use crate::items::{
    inventory_item as InventoryItemTableTrait,
    item_definition as ItemDefinitionTableTrait,
};
use crate::models::{ContainerType, ItemLocation};
use crate::stack_policies::{AmmoStacking, BaitStacking, StackPolicy};

// --- Consolidation Engine ---

/// One holder in container scan order, snapshotted with its attached stack
/// and that stack's definition. Holders with nothing attached never become
/// candidates; they cannot receive a merge.
pub(crate) struct HolderCandidate {
    pub attached: InventoryItem,
    pub attached_def: ItemDefinition,
}

/// The computed effect of one consolidation pass, applied to the tables
/// only after planning is complete.
pub(crate) struct ConsolidationPlan {
    /// (attached instance id, new quantity), in scan order.
    pub attached_updates: Vec<(u64, u32)>,
    /// Quantity left with the source item after all merges.
    pub remaining: u32,
}

impl ConsolidationPlan {
    pub fn fully_absorbed(&self) -> bool {
        self.remaining == 0
    }
}

/// Walks the candidate holders in container order and merges the added
/// item's quantity into each compatible attached stack, carrying overflow to
/// the next candidate. Stops as soon as nothing remains; running out of
/// candidates first is not an error, the leftover stays with the source.
pub(crate) fn plan_consolidation<P: StackPolicy>(
    candidates: &[HolderCandidate],
    added: &InventoryItem,
    added_def: &ItemDefinition,
    policy: &P,
) -> ConsolidationPlan {
    let mut remaining = added.quantity;
    let mut attached_updates = Vec::new();

    for candidate in candidates {
        if remaining == 0 {
            break;
        }
        if !policy.is_compatible(&candidate.attached, &candidate.attached_def, added, added_def) {
            continue;
        }
        let (new_quantity, outcome) =
            merge_stacks(candidate.attached.quantity, candidate.attached_def.stack_size, remaining);
        if new_quantity == candidate.attached.quantity {
            // Attached stack already at capacity; everything carries over.
            continue;
        }
        attached_updates.push((candidate.attached.instance_id, new_quantity));
        remaining = match outcome {
            MergeOutcome::Absorbed => 0,
            MergeOutcome::Overflowed { remaining } => remaining,
        };
    }

    ConsolidationPlan { attached_updates, remaining }
}

// Snapshots the compatible-holder candidates of the added item's container,
// ordered by slot index. Table iteration order is not slot order.
fn collect_holder_candidates<P: StackPolicy>(
    ctx: &ReducerContext,
    added: &InventoryItem,
    policy: &P,
) -> Vec<HolderCandidate> {
    let mut slotted: Vec<(u16, InventoryItem)> = ctx.db
        .inventory_item().iter()
        .filter(|i| i.instance_id != added.instance_id && i.location.same_container(&added.location))
        .filter_map(|i| i.location.container_slot_index().map(|slot| (slot, i)))
        .collect();
    slotted.sort_by_key(|(slot, _)| *slot);

    let mut candidates = Vec::new();
    for (_slot, holder) in slotted {
        let holder_def = match ctx.db.item_definition().id().find(holder.item_def_id) {
            Some(def) => def,
            None => {
                log::warn!("[AutoStack {}] Definition {} missing for item {}. Skipping slot.",
                         policy.label(), holder.item_def_id, holder.instance_id);
                continue;
            }
        };
        if !policy.holds(&holder_def) {
            continue;
        }
        let attached = match find_attached_item(ctx, holder.instance_id) {
            Some(attached) => attached,
            None => continue, // Nothing loaded, nothing to top up
        };
        let attached_def = match ctx.db.item_definition().id().find(attached.item_def_id) {
            Some(def) => def,
            None => {
                log::warn!("[AutoStack {}] Definition {} missing for attached item {}. Skipping holder {}.",
                         policy.label(), attached.item_def_id, attached.instance_id, holder.instance_id);
                continue;
            }
        };
        candidates.push(HolderCandidate { attached, attached_def });
    }
    candidates
}

/// Consolidates one newly added item into the holders of its own container.
/// Never reaches across containers.
pub(crate) fn consolidate_added_item<P: StackPolicy>(
    ctx: &ReducerContext,
    added: &InventoryItem,
    added_def: &ItemDefinition,
    policy: &P,
) -> Result<(), String> {
    if added.quantity == 0 {
        // Already consumed; double delivery degrades to a no-op.
        log::debug!("[AutoStack {}] Item {} has no quantity left. Nothing to do.",
                  policy.label(), added.instance_id);
        return Ok(());
    }

    let candidates = collect_holder_candidates(ctx, added, policy);
    let plan = plan_consolidation(&candidates, added, added_def, policy);
    if plan.attached_updates.is_empty() {
        return Ok(()); // No compatible holder with capacity; leave the item alone
    }

    let inventory_items = ctx.db.inventory_item();
    for (attached_id, new_quantity) in &plan.attached_updates {
        match inventory_items.instance_id().find(*attached_id) {
            Some(mut attached) => {
                attached.quantity = *new_quantity;
                inventory_items.instance_id().update(attached);
            }
            None => {
                // Snapshot was taken in this same call, so the row must exist.
                return Err(format!("Attached item {} vanished mid-consolidation.", attached_id));
            }
        }
    }

    if plan.fully_absorbed() {
        log::info!("[AutoStack {}] {}x '{}' (item {}) fully absorbed into {} holder(s). Removing source, slot kept.",
                 policy.label(), added.quantity, added_def.name, added.instance_id, plan.attached_updates.len());
        remove_item_keep_slot(ctx, added.instance_id)?;
    } else {
        let mut source = inventory_items.instance_id().find(added.instance_id)
            .ok_or_else(|| format!("Source item {} vanished mid-consolidation.", added.instance_id))?;
        source.quantity = plan.remaining;
        inventory_items.instance_id().update(source);
        log::info!("[AutoStack {}] {}x '{}' (item {}) partially absorbed; {} left in its slot.",
                 policy.label(), added.quantity - plan.remaining, added_def.name, added.instance_id, plan.remaining);
    }
    Ok(())
}

// Classifies an added item and runs it through the matching policy, if any.
// Bait is checked before ammo, so one item consolidates under one policy.
fn dispatch_added_item(ctx: &ReducerContext, added: &InventoryItem) -> Result<(), String> {
    let added_def = match get_item_definition(ctx, added.item_def_id) {
        Ok(def) => def,
        Err(e) => {
            log::warn!("[AutoStack] Skipping added item {}: {}", added.instance_id, e);
            return Ok(());
        }
    };

    let bait = BaitStacking;
    let ammo = AmmoStacking;
    if bait.classifies(&added_def) {
        consolidate_added_item(ctx, added, &added_def, &bait)
    } else if ammo.classifies(&added_def) {
        consolidate_added_item(ctx, added, &added_def, &ammo)
    } else {
        Ok(())
    }
}

// --- Notification Reducers ---

/// Called by the host after items land in the sender's inventory.
#[spacetimedb::reducer]
pub fn inventory_items_added(ctx: &ReducerContext, added_instance_ids: Vec<u64>) -> Result<(), String> {
    let sender_id = ctx.sender;
    for instance_id in added_instance_ids {
        let item = match ctx.db.inventory_item().instance_id().find(instance_id) {
            Some(item) => item,
            None => {
                log::warn!("[AutoStack] Added item {} not found. Skipping.", instance_id);
                continue;
            }
        };
        match &item.location {
            ItemLocation::Inventory(data) if data.owner_id == sender_id => {
                if data.slot_index >= NUM_PLAYER_INVENTORY_SLOTS {
                    log::warn!("[AutoStack] Item {} reports inventory slot {} out of range. Skipping.",
                             instance_id, data.slot_index);
                    continue;
                }
            }
            other => {
                log::warn!("[AutoStack] Item {} is not in the caller's inventory (location {:?}). Skipping.",
                         instance_id, other);
                continue;
            }
        }
        dispatch_added_item(ctx, &item)?;
    }
    Ok(())
}

/// Called by the host after items land in a world container.
#[spacetimedb::reducer]
pub fn container_items_added(
    ctx: &ReducerContext,
    container_type: ContainerType,
    container_id: u64,
    added_instance_ids: Vec<u64>,
) -> Result<(), String> {
    for instance_id in added_instance_ids {
        let item = match ctx.db.inventory_item().instance_id().find(instance_id) {
            Some(item) => item,
            None => {
                log::warn!("[AutoStack] Added item {} not found. Skipping.", instance_id);
                continue;
            }
        };
        match &item.location {
            ItemLocation::Container(data)
                if data.container_type == container_type && data.container_id == container_id =>
            {
                if data.slot_index >= NUM_BOX_SLOTS {
                    log::warn!("[AutoStack] Item {} reports container slot {} out of range. Skipping.",
                             instance_id, data.slot_index);
                    continue;
                }
            }
            other => {
                log::warn!("[AutoStack] Item {} is not in {:?} {} (location {:?}). Skipping.",
                         instance_id, container_type, container_id, other);
                continue;
            }
        }
        dispatch_added_item(ctx, &item)?;
    }
    Ok(())
}
