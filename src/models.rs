use spacetimedb::{Identity, SpacetimeType};
use serde::{Serialize, Deserialize};

/// Enum to differentiate between various types of world containers.
#[derive(SpacetimeType, Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub enum ContainerType {
    WoodenStorageBox,
    // Other container types can be added here
}

/// Which resource a holder item accepts in its attachment slot.
#[derive(SpacetimeType, Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub enum HolderKind {
    FishingRod, // Holds bait
    Slingshot,  // Holds ammo
}

// --- Data structs for ItemLocation variants ---

#[derive(SpacetimeType, Clone, Debug, PartialEq)] // No Serialize/Deserialize due to Identity
pub struct InventoryLocationData {
    pub owner_id: Identity,
    pub slot_index: u16,
}

#[derive(SpacetimeType, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ContainerLocationData {
    pub container_type: ContainerType,
    pub container_id: u64,
    pub slot_index: u8,
}

#[derive(SpacetimeType, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AttachedLocationData {
    pub holder_instance_id: u64,
}

/// Represents the specific location of an InventoryItem.
///
/// An item attached to a holder (bait in a rod, ammo in a slingshot) is a
/// normal InventoryItem row whose location is `Attached`; there is at most
/// one such row per holder instance.
#[derive(SpacetimeType, Clone, Debug, PartialEq)] // No Serialize/Deserialize here
pub enum ItemLocation {
    Inventory(InventoryLocationData),
    Container(ContainerLocationData),
    Attached(AttachedLocationData),
    Unknown, // Represents an undefined or invalid location
}

impl ItemLocation {
    pub fn is_player_bound(&self) -> Option<Identity> {
        match self {
            ItemLocation::Inventory(data) => Some(data.owner_id),
            _ => None,
        }
    }

    pub fn is_container_bound(&self) -> Option<(ContainerType, u64)> {
        match self {
            ItemLocation::Container(data) => Some((data.container_type, data.container_id)),
            _ => None,
        }
    }

    /// True when both locations are slots of the same container
    /// (same player inventory, or same world container instance).
    pub fn same_container(&self, other: &ItemLocation) -> bool {
        match (self, other) {
            (ItemLocation::Inventory(a), ItemLocation::Inventory(b)) => a.owner_id == b.owner_id,
            (ItemLocation::Container(a), ItemLocation::Container(b)) => {
                a.container_type == b.container_type && a.container_id == b.container_id
            }
            _ => false,
        }
    }

    /// Positional index of this location within its container, if it is a
    /// container slot at all. Attached and Unknown items occupy no slot.
    pub fn container_slot_index(&self) -> Option<u16> {
        match self {
            ItemLocation::Inventory(data) => Some(data.slot_index),
            ItemLocation::Container(data) => Some(data.slot_index as u16),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn box_slot(container_id: u64, slot_index: u8) -> ItemLocation {
        ItemLocation::Container(ContainerLocationData {
            container_type: ContainerType::WoodenStorageBox,
            container_id,
            slot_index,
        })
    }

    #[test]
    fn same_container_distinguishes_box_instances() {
        assert!(box_slot(1, 0).same_container(&box_slot(1, 5)));
        assert!(!box_slot(1, 0).same_container(&box_slot(2, 0)));
    }

    #[test]
    fn binding_helpers_report_owning_side() {
        let slot = box_slot(1, 0);
        assert_eq!(slot.is_container_bound(), Some((ContainerType::WoodenStorageBox, 1)));
        assert_eq!(slot.is_player_bound(), None);
        assert_eq!(ItemLocation::Unknown.is_container_bound(), None);
    }

    #[test]
    fn attached_items_occupy_no_slot() {
        let attached = ItemLocation::Attached(AttachedLocationData { holder_instance_id: 7 });
        assert_eq!(attached.container_slot_index(), None);
        assert!(!attached.same_container(&box_slot(1, 0)));
        assert_eq!(ItemLocation::Unknown.container_slot_index(), None);
    }

    #[test]
    fn container_slot_index_reports_position() {
        assert_eq!(box_slot(3, 9).container_slot_index(), Some(9));
    }
}
