use crate::items::{ItemCategory, ItemDefinition};
use crate::models::HolderKind;

pub struct ItemBuilder {
    inner: ItemDefinition,
}

impl ItemBuilder {
    pub fn new(name: &str, description: &str, category: ItemCategory) -> Self {
        Self {
            inner: ItemDefinition {
                id: 0, // Will be auto-generated
                item_id: String::new(),           // Set with .object_id() / .tool_id() / .weapon_id()
                qualified_item_id: String::new(),
                name: name.to_string(),
                description: description.to_string(),
                category,
                category_code: 0,
                icon_asset_name: String::new(),   // Will be set with .icon()
                is_stackable: false,
                stack_size: 1,
                is_equippable: false,
                holder_kind: None,
                is_generic_object: false,
                is_big_craftable: false,
            },
        }
    }

    /// Host object id; qualifies as "(O)<id>" and marks a generic object.
    pub fn object_id(mut self, id: &str) -> Self {
        self.inner.item_id = id.to_string();
        self.inner.qualified_item_id = format!("(O){}", id);
        self.inner.is_generic_object = true;
        self
    }

    /// Host tool id; qualifies as "(T)<id>".
    pub fn tool_id(mut self, id: &str) -> Self {
        self.inner.item_id = id.to_string();
        self.inner.qualified_item_id = format!("(T){}", id);
        self
    }

    /// Host weapon id; qualifies as "(W)<id>".
    pub fn weapon_id(mut self, id: &str) -> Self {
        self.inner.item_id = id.to_string();
        self.inner.qualified_item_id = format!("(W){}", id);
        self
    }

    pub fn category_code(mut self, code: i32) -> Self {
        self.inner.category_code = code;
        self
    }

    pub fn icon(mut self, icon_name: &str) -> Self {
        self.inner.icon_asset_name = icon_name.to_string();
        self
    }

    pub fn stackable(mut self, stack_size: u32) -> Self {
        self.inner.is_stackable = true;
        self.inner.stack_size = stack_size;
        self
    }

    pub fn equippable(mut self) -> Self {
        self.inner.is_equippable = true;
        self
    }

    /// Marks this definition as a holder with one attachment slot.
    pub fn holder(mut self, kind: HolderKind) -> Self {
        self.inner.holder_kind = Some(kind);
        self
    }

    pub fn build(self) -> ItemDefinition {
        self.inner
    }
}
