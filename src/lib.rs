use spacetimedb::ReducerContext;
use log;

// Auto-stack module: consolidates freshly added bait and slingshot ammo
// into the attached stacks of matching holders in the same container.

pub mod models;
pub mod items;
pub mod items_database;
pub mod stack_policies;
pub mod auto_stack;

// --- Lifecycle Reducers ---

// Called once when the module is published or updated
#[spacetimedb::reducer(init)]
pub fn init_module(ctx: &ReducerContext) -> Result<(), String> {
    log::info!("Initializing module...");

    // Seed the static item catalogue first; everything else references it
    crate::items::seed_items(ctx)?;

    log::info!("Module initialization complete.");
    Ok(())
}
