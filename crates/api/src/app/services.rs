use std::sync::Arc;

use materials_service::InventoryService;
use materials_store::InMemoryStore;

/// Service stack shared by every handler.
pub type AppServices = InventoryService<Arc<InMemoryStore>>;

/// In-memory wiring: one store for the lifetime of the process.
pub fn build_services() -> Arc<AppServices> {
    Arc::new(InventoryService::new(Arc::new(InMemoryStore::new())))
}
