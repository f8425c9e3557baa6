// Inventory service models and client
pub mod types;
pub mod client;

#[cfg(test)]
pub mod mock;

pub use client::{HttpInventoryClient, InventoryApi};
pub use types::{AssignRequest, ComponentType, InventoryItem, ServerConfiguration, TemplateComponent};
