//! Handle used to talk to a running [`InventoryService`](crate::service::InventoryService).

#[macro_use]
mod macros;

use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::domain::{Product, ProductId};
use crate::error::InventoryError;
use crate::messages::InventoryRequest;

/// Cheap to clone; every clone feeds the same service mailbox.
#[derive(Clone, Debug)]
pub struct InventoryClient {
    sender: mpsc::Sender<InventoryRequest>,
}

impl InventoryClient {
    pub fn new(sender: mpsc::Sender<InventoryRequest>) -> Self {
        Self { sender }
    }

    /// Asks the service to stop. Requests already queued ahead of this one are
    /// still answered.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), InventoryError> {
        debug!("Sending shutdown request");
        self.sender
            .send(InventoryRequest::Shutdown)
            .await
            .map_err(|e| InventoryError::ServiceUnavailable(e.to_string()))
    }
}

client_method!(InventoryClient => fn add_product(product: Product) -> String as InventoryRequest::Add);
client_method!(InventoryClient => fn list_products() -> Vec<String> as InventoryRequest::List);
client_method!(InventoryClient => fn find_product(id: ProductId) -> Option<Product> as InventoryRequest::FindById);
client_method!(InventoryClient => fn remove_product(id: ProductId) -> bool as InventoryRequest::RemoveById);
client_method!(InventoryClient => fn total_value() -> f64 as InventoryRequest::TotalValue);
client_method!(InventoryClient => fn product_count() -> usize as InventoryRequest::Len);
