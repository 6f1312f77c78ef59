//! Actor that owns an [`Inventory`] so it can be shared between tasks.
//!
//! All requests go through a single mailbox and are applied one at a time,
//! which gives every add/remove/find/list/total call exclusive access to the
//! inventory without a lock.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};

use crate::clients::InventoryClient;
use crate::config::ServiceConfig;
use crate::domain::{Product, ProductId};
use crate::inventory::Inventory;
use crate::messages::{InventoryRequest, ServiceResponse};

pub struct InventoryService {
    receiver: mpsc::Receiver<InventoryRequest>,
    inventory: Inventory,
}

impl InventoryService {
    pub fn new(config: ServiceConfig) -> (Self, InventoryClient) {
        let (sender, receiver) = mpsc::channel(config.buffer_size);
        let service = Self {
            receiver,
            inventory: Inventory::new(),
        };
        (service, InventoryClient::new(sender))
    }

    /// Processes requests until a `Shutdown` arrives or every client is dropped.
    #[instrument(name = "inventory_service", skip(self))]
    pub async fn run(mut self) {
        info!("InventoryService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                InventoryRequest::Add {
                    product,
                    respond_to,
                } => self.handle_add(product, respond_to),
                InventoryRequest::List { respond_to } => self.handle_list(respond_to),
                InventoryRequest::FindById { id, respond_to } => {
                    self.handle_find_by_id(id, respond_to)
                }
                InventoryRequest::RemoveById { id, respond_to } => {
                    self.handle_remove_by_id(id, respond_to)
                }
                InventoryRequest::TotalValue { respond_to } => {
                    let _ = respond_to.send(Ok(self.inventory.total_value()));
                }
                InventoryRequest::Len { respond_to } => {
                    let _ = respond_to.send(Ok(self.inventory.len()));
                }
                InventoryRequest::Shutdown => {
                    info!("InventoryService shutting down");
                    break;
                }
            }
        }

        info!(product_count = self.inventory.len(), "InventoryService stopped");
    }

    #[instrument(fields(product_id = product.id()), skip(self, product, respond_to))]
    fn handle_add(&mut self, product: Product, respond_to: ServiceResponse<String>) {
        debug!("Processing add request");
        let _ = respond_to.send(self.inventory.add(product));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_list(&self, respond_to: ServiceResponse<Vec<String>>) {
        debug!("Processing list request");
        let _ = respond_to.send(Ok(self.inventory.list()));
    }

    #[instrument(fields(product_id = id), skip(self, respond_to))]
    fn handle_find_by_id(&self, id: ProductId, respond_to: ServiceResponse<Option<Product>>) {
        debug!("Processing find request");

        let product = self.inventory.find_by_id(id).cloned();
        match &product {
            Some(product) => debug!(name = product.info().name(), "Product found"),
            None => debug!("Product not found"),
        }

        let _ = respond_to.send(Ok(product));
    }

    #[instrument(fields(product_id = id), skip(self, respond_to))]
    fn handle_remove_by_id(&mut self, id: ProductId, respond_to: ServiceResponse<bool>) {
        debug!("Processing remove request");
        let _ = respond_to.send(Ok(self.inventory.remove_by_id(id)));
    }
}

/// Starts an [`InventoryService`] on the current tokio runtime.
pub fn spawn_inventory(config: ServiceConfig) -> (InventoryClient, JoinHandle<()>) {
    let (service, client) = InventoryService::new(config);
    let handle = tokio::spawn(service.run());
    (client, handle)
}
