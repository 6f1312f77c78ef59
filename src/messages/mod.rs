//! Typed requests accepted by the inventory service. Each variant carries a
//! oneshot channel for the reply.

use tokio::sync::oneshot;

use crate::domain::{Product, ProductId};
use crate::error::InventoryError;

pub type ServiceResponse<T> = oneshot::Sender<Result<T, InventoryError>>;

#[derive(Debug)]
pub enum InventoryRequest {
    Add {
        product: Product,
        respond_to: ServiceResponse<String>,
    },
    List {
        respond_to: ServiceResponse<Vec<String>>,
    },
    FindById {
        id: ProductId,
        respond_to: ServiceResponse<Option<Product>>,
    },
    RemoveById {
        id: ProductId,
        respond_to: ServiceResponse<bool>,
    },
    TotalValue {
        respond_to: ServiceResponse<f64>,
    },
    Len {
        respond_to: ServiceResponse<usize>,
    },
    Shutdown,
}
