//! # inventario
//!
//! In-memory product inventory.
//!
//! - [`domain`] - product variants ([`ProductInfo`], [`Electronic`], [`Book`]) and the
//!   [`Describe`] capability, unified by the [`Product`] enum
//! - [`inventory`] - [`Inventory`], an id-keyed store that lists in insertion order
//! - [`service`] - [`InventoryService`], an actor owning an [`Inventory`] for use from
//!   concurrent tasks, driven through an [`InventoryClient`]
//!
//! ```
//! use inventario::{Book, Electronic, Inventory};
//!
//! let mut inventory = Inventory::new();
//! inventory.add(Electronic::new(1, "Laptop HP", 899.99, 5, "HP", "110V")?)?;
//! inventory.add(Book::new(3, "Cien años de soledad", 29.99, 15, "Gabriel García Márquez", 496)?)?;
//!
//! assert!((inventory.total_value() - 4949.80).abs() < 1e-9);
//! # Ok::<(), inventario::InventoryError>(())
//! ```

pub mod clients;
pub mod config;
pub mod domain;
pub mod error;
pub mod inventory;
pub mod messages;
pub mod service;
pub mod telemetry;


pub use clients::InventoryClient;
pub use config::ServiceConfig;
pub use domain::{Book, Describe, Electronic, Product, ProductId, ProductInfo};
pub use error::{InventoryError, ProductError};
pub use inventory::Inventory;
pub use service::{spawn_inventory, InventoryService};
