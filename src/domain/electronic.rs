use crate::domain::{Describe, ProductInfo};
use crate::error::ProductError;

const WARRANTY_STATEMENT: &str = "Este producto electrónico tiene una garantía de 1 año.";

/// An electronic appliance: a product with a brand and a rated voltage.
#[derive(Debug, Clone, PartialEq)]
pub struct Electronic {
    info: ProductInfo,
    brand: String,
    voltage: String,
}

impl Electronic {
    /// Creates an electronic product.
    ///
    /// Only the shared fields are validated; `brand` and `voltage` are taken as
    /// given and may be empty.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        price: f64,
        quantity: i64,
        brand: impl Into<String>,
        voltage: impl Into<String>,
    ) -> Result<Self, ProductError> {
        Ok(Self {
            info: ProductInfo::new(id, name, price, quantity)?,
            brand: brand.into(),
            voltage: voltage.into(),
        })
    }

    pub fn info(&self) -> &ProductInfo {
        &self.info
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn voltage(&self) -> &str {
        &self.voltage
    }

    pub fn warranty_statement(&self) -> &'static str {
        WARRANTY_STATEMENT
    }
}

impl Describe for Electronic {
    fn describe(&self) -> String {
        format!(
            "{} | Marca: {} | Voltaje: {}",
            self.info.describe(),
            self.brand,
            self.voltage
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_electronic_description_extends_base() {
        let laptop = Electronic::new(1, "Laptop HP", 899.99, 5, "HP", "110V").unwrap();
        assert_eq!(
            laptop.describe(),
            "ID: 1 | Producto: Laptop HP | Precio: $899.99 | Cantidad: 5 | Marca: HP | Voltaje: 110V"
        );
        assert_eq!(
            laptop.warranty_statement(),
            "Este producto electrónico tiene una garantía de 1 año."
        );
    }

    #[test]
    fn test_empty_brand_and_voltage_are_accepted() {
        let device = Electronic::new(9, "Cargador", 12.0, 3, "", "").unwrap();
        assert_eq!(device.brand(), "");
        assert!(device.describe().ends_with("| Marca:  | Voltaje: "));
    }

    #[test]
    fn test_base_validation_applies() {
        let err = Electronic::new(1, "Radio", -5.0, 1, "Sony", "220V").unwrap_err();
        assert_eq!(err.field(), "price");
    }
}
