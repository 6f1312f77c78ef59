use crate::domain::{Book, Electronic};
use crate::error::ProductError;

/// Identifier of a product, unique within an [`Inventory`](crate::inventory::Inventory).
pub type ProductId = u64;

/// Capability shared by every product variant: a human-readable summary.
pub trait Describe {
    fn describe(&self) -> String;
}

/// Fields shared by every product variant.
///
/// Values are validated once at construction and never mutated afterwards,
/// so `id > 0`, `price >= 0` and `quantity >= 0` hold for the lifetime of
/// the value.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInfo {
    id: ProductId,
    name: String,
    price: f64,
    quantity: u64,
}

impl ProductInfo {
    /// Creates a validated product.
    ///
    /// # Arguments
    /// * `id` - Must be strictly positive
    /// * `name` - Display name, accepted as is
    /// * `price` - Unit price, must be finite and non-negative
    /// * `quantity` - Units on hand, must be non-negative
    ///
    /// # Errors
    /// Returns [`ProductError::InvalidArgument`] naming the first field that
    /// violates its constraint.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> Result<Self, ProductError> {
        let id = ProductId::try_from(id)
            .ok()
            .filter(|id| *id > 0)
            .ok_or_else(|| ProductError::invalid("id", format!("must be positive, got {id}")))?;

        if !price.is_finite() || price < 0.0 {
            return Err(ProductError::invalid(
                "price",
                format!("must be a non-negative number, got {price}"),
            ));
        }

        let quantity = u64::try_from(quantity).map_err(|_| {
            ProductError::invalid("quantity", format!("must be non-negative, got {quantity}"))
        })?;

        Ok(Self {
            id,
            name: name.into(),
            // folds -0.0 into 0.0
            price: price + 0.0,
            quantity,
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Stock value of this line: `price * quantity`.
    pub fn stock_value(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

impl Describe for ProductInfo {
    fn describe(&self) -> String {
        format!(
            "ID: {} | Producto: {} | Precio: ${:.2} | Cantidad: {}",
            self.id, self.name, self.price, self.quantity
        )
    }
}

/// A product held by the inventory, tagged by variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Product {
    Generic(ProductInfo),
    Electronic(Electronic),
    Book(Book),
}

impl Product {
    /// Shared fields, whatever the variant.
    pub fn info(&self) -> &ProductInfo {
        match self {
            Product::Generic(info) => info,
            Product::Electronic(electronic) => electronic.info(),
            Product::Book(book) => book.info(),
        }
    }

    pub fn id(&self) -> ProductId {
        self.info().id()
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Product::Generic(_) => "generic",
            Product::Electronic(_) => "electronic",
            Product::Book(_) => "book",
        }
    }

    pub fn as_electronic(&self) -> Option<&Electronic> {
        match self {
            Product::Electronic(electronic) => Some(electronic),
            _ => None,
        }
    }

    pub fn as_book(&self) -> Option<&Book> {
        match self {
            Product::Book(book) => Some(book),
            _ => None,
        }
    }
}

impl Describe for Product {
    fn describe(&self) -> String {
        match self {
            Product::Generic(info) => info.describe(),
            Product::Electronic(electronic) => electronic.describe(),
            Product::Book(book) => book.describe(),
        }
    }
}

impl From<ProductInfo> for Product {
    fn from(info: ProductInfo) -> Self {
        Product::Generic(info)
    }
}

impl From<Electronic> for Product {
    fn from(electronic: Electronic) -> Self {
        Product::Electronic(electronic)
    }
}

impl From<Book> for Product {
    fn from(book: Book) -> Self {
        Product::Book(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_describe_generic_product() {
        let info = ProductInfo::new(2, "Silla de oficina", 149.5, 10).unwrap();
        assert_eq!(
            info.describe(),
            "ID: 2 | Producto: Silla de oficina | Precio: $149.50 | Cantidad: 10"
        );
    }

    #[test]
    fn test_zero_price_and_quantity_are_valid() {
        let info = ProductInfo::new(7, "Muestra gratis", 0.0, 0).unwrap();
        assert_eq!(info.stock_value(), 0.0);
    }

    #[test]
    fn test_invalid_id_is_rejected() {
        let err = ProductInfo::new(0, "Nada", 1.0, 1).unwrap_err();
        assert_eq!(err.field(), "id");

        let err = ProductInfo::new(-4, "Nada", 1.0, 1).unwrap_err();
        assert_eq!(err.field(), "id");
    }

    #[test]
    fn test_invalid_price_is_rejected() {
        let err = ProductInfo::new(1, "Nada", -0.01, 1).unwrap_err();
        assert_eq!(err.field(), "price");

        let err = ProductInfo::new(1, "Nada", f64::NAN, 1).unwrap_err();
        assert_eq!(err.field(), "price");

        let err = ProductInfo::new(1, "Nada", f64::INFINITY, 1).unwrap_err();
        assert_eq!(err.field(), "price");
    }

    #[test]
    fn test_negative_zero_price_is_stored_as_zero() {
        let info = ProductInfo::new(1, "Muestra", -0.0, 1).unwrap();
        assert!(info.price().is_sign_positive());
        assert_eq!(
            info.describe(),
            "ID: 1 | Producto: Muestra | Precio: $0.00 | Cantidad: 1"
        );
    }

    #[test]
    fn test_invalid_quantity_is_rejected() {
        let err = ProductInfo::new(1, "Nada", 1.0, -1).unwrap_err();
        assert!(matches!(err, ProductError::InvalidArgument { field: "quantity", .. }));
    }

    #[test]
    fn test_product_enum_delegates_to_variant() {
        let product: Product = ProductInfo::new(5, "Lámpara", 20.0, 2).unwrap().into();
        assert_eq!(product.id(), 5);
        assert_eq!(product.kind(), "generic");
        assert!(product.as_electronic().is_none());
        assert!(product.as_book().is_none());
        assert_eq!(product.describe(), product.info().describe());
    }

    proptest! {
        #[test]
        fn test_valid_fields_always_construct(
            id in 1i64..i64::MAX,
            name in "[a-zA-Z ]{1,20}",
            cents in 0u32..10_000_000,
            quantity in 0i64..1_000_000,
        ) {
            let price = f64::from(cents) / 100.0;
            let info = ProductInfo::new(id, name.clone(), price, quantity).unwrap();
            let description = info.describe();
            let expected_id = format!("ID: {id} ");
            let expected_price = format!("${price:.2}");
            let expected_quantity = format!("Cantidad: {quantity}");
            prop_assert!(description.contains(&expected_id));
            prop_assert!(description.contains(&name));
            prop_assert!(description.contains(&expected_price));
            prop_assert!(description.ends_with(&expected_quantity));
        }

        #[test]
        fn test_invalid_fields_never_construct(
            id in i64::MIN..=0,
            price in -1_000_000.0f64..-0.001,
            quantity in i64::MIN..0,
        ) {
            prop_assert_eq!(ProductInfo::new(id, "x", 1.0, 1).unwrap_err().field(), "id");
            prop_assert_eq!(ProductInfo::new(1, "x", price, 1).unwrap_err().field(), "price");
            prop_assert_eq!(ProductInfo::new(1, "x", 1.0, quantity).unwrap_err().field(), "quantity");
        }
    }
}
