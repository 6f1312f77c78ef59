use crate::domain::{Describe, ProductInfo};
use crate::error::ProductError;

const READING_RECOMMENDATION: &str =
    "Este libro es altamente recomendado para los amantes de la literatura.";

/// A book: a product with an author and a page count.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    info: ProductInfo,
    author: String,
    page_count: i32,
}

impl Book {
    /// Creates a book. `author` and `page_count` are not validated.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        price: f64,
        quantity: i64,
        author: impl Into<String>,
        page_count: i32,
    ) -> Result<Self, ProductError> {
        Ok(Self {
            info: ProductInfo::new(id, name, price, quantity)?,
            author: author.into(),
            page_count,
        })
    }

    pub fn info(&self) -> &ProductInfo {
        &self.info
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn page_count(&self) -> i32 {
        self.page_count
    }

    pub fn reading_recommendation(&self) -> &'static str {
        READING_RECOMMENDATION
    }
}

impl Describe for Book {
    fn describe(&self) -> String {
        format!(
            "{} | Autor: {} | Páginas: {}",
            self.info.describe(),
            self.author,
            self.page_count
        )
    }
}
