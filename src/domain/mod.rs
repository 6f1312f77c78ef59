pub mod product;
pub mod electronic;
pub mod book;

pub use product::*;
pub use electronic::*;
pub use book::*;
