mod product;

pub use product::{ListParams, Product, ProductPayload, SearchParams};
