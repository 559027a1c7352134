use indexmap::IndexMap;

use crate::models::Product;

// ── Store: the in-memory product collection ──────────────────────────────────

/// Insertion-ordered, process-scoped product store. The whole state model:
/// seeded at startup, mutated in place, gone on exit. Callers are expected to
/// hold it behind an `RwLock`; mutating handlers take the write guard for
/// their whole find-then-mutate sequence, so id lookups and the mutation they
/// gate never interleave.
#[derive(Debug, Default)]
pub struct Store {
    products: Vec<Product>,
}

impl Store {
    /// The three fixed records every fresh process starts with. Seed ids are
    /// the literal strings "1"–"3"; only runtime-created records get UUIDs.
    pub fn with_seed_data() -> Self {
        let seed = |id: &str, name: &str, description: &str, price: f64, category: &str, in_stock: bool| {
            Product {
                id: id.to_string(),
                name: name.to_string(),
                description: description.to_string(),
                price,
                category: category.to_string(),
                in_stock,
            }
        };

        Self {
            products: vec![
                seed("1", "Laptop", "High-performance laptop with 16GB RAM", 1200.0, "electronics", true),
                seed("2", "Smartphone", "Latest model with 128GB storage", 800.0, "electronics", true),
                seed("3", "Coffee Maker", "Programmable coffee maker with timer", 50.0, "kitchen", false),
            ],
        }
    }

    // ── Reads ──────────────────────────────────────────────────────────────────

    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }

    /// Case-insensitive substring match on product names. Empty query matches
    /// everything.
    pub fn search(&self, query: &str) -> Vec<Product> {
        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Count of records per category, in first-seen category order. Categories
    /// with no records simply do not appear.
    pub fn stats(&self) -> IndexMap<String, usize> {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for product in &self.products {
            *counts.entry(product.category.clone()).or_insert(0) += 1;
        }
        counts
    }

    // ── Writes ─────────────────────────────────────────────────────────────────

    /// Append to the end; insertion order is the list order.
    pub fn insert(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Full replacement of the record at `index`.
    pub fn replace(&mut self, index: usize, product: Product) -> &Product {
        self.products[index] = product;
        &self.products[index]
    }

    /// Remove exactly one record, preserving the relative order of the rest.
    pub fn remove(&mut self, index: usize) -> Product {
        self.products.remove(index)
    }
}
