use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Core product entity. The `id` is an opaque string: seed records carry the
/// literal ids "1"–"3", everything created at runtime gets a v4 UUID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(rename = "inStock")]
    pub in_stock: bool,
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Body for both create and update. Same schema for the two verbs: unknown
/// extra fields are dropped at deserialization, and `id` never comes from the
/// body.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(rename = "inStock")]
    pub in_stock: bool,
}

impl ProductPayload {
    /// Field-level checks beyond what deserialization already guarantees.
    /// Type mismatches never reach this point; emptiness does.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.is_empty() {
            return Err("name must not be empty");
        }
        if self.description.is_empty() {
            return Err("description must not be empty");
        }
        if self.category.is_empty() {
            return Err("category must not be empty");
        }
        Ok(())
    }

    /// Materialize a record under the given id (fresh on create, taken from
    /// the URL on update).
    pub fn into_product(self, id: String) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            in_stock: self.in_stock,
        }
    }

    pub fn into_new_product(self) -> Product {
        let id = Uuid::new_v4().to_string();
        self.into_product(id)
    }
}

// ── Query parameters ──────────────────────────────────────────────────────────

/// Query params for the list endpoint. `page` and `limit` stay raw strings so
/// that non-numeric values fall back to defaults instead of rejecting the
/// request; zero and negatives fall back too.
#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
    pub category: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListParams {
    pub fn page(&self) -> usize {
        parse_positive(self.page.as_deref()).unwrap_or(1)
    }

    /// Defaults to the full filtered length when absent or unusable.
    pub fn limit(&self, filtered_len: usize) -> usize {
        parse_positive(self.limit.as_deref()).unwrap_or(filtered_len)
    }
}

/// Query params for the search endpoint. A missing `name` behaves like the
/// empty query (matches everything).
#[derive(Debug, Deserialize, Default)]
pub struct SearchParams {
    pub name: Option<String>,
}

fn parse_positive(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|s| s.parse::<i64>().ok())
        .filter(|&n| n >= 1)
        .map(|n| n as usize)
}
