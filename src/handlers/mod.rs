pub mod products;

/// Root route: plain text, not JSON.
pub async fn root() -> &'static str {
    "Welcome to the Product API! Go to /api/products to see all products."
}
