use axum::http::StatusCode;

const INDEX: &str = "\
Materials Inventory Management System

API Endpoints:
  POST   /api/sellers          - Create a seller
  GET    /api/sellers          - List all sellers
  GET    /api/sellers/:id      - Get a seller
  POST   /api/buyers           - Create a buyer
  GET    /api/buyers           - List all buyers
  GET    /api/buyers/:id       - Get a buyer
  POST   /api/vendors          - Create a vendor
  GET    /api/vendors          - List all vendors
  GET    /api/vendors/:id      - Get a vendor
  POST   /api/products         - Create a product
  GET    /api/products         - List all products
  GET    /api/products/:id     - Get a product
  POST   /api/inventory        - Create an inventory item
  GET    /api/inventory        - List all inventory items
  GET    /api/inventory/:id    - Get an inventory item
  POST   /api/inventory/update - Update inventory quantity
  GET    /health               - Health check
";

pub async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}

pub async fn index() -> &'static str {
    INDEX
}
