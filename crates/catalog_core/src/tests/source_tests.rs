use super::*;
use axum::{http::StatusCode, routing::get, Router};
use shared::domain::ProductId;
use tokio::net::TcpListener;

const CATALOG_JSON: &str = r#"[
  {
    "id": 1,
    "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
    "price": 109.95,
    "description": "Your perfect pack for everyday use and walks in the forest.",
    "category": "men's clothing",
    "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
    "rating": { "rate": 3.9, "count": 120 }
  },
  {
    "id": 5,
    "title": "John Hardy Women's Legends Naga Bracelet",
    "price": 695,
    "description": "From our Legends Collection.",
    "category": "jewelery",
    "image": "https://fakestoreapi.com/img/71pWzhdJNwL._AC_UL640_QL65_ML3_.jpg"
  }
]"#;

async fn spawn_catalog_server(status: StatusCode, body: &'static str) -> String {
    let app = Router::new().route("/products", get(move || async move { (status, body) }));
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}/products")
}

#[tokio::test]
async fn fetches_products_in_source_order() {
    let url = spawn_catalog_server(StatusCode::OK, CATALOG_JSON).await;
    let source = HttpProductSource::new(&url).expect("source");

    let products = source.fetch_all().await.expect("catalog");
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, ProductId(1));
    assert_eq!(products[1].id, ProductId(5));
    assert_eq!(products[1].price, 695.0);
    assert_eq!(products[1].category, "jewelery");
}

#[tokio::test]
async fn non_success_status_is_a_load_failure() {
    let url = spawn_catalog_server(StatusCode::INTERNAL_SERVER_ERROR, "oops").await;
    let source = HttpProductSource::new(&url).expect("source");

    let err = source.fetch_all().await.expect_err("status failure");
    assert_eq!(err, LoadFailure::Status(500));
    assert_eq!(err.to_string(), "HTTP error! Status: 500");
}

#[tokio::test]
async fn malformed_payload_is_a_decode_failure() {
    let url = spawn_catalog_server(StatusCode::OK, r#"[{"id": 1, "title": "no price"}]"#).await;
    let source = HttpProductSource::new(&url).expect("source");

    let err = source.fetch_all().await.expect_err("decode failure");
    assert!(matches!(err, LoadFailure::Decode(_)), "unexpected error: {err:?}");
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let source = HttpProductSource::new(&format!("http://{addr}/products")).expect("source");
    let err = source.fetch_all().await.expect_err("transport failure");
    assert!(matches!(err, LoadFailure::Transport(_)), "unexpected error: {err:?}");
}

#[tokio::test]
async fn rejects_unparseable_endpoint() {
    let err = HttpProductSource::new("not a url").err().expect("invalid endpoint");
    assert_eq!(err, LoadFailure::InvalidEndpoint("not a url".to_string()));
}

#[tokio::test]
async fn default_endpoint_parses() {
    let source = HttpProductSource::new(DEFAULT_CATALOG_URL).expect("source");
    assert_eq!(source.endpoint().host_str(), Some("fakestoreapi.com"));
}
