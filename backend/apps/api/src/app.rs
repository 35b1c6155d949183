//! Application router assembly
//!
//! Wraps the books routes with the greeting route, the 404 fallback and
//! the HTTP layers.

use axum::http::Uri;
use axum::{Router, routing::get};
use kernel::error::app_error::AppError;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn build(books: Router, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(root))
        .merge(books)
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// GET /
async fn root() -> &'static str {
    "Hello from the Books API"
}

async fn fallback(uri: Uri) -> AppError {
    AppError::not_found(format!("No route for {}", uri.path()))
        .with_action("Check the request path")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use books::{BooksConfig, InMemoryBookRepository, books_router_generic};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let books = books_router_generic(InMemoryBookRepository::new(), BooksConfig::default());
        build(books, CorsLayer::new())
    }

    async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
        let response = test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_root_greeting() {
        let (status, body) = get("/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"Hello from the Books API");
    }

    #[tokio::test]
    async fn test_unknown_route_is_problem_document() {
        let (status, body) = get("/bookz").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["title"], "Not Found");
        assert_eq!(json["detail"], "No route for /bookz");
    }

    #[tokio::test]
    async fn test_books_routes_are_mounted() {
        let (status, body) = get("/booksData").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "No books found" }));
    }
}
