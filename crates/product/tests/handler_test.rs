//! Handler tests for the product endpoints: request routing, status
//! codes, response shapes and the client-closed-request path, with the
//! service layer mocked out.

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use mockall::mock;
use product::abstract_trait::product::service::{
    ProductCommandServiceTrait, ProductQueryServiceTrait,
};
use product::di::DependenciesInject;
use product::domain::requests::CreateProductRequest;
use product::domain::response::{ProductDetailResponse, ProductResponse};
use product::handler::product_routes;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use shared::errors::ServiceError;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;
use uuid::Uuid;

mock! {
    QueryService {}

    #[async_trait]
    impl ProductQueryServiceTrait for QueryService {
        async fn find_by_id(
            &self,
            cancel: &CancellationToken,
            id: Uuid,
        ) -> Result<ProductDetailResponse, ServiceError>;
        async fn find_all(
            &self,
            cancel: &CancellationToken,
        ) -> Result<Vec<ProductResponse>, ServiceError>;
    }
}

mock! {
    CommandService {}

    #[async_trait]
    impl ProductCommandServiceTrait for CommandService {
        async fn create(
            &self,
            cancel: &CancellationToken,
            req: &CreateProductRequest,
        ) -> Result<ProductResponse, ServiceError>;
        async fn seed(&self, cancel: &CancellationToken) -> Result<usize, ServiceError>;
    }
}

fn app(query: MockQueryService, command: MockCommandService) -> Router {
    let di = DependenciesInject {
        product_query: Arc::new(query),
        product_command: Arc::new(command),
    };

    let (router, _api) = product_routes(&di).split_for_parts();
    router
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn widget_detail() -> ProductDetailResponse {
    ProductDetailResponse {
        name: "Widget".to_string(),
        description: "A widget".to_string(),
        price: Decimal::new(1999, 2),
        stock: 5,
    }
}

fn widget_response(id: Uuid) -> ProductResponse {
    ProductResponse {
        id,
        name: "Widget".to_string(),
        description: "A widget".to_string(),
        price: Decimal::new(1999, 2),
        stock: 5,
    }
}

#[tokio::test]
async fn get_product_returns_detail_without_id() {
    let id = Uuid::new_v4();

    let mut query = MockQueryService::new();
    query
        .expect_find_by_id()
        .withf(move |_, got| *got == id)
        .returning(|_, _| Ok(widget_detail()));

    let app = app(query, MockCommandService::new());

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/products/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert!(body.get("id").is_none());
    assert_eq!(body["name"], "Widget");
    assert_eq!(body["description"], "A widget");
    assert_eq!(body["price"], json!(19.99));
    assert_eq!(body["stock"], 5);
}

#[tokio::test]
async fn get_product_answers_404_with_message_body() {
    let mut query = MockQueryService::new();
    query
        .expect_find_by_id()
        .returning(|_, _| Err(ServiceError::NotFound("Product not found.".to_string())));

    let app = app(query, MockCommandService::new());

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/products/{}", Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response.into_body()).await;
    assert!(!body["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn get_product_rejects_malformed_id_before_the_handler() {
    let query = MockQueryService::new();

    let app = app(query, MockCommandService::new());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/products/not-a-uuid")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_products_lists_full_records_with_ids() {
    let mut query = MockQueryService::new();
    query.expect_find_all().returning(|_| {
        Ok(vec![
            widget_response(Uuid::new_v4()),
            widget_response(Uuid::new_v4()),
        ])
    });

    let app = app(query, MockCommandService::new());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/products")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    let items = body.as_array().unwrap();
    assert!(items.len() >= 2);
    for item in items {
        assert!(item.get("id").is_some());
    }
}

#[tokio::test]
async fn create_product_returns_201_with_location_and_full_body() {
    let id = Uuid::new_v4();

    let mut command = MockCommandService::new();
    command
        .expect_create()
        .withf(|_, req| req.name == "Widget" && req.stock == 5)
        .returning(move |_, _| Ok(widget_response(id)));

    let app = app(MockQueryService::new(), command);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/products")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_string(&json!({
                        "name": "Widget",
                        "description": "A widget",
                        "price": 19.99,
                        "stock": 5
                    }))
                    .unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response.headers()[header::LOCATION].to_str().unwrap();
    assert_eq!(location, format!("/api/products/{id}"));

    let body = json_body(response.into_body()).await;
    assert_eq!(body["id"], json!(id.to_string()));
    assert_eq!(body["name"], "Widget");
    assert_eq!(body["description"], "A widget");
    assert_eq!(body["price"], json!(19.99));
    assert_eq!(body["stock"], 5);
}

#[tokio::test]
async fn create_product_defaults_missing_description_to_empty() {
    let mut command = MockCommandService::new();
    command
        .expect_create()
        .withf(|_, req| req.description.is_empty())
        .returning(|_, req| {
            let mut created = widget_response(Uuid::new_v4());
            created.description = req.description.clone();
            Ok(created)
        });

    let app = app(MockQueryService::new(), command);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/products")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_string(&json!({
                        "name": "Widget",
                        "price": 19.99,
                        "stock": 5
                    }))
                    .unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["description"], "");
}

#[tokio::test]
async fn seed_products_answers_200_with_confirmation() {
    let mut command = MockCommandService::new();
    command.expect_seed().returning(|_| Ok(10));

    let app = app(MockQueryService::new(), command);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/seed-products")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert!(body["message"].as_str().unwrap().contains("10"));
}

#[tokio::test]
async fn seed_products_answers_400_when_table_is_populated() {
    let mut command = MockCommandService::new();
    command
        .expect_seed()
        .returning(|_| Err(ServiceError::AlreadySeeded("Products already exist.".to_string())));

    let app = app(MockQueryService::new(), command);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/seed-products")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Products already exist.");
}

#[tokio::test]
async fn canceled_operation_surfaces_as_499() {
    let mut query = MockQueryService::new();
    query
        .expect_find_all()
        .returning(|_| Err(ServiceError::Canceled));

    let app = app(query, MockCommandService::new());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/products")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 499);
}
