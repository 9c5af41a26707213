use crate::{
    abstract_trait::product::service::{DynProductCommandService, DynProductQueryService},
    di::DependenciesInject,
    domain::{
        requests::CreateProductRequest,
        response::{ProductDetailResponse, ProductResponse},
    },
    middleware::{RequestCancellation, cancel_on_disconnect},
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::{StatusCode, header},
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use shared::errors::{ErrorResponse, HttpError};
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Product",
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product detail", body = ProductDetailResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 499, description = "Client closed request"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_product(
    Extension(service): Extension<DynProductQueryService>,
    Extension(cancel): Extension<RequestCancellation>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(&cancel.0, id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Product",
    responses(
        (status = 200, description = "List of products", body = Vec<ProductResponse>),
        (status = 499, description = "Client closed request"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_products(
    Extension(service): Extension<DynProductQueryService>,
    Extension(cancel): Extension<RequestCancellation>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&cancel.0).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Product",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 499, description = "Client closed request"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_product(
    Extension(service): Extension<DynProductCommandService>,
    Extension(cancel): Extension<RequestCancellation>,
    Json(req): Json<CreateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create(&cancel.0, &req).await?;
    let location = format!("/api/products/{}", response.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(response),
    ))
}

#[utoipa::path(
    get,
    path = "/api/seed-products",
    tag = "Product",
    responses(
        (status = 200, description = "Fake products inserted", body = serde_json::Value),
        (status = 400, description = "Products already exist", body = ErrorResponse),
        (status = 499, description = "Client closed request"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn seed_products(
    Extension(service): Extension<DynProductCommandService>,
    Extension(cancel): Extension<RequestCancellation>,
) -> Result<impl IntoResponse, HttpError> {
    let inserted = service.seed(&cancel.0).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "message": format!("{inserted} fake products inserted successfully.")
        })),
    ))
}

pub fn product_routes(di: &DependenciesInject) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/products", get(get_products))
        .route("/api/products", post(create_product))
        .route("/api/products/{id}", get(get_product))
        .route("/api/seed-products", get(seed_products))
        .route_layer(middleware::from_fn(cancel_on_disconnect))
        .layer(Extension(di.product_query.clone()))
        .layer(Extension(di.product_command.clone()))
}
