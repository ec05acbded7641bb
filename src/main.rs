use axum::Router;
use dotenvy::dotenv;
use supplier_directory_api::{
    config::app_config::AppConfig,
    suppliers::{
        build_suppliers_router,
        interfaces::rest::resources::{
            error_response_resource::{ErrorResponseResource, ValidationErrorResource},
            supplier_request_resource::SupplierRequestResource,
            supplier_resource::{EmailResource, PhoneResource, SupplierResource},
        },
    },
};
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        supplier_directory_api::suppliers::interfaces::rest::controllers::suppliers_rest_controller::list_suppliers,
        supplier_directory_api::suppliers::interfaces::rest::controllers::suppliers_rest_controller::get_supplier,
        supplier_directory_api::suppliers::interfaces::rest::controllers::suppliers_rest_controller::create_supplier,
        supplier_directory_api::suppliers::interfaces::rest::controllers::suppliers_rest_controller::update_supplier,
        supplier_directory_api::suppliers::interfaces::rest::controllers::suppliers_rest_controller::delete_supplier
    ),
    components(
        schemas(
            SupplierRequestResource,
            SupplierResource,
            EmailResource,
            PhoneResource,
            ErrorResponseResource,
            ValidationErrorResource
        )
    ),
    tags(
        (name = "suppliers", description = "Supplier contact directory")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = AppConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    let suppliers_router = build_suppliers_router(&config)
        .await
        .expect("failed to build suppliers router");

    let app = Router::new()
        .merge(suppliers_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    info!("server listening on http://localhost:{}", config.port);
    info!(
        "swagger UI available at http://localhost:{}/swagger-ui",
        config.port
    );

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
