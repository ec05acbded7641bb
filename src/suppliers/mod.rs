use std::sync::Arc;

use axum::Router;
use sqlx::{PgPool, migrate};
use tracing::info;

use crate::{
    config::app_config::AppConfig,
    suppliers::{
        application::services::supplier_service_impl::SupplierServiceImpl,
        infrastructure::persistence::repositories::postgres::sqlx_supplier_repository_impl::SqlxSupplierRepositoryImpl,
        interfaces::rest::controllers::suppliers_rest_controller::{
            SuppliersRestControllerState, router,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub async fn build_suppliers_router(config: &AppConfig) -> Result<Router, String> {
    let pool = PgPool::connect(&config.database_url)
        .await
        .map_err(|e| e.to_string())?;

    migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| e.to_string())?;
    info!("supplier schema migrated");

    let supplier_repository = Arc::new(SqlxSupplierRepositoryImpl::new(pool));
    let supplier_service = Arc::new(SupplierServiceImpl::new(supplier_repository));

    Ok(router(SuppliersRestControllerState { supplier_service }))
}
