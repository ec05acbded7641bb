use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::suppliers::{
    domain::{
        model::{
            entities::supplier::Supplier, enums::supplier_domain_error::SupplierDomainError,
            validation::validation_result::ValidationResult,
            value_objects::supplier_id::SupplierId,
        },
        services::supplier_service::SupplierService,
    },
    infrastructure::persistence::repositories::supplier_repository::SupplierRepository,
};

pub struct SupplierServiceImpl {
    supplier_repository: Arc<dyn SupplierRepository>,
}

impl SupplierServiceImpl {
    pub fn new(supplier_repository: Arc<dyn SupplierRepository>) -> Self {
        Self {
            supplier_repository,
        }
    }

    fn ensure_valid(supplier: &Supplier) -> Result<(), SupplierDomainError> {
        let failures: Vec<ValidationResult> = supplier.validate().collect();
        if failures.is_empty() {
            return Ok(());
        }

        warn!(
            supplier_id = %supplier.id(),
            failures = failures.len(),
            "supplier rejected by validation"
        );
        Err(SupplierDomainError::ValidationFailed(failures))
    }
}

#[async_trait]
impl SupplierService for SupplierServiceImpl {
    async fn get_supplier(
        &self,
        id: &SupplierId,
    ) -> Result<Option<Supplier>, SupplierDomainError> {
        self.supplier_repository.find_by_id(id).await
    }

    async fn get_suppliers(&self) -> Result<Vec<Supplier>, SupplierDomainError> {
        self.supplier_repository.list_all().await
    }

    async fn insert_supplier(&self, supplier: Supplier) -> Result<(), SupplierDomainError> {
        Self::ensure_valid(&supplier)?;

        self.supplier_repository.add(&supplier).await?;
        info!(supplier_id = %supplier.id(), "supplier inserted");

        Ok(())
    }

    async fn update_supplier(
        &self,
        supplier: Supplier,
    ) -> Result<Option<Supplier>, SupplierDomainError> {
        Self::ensure_valid(&supplier)?;

        if !self.supplier_repository.replace(&supplier).await? {
            return Ok(None);
        }
        info!(supplier_id = %supplier.id(), "supplier updated");

        Ok(Some(supplier))
    }

    async fn delete_supplier(
        &self,
        id: &SupplierId,
    ) -> Result<Option<Supplier>, SupplierDomainError> {
        let removed = self.supplier_repository.remove(id).await?;
        if removed.is_some() {
            info!(supplier_id = %id, "supplier deleted");
        }

        Ok(removed)
    }
}
