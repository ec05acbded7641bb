use async_trait::async_trait;

use crate::suppliers::domain::model::{
    entities::supplier::Supplier, enums::supplier_domain_error::SupplierDomainError,
    value_objects::supplier_id::SupplierId,
};

/// CRUD operations over suppliers. Absence is reported as `None`, never as
/// an error.
#[async_trait]
pub trait SupplierService: Send + Sync {
    async fn get_supplier(
        &self,
        id: &SupplierId,
    ) -> Result<Option<Supplier>, SupplierDomainError>;

    async fn get_suppliers(&self) -> Result<Vec<Supplier>, SupplierDomainError>;

    async fn insert_supplier(&self, supplier: Supplier) -> Result<(), SupplierDomainError>;

    /// Replaces the stored supplier carrying the same id. Returns `None` when
    /// no such supplier exists.
    async fn update_supplier(
        &self,
        supplier: Supplier,
    ) -> Result<Option<Supplier>, SupplierDomainError>;

    async fn delete_supplier(
        &self,
        id: &SupplierId,
    ) -> Result<Option<Supplier>, SupplierDomainError>;
}
