use async_trait::async_trait;

use crate::suppliers::domain::model::{
    entities::supplier::Supplier, enums::supplier_domain_error::SupplierDomainError,
    value_objects::supplier_id::SupplierId,
};

/// Persistence context for suppliers. Every mutating call is committed
/// atomically before it returns.
#[async_trait]
pub trait SupplierRepository: Send + Sync {
    async fn find_by_id(&self, id: &SupplierId) -> Result<Option<Supplier>, SupplierDomainError>;

    async fn list_all(&self) -> Result<Vec<Supplier>, SupplierDomainError>;

    /// Fails with `DuplicateSupplierId` when the id is already stored.
    async fn add(&self, supplier: &Supplier) -> Result<(), SupplierDomainError>;

    /// Returns `false` when there was nothing to replace.
    async fn replace(&self, supplier: &Supplier) -> Result<bool, SupplierDomainError>;

    async fn remove(&self, id: &SupplierId) -> Result<Option<Supplier>, SupplierDomainError>;
}
