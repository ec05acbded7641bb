use std::fmt;

use uuid::Uuid;

use crate::suppliers::domain::model::enums::supplier_domain_error::SupplierDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct SupplierId(Uuid);

impl SupplierId {
    pub fn new(value: String) -> Result<Self, SupplierDomainError> {
        let parsed =
            Uuid::parse_str(value.trim()).map_err(|_| SupplierDomainError::InvalidSupplierId)?;
        Ok(Self(parsed))
    }

    pub fn new_random() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for SupplierId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for SupplierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
