use std::sync::Mutex;

use async_trait::async_trait;
use supplier_directory_api::suppliers::{
    domain::{
        model::{
            entities::supplier::Supplier, enums::supplier_domain_error::SupplierDomainError,
            value_objects::supplier_id::SupplierId,
        },
        services::supplier_service::SupplierService,
    },
    infrastructure::persistence::repositories::supplier_repository::SupplierRepository,
};

#[derive(Default)]
struct FakeSupplierRepositoryState {
    entries: Vec<Supplier>,
    failure: Option<String>,
    add_calls: usize,
    replace_calls: usize,
}

pub struct FakeSupplierRepository {
    state: Mutex<FakeSupplierRepositoryState>,
}

impl FakeSupplierRepository {
    pub fn with_entries(entries: Vec<Supplier>) -> Self {
        Self {
            state: Mutex::new(FakeSupplierRepositoryState {
                entries,
                ..FakeSupplierRepositoryState::default()
            }),
        }
    }

    pub fn fail_with(&self, message: &str) {
        self.state.lock().expect("mutex poisoned").failure = Some(message.to_string());
    }

    pub fn entries(&self) -> Vec<Supplier> {
        self.state.lock().expect("mutex poisoned").entries.clone()
    }

    pub fn stats(&self) -> (usize, usize) {
        let state = self.state.lock().expect("mutex poisoned");
        (state.add_calls, state.replace_calls)
    }

    fn check_failure(state: &FakeSupplierRepositoryState) -> Result<(), SupplierDomainError> {
        match &state.failure {
            Some(message) => Err(SupplierDomainError::InfrastructureError(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SupplierRepository for FakeSupplierRepository {
    async fn find_by_id(&self, id: &SupplierId) -> Result<Option<Supplier>, SupplierDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        Self::check_failure(&state)?;
        Ok(state
            .entries
            .iter()
            .find(|supplier| supplier.id() == *id)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Supplier>, SupplierDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        Self::check_failure(&state)?;
        Ok(state.entries.clone())
    }

    async fn add(&self, supplier: &Supplier) -> Result<(), SupplierDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.add_calls += 1;
        Self::check_failure(&state)?;
        if state.entries.iter().any(|entry| entry.id() == supplier.id()) {
            return Err(SupplierDomainError::DuplicateSupplierId);
        }
        state.entries.push(supplier.clone());
        Ok(())
    }

    async fn replace(&self, supplier: &Supplier) -> Result<bool, SupplierDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.replace_calls += 1;
        Self::check_failure(&state)?;
        match state
            .entries
            .iter_mut()
            .find(|entry| entry.id() == supplier.id())
        {
            Some(entry) => {
                *entry = supplier.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove(&self, id: &SupplierId) -> Result<Option<Supplier>, SupplierDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        Self::check_failure(&state)?;
        let position = state
            .entries
            .iter()
            .position(|supplier| supplier.id() == *id);
        Ok(position.map(|index| state.entries.remove(index)))
    }
}

#[derive(Default)]
struct FakeSupplierServiceState {
    suppliers: Vec<Supplier>,
    inserted_ids: Vec<SupplierId>,
    next_error: Option<SupplierDomainError>,
}

/// Stand-in service answering from a fixed list, so controller tests never
/// touch validation or storage.
pub struct FakeSupplierService {
    state: Mutex<FakeSupplierServiceState>,
}

impl FakeSupplierService {
    pub fn returning(suppliers: Vec<Supplier>) -> Self {
        Self {
            state: Mutex::new(FakeSupplierServiceState {
                suppliers,
                ..FakeSupplierServiceState::default()
            }),
        }
    }

    pub fn fail_next_call_with(&self, error: SupplierDomainError) {
        self.state.lock().expect("mutex poisoned").next_error = Some(error);
    }

    pub fn inserted_ids(&self) -> Vec<SupplierId> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .inserted_ids
            .clone()
    }

    pub fn suppliers(&self) -> Vec<Supplier> {
        self.state.lock().expect("mutex poisoned").suppliers.clone()
    }

    fn take_error(state: &mut FakeSupplierServiceState) -> Result<(), SupplierDomainError> {
        match state.next_error.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SupplierService for FakeSupplierService {
    async fn get_supplier(
        &self,
        id: &SupplierId,
    ) -> Result<Option<Supplier>, SupplierDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        Self::take_error(&mut state)?;
        Ok(state
            .suppliers
            .iter()
            .find(|supplier| supplier.id() == *id)
            .cloned())
    }

    async fn get_suppliers(&self) -> Result<Vec<Supplier>, SupplierDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        Self::take_error(&mut state)?;
        Ok(state.suppliers.clone())
    }

    async fn insert_supplier(&self, supplier: Supplier) -> Result<(), SupplierDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        Self::take_error(&mut state)?;
        state.inserted_ids.push(supplier.id());
        state.suppliers.push(supplier);
        Ok(())
    }

    async fn update_supplier(
        &self,
        supplier: Supplier,
    ) -> Result<Option<Supplier>, SupplierDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        Self::take_error(&mut state)?;
        match state
            .suppliers
            .iter_mut()
            .find(|entry| entry.id() == supplier.id())
        {
            Some(entry) => {
                *entry = supplier.clone();
                Ok(Some(supplier))
            }
            None => Ok(None),
        }
    }

    async fn delete_supplier(
        &self,
        id: &SupplierId,
    ) -> Result<Option<Supplier>, SupplierDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        Self::take_error(&mut state)?;
        let position = state
            .suppliers
            .iter()
            .position(|supplier| supplier.id() == *id);
        Ok(position.map(|index| state.suppliers.remove(index)))
    }
}
