use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgConnection, PgPool, Row, postgres::PgRow};
use uuid::Uuid;

use crate::suppliers::{
    domain::model::{
        entities::supplier::Supplier,
        enums::supplier_domain_error::SupplierDomainError,
        value_objects::{email::Email, phone::Phone, supplier_id::SupplierId},
    },
    infrastructure::persistence::repositories::supplier_repository::SupplierRepository,
};

pub struct SqlxSupplierRepositoryImpl {
    pool: PgPool,
}

impl SqlxSupplierRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_entity(
        row: PgRow,
        emails: Vec<Email>,
        phones: Vec<Phone>,
    ) -> Result<Supplier, SupplierDomainError> {
        let id: Uuid = row.try_get("id").map_err(map_infra_error)?;
        let first_name: Option<String> = row.try_get("first_name").map_err(map_infra_error)?;
        let last_name: Option<String> = row.try_get("last_name").map_err(map_infra_error)?;
        let activation_date: NaiveDate =
            row.try_get("activation_date").map_err(map_infra_error)?;

        Ok(Supplier::restore(
            SupplierId::from(id),
            first_name,
            last_name,
            activation_date,
            emails,
            phones,
        ))
    }

    async fn hydrate(
        connection: &mut PgConnection,
        rows: Vec<PgRow>,
    ) -> Result<Vec<Supplier>, SupplierDomainError> {
        let supplier_ids = rows
            .iter()
            .map(|row| row.try_get::<Uuid, _>("id"))
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_infra_error)?;

        let mut emails = Self::load_emails(connection, &supplier_ids).await?;
        let mut phones = Self::load_phones(connection, &supplier_ids).await?;

        rows.into_iter()
            .zip(supplier_ids)
            .map(|(row, supplier_id)| {
                Self::row_to_entity(
                    row,
                    emails.remove(&supplier_id).unwrap_or_default(),
                    phones.remove(&supplier_id).unwrap_or_default(),
                )
            })
            .collect()
    }

    async fn load_emails(
        connection: &mut PgConnection,
        supplier_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<Email>>, SupplierDomainError> {
        let statement = r#"
            SELECT supplier_id, email_address
            FROM supplier_emails
            WHERE supplier_id = ANY($1)
            ORDER BY supplier_id, position
        "#;

        let rows = sqlx::query(statement)
            .bind(supplier_ids)
            .fetch_all(&mut *connection)
            .await
            .map_err(map_infra_error)?;

        let mut emails: HashMap<Uuid, Vec<Email>> = HashMap::new();
        for row in rows {
            let supplier_id: Uuid = row.try_get("supplier_id").map_err(map_infra_error)?;
            let email_address: String = row.try_get("email_address").map_err(map_infra_error)?;
            emails
                .entry(supplier_id)
                .or_default()
                .push(Email::new(email_address));
        }

        Ok(emails)
    }

    async fn load_phones(
        connection: &mut PgConnection,
        supplier_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<Phone>>, SupplierDomainError> {
        let statement = r#"
            SELECT supplier_id, phone_number
            FROM supplier_phones
            WHERE supplier_id = ANY($1)
            ORDER BY supplier_id, position
        "#;

        let rows = sqlx::query(statement)
            .bind(supplier_ids)
            .fetch_all(&mut *connection)
            .await
            .map_err(map_infra_error)?;

        let mut phones: HashMap<Uuid, Vec<Phone>> = HashMap::new();
        for row in rows {
            let supplier_id: Uuid = row.try_get("supplier_id").map_err(map_infra_error)?;
            let phone_number: String = row.try_get("phone_number").map_err(map_infra_error)?;
            phones
                .entry(supplier_id)
                .or_default()
                .push(Phone::new(phone_number));
        }

        Ok(phones)
    }

    async fn insert_contacts(
        connection: &mut PgConnection,
        supplier: &Supplier,
    ) -> Result<(), SupplierDomainError> {
        for (position, email) in supplier.emails().iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO supplier_emails (supplier_id, position, email_address)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(supplier.id().value())
            .bind(contact_position(position)?)
            .bind(email.email_address())
            .execute(&mut *connection)
            .await
            .map_err(map_infra_error)?;
        }

        for (position, phone) in supplier.phones().iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO supplier_phones (supplier_id, position, phone_number)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(supplier.id().value())
            .bind(contact_position(position)?)
            .bind(phone.phone_number())
            .execute(&mut *connection)
            .await
            .map_err(map_infra_error)?;
        }

        Ok(())
    }
}

#[async_trait]
impl SupplierRepository for SqlxSupplierRepositoryImpl {
    async fn find_by_id(&self, id: &SupplierId) -> Result<Option<Supplier>, SupplierDomainError> {
        let statement = r#"
            SELECT id, first_name, last_name, activation_date
            FROM suppliers
            WHERE id = $1
        "#;

        let mut connection = self.pool.acquire().await.map_err(map_infra_error)?;

        let maybe_row = sqlx::query(statement)
            .bind(id.value())
            .fetch_optional(&mut *connection)
            .await
            .map_err(map_infra_error)?;

        let Some(row) = maybe_row else {
            return Ok(None);
        };

        let mut suppliers = Self::hydrate(&mut *connection, vec![row]).await?;
        Ok(suppliers.pop())
    }

    async fn list_all(&self) -> Result<Vec<Supplier>, SupplierDomainError> {
        let statement = r#"
            SELECT id, first_name, last_name, activation_date
            FROM suppliers
            ORDER BY created_at DESC, id
        "#;

        let mut connection = self.pool.acquire().await.map_err(map_infra_error)?;

        let rows = sqlx::query(statement)
            .fetch_all(&mut *connection)
            .await
            .map_err(map_infra_error)?;

        Self::hydrate(&mut *connection, rows).await
    }

    async fn add(&self, supplier: &Supplier) -> Result<(), SupplierDomainError> {
        let statement = r#"
            INSERT INTO suppliers (id, first_name, last_name, activation_date)
            VALUES ($1, $2, $3, $4)
        "#;

        let mut tx = self.pool.begin().await.map_err(map_infra_error)?;

        sqlx::query(statement)
            .bind(supplier.id().value())
            .bind(supplier.first_name())
            .bind(supplier.last_name())
            .bind(supplier.activation_date())
            .execute(&mut *tx)
            .await
            .map_err(map_insert_error)?;

        Self::insert_contacts(&mut *tx, supplier).await?;

        tx.commit().await.map_err(map_infra_error)?;

        Ok(())
    }

    async fn replace(&self, supplier: &Supplier) -> Result<bool, SupplierDomainError> {
        let statement = r#"
            UPDATE suppliers
            SET first_name = $2,
                last_name = $3,
                activation_date = $4
            WHERE id = $1
        "#;

        let mut tx = self.pool.begin().await.map_err(map_infra_error)?;

        let updated = sqlx::query(statement)
            .bind(supplier.id().value())
            .bind(supplier.first_name())
            .bind(supplier.last_name())
            .bind(supplier.activation_date())
            .execute(&mut *tx)
            .await
            .map_err(map_infra_error)?;

        if updated.rows_affected() == 0 {
            return Ok(false);
        }

        sqlx::query("DELETE FROM supplier_emails WHERE supplier_id = $1")
            .bind(supplier.id().value())
            .execute(&mut *tx)
            .await
            .map_err(map_infra_error)?;

        sqlx::query("DELETE FROM supplier_phones WHERE supplier_id = $1")
            .bind(supplier.id().value())
            .execute(&mut *tx)
            .await
            .map_err(map_infra_error)?;

        Self::insert_contacts(&mut *tx, supplier).await?;

        tx.commit().await.map_err(map_infra_error)?;

        Ok(true)
    }

    async fn remove(&self, id: &SupplierId) -> Result<Option<Supplier>, SupplierDomainError> {
        let statement = r#"
            SELECT id, first_name, last_name, activation_date
            FROM suppliers
            WHERE id = $1
            FOR UPDATE
        "#;

        let mut tx = self.pool.begin().await.map_err(map_infra_error)?;

        let maybe_row = sqlx::query(statement)
            .bind(id.value())
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_infra_error)?;

        let Some(row) = maybe_row else {
            return Ok(None);
        };

        let mut removed = Self::hydrate(&mut *tx, vec![row]).await?;

        // Emails and phones go with the supplier through ON DELETE CASCADE.
        sqlx::query("DELETE FROM suppliers WHERE id = $1")
            .bind(id.value())
            .execute(&mut *tx)
            .await
            .map_err(map_infra_error)?;

        tx.commit().await.map_err(map_infra_error)?;

        Ok(removed.pop())
    }
}

/// Converts a contact's index into the `position` column value, rejecting
/// lists longer than the column can address.
pub fn contact_position(index: usize) -> Result<i32, SupplierDomainError> {
    i32::try_from(index).map_err(|_| {
        SupplierDomainError::InvalidRequest(format!("contact position {index} is out of range"))
    })
}

fn map_insert_error(error: sqlx::Error) -> SupplierDomainError {
    match &error {
        sqlx::Error::Database(database_error) if database_error.is_unique_violation() => {
            SupplierDomainError::DuplicateSupplierId
        }
        _ => map_infra_error(error),
    }
}

fn map_infra_error(error: sqlx::Error) -> SupplierDomainError {
    SupplierDomainError::InfrastructureError(error.to_string())
}
