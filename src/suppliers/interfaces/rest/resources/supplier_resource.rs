use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SupplierResource {
    pub id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub activation_date: NaiveDate,
    pub is_active: bool,
    pub emails: Vec<EmailResource>,
    pub phones: Vec<PhoneResource>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct EmailResource {
    pub email_address: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct PhoneResource {
    pub phone_number: String,
}
