use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::suppliers::interfaces::rest::resources::supplier_resource::{
    EmailResource, PhoneResource,
};

/// Body of both create and update requests. On create a missing `id` is
/// generated server side.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct SupplierRequestResource {
    pub id: Option<Uuid>,

    #[validate(length(max = 100))]
    pub first_name: Option<String>,

    #[validate(length(max = 100))]
    pub last_name: Option<String>,

    pub activation_date: NaiveDate,

    #[serde(default)]
    pub emails: Vec<EmailResource>,

    #[serde(default)]
    pub phones: Vec<PhoneResource>,
}
