use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ErrorResponseResource {
    pub message: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationErrorResource>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ValidationErrorResource {
    pub member_names: Vec<String>,
    pub error_message: String,
}
