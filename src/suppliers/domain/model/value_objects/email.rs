use crate::shared::helpers::validation_helper::is_valid_email;

/// An email address owned by a supplier.
///
/// Construction never fails; malformed addresses are reported when the
/// owning supplier is validated.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Email {
    email_address: String,
}

impl Email {
    pub fn new(email_address: impl Into<String>) -> Self {
        Self {
            email_address: email_address.into(),
        }
    }

    pub fn email_address(&self) -> &str {
        &self.email_address
    }

    pub fn is_valid(&self) -> bool {
        is_valid_email(&self.email_address)
    }
}
