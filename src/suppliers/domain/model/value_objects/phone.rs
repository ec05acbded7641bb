use crate::shared::helpers::validation_helper::is_valid_phone_number;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Phone {
    phone_number: String,
}

impl Phone {
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
        }
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn is_valid(&self) -> bool {
        is_valid_phone_number(&self.phone_number)
    }
}
