use chrono::{Local, NaiveDate};

use crate::suppliers::domain::model::{
    validation::validation_result::ValidationResult,
    value_objects::{email::Email, phone::Phone, supplier_id::SupplierId},
};

/// A supplier contact together with the emails and phones it owns.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Supplier {
    id: SupplierId,
    first_name: Option<String>,
    last_name: Option<String>,
    activation_date: NaiveDate,
    emails: Vec<Email>,
    phones: Vec<Phone>,
}

impl Supplier {
    pub const EMAILS_MEMBER: &str = "Emails";
    pub const PHONES_MEMBER: &str = "Phones";

    pub fn new(
        id: SupplierId,
        first_name: Option<String>,
        last_name: Option<String>,
        activation_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            activation_date,
            emails: Vec::new(),
            phones: Vec::new(),
        }
    }

    pub fn restore(
        id: SupplierId,
        first_name: Option<String>,
        last_name: Option<String>,
        activation_date: NaiveDate,
        emails: Vec<Email>,
        phones: Vec<Phone>,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            activation_date,
            emails,
            phones,
        }
    }

    pub fn add_email(&mut self, email: Email) {
        self.emails.push(email);
    }

    pub fn add_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// A supplier only becomes active once its activation date has passed
    /// today; a supplier activating today is still inactive.
    pub fn is_active(&self) -> bool {
        self.is_active_on(Local::now().date_naive())
    }

    pub fn is_active_on(&self, today: NaiveDate) -> bool {
        self.activation_date > today
    }

    /// Lazily yields one failure per malformed email, then one per malformed
    /// phone, in the order they are stored.
    pub fn validate(&self) -> impl Iterator<Item = ValidationResult> + '_ {
        let email_failures = self
            .emails
            .iter()
            .filter(|email| !email.is_valid())
            .map(|email| {
                ValidationResult::new(
                    format!("'{}' is not a valid email address", email.email_address()),
                    &[Self::EMAILS_MEMBER],
                )
            });

        let phone_failures = self
            .phones
            .iter()
            .filter(|phone| !phone.is_valid())
            .map(|phone| {
                ValidationResult::new(
                    format!(
                        "'{}' is not a valid phone number; use 1 to 10 digits",
                        phone.phone_number()
                    ),
                    &[Self::PHONES_MEMBER],
                )
            });

        email_failures.chain(phone_failures)
    }

    pub fn id(&self) -> SupplierId {
        self.id
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn activation_date(&self) -> NaiveDate {
        self.activation_date
    }

    pub fn emails(&self) -> &[Email] {
        &self.emails
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }
}
