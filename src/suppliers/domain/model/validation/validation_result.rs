/// A single validation failure, tagged with the members it concerns.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValidationResult {
    error_message: String,
    member_names: Vec<String>,
}

impl ValidationResult {
    pub fn new(error_message: impl Into<String>, member_names: &[&str]) -> Self {
        Self {
            error_message: error_message.into(),
            member_names: member_names.iter().map(|name| name.to_string()).collect(),
        }
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn member_names(&self) -> &[String] {
        &self.member_names
    }

    pub fn concerns(&self, member_name: &str) -> bool {
        self.member_names.iter().any(|name| name == member_name)
    }
}
