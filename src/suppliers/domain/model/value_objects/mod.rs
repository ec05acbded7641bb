pub mod email;
pub mod phone;
pub mod supplier_id;
