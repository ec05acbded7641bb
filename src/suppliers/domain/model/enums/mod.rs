pub mod supplier_domain_error;
