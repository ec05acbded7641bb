pub mod supplier_service_impl;
