pub mod supplier_service;
