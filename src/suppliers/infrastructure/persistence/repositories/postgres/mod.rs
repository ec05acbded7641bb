pub mod sqlx_supplier_repository_impl;
