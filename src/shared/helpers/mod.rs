pub mod validation_helper;
