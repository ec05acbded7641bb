pub mod validation_result;
