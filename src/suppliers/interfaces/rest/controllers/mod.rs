pub mod suppliers_rest_controller;
