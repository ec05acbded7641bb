pub mod entities;
pub mod enums;
pub mod validation;
pub mod value_objects;
