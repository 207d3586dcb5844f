pub mod mapping;
pub mod tools;
