pub mod emit;
pub mod error;
pub mod extract;
pub mod loader;
pub mod normalize;
pub mod render;

pub use error::MappingError;
pub use render::FieldMapping;
