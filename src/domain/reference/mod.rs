pub mod value_objects;
pub mod loader;

pub use value_objects::*;
pub use loader::*;
