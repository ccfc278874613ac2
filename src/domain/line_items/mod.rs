pub mod editor;
pub mod errors;

pub use editor::*;
pub use errors::*;
