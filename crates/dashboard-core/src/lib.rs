pub mod draft;
pub mod incident;
pub mod seed;
pub mod store;

pub use draft::*;
pub use incident::*;
pub use seed::*;
pub use store::*;
