mod depth;
mod occurrence;
pub mod shared;

pub use depth::depth;
pub use occurrence::occurrence;
