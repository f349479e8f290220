/// Shared utilities used across all layers
pub mod cancellation;
pub mod error;
mod result;
pub mod security;

pub use cancellation::CancellationFlag;
pub use result::Result;
