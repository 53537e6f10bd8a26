mod basic;
#[cfg(feature = "std")]
mod thread_local;


pub use basic::*;
#[cfg(feature = "std")]
pub use thread_local::*;
