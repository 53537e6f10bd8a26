mod alphabet;
mod error;
mod fixed;
mod formatter;
mod interface;

pub use alphabet::*;
pub use error::*;
pub use fixed::*;
pub use formatter::*;
pub use interface::*;
