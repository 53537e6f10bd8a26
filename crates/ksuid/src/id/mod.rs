mod builder;
mod interface;
mod ksuid;
mod macros;
mod token;
mod utils;

use macros::define_fixed_id;

pub use builder::*;
pub use interface::*;
pub use ksuid::*;
pub use token::*;
