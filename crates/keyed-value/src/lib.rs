#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::dbg_macro, clippy::todo)]

mod error;
mod key;
mod map;
mod remap;
mod utils;
mod value;

pub use self::error::Error;
pub use self::key::Key;
pub use self::map::map_keys;
pub use self::remap::remap;
pub use self::value::{list, pair, Array, Value};
