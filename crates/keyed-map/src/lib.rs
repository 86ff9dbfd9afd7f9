#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::dbg_macro, clippy::todo)]

mod ext;
mod map;
mod remap;
mod zip;

pub use self::ext::KeyedMapExt;
pub use self::map::*;
pub use self::remap::*;
pub use self::zip::{rows, Rows};

pub use indexmap::IndexMap;
