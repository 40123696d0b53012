//! The root of this crate doesn't do much.
//! It just re-exports its contents.

pub mod deserialize;
pub mod error;
pub mod fields;
pub mod prefabs; // prefabs::bodies::whatever
pub use deserialize::*;
pub use error::{LoadError, LoadResult};

#[macro_use]
extern crate lazy_static;
