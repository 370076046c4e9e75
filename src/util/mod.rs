pub mod base36;

pub use base36::{from_base36, to_base36};
