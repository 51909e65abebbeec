pub mod domain;
pub mod util;

pub use domain::*;
pub use util::parse_timestamp;
