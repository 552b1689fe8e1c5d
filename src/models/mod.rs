pub mod domain;
pub mod record;

pub use domain::*;
pub use record::*;
