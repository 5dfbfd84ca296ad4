pub mod amount;

pub use amount::{scale_raw, to_base_units};
