#[macro_use]
pub mod macros;
pub mod file_format;
pub mod float_ext;
pub mod key_index_vec;
pub mod log_setup;
pub mod serde;

pub use file_format::FileFormat;
pub use log_setup::setup_logging;

pub const EPSILON: f64 = 1e-6;

pub fn is_debug() -> bool {
    cfg!(debug_assertions)
}
