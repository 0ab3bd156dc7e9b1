#[cfg(feature = "cli")]
mod fs;
mod load;
mod num;

#[cfg(feature = "cli")]
pub(crate) use fs::*;
pub use load::*;
pub use num::js_number;
pub(crate) use num::{fmt_coord, js_round};
