//! Small helpers with no knowledge of the bridge itself

#[cfg(test)]
use super::*;

mod short_type_name;
#[cfg(test)]
mod test_helpers;
mod thin_ptr;

pub use short_type_name::short_type_name;
#[cfg(test)]
pub use test_helpers::*;
pub use thin_ptr::ThinPtr;
