mod ranking;
mod stats;
mod toggle;

#[cfg(test)]
pub(crate) mod testing;

pub use ranking::*;
pub use stats::*;
pub use toggle::*;
