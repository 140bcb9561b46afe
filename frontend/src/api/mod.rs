pub mod client;
mod session;
pub mod types;
mod validation;

pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
