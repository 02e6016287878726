//! AI Chat library exports for the binaries and tests

pub mod assets;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
