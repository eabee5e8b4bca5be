/*!
# Rust Language Module

This Rust module decodes BrainPhuck program bytes and defines the errors
every other module reports.

*/

/// Index into program memory or data memory.
pub type Address = usize;

#[macro_use]
mod error;
mod opcode;

pub use error::Error;
pub use error::ErrorCode;
pub use opcode::Opcode;
