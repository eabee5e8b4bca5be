/*!
## Rust Machine Module

This Rust module is the BrainPhuck virtual machine. Program and data live
in separate address spaces: the program in a read-only `Rom`, the data
tape in a fixed size `Memory`.

*/

pub use crate::lang::Address;

mod cpu;
mod memory;
mod options;
mod registers;
mod rom;
mod runtime;
mod stack;
mod syscall;

pub use cpu::Cpu;
pub use cpu::State;
pub use memory::Memory;
pub use options::Options;
pub use registers::Registers;
pub use rom::Rom;
pub use runtime::Event;
pub use runtime::Runtime;
pub use stack::Stack;
pub use syscall::SysCall;
pub use syscall::SysCallIndex;
pub use syscall::SysCalls;

#[cfg(test)]
mod tests;
