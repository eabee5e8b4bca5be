//! # BrainPhuck
//!
//! A small register machine for the eight-operator esoteric language,
//! plus an optional extension set with line comments, whitespace and an
//! indirect jump.
//!
//! Run a program from the command line with `brainphuck hello.bf`.
//! Add `--extension` to allow comments.
//!
//! Embedding looks like this:
//! ```
//! use brainphuck::mach::{Options, Runtime};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let out = Rc::new(RefCell::new(Vec::new()));
//! let sink = out.clone();
//! let mut runtime = Runtime::new("+++++.", Options::default()).unwrap();
//! runtime.on_output(move |byte| sink.borrow_mut().push(byte));
//! runtime.run().unwrap();
//! assert_eq!(*out.borrow(), vec![5]);
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/instruction_set.rs"]
#[allow(non_snake_case)]
pub mod __Instruction_Set;

pub mod lang;
pub mod mach;
pub mod term;
