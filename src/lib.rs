//! A small stack-based virtual machine for arithmetic expressions.
//!
//! A [`Chunk`] holds the bytecode, its constant pool and the source position
//! of every byte. [`VM`] interprets a chunk; [`debug`] renders one as text.

pub mod bytecode;
pub mod cli;
pub mod config;
pub mod debug;
pub mod error;
pub mod vm;

pub use bytecode::{Chunk, OpCode, SourcePosition, Value};
pub use config::VmConfig;
pub use error::{ChunkError, RuntimeFault, VmError};
pub use vm::{InterpretResult, VM};
