//! Error types for chunk construction and execution.
//!
//! Execution faults never escape [`crate::vm::VM::interpret`] as errors; they
//! are folded into [`crate::vm::InterpretResult::RuntimeError`] and kept on the
//! VM for inspection through [`crate::vm::VM::last_error`].

use crate::bytecode::SourcePosition;
use thiserror::Error;

/// Errors raised while building a [`crate::bytecode::Chunk`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChunkError {
    /// The one-byte operand of `OpConstant` cannot address another entry.
    #[error("constant pool is full ({capacity} entries)")]
    ConstantPoolFull { capacity: usize },
}

/// Faults that abort execution of a chunk.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VmError {
    #[error("stack overflow (capacity {capacity})")]
    StackOverflow { capacity: usize },

    #[error("stack underflow")]
    StackUnderflow,

    #[error("invalid constant index {index} (pool has {pool_len} entries)")]
    InvalidConstant { index: usize, pool_len: usize },

    #[error("invalid opcode {byte}")]
    InvalidOpcode { byte: u8, offset: usize },

    /// `OpConstant` was the last byte of the stream.
    #[error("missing operand")]
    MissingOperand { offset: usize },

    /// Execution ran off the end of the code without reaching `OpReturn`.
    #[error("reached end of code without a return")]
    UnexpectedEnd { offset: usize },

    #[error("step limit of {limit} instructions exceeded")]
    StepLimitExceeded { limit: u64 },
}

/// A [`VmError`] together with the instruction it was raised by.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error} at offset {offset}{}", describe_position(.position))]
pub struct RuntimeFault {
    #[source]
    pub error: VmError,
    /// Offset of the opcode byte of the faulting instruction.
    pub offset: usize,
    pub position: Option<SourcePosition>,
}

fn describe_position(position: &Option<SourcePosition>) -> String {
    position.map(|p| format!(" ({p})")).unwrap_or_default()
}
