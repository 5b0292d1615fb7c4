//! Bytecode reading utilities for the VM.
//!
//! This module provides helper methods for reading bytecode instructions
//! and operands at the instruction pointer.

use super::VM;
use crate::bytecode::{Chunk, OpCode, Value};
use crate::error::VmError;

impl VM {
    /// Read the opcode at the instruction pointer and advance past it.
    pub(super) fn read_opcode(&mut self, chunk: &Chunk) -> Result<OpCode, VmError> {
        let offset = self.ip;
        let byte = *chunk
            .code()
            .get(offset)
            .ok_or(VmError::UnexpectedEnd { offset })?;
        self.ip += 1;
        OpCode::try_from(byte).map_err(|byte| VmError::InvalidOpcode { byte, offset })
    }

    /// Read the operand byte of the instruction that started at `offset`.
    pub(super) fn read_operand(&mut self, chunk: &Chunk, offset: usize) -> Result<u8, VmError> {
        let byte = *chunk
            .code()
            .get(self.ip)
            .ok_or(VmError::MissingOperand { offset })?;
        self.ip += 1;
        Ok(byte)
    }

    /// Read a constant index operand and look the constant up.
    pub(super) fn read_constant(&mut self, chunk: &Chunk, offset: usize) -> Result<Value, VmError> {
        let index = self.read_operand(chunk, offset)? as usize;
        chunk.constant(index).ok_or(VmError::InvalidConstant {
            index,
            pool_len: chunk.constants().len(),
        })
    }
}
