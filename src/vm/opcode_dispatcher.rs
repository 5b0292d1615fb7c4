//! Opcode dispatching for the VM.
//!
//! This module implements the main opcode dispatch logic that executes
//! individual bytecode instructions.

use super::VM;
use crate::bytecode::{Chunk, OpCode};
use crate::error::VmError;
use crate::vm::opcodes::arithmetic;

/// What the run loop does after an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flow {
    Continue,
    Return,
}

impl VM {
    /// Dispatch and execute a single opcode instruction.
    ///
    /// `offset` is where the opcode byte sits; the instruction pointer has
    /// already moved past it.
    pub(super) fn dispatch_opcode(
        &mut self,
        chunk: &Chunk,
        instruction: OpCode,
        offset: usize,
    ) -> Result<Flow, VmError> {
        match instruction {
            OpCode::OpConstant => {
                let constant = self.read_constant(chunk, offset)?;
                self.stack.push(constant)?;
            }
            OpCode::OpNegate => arithmetic::op_negate(&mut self.stack)?,
            OpCode::OpAdd => arithmetic::binary_op(&mut self.stack, arithmetic::add)?,
            OpCode::OpSubtract => arithmetic::binary_op(&mut self.stack, arithmetic::subtract)?,
            OpCode::OpMultiply => arithmetic::binary_op(&mut self.stack, arithmetic::multiply)?,
            OpCode::OpDivide => arithmetic::binary_op(&mut self.stack, arithmetic::divide)?,
            OpCode::OpReturn => return Ok(Flow::Return),
        }
        Ok(Flow::Continue)
    }
}
