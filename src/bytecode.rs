use crate::error::ChunkError;
use std::fmt;

/// The single value kind the VM operates on.
pub type Value = f64;

/// Constants are addressed by a one-byte operand, so the pool holds at most this many.
pub const CONSTANT_POOL_MAX: usize = u8::MAX as usize + 1;

/// Represents the instructions that our Virtual Machine will execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OpCode {
    /// Pushes a constant from the chunk's constant pool onto the stack.
    OpConstant = 0,
    /// Pops a value and pushes its negation.
    OpNegate = 1,
    /// Pops two values, adds them, and pushes the result.
    OpAdd = 2,
    /// Pops two values, subtracts the second from the first, and pushes the result.
    OpSubtract = 3,
    /// Pops two values and multiplies them.
    OpMultiply = 4,
    /// Pops two values and divides the first by the second.
    OpDivide = 5,
    /// Signals the end of execution.
    OpReturn = 6,
}

impl OpCode {
    pub fn mnemonic(self) -> &'static str {
        match self {
            OpCode::OpConstant => "OP_CONSTANT",
            OpCode::OpNegate => "OP_NEGATE",
            OpCode::OpAdd => "OP_ADD",
            OpCode::OpSubtract => "OP_SUBTRACT",
            OpCode::OpMultiply => "OP_MULTIPLY",
            OpCode::OpDivide => "OP_DIVIDE",
            OpCode::OpReturn => "OP_RETURN",
        }
    }

    /// Number of bytes the instruction occupies, opcode included.
    pub fn width(self) -> usize {
        match self {
            OpCode::OpConstant => 2,
            _ => 1,
        }
    }
}

impl TryFrom<u8> for OpCode {
    type Error = u8;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            0 => Ok(OpCode::OpConstant),
            1 => Ok(OpCode::OpNegate),
            2 => Ok(OpCode::OpAdd),
            3 => Ok(OpCode::OpSubtract),
            4 => Ok(OpCode::OpMultiply),
            5 => Ok(OpCode::OpDivide),
            6 => Ok(OpCode::OpReturn),
            other => Err(other),
        }
    }
}

impl From<OpCode> for u8 {
    fn from(op: OpCode) -> Self {
        op as u8
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Line and column a bytecode byte was generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SourcePosition {
    pub line: u32,
    pub col: u32,
}

impl SourcePosition {
    pub const fn new(line: u32, col: u32) -> Self {
        SourcePosition { line, col }
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// A chunk of bytecode: the instruction stream, its constant pool, and one
/// source position per code byte.
///
/// Chunks are append-only. `code` and `positions` only grow together, so
/// `code().len() == positions().len()` holds at every point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chunk {
    code: Vec<u8>,
    constants: Vec<Value>,
    positions: Vec<SourcePosition>,
}

impl Chunk {
    pub fn new() -> Self {
        Chunk {
            code: Vec::new(),
            constants: Vec::new(),
            positions: Vec::new(),
        }
    }

    /// Append one byte and the position it came from.
    ///
    /// Writing `OpConstant` obliges the caller to follow it with the operand
    /// byte; [`Chunk::emit_constant`] does both.
    pub fn write_instruction(&mut self, byte: impl Into<u8>, pos: SourcePosition) {
        self.code.push(byte.into());
        self.positions.push(pos);
    }

    /// Add `value` to the constant pool and return its index.
    pub fn write_constant(&mut self, value: Value) -> Result<u8, ChunkError> {
        let index = self.constants.len();
        if index >= CONSTANT_POOL_MAX {
            tracing::debug!(target: "yon::chunk", value, "constant pool full");
            return Err(ChunkError::ConstantPoolFull {
                capacity: CONSTANT_POOL_MAX,
            });
        }
        self.constants.push(value);
        Ok(index as u8)
    }

    /// Write a single opcode.
    pub fn emit(&mut self, op: OpCode, pos: SourcePosition) {
        self.write_instruction(op, pos);
    }

    /// Add `value` to the pool and write `OpConstant` plus its operand at `pos`.
    pub fn emit_constant(&mut self, value: Value, pos: SourcePosition) -> Result<u8, ChunkError> {
        let index = self.write_constant(value)?;
        self.write_instruction(OpCode::OpConstant, pos);
        self.write_instruction(index, pos);
        Ok(index)
    }

    pub fn code(&self) -> &[u8] {
        &self.code
    }

    pub fn constants(&self) -> &[Value] {
        &self.constants
    }

    pub fn positions(&self) -> &[SourcePosition] {
        &self.positions
    }

    pub fn position(&self, offset: usize) -> Option<SourcePosition> {
        self.positions.get(offset).copied()
    }

    pub fn constant(&self, index: usize) -> Option<Value> {
        self.constants.get(index).copied()
    }

    /// Number of code bytes.
    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }
}
