//! Chunk disassembler.
//!
//! Renders a chunk as a table with one row per instruction:
//!
//! ```text
//! chunk: demo
//! ------------------------------------------------
//! offset  line    col     instruction     value
//! 0000    0001    0023    OP_CONSTANT     1.2
//! 0002    |       0023    OP_RETURN
//! ```
//!
//! Columns are tab separated. The line column collapses to `|` when it repeats
//! the line of the row above.

use crate::bytecode::{Chunk, OpCode};
use std::fmt::{self, Write};

const RULE: &str = "------------------------------------------------";
const COLUMNS: &str = "offset\tline\tcol\tinstruction\tvalue";
const CONTINUATION: &str = "|";

/// Disassemble the whole chunk under the given name.
pub fn disassemble_chunk(chunk: &Chunk, name: &str) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_chunk(chunk, name, &mut out);
    out
}

/// Write the full listing of `chunk` to `out`.
pub fn write_chunk<W: Write>(chunk: &Chunk, name: &str, out: &mut W) -> fmt::Result {
    writeln!(out, "chunk: {}", name)?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "{}", COLUMNS)?;

    let mut offset = 0;
    let mut previous_line = None;
    while offset < chunk.len() {
        let line = chunk.position(offset).map(|pos| pos.line);
        offset = write_row(chunk, offset, previous_line, out)?;
        previous_line = line;
    }
    Ok(())
}

/// Disassemble the instruction at `offset` into `out` and return the offset
/// of the next instruction.
///
/// The row is compared against the line of the byte just before `offset`;
/// since operands share their opcode's position, that is the line of the
/// previous instruction.
pub fn disassemble_instruction<W: Write>(
    chunk: &Chunk,
    offset: usize,
    out: &mut W,
) -> Result<usize, fmt::Error> {
    let previous_line = offset
        .checked_sub(1)
        .and_then(|prev| chunk.position(prev))
        .map(|pos| pos.line);
    write_row(chunk, offset, previous_line, out)
}

fn write_row<W: Write>(
    chunk: &Chunk,
    offset: usize,
    previous_line: Option<u32>,
    out: &mut W,
) -> Result<usize, fmt::Error> {
    let Some(&byte) = chunk.code().get(offset) else {
        writeln!(out, "{:04}\t<end of code>", offset)?;
        return Ok(offset + 1);
    };

    write!(out, "{:04}\t", offset)?;
    match chunk.position(offset) {
        Some(pos) if previous_line == Some(pos.line) => {
            write!(out, "{}\t{:04}\t", CONTINUATION, pos.col)?
        }
        Some(pos) => write!(out, "{:04}\t{:04}\t", pos.line, pos.col)?,
        None => write!(out, "?\t?\t")?,
    }

    match OpCode::try_from(byte) {
        Ok(OpCode::OpConstant) => constant_instruction(chunk, offset, out),
        Ok(op) => simple_instruction(op, offset, out),
        Err(unknown) => {
            writeln!(out, "Unknown opcode {}", unknown)?;
            Ok(offset + 1)
        }
    }
}

fn simple_instruction<W: Write>(op: OpCode, offset: usize, out: &mut W) -> Result<usize, fmt::Error> {
    writeln!(out, "{}", op.mnemonic())?;
    Ok(offset + 1)
}

fn constant_instruction<W: Write>(
    chunk: &Chunk,
    offset: usize,
    out: &mut W,
) -> Result<usize, fmt::Error> {
    let name = OpCode::OpConstant.mnemonic();
    match chunk.code().get(offset + 1) {
        Some(&index) => match chunk.constant(index as usize) {
            Some(value) => writeln!(out, "{}\t{}", name, value)?,
            None => writeln!(out, "{}\t<invalid constant #{}>", name, index)?,
        },
        None => writeln!(out, "{}\t<missing operand>", name)?,
    }
    Ok(offset + 2)
}
