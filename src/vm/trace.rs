//! Execution trace written before each dispatch.

use super::stack_ops::Stack;
use crate::bytecode::Chunk;
use crate::debug;
use std::fmt::Write as _;
use std::io::{self, Write};

/// Write the stack contents and the instruction at `offset`:
///
/// ```text
/// stack: [1.2] [-1.2]
/// 0007    |       0023    OP_CONSTANT     3
/// ```
pub(super) fn trace_step<W: Write>(
    stack: &Stack,
    chunk: &Chunk,
    offset: usize,
    sink: &mut W,
) -> io::Result<()> {
    let mut line = String::from("stack:");
    for value in stack.as_slice() {
        let _ = write!(line, " [{}]", value);
    }
    line.push('\n');
    let _ = debug::disassemble_instruction(chunk, offset, &mut line);
    sink.write_all(line.as_bytes())
}
