use yon::bytecode::{Chunk, OpCode, SourcePosition};
use yon::cli::demo_chunk;
use yon::debug::{disassemble_chunk, disassemble_instruction};

fn pos(line: u32, col: u32) -> SourcePosition {
    SourcePosition::new(line, col)
}

#[test]
fn disassembles_demo_chunk() {
    let chunk = demo_chunk().unwrap();
    let expected = "\
chunk: demo
------------------------------------------------
offset\tline\tcol\tinstruction\tvalue
0000\t0001\t0023\tOP_CONSTANT\t1.2
0002\t0002\t0023\tOP_CONSTANT\t1.2
0004\t|\t0023\tOP_NEGATE
0005\t|\t0023\tOP_CONSTANT\t3
0007\t0010\t0010\tOP_ADD
0008\t0005\t0023\tOP_RETURN
";
    assert_eq!(disassemble_chunk(&chunk, "demo"), expected);
}

#[test]
fn disassembly_is_idempotent() {
    let chunk = demo_chunk().unwrap();
    assert_eq!(
        disassemble_chunk(&chunk, "again"),
        disassemble_chunk(&chunk, "again")
    );
}

#[test]
fn repeated_lines_show_continuation_marker() {
    let mut chunk = Chunk::new();
    chunk.emit(OpCode::OpNegate, pos(1, 1));
    chunk.emit(OpCode::OpNegate, pos(1, 5));
    chunk.emit(OpCode::OpReturn, pos(2, 1));

    let listing = disassemble_chunk(&chunk, "lines");
    let rows: Vec<&str> = listing.lines().skip(3).collect();
    assert_eq!(
        rows,
        vec![
            "0000\t0001\t0001\tOP_NEGATE",
            "0001\t|\t0005\tOP_NEGATE",
            "0002\t0002\t0001\tOP_RETURN",
        ]
    );
}

#[test]
fn unknown_opcode_is_reported_and_skipped() {
    let mut chunk = Chunk::new();
    chunk.write_instruction(200u8, pos(1, 1));
    chunk.emit(OpCode::OpReturn, pos(1, 2));

    let listing = disassemble_chunk(&chunk, "bad");
    let rows: Vec<&str> = listing.lines().skip(3).collect();
    assert_eq!(
        rows,
        vec!["0000\t0001\t0001\tUnknown opcode 200", "0001\t|\t0002\tOP_RETURN"]
    );
}

#[test]
fn truncated_and_invalid_constants_do_not_panic() {
    let mut chunk = Chunk::new();
    chunk.write_instruction(OpCode::OpConstant, pos(1, 1));
    chunk.write_instruction(9u8, pos(1, 1));
    chunk.write_instruction(OpCode::OpConstant, pos(2, 1));

    let listing = disassemble_chunk(&chunk, "broken");
    let rows: Vec<&str> = listing.lines().skip(3).collect();
    assert_eq!(
        rows,
        vec![
            "0000\t0001\t0001\tOP_CONSTANT\t<invalid constant #9>",
            "0002\t0002\t0001\tOP_CONSTANT\t<missing operand>",
        ]
    );
}

#[test]
fn empty_chunk_has_header_only() {
    let listing = disassemble_chunk(&Chunk::new(), "empty");
    assert_eq!(listing.lines().count(), 3);
    assert!(listing.starts_with("chunk: empty\n"));
}

#[test]
fn single_instruction_returns_next_offset() {
    let chunk = demo_chunk().unwrap();
    let mut out = String::new();

    let next = disassemble_instruction(&chunk, 0, &mut out).unwrap();
    assert_eq!(next, 2);
    let next = disassemble_instruction(&chunk, 4, &mut out).unwrap();
    assert_eq!(next, 5);

    assert_eq!(
        out,
        "0000\t0001\t0023\tOP_CONSTANT\t1.2\n0004\t|\t0023\tOP_NEGATE\n"
    );
}
