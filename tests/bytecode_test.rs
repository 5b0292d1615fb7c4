use yon::bytecode::{Chunk, OpCode, SourcePosition, CONSTANT_POOL_MAX};
use yon::error::ChunkError;

#[test]
fn test_opcode_try_from_u8() {
    assert_eq!(OpCode::try_from(0), Ok(OpCode::OpConstant));
    assert_eq!(OpCode::try_from(1), Ok(OpCode::OpNegate));
    assert_eq!(OpCode::try_from(2), Ok(OpCode::OpAdd));
    assert_eq!(OpCode::try_from(3), Ok(OpCode::OpSubtract));
    assert_eq!(OpCode::try_from(4), Ok(OpCode::OpMultiply));
    assert_eq!(OpCode::try_from(5), Ok(OpCode::OpDivide));
    assert_eq!(OpCode::try_from(6), Ok(OpCode::OpReturn));
}

#[test]
fn test_opcode_try_from_u8_rejects_unknown_byte() {
    assert_eq!(OpCode::try_from(7), Err(7));
    assert_eq!(OpCode::try_from(255), Err(255));
}

#[test]
fn test_opcode_mnemonics() {
    assert_eq!(OpCode::OpConstant.mnemonic(), "OP_CONSTANT");
    assert_eq!(OpCode::OpDivide.to_string(), "OP_DIVIDE");
    assert_eq!(OpCode::OpConstant.width(), 2);
    assert_eq!(OpCode::OpReturn.width(), 1);
}

#[test]
fn test_chunk_default_is_empty() {
    let chunk = Chunk::default();
    assert!(chunk.is_empty());
    assert!(chunk.code().is_empty());
    assert!(chunk.constants().is_empty());
    assert!(chunk.positions().is_empty());
}

#[test]
fn test_write_instruction_pairs_code_and_positions() {
    let mut chunk = Chunk::new();
    chunk.write_instruction(OpCode::OpNegate, SourcePosition::new(3, 4));
    chunk.write_instruction(42u8, SourcePosition::new(5, 6));

    assert_eq!(chunk.code(), &[OpCode::OpNegate as u8, 42]);
    assert_eq!(chunk.len(), chunk.positions().len());
    assert_eq!(chunk.position(1), Some(SourcePosition::new(5, 6)));
    assert_eq!(chunk.position(2), None);
}

#[test]
fn test_write_constant_returns_index() {
    let mut chunk = Chunk::new();
    assert_eq!(chunk.write_constant(1.5), Ok(0));
    assert_eq!(chunk.write_constant(2.5), Ok(1));
    assert_eq!(chunk.constant(1), Some(2.5));
    // constants do not touch the code stream
    assert!(chunk.is_empty());
}

#[test]
fn test_constant_pool_rejects_entry_past_one_byte_range() {
    let mut chunk = Chunk::new();
    for i in 0..CONSTANT_POOL_MAX {
        assert_eq!(chunk.write_constant(i as f64), Ok(i as u8));
    }

    let result = chunk.write_constant(1000.0);
    assert_eq!(result, Err(ChunkError::ConstantPoolFull { capacity: 256 }));
    assert_eq!(chunk.constants().len(), CONSTANT_POOL_MAX);
    assert_eq!(chunk.constant(255), Some(255.0));
}

#[test]
fn test_emit_constant_writes_opcode_and_operand() {
    let mut chunk = Chunk::new();
    let pos = SourcePosition::new(1, 23);
    chunk.emit_constant(7.0, pos).unwrap();
    let index = chunk.emit_constant(8.0, pos).unwrap();

    assert_eq!(index, 1);
    assert_eq!(
        chunk.code(),
        &[OpCode::OpConstant as u8, 0, OpCode::OpConstant as u8, 1]
    );
    assert!(chunk.positions().iter().all(|p| *p == pos));
}

#[test]
fn test_emit_constant_on_full_pool_writes_nothing() {
    let mut chunk = Chunk::new();
    for _ in 0..CONSTANT_POOL_MAX {
        chunk.write_constant(0.0).unwrap();
    }

    assert!(chunk.emit_constant(1.0, SourcePosition::new(1, 1)).is_err());
    assert!(chunk.is_empty());
    assert!(chunk.positions().is_empty());
}

#[test]
fn test_source_position_display() {
    assert_eq!(SourcePosition::new(10, 2).to_string(), "10:2");
}
