//! Opcode handler modules

pub mod arithmetic;
