use crate::bytecode::Value;
use crate::error::VmError;
use crate::vm::stack_ops::Stack;

/// Handle OpNegate - Negate the top value in place
pub fn op_negate(stack: &mut Stack) -> Result<(), VmError> {
    let value = stack.peek(0)?;
    stack.set_top(-value)
}

/// Pop `b`, then `a`, and push `op(a, b)`.
///
/// `a` is the operand pushed first, so `a - b` and `a / b` read in source order.
#[inline]
pub fn binary_op(stack: &mut Stack, op: fn(Value, Value) -> Value) -> Result<(), VmError> {
    let (a, b) = stack.pop_pair()?;
    stack.push(op(a, b))
}

pub fn add(a: Value, b: Value) -> Value {
    a + b
}

pub fn subtract(a: Value, b: Value) -> Value {
    a - b
}

pub fn multiply(a: Value, b: Value) -> Value {
    a * b
}

/// IEEE-754 division: a zero divisor yields an infinity or NaN, not a fault.
pub fn divide(a: Value, b: Value) -> Value {
    a / b
}
