use crate::bytecode::Value;
use crate::error::VmError;

pub const STACK_MAX: usize = 256;

/// Operand stack for the VM.
/// Fixed capacity; every access is bounds checked and reports overflow or
/// underflow as a [`VmError`] instead of touching memory outside the buffer.
#[derive(Debug, Clone)]
pub struct Stack {
    data: [Value; STACK_MAX],
    top: usize,
}

impl Stack {
    pub fn new() -> Self {
        Stack {
            data: [0.0; STACK_MAX],
            top: 0,
        }
    }

    /// Push a value onto the stack
    #[inline]
    pub fn push(&mut self, value: Value) -> Result<(), VmError> {
        if self.top == STACK_MAX {
            return Err(VmError::StackOverflow {
                capacity: STACK_MAX,
            });
        }
        self.data[self.top] = value;
        self.top += 1;
        Ok(())
    }

    /// Pop a value from the stack and return it
    #[inline]
    pub fn pop(&mut self) -> Result<Value, VmError> {
        if self.top == 0 {
            return Err(VmError::StackUnderflow);
        }
        self.top -= 1;
        Ok(self.data[self.top])
    }

    /// Pop the two topmost values as `(a, b)`, where `a` was pushed before `b`.
    /// Leaves the stack untouched when fewer than two values are present.
    #[inline]
    pub fn pop_pair(&mut self) -> Result<(Value, Value), VmError> {
        if self.top < 2 {
            return Err(VmError::StackUnderflow);
        }
        self.top -= 2;
        Ok((self.data[self.top], self.data[self.top + 1]))
    }

    /// Peek at a value on the stack without removing it
    /// Distance 0 = top of stack, 1 = second from top, etc.
    #[inline]
    pub fn peek(&self, distance: usize) -> Result<Value, VmError> {
        if distance >= self.top {
            return Err(VmError::StackUnderflow);
        }
        Ok(self.data[self.top - 1 - distance])
    }

    /// Replace the top value in place.
    #[inline]
    pub fn set_top(&mut self, value: Value) -> Result<(), VmError> {
        if self.top == 0 {
            return Err(VmError::StackUnderflow);
        }
        self.data[self.top - 1] = value;
        Ok(())
    }

    /// Live values, bottom first.
    pub fn as_slice(&self) -> &[Value] {
        &self.data[..self.top]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.top
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.top == 0
    }

    pub fn capacity(&self) -> usize {
        STACK_MAX
    }

    /// Reset the stack to initial state
    pub fn reset(&mut self) {
        self.top = 0;
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}
