mod bytecode_reader;
mod opcode_dispatcher;
pub mod opcodes;
pub mod stack_ops;
mod trace;

use crate::bytecode::{Chunk, Value};
use crate::config::VmConfig;
use crate::error::{RuntimeFault, VmError};
use opcode_dispatcher::Flow;
use stack_ops::Stack;
use std::io::{self, Write};

/// Executes chunks against a private operand stack.
///
/// The stack is cleared at the start of every [`VM::interpret`] call and left
/// as-is afterwards so callers can inspect the outcome.
pub struct VM {
    config: VmConfig,
    stack: Stack,
    ip: usize,
    steps: u64,
    last_error: Option<RuntimeFault>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpretResult {
    Ok,
    CompileError,
    RuntimeError,
}

impl Default for VM {
    fn default() -> Self {
        Self::new()
    }
}

impl VM {
    pub fn new() -> Self {
        Self::with_config(VmConfig::default())
    }

    pub fn with_config(config: VmConfig) -> Self {
        VM {
            config,
            stack: Stack::new(),
            ip: 0,
            steps: 0,
            last_error: None,
        }
    }

    pub fn config(&self) -> &VmConfig {
        &self.config
    }

    /// Run `chunk` to completion. Trace output, if enabled, goes to stdout.
    pub fn interpret(&mut self, chunk: &Chunk) -> InterpretResult {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.interpret_with_sink(chunk, &mut out)
    }

    /// Run `chunk` to completion, writing the trace (if enabled) to `sink`.
    pub fn interpret_with_sink<W: Write>(&mut self, chunk: &Chunk, sink: &mut W) -> InterpretResult {
        self.stack.reset();
        self.ip = 0;
        self.steps = 0;
        self.last_error = None;

        tracing::debug!(
            target: "yon::vm",
            code_len = chunk.len(),
            constants = chunk.constants().len(),
            trace = self.config.trace,
            "interpreting chunk"
        );

        match self.run(chunk, sink) {
            Ok(()) => {
                tracing::debug!(target: "yon::vm", steps = self.steps, depth = self.stack.len(), "chunk returned");
                InterpretResult::Ok
            }
            Err(fault) => {
                tracing::error!(target: "yon::vm", steps = self.steps, "runtime error: {}", fault);
                self.last_error = Some(fault);
                InterpretResult::RuntimeError
            }
        }
    }

    fn run<W: Write>(&mut self, chunk: &Chunk, sink: &mut W) -> Result<(), RuntimeFault> {
        let mut tracing_enabled = self.config.trace;
        loop {
            let offset = self.ip;

            if tracing_enabled && offset < chunk.len() {
                if let Err(err) = trace::trace_step(&self.stack, chunk, offset, sink) {
                    tracing::warn!(target: "yon::vm", "disabling execution trace: {}", err);
                    tracing_enabled = false;
                }
            }

            match self.step(chunk, offset) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Return) => return Ok(()),
                Err(error) => {
                    return Err(RuntimeFault {
                        error,
                        offset,
                        position: chunk.position(offset),
                    })
                }
            }
        }
    }

    fn step(&mut self, chunk: &Chunk, offset: usize) -> Result<Flow, VmError> {
        if let Some(limit) = self.config.step_limit {
            if self.steps >= limit {
                return Err(VmError::StepLimitExceeded { limit });
            }
        }
        self.steps += 1;

        let instruction = self.read_opcode(chunk)?;
        self.dispatch_opcode(chunk, instruction, offset)
    }

    /// Values left on the stack by the last run, bottom first.
    pub fn stack(&self) -> &[Value] {
        self.stack.as_slice()
    }

    /// Helper for inspecting the top of the stack without popping.
    pub fn peek_stack(&self) -> Option<Value> {
        self.stack.peek(0).ok()
    }

    /// The fault behind the last `RuntimeError`, if any.
    pub fn last_error(&self) -> Option<&RuntimeFault> {
        self.last_error.as_ref()
    }
}
