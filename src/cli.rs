use crate::bytecode::{Chunk, OpCode, SourcePosition};
use crate::config::VmConfig;
use crate::debug;
use crate::error::ChunkError;
use crate::vm::{InterpretResult, VM};
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

// sysexits codes
pub const EX_USAGE: i32 = 64;
pub const EX_DATAERR: i32 = 65;
pub const EX_SOFTWARE: i32 = 70;
pub const EX_IOERR: i32 = 74;

/// Run the demonstration chunk on the yon VM.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "yon", version)]
pub struct Args {
    /// Print the stack and each instruction before it runs.
    #[arg(long)]
    pub trace: bool,

    /// Print the chunk listing before running it.
    #[arg(long)]
    pub disassemble: bool,

    /// Abort after this many instructions.
    #[arg(long, value_name = "N")]
    pub step_limit: Option<u64>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

pub fn run_main() -> Result<(), i32> {
    run_main_with_args(std::env::args_os())
}

pub fn run_main_with_args<I, T>(args: I) -> Result<(), i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = match Args::try_parse_from(args) {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() { Err(EX_USAGE) } else { Ok(()) };
        }
    };
    init_logging(args.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&args, &mut out)
}

/// Build the demonstration chunk, optionally list it, execute it and print
/// the value left on top of the stack.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<(), i32> {
    let mut config = VmConfig::from_env();
    if args.trace {
        config.trace = true;
    }
    if args.step_limit.is_some() {
        config.step_limit = args.step_limit;
    }

    let chunk = demo_chunk().map_err(|err| {
        eprintln!("Error building chunk: {}", err);
        EX_DATAERR
    })?;

    if args.disassemble {
        write!(out, "{}", debug::disassemble_chunk(&chunk, "demo")).map_err(io_error)?;
    }

    let mut vm = VM::with_config(config);
    match vm.interpret_with_sink(&chunk, out) {
        InterpretResult::Ok => {
            let written = match vm.peek_stack() {
                Some(value) => writeln!(out, "{}", value),
                None => writeln!(out, "(empty stack)"),
            };
            written.map_err(io_error)
        }
        InterpretResult::RuntimeError => {
            match vm.last_error() {
                Some(fault) => eprintln!("Runtime error: {}", fault),
                None => eprintln!("Runtime error."),
            }
            Err(EX_SOFTWARE)
        }
        InterpretResult::CompileError => {
            eprintln!("Compilation error.");
            Err(EX_DATAERR)
        }
    }
}

/// `-1.2 + 3` next to a spare `1.2`, leaving `[1.2, 1.8]` on the stack.
pub fn demo_chunk() -> Result<Chunk, ChunkError> {
    let mut chunk = Chunk::new();
    chunk.emit_constant(1.2, SourcePosition::new(1, 23))?;
    chunk.emit_constant(1.2, SourcePosition::new(2, 23))?;
    chunk.emit(OpCode::OpNegate, SourcePosition::new(2, 23));
    chunk.emit_constant(3.0, SourcePosition::new(2, 23))?;
    chunk.emit(OpCode::OpAdd, SourcePosition::new(10, 10));
    chunk.emit(OpCode::OpReturn, SourcePosition::new(5, 23));
    Ok(chunk)
}

fn io_error(err: io::Error) -> i32 {
    eprintln!("Error writing output: {}", err);
    EX_IOERR
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_ansi(stderr_is_tty())
        .try_init();
}

#[cfg(unix)]
fn stderr_is_tty() -> bool {
    unsafe { libc::isatty(libc::STDERR_FILENO) != 0 }
}

#[cfg(not(unix))]
fn stderr_is_tty() -> bool {
    false
}
