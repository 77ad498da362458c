//! Compilation of parsed messages into conditional programs.
//!
//! A compiled [`Program`] defers argument binding to execution time, for
//! hosts such as HTML template engines that bind and escape values
//! themselves. [`Program::render`] is a reference host; [`runtime`] holds the
//! primitives any other host must expose.

mod compile;
mod program;
mod render;
pub mod runtime;

pub use compile::{CompileError, compile_message};
pub use program::{Call, Instruction, Operand, Program, RUNTIME_FUNC_NAME, RuntimeFunction};
pub use render::escape_html;
pub use runtime::{Output, Runtime};
