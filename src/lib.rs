//! Compilation database generator.
//!
//! Reads the output of a (possibly recursive) make or ninja run and recovers
//! the compiler invocations in it as a clang `compile_commands.json`.
//!
//! ```
//! let out = "make[1]: Entering directory '/src/app'\ngcc -c -O2 foo.c -o foo.o\n";
//! let records = cdg::parse(out);
//! assert_eq!(records[0].directory, "/src/app");
//! assert_eq!(records[0].file, "foo.c");
//! assert_eq!(records[0].command, "gcc -c -O2 foo.c -o foo.o");
//! ```

pub mod command;
pub mod config;
pub mod db;
pub mod dirstack;
pub mod error;
pub mod logging;
pub mod parse;
pub mod util;

pub use db::{CompilationRecord, Database, Destination};
pub use error::{Error, Result};
pub use parse::{parse, Parser, FALLBACK_DIRECTORY};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
