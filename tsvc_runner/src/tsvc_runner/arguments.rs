//!
//! The TSVC runner arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The TSVC runner arguments.
///
#[derive(Debug, Parser)]
#[command(name = "tsvc_runner", about, long_about = None)]
pub struct Arguments {
    /// Suppresses the per-function output.
    #[arg(short, long)]
    pub quiet: bool,

    /// The TSVC root directory.
    #[arg(long, default_value = "./TSVC_2")]
    pub tsvc_root: PathBuf,

    /// The user-specified makefile for building TSVC.
    /// If unset, the makefile is generated from the toolchain table.
    #[arg(short, long)]
    pub makefile: Option<PathBuf>,

    /// The toolchain to build TSVC with.
    /// Available arguments: `clang`, `gcc`.
    #[arg(long, default_value_t = flag_resolver::ToolchainIdentity::Clang)]
    pub toolchain: flag_resolver::ToolchainIdentity,

    /// Path to a YAML or JSON toolchain table replacing the built-in one.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// The pre-built scalar binary.
    #[arg(long)]
    pub scalar_binary: Option<PathBuf>,

    /// The pre-built vectorized binary.
    /// Its vectorization status is detected by disassembling it.
    #[arg(long)]
    pub vector_binary: Option<PathBuf>,

    /// The `objdump` command for disassembly.
    #[arg(long, default_value = tsvc_runner::Objdump::DEFAULT_EXECUTABLE)]
    pub objdump_command: PathBuf,

    /// Rebuilds all binaries.
    #[arg(short = 'B')]
    pub rebuild_all: bool,

    /// The report output path.
    #[arg(short = 'o', default_value = "benchmark_result.csv")]
    pub report_output: PathBuf,
}

impl Arguments {
    ///
    /// Validate the arguments passed from user, checking invariants that are not
    /// expressed in the type system.
    ///
    pub fn validate(arguments: Self) -> anyhow::Result<Self> {
        if arguments.scalar_binary.is_some() && arguments.vector_binary.is_some() {
            if arguments.makefile.is_some() {
                anyhow::bail!(
                    "The argument `--makefile` has no effect when both binaries are pre-built."
                );
            }
            if arguments.rebuild_all {
                anyhow::bail!("The argument `-B` has no effect when both binaries are pre-built.");
            }
        }

        Ok(arguments)
    }

    ///
    /// Whether TSVC must be built.
    ///
    pub fn requires_build(&self) -> bool {
        self.scalar_binary.is_none() || self.vector_binary.is_none()
    }
}
