//!
//! The flag resolver arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The flag resolver arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Suppresses the diagnostics output.
    #[arg(short, long)]
    pub quiet: bool,

    /// The toolchain to resolve flags for.
    /// Available arguments: `clang`, `gcc`.
    #[arg(long, default_value_t = flag_resolver::ToolchainIdentity::Clang)]
    pub toolchain: flag_resolver::ToolchainIdentity,

    /// The TSVC build variant, e.g. `tsvc_vec_default`.
    /// Sets the vectorization, the math precision, and the report suffix at once.
    #[arg(long, conflicts_with_all = ["no_vectorize", "precision", "report_suffix"])]
    pub variant: Option<flag_resolver::BuildVariant>,

    /// Disables auto-vectorization.
    #[arg(long)]
    pub no_vectorize: bool,

    /// The math precision mode.
    /// Available arguments: `ieee`, `fast`, `precise`.
    /// `ieee` is upgraded to `precise` if `PRECISE_MATH` is set.
    #[arg(long)]
    pub precision: Option<flag_resolver::MathPrecision>,

    /// The build target the vectorization report path is derived from.
    /// The report flag is only added if `VEC_REPORT` is set or `--vec-report` is passed.
    #[arg(long)]
    pub report_target: Option<String>,

    /// The suffix inserted between the report target and the report extension.
    #[arg(long)]
    pub report_suffix: Option<String>,

    /// Requests the vectorization report regardless of `VEC_REPORT`.
    #[arg(long)]
    pub vec_report: bool,

    /// Path to a YAML or JSON toolchain table replacing the built-in one.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// The output format: `shell`, `lines`, or `json`.
    #[arg(long, default_value_t = flag_resolver::OutputFormat::Shell)]
    pub format: flag_resolver::OutputFormat,

    /// Prints the makefile fragment of the toolchain instead of the flags.
    #[arg(long)]
    pub makefile: bool,

    /// Prints the toolchain table as YAML instead of the flags.
    #[arg(long, conflicts_with = "makefile")]
    pub dump_table: bool,
}

impl Arguments {
    ///
    /// Validate the arguments passed from user, checking invariants that are not
    /// expressed in the type system.
    ///
    pub fn validate(arguments: Self) -> anyhow::Result<Self> {
        if arguments.report_suffix.is_some() && arguments.report_target.is_none() {
            anyhow::bail!("The argument `--report-suffix` requires `--report-target`.");
        }
        if arguments.vec_report && arguments.report_target.is_none() {
            anyhow::bail!("The argument `--vec-report` requires `--report-target`.");
        }

        Ok(arguments)
    }
}
