//!
//! The compiler flag set resolver.
//!

pub mod configuration;
pub mod diagnostic;
pub mod flag_group;
pub mod makefile;
pub mod math_precision;
pub mod output_format;
pub mod request;
pub mod resolver;
pub mod table;
pub mod toggles;
pub mod toolchain;
pub mod variant;

pub use crate::configuration::Configuration;
pub use crate::diagnostic::kind::DiagnosticKind;
pub use crate::diagnostic::sink::collecting::CollectingSink;
pub use crate::diagnostic::sink::console::ConsoleSink;
pub use crate::diagnostic::sink::DiagnosticSink;
pub use crate::diagnostic::sink::NullSink;
pub use crate::diagnostic::Diagnostic;
pub use crate::flag_group::kind::FlagGroupKind;
pub use crate::flag_group::FlagGroup;
pub use crate::makefile::Makefile;
pub use crate::math_precision::MathPrecision;
pub use crate::output_format::OutputFormat;
pub use crate::request::report::ReportRequest;
pub use crate::request::ResolveRequest;
pub use crate::resolver::resolution::Resolution;
pub use crate::resolver::FlagResolver;
pub use crate::table::definition::ToolchainDefinition;
pub use crate::table::error::Error as TableError;
pub use crate::table::report_format::ReportFormat;
pub use crate::table::ToolchainTable;
pub use crate::toggles::Toggles;
pub use crate::toolchain::ToolchainIdentity;
pub use crate::variant::BuildVariant;
