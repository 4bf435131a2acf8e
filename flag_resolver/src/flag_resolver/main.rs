//!
//! The flag resolver executable.
//!

pub(crate) mod arguments;

use clap::Parser;
use flag_resolver::DiagnosticSink;

use self::arguments::Arguments;

/// The success exit code.
const EXIT_CODE_SUCCESS: i32 = 0;

/// The failure exit code.
const EXIT_CODE_FAILURE: i32 = 1;

///
/// The application entry point.
///
fn main() {
    let exit_code = match main_inner(Arguments::parse()) {
        Ok(()) => EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let arguments = Arguments::validate(arguments)?;

    let table = match arguments.config.as_deref() {
        Some(path) => flag_resolver::ToolchainTable::load(path)?,
        None => flag_resolver::ToolchainTable::builtin(),
    };
    let environment = flag_resolver::Toggles::from_env();
    let toggles = flag_resolver::Toggles::new(
        environment.vec_report || arguments.vec_report,
        environment.precise_math,
    );
    let configuration = flag_resolver::Configuration::new(table, toggles);
    let sink = flag_resolver::ConsoleSink::new(arguments.quiet);

    if arguments.dump_table {
        print!("{}", configuration.table.to_yaml()?);
        for gap in configuration.table.gaps() {
            sink.emit(&gap);
        }
        return Ok(());
    }

    if arguments.makefile {
        let definition = configuration
            .table
            .get(arguments.toolchain)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Toolchain `{}` is not defined in the table",
                    arguments.toolchain
                )
            })?;
        print!(
            "{}",
            flag_resolver::Makefile::render(arguments.toolchain, definition, &sink)
        );
        return Ok(());
    }

    let report_target = arguments.report_target.as_deref();
    let request = match arguments.variant {
        Some(variant) => configuration.request(arguments.toolchain, variant, report_target),
        None => {
            let request = flag_resolver::ResolveRequest::new(
                arguments.toolchain,
                !arguments.no_vectorize,
                configuration.requested_precision(arguments.precision),
            );
            match report_target {
                Some(target) if configuration.toggles.vec_report => {
                    request.with_report(flag_resolver::ReportRequest::new(
                        target,
                        arguments.report_suffix.as_deref().unwrap_or_default(),
                    ))
                }
                _ => request,
            }
        }
    };

    let resolution = flag_resolver::FlagResolver::new(&configuration).resolve(&request, &sink);
    println!("{}", arguments.format.format(&resolution)?);

    Ok(())
}
