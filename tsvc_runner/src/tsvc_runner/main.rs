//!
//! The TSVC runner executable.
//!

pub(crate) mod arguments;

use std::time::Instant;

use clap::Parser;
use colored::Colorize;

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
    println!(
        "    {} {} v{}",
        "Starting".bright_green().bold(),
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    let table = match arguments.config.as_deref() {
        Some(path) => flag_resolver::ToolchainTable::load(path)?,
        None => flag_resolver::ToolchainTable::builtin(),
    };
    let environment = flag_resolver::Toggles::from_env();
    let configuration = flag_resolver::Configuration::new(
        table,
        flag_resolver::Toggles::new(true, environment.precise_math),
    );
    let definition = configuration
        .table
        .get(arguments.toolchain)
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Toolchain `{}` is not defined in the table",
                arguments.toolchain
            )
        })?;
    let sink = flag_resolver::ConsoleSink::new(arguments.quiet);

    let builder = tsvc_runner::TsvcBuilder::new(arguments.tsvc_root.clone());
    let scalar_variant = flag_resolver::BuildVariant::new(false, false);
    let vector_variant = flag_resolver::BuildVariant::new(true, false);

    if arguments.requires_build() {
        let source = match arguments.makefile.clone() {
            Some(path) => tsvc_runner::MakefileSource::File(path),
            None => {
                let resolver = flag_resolver::FlagResolver::new(&configuration);
                for variant in flag_resolver::BuildVariant::ALL {
                    let object_path = builder.object_path(variant).to_string_lossy().into_owned();
                    let request = configuration.request(
                        arguments.toolchain,
                        variant,
                        Some(object_path.as_str()),
                    );
                    let resolution = resolver.resolve(&request, &sink);
                    if !arguments.quiet {
                        let status = if resolution.is_clean() {
                            "Resolved".bright_green()
                        } else {
                            "Resolved".bright_yellow()
                        };
                        println!("    {} {variant}: {}", status.bold(), resolution.command_line());
                    }
                }
                tsvc_runner::MakefileSource::Generated(flag_resolver::Makefile::render(
                    arguments.toolchain,
                    definition,
                    &flag_resolver::NullSink,
                ))
            }
        };

        println!(
            "    {} TSVC in {:?} with `{}`",
            "Building".bright_green().bold(),
            builder.root(),
            arguments.toolchain,
        );
        builder.install_makefile(&source)?;
        builder.build(arguments.rebuild_all)?;
    }

    let objdump = tsvc_runner::Objdump::new(arguments.objdump_command.clone());
    let vectorization_status = match (arguments.vector_binary.as_deref(), definition.report.as_ref()) {
        (Some(binary), _) => objdump.vectorization_status(binary)?,
        (None, Some(report)) if report.extension == tsvc_runner::OptimizationRecord::EXTENSION => {
            let object_path = builder
                .object_path(vector_variant)
                .to_string_lossy()
                .into_owned();
            let record_path = report.path(object_path.as_str(), vector_variant.suffix());
            let record =
                tsvc_runner::OptimizationRecord::try_from(std::path::Path::new(record_path.as_str()))?;
            tsvc_runner::VectorizationStatus::from(&record)
        }
        (None, _) => objdump.vectorization_status(builder.binary_path(vector_variant).as_path())?,
    };
    println!(
        "    {} {} auto-vectorized functions",
        "Detected".bright_green().bold(),
        vectorization_status.vectorized_count(),
    );

    let scalar_binary = arguments
        .scalar_binary
        .clone()
        .unwrap_or_else(|| builder.binary_path(scalar_variant));
    let vector_binary = arguments
        .vector_binary
        .clone()
        .unwrap_or_else(|| builder.binary_path(vector_variant));

    let run_time_start = Instant::now();
    println!(
        "     {} {:?} and {:?}",
        "Running".bright_green().bold(),
        scalar_binary,
        vector_binary,
    );
    let pairs = tsvc_runner::benchmark::run_pair(scalar_binary.as_path(), vector_binary.as_path())?;
    let comparison = tsvc_runner::Comparison::new(pairs.as_slice(), &vectorization_status);

    if !arguments.quiet {
        for element in comparison.elements.iter() {
            println!("{}", element.print());
        }
    }
    print!("{comparison}");

    tsvc_runner::CsvReport::from(&comparison).write_to_file(arguments.report_output.as_path())?;
    println!(
        "    {} running benchmarks in {}m{:02}s, report written to {:?}",
        "Finished".bright_green().bold(),
        run_time_start.elapsed().as_secs() / 60,
        run_time_start.elapsed().as_secs() % 60,
        arguments.report_output,
    );

    if !comparison.is_successful() {
        anyhow::bail!("{} checksum mismatches", comparison.mismatches());
    }

    Ok(())
}
