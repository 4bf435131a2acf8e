//!
//! The TSVC benchmark runner.
//!


pub mod error;
pub mod output;

use std::path::Path;
use std::process::Command;
use std::process::Stdio;

use self::output::BenchmarkOutput;

///
/// Runs a benchmark binary to completion and parses its output.
///
pub fn run(binary: &Path) -> anyhow::Result<Vec<BenchmarkOutput>> {
    let output = Command::new(binary)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .output()
        .map_err(|error| anyhow::anyhow!("Benchmark {binary:?} subprocess: {error}"))?;
    if !output.status.success() {
        anyhow::bail!("Benchmark {binary:?} failed with {}", output.status);
    }

    let stdout = String::from_utf8_lossy(output.stdout.as_slice());
    BenchmarkOutput::parse_all(stdout.as_ref())
        .map_err(|error| anyhow::anyhow!("Benchmark {binary:?} output: {error}"))
}

///
/// Runs the scalar and the vectorized binaries concurrently and pairs their results.
///
pub fn run_pair(
    scalar: &Path,
    vector: &Path,
) -> anyhow::Result<Vec<(BenchmarkOutput, BenchmarkOutput)>> {
    let (scalar_outputs, vector_outputs) = rayon::join(|| run(scalar), || run(vector));
    pair(scalar_outputs?, vector_outputs?)
}

///
/// Pairs the results of both binaries, which must list the same functions in the same order.
///
pub fn pair(
    scalar: Vec<BenchmarkOutput>,
    vector: Vec<BenchmarkOutput>,
) -> anyhow::Result<Vec<(BenchmarkOutput, BenchmarkOutput)>> {
    if scalar.len() != vector.len() {
        anyhow::bail!(
            "The scalar binary reported {} functions, the vectorized one {}",
            scalar.len(),
            vector.len()
        );
    }

    scalar
        .into_iter()
        .zip(vector)
        .map(|(scalar, vector)| {
            if scalar.function != vector.function {
                anyhow::bail!(
                    "Function mismatch: `{}` in the scalar binary, `{}` in the vectorized one",
                    scalar.function,
                    vector.function
                );
            }
            Ok((scalar, vector))
        })
        .collect()
}
