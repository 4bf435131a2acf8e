//!
//! The vectorization detection by disassembling a RISC-V binary.
//!

use std::path::Path;
use std::path::PathBuf;
use std::process::Command;

use once_cell::sync::Lazy;
use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;

use crate::vectorization::VectorizationStatus;

/// The `objdump -f` architecture line of a RISC-V binary.
static REGEX_RISCV: Lazy<regex::Regex> =
    Lazy::new(|| regex::Regex::new(r"architecture:\s*riscv").expect("Always valid"));

/// The `objdump -t` symbol line, capturing the seven flag characters, the section, and the name.
static REGEX_SYMBOL: Lazy<regex::Regex> = Lazy::new(|| {
    regex::Regex::new(r"^[0-9a-fA-F]+\s(.{7})\s(\S+)\s+[0-9a-fA-F]+\s+(?:\.hidden\s+)?(\S+)$")
        .expect("Always valid")
});

/// The `objdump -t` flag marking a function symbol.
const SYMBOL_FLAG_FUNCTION: char = 'F';

/// Any of `vsetvl`, `vsetvli`, and `vsetivli`.
static REGEX_VECTOR_CONFIGURATION: Lazy<regex::Regex> =
    Lazy::new(|| regex::Regex::new(r"vseti?vli?").expect("Always valid"));

///
/// The vectorization detection by disassembling a RISC-V binary.
///
/// A function counts as vectorized if it configures the vector unit, that is, if its
/// disassembly contains any `vsetvl` flavor.
///
#[derive(Debug, Clone)]
pub struct Objdump {
    /// The `objdump` executable.
    executable: PathBuf,
}

impl Objdump {
    /// The default RISC-V cross `objdump` executable.
    pub const DEFAULT_EXECUTABLE: &'static str = "riscv64-unknown-linux-gnu-objdump";

    /// The section functions are looked up in.
    pub const TEXT_SECTION: &'static str = ".text";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(executable: PathBuf) -> Self {
        Self { executable }
    }

    ///
    /// Detects the vectorized functions of the binary.
    ///
    pub fn vectorization_status(&self, binary: &Path) -> anyhow::Result<VectorizationStatus> {
        let header = self.run(&["-f"], binary)?;
        if !Self::is_riscv(header.as_str()) {
            anyhow::bail!(
                "Binary {binary:?}: vectorization detection is implemented only for RISC-V binaries"
            );
        }

        let symbols = self.run(&["-t"], binary)?;
        Self::text_symbols(symbols.as_str())
            .into_par_iter()
            .map(|symbol| {
                let disassembly = self.run(
                    &[
                        "-j",
                        Self::TEXT_SECTION,
                        "-D",
                        format!("--disassemble={symbol}").as_str(),
                    ],
                    binary,
                )?;
                Ok((symbol, Self::has_vector_configuration(disassembly.as_str())))
            })
            .collect::<anyhow::Result<Vec<(String, bool)>>>()
            .map(|symbols| symbols.into_iter().collect())
    }

    ///
    /// Whether the `objdump -f` header describes a RISC-V binary.
    ///
    pub fn is_riscv(header: &str) -> bool {
        REGEX_RISCV.is_match(header)
    }

    ///
    /// Extracts the `.text` function symbols from the `objdump -t` table.
    ///
    /// Section, file, and data symbols are skipped.
    ///
    pub fn text_symbols(table: &str) -> Vec<String> {
        let mut symbols: Vec<String> = table
            .lines()
            .filter_map(|line| REGEX_SYMBOL.captures(line))
            .filter(|captures| {
                captures[1].ends_with(SYMBOL_FLAG_FUNCTION) && &captures[2] == Self::TEXT_SECTION
            })
            .map(|captures| captures[3].to_owned())
            .collect();
        symbols.sort();
        symbols.dedup();
        symbols
    }

    ///
    /// Whether the disassembly configures the vector unit.
    ///
    pub fn has_vector_configuration(disassembly: &str) -> bool {
        REGEX_VECTOR_CONFIGURATION.is_match(disassembly)
    }

    ///
    /// Runs `objdump` with the arguments and returns its standard output.
    ///
    fn run(&self, arguments: &[&str], binary: &Path) -> anyhow::Result<String> {
        let output = Command::new(self.executable.as_path())
            .args(arguments)
            .arg(binary)
            .output()
            .map_err(|error| anyhow::anyhow!("{:?} subprocess: {error}", self.executable))?;
        if !output.status.success() {
            anyhow::bail!(
                "{:?} {} {binary:?} failed: {}",
                self.executable,
                arguments.join(" "),
                String::from_utf8_lossy(output.stderr.as_slice())
            );
        }
        Ok(String::from_utf8_lossy(output.stdout.as_slice()).into_owned())
    }
}

impl Default for Objdump {
    fn default() -> Self {
        Self::new(PathBuf::from(Self::DEFAULT_EXECUTABLE))
    }
}
