//!
//! The TSVC build driver.
//!

use std::path::Path;
use std::path::PathBuf;
use std::process::Command;

use flag_resolver::BuildVariant;
use flag_resolver::Makefile;

///
/// The source of the makefile fragment installed into the TSVC tree.
///
#[derive(Debug, Clone)]
pub enum MakefileSource {
    /// A user-provided makefile, copied as is.
    File(PathBuf),
    /// A fragment rendered from the toolchain table.
    Generated(Makefile),
}

///
/// The TSVC build driver, delegating the compilation to `make`.
///
#[derive(Debug, Clone)]
pub struct TsvcBuilder {
    /// The TSVC root directory.
    root: PathBuf,
}

impl TsvcBuilder {
    /// The `COMPILER` name the makefile fragment is installed under.
    pub const COMPILER_NAME: &'static str = "tsvc-runner";

    /// The `make` executable.
    pub const MAKE_EXECUTABLE: &'static str = "make";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    ///
    /// The path the makefile fragment is installed to.
    ///
    pub fn makefile_path(&self) -> PathBuf {
        self.root
            .join("makefiles")
            .join(format!("Makefile.{}", Self::COMPILER_NAME))
    }

    ///
    /// The directory the binaries are built to.
    ///
    pub fn binary_directory(&self) -> PathBuf {
        self.root.join("bin").join(Self::COMPILER_NAME)
    }

    ///
    /// The path of the variant binary.
    ///
    pub fn binary_path(&self, variant: BuildVariant) -> PathBuf {
        self.binary_directory().join(variant.to_string())
    }

    ///
    /// The object path the variant report path is derived from.
    ///
    pub fn object_path(&self, variant: BuildVariant) -> PathBuf {
        self.root.join("src").join(format!("{}.o", variant.stem()))
    }

    ///
    /// Installs the makefile fragment.
    ///
    pub fn install_makefile(&self, source: &MakefileSource) -> anyhow::Result<()> {
        let destination = self.makefile_path();
        match source {
            MakefileSource::File(path) => {
                std::fs::copy(path, destination.as_path()).map_err(|error| {
                    anyhow::anyhow!("Makefile {path:?} copying to {destination:?}: {error}")
                })?;
            }
            MakefileSource::Generated(makefile) => makefile.write_to_file(destination.as_path())?,
        }
        Ok(())
    }

    ///
    /// Builds every variant with the vectorization report enabled.
    ///
    pub fn build(&self, rebuild_all: bool) -> anyhow::Result<()> {
        if rebuild_all {
            self.make(&["clean"])?;
        }
        self.make(&[
            format!("COMPILER={}", Self::COMPILER_NAME).as_str(),
            "VEC_REPORT=1",
        ])
    }

    ///
    /// Runs `make` in the TSVC root.
    ///
    fn make(&self, arguments: &[&str]) -> anyhow::Result<()> {
        let status = Command::new(Self::MAKE_EXECUTABLE)
            .args(arguments)
            .current_dir(self.root.as_path())
            .status()
            .map_err(|error| anyhow::anyhow!("{} subprocess: {error}", Self::MAKE_EXECUTABLE))?;
        if !status.success() {
            anyhow::bail!(
                "{} {} in {:?} failed with {status}",
                Self::MAKE_EXECUTABLE,
                arguments.join(" "),
                self.root
            );
        }
        Ok(())
    }

    ///
    /// The TSVC root directory.
    ///
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use flag_resolver::BuildVariant;

    use super::MakefileSource;
    use super::TsvcBuilder;

    #[test]
    fn paths() {
        let builder = TsvcBuilder::new(PathBuf::from("TSVC_2"));

        assert_eq!(
            builder.makefile_path(),
            PathBuf::from("TSVC_2/makefiles/Makefile.tsvc-runner")
        );
        assert_eq!(
            builder.binary_path(BuildVariant::new(false, false)),
            PathBuf::from("TSVC_2/bin/tsvc-runner/tsvc_novec_default")
        );
        assert_eq!(
            builder.object_path(BuildVariant::new(true, false)),
            PathBuf::from("TSVC_2/src/tsvc_vec.o")
        );
    }

    #[test]
    fn install_generated_makefile() {
        let root = std::env::temp_dir().join(format!("tsvc-runner-{}", std::process::id()));
        std::fs::create_dir_all(root.join("makefiles")).expect("Creating failed");
        let builder = TsvcBuilder::new(root.clone());

        let toolchain = flag_resolver::ToolchainIdentity::Clang;
        let makefile = flag_resolver::Makefile::render(
            toolchain,
            &flag_resolver::ToolchainDefinition::builtin(toolchain),
            &flag_resolver::NullSink,
        );
        builder
            .install_makefile(&MakefileSource::Generated(makefile.clone()))
            .expect("Installing failed");

        let installed =
            std::fs::read_to_string(builder.makefile_path()).expect("Reading failed");
        std::fs::remove_dir_all(root).expect("Removing failed");

        assert_eq!(installed, makefile.content);
    }

    #[test]
    fn build_fails_without_makefile() {
        let root = std::env::temp_dir().join(format!("tsvc-runner-empty-{}", std::process::id()));
        std::fs::create_dir_all(root.as_path()).expect("Creating failed");
        let builder = TsvcBuilder::new(root.clone());

        let result = builder.build(false);
        let clean_result = builder.build(true);
        std::fs::remove_dir_all(root).expect("Removing failed");

        assert!(result.is_err());
        assert!(clean_result.is_err());
    }
}
