use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;
use tracing::debug;

use crate::parsing::blast::BLAST_OUTFMT;

#[derive(Error, Debug)]
pub enum AlignError {
    #[error("could not find required tool(s): {}", .0.join(", "))]
    MissingTools(Vec<String>),

    #[error("Failed to resolve path '{}': {source}", .path.display())]
    Path {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
}

/// BLAST+ programs that must be on `PATH` before any input is processed
pub const REQUIRED_TOOLS: [&str; 3] = ["makeblastdb", "blastn", "tblastn"];

/// Default e-value cutoff (`-evalue`)
pub const DEFAULT_EVALUE: f64 = 0.000_01;

/// Default minimum percent identity (`-perc_identity`)
pub const DEFAULT_PERC_IDENTITY: f64 = 99.5;

/// Maximum default thread count for BLAST searches
pub const MAX_DEFAULT_THREADS: usize = 4;

/// Default thread count: available cores, capped at [`MAX_DEFAULT_THREADS`]
#[must_use]
pub fn default_threads() -> usize {
    num_cpus::get().min(MAX_DEFAULT_THREADS)
}

/// Resolved locations of the BLAST+ programs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPaths {
    pub makeblastdb: PathBuf,
    pub blastn: PathBuf,
    pub tblastn: PathBuf,
}

/// Locate every program in [`REQUIRED_TOOLS`] on `PATH`.
///
/// # Errors
///
/// Returns `AlignError::MissingTools` naming every program that was not found.
pub fn check_dependencies() -> Result<ToolPaths, AlignError> {
    resolve_tools(|name| which::which(name))
}

/// Like [`check_dependencies`], searching `search_path` instead of `PATH`.
///
/// # Errors
///
/// Returns `AlignError::MissingTools` naming every program that was not found.
pub fn check_dependencies_in(search_path: impl AsRef<OsStr>) -> Result<ToolPaths, AlignError> {
    let search_path = search_path.as_ref();
    resolve_tools(|name| which::which_in(name, Some(search_path), "."))
}

fn resolve_tools<F>(find: F) -> Result<ToolPaths, AlignError>
where
    F: Fn(&str) -> which::Result<PathBuf>,
{
    let mut missing = Vec::new();
    let mut find_tool = |tool: &str| match find(tool) {
        Ok(path) => {
            debug!("Found {tool} at {}", path.display());
            Some(path)
        }
        Err(_) => {
            missing.push(tool.to_string());
            None
        }
    };

    let makeblastdb = find_tool(REQUIRED_TOOLS[0]);
    let blastn = find_tool(REQUIRED_TOOLS[1]);
    let tblastn = find_tool(REQUIRED_TOOLS[2]);

    match (makeblastdb, blastn, tblastn) {
        (Some(makeblastdb), Some(blastn), Some(tblastn)) => Ok(ToolPaths {
            makeblastdb,
            blastn,
            tblastn,
        }),
        _ => Err(AlignError::MissingTools(missing)),
    }
}

/// Search parameters passed to `blastn`
#[derive(Debug, Clone)]
pub struct BlastConfig {
    pub evalue: f64,
    pub perc_identity: f64,
    pub threads: usize,
}

impl Default for BlastConfig {
    fn default() -> Self {
        Self {
            evalue: DEFAULT_EVALUE,
            perc_identity: DEFAULT_PERC_IDENTITY,
            threads: default_threads(),
        }
    }
}

/// Runs one alignment of the reference database against an input file
pub trait Aligner {
    /// Align and return the raw tabular output, which may be empty.
    ///
    /// # Errors
    ///
    /// Returns an `AlignError` if the aligner cannot be started or fails.
    fn align(&self, input: &Path) -> Result<String, AlignError>;
}

/// `blastn` with the reference database as query and each input as subject
#[derive(Debug, Clone)]
pub struct Blastn {
    executable: PathBuf,
    reference: PathBuf,
    config: BlastConfig,
}

impl Blastn {
    /// # Errors
    ///
    /// Returns `AlignError::Path` if the reference path cannot be resolved.
    pub fn new(
        executable: impl Into<PathBuf>,
        reference: &Path,
        config: BlastConfig,
    ) -> Result<Self, AlignError> {
        Ok(Self {
            executable: executable.into(),
            reference: absolute(reference)?,
            config,
        })
    }

    /// Command-line arguments for aligning against `subject` (already absolute)
    pub fn args(&self, subject: &Path) -> Vec<OsString> {
        vec![
            "-query".into(),
            self.reference.clone().into_os_string(),
            "-subject".into(),
            subject.as_os_str().to_os_string(),
            "-num_threads".into(),
            self.config.threads.to_string().into(),
            "-evalue".into(),
            self.config.evalue.to_string().into(),
            "-perc_identity".into(),
            self.config.perc_identity.to_string().into(),
            "-outfmt".into(),
            BLAST_OUTFMT.into(),
        ]
    }

    fn program_name(&self) -> String {
        self.executable.display().to_string()
    }
}

impl Aligner for Blastn {
    fn align(&self, input: &Path) -> Result<String, AlignError> {
        let subject = absolute(input)?;
        let args = self.args(&subject);

        debug!(
            "Running '{} {}'",
            self.executable.display(),
            args.iter()
                .map(|a| a.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        );

        let output = Command::new(&self.executable)
            .args(&args)
            .output()
            .map_err(|source| AlignError::Spawn {
                program: self.program_name(),
                source,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !output.status.success() {
            return Err(AlignError::Failed {
                program: self.program_name(),
                status: output.status,
                stderr,
            });
        }
        if !stderr.is_empty() {
            debug!("{} stderr: {stderr}", self.program_name());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Resolve a path to an absolute, canonical form
fn absolute(path: &Path) -> Result<PathBuf, AlignError> {
    std::fs::canonicalize(path).map_err(|source| AlignError::Path {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn reference_file() -> NamedTempFile {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b">X Escherichia coli\nACGT\n").unwrap();
        temp.flush().unwrap();
        temp
    }

    #[test]
    fn test_default_threads_is_capped() {
        let threads = default_threads();
        assert!(threads >= 1);
        assert!(threads <= MAX_DEFAULT_THREADS);
    }

    #[test]
    fn test_default_config() {
        let config = BlastConfig::default();
        assert_eq!(config.evalue.to_string(), "0.00001");
        assert_eq!(config.perc_identity.to_string(), "99.5");
    }

    #[test]
    fn test_blastn_args() {
        let reference = reference_file();
        let config = BlastConfig {
            threads: 3,
            ..BlastConfig::default()
        };
        let blastn = Blastn::new("blastn", reference.path(), config).unwrap();

        let args: Vec<String> = blastn
            .args(Path::new("/data/isolate.fa"))
            .into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();

        let reference_abs = std::fs::canonicalize(reference.path()).unwrap();
        assert_eq!(args[0], "-query");
        assert_eq!(args[1], reference_abs.to_string_lossy());
        assert_eq!(args[2..4], ["-subject", "/data/isolate.fa"]);
        assert_eq!(args[4..6], ["-num_threads", "3"]);
        assert_eq!(args[6..8], ["-evalue", "0.00001"]);
        assert_eq!(args[8..10], ["-perc_identity", "99.5"]);
        assert_eq!(args[10], "-outfmt");
        assert_eq!(args[11], BLAST_OUTFMT);
    }

    #[test]
    fn test_blastn_missing_reference() {
        let result = Blastn::new(
            "blastn",
            Path::new("/nonexistent/reference_database"),
            BlastConfig::default(),
        );
        assert!(matches!(result, Err(AlignError::Path { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_align_captures_stdout() {
        let echo = which::which("echo").unwrap();
        let reference = reference_file();
        let input = reference_file();
        let blastn = Blastn::new(echo, reference.path(), BlastConfig::default()).unwrap();

        let out = blastn.align(input.path()).unwrap();
        assert!(out.starts_with("-query "));
        assert!(out.contains("-perc_identity 99.5"));
        assert!(out.ends_with('\n'));
    }

    #[cfg(unix)]
    #[test]
    fn test_align_nonzero_exit_is_an_error() {
        let fail = which::which("false").unwrap();
        let reference = reference_file();
        let input = reference_file();
        let blastn = Blastn::new(fail, reference.path(), BlastConfig::default()).unwrap();

        assert!(matches!(
            blastn.align(input.path()),
            Err(AlignError::Failed { .. })
        ));
    }

    #[test]
    fn test_align_missing_input() {
        let reference = reference_file();
        let blastn = Blastn::new("blastn", reference.path(), BlastConfig::default()).unwrap();
        assert!(matches!(
            blastn.align(Path::new("/nonexistent/isolate.fa")),
            Err(AlignError::Path { .. })
        ));
    }

    #[test]
    fn test_check_dependencies_reports_all_missing() {
        let dir = TempDir::new().unwrap();
        let err = check_dependencies_in(dir.path()).unwrap_err();
        match err {
            AlignError::MissingTools(tools) => {
                assert_eq!(tools, vec!["makeblastdb", "blastn", "tblastn"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_check_dependencies_finds_tools() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        for tool in REQUIRED_TOOLS {
            let path = dir.path().join(tool);
            std::fs::write(&path, "#!/bin/sh\n").unwrap();
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        }

        let tools = check_dependencies_in(dir.path()).unwrap();
        assert_eq!(tools.blastn, dir.path().join("blastn"));
        assert_eq!(tools.tblastn, dir.path().join("tblastn"));
    }

    #[cfg(unix)]
    #[test]
    fn test_check_dependencies_partial() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blastn");
        std::fs::write(&path, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();

        let err = check_dependencies_in(dir.path()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "could not find required tool(s): makeblastdb, tblastn"
        );
    }
}
