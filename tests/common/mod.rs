//! Shared fixtures for command-line tests.
//!
//! Each test gets a temp directory holding a reference database, input FASTA
//! files and a `bin/` directory of fake BLAST+ programs. The fake `blastn`
//! prints canned tabular hits chosen by the subject file name.

#![allow(dead_code)]

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const REFERENCE: &str = "\
>NR_024570.1 Escherichia coli strain U 5/41 16S ribosomal RNA, partial sequence
AGTTTGATCATGGCTCAGATTGAACGCTGGCGGCAGGCCTAACACATGCAAGTCGAACGG
>NR_074902.1 Shigella flexneri 2a str. 301 16S ribosomal RNA, complete sequence
AAATTGAAGAGTTTGATCATGGCTCAGATTGAACGCTGGCGGCAGGCCTAACACATGCAA
>NR_113580.1 Bacillus subtilis strain NBRC 13719 16S ribosomal RNA, partial sequence
TTGAACGCTGGCGGCGTGCCTAATACATGCAAGTCGAGCGGACAGATGGGAGCTTGCTCC
";

/// One BLAST tabular line with full query coverage
pub fn hit_line(id: &str, length: u64, pident: f64) -> String {
    format!(
        "{id}\tcontig_1\t1\t{length}\t1\t{length}\t0.0\t2700\t{length}\t{pident}\t{length}\t{}",
        "A".repeat(usize::try_from(length).unwrap())
    )
}

/// Shell `case` arm printing `lines` when the subject file is `name`
pub fn blast_case(name: &str, lines: &[String]) -> String {
    let mut arm = format!("  */{name})\n");
    for line in lines {
        writeln!(arm, "    printf '%s\\n' '{line}'").unwrap();
    }
    arm.push_str("    ;;\n");
    arm
}

pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    /// Create a workspace whose fake `blastn` runs the given `case` arms on the subject path
    pub fn new(case_arms: &[String]) -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("reference_database"), REFERENCE).unwrap();

        let bin = dir.path().join("bin");
        std::fs::create_dir(&bin).unwrap();

        let mut blastn = String::from("#!/bin/sh\ncase \"$4\" in\n");
        for arm in case_arms {
            blastn.push_str(arm);
        }
        blastn.push_str("esac\n");

        install_tool(&bin, "blastn", &blastn);
        install_tool(&bin, "makeblastdb", "#!/bin/sh\nexit 0\n");
        install_tool(&bin, "tblastn", "#!/bin/sh\nexit 0\n");

        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn bin(&self) -> PathBuf {
        self.dir.path().join("bin")
    }

    /// Write a small input FASTA file and return its name
    pub fn input(&self, name: &str) -> String {
        self.input_with(name, ">contig_1\nACGTACGTACGTACGT\n")
    }

    /// Write an input file with the given content and return its name
    pub fn input_with(&self, name: &str, content: &str) -> String {
        std::fs::write(self.path().join(name), content).unwrap();
        name.to_string()
    }

    pub fn results(&self) -> String {
        std::fs::read_to_string(self.path().join("BS_results.txt")).unwrap()
    }

    /// The binary, run inside the workspace with only the fake tools on `PATH`
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("bac-species").unwrap();
        cmd.current_dir(self.path()).env("PATH", self.bin());
        cmd
    }
}

#[cfg(unix)]
fn install_tool(bin: &Path, name: &str, script: &str) {
    use std::os::unix::fs::PermissionsExt;

    let path = bin.join(name);
    std::fs::write(&path, script).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(not(unix))]
fn install_tool(_bin: &Path, _name: &str, _script: &str) {}
