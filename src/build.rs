//! Build system invocation for a deployed project.
//!
//! Generation runs `cmake -S <source> -B <build> -GNinja -DCMAKE_BUILD_TYPE=<profile>`
//! and building runs `cmake --build <build> [--target <target>]`. The library
//! resolution engine does not depend on this module.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use log::info;

use crate::error::{Error, Result};

const CMAKE: &str = "cmake";
const GENERATOR: &str = "-GNinja";

/// Arguments for generating the build system.
pub fn generate_args(source_dir: &Path, build_dir: &Path, profile: &str) -> Vec<OsString> {
    vec![
        "-S".into(),
        source_dir.as_os_str().to_owned(),
        "-B".into(),
        build_dir.as_os_str().to_owned(),
        GENERATOR.into(),
        format!("-DCMAKE_BUILD_TYPE={}", profile).into(),
    ]
}

/// Arguments for building an already generated build directory.
pub fn build_args(build_dir: &Path, target: Option<&str>) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["--build".into(), build_dir.as_os_str().to_owned()];
    if let Some(target) = target {
        args.push("--target".into());
        args.push(target.into());
    }
    args
}

/// Configure `source_dir` into `build_dir` for the given build profile.
pub fn generate_build_system(source_dir: &Path, build_dir: &Path, profile: &str) -> Result<()> {
    info!(
        "Generating build system in {} ({})",
        build_dir.display(),
        profile
    );
    run_cmake(&generate_args(source_dir, build_dir, profile))
}

/// Build `build_dir`, optionally limited to one target.
pub fn build_project(build_dir: &Path, target: Option<&str>) -> Result<()> {
    if !build_dir.is_dir() {
        return Err(Error::Build {
            message: format!(
                "build directory {} does not exist, generate the build system first",
                build_dir.display()
            ),
        });
    }
    info!("Building {}", build_dir.display());
    run_cmake(&build_args(build_dir, target))
}

fn run_cmake(args: &[OsString]) -> Result<()> {
    let status = Command::new(CMAKE)
        .args(args)
        .status()
        .map_err(|e| Error::Build {
            message: format!("failed to run {}: {}", CMAKE, e),
        })?;

    if !status.success() {
        return Err(Error::Build {
            message: format!("{} exited with {}", CMAKE, status),
        });
    }
    Ok(())
}
