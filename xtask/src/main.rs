use std::fs;
use std::io;
use std::path::Path;
use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

const LAMBDA_PACKAGE: &str = "ontap_file_browser_lambda";
const LAMBDA_BIN: &str = "file_browser_lambda";
const DIST_DIR: &str = "dist";

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the ONTAP file browser workspace",
    long_about = "Packages the file browser Lambda and runs the CI checks\n\
                  for the ONTAP file browser workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run CI checks (fmt, clippy, tests)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
    /// Build the Lambda binary and zip it as a custom-runtime `bootstrap`
    ServerlessPackage {
        /// Lambda function architecture
        #[arg(value_enum, long, default_value_t = LambdaArch::X86_64)]
        arch: LambdaArch,
        /// Build profile used for the binary
        #[arg(value_enum, long, default_value_t = BuildProfile::Release)]
        profile: BuildProfile,
    },
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting and clippy
    Lint,
    /// Workspace tests
    Test,
    /// Lint + test
    Check,
}

#[derive(Clone, Copy, ValueEnum)]
enum LambdaArch {
    #[value(name = "x86_64")]
    X86_64,
    #[value(name = "arm64")]
    Arm64,
}

impl LambdaArch {
    fn target(self) -> &'static str {
        match self {
            Self::X86_64 => "x86_64-unknown-linux-gnu",
            Self::Arm64 => "aarch64-unknown-linux-gnu",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::X86_64 => "x86_64",
            Self::Arm64 => "arm64",
        }
    }

    fn cross_gcc(self) -> &'static str {
        match self {
            Self::X86_64 => "x86_64-linux-gnu-gcc",
            Self::Arm64 => "aarch64-linux-gnu-gcc",
        }
    }

    fn is_host(self) -> bool {
        let host_arch = match self {
            Self::X86_64 => "x86_64",
            Self::Arm64 => "aarch64",
        };
        cfg!(target_os = "linux") && std::env::consts::ARCH == host_arch
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum BuildProfile {
    Debug,
    Release,
}

impl BuildProfile {
    fn dir_name(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Release => "release",
        }
    }

    fn as_cargo_flag(self) -> Option<&'static str> {
        match self {
            Self::Debug => None,
            Self::Release => Some("--release"),
        }
    }
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn cargo(args: &[&str]) -> ExitStatus {
    eprintln!("+ cargo {}", args.join(" "));
    Command::new("cargo")
        .args(args)
        .status()
        .expect("failed to execute cargo")
}

fn run_cargo(args: &[&str]) {
    let status = cargo(args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn package_lambda(arch: LambdaArch, profile: BuildProfile) -> Result<(), String> {
    let target = arch.target();
    check_target_installed(target)?;
    check_linker(arch)?;

    step("Build file browser lambda binary");
    let mut cargo_args = vec![
        "build",
        "-p",
        LAMBDA_PACKAGE,
        "--no-default-features",
        "--target",
        target,
        "--bin",
        LAMBDA_BIN,
    ];
    cargo_args.extend(profile.as_cargo_flag());
    run_cargo(&cargo_args);

    step("Package lambda zip artifact");
    let binary = Path::new("target")
        .join(target)
        .join(profile.dir_name())
        .join(LAMBDA_BIN);
    fs::create_dir_all(DIST_DIR).map_err(|err| format!("cannot create {DIST_DIR}/: {err}"))?;
    let zip_path = Path::new(DIST_DIR).join(format!("{LAMBDA_BIN}-{}.zip", arch.label()));
    write_bootstrap_zip(&binary, &zip_path)?;

    eprintln!("\nPackaged artifact ({}):\n- {}", arch.label(), zip_path.display());
    Ok(())
}

/// Skipped with a warning when rustup itself is unavailable.
fn check_target_installed(target: &str) -> Result<(), String> {
    let output = match Command::new("rustup")
        .args(["target", "list", "--installed"])
        .output()
    {
        Ok(output) if output.status.success() => output,
        Ok(_) | Err(_) => {
            eprintln!("warning: could not list rustup targets; skipping target check");
            return Ok(());
        }
    };

    let installed = String::from_utf8_lossy(&output.stdout);
    if installed.lines().any(|line| line.trim() == target) {
        Ok(())
    } else {
        Err(format!("rust target `{target}` is missing; run `rustup target add {target}`"))
    }
}

/// Cross builds need a linker for the Lambda architecture, either through
/// cargo's per-target linker variable or the distro's cross gcc.
fn check_linker(arch: LambdaArch) -> Result<(), String> {
    if arch.is_host() {
        return Ok(());
    }

    let linker_var = format!(
        "CARGO_TARGET_{}_LINKER",
        arch.target().to_ascii_uppercase().replace('-', "_")
    );
    if std::env::var_os(&linker_var).is_some() || linker_runs(arch.cross_gcc()) {
        return Ok(());
    }

    Err(format!(
        "no linker for `{}`: install `{}` or set {linker_var}",
        arch.target(),
        arch.cross_gcc()
    ))
}

fn linker_runs(program: &str) -> bool {
    Command::new(program)
        .arg("--version")
        .output()
        .is_ok_and(|output| output.status.success())
}

/// The custom runtime expects an executable named `bootstrap` at the zip root.
fn write_bootstrap_zip(binary: &Path, zip_path: &Path) -> Result<(), String> {
    let mut source = fs::File::open(binary)
        .map_err(|err| format!("expected lambda binary at '{}': {err}", binary.display()))?;
    let file = fs::File::create(zip_path)
        .map_err(|err| format!("cannot create '{}': {err}", zip_path.display()))?;

    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o755);
    zip.start_file("bootstrap", options)
        .map_err(|err| format!("cannot start bootstrap entry: {err}"))?;
    io::copy(&mut source, &mut zip).map_err(|err| format!("cannot write bootstrap: {err}"))?;
    zip.finish()
        .map_err(|err| format!("cannot finish lambda zip: {err}"))?;
    Ok(())
}

// ── CI jobs ────────────────────────────────────────────────────────

fn ci_lint() {
    step("Check formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--workspace",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ]);
}

fn ci_test() {
    step("Test ontap_file_browser_core");
    run_cargo(&["test", "-p", "ontap_file_browser_core"]);

    step("Test ontap_file_browser_lambda");
    run_cargo(&["test", "-p", LAMBDA_PACKAGE]);
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ci { job } => {
            match job {
                CiJob::Lint => ci_lint(),
                CiJob::Test => ci_test(),
                CiJob::Check => {
                    ci_lint();
                    ci_test();
                }
            }
            eprintln!("\nCI job passed.");
        }
        Commands::ServerlessPackage { arch, profile } => {
            if let Err(message) = package_lambda(arch, profile) {
                eprintln!("error: {message}");
                exit(1);
            }
        }
    }
}
