use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::Path;
use std::process::{Command, Stdio};

const PACKAGE: &str = "vkeyboard-extension";
const PKG_DIR: &str = "extension/static/pkg";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Virtual Keyboard extension task runner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the popup and background wasm bundles into extension/static/pkg
    Build {
        /// Optimized build
        #[arg(short, long)]
        release: bool,

        /// Only build the background worker
        #[arg(long)]
        background_only: bool,
    },

    /// Run all Rust tests
    Test,

    /// Run clippy linter
    Clippy,

    /// Remove generated wasm bundles
    Clean,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            release,
            background_only,
        } => build(release, background_only),
        Commands::Test => test(),
        Commands::Clippy => clippy(),
        Commands::Clean => clean(),
    }
}

fn build(release: bool, background_only: bool) -> Result<()> {
    if !background_only {
        build_popup(release)?;
    }
    build_background(release)?;

    println!("\n✅ Bundles written to {}", PKG_DIR);
    Ok(())
}

fn build_popup(release: bool) -> Result<()> {
    println!("🔨 Building popup (Dioxus)...");
    let profile = if release { "--release" } else { "--dev" };
    run_cmd(
        "wasm-pack",
        &[
            "build",
            "extension",
            profile,
            "--target",
            "web",
            "--out-dir",
            "static/pkg/popup",
            "--out-name",
            "popup",
        ],
    )
}

fn build_background(release: bool) -> Result<()> {
    println!("🔨 Building background worker (no Dioxus)...");
    let mut args = vec![
        "build",
        "-p",
        PACKAGE,
        "--bin",
        "background",
        "--target",
        "wasm32-unknown-unknown",
        "--no-default-features",
    ];
    if release {
        args.push("--release");
    }
    run_cmd("cargo", &args)?;

    let wasm = format!(
        "target/wasm32-unknown-unknown/{}/background.wasm",
        if release { "release" } else { "debug" }
    );
    if !Path::new(&wasm).exists() {
        anyhow::bail!("Expected {} after cargo build", wasm);
    }

    println!("🔗 Generating JS bindings...");
    run_cmd(
        "wasm-bindgen",
        &[wasm.as_str(), "--target", "web", "--out-dir", PKG_DIR],
    )
}

fn test() -> Result<()> {
    println!("🧪 Running all tests...");
    run_cmd("cargo", &["test", "--workspace"])
}

fn clippy() -> Result<()> {
    println!("🔍 Running clippy on workspace (warnings as errors)...");
    run_cmd(
        "cargo",
        &[
            "clippy",
            "--workspace",
            "--all-targets",
            "--",
            "-D",
            "warnings",
        ],
    )
}

fn clean() -> Result<()> {
    println!("🧹 Removing {}...", PKG_DIR);
    if Path::new(PKG_DIR).exists() {
        std::fs::remove_dir_all(PKG_DIR)
            .with_context(|| format!("Failed to remove {}", PKG_DIR))?;
    }
    Ok(())
}

// Helper functions
fn run_cmd(program: &str, args: &[&str]) -> Result<()> {
    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .with_context(|| format!("Failed to run: {} {}", program, args.join(" ")))?;

    if !status.success() {
        anyhow::bail!("Command failed: {} {}", program, args.join(" "));
    }

    Ok(())
}
