//! Workspace task runner.
//!
//! `cargo run -p xtask -- arch-check` verifies the crate layering:
//! the domain stays dependency-free of the other workspace members,
//! and the player and gateway never depend on each other.

use anyhow::Context;
use serde::Deserialize;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

#[derive(Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Deserialize)]
struct Dependency {
    name: String,
}

/// Forbidden edges between workspace members.
const FORBIDDEN: &[(&str, &str)] = &[
    // The domain depends on nothing internal.
    ("sbiba-domain", "sbiba-shared"),
    ("sbiba-domain", "sbiba-gateway"),
    ("sbiba-domain", "sbiba-player"),
    // Shared DTOs sit below everything else.
    ("sbiba-shared", "sbiba-domain"),
    ("sbiba-shared", "sbiba-gateway"),
    ("sbiba-shared", "sbiba-player"),
    // Player and gateway only meet over HTTP.
    ("sbiba-player", "sbiba-gateway"),
    ("sbiba-gateway", "sbiba-player"),
    ("sbiba-gateway", "sbiba-domain"),
];

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;

    let mut violations = Vec::new();
    for package in &metadata.packages {
        for dependency in &package.dependencies {
            if FORBIDDEN
                .iter()
                .any(|(from, to)| *from == package.name && *to == dependency.name)
            {
                violations.push(format!("{} -> {}", package.name, dependency.name));
            }
        }
    }

    if !violations.is_empty() {
        anyhow::bail!("forbidden crate dependencies:\n  {}", violations.join("\n  "));
    }

    println!("arch-check: OK ({} packages)", metadata.packages.len());
    Ok(())
}
