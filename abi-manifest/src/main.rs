// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

mod cli;
mod manifest;

use std::{fs, io::Write};

use anyhow::Context;
use cli::Command;
use manifest::Manifest;

fn main() -> anyhow::Result<()> {
    let options = cli::options().run();

    tracing_subscriber::fmt()
        .with_max_level(options.verbosity_level)
        .with_writer(std::io::stderr)
        .init();

    match options.command {
        Command::Dump { module, output } => {
            let manifest = Manifest::current(module);
            tracing::info!(
                module = module.name(),
                operations = manifest.operations().len(),
                "dumping call table"
            );
            let json = manifest::to_json(&manifest)?;
            match output {
                Some(path) => {
                    fs::write(&path, json).context("Failed to write the manifest file")?;
                    tracing::info!("wrote {}", path.display());
                }
                None => {
                    let mut stdout = std::io::stdout().lock();
                    writeln!(stdout, "{json}").context("Failed to print the manifest")?;
                }
            }
        }

        Command::Check { module, manifest } => {
            let released = manifest::read(&manifest)?;
            let current = Manifest::current(module);
            let problems = manifest::incompatibilities(&released, &current);
            for problem in &problems {
                tracing::error!("{problem}");
            }
            if !problems.is_empty() {
                anyhow::bail!(
                    "the {} call table is incompatible with {} ({} problems)",
                    module.name(),
                    manifest.display(),
                    problems.len(),
                );
            }
            let appended = current.operations().len().saturating_sub(released.operations().len());
            tracing::info!(
                appended,
                "the {} call table is compatible with {}",
                module.name(),
                manifest.display()
            );
        }
    }

    Ok(())
}
