// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use bpaf::{batteries::verbose_by_slice, construct, long, OptionParser, Parser, ShellComp};
use module_abi::ModuleKind;
use tracing::level_filters::LevelFilter;

#[derive(Debug, Clone)]
pub struct Options {
    pub verbosity_level: LevelFilter,
    pub command: Command,
}

#[derive(Debug, Clone)]
pub enum Command {
    /// Write the manifest of a call table.
    Dump {
        module: ModuleKind,
        output: Option<PathBuf>,
    },
    /// Check that a call table has only grown by appending since a manifest
    /// was written.
    Check {
        module: ModuleKind,
        manifest: PathBuf,
    },
}

pub fn options() -> OptionParser<Options> {
    let verbosity_level = verbose_by_slice(
        2,
        [
            LevelFilter::OFF,
            LevelFilter::ERROR,
            LevelFilter::WARN,
            LevelFilter::INFO,
            LevelFilter::DEBUG,
            LevelFilter::TRACE,
        ],
    );

    let dump = {
        let module = module();
        let output = long("output")
            .short('o')
            .help("Writes the manifest into FILE instead of stdout")
            .argument::<PathBuf>("FILE")
            .complete_shell(ShellComp::File {
                mask: Some("*.json"),
            })
            .optional();
        construct!(Command::Dump { module, output })
            .to_options()
            .descr("Print the manifest of a module kind's call table")
            .command("dump")
    };

    let check = {
        let module = module();
        let manifest = long("manifest")
            .help("The previously released manifest to check against")
            .argument::<PathBuf>("FILE")
            .complete_shell(ShellComp::File {
                mask: Some("*.json"),
            });
        construct!(Command::Check { module, manifest })
            .to_options()
            .descr("Check that the call table is compatible with a manifest")
            .command("check")
    };

    let command = construct!([dump, check]);

    construct!(Options {
        verbosity_level,
        command,
    })
    .to_options()
    .descr("Dumps and checks the operation tables of the module interface")
}

fn module() -> impl Parser<ModuleKind> {
    long("module")
        .short('m')
        .help("Selects the call table: cgame or game")
        .argument::<String>("MODULE")
        .parse(|name| module_kind(&name))
}

fn module_kind(name: &str) -> Result<ModuleKind, String> {
    [ModuleKind::Cgame, ModuleKind::Game]
        .into_iter()
        .find(|kind| kind.name() == name)
        .ok_or_else(|| format!("expected cgame or game, got {name:?}"))
}
