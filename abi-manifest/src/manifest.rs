// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::{collections::HashMap, fmt, fs, path::Path};

use anyhow::Context;
use cgame_syscalls::CgameCall;
use enum_map::Enum;
use game_syscalls::GameCall;
use module_abi::{ArgKind, Call, ModuleKind, Signature};
use serde::{Deserialize, Serialize};

/// A snapshot of one module kind's call table, written when an interface
/// version is released and checked against by later builds.
///
/// Has enum variants for breaking changes in the format of the file, but
/// [`read`] always returns the newest variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "manifest_version", rename_all = "snake_case")]
pub enum Manifest {
    V1 {
        module: String,
        operations: Vec<Operation>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    pub id: i32,
    pub name: String,
    pub args: Vec<String>,
    pub ret: String,
}

impl Operation {
    fn new(id: i32, signature: Signature) -> Operation {
        Operation {
            id,
            name: signature.name.to_string(),
            args: signature.args.iter().map(|&kind| arg_name(kind)).collect(),
            ret: signature.ret.name().to_string(),
        }
    }
}

/// Struct sizes are part of the contract, so they're recorded with the kind.
fn arg_name(kind: ArgKind) -> String {
    match kind {
        ArgKind::StructSize(size) => format!("{}({size})", kind.name()),
        _ => kind.name().to_string(),
    }
}

impl Manifest {
    pub fn of_table<C: Call + Enum>() -> Manifest {
        Manifest::V1 {
            module: C::MODULE.name().to_string(),
            operations: module_abi::operations::<C>()
                .map(|operation| Operation::new(operation.id(), operation.signature()))
                .collect(),
        }
    }

    /// The manifest of the call table this build has for `module`.
    pub fn current(module: ModuleKind) -> Manifest {
        match module {
            ModuleKind::Cgame => Manifest::of_table::<CgameCall>(),
            ModuleKind::Game => Manifest::of_table::<GameCall>(),
        }
    }

    pub fn module(&self) -> &str {
        let Manifest::V1 { module, .. } = self;
        module
    }

    pub fn operations(&self) -> &[Operation] {
        let Manifest::V1 { operations, .. } = self;
        operations
    }
}

pub fn read(path: &Path) -> anyhow::Result<Manifest> {
    let manifest = fs::read_to_string(path).context("Failed to open the manifest file")?;
    let manifest = serde_json::from_str(&manifest).context("Failed to parse the manifest file")?;

    // NOTE: When there's new versions of Manifest, convert to the newest here
    // (incompatibilities assumes it)

    Ok(manifest)
}

pub fn to_json(manifest: &Manifest) -> anyhow::Result<String> {
    serde_json::to_string_pretty(manifest).context("Failed to serialize the manifest")
}

/// A way in which a newer call table breaks modules built against an older
/// one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Incompatibility {
    WrongModule {
        released: String,
        current: String,
    },
    Removed {
        id: i32,
        name: String,
    },
    Renamed {
        id: i32,
        released: String,
        current: String,
    },
    Renumbered {
        name: String,
        released: i32,
        current: i32,
    },
    SignatureChanged {
        id: i32,
        name: String,
    },
}

impl fmt::Display for Incompatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Incompatibility::WrongModule { released, current } => {
                write!(f, "manifest is for {released} modules, not {current}")
            }
            Incompatibility::Removed { id, name } => write!(f, "{name} ({id}) was removed"),
            Incompatibility::Renamed {
                id,
                released,
                current,
            } => write!(f, "{released} ({id}) was renamed to {current}"),
            Incompatibility::Renumbered {
                name,
                released,
                current,
            } => write!(f, "{name} moved from {released} to {current}"),
            Incompatibility::SignatureChanged { id, name } => {
                write!(f, "{name} ({id}) has a different signature")
            }
        }
    }
}

/// Lists everything that would break a module built against `released` if
/// it was loaded by a host with the `current` table. Operations appended
/// after the released ones are fine.
pub fn incompatibilities(released: &Manifest, current: &Manifest) -> Vec<Incompatibility> {
    if released.module() != current.module() {
        return vec![Incompatibility::WrongModule {
            released: released.module().to_string(),
            current: current.module().to_string(),
        }];
    }

    let by_id: HashMap<i32, &Operation> =
        current.operations().iter().map(|op| (op.id, op)).collect();
    let ids_by_name: HashMap<&str, i32> = current
        .operations()
        .iter()
        .map(|op| (op.name.as_str(), op.id))
        .collect();

    let mut found = Vec::new();
    for old in released.operations() {
        let moved_to = ids_by_name.get(old.name.as_str()).filter(|&&id| id != old.id);
        if let Some(&current_id) = moved_to {
            found.push(Incompatibility::Renumbered {
                name: old.name.clone(),
                released: old.id,
                current: current_id,
            });
            continue;
        }
        match by_id.get(&old.id) {
            None => found.push(Incompatibility::Removed {
                id: old.id,
                name: old.name.clone(),
            }),
            Some(new) if new.name != old.name => found.push(Incompatibility::Renamed {
                id: old.id,
                released: old.name.clone(),
                current: new.name.clone(),
            }),
            Some(new) if new.args != old.args || new.ret != old.ret => {
                found.push(Incompatibility::SignatureChanged {
                    id: old.id,
                    name: old.name.clone(),
                })
            }
            Some(_) => {}
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use module_abi::ModuleKind;

    use super::{incompatibilities, Incompatibility, Manifest, Operation};

    fn operation(id: i32, name: &str, args: &[&str]) -> Operation {
        Operation {
            id,
            name: name.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
            ret: "void".to_string(),
        }
    }

    fn released() -> Manifest {
        Manifest::V1 {
            module: "game".to_string(),
            operations: vec![
                operation(0, "G_PRINT", &["ptr"]),
                operation(1, "G_ERROR", &["ptr"]),
                operation(2, "G_MILLISECONDS", &[]),
            ],
        }
    }

    fn with_operations(operations: Vec<Operation>) -> Manifest {
        Manifest::V1 {
            module: "game".to_string(),
            operations,
        }
    }

    #[test]
    fn appending_is_compatible() {
        let mut operations = released().operations().to_vec();
        operations.push(operation(3, "G_ARGC", &[]));
        assert_eq!(
            Vec::<Incompatibility>::new(),
            incompatibilities(&released(), &with_operations(operations)),
        );
    }

    #[test]
    fn removals_are_incompatible() {
        let operations = released().operations()[..2].to_vec();
        assert_eq!(
            vec![Incompatibility::Removed {
                id: 2,
                name: "G_MILLISECONDS".to_string(),
            }],
            incompatibilities(&released(), &with_operations(operations)),
        );
    }

    #[test]
    fn renames_are_incompatible() {
        let mut operations = released().operations().to_vec();
        operations[1].name = "G_FATAL".to_string();
        assert!(matches!(
            incompatibilities(&released(), &with_operations(operations)).as_slice(),
            [Incompatibility::Renamed { id: 1, .. }],
        ));
    }

    #[test]
    fn insertions_renumber_the_rest() {
        let operations = vec![
            operation(0, "G_PRINT", &["ptr"]),
            operation(1, "G_LOCATE_GAME_DATA", &[]),
            operation(2, "G_ERROR", &["ptr"]),
            operation(3, "G_MILLISECONDS", &[]),
        ];
        let found = incompatibilities(&released(), &with_operations(operations));
        assert_eq!(2, found.len());
        assert_eq!(
            Incompatibility::Renumbered {
                name: "G_ERROR".to_string(),
                released: 1,
                current: 2,
            },
            found[0],
        );
    }

    #[test]
    fn signature_changes_are_incompatible() {
        let mut operations = released().operations().to_vec();
        operations[0].args.push("len".to_string());
        operations[2].ret = "int".to_string();
        assert_eq!(
            2,
            incompatibilities(&released(), &with_operations(operations)).len()
        );
    }

    #[test]
    fn manifests_are_per_module() {
        let cgame = Manifest::current(ModuleKind::Cgame);
        assert!(matches!(
            incompatibilities(&released(), &cgame).as_slice(),
            [Incompatibility::WrongModule { .. }],
        ));
    }

    #[test]
    fn current_tables_are_compatible_with_themselves() {
        for module in [ModuleKind::Cgame, ModuleKind::Game] {
            let manifest = Manifest::current(module);
            assert!(incompatibilities(&manifest, &manifest).is_empty());
            for (index, operation) in manifest.operations().iter().enumerate() {
                assert_eq!(index as i32, operation.id);
            }
        }
    }

    #[test]
    fn struct_sizes_are_recorded() {
        let cgame = Manifest::current(ModuleKind::Cgame);
        let render_scene = cgame
            .operations()
            .iter()
            .find(|operation| operation.name == "CG_R_RENDERSCENE")
            .unwrap();
        assert!(render_scene.args[1].starts_with("struct_size("));
    }

    #[test]
    fn manifests_are_tagged_with_their_version() {
        let json = serde_json::to_string(&released()).unwrap();
        assert!(json.starts_with(r#"{"manifest_version":"v1","module":"game""#));
        assert_eq!(released(), serde_json::from_str::<Manifest>(&json).unwrap());
    }
}
