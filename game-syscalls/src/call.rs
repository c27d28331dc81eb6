// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use enum_map::Enum;
use module_abi::{ArgKind, Call, ModuleKind, ReturnKind, Signature};

/// Every operation the host offers to game logic modules.
///
/// Numbered independently of the cgame table: the same id means a different
/// operation there. Append only, the discriminants are the wire ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
#[repr(i32)]
pub enum GameCall {
    Print,
    Error,
    Milliseconds,
    Argc,
    Argv,
    Args,
    LiteralArgs,
    FsFOpenFile,
    FsRead,
    FsWrite,
    FsSeek,
    FsTell,
    FsFCloseFile,
    FsGetFileList,
    FsDelete,
    FsRename,
    CmdExecuteText,
    CvarRegister,
    CvarUpdate,
    CvarSet,
    CvarSetValue,
    CvarVariableValue,
    CvarVariableIntegerValue,
    CvarVariableStringBuffer,
    CvarLatchedVariableStringBuffer,
    CvarDefaultVariableStringBuffer,
    CvarInfoStringBuffer,
    CvarCheckRange,
    LocateGameData,
    SetNetFields,
    DropPlayer,
    SendServerCommand,
    SetConfigstring,
    GetConfigstring,
    SetConfigstringRestrictions,
    GetUserinfo,
    SetUserinfo,
    GetServerinfo,
    GetBrushBounds,
    Trace,
    TraceCapsule,
    ClipToEntities,
    ClipToEntitiesCapsule,
    PointContents,
    InPvs,
    InPvsIgnorePortals,
    AdjustAreaPortalState,
    AreasConnected,
    LinkEntity,
    UnlinkEntity,
    EntitiesInBox,
    EntityContact,
    EntityContactCapsule,
    BotAllocateClient,
    BotFreeClient,
    GetUsercmd,
    GetEntityToken,
    DebugPolygonCreate,
    DebugPolygonShow,
    DebugPolygonDelete,
    RealTime,
    SnapVector,
    AddCommand,
    RemoveCommand,
    RRegisterModel,
    RLerpTag,
    RLerpTagFrameModel,
    RLerpTagTorso,
    RModelBounds,
    ClientCommand,
    BotGetSnapshotEntity,
    BotGetServerCommand,
    BotUserCommand,
    PcAddGlobalDefine,
    PcRemoveGlobalDefine,
    PcRemoveAllGlobalDefines,
    PcLoadSource,
    PcFreeSource,
    PcAddDefine,
    PcReadToken,
    PcUnreadToken,
    PcSourceFileAndLine,
    HeapMalloc,
    HeapAvailable,
    HeapFree,
    FieldCompleteFilename,
    FieldCompleteCommand,
    FieldCompleteList,
}

impl Call for GameCall {
    const MODULE: ModuleKind = ModuleKind::Game;

    fn id(self) -> i32 {
        self as i32
    }

    fn from_id(id: i32) -> Option<GameCall> {
        let index = usize::try_from(id).ok()?;
        (index < GameCall::LENGTH).then(|| GameCall::from_usize(index))
    }

    fn signature(self) -> Signature {
        use ArgKind::{ElementSize, Len};
        use GameCall as C;
        use ReturnKind as R;
        const INT: ArgKind = ArgKind::Int;
        const BOOL: ArgKind = ArgKind::Bool;
        const FLOAT: ArgKind = ArgKind::Float;
        const PTR: ArgKind = ArgKind::Ptr;

        match self {
            C::Print => Signature::new("G_PRINT", &[PTR], R::Void),
            C::Error => Signature::new("G_ERROR", &[PTR], R::Void),
            C::Milliseconds => Signature::new("G_MILLISECONDS", &[], R::Int),
            C::Argc => Signature::new("G_ARGC", &[], R::Int),
            C::Argv => Signature::new("G_ARGV", &[INT, PTR, Len], R::Void),
            C::Args => Signature::new("G_ARGS", &[PTR, Len], R::Void),
            C::LiteralArgs => Signature::new("G_LITERAL_ARGS", &[PTR, Len], R::Void),
            C::FsFOpenFile => Signature::new("G_FS_FOPEN_FILE", &[PTR, PTR, INT], R::Int),
            C::FsRead => Signature::new("G_FS_READ", &[PTR, Len, INT], R::Int),
            C::FsWrite => Signature::new("G_FS_WRITE", &[PTR, Len, INT], R::Int),
            C::FsSeek => Signature::new("G_FS_SEEK", &[INT, INT, INT], R::Int),
            C::FsTell => Signature::new("G_FS_TELL", &[INT], R::Int),
            C::FsFCloseFile => Signature::new("G_FS_FCLOSE_FILE", &[INT], R::Void),
            C::FsGetFileList => Signature::new("G_FS_GETFILELIST", &[PTR, PTR, PTR, Len], R::Int),
            C::FsDelete => Signature::new("G_FS_DELETE", &[PTR], R::Int),
            C::FsRename => Signature::new("G_FS_RENAME", &[PTR, PTR], R::Int),
            C::CmdExecuteText => Signature::new("G_CMD_EXECUTETEXT", &[INT, PTR], R::Void),
            C::CvarRegister => Signature::new("G_CVAR_REGISTER", &[PTR, PTR, PTR, INT], R::Void),
            C::CvarUpdate => Signature::new("G_CVAR_UPDATE", &[PTR], R::Void),
            C::CvarSet => Signature::new("G_CVAR_SET", &[PTR, PTR], R::Void),
            C::CvarSetValue => Signature::new("G_CVAR_SET_VALUE", &[PTR, FLOAT], R::Void),
            C::CvarVariableValue => Signature::new("G_CVAR_VARIABLE_VALUE", &[PTR], R::Float),
            C::CvarVariableIntegerValue => {
                Signature::new("G_CVAR_VARIABLE_INTEGER_VALUE", &[PTR], R::Int)
            }
            C::CvarVariableStringBuffer => {
                Signature::new("G_CVAR_VARIABLE_STRING_BUFFER", &[PTR, PTR, Len], R::Void)
            }
            C::CvarLatchedVariableStringBuffer => {
                Signature::new("G_CVAR_LATCHED_VARIABLE_STRING_BUFFER", &[PTR, PTR, Len], R::Void)
            }
            C::CvarDefaultVariableStringBuffer => {
                Signature::new("G_CVAR_DEFAULT_VARIABLE_STRING_BUFFER", &[PTR, PTR, Len], R::Void)
            }
            C::CvarInfoStringBuffer => {
                Signature::new("G_CVAR_INFO_STRING_BUFFER", &[INT, PTR, Len], R::Void)
            }
            C::CvarCheckRange => {
                Signature::new("G_CVAR_CHECK_RANGE", &[PTR, FLOAT, FLOAT, BOOL], R::Void)
            }
            C::LocateGameData => Signature::new(
                "G_LOCATE_GAME_DATA",
                &[PTR, Len, ElementSize, PTR, ElementSize],
                R::Void,
            ),
            C::SetNetFields => Signature::new(
                "G_SET_NET_FIELDS",
                &[ElementSize, INT, PTR, Len, ElementSize, INT, PTR, Len],
                R::Void,
            ),
            C::DropPlayer => Signature::new("G_DROP_PLAYER", &[INT, PTR], R::Void),
            C::SendServerCommand => {
                Signature::new("G_SEND_SERVER_COMMAND", &[INT, INT, PTR], R::Void)
            }
            C::SetConfigstring => Signature::new("G_SET_CONFIGSTRING", &[INT, PTR], R::Void),
            C::GetConfigstring => Signature::new("G_GET_CONFIGSTRING", &[INT, PTR, Len], R::Void),
            C::SetConfigstringRestrictions => {
                Signature::new("G_SET_CONFIGSTRING_RESTRICTIONS", &[INT, PTR], R::Void)
            }
            C::GetUserinfo => Signature::new("G_GET_USERINFO", &[INT, PTR, Len], R::Void),
            C::SetUserinfo => Signature::new("G_SET_USERINFO", &[INT, PTR], R::Void),
            C::GetServerinfo => Signature::new("G_GET_SERVERINFO", &[PTR, Len], R::Void),
            C::GetBrushBounds => Signature::new("G_GET_BRUSH_BOUNDS", &[INT, PTR, PTR], R::Void),
            C::Trace => Signature::new("G_TRACE", &[PTR, PTR, PTR, PTR, PTR, INT, INT], R::Void),
            C::TraceCapsule => {
                Signature::new("G_TRACECAPSULE", &[PTR, PTR, PTR, PTR, PTR, INT, INT], R::Void)
            }
            C::ClipToEntities => {
                Signature::new("G_CLIPTOENTITIES", &[PTR, PTR, PTR, PTR, PTR, INT, INT], R::Void)
            }
            C::ClipToEntitiesCapsule => Signature::new(
                "G_CLIPTOENTITIESCAPSULE",
                &[PTR, PTR, PTR, PTR, PTR, INT, INT],
                R::Void,
            ),
            C::PointContents => Signature::new("G_POINT_CONTENTS", &[PTR, INT], R::Int),
            C::InPvs => Signature::new("G_IN_PVS", &[PTR, PTR], R::Bool),
            C::InPvsIgnorePortals => {
                Signature::new("G_IN_PVS_IGNORE_PORTALS", &[PTR, PTR], R::Bool)
            }
            C::AdjustAreaPortalState => {
                Signature::new("G_ADJUST_AREA_PORTAL_STATE", &[PTR, BOOL], R::Void)
            }
            C::AreasConnected => Signature::new("G_AREAS_CONNECTED", &[INT, INT], R::Bool),
            C::LinkEntity => Signature::new("G_LINKENTITY", &[PTR], R::Void),
            C::UnlinkEntity => Signature::new("G_UNLINKENTITY", &[PTR], R::Void),
            C::EntitiesInBox => Signature::new("G_ENTITIES_IN_BOX", &[PTR, PTR, PTR, Len], R::Int),
            C::EntityContact => Signature::new("G_ENTITY_CONTACT", &[PTR, PTR, PTR], R::Bool),
            C::EntityContactCapsule => {
                Signature::new("G_ENTITY_CONTACTCAPSULE", &[PTR, PTR, PTR], R::Bool)
            }
            C::BotAllocateClient => Signature::new("G_BOT_ALLOCATE_CLIENT", &[], R::Int),
            C::BotFreeClient => Signature::new("G_BOT_FREE_CLIENT", &[INT], R::Void),
            C::GetUsercmd => Signature::new("G_GET_USERCMD", &[INT, PTR], R::Void),
            C::GetEntityToken => Signature::new("G_GET_ENTITY_TOKEN", &[PTR, PTR, Len], R::Bool),
            C::DebugPolygonCreate => {
                Signature::new("G_DEBUG_POLYGON_CREATE", &[INT, Len, PTR], R::Int)
            }
            C::DebugPolygonShow => {
                Signature::new("G_DEBUG_POLYGON_SHOW", &[INT, INT, Len, PTR], R::Void)
            }
            C::DebugPolygonDelete => Signature::new("G_DEBUG_POLYGON_DELETE", &[INT], R::Void),
            C::RealTime => Signature::new("G_REAL_TIME", &[PTR], R::Int),
            C::SnapVector => Signature::new("G_SNAPVECTOR", &[PTR], R::Void),
            C::AddCommand => Signature::new("G_ADDCOMMAND", &[PTR], R::Void),
            C::RemoveCommand => Signature::new("G_REMOVECOMMAND", &[PTR], R::Void),
            C::RRegisterModel => Signature::new("G_R_REGISTERMODEL", &[PTR], R::Int),
            C::RLerpTag => Signature::new("G_R_LERPTAG", &[PTR, INT, INT, INT, FLOAT, PTR], R::Int),
            C::RLerpTagFrameModel => Signature::new(
                "G_R_LERPTAG_FRAMEMODEL",
                &[PTR, INT, INT, INT, INT, INT, FLOAT, PTR, PTR],
                R::Int,
            ),
            C::RLerpTagTorso => Signature::new(
                "G_R_LERPTAG_TORSO",
                &[PTR, INT, INT, INT, INT, INT, FLOAT, PTR, PTR, PTR, INT, INT, INT, INT, FLOAT],
                R::Int,
            ),
            C::RModelBounds => {
                Signature::new("G_R_MODELBOUNDS", &[INT, PTR, PTR, INT, INT, FLOAT], R::Int)
            }
            C::ClientCommand => Signature::new("G_CLIENT_COMMAND", &[INT, PTR], R::Void),
            C::BotGetSnapshotEntity => {
                Signature::new("G_BOT_GET_SNAPSHOT_ENTITY", &[INT, INT], R::Int)
            }
            C::BotGetServerCommand => {
                Signature::new("G_BOT_GET_SERVER_COMMAND", &[INT, PTR, Len], R::Int)
            }
            C::BotUserCommand => Signature::new("G_BOT_USER_COMMAND", &[INT, PTR], R::Void),
            C::PcAddGlobalDefine => Signature::new("G_PC_ADD_GLOBAL_DEFINE", &[PTR], R::Int),
            C::PcRemoveGlobalDefine => Signature::new("G_PC_REMOVE_GLOBAL_DEFINE", &[PTR], R::Int),
            C::PcRemoveAllGlobalDefines => {
                Signature::new("G_PC_REMOVE_ALL_GLOBAL_DEFINES", &[], R::Void)
            }
            C::PcLoadSource => Signature::new("G_PC_LOAD_SOURCE", &[PTR, PTR], R::Int),
            C::PcFreeSource => Signature::new("G_PC_FREE_SOURCE", &[INT], R::Int),
            C::PcAddDefine => Signature::new("G_PC_ADD_DEFINE", &[INT, PTR], R::Int),
            C::PcReadToken => Signature::new("G_PC_READ_TOKEN", &[INT, PTR], R::Int),
            C::PcUnreadToken => Signature::new("G_PC_UNREAD_TOKEN", &[INT], R::Void),
            C::PcSourceFileAndLine => {
                Signature::new("G_PC_SOURCE_FILE_AND_LINE", &[INT, PTR, PTR], R::Int)
            }
            C::HeapMalloc => Signature::new("G_HEAP_MALLOC", &[INT], R::Ptr),
            C::HeapAvailable => Signature::new("G_HEAP_AVAILABLE", &[], R::Int),
            C::HeapFree => Signature::new("G_HEAP_FREE", &[PTR], R::Void),
            C::FieldCompleteFilename => {
                Signature::new("G_FIELD_COMPLETEFILENAME", &[PTR, PTR, BOOL, BOOL], R::Void)
            }
            C::FieldCompleteCommand => {
                Signature::new("G_FIELD_COMPLETECOMMAND", &[PTR, BOOL, BOOL], R::Void)
            }
            C::FieldCompleteList => Signature::new("G_FIELD_COMPLETELIST", &[PTR], R::Void),
        }
    }
}

#[cfg(test)]
mod tests {
    use module_abi::{testing::assert_table_is_well_formed, ArgKind, Call, MAX_CALL_ARGS};

    use super::GameCall;

    #[test]
    fn table_is_well_formed() {
        assert_eq!(MAX_CALL_ARGS, assert_table_is_well_formed::<GameCall>());
    }

    #[test]
    fn ids_match_the_host_table() {
        assert_eq!(0, GameCall::Print.id());
        assert_eq!(2, GameCall::Milliseconds.id());
        assert_eq!(28, GameCall::LocateGameData.id());
        assert_eq!(39, GameCall::Trace.id());
        assert_eq!(67, GameCall::RLerpTagTorso.id());
        assert_eq!(87, GameCall::FieldCompleteList.id());
        assert_eq!(None, GameCall::from_id(88));
    }

    #[test]
    fn only_module_defined_layouts_are_sized() {
        for operation in module_abi::operations::<GameCall>() {
            let args = operation.signature().args;
            assert!(
                !args.iter().any(|kind| matches!(kind, ArgKind::StructSize(_))),
                "{operation:?} sends a fixed struct size",
            );
            let element_sizes = args
                .iter()
                .filter(|kind| **kind == ArgKind::ElementSize)
                .count();
            let expected = match operation {
                GameCall::LocateGameData | GameCall::SetNetFields => 2,
                _ => 0,
            };
            assert_eq!(expected, element_sizes, "{operation:?}");
        }
    }
}
