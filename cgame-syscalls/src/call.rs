// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use enum_map::Enum;
use module_abi::{ArgKind, Call, ModuleKind, ReturnKind, Signature};

use crate::{ClientState, FontInfo, GameState, GlConfig, RefDef, RefEntity, Snapshot};

/// Every operation the host offers to cgame modules, numbered by declaration
/// order. Append only: the discriminants are the wire ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
#[repr(i32)]
pub enum CgameCall {
    Print,
    Error,
    Milliseconds,
    CvarRegister,
    CvarUpdate,
    CvarSet,
    CvarSetValue,
    CvarReset,
    CvarVariableValue,
    CvarVariableIntegerValue,
    CvarVariableStringBuffer,
    CvarLatchedVariableStringBuffer,
    CvarInfoStringBuffer,
    CvarCheckRange,
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
    AddCommand,
    RemoveCommand,
    SendClientCommand,
    UpdateScreen,
    CmLoadMap,
    CmNumInlineModels,
    CmInlineModel,
    CmTempBoxModel,
    CmTempCapsuleModel,
    CmPointContents,
    CmTransformedPointContents,
    CmBoxTrace,
    CmCapsuleTrace,
    CmTransformedBoxTrace,
    CmTransformedCapsuleTrace,
    CmBiSphereTrace,
    CmTransformedBiSphereTrace,
    CmMarkFragments,
    SStartSound,
    SStartLocalSound,
    SStopLoopingSound,
    SClearLoopingSounds,
    SAddLoopingSound,
    SAddRealLoopingSound,
    SUpdateEntityPosition,
    SRespatialize,
    SRegisterSound,
    SSoundDuration,
    SStartBackgroundTrack,
    SStopBackgroundTrack,
    SStartStreamingSound,
    SStopStreamingSound,
    SQueueStreamingSound,
    SGetStreamPlayCount,
    SSetStreamVolume,
    RLoadWorldMap,
    GetEntityToken,
    RRegisterModel,
    RRegisterShaderEx,
    RRegisterShader,
    RRegisterShaderNoMip,
    RRegisterFont,
    RAllocSkinSurface,
    RAddSkinToFrame,
    RClearScene,
    RAddPolyRefEntityToScene,
    RAddRefEntityToScene,
    RAddPolyToScene,
    RAddPolysToScene,
    RAddPolyBufferToScene,
    RAddLightToScene,
    RAddAdditiveLightToScene,
    RAddVertexLightToScene,
    RAddJuniorLightToScene,
    RAddDirectedLightToScene,
    RAddCoronaToScene,
    RLightForPoint,
    RRenderScene,
    RSetColor,
    RSetClipRegion,
    RDrawStretchPic,
    RDrawRotatedPic,
    RDrawStretchPicGradient,
    RDraw2dPolys,
    RModelBounds,
    RLerpTag,
    RLerpTagFrameModel,
    RLerpTagTorso,
    RRemapShader,
    RInPvs,
    RGetGlobalFog,
    RGetViewFog,
    RSetSurfaceShader,
    RGetSurfaceShader,
    RGetShaderFromModel,
    RGetShaderName,
    GetClipboardData,
    GetGlConfig,
    GetVoipTime,
    GetVoipPower,
    GetVoipGain,
    GetVoipMutePlayer,
    GetVoipMuteAll,
    CmdAutoComplete,
    SvShutdown,
    GetGameState,
    GetCurrentSnapshotNumber,
    GetSnapshot,
    GetServerCommand,
    GetCurrentCmdNumber,
    GetUserCmd,
    SetNetFields,
    GetDemoState,
    GetDemoPos,
    GetDemoName,
    GetDemoLength,
    GetDemoFileInfo,
    GetClientState,
    GetConfigString,
    SetMapTitle,
    SetViewAngles,
    GetViewAngles,
    MemoryRemaining,
    KeyIsDown,
    KeyClearStates,
    KeyGetKey,
    KeySetRepeat,
    KeyKeynumToStringBuf,
    KeyGetBindingBuf,
    KeySetBinding,
    KeySetOverstrikeMode,
    KeyGetOverstrikeMode,
    KeyGetCapsLockMode,
    KeyGetNumLockMode,
    MouseGetState,
    MouseSetState,
    SetKeyForJoyEvent,
    GetKeyForJoyEvent,
    GetJoyEventForKey,
    JoyEventToString,
    LanGetPingQueueCount,
    LanClearPing,
    LanGetPing,
    LanGetPingInfo,
    LanGetServerCount,
    LanGetServerAddressString,
    LanGetServerInfo,
    LanGetServerPing,
    LanServerStatus,
    LanSaveCachedServers,
    LanLoadCachedServers,
    LanResetPings,
    LanMarkServerVisible,
    LanServerIsVisible,
    LanUpdateVisiblePings,
    LanAddServer,
    LanRemoveServer,
    LanCompareServers,
    LanServerIsInFavoriteList,
    PcAddGlobalDefine,
    PcRemoveAllGlobalDefines,
    PcLoadSource,
    PcFreeSource,
    PcReadToken,
    PcUnreadToken,
    PcSourceFileAndLine,
    HeapMalloc,
    HeapAvailable,
    HeapFree,
    RealTime,
    SnapVector,
    CinPlayCinematic,
    CinStopCinematic,
    CinRunCinematic,
    CinDrawCinematic,
    CinSetExtents,
    LoadCamera,
    StartCamera,
    GetCameraInfo,
}

const REF_ENTITY: ArgKind = ArgKind::StructSize(size_of::<RefEntity>());
const REF_DEF: ArgKind = ArgKind::StructSize(size_of::<RefDef>());
const FONT_INFO: ArgKind = ArgKind::StructSize(size_of::<FontInfo>());
const GL_CONFIG: ArgKind = ArgKind::StructSize(size_of::<GlConfig>());
const GAME_STATE: ArgKind = ArgKind::StructSize(size_of::<GameState>());
const SNAPSHOT: ArgKind = ArgKind::StructSize(size_of::<Snapshot>());
const CLIENT_STATE: ArgKind = ArgKind::StructSize(size_of::<ClientState>());

impl Call for CgameCall {
    const MODULE: ModuleKind = ModuleKind::Cgame;

    fn id(self) -> i32 {
        self as i32
    }

    fn from_id(id: i32) -> Option<CgameCall> {
        let index = usize::try_from(id).ok()?;
        (index < CgameCall::LENGTH).then(|| CgameCall::from_usize(index))
    }

    fn signature(self) -> Signature {
        use ArgKind::{ElementSize, Len};
        use CgameCall as C;
        use ReturnKind as R;
        const INT: ArgKind = ArgKind::Int;
        const BOOL: ArgKind = ArgKind::Bool;
        const FLOAT: ArgKind = ArgKind::Float;
        const PTR: ArgKind = ArgKind::Ptr;

        match self {
            C::Print => Signature::new("CG_PRINT", &[PTR], R::Void),
            C::Error => Signature::new("CG_ERROR", &[PTR], R::Void),
            C::Milliseconds => Signature::new("CG_MILLISECONDS", &[], R::Int),
            C::CvarRegister => Signature::new("CG_CVAR_REGISTER", &[PTR, PTR, PTR, INT], R::Void),
            C::CvarUpdate => Signature::new("CG_CVAR_UPDATE", &[PTR], R::Void),
            C::CvarSet => Signature::new("CG_CVAR_SET", &[PTR, PTR], R::Void),
            C::CvarSetValue => Signature::new("CG_CVAR_SET_VALUE", &[PTR, FLOAT], R::Void),
            C::CvarReset => Signature::new("CG_CVAR_RESET", &[PTR], R::Void),
            C::CvarVariableValue => Signature::new("CG_CVAR_VARIABLE_VALUE", &[PTR], R::Float),
            C::CvarVariableIntegerValue => {
                Signature::new("CG_CVAR_VARIABLE_INTEGER_VALUE", &[PTR], R::Int)
            }
            C::CvarVariableStringBuffer => {
                Signature::new("CG_CVAR_VARIABLE_STRING_BUFFER", &[PTR, PTR, Len], R::Void)
            }
            C::CvarLatchedVariableStringBuffer => Signature::new(
                "CG_CVAR_LATCHED_VARIABLE_STRING_BUFFER",
                &[PTR, PTR, Len],
                R::Void,
            ),
            C::CvarInfoStringBuffer => {
                Signature::new("CG_CVAR_INFO_STRING_BUFFER", &[INT, PTR, Len], R::Void)
            }
            C::CvarCheckRange => {
                Signature::new("CG_CVAR_CHECK_RANGE", &[PTR, FLOAT, FLOAT, BOOL], R::Void)
            }
            C::Argc => Signature::new("CG_ARGC", &[], R::Int),
            C::Argv => Signature::new("CG_ARGV", &[INT, PTR, Len], R::Void),
            C::Args => Signature::new("CG_ARGS", &[PTR, Len], R::Void),
            C::LiteralArgs => Signature::new("CG_LITERAL_ARGS", &[PTR, Len], R::Void),
            C::FsFOpenFile => Signature::new("CG_FS_FOPENFILE", &[PTR, PTR, INT], R::Int),
            C::FsRead => Signature::new("CG_FS_READ", &[PTR, Len, INT], R::Int),
            C::FsWrite => Signature::new("CG_FS_WRITE", &[PTR, Len, INT], R::Int),
            C::FsSeek => Signature::new("CG_FS_SEEK", &[INT, INT, INT], R::Int),
            C::FsTell => Signature::new("CG_FS_TELL", &[INT], R::Int),
            C::FsFCloseFile => Signature::new("CG_FS_FCLOSEFILE", &[INT], R::Void),
            C::FsGetFileList => Signature::new("CG_FS_GETFILELIST", &[PTR, PTR, PTR, Len], R::Int),
            C::FsDelete => Signature::new("CG_FS_DELETE", &[PTR], R::Int),
            C::FsRename => Signature::new("CG_FS_RENAME", &[PTR, PTR], R::Int),
            C::CmdExecuteText => Signature::new("CG_CMD_EXECUTETEXT", &[INT, PTR], R::Void),
            C::AddCommand => Signature::new("CG_ADDCOMMAND", &[PTR], R::Void),
            C::RemoveCommand => Signature::new("CG_REMOVECOMMAND", &[PTR], R::Void),
            C::SendClientCommand => Signature::new("CG_SENDCLIENTCOMMAND", &[PTR], R::Void),
            C::UpdateScreen => Signature::new("CG_UPDATESCREEN", &[], R::Void),
            C::CmLoadMap => Signature::new("CG_CM_LOADMAP", &[PTR], R::Void),
            C::CmNumInlineModels => Signature::new("CG_CM_NUMINLINEMODELS", &[], R::Int),
            C::CmInlineModel => Signature::new("CG_CM_INLINEMODEL", &[INT], R::Int),
            C::CmTempBoxModel => Signature::new("CG_CM_TEMPBOXMODEL", &[PTR, PTR, INT], R::Int),
            C::CmTempCapsuleModel => {
                Signature::new("CG_CM_TEMPCAPSULEMODEL", &[PTR, PTR, INT], R::Int)
            }
            C::CmPointContents => Signature::new("CG_CM_POINTCONTENTS", &[PTR, INT], R::Int),
            C::CmTransformedPointContents => {
                Signature::new("CG_CM_TRANSFORMEDPOINTCONTENTS", &[PTR, INT, PTR, PTR], R::Int)
            }
            C::CmBoxTrace => {
                Signature::new("CG_CM_BOXTRACE", &[PTR, PTR, PTR, PTR, PTR, INT, INT], R::Void)
            }
            C::CmCapsuleTrace => {
                Signature::new("CG_CM_CAPSULETRACE", &[PTR, PTR, PTR, PTR, PTR, INT, INT], R::Void)
            }
            C::CmTransformedBoxTrace => Signature::new(
                "CG_CM_TRANSFORMEDBOXTRACE",
                &[PTR, PTR, PTR, PTR, PTR, INT, INT, PTR, PTR],
                R::Void,
            ),
            C::CmTransformedCapsuleTrace => Signature::new(
                "CG_CM_TRANSFORMEDCAPSULETRACE",
                &[PTR, PTR, PTR, PTR, PTR, INT, INT, PTR, PTR],
                R::Void,
            ),
            C::CmBiSphereTrace => Signature::new(
                "CG_CM_BISPHERETRACE",
                &[PTR, PTR, PTR, FLOAT, FLOAT, INT, INT],
                R::Void,
            ),
            C::CmTransformedBiSphereTrace => Signature::new(
                "CG_CM_TRANSFORMEDBISPHERETRACE",
                &[PTR, PTR, PTR, FLOAT, FLOAT, INT, INT, PTR],
                R::Void,
            ),
            C::CmMarkFragments => Signature::new(
                "CG_CM_MARKFRAGMENTS",
                &[Len, PTR, PTR, Len, PTR, Len, PTR],
                R::Int,
            ),
            C::SStartSound => Signature::new("CG_S_STARTSOUND", &[PTR, INT, INT, INT], R::Void),
            C::SStartLocalSound => Signature::new("CG_S_STARTLOCALSOUND", &[INT, INT], R::Void),
            C::SStopLoopingSound => Signature::new("CG_S_STOPLOOPINGSOUND", &[INT], R::Void),
            C::SClearLoopingSounds => Signature::new("CG_S_CLEARLOOPINGSOUNDS", &[BOOL], R::Void),
            C::SAddLoopingSound => {
                Signature::new("CG_S_ADDLOOPINGSOUND", &[INT, PTR, PTR, INT], R::Void)
            }
            C::SAddRealLoopingSound => {
                Signature::new("CG_S_ADDREALLOOPINGSOUND", &[INT, PTR, PTR, INT], R::Void)
            }
            C::SUpdateEntityPosition => {
                Signature::new("CG_S_UPDATEENTITYPOSITION", &[INT, PTR], R::Void)
            }
            C::SRespatialize => {
                Signature::new("CG_S_RESPATIALIZE", &[INT, PTR, PTR, INT, BOOL], R::Void)
            }
            C::SRegisterSound => Signature::new("CG_S_REGISTERSOUND", &[PTR, BOOL], R::Int),
            C::SSoundDuration => Signature::new("CG_S_SOUNDDURATION", &[INT], R::Int),
            C::SStartBackgroundTrack => {
                Signature::new("CG_S_STARTBACKGROUNDTRACK", &[PTR, PTR, FLOAT, FLOAT], R::Void)
            }
            C::SStopBackgroundTrack => Signature::new("CG_S_STOPBACKGROUNDTRACK", &[], R::Void),
            C::SStartStreamingSound => {
                Signature::new("CG_S_STARTSTREAMINGSOUND", &[INT, INT, PTR, FLOAT], R::Void)
            }
            C::SStopStreamingSound => Signature::new("CG_S_STOPSTREAMINGSOUND", &[INT], R::Void),
            C::SQueueStreamingSound => {
                Signature::new("CG_S_QUEUESTREAMINGSOUND", &[INT, PTR, FLOAT], R::Void)
            }
            C::SGetStreamPlayCount => Signature::new("CG_S_GETSTREAMPLAYCOUNT", &[INT], R::Int),
            C::SSetStreamVolume => Signature::new("CG_S_SETSTREAMVOLUME", &[INT, FLOAT], R::Void),
            C::RLoadWorldMap => Signature::new("CG_R_LOADWORLDMAP", &[PTR], R::Void),
            C::GetEntityToken => Signature::new("CG_GET_ENTITY_TOKEN", &[PTR, PTR, Len], R::Bool),
            C::RRegisterModel => Signature::new("CG_R_REGISTERMODEL", &[PTR], R::Int),
            C::RRegisterShaderEx => {
                Signature::new("CG_R_REGISTERSHADEREX", &[PTR, INT, BOOL], R::Int)
            }
            C::RRegisterShader => Signature::new("CG_R_REGISTERSHADER", &[PTR], R::Int),
            C::RRegisterShaderNoMip => Signature::new("CG_R_REGISTERSHADERNOMIP", &[PTR], R::Int),
            C::RRegisterFont => Signature::new(
                "CG_R_REGISTERFONT",
                &[PTR, INT, FLOAT, BOOL, PTR, FONT_INFO],
                R::Void,
            ),
            C::RAllocSkinSurface => Signature::new("CG_R_ALLOCSKINSURFACE", &[PTR, INT], R::Int),
            C::RAddSkinToFrame => Signature::new("CG_R_ADDSKINTOFRAME", &[Len, PTR], R::Int),
            C::RClearScene => Signature::new("CG_R_CLEARSCENE", &[], R::Void),
            C::RAddPolyRefEntityToScene => Signature::new(
                "CG_R_ADDPOLYREFENTITYTOSCENE",
                &[PTR, REF_ENTITY, Len, PTR, INT],
                R::Void,
            ),
            C::RAddRefEntityToScene => {
                Signature::new("CG_R_ADDREFENTITYTOSCENE", &[PTR, REF_ENTITY], R::Void)
            }
            C::RAddPolyToScene => {
                Signature::new("CG_R_ADDPOLYTOSCENE", &[INT, Len, PTR, INT, INT], R::Void)
            }
            C::RAddPolysToScene => Signature::new(
                "CG_R_ADDPOLYSTOSCENE",
                &[INT, INT, PTR, INT, INT, INT],
                R::Void,
            ),
            C::RAddPolyBufferToScene => {
                Signature::new("CG_R_ADDPOLYBUFFERTOSCENE", &[PTR], R::Void)
            }
            C::RAddLightToScene => Signature::new(
                "CG_R_ADDLIGHTTOSCENE",
                &[PTR, FLOAT, FLOAT, FLOAT, FLOAT, FLOAT, INT],
                R::Void,
            ),
            C::RAddAdditiveLightToScene => Signature::new(
                "CG_R_ADDADDITIVELIGHTTOSCENE",
                &[PTR, FLOAT, FLOAT, FLOAT, FLOAT, FLOAT],
                R::Void,
            ),
            C::RAddVertexLightToScene => Signature::new(
                "CG_R_ADDVERTEXLIGHTTOSCENE",
                &[PTR, FLOAT, FLOAT, FLOAT, FLOAT, FLOAT],
                R::Void,
            ),
            C::RAddJuniorLightToScene => Signature::new(
                "CG_R_ADDJUNIORLIGHTTOSCENE",
                &[PTR, FLOAT, FLOAT, FLOAT, FLOAT, FLOAT],
                R::Void,
            ),
            C::RAddDirectedLightToScene => Signature::new(
                "CG_R_ADDDIRECTEDLIGHTTOSCENE",
                &[PTR, FLOAT, FLOAT, FLOAT, FLOAT],
                R::Void,
            ),
            C::RAddCoronaToScene => Signature::new(
                "CG_R_ADDCORONATOSCENE",
                &[PTR, FLOAT, FLOAT, FLOAT, FLOAT, INT, BOOL, INT],
                R::Void,
            ),
            C::RLightForPoint => {
                Signature::new("CG_R_LIGHTFORPOINT", &[PTR, PTR, PTR, PTR], R::Int)
            }
            C::RRenderScene => Signature::new("CG_R_RENDERSCENE", &[PTR, REF_DEF], R::Void),
            C::RSetColor => Signature::new("CG_R_SETCOLOR", &[PTR], R::Void),
            C::RSetClipRegion => Signature::new("CG_R_SETCLIPREGION", &[PTR], R::Void),
            C::RDrawStretchPic => Signature::new(
                "CG_R_DRAWSTRETCHPIC",
                &[FLOAT, FLOAT, FLOAT, FLOAT, FLOAT, FLOAT, FLOAT, FLOAT, INT],
                R::Void,
            ),
            C::RDrawRotatedPic => Signature::new(
                "CG_R_DRAWROTATEDPIC",
                &[FLOAT, FLOAT, FLOAT, FLOAT, FLOAT, FLOAT, FLOAT, FLOAT, INT, FLOAT],
                R::Void,
            ),
            C::RDrawStretchPicGradient => Signature::new(
                "CG_R_DRAWSTRETCHPIC_GRADIENT",
                &[FLOAT, FLOAT, FLOAT, FLOAT, FLOAT, FLOAT, FLOAT, FLOAT, INT, PTR],
                R::Void,
            ),
            C::RDraw2dPolys => Signature::new("CG_R_DRAW2DPOLYS", &[PTR, Len, INT], R::Void),
            C::RModelBounds => Signature::new(
                "CG_R_MODELBOUNDS",
                &[INT, PTR, PTR, INT, INT, FLOAT],
                R::Int,
            ),
            C::RLerpTag => {
                Signature::new("CG_R_LERPTAG", &[PTR, INT, INT, INT, FLOAT, PTR], R::Int)
            }
            C::RLerpTagFrameModel => Signature::new(
                "CG_R_LERPTAG_FRAMEMODEL",
                &[PTR, INT, INT, INT, INT, INT, FLOAT, PTR, PTR],
                R::Int,
            ),
            C::RLerpTagTorso => Signature::new(
                "CG_R_LERPTAG_TORSO",
                &[
                    PTR, INT, INT, INT, INT, INT, FLOAT, PTR, PTR, PTR, INT, INT, INT, INT, FLOAT,
                ],
                R::Int,
            ),
            C::RRemapShader => Signature::new("CG_R_REMAP_SHADER", &[PTR, PTR, PTR], R::Void),
            C::RInPvs => Signature::new("CG_R_INPVS", &[PTR, PTR], R::Bool),
            C::RGetGlobalFog => {
                Signature::new("CG_R_GET_GLOBAL_FOG", &[PTR, PTR, PTR, PTR, PTR], R::Void)
            }
            C::RGetViewFog => Signature::new(
                "CG_R_GET_VIEW_FOG",
                &[PTR, PTR, PTR, PTR, PTR, PTR, BOOL],
                R::Void,
            ),
            C::RSetSurfaceShader => Signature::new("CG_R_SET_SURFACE_SHADER", &[INT, PTR], R::Void),
            C::RGetSurfaceShader => Signature::new("CG_R_GET_SURFACE_SHADER", &[INT, INT], R::Int),
            C::RGetShaderFromModel => {
                Signature::new("CG_R_GET_SHADER_FROM_MODEL", &[INT, INT, INT], R::Int)
            }
            C::RGetShaderName => Signature::new("CG_R_GET_SHADER_NAME", &[INT, PTR, Len], R::Void),
            C::GetClipboardData => Signature::new("CG_GETCLIPBOARDDATA", &[PTR, Len], R::Void),
            C::GetGlConfig => Signature::new("CG_GETGLCONFIG", &[PTR, GL_CONFIG], R::Void),
            C::GetVoipTime => Signature::new("CG_GET_VOIP_TIME", &[INT], R::Int),
            C::GetVoipPower => Signature::new("CG_GET_VOIP_POWER", &[INT], R::Float),
            C::GetVoipGain => Signature::new("CG_GET_VOIP_GAIN", &[INT], R::Float),
            C::GetVoipMutePlayer => Signature::new("CG_GET_VOIP_MUTE_PLAYER", &[INT], R::Bool),
            C::GetVoipMuteAll => Signature::new("CG_GET_VOIP_MUTE_ALL", &[], R::Bool),
            C::CmdAutoComplete => Signature::new("CG_CMD_AUTOCOMPLETE", &[PTR, PTR, Len], R::Void),
            C::SvShutdown => Signature::new("CG_SV_SHUTDOWN", &[PTR], R::Void),
            C::GetGameState => Signature::new("CG_GETGAMESTATE", &[PTR, GAME_STATE], R::Void),
            C::GetCurrentSnapshotNumber => {
                Signature::new("CG_GETCURRENTSNAPSHOTNUMBER", &[PTR, PTR], R::Void)
            }
            C::GetSnapshot => Signature::new(
                "CG_GETSNAPSHOT",
                &[INT, PTR, SNAPSHOT, PTR, PTR, Len],
                R::Bool,
            ),
            C::GetServerCommand => Signature::new("CG_GETSERVERCOMMAND", &[INT], R::Bool),
            C::GetCurrentCmdNumber => Signature::new("CG_GETCURRENTCMDNUMBER", &[], R::Int),
            C::GetUserCmd => Signature::new("CG_GETUSERCMD", &[INT, PTR, INT], R::Bool),
            C::SetNetFields => Signature::new(
                "CG_SET_NET_FIELDS",
                &[ElementSize, INT, PTR, Len, ElementSize, INT, PTR, Len],
                R::Void,
            ),
            C::GetDemoState => Signature::new("CG_GETDEMOSTATE", &[], R::Int),
            C::GetDemoPos => Signature::new("CG_GETDEMOPOS", &[], R::Int),
            C::GetDemoName => Signature::new("CG_GETDEMONAME", &[PTR, Len], R::Void),
            C::GetDemoLength => Signature::new("CG_GETDEMOLENGTH", &[], R::Int),
            C::GetDemoFileInfo => Signature::new(
                "CG_GETDEMOFILEINFO",
                &[PTR, PTR, PTR, PTR, PTR, PTR],
                R::Int,
            ),
            C::GetClientState => Signature::new("CG_GETCLIENTSTATE", &[PTR, CLIENT_STATE], R::Void),
            C::GetConfigString => Signature::new("CG_GETCONFIGSTRING", &[INT, PTR, Len], R::Int),
            C::SetMapTitle => Signature::new("CG_SETMAPTITLE", &[PTR], R::Void),
            C::SetViewAngles => Signature::new("CG_SETVIEWANGLES", &[INT, PTR], R::Void),
            C::GetViewAngles => Signature::new("CG_GETVIEWANGLES", &[INT, PTR], R::Void),
            C::MemoryRemaining => Signature::new("CG_MEMORY_REMAINING", &[], R::Int),
            C::KeyIsDown => Signature::new("CG_KEY_ISDOWN", &[INT], R::Bool),
            C::KeyClearStates => Signature::new("CG_KEY_CLEARSTATES", &[], R::Void),
            C::KeyGetKey => Signature::new("CG_KEY_GETKEY", &[PTR, INT], R::Int),
            C::KeySetRepeat => Signature::new("CG_KEY_SETREPEAT", &[BOOL], R::Void),
            C::KeyKeynumToStringBuf => {
                Signature::new("CG_KEY_KEYNUMTOSTRINGBUF", &[INT, PTR, Len], R::Void)
            }
            C::KeyGetBindingBuf => {
                Signature::new("CG_KEY_GETBINDINGBUF", &[INT, PTR, Len], R::Void)
            }
            C::KeySetBinding => Signature::new("CG_KEY_SETBINDING", &[INT, PTR], R::Void),
            C::KeySetOverstrikeMode => Signature::new("CG_KEY_SETOVERSTRIKEMODE", &[BOOL], R::Void),
            C::KeyGetOverstrikeMode => Signature::new("CG_KEY_GETOVERSTRIKEMODE", &[], R::Bool),
            C::KeyGetCapsLockMode => Signature::new("CG_KEY_GETCAPSLOCKMODE", &[], R::Bool),
            C::KeyGetNumLockMode => Signature::new("CG_KEY_GETNUMLOCKMODE", &[], R::Bool),
            C::MouseGetState => Signature::new("CG_MOUSE_GETSTATE", &[INT], R::Int),
            C::MouseSetState => Signature::new("CG_MOUSE_SETSTATE", &[INT, INT], R::Void),
            C::SetKeyForJoyEvent => {
                Signature::new("CG_SET_KEY_FOR_JOY_EVENT", &[INT, PTR, INT], R::Int)
            }
            C::GetKeyForJoyEvent => Signature::new("CG_GET_KEY_FOR_JOY_EVENT", &[INT, PTR], R::Int),
            C::GetJoyEventForKey => {
                Signature::new("CG_GET_JOY_EVENT_FOR_KEY", &[INT, INT, INT, PTR], R::Int)
            }
            C::JoyEventToString => {
                Signature::new("CG_JOY_EVENT_TO_STRING", &[PTR, PTR, Len], R::Void)
            }
            C::LanGetPingQueueCount => Signature::new("CG_LAN_GETPINGQUEUECOUNT", &[], R::Int),
            C::LanClearPing => Signature::new("CG_LAN_CLEARPING", &[INT], R::Void),
            C::LanGetPing => Signature::new("CG_LAN_GETPING", &[INT, PTR, Len, PTR], R::Void),
            C::LanGetPingInfo => Signature::new("CG_LAN_GETPINGINFO", &[INT, PTR, Len], R::Void),
            C::LanGetServerCount => Signature::new("CG_LAN_GETSERVERCOUNT", &[INT], R::Int),
            C::LanGetServerAddressString => Signature::new(
                "CG_LAN_GETSERVERADDRESSSTRING",
                &[INT, INT, PTR, Len],
                R::Void,
            ),
            C::LanGetServerInfo => {
                Signature::new("CG_LAN_GETSERVERINFO", &[INT, INT, PTR, Len], R::Void)
            }
            C::LanGetServerPing => Signature::new("CG_LAN_GETSERVERPING", &[INT, INT], R::Int),
            C::LanServerStatus => Signature::new("CG_LAN_SERVERSTATUS", &[PTR, PTR, Len], R::Int),
            C::LanSaveCachedServers => Signature::new("CG_LAN_SAVECACHEDSERVERS", &[], R::Void),
            C::LanLoadCachedServers => Signature::new("CG_LAN_LOADCACHEDSERVERS", &[], R::Void),
            C::LanResetPings => Signature::new("CG_LAN_RESETPINGS", &[INT], R::Void),
            C::LanMarkServerVisible => {
                Signature::new("CG_LAN_MARKSERVERVISIBLE", &[INT, INT, BOOL], R::Void)
            }
            C::LanServerIsVisible => Signature::new("CG_LAN_SERVERISVISIBLE", &[INT, INT], R::Bool),
            C::LanUpdateVisiblePings => {
                Signature::new("CG_LAN_UPDATEVISIBLEPINGS", &[INT], R::Bool)
            }
            C::LanAddServer => Signature::new("CG_LAN_ADDSERVER", &[INT, PTR, PTR], R::Int),
            C::LanRemoveServer => Signature::new("CG_LAN_REMOVESERVER", &[INT, PTR], R::Void),
            C::LanCompareServers => {
                Signature::new("CG_LAN_COMPARESERVERS", &[INT, INT, INT, INT, INT], R::Int)
            }
            C::LanServerIsInFavoriteList => {
                Signature::new("CG_LAN_SERVERISINFAVORITELIST", &[INT, INT], R::Bool)
            }
            C::PcAddGlobalDefine => Signature::new("CG_PC_ADD_GLOBAL_DEFINE", &[PTR], R::Int),
            C::PcRemoveAllGlobalDefines => {
                Signature::new("CG_PC_REMOVE_ALL_GLOBAL_DEFINES", &[], R::Void)
            }
            C::PcLoadSource => Signature::new("CG_PC_LOAD_SOURCE", &[PTR, PTR], R::Int),
            C::PcFreeSource => Signature::new("CG_PC_FREE_SOURCE", &[INT], R::Int),
            C::PcReadToken => Signature::new("CG_PC_READ_TOKEN", &[INT, PTR], R::Int),
            C::PcUnreadToken => Signature::new("CG_PC_UNREAD_TOKEN", &[INT], R::Void),
            C::PcSourceFileAndLine => {
                Signature::new("CG_PC_SOURCE_FILE_AND_LINE", &[INT, PTR, PTR], R::Int)
            }
            C::HeapMalloc => Signature::new("CG_HEAP_MALLOC", &[INT], R::Ptr),
            C::HeapAvailable => Signature::new("CG_HEAP_AVAILABLE", &[], R::Int),
            C::HeapFree => Signature::new("CG_HEAP_FREE", &[PTR], R::Void),
            C::RealTime => Signature::new("CG_REAL_TIME", &[PTR], R::Int),
            C::SnapVector => Signature::new("CG_SNAPVECTOR", &[PTR], R::Void),
            C::CinPlayCinematic => Signature::new(
                "CG_CIN_PLAYCINEMATIC",
                &[PTR, INT, INT, INT, INT, INT],
                R::Int,
            ),
            C::CinStopCinematic => Signature::new("CG_CIN_STOPCINEMATIC", &[INT], R::Enum),
            C::CinRunCinematic => Signature::new("CG_CIN_RUNCINEMATIC", &[INT], R::Enum),
            C::CinDrawCinematic => Signature::new("CG_CIN_DRAWCINEMATIC", &[INT], R::Void),
            C::CinSetExtents => {
                Signature::new("CG_CIN_SETEXTENTS", &[INT, INT, INT, INT, INT], R::Void)
            }
            C::LoadCamera => Signature::new("CG_LOADCAMERA", &[PTR], R::Bool),
            C::StartCamera => Signature::new("CG_STARTCAMERA", &[INT], R::Void),
            C::GetCameraInfo => Signature::new("CG_GETCAMERAINFO", &[INT, PTR, PTR], R::Bool),
        }
    }
}
