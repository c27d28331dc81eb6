// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Calls every wrapper once, so that each one's arguments go through the
//! signature check in [`module_abi::dispatch`].

use bytemuck::Zeroable;
use enum_map::EnumMap;
use module_abi::{
    operations, testing::RecordingGateway, ExecWhen, FileHandle, FsMode, QHandle, SeekOrigin,
    MAX_QPATH_LENGTH,
};

use crate::{GameCall, GameSyscalls};

fn zeroed<T: Zeroable>() -> T {
    T::zeroed()
}

fn recorded(wrapper: impl FnOnce(&GameSyscalls)) -> RecordingGateway {
    let gateway = RecordingGateway::new();
    wrapper(&GameSyscalls::new(&gateway));
    gateway
}

#[test]
fn every_operation_has_a_wrapper() {
    let mut covered = EnumMap::<GameCall, bool>::default();
    let mut entities = [[0u64; 12]; 4];
    let mut players = [[0u32; 7]; 2];

    macro_rules! wrappers {
        ($($operation:ident: |$s:ident| $call:expr;)*) => {$(
            let calls = recorded(|$s| {
                $call;
            })
            .calls();
            assert_eq!(1, calls.len(), "{} made {} calls", stringify!($call), calls.len());
            assert!(
                calls[0].is(GameCall::$operation),
                "{} didn't call {:?}",
                stringify!($call),
                GameCall::$operation,
            );
            covered[GameCall::$operation] = true;
        )*};
    }

    wrappers! {
        Print: |s| s.print(c"name");
        // Safety: the recording host never reads or keeps the pointers.
        LocateGameData: |s| unsafe {
            s.locate_game_data(entities.as_mut_ptr(), entities.len(), players.as_mut_ptr())
        };
        DropPlayer: |s| s.drop_player(1, c"name");
        SendServerCommand: |s| s.send_server_command(1, 1, c"name");
        SetConfigstring: |s| s.set_configstring(1, c"name");
        GetConfigstring: |s| s.get_configstring(1, &mut [0; 16]);
        SetConfigstringRestrictions: |s| s.set_configstring_restrictions(1, &zeroed());
        GetUserinfo: |s| s.get_userinfo(1, &mut [0; 16]);
        SetUserinfo: |s| s.set_userinfo(1, c"name");
        GetServerinfo: |s| s.get_serverinfo(&mut [0; 16]);
        GetUsercmd: |s| s.get_usercmd(1, &mut zeroed());
        ClientCommand: |s| s.client_command(1, c"name");
        BotAllocateClient: |s| s.bot_allocate_client();
        BotFreeClient: |s| s.bot_free_client(1);
        BotGetSnapshotEntity: |s| s.bot_get_snapshot_entity(1, 1);
        BotGetServerCommand: |s| s.bot_get_server_command(1, &mut [0; 16]);
        BotUserCommand: |s| s.bot_user_command(1, &zeroed());
        Milliseconds: |s| s.milliseconds();
        Argc: |s| s.argc();
        Argv: |s| s.argv(1, &mut [0; 16]);
        Args: |s| s.args(&mut [0; 16]);
        LiteralArgs: |s| s.literal_args(&mut [0; 16]);
        FsFOpenFile: |s| s.fs_open_file(c"name", FsMode::Read);
        FsFOpenFile: |s| s.fs_file_length(c"name");
        FsRead: |s| s.fs_read(&mut [0; 16], FileHandle::new(1));
        FsWrite: |s| s.fs_write(b"data", FileHandle::new(1));
        FsSeek: |s| s.fs_seek(FileHandle::new(1), 1, SeekOrigin::Start);
        FsTell: |s| s.fs_tell(FileHandle::new(1));
        FsFCloseFile: |s| s.fs_close_file(FileHandle::new(1));
        FsGetFileList: |s| s.fs_get_file_list(c"name", c"name", &mut [0; 16]);
        FsDelete: |s| s.fs_delete(c"name");
        FsRename: |s| s.fs_rename(c"name", c"name");
        CmdExecuteText: |s| s.cmd_execute_text(ExecWhen::Append, c"name");
        CvarRegister: |s| s.cvar_register(None, c"name", c"name", 1);
        CvarUpdate: |s| s.cvar_update(&mut zeroed());
        CvarSet: |s| s.cvar_set(c"name", c"name");
        CvarSetValue: |s| s.cvar_set_value(c"name", 0.5);
        CvarVariableValue: |s| s.cvar_variable_value(c"name");
        CvarVariableIntegerValue: |s| s.cvar_variable_integer_value(c"name");
        CvarVariableStringBuffer: |s| s.cvar_variable_string_buffer(c"name", &mut [0; 16]);
        CvarLatchedVariableStringBuffer: |s| s.cvar_latched_variable_string_buffer(c"name", &mut [0; 16]);
        CvarDefaultVariableStringBuffer: |s| s.cvar_default_variable_string_buffer(c"name", &mut [0; 16]);
        CvarInfoStringBuffer: |s| s.cvar_info_string_buffer(1, &mut [0; 16]);
        CvarCheckRange: |s| s.cvar_check_range(c"name", 0.5, 0.5, true);
        AddCommand: |s| s.add_command(c"name");
        RemoveCommand: |s| s.remove_command(c"name");
        RealTime: |s| s.real_time(&mut zeroed());
        SnapVector: |s| s.snap_vector(&mut [0.0; 3]);
        PcAddGlobalDefine: |s| s.pc_add_global_define(c"name");
        PcRemoveGlobalDefine: |s| s.pc_remove_global_define(c"name");
        PcRemoveAllGlobalDefines: |s| s.pc_remove_all_global_defines();
        PcLoadSource: |s| s.pc_load_source(c"name", c"name");
        PcFreeSource: |s| s.pc_free_source(1);
        PcAddDefine: |s| s.pc_add_define(1, c"name");
        PcReadToken: |s| s.pc_read_token(1, &mut zeroed());
        PcUnreadToken: |s| s.pc_unread_token(1);
        PcSourceFileAndLine: |s| s.pc_source_file_and_line(1, &mut [0; MAX_QPATH_LENGTH], &mut 0);
        HeapMalloc: |s| s.heap_malloc(1);
        HeapAvailable: |s| s.heap_available();
        // Safety: nothing was allocated, and the recording host doesn't
        // free anything.
        HeapFree: |s| unsafe { s.heap_free(core::ptr::null_mut()) };
        FieldCompleteFilename: |s| s.field_complete_filename(c"name", c"name", true, true);
        FieldCompleteCommand: |s| s.field_complete_command(c"name", true, true);
        FieldCompleteList: |s| s.field_complete_list(b"red\0blue\0\0");
        SetNetFields: |s| s.set_net_fields::<[u32; 4], [u32; 4]>(16, &[], 16, &[]);
        GetBrushBounds: |s| s.get_brush_bounds(1, &mut [0.0; 3], &mut [0.0; 3]);
        Trace: |s| s.trace(&[0.0; 3], None, &[0.0; 3], 1, 1);
        TraceCapsule: |s| s.trace_capsule(&[0.0; 3], None, &[0.0; 3], 1, 1);
        ClipToEntities: |s| s.clip_to_entities(&[0.0; 3], None, &[0.0; 3], 1, 1);
        ClipToEntitiesCapsule: |s| s.clip_to_entities_capsule(&[0.0; 3], None, &[0.0; 3], 1, 1);
        PointContents: |s| s.point_contents(&[0.0; 3], 1);
        InPvs: |s| s.in_pvs(&[0.0; 3], &[0.0; 3]);
        InPvsIgnorePortals: |s| s.in_pvs_ignore_portals(&[0.0; 3], &[0.0; 3]);
        AdjustAreaPortalState: |s| s.adjust_area_portal_state(&[0u32; 4], true);
        AreasConnected: |s| s.areas_connected(1, 1);
        LinkEntity: |s| s.link_entity(&mut [0u32; 4]);
        UnlinkEntity: |s| s.unlink_entity(&mut [0u32; 4]);
        EntitiesInBox: |s| s.entities_in_box(&[0.0; 3], &[0.0; 3], &mut [0; 4]);
        EntityContact: |s| s.entity_contact(&[0.0; 3], &[0.0; 3], &[0u32; 4]);
        EntityContactCapsule: |s| s.entity_contact_capsule(&[0.0; 3], &[0.0; 3], &[0u32; 4]);
        GetEntityToken: |s| s.get_entity_token(&mut 0, &mut [0; 16]);
        DebugPolygonCreate: |s| s.debug_polygon_create(1, &[[0.0; 3]; 3]);
        DebugPolygonShow: |s| s.debug_polygon_show(1, 1, &[[0.0; 3]; 3]);
        DebugPolygonDelete: |s| s.debug_polygon_delete(1);
        RRegisterModel: |s| s.r_register_model(c"name");
        RLerpTag: |s| s.r_lerp_tag(&mut zeroed(), QHandle::new(1), 1, 1, 0.5, c"name");
        RLerpTagFrameModel: |s| s.r_lerp_tag_frame_model(&mut zeroed(), QHandle::new(1), QHandle::new(1), 1, QHandle::new(1), 1, 0.5, c"name", &mut 0);
        RLerpTagTorso: |s| s.r_lerp_tag_torso(&mut zeroed(), QHandle::new(1), QHandle::new(1), 1, QHandle::new(1), 1, 0.5, c"name", &mut 0, &[[0.0; 3]; 3], QHandle::new(1), 1, QHandle::new(1), 1, 0.5);
        RModelBounds: |s| s.r_model_bounds(QHandle::new(1), &mut [0.0; 3], &mut [0.0; 3], 1, 1, 0.5);
    }

    for operation in operations::<GameCall>() {
        // Never returns, see errors_terminate_even_if_the_host_returns.
        if operation == GameCall::Error {
            continue;
        }
        assert!(covered[operation], "{operation:?} wasn't called");
    }
}
