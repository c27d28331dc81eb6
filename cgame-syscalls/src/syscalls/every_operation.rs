// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Calls every wrapper once, so that each one's arguments go through the
//! signature check in [`module_abi::dispatch`].

use bytemuck::Zeroable;
use enum_map::EnumMap;
use module_abi::{
    operations, testing::RecordingGateway, ClipHandle, ExecWhen, FileHandle, FsMode, QHandle,
    SeekOrigin, SfxHandle, MAX_QPATH_LENGTH,
};

use crate::{CgameCall, CgameSyscalls, MarkFragment, PolyVert};

fn zeroed<T: Zeroable>() -> T {
    T::zeroed()
}

fn recorded(wrapper: impl FnOnce(&CgameSyscalls)) -> RecordingGateway {
    let gateway = RecordingGateway::new();
    wrapper(&CgameSyscalls::new(&gateway));
    gateway
}

#[test]
fn every_operation_has_a_wrapper() {
    let mut covered = EnumMap::<CgameCall, bool>::default();

    macro_rules! wrappers {
        ($($operation:ident: |$s:ident| $call:expr;)*) => {$(
            let calls = recorded(|$s| {
                $call;
            })
            .calls();
            assert_eq!(1, calls.len(), "{} made {} calls", stringify!($call), calls.len());
            assert!(
                calls[0].is(CgameCall::$operation),
                "{} didn't call {:?}",
                stringify!($call),
                CgameCall::$operation,
            );
            covered[CgameCall::$operation] = true;
        )*};
    }

    wrappers! {
        Print: |s| s.print(c"name");
        RAddRefEntityToScene: |s| s.r_add_ref_entity_to_scene(&zeroed());
        GetVoipTime: |s| s.get_voip_time(1);
        GetVoipPower: |s| s.get_voip_power(1);
        GetVoipGain: |s| s.get_voip_gain(1);
        GetVoipMutePlayer: |s| s.get_voip_mute_player(1);
        GetVoipMuteAll: |s| s.get_voip_mute_all();
        GetGameState: |s| s.get_game_state(&mut zeroed());
        GetCurrentSnapshotNumber: |s| s.get_current_snapshot_number();
        GetSnapshot: |s| s.get_snapshot::<[u32; 4], [u32; 4]>(1, &mut zeroed(), &mut zeroed(), &mut [[0; 4]; 2]);
        GetServerCommand: |s| s.get_server_command(1);
        GetCurrentCmdNumber: |s| s.get_current_cmd_number();
        GetUserCmd: |s| s.get_user_cmd(1, &mut zeroed(), 1);
        SetNetFields: |s| s.set_net_fields::<[u32; 4], [u32; 4]>(16, &[], 16, &[]);
        GetDemoState: |s| s.get_demo_state();
        GetDemoPos: |s| s.get_demo_pos();
        GetDemoName: |s| s.get_demo_name(&mut [0; 16]);
        GetDemoLength: |s| s.get_demo_length();
        GetDemoFileInfo: |s| s.get_demo_file_info(c"name");
        GetClientState: |s| s.get_client_state(&mut zeroed());
        GetConfigString: |s| s.get_config_string(1, &mut [0; 16]);
        SetMapTitle: |s| s.set_map_title(c"name");
        SetViewAngles: |s| s.set_view_angles(1, &[0.0; 3]);
        GetViewAngles: |s| s.get_view_angles(1, &mut [0.0; 3]);
        KeyIsDown: |s| s.key_is_down(1);
        KeyClearStates: |s| s.key_clear_states();
        KeyGetKey: |s| s.key_get_key(c"name", 1);
        KeySetRepeat: |s| s.key_set_repeat(true);
        KeyKeynumToStringBuf: |s| s.key_keynum_to_string_buf(1, &mut [0; 16]);
        KeyGetBindingBuf: |s| s.key_get_binding_buf(1, &mut [0; 16]);
        KeySetBinding: |s| s.key_set_binding(1, c"name");
        KeySetOverstrikeMode: |s| s.key_set_overstrike_mode(true);
        KeyGetOverstrikeMode: |s| s.key_get_overstrike_mode();
        KeyGetCapsLockMode: |s| s.key_get_caps_lock_mode();
        KeyGetNumLockMode: |s| s.key_get_num_lock_mode();
        MouseGetState: |s| s.mouse_get_state(1);
        MouseSetState: |s| s.mouse_set_state(1, 1);
        SetKeyForJoyEvent: |s| s.set_key_for_joy_event(1, &zeroed(), 1);
        GetKeyForJoyEvent: |s| s.get_key_for_joy_event(1, &zeroed());
        GetJoyEventForKey: |s| s.get_joy_event_for_key(1, 1, 1, &mut zeroed());
        JoyEventToString: |s| s.joy_event_to_string(&zeroed(), &mut [0; 16]);
        CinPlayCinematic: |s| s.cin_play_cinematic(c"name", 1, 1, 1, 1, 1);
        CinStopCinematic: |s| s.cin_stop_cinematic(1);
        CinRunCinematic: |s| s.cin_run_cinematic(1);
        CinDrawCinematic: |s| s.cin_draw_cinematic(1);
        CinSetExtents: |s| s.cin_set_extents(1, 1, 1, 1, 1);
        LoadCamera: |s| s.load_camera(c"name");
        StartCamera: |s| s.start_camera(1);
        GetCameraInfo: |s| s.get_camera_info(1, &mut [0.0; 3], &mut [0.0; 3]);
        CmLoadMap: |s| s.cm_load_map(c"name");
        CmNumInlineModels: |s| s.cm_num_inline_models();
        CmInlineModel: |s| s.cm_inline_model(1);
        CmTempBoxModel: |s| s.cm_temp_box_model(&[0.0; 3], &[0.0; 3], 1);
        CmTempCapsuleModel: |s| s.cm_temp_capsule_model(&[0.0; 3], &[0.0; 3], 1);
        CmPointContents: |s| s.cm_point_contents(&[0.0; 3], ClipHandle::new(1));
        CmTransformedPointContents: |s| s.cm_transformed_point_contents(&[0.0; 3], ClipHandle::new(1), &[0.0; 3], &[0.0; 3]);
        CmBoxTrace: |s| s.cm_box_trace(&[0.0; 3], &[0.0; 3], &[0.0; 3], &[0.0; 3], ClipHandle::new(1), 1);
        CmCapsuleTrace: |s| s.cm_capsule_trace(&[0.0; 3], &[0.0; 3], &[0.0; 3], &[0.0; 3], ClipHandle::new(1), 1);
        CmTransformedBoxTrace: |s| s.cm_transformed_box_trace(&[0.0; 3], &[0.0; 3], &[0.0; 3], &[0.0; 3], ClipHandle::new(1), 1, &[0.0; 3], &[0.0; 3]);
        CmTransformedCapsuleTrace: |s| s.cm_transformed_capsule_trace(&[0.0; 3], &[0.0; 3], &[0.0; 3], &[0.0; 3], ClipHandle::new(1), 1, &[0.0; 3], &[0.0; 3]);
        CmBiSphereTrace: |s| s.cm_bi_sphere_trace(&[0.0; 3], &[0.0; 3], 0.5, 0.5, ClipHandle::new(1), 1);
        CmTransformedBiSphereTrace: |s| s.cm_transformed_bi_sphere_trace(&[0.0; 3], &[0.0; 3], 0.5, 0.5, ClipHandle::new(1), 1, &[0.0; 3]);
        CmMarkFragments: |s| s.cm_mark_fragments(&[[0.0; 3]; 3], &[0.0; 3], &mut [[0.0; 3]; 3], &mut [MarkFragment::default(); 2]);
        LanGetPingQueueCount: |s| s.lan_get_ping_queue_count();
        LanClearPing: |s| s.lan_clear_ping(1);
        LanGetPing: |s| s.lan_get_ping(1, &mut [0; 16]);
        LanGetPingInfo: |s| s.lan_get_ping_info(1, &mut [0; 16]);
        LanGetServerCount: |s| s.lan_get_server_count(1);
        LanGetServerAddressString: |s| s.lan_get_server_address_string(1, 1, &mut [0; 16]);
        LanGetServerInfo: |s| s.lan_get_server_info(1, 1, &mut [0; 16]);
        LanGetServerPing: |s| s.lan_get_server_ping(1, 1);
        LanServerStatus: |s| s.lan_server_status(c"name", &mut [0; 16]);
        LanSaveCachedServers: |s| s.lan_save_cached_servers();
        LanLoadCachedServers: |s| s.lan_load_cached_servers();
        LanResetPings: |s| s.lan_reset_pings(1);
        LanMarkServerVisible: |s| s.lan_mark_server_visible(1, 1, true);
        LanServerIsVisible: |s| s.lan_server_is_visible(1, 1);
        LanUpdateVisiblePings: |s| s.lan_update_visible_pings(1);
        LanAddServer: |s| s.lan_add_server(1, c"name", c"name");
        LanRemoveServer: |s| s.lan_remove_server(1, c"name");
        LanCompareServers: |s| s.lan_compare_servers(1, 1, 1, 1, 1);
        LanServerIsInFavoriteList: |s| s.lan_server_is_in_favorite_list(1, 1);
        RLoadWorldMap: |s| s.r_load_world_map(c"name");
        GetEntityToken: |s| s.get_entity_token(&mut 0, &mut [0; 16]);
        RRegisterModel: |s| s.r_register_model(c"name");
        RRegisterShaderEx: |s| s.r_register_shader_ex(c"name", 1, true);
        RRegisterShader: |s| s.r_register_shader(c"name");
        RRegisterShaderNoMip: |s| s.r_register_shader_no_mip(c"name");
        RRegisterFont: |s| s.r_register_font(c"name", 1, 0.5, true, &mut zeroed());
        RAllocSkinSurface: |s| s.r_alloc_skin_surface(c"name", QHandle::new(1));
        RAddSkinToFrame: |s| s.r_add_skin_to_frame(&[QHandle::new(1)]);
        RClearScene: |s| s.r_clear_scene();
        RAddPolyRefEntityToScene: |s| s.r_add_poly_ref_entity_to_scene(&zeroed(), &[PolyVert::default(); 4], 1);
        RAddPolyToScene: |s| s.r_add_poly_to_scene(QHandle::new(1), &[PolyVert::default(); 4], 1, 1);
        RAddPolysToScene: |s| s.r_add_polys_to_scene(QHandle::new(1), 2, &[PolyVert::default(); 4], 2, 0, 0);
        RAddPolyBufferToScene: |s| s.r_add_poly_buffer_to_scene(&zeroed());
        RAddLightToScene: |s| s.r_add_light_to_scene(&[0.0; 3], 0.5, 0.5, [1.0; 3], QHandle::new(1));
        RAddAdditiveLightToScene: |s| s.r_add_additive_light_to_scene(&[0.0; 3], 0.5, 0.5, [1.0; 3]);
        RAddVertexLightToScene: |s| s.r_add_vertex_light_to_scene(&[0.0; 3], 0.5, 0.5, [1.0; 3]);
        RAddJuniorLightToScene: |s| s.r_add_junior_light_to_scene(&[0.0; 3], 0.5, 0.5, [1.0; 3]);
        RAddDirectedLightToScene: |s| s.r_add_directed_light_to_scene(&[0.0; 3], 0.5, [1.0; 3]);
        RAddCoronaToScene: |s| s.r_add_corona_to_scene(&[0.0; 3], [1.0; 3], 0.5, 1, true, QHandle::new(1));
        RLightForPoint: |s| s.r_light_for_point(&[0.0; 3], &mut [0.0; 3], &mut [0.0; 3], &mut [0.0; 3]);
        RRenderScene: |s| s.r_render_scene(&zeroed());
        RSetColor: |s| s.r_set_color(None);
        RSetClipRegion: |s| s.r_set_clip_region(None);
        RDrawStretchPic: |s| s.r_draw_stretch_pic(0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, QHandle::new(1));
        RDrawRotatedPic: |s| s.r_draw_rotated_pic(0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, QHandle::new(1), 0.5);
        RDrawStretchPicGradient: |s| s.r_draw_stretch_pic_gradient(0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, QHandle::new(1), &[1.0; 4]);
        RDraw2dPolys: |s| s.r_draw_2d_polys(&[PolyVert::default(); 4], QHandle::new(1));
        RModelBounds: |s| s.r_model_bounds(QHandle::new(1), &mut [0.0; 3], &mut [0.0; 3], 1, 1, 0.5);
        RLerpTag: |s| s.r_lerp_tag(&mut zeroed(), QHandle::new(1), 1, 1, 0.5, c"name");
        RLerpTagFrameModel: |s| s.r_lerp_tag_frame_model(&mut zeroed(), QHandle::new(1), QHandle::new(1), 1, QHandle::new(1), 1, 0.5, c"name", &mut 0);
        RLerpTagTorso: |s| s.r_lerp_tag_torso(&mut zeroed(), QHandle::new(1), QHandle::new(1), 1, QHandle::new(1), 1, 0.5, c"name", &mut 0, &[[0.0; 3]; 3], QHandle::new(1), 1, QHandle::new(1), 1, 0.5);
        RRemapShader: |s| s.r_remap_shader(c"name", c"name", c"name");
        RInPvs: |s| s.r_in_pvs(&[0.0; 3], &[0.0; 3]);
        RGetGlobalFog: |s| s.r_get_global_fog();
        RGetViewFog: |s| s.r_get_view_fog(&[0.0; 3], true);
        RSetSurfaceShader: |s| s.r_set_surface_shader(1, c"name");
        RGetSurfaceShader: |s| s.r_get_surface_shader(1, 1);
        RGetShaderFromModel: |s| s.r_get_shader_from_model(QHandle::new(1), 1, 1);
        RGetShaderName: |s| s.r_get_shader_name(QHandle::new(1), &mut [0; 16]);
        GetGlConfig: |s| s.get_gl_config(&mut zeroed());
        SStartSound: |s| s.s_start_sound(None, 1, 1, SfxHandle::new(1));
        SStartLocalSound: |s| s.s_start_local_sound(SfxHandle::new(1), 1);
        SStopLoopingSound: |s| s.s_stop_looping_sound(1);
        SClearLoopingSounds: |s| s.s_clear_looping_sounds(true);
        SAddLoopingSound: |s| s.s_add_looping_sound(1, &[0.0; 3], &[0.0; 3], SfxHandle::new(1));
        SAddRealLoopingSound: |s| s.s_add_real_looping_sound(1, &[0.0; 3], &[0.0; 3], SfxHandle::new(1));
        SUpdateEntityPosition: |s| s.s_update_entity_position(1, &[0.0; 3]);
        SRespatialize: |s| s.s_respatialize(1, &[0.0; 3], &[[0.0; 3]; 3], 1, true);
        SRegisterSound: |s| s.s_register_sound(c"name", true);
        SSoundDuration: |s| s.s_sound_duration(SfxHandle::new(1));
        SStartBackgroundTrack: |s| s.s_start_background_track(c"name", c"name", 0.5, 0.5);
        SStopBackgroundTrack: |s| s.s_stop_background_track();
        SStartStreamingSound: |s| s.s_start_streaming_sound(1, 1, c"name", 0.5);
        SStopStreamingSound: |s| s.s_stop_streaming_sound(1);
        SQueueStreamingSound: |s| s.s_queue_streaming_sound(1, c"name", 0.5);
        SGetStreamPlayCount: |s| s.s_get_stream_play_count(1);
        SSetStreamVolume: |s| s.s_set_stream_volume(1, 0.5);
        Milliseconds: |s| s.milliseconds();
        CvarRegister: |s| s.cvar_register(None, c"name", c"name", 1);
        CvarUpdate: |s| s.cvar_update(&mut zeroed());
        CvarSet: |s| s.cvar_set(c"name", c"name");
        CvarSetValue: |s| s.cvar_set_value(c"name", 0.5);
        CvarReset: |s| s.cvar_reset(c"name");
        CvarVariableValue: |s| s.cvar_variable_value(c"name");
        CvarVariableIntegerValue: |s| s.cvar_variable_integer_value(c"name");
        CvarVariableStringBuffer: |s| s.cvar_variable_string_buffer(c"name", &mut [0; 16]);
        CvarLatchedVariableStringBuffer: |s| s.cvar_latched_variable_string_buffer(c"name", &mut [0; 16]);
        CvarInfoStringBuffer: |s| s.cvar_info_string_buffer(1, &mut [0; 16]);
        CvarCheckRange: |s| s.cvar_check_range(c"name", 0.5, 0.5, true);
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
        AddCommand: |s| s.add_command(c"name");
        RemoveCommand: |s| s.remove_command(c"name");
        SendClientCommand: |s| s.send_client_command(c"name");
        UpdateScreen: |s| s.update_screen();
        GetClipboardData: |s| s.get_clipboard_data(&mut [0; 16]);
        CmdAutoComplete: |s| s.cmd_auto_complete(c"name", &mut [0; 16]);
        SvShutdown: |s| s.sv_shutdown(c"name");
        MemoryRemaining: |s| s.memory_remaining();
        PcAddGlobalDefine: |s| s.pc_add_global_define(c"name");
        PcRemoveAllGlobalDefines: |s| s.pc_remove_all_global_defines();
        PcLoadSource: |s| s.pc_load_source(c"name", c"name");
        PcFreeSource: |s| s.pc_free_source(1);
        PcReadToken: |s| s.pc_read_token(1, &mut zeroed());
        PcUnreadToken: |s| s.pc_unread_token(1);
        PcSourceFileAndLine: |s| s.pc_source_file_and_line(1, &mut [0; MAX_QPATH_LENGTH], &mut 0);
        HeapMalloc: |s| s.heap_malloc(1);
        HeapAvailable: |s| s.heap_available();
        // Safety: nothing was allocated, and the recording host doesn't
        // free anything.
        HeapFree: |s| unsafe { s.heap_free(core::ptr::null_mut()) };
        RealTime: |s| s.real_time(&mut zeroed());
        SnapVector: |s| s.snap_vector(&mut [0.0; 3]);
    }

    for operation in operations::<CgameCall>() {
        // Never returns, see errors_terminate_even_if_the_host_returns.
        if operation == CgameCall::Error {
            continue;
        }
        assert!(covered[operation], "{operation:?} wasn't called");
    }
}
