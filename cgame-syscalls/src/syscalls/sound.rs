// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use core::ffi::CStr;

use module_abi::{Arg, SfxHandle, Vec3};

use crate::{CgameCall, CgameSyscalls};

impl CgameSyscalls<'_> {
    /// Plays a sound at `origin`, or following the entity if `origin` is
    /// `None`.
    pub fn s_start_sound(
        &self,
        origin: Option<&Vec3>,
        entity_num: i32,
        channel: i32,
        sfx: SfxHandle,
    ) {
        self.invoke(
            CgameCall::SStartSound,
            &[
                Arg::opt_ptr(origin),
                Arg::int(entity_num),
                Arg::int(channel),
                sfx.into(),
            ],
        )
    }

    /// Plays a sound without spatialization.
    pub fn s_start_local_sound(&self, sfx: SfxHandle, channel: i32) {
        self.invoke(CgameCall::SStartLocalSound, &[sfx.into(), Arg::int(channel)])
    }

    pub fn s_stop_looping_sound(&self, entity_num: i32) {
        self.invoke(CgameCall::SStopLoopingSound, &[Arg::int(entity_num)])
    }

    /// Clears the looping sounds added this frame, and stops the already
    /// playing ones too if `kill_all` is set.
    pub fn s_clear_looping_sounds(&self, kill_all: bool) {
        self.invoke(CgameCall::SClearLoopingSounds, &[Arg::boolean(kill_all)])
    }

    /// Keeps a looping sound going for one more frame.
    pub fn s_add_looping_sound(
        &self,
        entity_num: i32,
        origin: &Vec3,
        velocity: &Vec3,
        sfx: SfxHandle,
    ) {
        self.invoke(
            CgameCall::SAddLoopingSound,
            &[
                Arg::int(entity_num),
                Arg::ptr(origin),
                Arg::ptr(velocity),
                sfx.into(),
            ],
        )
    }

    /// Like [`CgameSyscalls::s_add_looping_sound`], but the sound keeps
    /// playing until explicitly stopped.
    pub fn s_add_real_looping_sound(
        &self,
        entity_num: i32,
        origin: &Vec3,
        velocity: &Vec3,
        sfx: SfxHandle,
    ) {
        self.invoke(
            CgameCall::SAddRealLoopingSound,
            &[
                Arg::int(entity_num),
                Arg::ptr(origin),
                Arg::ptr(velocity),
                sfx.into(),
            ],
        )
    }

    pub fn s_update_entity_position(&self, entity_num: i32, origin: &Vec3) {
        self.invoke(
            CgameCall::SUpdateEntityPosition,
            &[Arg::int(entity_num), Arg::ptr(origin)],
        )
    }

    /// Moves the listener.
    pub fn s_respatialize(
        &self,
        entity_num: i32,
        origin: &Vec3,
        axis: &[Vec3; 3],
        in_water: i32,
        first_person: bool,
    ) {
        self.invoke(
            CgameCall::SRespatialize,
            &[
                Arg::int(entity_num),
                Arg::ptr(origin),
                Arg::ptr(axis),
                Arg::int(in_water),
                Arg::boolean(first_person),
            ],
        )
    }

    /// Returns the zero handle if the sound couldn't be loaded.
    pub fn s_register_sound(&self, sample: &CStr, compressed: bool) -> SfxHandle {
        self.invoke(
            CgameCall::SRegisterSound,
            &[Arg::str(sample), Arg::boolean(compressed)],
        )
    }

    /// Length of the sound in milliseconds.
    pub fn s_sound_duration(&self, sfx: SfxHandle) -> i32 {
        self.invoke(CgameCall::SSoundDuration, &[sfx.into()])
    }

    /// Starts music, playing `intro` once and then `looped` forever.
    pub fn s_start_background_track(
        &self,
        intro: &CStr,
        looped: &CStr,
        volume: f32,
        loop_volume: f32,
    ) {
        self.invoke(
            CgameCall::SStartBackgroundTrack,
            &[
                Arg::str(intro),
                Arg::str(looped),
                Arg::float(volume),
                Arg::float(loop_volume),
            ],
        )
    }

    pub fn s_stop_background_track(&self) {
        self.invoke(CgameCall::SStopBackgroundTrack, &[])
    }

    pub fn s_start_streaming_sound(
        &self,
        stream: i32,
        entity_num: i32,
        filename: &CStr,
        volume: f32,
    ) {
        self.invoke(
            CgameCall::SStartStreamingSound,
            &[
                Arg::int(stream),
                Arg::int(entity_num),
                Arg::str(filename),
                Arg::float(volume),
            ],
        )
    }

    pub fn s_stop_streaming_sound(&self, stream: i32) {
        self.invoke(CgameCall::SStopStreamingSound, &[Arg::int(stream)])
    }

    /// Plays `filename` on the stream after the current file ends.
    pub fn s_queue_streaming_sound(&self, stream: i32, filename: &CStr, volume: f32) {
        self.invoke(
            CgameCall::SQueueStreamingSound,
            &[Arg::int(stream), Arg::str(filename), Arg::float(volume)],
        )
    }

    /// How many times the stream's current file has looped.
    pub fn s_get_stream_play_count(&self, stream: i32) -> i32 {
        self.invoke(CgameCall::SGetStreamPlayCount, &[Arg::int(stream)])
    }

    pub fn s_set_stream_volume(&self, stream: i32, volume: f32) {
        self.invoke(
            CgameCall::SSetStreamVolume,
            &[Arg::int(stream), Arg::float(volume)],
        )
    }
}

#[cfg(test)]
mod tests {
    use module_abi::{testing::RecordingGateway, Arg, SfxHandle};

    use crate::{CgameCall, CgameSyscalls};

    #[test]
    fn sounds_without_an_origin_follow_their_entity() {
        let gateway = RecordingGateway::new();
        let syscalls = CgameSyscalls::new(&gateway);

        syscalls.s_start_sound(None, 12, 3, SfxHandle::new(40));

        let call = gateway.last_call().unwrap();
        assert!(call.is(CgameCall::SStartSound));
        assert_eq!(
            [Arg::null(), Arg::Int(12), Arg::Int(3), Arg::Int(40)],
            call.args.as_slice(),
        );
    }
}
