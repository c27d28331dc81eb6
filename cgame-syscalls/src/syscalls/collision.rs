// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use core::ffi::CStr;

use bytemuck::Zeroable;
use module_abi::{Arg, ClipHandle, Trace, Vec3};

use crate::{CgameCall, CgameSyscalls, MarkFragment};

impl CgameSyscalls<'_> {
    /// Loads the collision data of a map. Must be done before any trace.
    pub fn cm_load_map(&self, map_name: &CStr) {
        self.invoke(CgameCall::CmLoadMap, &[Arg::str(map_name)])
    }

    pub fn cm_num_inline_models(&self) -> i32 {
        self.invoke(CgameCall::CmNumInlineModels, &[])
    }

    /// The clip model of one of the map's brush models.
    pub fn cm_inline_model(&self, index: i32) -> ClipHandle {
        self.invoke(CgameCall::CmInlineModel, &[Arg::int(index)])
    }

    /// A temporary box-shaped clip model, valid until the next call.
    pub fn cm_temp_box_model(&self, mins: &Vec3, maxs: &Vec3, contents: i32) -> ClipHandle {
        self.invoke(
            CgameCall::CmTempBoxModel,
            &[Arg::ptr(mins), Arg::ptr(maxs), Arg::int(contents)],
        )
    }

    pub fn cm_temp_capsule_model(&self, mins: &Vec3, maxs: &Vec3, contents: i32) -> ClipHandle {
        self.invoke(
            CgameCall::CmTempCapsuleModel,
            &[Arg::ptr(mins), Arg::ptr(maxs), Arg::int(contents)],
        )
    }

    /// The contents flags at `point`.
    pub fn cm_point_contents(&self, point: &Vec3, model: ClipHandle) -> i32 {
        self.invoke(
            CgameCall::CmPointContents,
            &[Arg::ptr(point), model.into()],
        )
    }

    /// Like [`CgameSyscalls::cm_point_contents`], with the model moved to
    /// `origin` and rotated by `angles`.
    pub fn cm_transformed_point_contents(
        &self,
        point: &Vec3,
        model: ClipHandle,
        origin: &Vec3,
        angles: &Vec3,
    ) -> i32 {
        self.invoke(
            CgameCall::CmTransformedPointContents,
            &[Arg::ptr(point), model.into(), Arg::ptr(origin), Arg::ptr(angles)],
        )
    }

    /// Sweeps a box from `start` to `end` against the model, stopping at the
    /// first surface with any of the `mask` contents.
    pub fn cm_box_trace(
        &self,
        start: &Vec3,
        end: &Vec3,
        mins: &Vec3,
        maxs: &Vec3,
        model: ClipHandle,
        mask: i32,
    ) -> Trace {
        self.swept_trace(CgameCall::CmBoxTrace, [start, end, mins, maxs], model, mask)
    }

    /// [`CgameSyscalls::cm_box_trace`], with a capsule instead of a box.
    pub fn cm_capsule_trace(
        &self,
        start: &Vec3,
        end: &Vec3,
        mins: &Vec3,
        maxs: &Vec3,
        model: ClipHandle,
        mask: i32,
    ) -> Trace {
        self.swept_trace(CgameCall::CmCapsuleTrace, [start, end, mins, maxs], model, mask)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn cm_transformed_box_trace(
        &self,
        start: &Vec3,
        end: &Vec3,
        mins: &Vec3,
        maxs: &Vec3,
        model: ClipHandle,
        mask: i32,
        origin: &Vec3,
        angles: &Vec3,
    ) -> Trace {
        self.transformed_trace(
            CgameCall::CmTransformedBoxTrace,
            [start, end, mins, maxs],
            model,
            mask,
            [origin, angles],
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn cm_transformed_capsule_trace(
        &self,
        start: &Vec3,
        end: &Vec3,
        mins: &Vec3,
        maxs: &Vec3,
        model: ClipHandle,
        mask: i32,
        origin: &Vec3,
        angles: &Vec3,
    ) -> Trace {
        self.transformed_trace(
            CgameCall::CmTransformedCapsuleTrace,
            [start, end, mins, maxs],
            model,
            mask,
            [origin, angles],
        )
    }

    /// Sweeps a sphere whose radius grows from `start_radius` to
    /// `end_radius` along the way.
    pub fn cm_bi_sphere_trace(
        &self,
        start: &Vec3,
        end: &Vec3,
        start_radius: f32,
        end_radius: f32,
        model: ClipHandle,
        mask: i32,
    ) -> Trace {
        let mut trace = Trace::zeroed();
        self.invoke::<()>(
            CgameCall::CmBiSphereTrace,
            &[
                Arg::ptr_mut(&mut trace),
                Arg::ptr(start),
                Arg::ptr(end),
                Arg::float(start_radius),
                Arg::float(end_radius),
                model.into(),
                Arg::int(mask),
            ],
        );
        trace
    }

    #[allow(clippy::too_many_arguments)]
    pub fn cm_transformed_bi_sphere_trace(
        &self,
        start: &Vec3,
        end: &Vec3,
        start_radius: f32,
        end_radius: f32,
        model: ClipHandle,
        mask: i32,
        origin: &Vec3,
    ) -> Trace {
        let mut trace = Trace::zeroed();
        self.invoke::<()>(
            CgameCall::CmTransformedBiSphereTrace,
            &[
                Arg::ptr_mut(&mut trace),
                Arg::ptr(start),
                Arg::ptr(end),
                Arg::float(start_radius),
                Arg::float(end_radius),
                model.into(),
                Arg::int(mask),
                Arg::ptr(origin),
            ],
        );
        trace
    }

    /// Projects the polygon `points` along `projection` onto the world,
    /// writing the clipped fragments into `fragments` and their corners into
    /// `point_buffer`. Returns how many fragments were written.
    pub fn cm_mark_fragments(
        &self,
        points: &[Vec3],
        projection: &Vec3,
        point_buffer: &mut [Vec3],
        fragments: &mut [MarkFragment],
    ) -> i32 {
        self.invoke(
            CgameCall::CmMarkFragments,
            &[
                Arg::len(points.len()),
                Arg::ptr(points),
                Arg::ptr(projection),
                Arg::len(point_buffer.len()),
                Arg::ptr_mut(point_buffer),
                Arg::len(fragments.len()),
                Arg::ptr_mut(fragments),
            ],
        )
    }

    fn swept_trace(
        &self,
        operation: CgameCall,
        [start, end, mins, maxs]: [&Vec3; 4],
        model: ClipHandle,
        mask: i32,
    ) -> Trace {
        let mut trace = Trace::zeroed();
        self.invoke::<()>(
            operation,
            &[
                Arg::ptr_mut(&mut trace),
                Arg::ptr(start),
                Arg::ptr(end),
                Arg::ptr(mins),
                Arg::ptr(maxs),
                model.into(),
                Arg::int(mask),
            ],
        );
        trace
    }

    fn transformed_trace(
        &self,
        operation: CgameCall,
        [start, end, mins, maxs]: [&Vec3; 4],
        model: ClipHandle,
        mask: i32,
        [origin, angles]: [&Vec3; 2],
    ) -> Trace {
        let mut trace = Trace::zeroed();
        self.invoke::<()>(
            operation,
            &[
                Arg::ptr_mut(&mut trace),
                Arg::ptr(start),
                Arg::ptr(end),
                Arg::ptr(mins),
                Arg::ptr(maxs),
                model.into(),
                Arg::int(mask),
                Arg::ptr(origin),
                Arg::ptr(angles),
            ],
        );
        trace
    }
}

#[cfg(test)]
mod tests {
    use module_abi::{testing::RecordingGateway, Arg, ClipHandle};

    use crate::{CgameCall, CgameSyscalls, MarkFragment};

    #[test]
    fn mark_fragments_sends_every_capacity() {
        let gateway = RecordingGateway::replying(2);
        let syscalls = CgameSyscalls::new(&gateway);
        let points = [[0.0; 3]; 4];
        let mut point_buffer = [[0.0; 3]; 384];
        let mut fragments = [MarkFragment::default(); 128];

        let projection = [0.0, 0.0, -1.0];
        let written =
            syscalls.cm_mark_fragments(&points, &projection, &mut point_buffer, &mut fragments);

        assert_eq!(2, written);
        let call = gateway.last_call().unwrap();
        assert!(call.is(CgameCall::CmMarkFragments));
        assert_eq!(Arg::Int(4), call.args[0]);
        assert_eq!(Arg::Int(384), call.args[3]);
        assert_eq!(Arg::Int(128), call.args[5]);
    }

    #[test]
    fn transformed_traces_send_the_transform_last() {
        let gateway = RecordingGateway::new();
        let syscalls = CgameSyscalls::new(&gateway);
        let origin = [1.0, 2.0, 3.0];
        let angles = [0.0, 90.0, 0.0];
        let zero = [0.0; 3];

        syscalls.cm_transformed_capsule_trace(
            &zero,
            &zero,
            &zero,
            &zero,
            ClipHandle::new(3),
            1,
            &origin,
            &angles,
        );

        let call = gateway.last_call().unwrap();
        assert!(call.is(CgameCall::CmTransformedCapsuleTrace));
        assert_eq!(Arg::Int(3), call.args[5]);
        assert_eq!(Arg::ptr(&origin), call.args[7]);
        assert_eq!(Arg::ptr(&angles), call.args[8]);
    }
}
