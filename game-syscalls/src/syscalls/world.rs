// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Collision against the world and the linked entities, plus the model
//! queries the server can answer without a renderer.
//!
//! Functions taking an entity are generic over the module's entity type. The
//! host only reads and writes the shared part at the start of it, whose
//! layout was declared with [`GameSyscalls::locate_game_data`].

use core::ffi::CStr;

use bytemuck::Zeroable;
use module_abi::{Arg, NetField, Orientation, QHandle, Trace, Vec3};

use crate::{GameCall, GameSyscalls};

impl GameSyscalls<'_> {
    /// Declares which parts of entities and player states are networked.
    /// See the cgame side's counterpart, both must declare the same fields.
    ///
    /// Panics if a network size is larger than its state struct.
    pub fn set_net_fields<E, P>(
        &self,
        entity_network_size: usize,
        entity_fields: &[NetField],
        player_network_size: usize,
        player_fields: &[NetField],
    ) {
        assert!(
            entity_network_size <= size_of::<E>() && player_network_size <= size_of::<P>(),
            "networked sizes must fit in the state structs",
        );
        self.invoke(
            GameCall::SetNetFields,
            &[
                Arg::size_of::<E>(),
                Arg::len(entity_network_size),
                Arg::ptr(entity_fields),
                Arg::len(entity_fields.len()),
                Arg::size_of::<P>(),
                Arg::len(player_network_size),
                Arg::ptr(player_fields),
                Arg::len(player_fields.len()),
            ],
        )
    }

    /// The bounds of one of the map's brush models.
    pub fn get_brush_bounds(&self, model_index: i32, mins: &mut Vec3, maxs: &mut Vec3) {
        self.invoke(
            GameCall::GetBrushBounds,
            &[Arg::int(model_index), Arg::ptr_mut(mins), Arg::ptr_mut(maxs)],
        )
    }

    /// Sweeps a box from `start` to `end` through the world and the linked
    /// entities, ignoring `pass_entity` (and what it owns). Without bounds,
    /// traces a point.
    pub fn trace(
        &self,
        start: &Vec3,
        bounds: Option<(&Vec3, &Vec3)>,
        end: &Vec3,
        pass_entity: i32,
        mask: i32,
    ) -> Trace {
        self.sweep(GameCall::Trace, start, bounds, end, pass_entity, mask)
    }

    /// [`GameSyscalls::trace`] with a capsule instead of a box.
    pub fn trace_capsule(
        &self,
        start: &Vec3,
        bounds: Option<(&Vec3, &Vec3)>,
        end: &Vec3,
        pass_entity: i32,
        mask: i32,
    ) -> Trace {
        self.sweep(GameCall::TraceCapsule, start, bounds, end, pass_entity, mask)
    }

    /// [`GameSyscalls::trace`] against the linked entities only.
    pub fn clip_to_entities(
        &self,
        start: &Vec3,
        bounds: Option<(&Vec3, &Vec3)>,
        end: &Vec3,
        pass_entity: i32,
        mask: i32,
    ) -> Trace {
        self.sweep(GameCall::ClipToEntities, start, bounds, end, pass_entity, mask)
    }

    pub fn clip_to_entities_capsule(
        &self,
        start: &Vec3,
        bounds: Option<(&Vec3, &Vec3)>,
        end: &Vec3,
        pass_entity: i32,
        mask: i32,
    ) -> Trace {
        self.sweep(
            GameCall::ClipToEntitiesCapsule,
            start,
            bounds,
            end,
            pass_entity,
            mask,
        )
    }

    /// The contents flags at `point`, with `pass_entity` not counted.
    pub fn point_contents(&self, point: &Vec3, pass_entity: i32) -> i32 {
        self.invoke(
            GameCall::PointContents,
            &[Arg::ptr(point), Arg::int(pass_entity)],
        )
    }

    pub fn in_pvs(&self, p1: &Vec3, p2: &Vec3) -> bool {
        self.invoke(GameCall::InPvs, &[Arg::ptr(p1), Arg::ptr(p2)])
    }

    /// [`GameSyscalls::in_pvs`], seeing through closed area portals.
    pub fn in_pvs_ignore_portals(&self, p1: &Vec3, p2: &Vec3) -> bool {
        self.invoke(GameCall::InPvsIgnorePortals, &[Arg::ptr(p1), Arg::ptr(p2)])
    }

    /// Opens or closes the area portal the entity (a door, usually) sits in.
    pub fn adjust_area_portal_state<E>(&self, entity: &E, open: bool) {
        self.invoke(
            GameCall::AdjustAreaPortalState,
            &[Arg::ptr(entity), Arg::boolean(open)],
        )
    }

    pub fn areas_connected(&self, area1: i32, area2: i32) -> bool {
        self.invoke(GameCall::AreasConnected, &[Arg::int(area1), Arg::int(area2)])
    }

    /// Places the entity in the world for collision and visibility, updating
    /// the host-maintained parts of it. Must be called again after it moves.
    pub fn link_entity<E>(&self, entity: &mut E) {
        self.invoke(GameCall::LinkEntity, &[Arg::ptr_mut(entity)])
    }

    pub fn unlink_entity<E>(&self, entity: &mut E) {
        self.invoke(GameCall::UnlinkEntity, &[Arg::ptr_mut(entity)])
    }

    /// Writes the numbers of the linked entities touching the box into
    /// `entities`, and returns how many were written.
    pub fn entities_in_box(&self, mins: &Vec3, maxs: &Vec3, entities: &mut [i32]) -> i32 {
        self.invoke(
            GameCall::EntitiesInBox,
            &[
                Arg::ptr(mins),
                Arg::ptr(maxs),
                Arg::ptr_mut(entities),
                Arg::len(entities.len()),
            ],
        )
    }

    /// Whether the entity's actual shape touches the box.
    pub fn entity_contact<E>(&self, mins: &Vec3, maxs: &Vec3, entity: &E) -> bool {
        self.invoke(
            GameCall::EntityContact,
            &[Arg::ptr(mins), Arg::ptr(maxs), Arg::ptr(entity)],
        )
    }

    pub fn entity_contact_capsule<E>(&self, mins: &Vec3, maxs: &Vec3, entity: &E) -> bool {
        self.invoke(
            GameCall::EntityContactCapsule,
            &[Arg::ptr(mins), Arg::ptr(maxs), Arg::ptr(entity)],
        )
    }

    /// Reads the next token of the map's entity string, starting at
    /// `parse_offset` and advancing it. Returns false at the end.
    pub fn get_entity_token(&self, parse_offset: &mut i32, buffer: &mut [u8]) -> bool {
        self.invoke(
            GameCall::GetEntityToken,
            &[
                Arg::ptr_mut(parse_offset),
                Arg::ptr_mut(buffer),
                Arg::len(buffer.len()),
            ],
        )
    }

    /// Shows a polygon to debugging clients. Returns its id.
    pub fn debug_polygon_create(&self, color: i32, points: &[Vec3]) -> i32 {
        self.invoke(
            GameCall::DebugPolygonCreate,
            &[Arg::int(color), Arg::len(points.len()), Arg::ptr(points)],
        )
    }

    pub fn debug_polygon_show(&self, id: i32, color: i32, points: &[Vec3]) {
        self.invoke(
            GameCall::DebugPolygonShow,
            &[
                Arg::int(id),
                Arg::int(color),
                Arg::len(points.len()),
                Arg::ptr(points),
            ],
        )
    }

    pub fn debug_polygon_delete(&self, id: i32) {
        self.invoke(GameCall::DebugPolygonDelete, &[Arg::int(id)])
    }

    /// Loads a model's tags and bounds for the server. Zero if it couldn't be
    /// loaded.
    pub fn r_register_model(&self, name: &CStr) -> QHandle {
        self.invoke(GameCall::RRegisterModel, &[Arg::str(name)])
    }

    /// Writes a tag's orientation, interpolated between two frames. Returns
    /// zero if the model has no such tag.
    pub fn r_lerp_tag(
        &self,
        tag: &mut Orientation,
        model: QHandle,
        start_frame: i32,
        end_frame: i32,
        frac: f32,
        tag_name: &CStr,
    ) -> i32 {
        self.invoke(
            GameCall::RLerpTag,
            &[
                Arg::ptr_mut(tag),
                model.into(),
                Arg::int(start_frame),
                Arg::int(end_frame),
                Arg::float(frac),
                Arg::str(tag_name),
            ],
        )
    }

    /// [`GameSyscalls::r_lerp_tag`] with frames from separate frame models.
    /// `tag_index` caches the tag lookup between calls.
    #[allow(clippy::too_many_arguments)]
    pub fn r_lerp_tag_frame_model(
        &self,
        tag: &mut Orientation,
        model: QHandle,
        start_frame_model: QHandle,
        start_frame: i32,
        end_frame_model: QHandle,
        end_frame: i32,
        frac: f32,
        tag_name: &CStr,
        tag_index: &mut i32,
    ) -> i32 {
        self.invoke(
            GameCall::RLerpTagFrameModel,
            &[
                Arg::ptr_mut(tag),
                model.into(),
                start_frame_model.into(),
                Arg::int(start_frame),
                end_frame_model.into(),
                Arg::int(end_frame),
                Arg::float(frac),
                Arg::str(tag_name),
                Arg::ptr_mut(tag_index),
            ],
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn r_lerp_tag_torso(
        &self,
        tag: &mut Orientation,
        model: QHandle,
        start_frame_model: QHandle,
        start_frame: i32,
        end_frame_model: QHandle,
        end_frame: i32,
        frac: f32,
        tag_name: &CStr,
        tag_index: &mut i32,
        torso_axis: &[Vec3; 3],
        torso_frame_model: QHandle,
        torso_frame: i32,
        old_torso_frame_model: QHandle,
        old_torso_frame: i32,
        torso_frac: f32,
    ) -> i32 {
        self.invoke(
            GameCall::RLerpTagTorso,
            &[
                Arg::ptr_mut(tag),
                model.into(),
                start_frame_model.into(),
                Arg::int(start_frame),
                end_frame_model.into(),
                Arg::int(end_frame),
                Arg::float(frac),
                Arg::str(tag_name),
                Arg::ptr_mut(tag_index),
                Arg::ptr(torso_axis),
                torso_frame_model.into(),
                Arg::int(torso_frame),
                old_torso_frame_model.into(),
                Arg::int(old_torso_frame),
                Arg::float(torso_frac),
            ],
        )
    }

    pub fn r_model_bounds(
        &self,
        model: QHandle,
        mins: &mut Vec3,
        maxs: &mut Vec3,
        start_frame: i32,
        end_frame: i32,
        frac: f32,
    ) -> i32 {
        self.invoke(
            GameCall::RModelBounds,
            &[
                model.into(),
                Arg::ptr_mut(mins),
                Arg::ptr_mut(maxs),
                Arg::int(start_frame),
                Arg::int(end_frame),
                Arg::float(frac),
            ],
        )
    }

    fn sweep(
        &self,
        operation: GameCall,
        start: &Vec3,
        bounds: Option<(&Vec3, &Vec3)>,
        end: &Vec3,
        pass_entity: i32,
        mask: i32,
    ) -> Trace {
        let (mins, maxs) = bounds.unzip();
        let mut trace = Trace::zeroed();
        self.invoke::<()>(
            operation,
            &[
                Arg::ptr_mut(&mut trace),
                Arg::ptr(start),
                Arg::opt_ptr(mins),
                Arg::opt_ptr(maxs),
                Arg::ptr(end),
                Arg::int(pass_entity),
                Arg::int(mask),
            ],
        );
        trace
    }
}
