// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Asset registration, scene construction, and 2D drawing.

use core::ffi::CStr;

use module_abi::{Arg, Orientation, QHandle, Vec3};

use crate::{
    CgameCall, CgameSyscalls, Fog, FontInfo, GlConfig, PolyBuffer, PolyVert, RefDef, RefEntity,
};

impl CgameSyscalls<'_> {
    /// Loads the map's world model. Must be done before rendering a scene
    /// with the world in it.
    pub fn r_load_world_map(&self, map_name: &CStr) {
        self.invoke(CgameCall::RLoadWorldMap, &[Arg::str(map_name)])
    }

    /// Reads the next token of the map's entity string into `buffer`,
    /// starting from and advancing `parse_offset`. Returns false at the end.
    pub fn get_entity_token(&self, parse_offset: &mut i32, buffer: &mut [u8]) -> bool {
        self.invoke(
            CgameCall::GetEntityToken,
            &[
                Arg::ptr_mut(parse_offset),
                Arg::ptr_mut(buffer),
                Arg::len(buffer.len()),
            ],
        )
    }

    /// Returns an invalid handle if the model couldn't be loaded.
    pub fn r_register_model(&self, name: &CStr) -> QHandle {
        self.invoke(CgameCall::RRegisterModel, &[Arg::str(name)])
    }

    pub fn r_register_shader_ex(
        &self,
        name: &CStr,
        lightmap_index: i32,
        mip_raw_image: bool,
    ) -> QHandle {
        self.invoke(
            CgameCall::RRegisterShaderEx,
            &[
                Arg::str(name),
                Arg::int(lightmap_index),
                Arg::boolean(mip_raw_image),
            ],
        )
    }

    pub fn r_register_shader(&self, name: &CStr) -> QHandle {
        self.invoke(CgameCall::RRegisterShader, &[Arg::str(name)])
    }

    /// Registers a shader for 2D use, without mipmaps.
    pub fn r_register_shader_no_mip(&self, name: &CStr) -> QHandle {
        self.invoke(CgameCall::RRegisterShaderNoMip, &[Arg::str(name)])
    }

    /// Loads a font, writing its glyph metrics into `font`.
    pub fn r_register_font(
        &self,
        name: &CStr,
        point_size: i32,
        border_width: f32,
        force_auto_hint: bool,
        font: &mut FontInfo,
    ) {
        self.invoke(
            CgameCall::RRegisterFont,
            &[
                Arg::str(name),
                Arg::int(point_size),
                Arg::float(border_width),
                Arg::boolean(force_auto_hint),
                Arg::ptr_mut(font),
                Arg::size_of::<FontInfo>(),
            ],
        )
    }

    /// Creates a skin surface that draws `surface` with `shader`, for use in
    /// [`CgameSyscalls::r_add_skin_to_frame`].
    pub fn r_alloc_skin_surface(&self, surface: &CStr, shader: QHandle) -> QHandle {
        self.invoke(
            CgameCall::RAllocSkinSurface,
            &[Arg::str(surface), shader.into()],
        )
    }

    /// Creates a skin for this frame out of skin surfaces.
    pub fn r_add_skin_to_frame(&self, surfaces: &[QHandle]) -> QHandle {
        self.invoke(
            CgameCall::RAddSkinToFrame,
            &[Arg::len(surfaces.len()), Arg::ptr(surfaces)],
        )
    }

    /// Starts building a new scene.
    pub fn r_clear_scene(&self) {
        self.invoke(CgameCall::RClearScene, &[])
    }

    /// Adds `num_polys` polygons sharing the entity's shader and transform,
    /// `verts.len() / num_polys` vertices each.
    pub fn r_add_poly_ref_entity_to_scene(
        &self,
        entity: &RefEntity,
        verts: &[PolyVert],
        num_polys: i32,
    ) {
        self.invoke(
            CgameCall::RAddPolyRefEntityToScene,
            &[
                Arg::ptr(entity),
                Arg::size_of::<RefEntity>(),
                Arg::len(verts.len()),
                Arg::ptr(verts),
                Arg::int(num_polys),
            ],
        )
    }

    pub fn r_add_poly_to_scene(
        &self,
        shader: QHandle,
        verts: &[PolyVert],
        bmodel_num: i32,
        sort_level: i32,
    ) {
        self.invoke(
            CgameCall::RAddPolyToScene,
            &[
                shader.into(),
                Arg::len(verts.len()),
                Arg::ptr(verts),
                Arg::int(bmodel_num),
                Arg::int(sort_level),
            ],
        )
    }

    /// Adds `num_polys` polygons of `verts_per_poly` vertices each, laid out
    /// back to back in `verts`. Panics if they don't all fit in `verts`.
    pub fn r_add_polys_to_scene(
        &self,
        shader: QHandle,
        verts_per_poly: i32,
        verts: &[PolyVert],
        num_polys: i32,
        bmodel_num: i32,
        sort_level: i32,
    ) {
        assert!(
            verts_per_poly >= 0
                && num_polys >= 0
                && i64::from(verts_per_poly) * i64::from(num_polys) <= verts.len() as i64,
            "{num_polys} polygons of {verts_per_poly} vertices don't fit in {} vertices",
            verts.len(),
        );
        self.invoke(
            CgameCall::RAddPolysToScene,
            &[
                shader.into(),
                Arg::int(verts_per_poly),
                Arg::ptr(verts),
                Arg::int(num_polys),
                Arg::int(bmodel_num),
                Arg::int(sort_level),
            ],
        )
    }

    pub fn r_add_poly_buffer_to_scene(&self, buffer: &PolyBuffer) {
        self.invoke(CgameCall::RAddPolyBufferToScene, &[Arg::ptr(buffer)])
    }

    /// Adds a dynamic light, drawn with `shader` (or the default light shader
    /// if it's the zero handle).
    pub fn r_add_light_to_scene(
        &self,
        origin: &Vec3,
        radius: f32,
        intensity: f32,
        [r, g, b]: [f32; 3],
        shader: QHandle,
    ) {
        self.invoke(
            CgameCall::RAddLightToScene,
            &[
                Arg::ptr(origin),
                Arg::float(radius),
                Arg::float(intensity),
                Arg::float(r),
                Arg::float(g),
                Arg::float(b),
                shader.into(),
            ],
        )
    }

    pub fn r_add_additive_light_to_scene(
        &self,
        origin: &Vec3,
        radius: f32,
        intensity: f32,
        color: [f32; 3],
    ) {
        self.point_light(CgameCall::RAddAdditiveLightToScene, origin, radius, intensity, color)
    }

    pub fn r_add_vertex_light_to_scene(
        &self,
        origin: &Vec3,
        radius: f32,
        intensity: f32,
        color: [f32; 3],
    ) {
        self.point_light(CgameCall::RAddVertexLightToScene, origin, radius, intensity, color)
    }

    pub fn r_add_junior_light_to_scene(
        &self,
        origin: &Vec3,
        radius: f32,
        intensity: f32,
        color: [f32; 3],
    ) {
        self.point_light(CgameCall::RAddJuniorLightToScene, origin, radius, intensity, color)
    }

    /// Adds light coming from the `normal` direction to everything in the
    /// scene.
    pub fn r_add_directed_light_to_scene(
        &self,
        normal: &Vec3,
        intensity: f32,
        [r, g, b]: [f32; 3],
    ) {
        self.invoke(
            CgameCall::RAddDirectedLightToScene,
            &[
                Arg::ptr(normal),
                Arg::float(intensity),
                Arg::float(r),
                Arg::float(g),
                Arg::float(b),
            ],
        )
    }

    /// Adds a corona. `id` identifies it between frames, for fading.
    pub fn r_add_corona_to_scene(
        &self,
        origin: &Vec3,
        [r, g, b]: [f32; 3],
        scale: f32,
        id: i32,
        visible: bool,
        shader: QHandle,
    ) {
        self.invoke(
            CgameCall::RAddCoronaToScene,
            &[
                Arg::ptr(origin),
                Arg::float(r),
                Arg::float(g),
                Arg::float(b),
                Arg::float(scale),
                Arg::int(id),
                Arg::boolean(visible),
                shader.into(),
            ],
        )
    }

    /// Samples the world's lighting at `point`. Returns zero if the world has
    /// no light grid.
    pub fn r_light_for_point(
        &self,
        point: &Vec3,
        ambient: &mut Vec3,
        directed: &mut Vec3,
        direction: &mut Vec3,
    ) -> i32 {
        self.invoke(
            CgameCall::RLightForPoint,
            &[
                Arg::ptr(point),
                Arg::ptr_mut(ambient),
                Arg::ptr_mut(directed),
                Arg::ptr_mut(direction),
            ],
        )
    }

    /// Renders the scene built since the last [`CgameSyscalls::r_clear_scene`].
    pub fn r_render_scene(&self, view: &RefDef) {
        self.invoke(
            CgameCall::RRenderScene,
            &[Arg::ptr(view), Arg::size_of::<RefDef>()],
        )
    }

    /// Tints the following 2D draws. `None` resets to white.
    pub fn r_set_color(&self, rgba: Option<&[f32; 4]>) {
        self.invoke(CgameCall::RSetColor, &[Arg::opt_ptr(rgba)])
    }

    /// Clips the following 2D draws to `x, y, width, height`. `None` removes
    /// the clip region.
    pub fn r_set_clip_region(&self, region: Option<&[f32; 4]>) {
        self.invoke(CgameCall::RSetClipRegion, &[Arg::opt_ptr(region)])
    }

    #[allow(clippy::too_many_arguments)]
    pub fn r_draw_stretch_pic(
        &self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        s1: f32,
        t1: f32,
        s2: f32,
        t2: f32,
        shader: QHandle,
    ) {
        self.invoke(
            CgameCall::RDrawStretchPic,
            &[
                Arg::float(x),
                Arg::float(y),
                Arg::float(w),
                Arg::float(h),
                Arg::float(s1),
                Arg::float(t1),
                Arg::float(s2),
                Arg::float(t2),
                shader.into(),
            ],
        )
    }

    /// [`CgameSyscalls::r_draw_stretch_pic`], rotated by `angle` degrees
    /// around the center.
    #[allow(clippy::too_many_arguments)]
    pub fn r_draw_rotated_pic(
        &self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        s1: f32,
        t1: f32,
        s2: f32,
        t2: f32,
        shader: QHandle,
        angle: f32,
    ) {
        self.invoke(
            CgameCall::RDrawRotatedPic,
            &[
                Arg::float(x),
                Arg::float(y),
                Arg::float(w),
                Arg::float(h),
                Arg::float(s1),
                Arg::float(t1),
                Arg::float(s2),
                Arg::float(t2),
                shader.into(),
                Arg::float(angle),
            ],
        )
    }

    /// [`CgameSyscalls::r_draw_stretch_pic`], fading from the current color
    /// at the top to `gradient` at the bottom.
    #[allow(clippy::too_many_arguments)]
    pub fn r_draw_stretch_pic_gradient(
        &self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        s1: f32,
        t1: f32,
        s2: f32,
        t2: f32,
        shader: QHandle,
        gradient: &[f32; 4],
    ) {
        self.invoke(
            CgameCall::RDrawStretchPicGradient,
            &[
                Arg::float(x),
                Arg::float(y),
                Arg::float(w),
                Arg::float(h),
                Arg::float(s1),
                Arg::float(t1),
                Arg::float(s2),
                Arg::float(t2),
                shader.into(),
                Arg::ptr(gradient),
            ],
        )
    }

    /// Draws a 2D polygon in screen coordinates.
    pub fn r_draw_2d_polys(&self, verts: &[PolyVert], shader: QHandle) {
        self.invoke(
            CgameCall::RDraw2dPolys,
            &[Arg::ptr(verts), Arg::len(verts.len()), shader.into()],
        )
    }

    /// The bounds of the model, interpolated between two frames. Returns
    /// zero for unknown models.
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
            CgameCall::RModelBounds,
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

    /// Writes the orientation of a model's tag, interpolated between two
    /// frames. Returns zero if the tag doesn't exist.
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
            CgameCall::RLerpTag,
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

    /// [`CgameSyscalls::r_lerp_tag`], with the frames taken from separate
    /// frame models. `tag_index` caches the tag lookup between calls.
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
            CgameCall::RLerpTagFrameModel,
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

    /// [`CgameSyscalls::r_lerp_tag_frame_model`] for skeletal models with a
    /// separately animated torso.
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
            CgameCall::RLerpTagTorso,
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

    /// Draws `new_shader` wherever `old_shader` would be drawn, starting at
    /// `time_offset`.
    pub fn r_remap_shader(&self, old_shader: &CStr, new_shader: &CStr, time_offset: &CStr) {
        self.invoke(
            CgameCall::RRemapShader,
            &[
                Arg::str(old_shader),
                Arg::str(new_shader),
                Arg::str(time_offset),
            ],
        )
    }

    /// Whether `p2` is in the potentially visible set of `p1`.
    pub fn r_in_pvs(&self, p1: &Vec3, p2: &Vec3) -> bool {
        self.invoke(CgameCall::RInPvs, &[Arg::ptr(p1), Arg::ptr(p2)])
    }

    /// The map's global fog.
    pub fn r_get_global_fog(&self) -> Fog {
        let mut fog = Fog::default();
        self.invoke::<()>(
            CgameCall::RGetGlobalFog,
            &[
                Arg::ptr_mut(&mut fog.kind),
                Arg::ptr_mut(&mut fog.color),
                Arg::ptr_mut(&mut fog.depth_for_opaque),
                Arg::ptr_mut(&mut fog.density),
                Arg::ptr_mut(&mut fog.far_clip),
            ],
        );
        fog
    }

    /// The fog seen from `origin`, taking fog volumes into account.
    pub fn r_get_view_fog(&self, origin: &Vec3, in_water: bool) -> Fog {
        let mut fog = Fog::default();
        self.invoke::<()>(
            CgameCall::RGetViewFog,
            &[
                Arg::ptr(origin),
                Arg::ptr_mut(&mut fog.kind),
                Arg::ptr_mut(&mut fog.color),
                Arg::ptr_mut(&mut fog.depth_for_opaque),
                Arg::ptr_mut(&mut fog.density),
                Arg::ptr_mut(&mut fog.far_clip),
                Arg::boolean(in_water),
            ],
        );
        fog
    }

    /// Replaces the shader of one of the world's surfaces.
    pub fn r_set_surface_shader(&self, surface_num: i32, name: &CStr) {
        self.invoke(
            CgameCall::RSetSurfaceShader,
            &[Arg::int(surface_num), Arg::str(name)],
        )
    }

    pub fn r_get_surface_shader(&self, surface_num: i32, lightmap_index: i32) -> QHandle {
        self.invoke(
            CgameCall::RGetSurfaceShader,
            &[Arg::int(surface_num), Arg::int(lightmap_index)],
        )
    }

    pub fn r_get_shader_from_model(
        &self,
        model: QHandle,
        surface_num: i32,
        lightmap_index: i32,
    ) -> QHandle {
        self.invoke(
            CgameCall::RGetShaderFromModel,
            &[model.into(), Arg::int(surface_num), Arg::int(lightmap_index)],
        )
    }

    pub fn r_get_shader_name(&self, shader: QHandle, buffer: &mut [u8]) {
        self.invoke(
            CgameCall::RGetShaderName,
            &[shader.into(), Arg::ptr_mut(buffer), Arg::len(buffer.len())],
        )
    }

    pub fn get_gl_config(&self, config: &mut GlConfig) {
        self.invoke(
            CgameCall::GetGlConfig,
            &[Arg::ptr_mut(config), Arg::size_of::<GlConfig>()],
        )
    }

    fn point_light(
        &self,
        operation: CgameCall,
        origin: &Vec3,
        radius: f32,
        intensity: f32,
        [r, g, b]: [f32; 3],
    ) {
        self.invoke(
            operation,
            &[
                Arg::ptr(origin),
                Arg::float(radius),
                Arg::float(intensity),
                Arg::float(r),
                Arg::float(g),
                Arg::float(b),
            ],
        )
    }
}
