// SPDX-FileCopyrightText: 2025 gsdump contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-frame triangle capture.
//!
//! The renderer feeds triangles in draw order. Before each texture switch it
//! names the texture and sets the sampled region; every textured triangle
//! added afterwards is tagged with that texture and has its UVs remapped so
//! that `[0,1]x[0,1]` covers just the region:
//!
//! ```text
//!    +------------+  <- original texture
//!    |            |
//!    |    +-----+ |  <- region used for wrapping
//!    |    |     | |
//!    |    +-----+ |
//!    +------------+
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

use gsdump_common::settings::{Settings, DEFAULT_DUMP_BASENAME};

use super::region::TextureRegion;

/// One captured vertex.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vert {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Perspective divide weight, carried through untouched.
    pub q: f32,
    pub u: f32,
    pub v: f32,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// One captured triangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tri {
    pub verts: [Vert; 3],
    /// The renderer's cull decision. Only used to group the output.
    pub culled: bool,
    pub texture_enabled: bool,
    /// Overwritten with the current texture when the triangle is added.
    pub texture_index: u32,
}

impl Tri {
    /// Material identity: `None` for untextured triangles.
    pub fn material(&self) -> Option<u32> {
        self.texture_enabled.then_some(self.texture_index)
    }
}

/// UV transform from texture space into region-normalized space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvRemap {
    pub u_offset: f32,
    pub v_offset: f32,
    pub u_scale: f32,
    pub v_scale: f32,
}

impl UvRemap {
    pub const IDENTITY: Self = Self {
        u_offset: 0.0,
        v_offset: 0.0,
        u_scale: 1.0,
        v_scale: 1.0,
    };

    /// Translate the region to the origin, then scale it up to the unit square.
    pub fn for_region(region: &TextureRegion, twidth: u32, theight: u32) -> Self {
        Self {
            u_offset: -(region.u_min as f32) / twidth as f32,
            v_offset: -(region.v_min as f32) / theight as f32,
            u_scale: twidth as f32 / region.width() as f32,
            v_scale: theight as f32 / region.height() as f32,
        }
    }

    pub fn apply(&self, vert: &mut Vert) {
        vert.u += self.u_offset;
        vert.v += self.v_offset;
        vert.u *= self.u_scale;
        vert.v *= self.v_scale;
    }
}

impl Default for UvRemap {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Geometry and texture table for one captured frame.
///
/// Lifecycle: created empty, filled during triangle emission, dumped once.
/// Nothing here is synchronized; the owner must not dump while still adding.
#[derive(Debug)]
pub struct Screenshot3D {
    /// Where the .obj/.mtl pair goes.
    pub dump_dir: PathBuf,
    /// File name used by [`Screenshot3D::dump`], without extension.
    pub dump_basename: String,
    tris: Vec<Tri>,
    /// Texture names in first-use order; the position is the texture index.
    textures: Vec<String>,
    texture_map: HashMap<String, u32>,
    cur_texture_index: u32,
    remap: UvRemap,
    /// Cull decisions for the batch the renderer is currently processing.
    tri_was_culled: Vec<bool>,
}

impl Default for Screenshot3D {
    fn default() -> Self {
        Self {
            dump_dir: PathBuf::new(),
            dump_basename: DEFAULT_DUMP_BASENAME.to_string(),
            tris: Vec::new(),
            textures: Vec::new(),
            texture_map: HashMap::new(),
            cur_texture_index: 0,
            remap: UvRemap::IDENTITY,
            tri_was_culled: Vec::new(),
        }
    }
}

impl Screenshot3D {
    pub fn new(dump_dir: impl Into<PathBuf>) -> Self {
        Self {
            dump_dir: dump_dir.into(),
            ..Self::default()
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            dump_basename: settings.dump_basename.clone(),
            ..Self::new(settings.dump_dir.clone())
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tris.is_empty()
    }

    pub fn tris(&self) -> &[Tri] {
        &self.tris
    }

    pub fn texture_names(&self) -> &[String] {
        &self.textures
    }

    pub fn current_texture_index(&self) -> u32 {
        self.cur_texture_index
    }

    pub fn remap(&self) -> UvRemap {
        self.remap
    }

    /// Make `name` the current texture, registering it on first use.
    pub fn set_texture_name(&mut self, name: &str) {
        let index = match self.texture_map.get(name) {
            Some(&index) => index,
            None => {
                let index = self.textures.len() as u32;
                self.textures.push(name.to_string());
                self.texture_map.insert(name.to_string(), index);
                log::debug!("Screenshot3D: texture {} = {:?}", index, name);
                index
            }
        };
        self.cur_texture_index = index;
    }

    /// Recompute the UV remap for subsequently added triangles.
    ///
    /// `twidth`/`theight` must be the current texture's full dimensions.
    pub fn set_texture_region(&mut self, region: &TextureRegion, twidth: u32, theight: u32) {
        self.remap = UvRemap::for_region(region, twidth, theight);
        log::debug!(
            "Screenshot3D: region {:?} of {}x{} -> {:?}",
            region,
            twidth,
            theight,
            self.remap
        );
    }

    /// Append a triangle, tagging and remapping it if it's textured.
    pub fn add_tri(&mut self, mut tri: Tri) {
        if tri.texture_enabled {
            tri.texture_index = self.cur_texture_index;
            for vert in &mut tri.verts {
                self.remap.apply(vert);
            }
        }
        self.tris.push(tri);
    }

    /// Record whether the next triangle of the current batch was culled.
    pub fn record_cull(&mut self, culled: bool) {
        self.tri_was_culled.push(culled);
    }

    /// Drain the cull decisions recorded for the current batch.
    pub fn take_cull_flags(&mut self) -> Vec<bool> {
        std::mem::take(&mut self.tri_was_culled)
    }
}
