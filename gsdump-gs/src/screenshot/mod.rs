// SPDX-FileCopyrightText: 2025 gsdump contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! 3D screenshot: capture one frame's triangles and export them as OBJ/MTL.
//!
//! Typical per-frame flow on the renderer side:
//!
//! ```
//! use gsdump_gs::regs::ClampReg;
//! use gsdump_gs::screenshot::{Screenshot3D, TextureRegion, Tri};
//!
//! let dir = std::env::temp_dir();
//! let mut shot = Screenshot3D::new(&dir);
//! let clamp = ClampReg::from_raw(0);
//! shot.set_texture_name("tex_00.png");
//! shot.set_texture_region(&TextureRegion::for_clamp(clamp, 256, 256), 256, 256);
//! shot.add_tri(Tri { texture_enabled: true, ..Tri::default() });
//! shot.dump_to_file("doc_frame").unwrap();
//! ```

pub mod capture;
pub mod obj_writer;
pub mod region;

pub use capture::{Screenshot3D, Tri, UvRemap, Vert};
pub use obj_writer::{write_mtl, write_obj, DumpError, DumpStats, NO_TEXTURE_MATERIAL};
pub use region::{resolve_axis, TextureRegion};
