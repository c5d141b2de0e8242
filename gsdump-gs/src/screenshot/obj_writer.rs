// SPDX-FileCopyrightText: 2025 gsdump contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Wavefront OBJ/MTL export of a captured frame.
//!
//! Each triangle gets its own three `v` and three `vt` records, and faces
//! refer back to them with relative indices, so the output never has to be
//! renumbered. `g` and `usemtl` lines are only written when the cull state
//! or material changes from the previous triangle.
//!
//! Positions and texture coordinates are printed the way fmt's `{}` prints
//! a float: shortest round-trip digits, switching to `1e-05` / `1e+20` style
//! outside decimal exponents `-4..16`.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::capture::{Screenshot3D, Tri};

/// Material for untextured triangles.
pub const NO_TEXTURE_MATERIAL: &str = "NoTexture";

const OBJ_HEADER: &str = "# PCSX2 3D Screenshot";
const GROUP_NORMAL: &str = "Normal";
const GROUP_CULLED: &str = "Culled";
/// Corners in (3rd, 1st, 2nd)-from-the-end order of the last three v/vt pairs.
const FACE_RECORD: &str = "f -3/-3 -1/-1 -2/-2";

#[derive(Debug, Error)]
pub enum DumpError {
    #[error("failed to open {} for writing: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Counters gathered while writing a dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DumpStats {
    pub triangles: usize,
    /// Position records written; texcoord records always match.
    pub vertices: usize,
    /// Includes the no-texture material.
    pub materials: usize,
}

/// `f32` formatted like fmt's default float presentation.
struct ObjFloat(f32);

impl fmt::Display for ObjFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            return f.write_str("nan");
        }
        if v.is_infinite() {
            return f.write_str(if v < 0.0 { "-inf" } else { "inf" });
        }

        let sci = format!("{:e}", v);
        let (mantissa, exp) = match sci.split_once('e') {
            Some((m, e)) => match e.parse::<i32>() {
                Ok(exp) => (m, exp),
                Err(_) => return write!(f, "{}", v),
            },
            None => return write!(f, "{}", v),
        };

        if (-4..16).contains(&exp) {
            write!(f, "{}", v)
        } else {
            let sign = if exp < 0 { '-' } else { '+' };
            write!(f, "{}e{}{:02}", mantissa, sign, exp.unsigned_abs())
        }
    }
}

impl Screenshot3D {
    /// Dump under the configured [`Screenshot3D::dump_basename`].
    pub fn dump(&self) -> Result<DumpStats, DumpError> {
        self.dump_to_file(&self.dump_basename)
    }

    /// Write `<dump_dir>/<filename>.obj` and `<dump_dir>/<filename>.mtl`.
    ///
    /// The OBJ is written first; if the MTL then fails the OBJ stays on disk.
    ///
    /// A textured triangle added before any [`Screenshot3D::set_texture_name`]
    /// refers to a texture with no name. Writing it fails with
    /// [`DumpError::Write`] of kind [`io::ErrorKind::InvalidData`], and the
    /// partial OBJ is left behind.
    pub fn dump_to_file(&self, filename: &str) -> Result<DumpStats, DumpError> {
        let result = self.dump_obj(filename).and_then(|mut stats| {
            stats.materials = self.dump_mtl(filename)?;
            Ok(stats)
        });

        match &result {
            Ok(stats) => log::info!(
                "Screenshot3D: dumped {} to {} ({} tris, {} verts, {} materials)",
                filename,
                self.dump_dir.display(),
                stats.triangles,
                stats.vertices,
                stats.materials
            ),
            Err(e) => log::warn!("Screenshot3D: dump failed: {}", e),
        }

        result
    }

    fn dump_obj(&self, filename: &str) -> Result<DumpStats, DumpError> {
        let path = self.dump_dir.join(format!("{}.obj", filename));
        let mut w = create(&path)?;
        let mtllib = format!("{}.mtl", filename);
        write_obj(&mut w, self, &mtllib)
            .and_then(|stats| w.flush().map(|_| stats))
            .map_err(|source| DumpError::Write { path, source })
    }

    fn dump_mtl(&self, filename: &str) -> Result<usize, DumpError> {
        let path = self.dump_dir.join(format!("{}.mtl", filename));
        let mut w = create(&path)?;
        write_mtl(&mut w, self)
            .and_then(|count| w.flush().map(|_| count))
            .map_err(|source| DumpError::Write { path, source })
    }
}

fn create(path: &Path) -> Result<BufWriter<File>, DumpError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| DumpError::Open {
            path: path.to_path_buf(),
            source,
        })
}

/// Write the geometry stream. `mtllib` names the sibling material file.
pub fn write_obj<W: Write>(w: &mut W, shot: &Screenshot3D, mtllib: &str) -> io::Result<DumpStats> {
    writeln!(w, "{}", OBJ_HEADER)?;
    writeln!(w, "mtllib {}", mtllib)?;
    writeln!(w)?;

    let textures = shot.texture_names();
    let mut stats = DumpStats::default();
    let mut prev: Option<&Tri> = None;

    for tri in shot.tris() {
        for v in &tri.verts {
            writeln!(
                w,
                "v {} {} {} {:.3} {:.3} {:.3}",
                ObjFloat(v.x),
                ObjFloat(v.y),
                ObjFloat(v.z),
                v.r as f32 / 255.0,
                v.g as f32 / 255.0,
                v.b as f32 / 255.0
            )?;
        }

        // OBJ texture space has V pointing up.
        for v in &tri.verts {
            writeln!(w, "vt {} {}", ObjFloat(v.u), ObjFloat(1.0 - v.v))?;
        }

        if prev.map_or(true, |p| p.culled != tri.culled) {
            let group = if tri.culled { GROUP_CULLED } else { GROUP_NORMAL };
            writeln!(w, "g {}", group)?;
        }

        if prev.map_or(true, |p| p.material() != tri.material()) {
            let material = match tri.material() {
                Some(index) => textures
                    .get(index as usize)
                    .map(String::as_str)
                    .ok_or_else(|| {
                        io::Error::new(
                            io::ErrorKind::InvalidData,
                            format!("texture index {} has no name", index),
                        )
                    })?,
                None => NO_TEXTURE_MATERIAL,
            };
            writeln!(w, "usemtl {}", material)?;
        }

        writeln!(w, "{}", FACE_RECORD)?;
        writeln!(w)?;

        stats.triangles += 1;
        stats.vertices += tri.verts.len();
        prev = Some(tri);
    }

    Ok(stats)
}

/// Write the material list. Returns the number of materials written.
pub fn write_mtl<W: Write>(w: &mut W, shot: &Screenshot3D) -> io::Result<usize> {
    writeln!(w, "newmtl {}", NO_TEXTURE_MATERIAL)?;
    writeln!(w, "Kd 1 1 1")?;
    writeln!(w)?;

    for texture in shot.texture_names() {
        writeln!(w, "newmtl {}", texture)?;
        writeln!(w, "map_Kd {}", texture)?;
        writeln!(w)?;
    }

    Ok(shot.texture_names().len() + 1)
}
