// SPDX-FileCopyrightText: 2025 gsdump contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sampled texture sub-region resolution from CLAMP wrap modes.
//!
//! See "Texture Wrap Modes" in the GS manual. In region-repeat mode the
//! sampler computes `u' = (u_int & UMSK) | UFIX`. When UMSK is a run of low
//! set bits and UFIX has those bits clear, that repeats the rectangle
//! `[UFIX, UFIX + UMSK]`; any other pattern is too irregular to express as a
//! single rectangle and the whole texture is exported instead.

use crate::regs::{ClampReg, ClampWrapMode};

/// Inclusive texel bounds of the part of a texture that is actually sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextureRegion {
    pub u_min: u16,
    pub u_max: u16,
    pub v_min: u16,
    pub v_max: u16,
}

impl TextureRegion {
    /// Texel columns covered. An inverted range (`u_min > u_max`) counts as one.
    pub fn width(&self) -> u32 {
        u32::from(self.u_max.saturating_sub(self.u_min)) + 1
    }

    /// Texel rows covered. An inverted range (`v_min > v_max`) counts as one.
    pub fn height(&self) -> u32 {
        u32::from(self.v_max.saturating_sub(self.v_min)) + 1
    }

    /// Resolve the region sampled under `clamp` for a texture of the given size.
    pub fn for_clamp(clamp: ClampReg, twidth: u32, theight: u32) -> Self {
        Self::resolve(
            clamp.wms, clamp.wmt, clamp.minu, clamp.maxu, clamp.minv, clamp.maxv, twidth,
            theight,
        )
    }

    /// Resolve each axis independently from raw wrap mode and range fields.
    #[allow(clippy::too_many_arguments)]
    pub fn resolve(
        wrap_u: ClampWrapMode,
        wrap_v: ClampWrapMode,
        min_u: u32,
        max_u: u32,
        min_v: u32,
        max_v: u32,
        twidth: u32,
        theight: u32,
    ) -> Self {
        let (u_min, u_max) = resolve_axis(wrap_u, min_u, max_u, twidth);
        let (v_min, v_max) = resolve_axis(wrap_v, min_v, max_v, theight);
        Self {
            u_min,
            u_max,
            v_min,
            v_max,
        }
    }
}

/// Resolve one axis to inclusive `(min, max)` texel bounds within `[0, dim-1]`.
///
/// Total: every input yields `min <= max`. `max` is clamped first so that an
/// out-of-range `max` can't drag `min` out of the texture.
pub fn resolve_axis(mode: ClampWrapMode, min: u32, max: u32, dim: u32) -> (u16, u16) {
    let last = dim.saturating_sub(1);

    let (lo, hi) = match mode {
        ClampWrapMode::RegionClamp => (min, max),
        ClampWrapMode::RegionRepeat => {
            let msk = min;
            let fix = max;
            if is_low_bit_run(msk) && fix & msk == 0 {
                (fix, fix.saturating_add(msk))
            } else {
                log::debug!(
                    "Screenshot3D: region-repeat MSK=0x{:X} FIX=0x{:X} not a rectangle, using full texture",
                    msk,
                    fix
                );
                (0, last)
            }
        }
        ClampWrapMode::Repeat | ClampWrapMode::Clamp => (0, last),
    };

    let hi = hi.min(last);
    let lo = lo.min(hi);
    (saturate_u16(lo), saturate_u16(hi))
}

/// True when `msk + 1` is a power of two, i.e. `msk` is `0b0..01..1` (or zero).
fn is_low_bit_run(msk: u32) -> bool {
    msk.wrapping_add(1) & msk == 0
}

fn saturate_u16(v: u32) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}
