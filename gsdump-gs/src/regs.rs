// SPDX-FileCopyrightText: 2025 gsdump contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Packed GS register fields used by the capture path.
//!
//! Only the CLAMP_1/CLAMP_2 layout is decoded here; everything else about the
//! texture (base pointer, dimensions, format) reaches the capture already
//! resolved by the renderer.

// ── CLAMP register layout ───────────────────────────────────────────────────

const CLAMP_WMS_SHIFT: u32 = 0;
const CLAMP_WMT_SHIFT: u32 = 2;
const CLAMP_MINU_SHIFT: u32 = 4;
const CLAMP_MAXU_SHIFT: u32 = 14;
const CLAMP_MINV_SHIFT: u32 = 24;
const CLAMP_MAXV_SHIFT: u32 = 34;

/// MINU/MAXU/MINV/MAXV are 10 bits wide.
const CLAMP_RANGE_MASK: u64 = 0x3FF;
const CLAMP_WM_MASK: u64 = 0x3;

/// Texture wrap mode (2-bit WMS/WMT field in CLAMP).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ClampWrapMode {
    /// Repeat the whole texture.
    Repeat = 0,
    /// Clamp to the whole texture.
    Clamp = 1,
    /// Clamp to `[MIN, MAX]`.
    RegionClamp = 2,
    /// `(coord & MSK) | FIX`, with MSK/FIX stored in the MIN/MAX fields.
    RegionRepeat = 3,
}

impl ClampWrapMode {
    pub fn from_raw(value: u32) -> Self {
        match value & 0x3 {
            0 => Self::Repeat,
            1 => Self::Clamp,
            2 => Self::RegionClamp,
            _ => Self::RegionRepeat,
        }
    }
}

/// Decoded CLAMP_1/CLAMP_2 register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClampReg {
    pub wms: ClampWrapMode,
    pub wmt: ClampWrapMode,
    /// MINU, or UMSK in region-repeat mode.
    pub minu: u32,
    /// MAXU, or UFIX in region-repeat mode.
    pub maxu: u32,
    /// MINV, or VMSK in region-repeat mode.
    pub minv: u32,
    /// MAXV, or VFIX in region-repeat mode.
    pub maxv: u32,
}

impl ClampReg {
    /// Decode the packed 64-bit register value.
    pub fn from_raw(raw: u64) -> Self {
        let field = |shift: u32| ((raw >> shift) & CLAMP_RANGE_MASK) as u32;
        Self {
            wms: ClampWrapMode::from_raw(((raw >> CLAMP_WMS_SHIFT) & CLAMP_WM_MASK) as u32),
            wmt: ClampWrapMode::from_raw(((raw >> CLAMP_WMT_SHIFT) & CLAMP_WM_MASK) as u32),
            minu: field(CLAMP_MINU_SHIFT),
            maxu: field(CLAMP_MAXU_SHIFT),
            minv: field(CLAMP_MINV_SHIFT),
            maxv: field(CLAMP_MAXV_SHIFT),
        }
    }
}

impl Default for ClampReg {
    fn default() -> Self {
        Self::from_raw(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_mode_values() {
        assert_eq!(ClampWrapMode::from_raw(0), ClampWrapMode::Repeat);
        assert_eq!(ClampWrapMode::from_raw(1), ClampWrapMode::Clamp);
        assert_eq!(ClampWrapMode::from_raw(2), ClampWrapMode::RegionClamp);
        assert_eq!(ClampWrapMode::from_raw(3), ClampWrapMode::RegionRepeat);
        // Only the low two bits are significant.
        assert_eq!(ClampWrapMode::from_raw(6), ClampWrapMode::RegionClamp);
    }

    #[test]
    fn test_clamp_from_raw() {
        // WMS=RegionRepeat, WMT=RegionClamp, MINU=0x1F, MAXU=0x40, MINV=10, MAXV=0x3FF
        let raw: u64 = 3 | (2 << 2) | (0x1F << 4) | (0x40 << 14) | (10 << 24) | (0x3FF << 34);
        let clamp = ClampReg::from_raw(raw);
        assert_eq!(clamp.wms, ClampWrapMode::RegionRepeat);
        assert_eq!(clamp.wmt, ClampWrapMode::RegionClamp);
        assert_eq!(clamp.minu, 0x1F);
        assert_eq!(clamp.maxu, 0x40);
        assert_eq!(clamp.minv, 10);
        assert_eq!(clamp.maxv, 0x3FF);
    }

    #[test]
    fn test_clamp_ignores_high_bits() {
        let clamp = ClampReg::from_raw(0xFFFF_F000_0000_0000);
        assert_eq!(clamp, ClampReg::default());
    }

    #[test]
    fn test_clamp_fields_independent() {
        // Every range field saturated, wrap modes zero.
        let raw: u64 = (0x3FF << 4) | (0x3FF << 14) | (0x3FF << 24) | (0x3FF << 34);
        let clamp = ClampReg::from_raw(raw);
        assert_eq!(clamp.wms, ClampWrapMode::Repeat);
        assert_eq!(clamp.wmt, ClampWrapMode::Repeat);
        assert_eq!(
            [clamp.minu, clamp.maxu, clamp.minv, clamp.maxv],
            [0x3FF; 4]
        );
    }
}
