// SPDX-FileCopyrightText: 2025 gsdump contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Graphics Synthesizer frame capture.
//!
//! Records the triangles of one rendered frame together with the texture
//! sub-regions they sample, and writes them out as an OBJ/MTL pair for
//! inspection in a 3D viewer.

pub mod regs;
pub mod screenshot;

pub use screenshot::Screenshot3D;
