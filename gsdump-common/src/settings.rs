// SPDX-FileCopyrightText: 2025 gsdump contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

/// Default base name (without extension) for dumped scene files.
pub const DEFAULT_DUMP_BASENAME: &str = "gs_dump";

/// Capture settings, populated from config INI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory the .obj/.mtl pair is written into.
    pub dump_dir: PathBuf,
    /// File name of the dump, without extension.
    pub dump_basename: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dump_dir: PathBuf::from("."),
            dump_basename: DEFAULT_DUMP_BASENAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.dump_dir, PathBuf::from("."));
        assert_eq!(s.dump_basename, "gs_dump");
    }
}
