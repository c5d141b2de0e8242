// SPDX-FileCopyrightText: 2025 gsdump contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! INI configuration loading.
//!
//! Only the `[Debugging]` section is consulted:
//!
//! ```ini
//! [Debugging]
//! dump_3d_screenshot_dir = /tmp/dumps
//! dump_3d_screenshot_name = frame0001
//! ```

use std::path::{Path, PathBuf};

use ini::Ini;
use log::{debug, info, warn};

use crate::settings::Settings;

/// Load settings from an INI file. Any problem yields the defaults.
pub fn load_config(path: Option<&Path>) -> Settings {
    let mut settings = Settings::default();

    let config_path = match path {
        Some(p) => p,
        None => {
            info!("No config file given, using defaults");
            return settings;
        }
    };

    if !config_path.exists() {
        warn!("Config file not found: {}", config_path.display());
        return settings;
    }

    info!("Loading config from: {}", config_path.display());

    let conf = match Ini::load_from_file(config_path) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to parse config: {}", e);
            return settings;
        }
    };

    if let Some(section) = conf.section(Some("Debugging")) {
        if let Some(dir) = section.get("dump_3d_screenshot_dir") {
            let dir = dir.trim();
            if !dir.is_empty() {
                settings.dump_dir = PathBuf::from(dir);
                debug!("Dump directory: {}", settings.dump_dir.display());
            }
        }
        if let Some(name) = section.get("dump_3d_screenshot_name") {
            let name = name.trim();
            if !name.is_empty() {
                settings.dump_basename = name.to_string();
            }
        }
    }

    settings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_no_path_gives_defaults() {
        assert_eq!(load_config(None), Settings::default());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.ini");
        assert_eq!(load_config(Some(path.as_path())), Settings::default());
    }

    #[test]
    fn test_debugging_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gsdump.ini");
        fs::write(
            &path,
            "[Debugging]\n\
             dump_3d_screenshot_dir = /tmp/gs\n\
             dump_3d_screenshot_name = frame42\n",
        )
        .unwrap();

        let s = load_config(Some(path.as_path()));
        assert_eq!(s.dump_dir, PathBuf::from("/tmp/gs"));
        assert_eq!(s.dump_basename, "frame42");
    }

    #[test]
    fn test_other_sections_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gsdump.ini");
        fs::write(&path, "[Renderer]\ndump_3d_screenshot_dir = /nope\n").unwrap();

        assert_eq!(load_config(Some(path.as_path())), Settings::default());
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gsdump.ini");
        fs::write(
            &path,
            "[Debugging]\ndump_3d_screenshot_dir =\ndump_3d_screenshot_name =   \n",
        )
        .unwrap();

        assert_eq!(load_config(Some(path.as_path())), Settings::default());
    }
}
