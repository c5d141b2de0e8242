// SPDX-FileCopyrightText: 2025 gsdump contributors
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod config;
pub mod settings;

pub use config::load_config;
pub use settings::Settings;
