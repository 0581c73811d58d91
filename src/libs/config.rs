//! Configuration management for breakplan.
//!
//! Settings are stored as pretty-printed JSON in `config.json` inside the
//! application data directory. Every section is optional: a missing file or
//! section means built-in defaults. A `breaks` section that fails
//! [`BreakPolicy::validate`] makes reading the file an error.
//!
//! ## Sections
//!
//! - **breaks**: the [`BreakPolicy`] used by the break generator (break
//!   positions and lengths, staff stagger, department gap)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use breakplan::libs::config::Config;
//!
//! let config = Config::read()?;
//! let policy = config.break_policy();
//!
//! // Interactive setup
//! Config::init()?.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::clock::MINUTES_PER_DAY;
use crate::libs::generator::BreakPolicy;
use crate::libs::messages::Message;
use crate::libs::plan::{MAX_BREAK_MINUTES, MIN_BREAK_MINUTES};
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Break generator settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breaks: Option<BreakPolicy>,
}

impl Config {
    /// Reads the configuration from the default data directory.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        if let Some(policy) = &config.breaks {
            policy.validate()?;
        }
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Configured break policy, or the default one.
    pub fn break_policy(&self) -> BreakPolicy {
        self.breaks.clone().unwrap_or_default()
    }

    /// Interactive configuration wizard, seeded with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.break_policy();
        let theme = ColorfulTheme::default();

        msg_print!(Message::ConfigModuleBreaks, true);

        let mut anchors_percent = default.anchors_percent;
        let mut durations = default.durations;
        for index in 0..3 {
            let number = index as u8 + 1;
            anchors_percent[index] = Input::with_theme(&theme)
                .with_prompt(Message::PromptBreakAnchor(number).to_string())
                .default(default.anchors_percent[index])
                .validate_with(|value: &u32| if *value <= 100 { Ok(()) } else { Err(Message::BreakAnchorRange) })
                .interact_text()?;
            durations[index] = Input::with_theme(&theme)
                .with_prompt(Message::PromptBreakDuration(number).to_string())
                .default(default.durations[index])
                .validate_with(|value: &u32| {
                    if (MIN_BREAK_MINUTES..=MAX_BREAK_MINUTES).contains(value) {
                        Ok(())
                    } else {
                        Err(Message::BreakDurationRange)
                    }
                })
                .interact_text()?;
        }

        let policy = BreakPolicy {
            anchors_percent,
            durations,
            staff_stagger: Input::with_theme(&theme)
                .with_prompt(Message::PromptStaffStagger.to_string())
                .default(default.staff_stagger)
                .validate_with(|value: &u32| if *value <= MINUTES_PER_DAY { Ok(()) } else { Err(Message::BreakOffsetRange) })
                .interact_text()?,
            department_gap: Input::with_theme(&theme)
                .with_prompt(Message::PromptDepartmentGap.to_string())
                .default(default.department_gap)
                .validate_with(|value: &u32| if *value <= MINUTES_PER_DAY { Ok(()) } else { Err(Message::BreakOffsetRange) })
                .interact_text()?,
        };
        policy.validate()?;
        config.breaks = Some(policy);

        Ok(config)
    }
}
