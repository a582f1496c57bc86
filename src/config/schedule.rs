//! Schedule configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::schedule::SlotGrid;

/// Visible grid and seed data
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// First visible hour
    #[serde(default = "default_start_hour")]
    pub start_hour: u8,

    /// Last visible hour (inclusive)
    #[serde(default = "default_end_hour")]
    pub end_hour: u8,

    /// Minutes between rows
    #[serde(default = "default_step_minutes")]
    pub step_minutes: u16,

    /// YAML or JSON seed file; the built-in sample week when unset
    pub seed_path: Option<String>,
}

impl ScheduleConfig {
    /// Validate schedule configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.end_hour > 23 || self.start_hour > self.end_hour {
            return Err(ValidationError::InvalidSlotRange {
                start: self.start_hour,
                end: self.end_hour,
            });
        }
        if self.step_minutes == 0 || self.step_minutes > 60 {
            return Err(ValidationError::InvalidSlotStep(self.step_minutes));
        }
        if matches!(&self.seed_path, Some(path) if path.trim().is_empty()) {
            return Err(ValidationError::EmptySeedPath);
        }
        Ok(())
    }

    /// Build the slot grid this configuration describes
    pub fn slot_grid(&self) -> Result<SlotGrid, ValidationError> {
        self.validate()?;
        SlotGrid::new(self.start_hour, self.end_hour, self.step_minutes).map_err(|_| {
            ValidationError::InvalidSlotRange {
                start: self.start_hour,
                end: self.end_hour,
            }
        })
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            start_hour: default_start_hour(),
            end_hour: default_end_hour(),
            step_minutes: default_step_minutes(),
            seed_path: None,
        }
    }
}

fn default_start_hour() -> u8 {
    8
}

fn default_end_hour() -> u8 {
    17
}

fn default_step_minutes() -> u16 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_business_hours() {
        let config = ScheduleConfig::default();
        let grid = config.slot_grid().unwrap();
        assert_eq!(grid, SlotGrid::default());
        assert_eq!(grid.slot_count(), 10);
    }

    #[test]
    fn rejects_inverted_range() {
        let config = ScheduleConfig {
            start_hour: 18,
            end_hour: 9,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidSlotRange { start: 18, end: 9 })
        ));
    }

    #[test]
    fn rejects_bad_step() {
        let config = ScheduleConfig {
            step_minutes: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidSlotStep(0))
        ));
    }

    #[test]
    fn rejects_blank_seed_path() {
        let config = ScheduleConfig {
            seed_path: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::EmptySeedPath)));
    }
}
