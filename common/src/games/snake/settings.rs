use std::time::Duration;

use super::types::FieldSize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnakeSessionSettings {
    pub field_width: usize,
    pub field_height: usize,
    pub tick_interval: Duration,
}

impl SnakeSessionSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.field_width < 10 || self.field_width > 100 {
            return Err("Field width must be between 10 and 100".to_string());
        }
        if self.field_height < 10 || self.field_height > 100 {
            return Err("Field height must be between 10 and 100".to_string());
        }
        let tick_ms = self.tick_interval.as_millis();
        if !(50..=5000).contains(&tick_ms) {
            return Err("Tick interval must be between 50ms and 5000ms".to_string());
        }
        Ok(())
    }

    pub fn field_size(&self) -> FieldSize {
        FieldSize::new(self.field_width, self.field_height)
    }
}

impl Default for SnakeSessionSettings {
    fn default() -> Self {
        Self {
            field_width: 20,
            field_height: 20,
            tick_interval: Duration::from_millis(200),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(SnakeSessionSettings::default().validate().is_ok());
    }

    #[test]
    fn test_tiny_field_is_rejected() {
        let settings = SnakeSessionSettings {
            field_width: 4,
            ..SnakeSessionSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_out_of_range_tick_interval_is_rejected() {
        let settings = SnakeSessionSettings {
            tick_interval: Duration::from_millis(10),
            ..SnakeSessionSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
