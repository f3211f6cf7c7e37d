#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    pub field_width: usize,
    pub field_height: usize,
    pub win_count: usize,
}

impl TicTacToeSessionSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.field_width < 3 || self.field_width > 20 {
            return Err("Field width must be between 3 and 20".to_string());
        }
        if self.field_height < 3 || self.field_height > 20 {
            return Err("Field height must be between 3 and 20".to_string());
        }
        if self.win_count < 3 {
            return Err("Win count must be at least 3".to_string());
        }
        let min_dimension = self.field_width.min(self.field_height);
        if self.win_count > min_dimension {
            return Err(format!(
                "Win count ({}) cannot exceed minimum dimension ({})",
                self.win_count, min_dimension
            ));
        }
        Ok(())
    }
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            field_width: 3,
            field_height: 3,
            win_count: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(TicTacToeSessionSettings::default().validate().is_ok());
    }

    #[test]
    fn test_win_count_cannot_exceed_board() {
        let settings = TicTacToeSessionSettings {
            field_width: 3,
            field_height: 3,
            win_count: 4,
        };
        assert!(settings.validate().is_err());
    }
}
