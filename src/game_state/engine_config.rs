//! Engine setup options.
//!
//! Everything an engine instance needs before it can build a grid: the board
//! size, the starting placement, and the world scale handed to the view.
//! Missing JSON fields fall back to standard chess.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chess_errors::ChessErrors;
use crate::game_state::board_grid::validate_board_size;
use crate::game_state::chess_rules::{DEFAULT_SQUARE_SCALE, STANDARD_BOARD_SIZE, STARTING_LAYOUT};
use crate::piece_record::PieceSpec;
use crate::utils::layout_parser::parse_layout;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub board_size: usize,
    pub square_scale: f32,
    pub starting_layout: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: STANDARD_BOARD_SIZE,
            square_scale: DEFAULT_SQUARE_SCALE,
            starting_layout: STARTING_LAYOUT.to_owned(),
        }
    }
}

impl EngineConfig {
    /// Config for an `board_size` board with the given placement.
    pub fn with_layout(board_size: usize, starting_layout: &str) -> Self {
        Self {
            board_size,
            starting_layout: starting_layout.to_owned(),
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ChessErrors> {
        let config: EngineConfig = serde_json::from_str(json)
            .map_err(|e| ChessErrors::InvalidConfig(format!("Failed to parse: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ChessErrors> {
        let contents = fs::read_to_string(path).map_err(|e| {
            ChessErrors::InvalidConfig(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&contents)
    }

    pub fn to_json_string(&self) -> Result<String, ChessErrors> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChessErrors::InvalidConfig(format!("Failed to serialize: {e}")))
    }

    pub fn validate(&self) -> Result<(), ChessErrors> {
        validate_board_size(self.board_size)?;
        if !self.square_scale.is_finite() || self.square_scale <= 0.0 {
            return Err(ChessErrors::InvalidConfig(format!(
                "square_scale must be positive, got {}",
                self.square_scale
            )));
        }
        Ok(())
    }

    /// Parses the configured starting placement.
    pub fn starting_pieces(&self) -> Result<Vec<PieceSpec>, ChessErrors> {
        parse_layout(&self.starting_layout, self.board_size)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::*;

    fn unique_temp_dir(name: &str) -> PathBuf {
        let base = std::env::temp_dir().join("board_state_chess_tests").join(name);
        let _ = fs::create_dir_all(&base);

        let pid = std::process::id();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();

        for i in 0..1000u32 {
            let p = base.join(format!("{pid}-{nanos}-{i}"));
            if fs::create_dir(&p).is_ok() {
                return p;
            }
        }

        panic!("failed to create a unique temp dir under {}", base.display());
    }

    #[test]
    fn load_reads_a_saved_config_file() {
        let dir = unique_temp_dir("load_config");
        let path = dir.join("engine.json");
        let config = EngineConfig::with_layout(6, "r4k/6/6/6/6/K4R");
        fs::write(&path, config.to_json_string().unwrap()).unwrap();

        let loaded = EngineConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.starting_pieces().unwrap().len(), 4);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_of_missing_file_is_a_config_error() {
        let dir = unique_temp_dir("load_missing");
        let err = EngineConfig::load(&dir.join("absent.json")).unwrap_err();
        assert!(
            matches!(&err, ChessErrors::InvalidConfig(msg) if msg.starts_with("Failed to read")),
            "unexpected error: {err:?}"
        );

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn default_config_is_standard_chess() {
        let config = EngineConfig::default();
        assert_eq!(config.board_size, 8);
        assert_eq!(config.starting_pieces().unwrap().len(), 32);
    }

    #[test]
    fn json_fields_override_defaults() {
        let config = EngineConfig::from_json_str(r#"{ "board_size": 4, "starting_layout": "k3/4/4/3K" }"#)
            .unwrap();
        assert_eq!(config.board_size, 4);
        assert_eq!(config.square_scale, DEFAULT_SQUARE_SCALE);
        assert_eq!(config.starting_pieces().unwrap().len(), 2);
    }

    #[test]
    fn zero_sized_board_is_rejected() {
        let err = EngineConfig::from_json_str(r#"{ "board_size": 0 }"#).unwrap_err();
        assert_eq!(err, ChessErrors::InvalidBoardSize(0));
    }

    #[test]
    fn oversized_board_is_rejected_before_allocation() {
        let err = EngineConfig::from_json_str(r#"{ "board_size": 8589934592 }"#).unwrap_err();
        assert_eq!(err, ChessErrors::InvalidBoardSize(1usize << 33));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        assert!(matches!(
            EngineConfig::from_json_str("{ board_size: "),
            Err(ChessErrors::InvalidConfig(_))
        ));
    }

    #[test]
    fn config_survives_json_round_trip() {
        let config = EngineConfig::with_layout(5, "k4/5/5/5/4K");
        let json = config.to_json_string().unwrap();
        assert_eq!(EngineConfig::from_json_str(&json).unwrap(), config);
    }
}
