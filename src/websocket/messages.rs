use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    game::{GameSession, MatchKind, SessionStatus},
    models::{Direction, PlacedWord, Position, PuzzleConfig, ScoreRecord},
};

/// Messages sent from client to server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    StartGame {
        #[serde(default)]
        config: PuzzleConfig,
    },
    SelectCell {
        row: usize,
        col: usize,
    },
    ClearSelection,
    CheckSelection,
    UseHint,
    TogglePause,
    ToggleShowWords,
    NewPuzzle,
    BackToMenu,
    GetHighScores,
}

/// Messages sent from server to client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    PuzzleState {
        session_id: Uuid,
        config: PuzzleConfig,
        grid: Vec<Vec<char>>,
        words: Vec<WordInfo>,
        score: u32,
        time_remaining: u32,
        hints_remaining: u32,
        status: SessionStatus,
    },
    SelectionUpdated {
        selection: Vec<Position>,
        letters: String,
    },
    WordFound {
        word: String,
        kind: MatchKind,
        points: u32,
        score: u32,
        cells: Vec<Position>,
        found: usize,
        total: usize,
    },
    NoMatch {
        letters: String,
    },
    Hint {
        word: String,
        origin: Position,
        direction: Direction,
        hints_remaining: u32,
        score: u32,
    },
    Paused {
        paused: bool,
    },
    WordsRevealed {
        show_words: bool,
        words: Vec<WordInfo>,
    },
    Timer {
        time_remaining: u32,
    },
    GameOver {
        won: bool,
        score: u32,
        found: usize,
        total: usize,
        words: Vec<PlacedWord>,
    },
    HighScores {
        scores: Vec<ScoreRecord>,
    },
    Menu,
    Error {
        message: String,
    },
}

/// A word as the player may see it. Cells are only sent once the word is
/// found or the player has revealed the words.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordInfo {
    pub word: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cells: Option<Vec<Position>>,
}

impl WordInfo {
    pub fn list(session: &GameSession) -> Vec<WordInfo> {
        let size = session.puzzle().grid.size();
        session
            .puzzle()
            .words
            .iter()
            .map(|w| WordInfo {
                word: w.word.clone(),
                found: w.found,
                cells: (w.found || session.show_words()).then(|| w.cells(size)),
            })
            .collect()
    }
}

impl ServerMessage {
    /// Whether this reply hands the client a puzzle with its clock at the
    /// full limit, so the next tick should be a whole second away.
    pub fn starts_clock(&self) -> bool {
        matches!(self, ServerMessage::PuzzleState { .. })
    }

    pub fn puzzle_state(session: &GameSession) -> Self {
        ServerMessage::PuzzleState {
            session_id: session.id(),
            config: *session.config(),
            grid: session.puzzle().grid.rows().to_vec(),
            words: WordInfo::list(session),
            score: session.score(),
            time_remaining: session.remaining_seconds(),
            hints_remaining: session.hints_remaining(),
            status: session.status(),
        }
    }

    pub fn selection_updated(session: &GameSession) -> Self {
        ServerMessage::SelectionUpdated {
            selection: session.selection().to_vec(),
            letters: session.selected_letters(),
        }
    }

    pub fn game_over(session: &GameSession) -> Self {
        let puzzle = session.puzzle();
        ServerMessage::GameOver {
            won: session.status() == SessionStatus::Won,
            score: session.score(),
            found: puzzle.found_count(),
            total: puzzle.words.len(),
            words: puzzle.words.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_message_tags() {
        let msg: ClientMessage =
            serde_json::from_str(r#"{"type": "select_cell", "row": 2, "col": 3}"#).unwrap();
        assert!(matches!(msg, ClientMessage::SelectCell { row: 2, col: 3 }));

        let msg: ClientMessage = serde_json::from_str(r#"{"type": "toggle_show_words"}"#).unwrap();
        assert!(matches!(msg, ClientMessage::ToggleShowWords));
    }

    #[test]
    fn test_start_game_config_defaults() {
        let msg: ClientMessage = serde_json::from_str(r#"{"type": "start_game"}"#).unwrap();
        let ClientMessage::StartGame { config } = msg else {
            panic!("expected start_game");
        };
        assert_eq!(config, PuzzleConfig::default());

        let msg: ClientMessage = serde_json::from_str(
            r#"{"type": "start_game", "config": {"gridSize": 12, "difficulty": "medium"}}"#,
        )
        .unwrap();
        let ClientMessage::StartGame { config } = msg else {
            panic!("expected start_game");
        };
        assert_eq!(config.grid_size, 12);
        assert_eq!(config.word_count, 10);
    }

    #[test]
    fn test_server_message_tag() {
        let json = serde_json::to_value(ServerMessage::Timer { time_remaining: 42 }).unwrap();
        assert_eq!(json["type"], "timer");
        assert_eq!(json["time_remaining"], 42);

        let json = serde_json::to_value(ServerMessage::Menu).unwrap();
        assert_eq!(json["type"], "menu");
    }
}
