use crate::{
    dictionary::WordPool,
    error::GameError,
    game::{GameSession, SessionSettings, TickOutcome},
    models::{Position, ScoreRecord},
    websocket::messages::{ClientMessage, ServerMessage, WordInfo},
};

/// Turns client messages into session calls for one connection.
///
/// Holds at most one session. Leaving to the menu or dropping the
/// controller discards it.
pub struct SessionController {
    settings: SessionSettings,
    session: Option<GameSession>,
    // Set once the finished session's score has been handed out.
    recorded: bool,
}

impl SessionController {
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            settings,
            session: None,
            recorded: false,
        }
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    fn active(&mut self) -> Result<&mut GameSession, GameError> {
        self.session.as_mut().ok_or(GameError::NoSession)
    }

    /// Apply one client message and return the replies, in order.
    ///
    /// `GetHighScores` needs the score store and is answered by the
    /// connection, so it produces no replies here.
    pub fn handle(&mut self, msg: ClientMessage, words: &WordPool) -> Result<Vec<ServerMessage>, GameError> {
        let replies = match msg {
            ClientMessage::StartGame { config } => {
                let session = GameSession::new(config, words, self.settings)?;
                let state = ServerMessage::puzzle_state(&session);
                self.session = Some(session);
                self.recorded = false;
                vec![state]
            }
            ClientMessage::SelectCell { row, col } => {
                let session = self.active()?;
                session.toggle_cell(Position::new(row, col))?;
                vec![ServerMessage::selection_updated(session)]
            }
            ClientMessage::ClearSelection => {
                let session = self.active()?;
                session.clear_selection();
                vec![ServerMessage::selection_updated(session)]
            }
            ClientMessage::CheckSelection => {
                let session = self.active()?;
                match session.check_selection()? {
                    Some(found) => {
                        let puzzle = session.puzzle();
                        let mut replies = vec![ServerMessage::WordFound {
                            word: found.word.clone(),
                            kind: found.kind,
                            points: found.points,
                            score: session.score(),
                            cells: puzzle.words[found.index].cells(puzzle.grid.size()),
                            found: puzzle.found_count(),
                            total: puzzle.words.len(),
                        }];
                        if session.status().is_finished() {
                            replies.push(ServerMessage::game_over(session));
                        }
                        replies
                    }
                    None => vec![ServerMessage::NoMatch {
                        letters: session.selected_letters(),
                    }],
                }
            }
            ClientMessage::UseHint => {
                let session = self.active()?;
                let hint = session.use_hint()?;
                vec![ServerMessage::Hint {
                    word: hint.word,
                    origin: hint.origin,
                    direction: hint.direction,
                    hints_remaining: hint.hints_remaining,
                    score: session.score(),
                }]
            }
            ClientMessage::TogglePause => {
                let paused = self.active()?.toggle_pause()?;
                vec![ServerMessage::Paused { paused }]
            }
            ClientMessage::ToggleShowWords => {
                let session = self.active()?;
                let show_words = session.toggle_show_words()?;
                vec![ServerMessage::WordsRevealed {
                    show_words,
                    words: WordInfo::list(session),
                }]
            }
            ClientMessage::NewPuzzle => {
                let session = self.active()?;
                session.new_puzzle(words)?;
                let state = ServerMessage::puzzle_state(session);
                self.recorded = false;
                vec![state]
            }
            ClientMessage::BackToMenu => {
                if let Some(session) = self.session.take() {
                    tracing::debug!("Session {} left for the menu", session.id());
                }
                self.recorded = false;
                vec![ServerMessage::Menu]
            }
            ClientMessage::GetHighScores => Vec::new(),
        };
        Ok(replies)
    }

    /// One second of game time.
    pub fn tick(&mut self) -> Vec<ServerMessage> {
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        match session.tick() {
            TickOutcome::Idle => Vec::new(),
            TickOutcome::Running(time_remaining) => vec![ServerMessage::Timer { time_remaining }],
            TickOutcome::Expired => vec![
                ServerMessage::Timer { time_remaining: 0 },
                ServerMessage::game_over(session),
            ],
        }
    }

    /// The score of a freshly won game. Returns it once per game.
    pub fn take_score_record(&mut self) -> Option<ScoreRecord> {
        if self.recorded {
            return None;
        }
        let record = self.session.as_ref()?.score_record()?;
        self.recorded = true;
        Some(record)
    }
}
