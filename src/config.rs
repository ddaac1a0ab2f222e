use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use crate::{
    game::{GeneratorSettings, MatchPolicy, SessionSettings},
    scores::DEFAULT_MAX_SCORES,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub game: GameConfig,
    pub scores: ScoresConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub frontend_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Scores go to PostgreSQL when set, to `scores.path` otherwise.
    pub url: Option<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub word_list_path: Option<PathBuf>,
    pub max_hints: u32,
    pub placement_attempts: usize,
    pub match_policy: MatchPolicy,
}

#[derive(Debug, Clone)]
pub struct ScoresConfig {
    pub path: PathBuf,
    pub max_scores: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let server = ServerConfig {
            host: env::var("HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a number")?,
            frontend_dir: env::var("FRONTEND_DIR")
                .unwrap_or_else(|_| "../frontend".to_string())
                .into(),
        };

        let database = DatabaseConfig {
            url: env::var("DATABASE_URL").ok().filter(|url| !url.trim().is_empty()),
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a number")?,
        };

        let game = GameConfig {
            word_list_path: env::var("WORD_LIST_PATH").ok().map(PathBuf::from),
            max_hints: env::var("MAX_HINTS")
                .unwrap_or_else(|_| "3".to_string())
                .parse()
                .context("MAX_HINTS must be a number")?,
            placement_attempts: env::var("PLACEMENT_ATTEMPTS")
                .unwrap_or_else(|_| "2000".to_string())
                .parse()
                .context("PLACEMENT_ATTEMPTS must be a number")?,
            match_policy: env::var("MATCH_POLICY")
                .unwrap_or_else(|_| "strict".to_string())
                .parse()
                .context("MATCH_POLICY must be \"strict\" or \"relaxed\"")?,
        };

        let scores = ScoresConfig {
            path: env::var("SCORES_PATH")
                .unwrap_or_else(|_| "./data/high_scores.json".to_string())
                .into(),
            max_scores: env::var("MAX_SCORES")
                .unwrap_or_else(|_| DEFAULT_MAX_SCORES.to_string())
                .parse()
                .context("MAX_SCORES must be a number")?,
        };

        Ok(Config {
            server,
            database,
            game,
            scores,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl GameConfig {
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            max_hints: self.max_hints,
            policy: self.match_policy,
            generator: GeneratorSettings {
                max_attempts: self.placement_attempts,
                ..GeneratorSettings::default()
            },
        }
    }
}
