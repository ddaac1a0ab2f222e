use std::sync::Arc;

use axum::{extract::State, Json};
use rand::{rngs::StdRng, SeedableRng};
use serde::Deserialize;

use crate::{
    game::PuzzleGenerator,
    models::{Puzzle, PuzzleConfig},
    routes::error::ApiError,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct PuzzleRequest {
    #[serde(flatten)]
    pub config: PuzzleConfig,
    /// Same seed, same settings, same puzzle.
    pub seed: Option<u64>,
}

/// Generate a standalone puzzle
pub async fn create_puzzle(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PuzzleRequest>,
) -> Result<Json<Puzzle>, ApiError> {
    request.config.validate()?;

    let generator = PuzzleGenerator::new(&state.words, state.session_settings.generator);
    let puzzle = match request.seed {
        Some(seed) => generator.generate_with_rng(&request.config, &mut StdRng::seed_from_u64(seed)),
        None => generator.generate(&request.config),
    };

    tracing::debug!(
        "Generated {}x{} puzzle with {} words",
        puzzle.grid.size(),
        puzzle.grid.size(),
        puzzle.words.len()
    );

    Ok(Json(puzzle))
}
