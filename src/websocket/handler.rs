use crate::{
    websocket::{
        controller::SessionController,
        messages::{ClientMessage, ServerMessage},
    },
    AppState, Connection,
};
use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::IntoResponse,
};
use futures::{sink::SinkExt, stream::StreamExt};
use std::{sync::Arc, time::Duration};
use tokio::{sync::mpsc, time::MissedTickBehavior};
use uuid::Uuid;

/// Seconds of game time per scheduler tick.
const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// WebSocket upgrade handler
pub async fn handle_websocket(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle individual WebSocket connection
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::channel::<ServerMessage>(100);

    let connection_id = Uuid::new_v4();
    state.connections.insert(connection_id, Connection::new());
    tracing::info!("WebSocket connection established: {}", connection_id);

    // Spawn a task to send messages to the client
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            match serde_json::to_string(&msg) {
                Ok(json) => {
                    if sender.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to serialize message: {}", e);
                }
            }
        }
    });

    // Handle incoming messages and drive the game clock. The session lives
    // only inside this task.
    let state_for_recv = state.clone();
    let mut recv_task = tokio::spawn(async move {
        let mut controller = SessionController::new(state_for_recv.session_settings);
        let mut ticker = tokio::time::interval(TICK_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    for msg in controller.tick() {
                        let _ = tx.send(msg).await;
                    }
                }
                incoming = receiver.next() => {
                    let Some(Ok(msg)) = incoming else {
                        break;
                    };
                    match msg {
                        Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
                            Ok(client_msg) => {
                                let fresh_clock = handle_client_message(
                                    client_msg,
                                    &state_for_recv,
                                    &mut controller,
                                    &tx,
                                    connection_id,
                                )
                                .await;
                                // A new puzzle gets a full first second.
                                if fresh_clock {
                                    ticker.reset();
                                }
                            }
                            Err(e) => {
                                tracing::error!("Failed to parse message: {}", e);
                                let error_msg = ServerMessage::Error {
                                    message: format!("Invalid message format: {}", e),
                                };
                                let _ = tx.send(error_msg).await;
                            }
                        },
                        Message::Close(_) => {
                            tracing::info!("Client disconnected: {}", connection_id);
                            break;
                        }
                        _ => {}
                    }
                }
            }

            save_score(&state_for_recv, &mut controller, &tx).await;
        }
    });

    // Wait for either task to finish
    tokio::select! {
        _ = (&mut send_task) => {
            recv_task.abort();
        }
        _ = (&mut recv_task) => {
            send_task.abort();
        }
    }

    if let Some((_, connection)) = state.connections.remove(&connection_id) {
        tracing::info!(
            "WebSocket connection closed: {} (open for {:?})",
            connection_id,
            connection.connected_at.elapsed()
        );
    }
}

/// Handle individual client messages. Returns whether a puzzle with a
/// full clock was just sent.
async fn handle_client_message(
    msg: ClientMessage,
    state: &AppState,
    controller: &mut SessionController,
    tx: &mpsc::Sender<ServerMessage>,
    connection_id: Uuid,
) -> bool {
    if let ClientMessage::GetHighScores = msg {
        let scores = state.scores.load().await;
        let _ = tx.send(ServerMessage::HighScores { scores }).await;
        return false;
    }

    tracing::debug!("Connection {} sent {:?}", connection_id, msg);

    let mut fresh_clock = false;
    match controller.handle(msg, &state.words) {
        Ok(replies) => {
            fresh_clock = replies.iter().any(ServerMessage::starts_clock);
            for reply in replies {
                let _ = tx.send(reply).await;
            }
        }
        Err(e) => {
            tracing::debug!("Rejected action from {}: {}", connection_id, e);
            let _ = tx
                .send(ServerMessage::Error {
                    message: e.to_string(),
                })
                .await;
        }
    }

    if let Some(mut connection) = state.connections.get_mut(&connection_id) {
        connection.session_id = controller.session().map(|s| s.id());
    }
    fresh_clock
}

/// Store the score of a game that was just won and push the new list.
async fn save_score(
    state: &AppState,
    controller: &mut SessionController,
    tx: &mpsc::Sender<ServerMessage>,
) {
    let Some(record) = controller.take_score_record() else {
        return;
    };

    match state.scores.record(record).await {
        Ok(scores) => {
            let _ = tx.send(ServerMessage::HighScores { scores }).await;
        }
        Err(e) => {
            tracing::warn!("Failed to save score: {}", e);
            let _ = tx
                .send(ServerMessage::Error {
                    message: "Your score could not be saved".to_string(),
                })
                .await;
        }
    }
}
