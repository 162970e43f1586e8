use anyhow::Result;
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt},
    sync::mpsc,
};

use crate::{
    config::SessionConfig,
    game::{GameController, GameError},
    models::GameSnapshot,
    session::messages::{ClientMessage, ServerMessage},
};

/// Run a JSON-lines session: one `ClientMessage` per input line, one
/// `ServerMessage` per output line. Ends at EOF and hands the game back.
pub async fn run_session<R, W>(
    reader: R,
    mut writer: W,
    mut game: GameController,
    config: &SessionConfig,
) -> Result<GameController>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let (tx, mut rx) = mpsc::unbounded_channel::<ServerMessage>();

    let observer_tx = tx.clone();
    game.subscribe(move |snapshot: &GameSnapshot| {
        let _ = observer_tx.send(ServerMessage::GameState(snapshot.clone()));
    });

    tracing::info!("Session started, {} tiles in bag", game.tiles_remaining());
    let _ = tx.send(ServerMessage::GameState(game.snapshot()));
    flush(&mut rx, &mut writer).await?;

    let mut reader = reader;
    let mut buf = Vec::new();
    loop {
        match read_message(&mut reader, &mut buf, config.max_message_bytes).await? {
            Incoming::Eof => break,
            Incoming::Oversized => {
                tracing::warn!("Dropping message longer than {} bytes", config.max_message_bytes);
                let _ = tx.send(ServerMessage::Error {
                    message: format!("Message exceeds {} bytes", config.max_message_bytes),
                });
            }
            Incoming::Line => match std::str::from_utf8(&buf) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => match serde_json::from_str::<ClientMessage>(line.trim()) {
                    Ok(client_msg) => {
                        if let Err(e) = handle_client_message(client_msg, &mut game) {
                            let _ = tx.send(ServerMessage::Error {
                                message: e.to_string(),
                            });
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse message: {}", e);
                        let _ = tx.send(ServerMessage::Error {
                            message: format!("Invalid message format: {}", e),
                        });
                    }
                },
                Err(e) => {
                    tracing::warn!("Message is not valid UTF-8: {}", e);
                    let _ = tx.send(ServerMessage::Error {
                        message: format!("Invalid message format: {}", e),
                    });
                }
            },
        }

        flush(&mut rx, &mut writer).await?;
    }

    tracing::info!("Session closed, total score {}", game.total_score());
    Ok(game)
}

/// Apply one message to the game. Silent rejections are swallowed; the
/// rest are passed back for an `error` reply.
fn handle_client_message(msg: ClientMessage, game: &mut GameController) -> Result<(), GameError> {
    let outcome = match msg {
        ClientMessage::MoveTile { from, to } => game.move_tile(from, to).map(|_| ()),
        ClientMessage::ScoreWord => game.score_word().map(|_| ()),
        ClientMessage::CommitWord => game.commit_word().map(|_| ()),
        ClientMessage::Restart => {
            game.restart();
            Ok(())
        }
    };

    match outcome {
        Err(e) if e.is_silent() => {
            tracing::debug!("Ignored message: {}", e);
            Ok(())
        }
        Err(e) => {
            tracing::warn!("Rejected message: {}", e);
            Err(e)
        }
        Ok(()) => Ok(()),
    }
}

enum Incoming {
    Line,
    Oversized,
    Eof,
}

/// Read one newline-terminated message into `buf`, holding at most a few
/// bytes past `max_bytes` in memory. The tail of an oversized line is
/// consumed and dropped.
async fn read_message<R>(reader: &mut R, buf: &mut Vec<u8>, max_bytes: usize) -> Result<Incoming>
where
    R: AsyncBufRead + Unpin,
{
    // room for the message plus "\r\n"
    let cap = max_bytes as u64 + 2;
    buf.clear();
    let read = (&mut *reader).take(cap).read_until(b'\n', buf).await?;
    if read == 0 {
        return Ok(Incoming::Eof);
    }

    if !buf.ends_with(b"\n") && read as u64 == cap {
        discard_line(reader).await?;
        buf.clear();
        return Ok(Incoming::Oversized);
    }

    let len = buf
        .iter()
        .rposition(|&b| b != b'\n' && b != b'\r')
        .map_or(0, |last| last + 1);
    if len > max_bytes {
        buf.clear();
        return Ok(Incoming::Oversized);
    }
    Ok(Incoming::Line)
}

async fn discard_line<R>(reader: &mut R) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    loop {
        let available = reader.fill_buf().await?;
        if available.is_empty() {
            return Ok(());
        }
        match available.iter().position(|&b| b == b'\n') {
            Some(end) => {
                reader.consume(end + 1);
                return Ok(());
            }
            None => {
                let len = available.len();
                reader.consume(len);
            }
        }
    }
}

async fn flush<W>(rx: &mut mpsc::UnboundedReceiver<ServerMessage>, writer: &mut W) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Ok(msg) = rx.try_recv() {
        match serde_json::to_string(&msg) {
            Ok(json) => {
                writer.write_all(json.as_bytes()).await?;
                writer.write_all(b"\n").await?;
            }
            Err(e) => {
                tracing::error!("Failed to serialize message: {}", e);
            }
        }
    }
    writer.flush().await?;
    Ok(())
}
