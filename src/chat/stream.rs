// SPDX-License-Identifier: MPL-2.0
//! Iced subscription reading the coach answer as Server-Sent Events.
//!
//! The backend responds to `GET /api/chat?question=...` with a
//! `text/event-stream` body: an optional `retry:` preamble, then
//! `data: {json}` frames. Each payload is either an error signal, a
//! completion signal, or an answer fragment. The subscription
//! reassembles lines from arbitrary byte chunks, decodes them, and
//! forwards typed events tagged with the session id they belong to.

use crate::api::{ApiClient, ChatPayload};
use futures_util::StreamExt;
use iced::futures::SinkExt;
use iced::stream;

/// Parameters for one chat exchange. The subscription identity hashes
/// only the session id: a new id tears the previous stream down, so at
/// most one connection is open at any time.
#[derive(Debug, Clone)]
struct ChatStream {
    client: ApiClient,
    session_id: u64,
    question: String,
}

impl std::hash::Hash for ChatStream {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.session_id.hash(state);
    }
}

/// Events emitted by the chat stream subscription.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    /// A verbatim piece of the answer.
    Fragment(String),
    /// Server signalled normal completion.
    Completed,
    /// Server reported an error; the message is surfaced verbatim.
    Failed(String),
    /// The transport broke before the server signalled completion.
    /// Carries the underlying detail for logging.
    ConnectionLost(String),
}

impl StreamEvent {
    /// Terminal events end the exchange and close the connection.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, StreamEvent::Fragment(_))
    }
}

type Output = iced::futures::channel::mpsc::Sender<(u64, StreamEvent)>;

/// Creates the streaming subscription for one exchange.
///
/// The subscription runs until it has delivered a terminal event, then
/// parks itself; dropping the subscription (because the session id
/// changed or the phase left the active states) closes the connection.
pub fn stream_events(
    client: ApiClient,
    session_id: u64,
    question: String,
) -> iced::Subscription<(u64, StreamEvent)> {
    let params = ChatStream {
        client,
        session_id,
        question,
    };
    iced::Subscription::run_with(params, |params| {
        let ChatStream {
            client,
            session_id,
            question,
        } = params.clone();
        stream::channel(100, move |mut output| async move {
            let terminal = run_stream(&client, &question, session_id, &mut output).await;
            let _ = output.send((session_id, terminal)).await;

            // Keep subscription alive but idle
            std::future::pending::<()>().await;
        })
    })
}

/// Drives one connection to completion, sending fragments as they
/// arrive and returning the terminal event.
async fn run_stream(
    client: &ApiClient,
    question: &str,
    session_id: u64,
    output: &mut Output,
) -> StreamEvent {
    let response = match client.chat_request(question).send().await {
        Ok(response) => response,
        Err(error) => return StreamEvent::ConnectionLost(error.to_string()),
    };

    // Precondition failures arrive as a 4xx JSON body with an error
    // field instead of an event stream.
    if !response.status().is_success() {
        let status = response.status();
        let message = response
            .json::<ChatPayload>()
            .await
            .ok()
            .and_then(|payload| payload.error)
            .filter(|message| !message.is_empty());
        return match message {
            Some(message) => StreamEvent::Failed(message),
            None => StreamEvent::ConnectionLost(format!("HTTP {status}")),
        };
    }

    let mut lines = SseLineBuffer::default();
    let mut body = response.bytes_stream();

    while let Some(chunk) = body.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(error) => return StreamEvent::ConnectionLost(error.to_string()),
        };
        for line in lines.push_chunk(&chunk) {
            let Some(payload) = decode_line(&line) else {
                continue;
            };
            match classify_payload(payload) {
                Some(StreamEvent::Fragment(content)) => {
                    let _ = output
                        .send((session_id, StreamEvent::Fragment(content)))
                        .await;
                }
                Some(terminal) => return terminal,
                None => {}
            }
        }
    }

    StreamEvent::ConnectionLost("response body ended before completion".to_string())
}

/// Reassembles newline-delimited SSE lines from arbitrary byte chunks.
/// Bytes are buffered raw so a UTF-8 sequence split across chunks is
/// only decoded once its line is complete.
#[derive(Debug, Default)]
pub struct SseLineBuffer {
    pending: Vec<u8>,
}

impl SseLineBuffer {
    /// Consumes a chunk and returns every line it completed. A `\r\n`
    /// terminator is treated like a bare `\n`.
    pub fn push_chunk(&mut self, chunk: &[u8]) -> Vec<String> {
        self.pending.extend_from_slice(chunk);

        let mut lines = Vec::new();
        while let Some(index) = self.pending.iter().position(|byte| *byte == b'\n') {
            let mut line: Vec<u8> = self.pending.drain(..=index).collect();
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            lines.push(String::from_utf8_lossy(&line).into_owned());
        }
        lines
    }
}

/// Extracts and parses the JSON payload of a `data:` line. Blank
/// lines, comments, and `retry:` directives return `None`; malformed
/// payloads are skipped with a warning rather than ending the stream.
fn decode_line(line: &str) -> Option<ChatPayload> {
    let data = line.strip_prefix("data:")?;
    let data = data.strip_prefix(' ').unwrap_or(data);
    match serde_json::from_str::<ChatPayload>(data) {
        Ok(payload) => Some(payload),
        Err(error) => {
            tracing::warn!(%error, "skipping malformed chat stream payload");
            None
        }
    }
}

/// Maps a payload to the event it encodes. The readings are checked in
/// order: a non-empty error wins over a completion flag, which wins
/// over content. Payloads with none of the three are ignored.
fn classify_payload(payload: ChatPayload) -> Option<StreamEvent> {
    if let Some(error) = payload.error.filter(|message| !message.is_empty()) {
        return Some(StreamEvent::Failed(error));
    }
    if payload.done == Some(true) {
        return Some(StreamEvent::Completed);
    }
    let content = payload.message.map(|chunk| chunk.content)?;
    if content.is_empty() {
        return None;
    }
    Some(StreamEvent::Fragment(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn stream_hash(session_id: u64, question: &str) -> u64 {
        let params = ChatStream {
            client: ApiClient::new("http://localhost:5001").unwrap(),
            session_id,
            question: question.to_string(),
        };
        let mut hasher = DefaultHasher::new();
        params.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn stream_identity_follows_the_session_id_only() {
        // Same session keeps its identity even if the question differs;
        // a bumped session id yields a new identity.
        assert_eq!(stream_hash(7, "first wording"), stream_hash(7, "second wording"));
        assert_ne!(stream_hash(7, "same question"), stream_hash(8, "same question"));
    }

    #[test]
    fn buffer_reassembles_lines_split_across_chunks() {
        let mut buffer = SseLineBuffer::default();
        assert!(buffer.push_chunk(b"data: {\"mess").is_empty());
        let lines = buffer.push_chunk(b"age\": {\"content\": \"hi\"}}\n\n");
        assert_eq!(
            lines,
            vec![
                "data: {\"message\": {\"content\": \"hi\"}}".to_string(),
                String::new()
            ]
        );
    }

    #[test]
    fn buffer_handles_crlf_terminators() {
        let mut buffer = SseLineBuffer::default();
        let lines = buffer.push_chunk(b"retry: 10000\r\n\r\ndata: {\"done\": true}\r\n");
        assert_eq!(
            lines,
            vec![
                "retry: 10000".to_string(),
                String::new(),
                "data: {\"done\": true}".to_string()
            ]
        );
    }

    #[test]
    fn buffer_defers_utf8_sequences_split_across_chunks() {
        let frame = "data: {\"message\": {\"content\": \"koçu\"}}\n".as_bytes();
        // Split inside the two-byte encoding of 'ç'.
        let split = frame.iter().position(|byte| *byte == 0xc3).unwrap() + 1;

        let mut buffer = SseLineBuffer::default();
        assert!(buffer.push_chunk(&frame[..split]).is_empty());
        let lines = buffer.push_chunk(&frame[split..]);
        assert_eq!(lines, vec!["data: {\"message\": {\"content\": \"koçu\"}}"]);
    }

    #[test]
    fn decode_line_ignores_retry_comments_and_blanks() {
        assert_eq!(decode_line("retry: 10000"), None);
        assert_eq!(decode_line(": keep-alive"), None);
        assert_eq!(decode_line(""), None);
    }

    #[test]
    fn decode_line_accepts_data_with_and_without_space() {
        let with_space = decode_line("data: {\"done\": true}").unwrap();
        assert_eq!(with_space.done, Some(true));
        let without_space = decode_line("data:{\"done\": true}").unwrap();
        assert_eq!(without_space.done, Some(true));
    }

    #[test]
    fn decode_line_skips_malformed_json() {
        assert_eq!(decode_line("data: {not json"), None);
    }

    #[test]
    fn error_payload_wins_over_done_flag() {
        let payload: ChatPayload =
            serde_json::from_str(r#"{"error": "Ollama bağlantısı kurulamadı", "done": true}"#)
                .unwrap();
        assert_eq!(
            classify_payload(payload),
            Some(StreamEvent::Failed(
                "Ollama bağlantısı kurulamadı".to_string()
            ))
        );
    }

    #[test]
    fn empty_error_string_falls_through_to_done() {
        let payload: ChatPayload =
            serde_json::from_str(r#"{"error": "", "done": true}"#).unwrap();
        assert_eq!(classify_payload(payload), Some(StreamEvent::Completed));
    }

    #[test]
    fn content_payload_becomes_fragment() {
        let payload: ChatPayload =
            serde_json::from_str(r#"{"message": {"content": "Add a "}, "done": false}"#).unwrap();
        assert_eq!(
            classify_payload(payload),
            Some(StreamEvent::Fragment("Add a ".to_string()))
        );
    }

    #[test]
    fn empty_content_and_empty_payloads_are_ignored() {
        let empty_content: ChatPayload =
            serde_json::from_str(r#"{"message": {"content": ""}, "done": false}"#).unwrap();
        assert_eq!(classify_payload(empty_content), None);

        let nothing: ChatPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(classify_payload(nothing), None);
    }

    #[test]
    fn terminal_classification_covers_all_variants() {
        assert!(!StreamEvent::Fragment(String::new()).is_terminal());
        assert!(StreamEvent::Completed.is_terminal());
        assert!(StreamEvent::Failed(String::new()).is_terminal());
        assert!(StreamEvent::ConnectionLost(String::new()).is_terminal());
    }
}
