// SPDX-License-Identifier: MPL-2.0
//! Client-side state of one coaching exchange.
//!
//! The lifecycle is a straight line: `Idle` until a question is
//! accepted, `Opening` while the connection is established, `Streaming`
//! once fragments arrive, then `Done` or `Errored`. Both end states are
//! terminal; asking again starts a fresh session that supersedes the
//! old one.

use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatPhase {
    /// Nothing in flight; the transcript shows the greeting.
    Idle,
    /// Question accepted, connection being established.
    Opening,
    /// Answer fragments are arriving.
    Streaming,
    /// Server signalled normal completion.
    Done,
    /// Server reported an error or the transport failed.
    Errored,
}

#[derive(Debug, Clone)]
pub struct ChatSession {
    /// Bumped on every `begin` so the streaming subscription for a
    /// superseded exchange is torn down and its stragglers ignored.
    session_id: u64,
    pub phase: ChatPhase,
    pub question: String,
    pub answer: String,
    /// Display-ready error text for the `Errored` trailer.
    pub error: Option<String>,
    started_at: Option<Instant>,
    /// Wall-clock duration of a completed exchange.
    pub elapsed_ms: Option<u64>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self {
            session_id: 0,
            phase: ChatPhase::Idle,
            question: String::new(),
            answer: String::new(),
            error: None,
            started_at: None,
            elapsed_ms: None,
        }
    }
}

impl ChatSession {
    pub fn session_id(&self) -> u64 {
        self.session_id
    }

    /// True while a connection is (or is being) opened for this session.
    pub fn is_active(&self) -> bool {
        matches!(self.phase, ChatPhase::Opening | ChatPhase::Streaming)
    }

    /// True once a question has been asked, whatever came of it.
    pub fn has_exchange(&self) -> bool {
        !matches!(self.phase, ChatPhase::Idle)
    }

    /// Starts a new exchange, superseding whatever was running.
    pub fn begin(&mut self, question: String) {
        self.session_id += 1;
        self.phase = ChatPhase::Opening;
        self.question = question;
        self.answer.clear();
        self.error = None;
        self.started_at = Some(Instant::now());
        self.elapsed_ms = None;
    }

    /// Appends a fragment of the streamed answer. Ignored when no
    /// exchange is active, so stragglers from a closed stream cannot
    /// resurrect a terminal session.
    pub fn append_fragment(&mut self, content: &str) {
        if !self.is_active() {
            return;
        }
        self.phase = ChatPhase::Streaming;
        self.answer.push_str(content);
    }

    /// Marks the exchange as completed and records its duration.
    pub fn complete(&mut self) {
        if !self.is_active() {
            return;
        }
        self.phase = ChatPhase::Done;
        self.elapsed_ms = self
            .started_at
            .map(|started| started.elapsed().as_millis() as u64);
    }

    /// Marks the exchange as failed with display-ready error text.
    pub fn fail(&mut self, message: String) {
        if !self.is_active() {
            return;
        }
        self.phase = ChatPhase::Errored;
        self.error = Some(message);
    }

    /// Returns the transcript to its greeting state. The session id is
    /// kept monotonic so a cleared stream stays superseded.
    pub fn reset(&mut self) {
        self.phase = ChatPhase::Idle;
        self.question.clear();
        self.answer.clear();
        self.error = None;
        self.started_at = None;
        self.elapsed_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_moves_idle_session_to_opening() {
        let mut session = ChatSession::default();
        assert_eq!(session.phase, ChatPhase::Idle);
        assert!(!session.is_active());

        session.begin("What projects should I add?".to_string());
        assert_eq!(session.phase, ChatPhase::Opening);
        assert!(session.is_active());
        assert_eq!(session.session_id(), 1);
        assert_eq!(session.question, "What projects should I add?");
    }

    #[test]
    fn fragments_append_in_order_and_enter_streaming() {
        let mut session = ChatSession::default();
        session.begin("q".to_string());
        session.append_fragment("Start with ");
        session.append_fragment("a portfolio project.");

        assert_eq!(session.phase, ChatPhase::Streaming);
        assert_eq!(session.answer, "Start with a portfolio project.");
    }

    #[test]
    fn complete_is_terminal_and_records_elapsed_time() {
        let mut session = ChatSession::default();
        session.begin("q".to_string());
        session.append_fragment("answer");
        session.complete();

        assert_eq!(session.phase, ChatPhase::Done);
        assert!(session.elapsed_ms.is_some());
        assert!(!session.is_active());

        // Stragglers after completion change nothing.
        session.append_fragment(" more");
        assert_eq!(session.answer, "answer");
        session.fail("late error".to_string());
        assert_eq!(session.phase, ChatPhase::Done);
        assert_eq!(session.error, None);
    }

    #[test]
    fn fail_is_terminal_and_keeps_partial_answer() {
        let mut session = ChatSession::default();
        session.begin("q".to_string());
        session.append_fragment("partial");
        session.fail("Connection lost".to_string());

        assert_eq!(session.phase, ChatPhase::Errored);
        assert_eq!(session.answer, "partial");
        assert_eq!(session.error.as_deref(), Some("Connection lost"));
        assert!(!session.is_active());

        session.complete();
        assert_eq!(session.phase, ChatPhase::Errored);
        assert_eq!(session.elapsed_ms, None);
    }

    #[test]
    fn begin_supersedes_a_running_exchange() {
        let mut session = ChatSession::default();
        session.begin("first".to_string());
        session.append_fragment("old answer");
        let first_id = session.session_id();

        session.begin("second".to_string());
        assert_eq!(session.session_id(), first_id + 1);
        assert_eq!(session.phase, ChatPhase::Opening);
        assert_eq!(session.question, "second");
        assert_eq!(session.answer, "");
        assert_eq!(session.error, None);
    }

    #[test]
    fn reset_returns_to_greeting_but_keeps_id_monotonic() {
        let mut session = ChatSession::default();
        session.begin("q".to_string());
        session.append_fragment("text");
        session.reset();

        assert_eq!(session.phase, ChatPhase::Idle);
        assert!(!session.has_exchange());
        assert_eq!(session.question, "");
        assert_eq!(session.answer, "");
        assert_eq!(session.session_id(), 1);
    }
}
