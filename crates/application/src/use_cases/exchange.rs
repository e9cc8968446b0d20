//! One query/response cycle as an explicit state machine.
//!
//! `Idle → AwaitingReply → Done`. [`Exchange::begin`] produces the bytes to
//! send, [`Exchange::complete`] consumes the reply. Each step is valid
//! exactly once and only in that order.

use ferrous_dig_domain::{DomainError, Message};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeState {
    Idle,
    AwaitingReply,
    Done,
}

impl ExchangeState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExchangeState::Idle => "idle",
            ExchangeState::AwaitingReply => "awaiting reply",
            ExchangeState::Done => "done",
        }
    }
}

#[derive(Debug)]
pub struct Exchange {
    query: Message,
    state: ExchangeState,
}

impl Exchange {
    pub fn new(query: Message) -> Self {
        Self {
            query,
            state: ExchangeState::Idle,
        }
    }

    pub fn state(&self) -> ExchangeState {
        self.state
    }

    pub fn query(&self) -> &Message {
        &self.query
    }

    /// Encodes the query for sending.
    pub fn begin(&mut self) -> Result<Vec<u8>, DomainError> {
        self.expect_state(ExchangeState::Idle)?;
        let bytes = self.query.encode().map_err(DomainError::Encode)?;
        self.state = ExchangeState::AwaitingReply;
        Ok(bytes)
    }

    /// Decodes `reply` and checks that it answers the query.
    ///
    /// The exchange is finished after this call whatever the outcome; a bad
    /// reply is not retried.
    pub fn complete(&mut self, reply: &[u8]) -> Result<Message, DomainError> {
        self.expect_state(ExchangeState::AwaitingReply)?;
        self.state = ExchangeState::Done;

        let response = Message::decode(reply).map_err(DomainError::Protocol)?;
        verify_response(&self.query, &response)?;
        Ok(response)
    }

    pub fn into_query(self) -> Message {
        self.query
    }

    fn expect_state(&self, expected: ExchangeState) -> Result<(), DomainError> {
        if self.state != expected {
            return Err(DomainError::ExchangeState {
                expected: expected.as_str(),
                actual: self.state.as_str(),
            });
        }
        Ok(())
    }
}

/// Checks that `response` is a reply to `query`: QR set, same transaction
/// id, and the same questions (names compared case-insensitively).
pub fn verify_response(query: &Message, response: &Message) -> Result<(), DomainError> {
    if !response.header.qr {
        return Err(DomainError::ResponseMismatch(
            "QR bit is not set".to_string(),
        ));
    }

    if response.header.id != query.header.id {
        return Err(DomainError::ResponseMismatch(format!(
            "id {} does not match query id {}",
            response.header.id, query.header.id
        )));
    }

    let same_questions = response.questions.len() == query.questions.len()
        && response
            .questions
            .iter()
            .zip(&query.questions)
            .all(|(got, sent)| got.matches(sent));
    if !same_questions {
        return Err(DomainError::ResponseMismatch(
            "question section differs from the query".to_string(),
        ));
    }

    Ok(())
}
