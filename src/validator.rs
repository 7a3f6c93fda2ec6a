use crate::error::ProtocolViolation;
use crate::schema::MethodSchema;

/// Where a channel stands in its current synchronous dialogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogueState {
    Idle,
    AwaitingResponse(&'static MethodSchema),
}

/// Enforces the response contract of synchronous methods: once one is
/// sent, the peer must answer with one of its declared responses before
/// anything else may be sent on the channel.
///
/// One instance per logical channel. The send/await/receive sequence is
/// inherently ordered, so a channel's validator is driven from one writer
/// at a time; timeouts are the transport's concern and never originate
/// here.
#[derive(Debug, Default)]
pub struct ResponseValidator {
    state: DialogueState,
}

impl Default for DialogueState {
    fn default() -> Self {
        DialogueState::Idle
    }
}

impl ResponseValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DialogueState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == DialogueState::Idle
    }

    /// Records an outbound method. A synchronous method opens a dialogue;
    /// sending anything while one is open is a caller-ordering error and
    /// is rejected rather than silently reordered.
    pub fn record_send(
        &mut self,
        schema: &'static MethodSchema,
    ) -> Result<(), ProtocolViolation> {
        if let DialogueState::AwaitingResponse(pending) = self.state {
            return Err(ProtocolViolation::PendingResponse(pending.key()));
        }
        if schema.synchronous() {
            self.state = DialogueState::AwaitingResponse(schema);
        }
        Ok(())
    }

    /// Records an inbound method. While a dialogue is open the method must
    /// belong to the declared response set; on a violation the dialogue
    /// stays open so the caller can decide whether to abort the channel.
    pub fn record_receive(
        &mut self,
        schema: &'static MethodSchema,
    ) -> Result<(), ProtocolViolation> {
        match self.state {
            DialogueState::Idle => Ok(()),
            DialogueState::AwaitingResponse(pending) => {
                if pending.accepts_response(schema.key()) {
                    self.state = DialogueState::Idle;
                    Ok(())
                } else {
                    Err(ProtocolViolation::UnexpectedResponse {
                        expected: pending.responses(),
                        actual: schema.key(),
                    })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DialogueState, ResponseValidator};
    use crate::error::ProtocolViolation;
    use crate::methods::{
        BASIC_DELIVER, BASIC_GET, BASIC_GET_EMPTY, BASIC_GET_OK, BASIC_PUBLISH,
        CONNECTION_TUNE, CONNECTION_TUNE_OK,
    };

    #[test]
    fn synchronous_send_opens_a_dialogue() {
        let mut validator = ResponseValidator::new();

        validator.record_send(&CONNECTION_TUNE).unwrap();
        assert_eq!(
            validator.state(),
            DialogueState::AwaitingResponse(&CONNECTION_TUNE)
        );

        validator.record_receive(&CONNECTION_TUNE_OK).unwrap();
        assert!(validator.is_idle());
    }

    #[test]
    fn asynchronous_send_leaves_the_channel_idle() {
        let mut validator = ResponseValidator::new();

        validator.record_send(&BASIC_PUBLISH).unwrap();
        assert!(validator.is_idle());
    }

    #[test]
    fn either_declared_response_closes_the_dialogue() {
        for response in [&BASIC_GET_OK, &BASIC_GET_EMPTY] {
            let mut validator = ResponseValidator::new();

            validator.record_send(&BASIC_GET).unwrap();
            validator.record_receive(response).unwrap();
            assert!(validator.is_idle());
        }
    }

    #[test]
    fn an_undeclared_response_is_a_violation_and_keeps_waiting() {
        let mut validator = ResponseValidator::new();
        validator.record_send(&BASIC_GET).unwrap();

        let err = validator.record_receive(&BASIC_DELIVER).unwrap_err();
        assert_eq!(
            err,
            ProtocolViolation::UnexpectedResponse {
                expected: BASIC_GET.responses(),
                actual: BASIC_DELIVER.key(),
            }
        );
        assert_eq!(
            validator.state(),
            DialogueState::AwaitingResponse(&BASIC_GET)
        );
    }

    #[test]
    fn sending_during_an_open_dialogue_is_rejected() {
        let mut validator = ResponseValidator::new();
        validator.record_send(&BASIC_GET).unwrap();

        let err = validator.record_send(&BASIC_PUBLISH).unwrap_err();
        assert_eq!(err, ProtocolViolation::PendingResponse(BASIC_GET.key()));
    }

    #[test]
    fn receives_while_idle_are_ignored() {
        let mut validator = ResponseValidator::new();

        validator.record_receive(&BASIC_DELIVER).unwrap();
        assert!(validator.is_idle());
    }
}
