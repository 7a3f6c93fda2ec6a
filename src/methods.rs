//! The AMQP 0-9-1 method grammar as a declarative schema table.
//!
//! One `MethodSchema` constant per method, keyed by `(class_id,
//! method_id)`; a single generic engine in `method.rs` packs and unpacks
//! all of them.

use crate::protocol::classes::{
    CLASS_BASIC, CLASS_CHANNEL, CLASS_CONFIRM, CLASS_CONNECTION, CLASS_EXCHANGE, CLASS_QUEUE,
    CLASS_TX,
};
use crate::schema::{FieldSpec, FieldType, MethodSchema};
use crate::types::MethodKey;

const fn spec(name: &'static str, kind: FieldType) -> FieldSpec {
    FieldSpec::new(name, kind)
}

// connection class

/// Starts connection negotiation: the server proposes a protocol version
/// and lists the security mechanisms the client can use.
pub static CONNECTION_START: MethodSchema = MethodSchema::new(
    "connection.start",
    MethodKey::new(CLASS_CONNECTION, 10),
    &[
        spec("version_major", FieldType::Octet),
        spec("version_minor", FieldType::Octet),
        spec("server_properties", FieldType::FieldTable),
        spec("mechanisms", FieldType::LongString),
        spec("locales", FieldType::LongString),
    ],
    true,
    &[MethodKey::new(CLASS_CONNECTION, 11)],
);

/// Selects a SASL security mechanism.
pub static CONNECTION_START_OK: MethodSchema = MethodSchema::new(
    "connection.start-ok",
    MethodKey::new(CLASS_CONNECTION, 11),
    &[
        spec("client_properties", FieldType::FieldTable),
        spec("mechanism", FieldType::ShortString),
        spec("response", FieldType::LongString),
        spec("locale", FieldType::ShortString),
    ],
    false,
    &[],
);

/// Challenges the client to provide more authentication information.
pub static CONNECTION_SECURE: MethodSchema = MethodSchema::new(
    "connection.secure",
    MethodKey::new(CLASS_CONNECTION, 20),
    &[spec("challenge", FieldType::LongString)],
    true,
    &[MethodKey::new(CLASS_CONNECTION, 21)],
);

pub static CONNECTION_SECURE_OK: MethodSchema = MethodSchema::new(
    "connection.secure-ok",
    MethodKey::new(CLASS_CONNECTION, 21),
    &[spec("response", FieldType::LongString)],
    false,
    &[],
);

/// Proposes connection tuning parameters that the client can accept or
/// adjust.
pub static CONNECTION_TUNE: MethodSchema = MethodSchema::new(
    "connection.tune",
    MethodKey::new(CLASS_CONNECTION, 30),
    &[
        spec("channel_max", FieldType::ShortInt),
        spec("frame_max", FieldType::LongInt),
        spec("heartbeat", FieldType::ShortInt),
    ],
    true,
    &[MethodKey::new(CLASS_CONNECTION, 31)],
);

pub static CONNECTION_TUNE_OK: MethodSchema = MethodSchema::new(
    "connection.tune-ok",
    MethodKey::new(CLASS_CONNECTION, 31),
    &[
        spec("channel_max", FieldType::ShortInt),
        spec("frame_max", FieldType::LongInt),
        spec("heartbeat", FieldType::ShortInt),
    ],
    false,
    &[],
);

/// Opens a connection to a virtual host.
pub static CONNECTION_OPEN: MethodSchema = MethodSchema::new(
    "connection.open",
    MethodKey::new(CLASS_CONNECTION, 40),
    &[
        spec("virtual_host", FieldType::ShortString),
        spec("reserved_1", FieldType::ShortString),
        spec("reserved_2", FieldType::Bit),
    ],
    true,
    &[MethodKey::new(CLASS_CONNECTION, 41)],
);

pub static CONNECTION_OPEN_OK: MethodSchema = MethodSchema::new(
    "connection.open-ok",
    MethodKey::new(CLASS_CONNECTION, 41),
    &[spec("reserved_1", FieldType::ShortString)],
    false,
    &[],
);

/// Asks to close the connection, carrying the offending method when the
/// close is due to an exception.
pub static CONNECTION_CLOSE: MethodSchema = MethodSchema::new(
    "connection.close",
    MethodKey::new(CLASS_CONNECTION, 50),
    &[
        spec("reply_code", FieldType::ShortInt),
        spec("reply_text", FieldType::ShortString),
        spec("class_id", FieldType::ShortInt),
        spec("method_id", FieldType::ShortInt),
    ],
    true,
    &[MethodKey::new(CLASS_CONNECTION, 51)],
);

pub static CONNECTION_CLOSE_OK: MethodSchema = MethodSchema::new(
    "connection.close-ok",
    MethodKey::new(CLASS_CONNECTION, 51),
    &[],
    false,
    &[],
);

// channel class

/// Opens a channel to the server.
pub static CHANNEL_OPEN: MethodSchema = MethodSchema::new(
    "channel.open",
    MethodKey::new(CLASS_CHANNEL, 10),
    &[spec("reserved_1", FieldType::ShortString)],
    true,
    &[MethodKey::new(CLASS_CHANNEL, 11)],
);

pub static CHANNEL_OPEN_OK: MethodSchema = MethodSchema::new(
    "channel.open-ok",
    MethodKey::new(CLASS_CHANNEL, 11),
    &[spec("reserved_1", FieldType::LongString)],
    false,
    &[],
);

/// Asks the peer to pause or restart the flow of content data.
pub static CHANNEL_FLOW: MethodSchema = MethodSchema::new(
    "channel.flow",
    MethodKey::new(CLASS_CHANNEL, 20),
    &[spec("active", FieldType::Bit)],
    true,
    &[MethodKey::new(CLASS_CHANNEL, 21)],
);

pub static CHANNEL_FLOW_OK: MethodSchema = MethodSchema::new(
    "channel.flow-ok",
    MethodKey::new(CLASS_CHANNEL, 21),
    &[spec("active", FieldType::Bit)],
    false,
    &[],
);

pub static CHANNEL_CLOSE: MethodSchema = MethodSchema::new(
    "channel.close",
    MethodKey::new(CLASS_CHANNEL, 40),
    &[
        spec("reply_code", FieldType::ShortInt),
        spec("reply_text", FieldType::ShortString),
        spec("class_id", FieldType::ShortInt),
        spec("method_id", FieldType::ShortInt),
    ],
    true,
    &[MethodKey::new(CLASS_CHANNEL, 41)],
);

pub static CHANNEL_CLOSE_OK: MethodSchema = MethodSchema::new(
    "channel.close-ok",
    MethodKey::new(CLASS_CHANNEL, 41),
    &[],
    false,
    &[],
);

// exchange class

/// Creates an exchange, or verifies the class of an existing one.
pub static EXCHANGE_DECLARE: MethodSchema = MethodSchema::new(
    "exchange.declare",
    MethodKey::new(CLASS_EXCHANGE, 10),
    &[
        spec("reserved_1", FieldType::ShortInt),
        spec("exchange", FieldType::ShortString),
        spec("type", FieldType::ShortString),
        spec("passive", FieldType::Bit),
        spec("durable", FieldType::Bit),
        spec("auto_delete", FieldType::Bit),
        spec("internal", FieldType::Bit),
        spec("no_wait", FieldType::Bit),
        spec("arguments", FieldType::FieldTable),
    ],
    true,
    &[MethodKey::new(CLASS_EXCHANGE, 11)],
);

pub static EXCHANGE_DECLARE_OK: MethodSchema = MethodSchema::new(
    "exchange.declare-ok",
    MethodKey::new(CLASS_EXCHANGE, 11),
    &[],
    false,
    &[],
);

/// Deletes an exchange and cancels its queue bindings.
pub static EXCHANGE_DELETE: MethodSchema = MethodSchema::new(
    "exchange.delete",
    MethodKey::new(CLASS_EXCHANGE, 20),
    &[
        spec("reserved_1", FieldType::ShortInt),
        spec("exchange", FieldType::ShortString),
        spec("if_unused", FieldType::Bit),
        spec("no_wait", FieldType::Bit),
    ],
    true,
    &[MethodKey::new(CLASS_EXCHANGE, 21)],
);

pub static EXCHANGE_DELETE_OK: MethodSchema = MethodSchema::new(
    "exchange.delete-ok",
    MethodKey::new(CLASS_EXCHANGE, 21),
    &[],
    false,
    &[],
);

pub static EXCHANGE_BIND: MethodSchema = MethodSchema::new(
    "exchange.bind",
    MethodKey::new(CLASS_EXCHANGE, 30),
    &[
        spec("reserved_1", FieldType::ShortInt),
        spec("destination", FieldType::ShortString),
        spec("source", FieldType::ShortString),
        spec("routing_key", FieldType::ShortString),
        spec("no_wait", FieldType::Bit),
        spec("arguments", FieldType::FieldTable),
    ],
    true,
    &[MethodKey::new(CLASS_EXCHANGE, 31)],
);

pub static EXCHANGE_BIND_OK: MethodSchema = MethodSchema::new(
    "exchange.bind-ok",
    MethodKey::new(CLASS_EXCHANGE, 31),
    &[],
    false,
    &[],
);

pub static EXCHANGE_UNBIND: MethodSchema = MethodSchema::new(
    "exchange.unbind",
    MethodKey::new(CLASS_EXCHANGE, 40),
    &[
        spec("reserved_1", FieldType::ShortInt),
        spec("destination", FieldType::ShortString),
        spec("source", FieldType::ShortString),
        spec("routing_key", FieldType::ShortString),
        spec("no_wait", FieldType::Bit),
        spec("arguments", FieldType::FieldTable),
    ],
    true,
    &[MethodKey::new(CLASS_EXCHANGE, 51)],
);

pub static EXCHANGE_UNBIND_OK: MethodSchema = MethodSchema::new(
    "exchange.unbind-ok",
    MethodKey::new(CLASS_EXCHANGE, 51),
    &[],
    false,
    &[],
);

// queue class

/// Creates or checks a queue.
pub static QUEUE_DECLARE: MethodSchema = MethodSchema::new(
    "queue.declare",
    MethodKey::new(CLASS_QUEUE, 10),
    &[
        spec("reserved_1", FieldType::ShortInt),
        spec("queue", FieldType::ShortString),
        spec("passive", FieldType::Bit),
        spec("durable", FieldType::Bit),
        spec("exclusive", FieldType::Bit),
        spec("auto_delete", FieldType::Bit),
        spec("no_wait", FieldType::Bit),
        spec("arguments", FieldType::FieldTable),
    ],
    true,
    &[MethodKey::new(CLASS_QUEUE, 11)],
);

/// Confirms a declare and reports the queue's name and counters, which is
/// essential for automatically-named queues.
pub static QUEUE_DECLARE_OK: MethodSchema = MethodSchema::new(
    "queue.declare-ok",
    MethodKey::new(CLASS_QUEUE, 11),
    &[
        spec("queue", FieldType::ShortString),
        spec("message_count", FieldType::LongInt),
        spec("consumer_count", FieldType::LongInt),
    ],
    false,
    &[],
);

/// Binds a queue to an exchange; until then it receives no messages.
pub static QUEUE_BIND: MethodSchema = MethodSchema::new(
    "queue.bind",
    MethodKey::new(CLASS_QUEUE, 20),
    &[
        spec("reserved_1", FieldType::ShortInt),
        spec("queue", FieldType::ShortString),
        spec("exchange", FieldType::ShortString),
        spec("routing_key", FieldType::ShortString),
        spec("no_wait", FieldType::Bit),
        spec("arguments", FieldType::FieldTable),
    ],
    true,
    &[MethodKey::new(CLASS_QUEUE, 21)],
);

pub static QUEUE_BIND_OK: MethodSchema = MethodSchema::new(
    "queue.bind-ok",
    MethodKey::new(CLASS_QUEUE, 21),
    &[],
    false,
    &[],
);

/// Removes all messages from a queue which are not awaiting
/// acknowledgment.
pub static QUEUE_PURGE: MethodSchema = MethodSchema::new(
    "queue.purge",
    MethodKey::new(CLASS_QUEUE, 30),
    &[
        spec("reserved_1", FieldType::ShortInt),
        spec("queue", FieldType::ShortString),
        spec("no_wait", FieldType::Bit),
    ],
    true,
    &[MethodKey::new(CLASS_QUEUE, 31)],
);

pub static QUEUE_PURGE_OK: MethodSchema = MethodSchema::new(
    "queue.purge-ok",
    MethodKey::new(CLASS_QUEUE, 31),
    &[spec("message_count", FieldType::LongInt)],
    false,
    &[],
);

/// Deletes a queue, cancelling its consumers.
pub static QUEUE_DELETE: MethodSchema = MethodSchema::new(
    "queue.delete",
    MethodKey::new(CLASS_QUEUE, 40),
    &[
        spec("reserved_1", FieldType::ShortInt),
        spec("queue", FieldType::ShortString),
        spec("if_unused", FieldType::Bit),
        spec("if_empty", FieldType::Bit),
        spec("no_wait", FieldType::Bit),
    ],
    true,
    &[MethodKey::new(CLASS_QUEUE, 41)],
);

pub static QUEUE_DELETE_OK: MethodSchema = MethodSchema::new(
    "queue.delete-ok",
    MethodKey::new(CLASS_QUEUE, 41),
    &[spec("message_count", FieldType::LongInt)],
    false,
    &[],
);

pub static QUEUE_UNBIND: MethodSchema = MethodSchema::new(
    "queue.unbind",
    MethodKey::new(CLASS_QUEUE, 50),
    &[
        spec("reserved_1", FieldType::ShortInt),
        spec("queue", FieldType::ShortString),
        spec("exchange", FieldType::ShortString),
        spec("routing_key", FieldType::ShortString),
        spec("arguments", FieldType::FieldTable),
    ],
    true,
    &[MethodKey::new(CLASS_QUEUE, 51)],
);

pub static QUEUE_UNBIND_OK: MethodSchema = MethodSchema::new(
    "queue.unbind-ok",
    MethodKey::new(CLASS_QUEUE, 51),
    &[],
    false,
    &[],
);

// basic class

/// Requests a specific quality of service for the channel or connection.
pub static BASIC_QOS: MethodSchema = MethodSchema::new(
    "basic.qos",
    MethodKey::new(CLASS_BASIC, 10),
    &[
        spec("prefetch_size", FieldType::LongInt),
        spec("prefetch_count", FieldType::ShortInt),
        spec("global", FieldType::Bit),
    ],
    true,
    &[MethodKey::new(CLASS_BASIC, 11)],
);

pub static BASIC_QOS_OK: MethodSchema = MethodSchema::new(
    "basic.qos-ok",
    MethodKey::new(CLASS_BASIC, 11),
    &[],
    false,
    &[],
);

/// Starts a consumer on a queue, lasting as long as the channel.
pub static BASIC_CONSUME: MethodSchema = MethodSchema::new(
    "basic.consume",
    MethodKey::new(CLASS_BASIC, 20),
    &[
        spec("reserved_1", FieldType::ShortInt),
        spec("queue", FieldType::ShortString),
        spec("consumer_tag", FieldType::ShortString),
        spec("no_local", FieldType::Bit),
        spec("no_ack", FieldType::Bit),
        spec("exclusive", FieldType::Bit),
        spec("no_wait", FieldType::Bit),
        spec("arguments", FieldType::FieldTable),
    ],
    true,
    &[MethodKey::new(CLASS_BASIC, 21)],
);

pub static BASIC_CONSUME_OK: MethodSchema = MethodSchema::new(
    "basic.consume-ok",
    MethodKey::new(CLASS_BASIC, 21),
    &[spec("consumer_tag", FieldType::ShortString)],
    false,
    &[],
);

/// Cancels a consumer; already delivered messages are unaffected.
pub static BASIC_CANCEL: MethodSchema = MethodSchema::new(
    "basic.cancel",
    MethodKey::new(CLASS_BASIC, 30),
    &[
        spec("consumer_tag", FieldType::ShortString),
        spec("no_wait", FieldType::Bit),
    ],
    true,
    &[MethodKey::new(CLASS_BASIC, 31)],
);

pub static BASIC_CANCEL_OK: MethodSchema = MethodSchema::new(
    "basic.cancel-ok",
    MethodKey::new(CLASS_BASIC, 31),
    &[spec("consumer_tag", FieldType::ShortString)],
    false,
    &[],
);

/// Publishes a message to an exchange.
pub static BASIC_PUBLISH: MethodSchema = MethodSchema::new(
    "basic.publish",
    MethodKey::new(CLASS_BASIC, 40),
    &[
        spec("reserved_1", FieldType::ShortInt),
        spec("exchange", FieldType::ShortString),
        spec("routing_key", FieldType::ShortString),
        spec("mandatory", FieldType::Bit),
        spec("immediate", FieldType::Bit),
    ],
    false,
    &[],
);

/// Returns an undeliverable message to its publisher.
pub static BASIC_RETURN: MethodSchema = MethodSchema::new(
    "basic.return",
    MethodKey::new(CLASS_BASIC, 50),
    &[
        spec("reply_code", FieldType::ShortInt),
        spec("reply_text", FieldType::ShortString),
        spec("exchange", FieldType::ShortString),
        spec("routing_key", FieldType::ShortString),
    ],
    false,
    &[],
);

/// Delivers a message to a consumer.
pub static BASIC_DELIVER: MethodSchema = MethodSchema::new(
    "basic.deliver",
    MethodKey::new(CLASS_BASIC, 60),
    &[
        spec("consumer_tag", FieldType::ShortString),
        spec("delivery_tag", FieldType::LongLongInt),
        spec("redelivered", FieldType::Bit),
        spec("exchange", FieldType::ShortString),
        spec("routing_key", FieldType::ShortString),
    ],
    false,
    &[],
);

/// Direct, synchronous access to the messages in a queue.
pub static BASIC_GET: MethodSchema = MethodSchema::new(
    "basic.get",
    MethodKey::new(CLASS_BASIC, 70),
    &[
        spec("reserved_1", FieldType::ShortInt),
        spec("queue", FieldType::ShortString),
        spec("no_ack", FieldType::Bit),
    ],
    true,
    &[
        MethodKey::new(CLASS_BASIC, 71),
        MethodKey::new(CLASS_BASIC, 72),
    ],
);

pub static BASIC_GET_OK: MethodSchema = MethodSchema::new(
    "basic.get-ok",
    MethodKey::new(CLASS_BASIC, 71),
    &[
        spec("delivery_tag", FieldType::LongLongInt),
        spec("redelivered", FieldType::Bit),
        spec("exchange", FieldType::ShortString),
        spec("routing_key", FieldType::ShortString),
        spec("message_count", FieldType::LongInt),
    ],
    false,
    &[],
);

pub static BASIC_GET_EMPTY: MethodSchema = MethodSchema::new(
    "basic.get-empty",
    MethodKey::new(CLASS_BASIC, 72),
    &[spec("reserved_1", FieldType::ShortString)],
    false,
    &[],
);

/// Acknowledges one or more messages.
pub static BASIC_ACK: MethodSchema = MethodSchema::new(
    "basic.ack",
    MethodKey::new(CLASS_BASIC, 80),
    &[
        spec("delivery_tag", FieldType::LongLongInt),
        spec("multiple", FieldType::Bit),
    ],
    false,
    &[],
);

/// Rejects an incoming message.
pub static BASIC_REJECT: MethodSchema = MethodSchema::new(
    "basic.reject",
    MethodKey::new(CLASS_BASIC, 90),
    &[
        spec("delivery_tag", FieldType::LongLongInt),
        spec("requeue", FieldType::Bit),
    ],
    false,
    &[],
);

/// Deprecated predecessor of basic.recover.
pub static BASIC_RECOVER_ASYNC: MethodSchema = MethodSchema::new(
    "basic.recover-async",
    MethodKey::new(CLASS_BASIC, 100),
    &[spec("requeue", FieldType::Bit)],
    false,
    &[],
);

/// Asks the server to redeliver all unacknowledged messages on the
/// channel.
pub static BASIC_RECOVER: MethodSchema = MethodSchema::new(
    "basic.recover",
    MethodKey::new(CLASS_BASIC, 110),
    &[spec("requeue", FieldType::Bit)],
    true,
    &[MethodKey::new(CLASS_BASIC, 111)],
);

pub static BASIC_RECOVER_OK: MethodSchema = MethodSchema::new(
    "basic.recover-ok",
    MethodKey::new(CLASS_BASIC, 111),
    &[],
    false,
    &[],
);

/// Rejects one or more incoming messages; also sent by the server on
/// channels in confirm mode for unhandled messages.
pub static BASIC_NACK: MethodSchema = MethodSchema::new(
    "basic.nack",
    MethodKey::new(CLASS_BASIC, 120),
    &[
        spec("delivery_tag", FieldType::LongLongInt),
        spec("multiple", FieldType::Bit),
        spec("requeue", FieldType::Bit),
    ],
    false,
    &[],
);

// confirm class

/// Puts the channel into publisher-acknowledgement mode.
pub static CONFIRM_SELECT: MethodSchema = MethodSchema::new(
    "confirm.select",
    MethodKey::new(CLASS_CONFIRM, 10),
    &[spec("nowait", FieldType::Bit)],
    true,
    &[MethodKey::new(CLASS_CONFIRM, 11)],
);

pub static CONFIRM_SELECT_OK: MethodSchema = MethodSchema::new(
    "confirm.select-ok",
    MethodKey::new(CLASS_CONFIRM, 11),
    &[],
    false,
    &[],
);

// tx class

/// Puts the channel into standard-transaction mode.
pub static TX_SELECT: MethodSchema = MethodSchema::new(
    "tx.select",
    MethodKey::new(CLASS_TX, 10),
    &[],
    true,
    &[MethodKey::new(CLASS_TX, 11)],
);

pub static TX_SELECT_OK: MethodSchema = MethodSchema::new(
    "tx.select-ok",
    MethodKey::new(CLASS_TX, 11),
    &[],
    false,
    &[],
);

/// Commits the current transaction.
pub static TX_COMMIT: MethodSchema = MethodSchema::new(
    "tx.commit",
    MethodKey::new(CLASS_TX, 20),
    &[],
    true,
    &[MethodKey::new(CLASS_TX, 21)],
);

pub static TX_COMMIT_OK: MethodSchema = MethodSchema::new(
    "tx.commit-ok",
    MethodKey::new(CLASS_TX, 21),
    &[],
    false,
    &[],
);

/// Abandons the current transaction.
pub static TX_ROLLBACK: MethodSchema = MethodSchema::new(
    "tx.rollback",
    MethodKey::new(CLASS_TX, 30),
    &[],
    true,
    &[MethodKey::new(CLASS_TX, 31)],
);

pub static TX_ROLLBACK_OK: MethodSchema = MethodSchema::new(
    "tx.rollback-ok",
    MethodKey::new(CLASS_TX, 31),
    &[],
    false,
    &[],
);

pub static ALL_METHODS: &[&MethodSchema] = &[
    &CONNECTION_START,
    &CONNECTION_START_OK,
    &CONNECTION_SECURE,
    &CONNECTION_SECURE_OK,
    &CONNECTION_TUNE,
    &CONNECTION_TUNE_OK,
    &CONNECTION_OPEN,
    &CONNECTION_OPEN_OK,
    &CONNECTION_CLOSE,
    &CONNECTION_CLOSE_OK,
    &CHANNEL_OPEN,
    &CHANNEL_OPEN_OK,
    &CHANNEL_FLOW,
    &CHANNEL_FLOW_OK,
    &CHANNEL_CLOSE,
    &CHANNEL_CLOSE_OK,
    &EXCHANGE_DECLARE,
    &EXCHANGE_DECLARE_OK,
    &EXCHANGE_DELETE,
    &EXCHANGE_DELETE_OK,
    &EXCHANGE_BIND,
    &EXCHANGE_BIND_OK,
    &EXCHANGE_UNBIND,
    &EXCHANGE_UNBIND_OK,
    &QUEUE_DECLARE,
    &QUEUE_DECLARE_OK,
    &QUEUE_BIND,
    &QUEUE_BIND_OK,
    &QUEUE_PURGE,
    &QUEUE_PURGE_OK,
    &QUEUE_DELETE,
    &QUEUE_DELETE_OK,
    &QUEUE_UNBIND,
    &QUEUE_UNBIND_OK,
    &BASIC_QOS,
    &BASIC_QOS_OK,
    &BASIC_CONSUME,
    &BASIC_CONSUME_OK,
    &BASIC_CANCEL,
    &BASIC_CANCEL_OK,
    &BASIC_PUBLISH,
    &BASIC_RETURN,
    &BASIC_DELIVER,
    &BASIC_GET,
    &BASIC_GET_OK,
    &BASIC_GET_EMPTY,
    &BASIC_ACK,
    &BASIC_REJECT,
    &BASIC_RECOVER_ASYNC,
    &BASIC_RECOVER,
    &BASIC_RECOVER_OK,
    &BASIC_NACK,
    &CONFIRM_SELECT,
    &CONFIRM_SELECT_OK,
    &TX_SELECT,
    &TX_SELECT_OK,
    &TX_COMMIT,
    &TX_COMMIT_OK,
    &TX_ROLLBACK,
    &TX_ROLLBACK_OK,
];
