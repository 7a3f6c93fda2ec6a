use std::collections::HashMap;

use crate::codec::Decoder;
use crate::error::{DecodeError, RegistrationError};
use crate::method::Method;
use crate::methods;
use crate::schema::MethodSchema;
use crate::types::MethodKey;

/// Process-wide method lookup table. Populated once at start-up, read-only
/// afterwards, so concurrent lookups need no locking.
#[derive(Debug, Default)]
pub struct Registry {
    methods: HashMap<MethodKey, &'static MethodSchema>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry holding the complete AMQP 0-9-1 method set.
    pub fn amqp_0_9_1() -> Self {
        let mut registry = Self::new();
        for schema in methods::ALL_METHODS.iter().copied() {
            registry
                .register(schema)
                .expect("built-in method table is consistent");
        }
        registry
    }

    /// Registers a schema. Re-registering the identical schema is a no-op;
    /// a different schema under an existing key is an error.
    pub fn register(&mut self, schema: &'static MethodSchema) -> Result<(), RegistrationError> {
        if schema.synchronous() == schema.responses().is_empty() {
            return Err(RegistrationError::InvalidResponseSet(schema.key()));
        }
        if let Some(existing) = self.methods.get(&schema.key()) {
            if *existing != schema {
                return Err(RegistrationError::DuplicateKey(schema.key()));
            }
        }
        self.methods.insert(schema.key(), schema);
        Ok(())
    }

    pub fn lookup(&self, class_id: u16, method_id: u16) -> Option<&'static MethodSchema> {
        self.methods.get(&MethodKey::new(class_id, method_id)).copied()
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Decodes a complete method payload, choosing the schema by the
    /// leading key. An unregistered key is a protocol error for the
    /// caller, not a panic.
    pub fn decode(&self, channel: u16, payload: &[u8]) -> Result<Method, DecodeError> {
        let (_, key) = MethodKey::decode(payload)?;
        let schema = self
            .methods
            .get(&key)
            .copied()
            .ok_or(DecodeError::UnknownMethod(key))?;
        schema.unpack_payload(channel, payload)
    }
}
