use crate::types::MethodKey;

/// Wire type of a single method field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Bit,
    Octet,
    ShortInt,
    LongInt,
    LongLongInt,
    ShortString,
    LongString,
    Timestamp,
    FieldTable,
}

/// Name and type of one field, in declaration order within its method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    name: &'static str,
    kind: FieldType,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldType) -> Self {
        Self { name, kind }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> FieldType {
        self.kind
    }
}

/// Static description of one protocol method: its key, its ordered field
/// list, and the response contract. Schemas are built once as process-wide
/// constants and never mutated.
///
/// A method with `synchronous` set obligates the peer to answer with one
/// of the methods in `responses` before anything else may be sent on the
/// channel; `responses` is non-empty exactly when `synchronous` is set.
#[derive(Debug, PartialEq, Eq)]
pub struct MethodSchema {
    name: &'static str,
    key: MethodKey,
    fields: &'static [FieldSpec],
    synchronous: bool,
    responses: &'static [MethodKey],
}

impl MethodSchema {
    pub const fn new(
        name: &'static str,
        key: MethodKey,
        fields: &'static [FieldSpec],
        synchronous: bool,
        responses: &'static [MethodKey],
    ) -> Self {
        Self {
            name,
            key,
            fields,
            synchronous,
            responses,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn key(&self) -> MethodKey {
        self.key
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    pub fn synchronous(&self) -> bool {
        self.synchronous
    }

    pub fn responses(&self) -> &'static [MethodKey] {
        self.responses
    }

    pub fn accepts_response(&self, key: MethodKey) -> bool {
        self.responses.contains(&key)
    }
}
