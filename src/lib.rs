pub mod codec;
pub mod error;
mod method;
pub mod methods;
pub mod protocol;
mod registry;
mod schema;
pub mod table;
pub mod types;
mod utils;
mod validator;
mod value;

pub use method::Method;
pub use registry::Registry;
pub use schema::{FieldSpec, FieldType, MethodSchema};
pub use validator::{DialogueState, ResponseValidator};
pub use value::FieldValue;
