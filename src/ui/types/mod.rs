pub mod forms;
mod schema;

pub use schema::{FieldSpec, field_specs};
