//! Tool surface
//!
//! [`KnowledgeBaseTool`] is what an agent host registers; the
//! [`JsonSchemaToolConverter`] renders its definition as JSON Schema.

mod knowledge_base;
mod schema;

pub use knowledge_base::KnowledgeBaseTool;
pub use schema::JsonSchemaToolConverter;
