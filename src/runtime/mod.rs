//! Runtime: values, scoping, and tree-walking evaluation

mod environment;
mod interpreter;
mod value;

pub use environment::Environment;
pub use interpreter::Interpreter;
pub use value::Value;
