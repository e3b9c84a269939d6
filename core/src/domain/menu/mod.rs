pub mod entities;
pub mod lexical;
pub mod parser;
pub mod ports;
pub mod services;
pub mod tables;
pub mod upload;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use services::MenuTokenValidator;
pub use tables::ClassificationTables;
pub use value_objects::*;
