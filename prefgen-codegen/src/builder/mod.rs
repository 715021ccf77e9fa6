//! Text building blocks for generated documents.

mod code_builder;
mod indent;
mod xml;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use xml::XmlBuilder;
