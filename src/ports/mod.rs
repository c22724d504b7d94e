mod document_store;
mod template_codec;

pub use document_store::{DocumentStore, STDIN_SOURCE};
pub use template_codec::TemplateCodec;
