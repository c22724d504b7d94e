pub mod codec;
pub mod filesystem_document_store;

pub use codec::{JsonCodec, YamlCodec, codec_for, detect_format};
pub use filesystem_document_store::FilesystemDocumentStore;
