pub mod document_store;
pub mod generators;

#[allow(unused_imports)]
pub use document_store::MemoryDocumentStore;
#[allow(unused_imports)]
pub use generators::{EmptyGenerator, ErrorGenerator, FooGenerator, NoStringGenerator};
