pub mod document_format;
pub mod loader;
pub mod process_config;

pub use document_format::{DocumentFormat, GeneratorDispatch};
pub use loader::{DEFAULT_CONFIG_FILE, load_config, parse_config_content};
pub use process_config::{GeneratorConfig, OutputConfig, ProcessConfig};
