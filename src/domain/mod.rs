pub mod configuration;
pub mod error;
pub mod generator;
pub mod template;

pub use configuration::{
    DocumentFormat, GeneratorConfig, GeneratorDispatch, OutputConfig, ProcessConfig,
};
pub use error::{AppError, FieldError, FieldErrorKind};
pub use generator::{
    EXPRESSION_GENERATOR, ExpressionSelector, Generator, GeneratorCall, GeneratorError,
    GeneratorRegistry, GeneratorSelector, NamedSelector,
};
pub use template::{Parameter, Processor, Template};
