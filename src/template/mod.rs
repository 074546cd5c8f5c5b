mod error;
mod paths;
mod resolver;
mod types;

pub use error::TemplateError;
pub use paths::{
    sanitize_id, Candidate, TemplatePaths, DEFAULT_TEMPLATE_FILE, TEMPLATE_EXTENSION,
    TEMPLATE_PREFIX,
};
pub use resolver::TemplateResolver;
pub use types::{Template, TemplateScope};
