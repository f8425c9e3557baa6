// Template import: copy a virtual server's components onto a real build
pub mod importer;
pub mod pool;
pub mod report;

pub use importer::{ImportOptions, TemplateImporter};
pub use report::ImportResult;
