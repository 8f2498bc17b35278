//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Where the generated class went.
#[derive(Debug)]
pub enum GenerationResult {
    /// Formatted source printed instead of written.
    Preview(String),
    /// Source written to disk.
    Written(PathBuf),
}

/// Report data from a generate run.
#[derive(Debug)]
pub struct GenerateReport {
    /// The PascalCase class name.
    pub class_name: String,
    /// Absolute path of the source bean.
    pub bean: PathBuf,
    pub result: GenerationResult,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        if let GenerationResult::Preview(source) = &self.result {
            out.preformatted(source);
        }

        out.headline("Successfully generated class!");
        out.detail("name", &self.class_name);
        out.detail("bean", &self.bean.display().to_string());

        if let GenerationResult::Written(path) = &self.result {
            out.detail("file", &path.display().to_string());
        }
    }
}
