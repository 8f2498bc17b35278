//! Class generation facade: assemble, format and write.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use kiln_bean::ClassSchema;
use kiln_core::{File, WriteResult};

use crate::{
    Assembler,
    craft::{Craft, CraftOptions},
};

/// Extension of generated files.
pub const OUTPUT_EXTENSION: &str = "js";

/// Result of writing a generated class.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// The PascalCase class name.
    pub class_name: String,
    /// Path of the written file.
    pub path: PathBuf,
    /// Whether the file was created or replaced.
    pub write: WriteResult,
}

/// Turns a [`ClassSchema`] into a formatted JavaScript class.
pub struct Generator<'a> {
    schema: &'a ClassSchema,
    options: CraftOptions,
}

impl<'a> Generator<'a> {
    pub fn new(schema: &'a ClassSchema) -> Self {
        Self {
            schema,
            options: CraftOptions::default(),
        }
    }

    /// Set the formatter options.
    pub fn options(mut self, options: CraftOptions) -> Self {
        self.options = options;
        self
    }

    /// Render the formatted class without writing to disk.
    pub fn preview(&self) -> Result<String> {
        let source = Assembler::new()
            .bind(self.schema)
            .assemble()
            .wrap_err("failed to assemble class")?;
        tracing::debug!(
            class = source.class_name(),
            properties = source.property_count(),
            "assembled class"
        );

        Craft::new(self.options)
            .format(&source.render())
            .wrap_err("failed to format class")
    }

    /// Write `<output_dir>/<stem>.js`, creating directories as needed.
    pub fn generate(&self, output_dir: &Path, stem: &str) -> Result<GenerateResult> {
        let content = self.preview()?;
        let path = output_dir.join(format!("{stem}.{OUTPUT_EXTENSION}"));

        let write = File::new(&path, content)
            .write()
            .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
        tracing::debug!(path = %path.display(), ?write, "wrote class");

        Ok(GenerateResult {
            class_name: self.schema.name()?.to_string(),
            path,
            write,
        })
    }
}
