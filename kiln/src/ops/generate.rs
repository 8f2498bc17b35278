//! Generate operation - class generation from a loaded schema.

use std::path::{Path, PathBuf};

use eyre::Result;
use kiln_bean::ClassSchema;
use kiln_codegen::{CraftOptions, Generator};

use crate::reports::{GenerateReport, GenerationResult};

/// Inputs of one generate run.
pub struct GenerateRequest<'a> {
    pub schema: &'a ClassSchema,
    /// Absolute path of the source bean.
    pub bean: PathBuf,
    /// File stem for the generated class.
    pub stem: String,
    /// Output directory; `None` previews instead of writing.
    pub dest: Option<&'a Path>,
    pub options: CraftOptions,
}

/// Execute the generate operation.
pub fn generate(request: GenerateRequest<'_>) -> Result<GenerateReport> {
    let generator = Generator::new(request.schema).options(request.options);

    let result = match request.dest {
        Some(dest) => {
            let written = generator.generate(dest, &request.stem)?;
            GenerationResult::Written(written.path)
        }
        None => GenerationResult::Preview(generator.preview()?),
    };

    Ok(GenerateReport {
        class_name: request.schema.name()?.to_string(),
        bean: request.bean,
        result,
    })
}

#[cfg(test)]
mod tests {
    use kiln_bean::{BeanFormat, load_schema};
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_generate_writes_into_dest() {
        let temp = TempDir::new().unwrap();
        let bean = temp.path().join("person.json");
        std::fs::write(&bean, r#"{ "person.name": "string" }"#).unwrap();
        let schema = load_schema(&bean, Some(BeanFormat::Json)).unwrap();
        let dest = temp.path().join("classes");

        let report = generate(GenerateRequest {
            schema: &schema,
            bean: bean.clone(),
            stem: "person".to_string(),
            dest: Some(&dest),
            options: CraftOptions::default(),
        })
        .unwrap();

        assert_eq!(report.class_name, "Person");
        match report.result {
            GenerationResult::Written(path) => {
                assert_eq!(path, dest.join("person.js"));
                assert!(path.exists());
            }
            GenerationResult::Preview(_) => panic!("expected a written file"),
        }
    }

    #[test]
    fn test_generate_preview_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let bean = temp.path().join("person.json");
        std::fs::write(&bean, r#"{ "person.name": "string" }"#).unwrap();
        let schema = load_schema(&bean, None).unwrap();

        let report = generate(GenerateRequest {
            schema: &schema,
            bean,
            stem: "person".to_string(),
            dest: None,
            options: CraftOptions::default(),
        })
        .unwrap();

        match report.result {
            GenerationResult::Preview(source) => {
                assert!(source.contains("module.exports = Person;"))
            }
            GenerationResult::Written(_) => panic!("expected a preview"),
        }
        assert!(!temp.path().join("person.js").exists());
    }
}
