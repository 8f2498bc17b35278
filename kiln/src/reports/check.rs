//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// One validated property.
#[derive(Debug)]
pub struct PropertySummary {
    pub name: String,
    pub getter: String,
    pub setter: String,
    /// Guard tokens, or `custom` for host-supplied guards.
    pub guards: Vec<String>,
    pub immutable: bool,
}

/// Report data from bean validation.
#[derive(Debug)]
pub struct CheckReport {
    pub class_name: String,
    pub bean: PathBuf,
    pub properties: Vec<PropertySummary>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.headline("Bean is valid!");
        out.detail("name", &self.class_name);
        out.detail("bean", &self.bean.display().to_string());
        out.detail("properties", &self.properties.len().to_string());

        for property in &self.properties {
            let mut line = format!(
                "{} ({}/{}): {}",
                property.name,
                property.getter,
                property.setter,
                property.guards.join(", ")
            );
            if property.immutable {
                line.push_str(" [immutable]");
            }
            out.list_item(&line);
        }
    }
}
