//! Check operation - bean validation.

use std::path::Path;

use eyre::{Context, Result};
use kiln_bean::{ClassSchema, GuardKind};
use kiln_codegen::{Assembler, Craft, CraftOptions};

use crate::reports::{CheckReport, PropertySummary};

/// Execute the check operation.
///
/// Resolves every property name and assembles the class through the strict
/// formatter, so anything `generate` would reject fails here too.
pub fn check(schema: &ClassSchema, bean: &Path) -> Result<CheckReport> {
    let mut properties = Vec::with_capacity(schema.len());
    for property in schema.all() {
        let property = property?;
        properties.push(PropertySummary {
            name: property.name.to_string(),
            getter: property.identifier.getter_name()?,
            setter: property.identifier.setter_name()?,
            guards: property.guards.iter().map(guard_label).collect(),
            immutable: property.immutable,
        });
    }

    let source = Assembler::new()
        .bind(schema)
        .assemble()
        .wrap_err("failed to assemble class")?;
    Craft::new(CraftOptions::default().strict(true))
        .run(&source.render())
        .wrap_err("generated class is malformed")?;

    Ok(CheckReport {
        class_name: schema.name()?.to_string(),
        bean: bean.to_path_buf(),
        properties,
    })
}

fn guard_label(guard: &kiln_bean::Guard) -> String {
    match guard.kind() {
        GuardKind::Named(check) => check.as_str().to_string(),
        GuardKind::Custom { .. } => "custom".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use kiln_bean::TypeCheck;

    use super::*;

    #[test]
    fn test_check_summarizes_properties() {
        let mut schema = ClassSchema::new();
        schema.set_name("employee").unwrap();
        schema.add_property("first.name", None, true).unwrap();
        schema
            .add_property_guard("first.name", TypeCheck::String.guard())
            .unwrap();

        let report = check(&schema, Path::new("/beans/employee.json")).unwrap();
        assert_eq!(report.class_name, "Employee");
        assert_eq!(report.properties.len(), 1);
        assert_eq!(report.properties[0].getter, "getFirstName");
        assert_eq!(report.properties[0].guards, ["string"]);
        assert!(report.properties[0].immutable);
    }

    #[test]
    fn test_check_rejects_bad_names() {
        let mut schema = ClassSchema::new();
        schema.set_name("user").unwrap();
        schema.add_property("e-mail", None, false).unwrap();

        let err = check(&schema, Path::new("user.json")).unwrap_err();
        assert!(err.to_string().starts_with("invalid property name"));
    }
}
