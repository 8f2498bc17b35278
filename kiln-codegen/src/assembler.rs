//! Template assembly.
//!
//! The assembler walks a bound [`ClassSchema`] and emits compact JavaScript:
//! one physical line per class, no indentation and no optional whitespace.
//! Layout is left entirely to the [`craft`](crate::craft) formatter.

use kiln_bean::{ClassSchema, Property};

use crate::AssemblyError;

/// Comment placed at the top of every generated unit.
pub const BANNER: &str = "// JavaScript class generated by kiln";

/// Local name bound to the first inlined guard; later guards get a numeric
/// suffix (`test1`, `test2`, ...).
const GUARD_LOCAL: &str = "test";

/// Accumulates the pieces of one class.
#[derive(Debug, Default)]
pub struct Assembler<'a> {
    schema: Option<&'a ClassSchema>,
    constructor: String,
    methods: String,
}

impl<'a> Assembler<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a schema and reset the accumulators.
    pub fn bind(&mut self, schema: &'a ClassSchema) -> &mut Self {
        self.schema = Some(schema);
        self.reset();
        self
    }

    /// Emit the constructor initializers and accessor pairs of every property
    /// in registration order.
    pub fn assemble(&mut self) -> Result<GeneratedSource, AssemblyError> {
        let schema = self.schema.ok_or(AssemblyError::Unbound)?;
        let class_name = schema.name()?.to_string();
        self.reset();

        for property in schema.all() {
            let property = property?;
            tracing::debug!(
                class = %class_name,
                property = property.name,
                guards = property.guards.len(),
                immutable = property.immutable,
                "assembling property"
            );
            self.push_property(&property)?;
        }

        Ok(GeneratedSource {
            class_name,
            property_count: schema.len(),
            constructor: std::mem::take(&mut self.constructor),
            methods: std::mem::take(&mut self.methods),
        })
    }

    fn reset(&mut self) {
        self.constructor.clear();
        self.methods.clear();
    }

    fn push_property(&mut self, property: &Property<'_>) -> Result<(), AssemblyError> {
        let identifier = &property.identifier;
        let field = identifier.field()?;
        let name = property.name;

        self.constructor.push_str(&format!("this.{field}=null;"));

        self.methods.push_str(&format!(
            "{getter} () {{if(this.{field}===null){{throw new Error('Property \"{name}\" is not set');}}return this.{field};}}",
            getter = identifier.getter_name()?,
        ));

        self.methods
            .push_str(&format!("{} (value) {{", identifier.setter_name()?));
        if property.immutable {
            self.methods.push_str(&format!(
                "if(this.{field} !== null){{throw new Error('Cannot set immutable property \"{name}\"');}}"
            ));
        }
        for (index, guard) in property.guards.iter().enumerate() {
            let local = guard_local(index);
            self.methods.push_str(&format!(
                "let {local}={source};if(!{local}(value)){{throw new Error('Unexpected value \"' + value + '\" of type ' + typeof value);}}",
                source = guard.source(),
            ));
        }
        self.methods.push_str(&format!("this.{field}=value;}}"));

        Ok(())
    }
}

fn guard_local(index: usize) -> String {
    match index {
        0 => GUARD_LOCAL.to_string(),
        n => format!("{GUARD_LOCAL}{n}"),
    }
}

/// Assembled class text, ready to be rendered once.
#[derive(Debug)]
pub struct GeneratedSource {
    class_name: String,
    property_count: usize,
    constructor: String,
    methods: String,
}

impl GeneratedSource {
    /// The PascalCase class name.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn property_count(&self) -> usize {
        self.property_count
    }

    /// Concatenate the banner, class body, serialization helpers and export.
    pub fn render(self) -> String {
        let Self {
            class_name: name,
            constructor,
            methods,
            ..
        } = self;

        let dump = format!(
            "static Dump (object, keepObject) {{if(object instanceof {name}){{let serialized=JSON.stringify(object);return keepObject === true ? JSON.parse(serialized) : serialized;}}throw new Error('Can only dump instances of {name}');}}"
        );
        let load = format!(
            "static Load (serialized) {{if(Object(serialized) !== serialized){{serialized=JSON.parse(serialized);}}if(serialized===null){{throw new Error('Failed to load serialized object');}}let object=new {name}();for(let key of Object.keys(serialized)){{if(object[key]===undefined){{throw new Error('Unsupported key \"' + key + '\" for this class');}}object[key]=serialized[key];}}return object;}}"
        );

        format!(
            "{BANNER}\n\nclass {name}{{constructor(){{{constructor}}}{methods}{dump}{load}}}\n\nmodule.exports = {name};\n"
        )
    }
}

#[cfg(test)]
mod tests {
    use kiln_bean::{Guard, TypeCheck};

    use super::*;

    fn schema(name: &str, properties: &[(&str, bool)]) -> ClassSchema {
        let mut schema = ClassSchema::new();
        schema.set_name(name).unwrap();
        for (property, immutable) in properties {
            schema.add_property(property, None, *immutable).unwrap();
        }
        schema
    }

    #[test]
    fn test_unbound() {
        let mut assembler = Assembler::new();
        assert!(matches!(assembler.assemble(), Err(AssemblyError::Unbound)));
    }

    #[test]
    fn test_empty_class() {
        let schema = schema("empty", &[]);
        let source = Assembler::new().bind(&schema).assemble().unwrap();
        assert_eq!(source.property_count(), 0);

        let text = source.render();
        assert!(text.starts_with(BANNER));
        assert!(text.contains("class Empty{constructor(){}static Dump"));
        assert!(text.ends_with("\n\nmodule.exports = Empty;\n"));
    }

    #[test]
    fn test_getter_and_setter() {
        let mut schema = schema("person", &[("person.name", false)]);
        schema
            .add_property_guard("person.name", TypeCheck::String.guard())
            .unwrap();

        let text = Assembler::new().bind(&schema).assemble().unwrap().render();

        assert!(text.contains("constructor(){this.__personname=null;}"));
        assert!(text.contains(
            "getPersonName () {if(this.__personname===null){throw new Error('Property \"person.name\" is not set');}return this.__personname;}"
        ));
        assert!(text.contains(&format!(
            "setPersonName (value) {{let test={};if(!test(value))",
            TypeCheck::String.source()
        )));
        assert!(text.contains("this.__personname=value;}"));
        assert!(!text.contains("immutable"));
    }

    #[test]
    fn test_immutable_check_precedes_guards() {
        let mut schema = schema("employee", &[("first.name", true)]);
        schema
            .add_property_guard("first.name", TypeCheck::String.guard())
            .unwrap();

        let text = Assembler::new().bind(&schema).assemble().unwrap().render();
        let immutable = text
            .find("Cannot set immutable property \"first.name\"")
            .unwrap();
        let guard = text.find("let test=").unwrap();
        assert!(immutable < guard);
    }

    #[test]
    fn test_every_guard_gets_its_own_local() {
        let mut schema = schema("counter", &[("count", false)]);
        let positive = Guard::custom("v => v > 0", |v| v.as_f64().is_some_and(|n| n > 0.0));
        let even = Guard::custom("v => v % 2 === 0", |v| v.as_u64().is_some_and(|n| n % 2 == 0));
        for guard in [TypeCheck::Uint8.guard(), positive, even] {
            schema.add_property_guard("count", guard).unwrap();
        }

        let text = Assembler::new().bind(&schema).assemble().unwrap().render();
        let first = text.find("let test=").unwrap();
        let second = text.find("let test1=v => v > 0;if(!test1(value))").unwrap();
        let third = text.find("let test2=v => v % 2 === 0;if(!test2(value))").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_rebind_resets_accumulators() {
        let first = schema("first", &[("alpha", false)]);
        let second = schema("second", &[("beta", false)]);

        let mut assembler = Assembler::new();
        assembler.bind(&first).assemble().unwrap();
        let text = assembler.bind(&second).assemble().unwrap().render();

        assert!(!text.contains("__alpha"));
        assert!(text.contains("__beta"));
    }

    #[test]
    fn test_assemble_twice_is_stable() {
        let schema = schema("person", &[("person.name", false)]);
        let mut assembler = Assembler::new();
        assembler.bind(&schema);
        let first = assembler.assemble().unwrap().render();
        let second = assembler.assemble().unwrap().render();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_property_name() {
        let schema = schema("user", &[("user_name", false)]);
        let err = Assembler::new().bind(&schema).assemble().unwrap_err();
        assert!(matches!(err, AssemblyError::Schema(_)));
    }

    #[test]
    fn test_serialization_helpers() {
        let schema = schema("person", &[]);
        let text = Assembler::new().bind(&schema).assemble().unwrap().render();
        assert!(text.contains("static Dump (object, keepObject) {if(object instanceof Person)"));
        assert!(text.contains("throw new Error('Can only dump instances of Person');"));
        assert!(text.contains("let object=new Person();"));
        assert!(text.contains("throw new Error('Unsupported key \"' + key + '\" for this class');"));
    }
}
