//! Host-side mirror of a generated class.
//!
//! An [`Instance`] enforces the same accessor contract as the emitted
//! JavaScript: unset reads fail, immutable properties accept one assignment,
//! and every guard must pass before a value is stored.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::{ClassSchema, Error, Result};

#[derive(Debug, Clone)]
struct Slot {
    field: String,
    value: Option<Value>,
}

/// Instance state for one [`ClassSchema`].
#[derive(Debug, Clone)]
pub struct Instance<'a> {
    schema: &'a ClassSchema,
    slots: IndexMap<String, Slot>,
}

impl<'a> Instance<'a> {
    /// Create an instance with every field unset.
    pub fn new(schema: &'a ClassSchema) -> Result<Self> {
        let slots = schema
            .properties()
            .map(|property| -> Result<(String, Slot)> {
                let (name, identifier) = property?;
                let slot = Slot {
                    field: identifier.field()?,
                    value: None,
                };
                Ok((name.to_string(), slot))
            })
            .collect::<Result<_>>()?;
        Ok(Self { schema, slots })
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.slots.get(name).is_some_and(|slot| slot.value.is_some())
    }

    /// Read a property.
    pub fn get(&self, name: &str) -> Result<&Value> {
        self.slot(name)?
            .value
            .as_ref()
            .ok_or_else(|| {
                Box::new(Error::PropertyNotSet {
                    name: name.to_string(),
                })
            })
    }

    /// Assign a property, enforcing immutability and guards.
    ///
    /// `null` is the unset sentinel: assigning it leaves the property unset.
    pub fn set(&mut self, name: &str, value: Value) -> Result<()> {
        let definition = self
            .schema
            .property(name)
            .ok_or_else(|| Error::unknown_property(name))?;
        if definition.is_immutable() && self.is_set(name) {
            return Err(Box::new(Error::ImmutableProperty {
                name: name.to_string(),
            }));
        }
        if let Some(guard) = definition.guards().iter().find(|g| !g.test(&value)) {
            tracing::debug!(%name, %value, guard = guard.source(), "guard rejected value");
            return Err(Box::new(Error::InvalidValue {
                name: name.to_string(),
                value: value.to_string(),
            }));
        }
        self.slot_mut(name)?.value = (!value.is_null()).then_some(value);
        Ok(())
    }

    /// Serialize to the record produced by the generated `Dump`.
    ///
    /// Keys are the backing field names; unset fields are `null`.
    pub fn dump(&self) -> Value {
        let record: Map<String, Value> = self
            .slots
            .values()
            .map(|slot| (slot.field.clone(), slot.value.clone().unwrap_or(Value::Null)))
            .collect();
        Value::Object(record)
    }

    /// Rebuild an instance from a dumped record.
    ///
    /// A string record is parsed as JSON first, matching the string form of
    /// `Dump`. Values are assigned directly, bypassing guards and immutability,
    /// as the generated `Load` does. Any key that is not a backing field is
    /// rejected.
    pub fn load(schema: &'a ClassSchema, record: &Value) -> Result<Self> {
        let unloadable = |reason: String| -> Result<Self> {
            Err(Box::new(Error::UnloadableRecord {
                class: schema.name()?.to_string(),
                reason,
            }))
        };

        let parsed;
        let record = match record {
            Value::String(serialized) => match serde_json::from_str::<Value>(serialized) {
                Ok(value) => {
                    parsed = value;
                    &parsed
                }
                Err(e) => return unloadable(e.to_string()),
            },
            other => other,
        };
        let record = match record {
            Value::Object(record) => record,
            Value::Null => return unloadable("record is null".to_string()),
            other => return unloadable(format!("expected an object, got {other}")),
        };

        let mut instance = Self::new(schema)?;
        for (key, value) in record {
            let Some(slot) = instance.slots.values_mut().find(|slot| &slot.field == key) else {
                return Err(Box::new(Error::UnsupportedKey {
                    key: key.clone(),
                    class: schema.name()?.to_string(),
                }));
            };
            slot.value = (!value.is_null()).then(|| value.clone());
        }
        Ok(instance)
    }

    fn slot(&self, name: &str) -> Result<&Slot> {
        self.slots
            .get(name)
            .ok_or_else(|| Error::unknown_property(name))
    }

    fn slot_mut(&mut self, name: &str) -> Result<&mut Slot> {
        self.slots
            .get_mut(name)
            .ok_or_else(|| Error::unknown_property(name))
    }
}
