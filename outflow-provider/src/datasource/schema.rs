//! Data source schema derivation.
//!
//! Schemas are derived mechanically from the JSON schema of the underlying
//! resource types, nothing is declared per attribute by hand. The JSON schema
//! machinery produces `$ref` indirection, null unions for optional fields and
//! single entry `allOf` wrappers for documented references, all of which are
//! resolved away here so the published schema is a plain attribute tree.

use schemars::schema::{InstanceType, ObjectValidation, Schema, SchemaObject, SingleOrVec};
use schemars::{JsonSchema, Map};
use serde::Serialize;

/// The full schema of a registered data source.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct DataSourceSchema {
    /// The registered name of the data source.
    pub name: String,
    /// The API group of the underlying resource.
    pub group: String,
    /// The API version of the underlying resource.
    pub version: String,
    /// The kind of the underlying resource.
    pub kind: String,
    /// Whether rendered objects of this data source carry a namespace.
    pub namespaced: bool,
    /// The configuration block accepted by the data source.
    pub block: Block,
}

/// A set of attributes accepted at one level of a config document.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct Block {
    /// The attributes of the block, ordered by name.
    pub attributes: Vec<Attribute>,
}

impl Block {
    /// Look up an attribute of this block by name.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attr| attr.name == name)
    }
}

/// A single attribute of a data source schema.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Attribute {
    /// The name of the attribute.
    pub name: String,
    /// The type of the attribute.
    pub r#type: AttributeType,
    /// The element type for list and map attributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<AttributeType>,
    /// Whether the attribute must be present in the config.
    pub required: bool,
    /// Whether the attribute may be omitted from the config.
    pub optional: bool,
    /// Whether the attribute is computed by the provider.
    pub computed: bool,
    /// A description of the attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The nested block for object attributes and object elements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<Block>,
}

impl Attribute {
    /// Construct a computed attribute.
    ///
    /// Computed attributes are produced by the provider and may not be set
    /// in config documents.
    pub fn computed(name: impl Into<String>, r#type: AttributeType, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            r#type,
            element: None,
            required: false,
            optional: false,
            computed: true,
            description: Some(description.into()),
            block: None,
        }
    }
}

/// The type of a schema attribute.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    String,
    Number,
    Bool,
    List,
    Map,
    Object,
}

impl std::fmt::Display for AttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::String => "string",
                Self::Number => "number",
                Self::Bool => "bool",
                Self::List => "list",
                Self::Map => "map",
                Self::Object => "object",
            }
        )
    }
}

/// Derive the attribute block of the given type from its JSON schema.
pub(super) fn derive_block<T: JsonSchema>() -> Block {
    let root = schemars::schema_for!(T);
    let object = match &root.schema.object {
        Some(object) => object.as_ref(),
        None => return Block::default(),
    };
    block_from_object(object, &root.definitions)
}

fn block_from_object(object: &ObjectValidation, defs: &Map<String, Schema>) -> Block {
    let mut attributes = Vec::with_capacity(object.properties.len());
    for (name, schema) in &object.properties {
        let required = object.required.contains(name);
        attributes.push(attribute_from_schema(name, schema, required, defs));
    }
    Block { attributes }
}

fn attribute_from_schema(name: &str, schema: &Schema, required: bool, defs: &Map<String, Schema>) -> Attribute {
    let description = description_of(schema, defs);
    let (r#type, element, block) = classify(schema, defs);
    Attribute {
        name: name.to_string(),
        r#type,
        element,
        required,
        optional: !required,
        computed: false,
        description,
        block,
    }
}

/// Classify a schema into an attribute type, element type and nested block.
fn classify(schema: &Schema, defs: &Map<String, Schema>) -> (AttributeType, Option<AttributeType>, Option<Block>) {
    let object = match resolve(schema, defs) {
        Some(object) => object,
        None => return (AttributeType::Object, None, None),
    };
    match instance_type_of(object) {
        Some(InstanceType::String) => (AttributeType::String, None, None),
        Some(InstanceType::Boolean) => (AttributeType::Bool, None, None),
        Some(InstanceType::Integer) | Some(InstanceType::Number) => (AttributeType::Number, None, None),
        Some(InstanceType::Array) => classify_array(object, defs),
        Some(InstanceType::Object) | None => classify_object(object, defs),
        Some(InstanceType::Null) => (AttributeType::Object, None, None),
    }
}

fn classify_array(object: &SchemaObject, defs: &Map<String, Schema>) -> (AttributeType, Option<AttributeType>, Option<Block>) {
    let items = object.array.as_ref().and_then(|array| match &array.items {
        Some(SingleOrVec::Single(item)) => Some(item.as_ref()),
        _ => None,
    });
    match items {
        Some(item) => {
            let (element, _, block) = classify(item, defs);
            (AttributeType::List, Some(element), block)
        }
        None => (AttributeType::List, None, None),
    }
}

fn classify_object(object: &SchemaObject, defs: &Map<String, Schema>) -> (AttributeType, Option<AttributeType>, Option<Block>) {
    let validation = match &object.object {
        Some(validation) => validation.as_ref(),
        None => return (AttributeType::Object, None, None),
    };
    if !validation.properties.is_empty() {
        return (AttributeType::Object, None, Some(block_from_object(validation, defs)));
    }
    if let Some(additional) = &validation.additional_properties {
        let (element, _, block) = classify(additional, defs);
        return (AttributeType::Map, Some(element), block);
    }
    (AttributeType::Object, None, None)
}

/// Resolve a schema to its effective target object.
///
/// Strips `$ref` indirection, the null unions wrapped around optional
/// fields, and single entry `allOf`/`anyOf` nesting produced by doc
/// comments on referenced fields.
fn resolve<'a>(schema: &'a Schema, defs: &'a Map<String, Schema>) -> Option<&'a SchemaObject> {
    let object = match schema {
        Schema::Object(object) => object,
        Schema::Bool(_) => return None,
    };
    if let Some(reference) = &object.reference {
        let name = reference.trim_start_matches("#/definitions/");
        return defs.get(name).and_then(|target| resolve(target, defs));
    }
    if object.instance_type.is_none() {
        if let Some(subschemas) = &object.subschemas {
            let nested = subschemas.all_of.as_ref().or_else(|| subschemas.any_of.as_ref());
            if let Some(nested) = nested {
                let mut targets = nested.iter().filter(|candidate| !is_null(candidate));
                if let (Some(target), None) = (targets.next(), targets.next()) {
                    return resolve(target, defs);
                }
            }
        }
    }
    Some(object)
}

/// Check if the given schema matches only the JSON null value.
fn is_null(schema: &Schema) -> bool {
    match schema {
        Schema::Object(object) => match &object.instance_type {
            Some(SingleOrVec::Single(single)) => **single == InstanceType::Null,
            _ => false,
        },
        Schema::Bool(_) => false,
    }
}

/// The non null instance type of the given schema object, if any.
fn instance_type_of(object: &SchemaObject) -> Option<InstanceType> {
    match object.instance_type.as_ref()? {
        SingleOrVec::Single(single) => Some(**single),
        SingleOrVec::Vec(types) => types.iter().find(|candidate| **candidate != InstanceType::Null).copied(),
    }
}

/// The description of a schema, preferring the field level doc over the
/// description of the referenced type.
fn description_of(schema: &Schema, defs: &Map<String, Schema>) -> Option<String> {
    let object = match schema {
        Schema::Object(object) => object,
        Schema::Bool(_) => return None,
    };
    if let Some(description) = object.metadata.as_ref().and_then(|meta| meta.description.clone()) {
        return Some(description);
    }
    resolve(schema, defs).and_then(|target| target.metadata.as_ref().and_then(|meta| meta.description.clone()))
}
