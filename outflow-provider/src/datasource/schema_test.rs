use crate::datasource::{AttributeType, DataSource};

#[test]
fn output_schema_describes_the_document_root() {
    let schema = DataSource::Output.schema();
    assert_eq!(
        schema.name, "logging_banzaicloud_io_output_v1alpha1",
        "unexpected data source name, got {}",
        schema.name
    );
    assert_eq!(schema.group, "logging.banzaicloud.io", "unexpected group, got {}", schema.group);
    assert_eq!(schema.version, "v1alpha1", "unexpected version, got {}", schema.version);
    assert_eq!(schema.kind, "Output", "unexpected kind, got {}", schema.kind);
    assert!(schema.namespaced, "expected the Output data source to be namespaced");
    let names: Vec<&str> = schema.block.attributes.iter().map(|attr| attr.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["id", "metadata", "spec", "yaml"],
        "unexpected root attributes, got {:?}",
        names
    );
}

#[test]
fn computed_attributes_are_neither_required_nor_optional() {
    let schema = DataSource::Output.schema();
    for name in ["id", "yaml"] {
        let attr = schema.block.attribute(name).expect("computed attribute missing from schema");
        assert_eq!(
            attr.r#type,
            AttributeType::String,
            "unexpected type for computed attribute {}",
            name
        );
        assert!(
            attr.computed && !attr.required && !attr.optional,
            "attribute {} must be computed only, got {:?}",
            name,
            attr
        );
    }
}

#[test]
fn metadata_block_requires_only_the_name() {
    let schema = DataSource::Output.schema();
    let metadata = schema.block.attribute("metadata").expect("metadata attribute missing from schema");
    assert_eq!(metadata.r#type, AttributeType::Object, "metadata must be an object attribute");
    assert!(metadata.required, "metadata must be a required attribute");
    let block = metadata.block.as_ref().expect("metadata attribute carries no nested block");

    let name = block.attribute("name").expect("name attribute missing from the metadata block");
    assert_eq!(name.r#type, AttributeType::String, "name must be a string attribute");
    assert!(name.required, "name must be a required attribute");

    let namespace = block.attribute("namespace").expect("namespace attribute missing from the metadata block");
    assert_eq!(namespace.r#type, AttributeType::String, "namespace must be a string attribute");
    assert!(namespace.optional && !namespace.required, "namespace must be an optional attribute");

    for name in ["labels", "annotations"] {
        let attr = block.attribute(name).expect("map attribute missing from the metadata block");
        assert_eq!(attr.r#type, AttributeType::Map, "{} must be a map attribute", name);
        assert_eq!(
            attr.element,
            Some(AttributeType::String),
            "{} must carry string elements",
            name
        );
    }
}

#[test]
fn output_spec_block_exposes_the_backend_tree() {
    let schema = DataSource::Output.schema();
    let spec = schema.block.attribute("spec").expect("spec attribute missing from schema");
    assert!(spec.required, "spec must be a required attribute");
    let block = spec.block.as_ref().expect("spec attribute carries no nested block");
    assert!(
        block.attribute("loggingRef").is_some(),
        "loggingRef attribute missing from the spec block"
    );

    let s3 = block.attribute("s3").expect("s3 attribute missing from the spec block");
    assert_eq!(s3.r#type, AttributeType::Object, "s3 must be an object attribute");
    assert!(s3.optional && !s3.required, "s3 must be an optional attribute");
    assert_eq!(
        s3.description.as_deref(),
        Some("S3 backend."),
        "unexpected description on the s3 attribute, got {:?}",
        s3.description
    );

    let s3_block = s3.block.as_ref().expect("s3 attribute carries no nested block");
    let bucket = s3_block.attribute("s3_bucket").expect("s3_bucket attribute missing from the s3 block");
    assert_eq!(bucket.r#type, AttributeType::String, "s3_bucket must be a string attribute");
    assert!(bucket.required, "s3_bucket must be a required attribute");
    assert_eq!(
        bucket.description.as_deref(),
        Some("The name of the target S3 bucket."),
        "unexpected description on the s3_bucket attribute, got {:?}",
        bucket.description
    );

    let region = s3_block.attribute("s3_region").expect("s3_region attribute missing from the s3 block");
    assert_eq!(region.r#type, AttributeType::String, "s3_region must be a string attribute");
    assert!(region.optional, "s3_region must be an optional attribute");

    let key_id = s3_block.attribute("aws_key_id").expect("aws_key_id attribute missing from the s3 block");
    assert_eq!(key_id.r#type, AttributeType::Object, "aws_key_id must be an object attribute");
    let key_block = key_id.block.as_ref().expect("aws_key_id attribute carries no nested block");
    assert!(
        key_block.attribute("valueFrom").is_some(),
        "valueFrom attribute missing from the aws_key_id block"
    );
}

#[test]
fn cluster_output_spec_flattens_the_backends() {
    let schema = DataSource::ClusterOutput.schema();
    let spec = schema.block.attribute("spec").expect("spec attribute missing from schema");
    let block = spec.block.as_ref().expect("spec attribute carries no nested block");

    let namespaces = block
        .attribute("enabledNamespaces")
        .expect("enabledNamespaces attribute missing from the spec block");
    assert_eq!(namespaces.r#type, AttributeType::List, "enabledNamespaces must be a list attribute");
    assert_eq!(
        namespaces.element,
        Some(AttributeType::String),
        "enabledNamespaces must carry string elements"
    );
    assert!(
        block.attribute("s3").is_some(),
        "s3 attribute missing from the spec block, the wrapped output spec must flatten"
    );
}

#[test]
fn flow_spec_block_types_lists_and_nested_blocks() {
    let schema = DataSource::Flow.schema();
    let spec = schema.block.attribute("spec").expect("spec attribute missing from schema");
    let block = spec.block.as_ref().expect("spec attribute carries no nested block");

    let matches = block.attribute("match").expect("match attribute missing from the spec block");
    assert_eq!(matches.r#type, AttributeType::List, "match must be a list attribute");
    assert_eq!(matches.element, Some(AttributeType::Object), "match must carry object elements");
    let match_block = matches.block.as_ref().expect("match attribute carries no element block");
    assert!(
        match_block.attribute("select").is_some(),
        "select attribute missing from the match element block"
    );

    let refs = block.attribute("outputRefs").expect("outputRefs attribute missing from the spec block");
    assert_eq!(refs.r#type, AttributeType::List, "outputRefs must be a list attribute");
    assert_eq!(refs.element, Some(AttributeType::String), "outputRefs must carry string elements");

    let filters = block.attribute("filters").expect("filters attribute missing from the spec block");
    assert_eq!(filters.r#type, AttributeType::List, "filters must be a list attribute");
    assert_eq!(filters.element, Some(AttributeType::Object), "filters must carry object elements");
}
