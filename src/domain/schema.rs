use schemars::gen::SchemaSettings;
use schemars::JsonSchema;

/// Render the JSON Schema the provider is asked to conform to.
///
/// Subschemas are inlined because the completions endpoint rejects `$ref`
/// pointers in strict mode. The same serde derives that enforce the shape
/// during deserialization drive this description, so the two cannot drift.
pub fn json_schema_for<T: JsonSchema>() -> serde_json::Value {
    let generator = SchemaSettings::draft07()
        .with(|settings| {
            settings.inline_subschemas = true;
        })
        .into_generator();
    let schema = generator.into_root_schema_for::<T>();
    serde_json::to_value(schema).expect("a root schema always serializes to JSON")
}
