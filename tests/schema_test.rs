use speaking_coach::domain::{
    json_schema_for, Evaluation, Scenario, Scores, Transcription,
};

#[test]
fn given_scenario_schema_then_enums_are_closed_and_inline() {
    let schema = json_schema_for::<Scenario>();

    assert_eq!(schema["type"], "object");
    assert_eq!(schema["additionalProperties"], false);
    assert!(!schema.to_string().contains("$ref"));

    let categories = schema["properties"]["category"]["enum"].as_array().unwrap();
    let expected = [
        "daily",
        "business",
        "travel",
        "shopping",
        "dining",
        "medical",
        "social",
        "education",
    ];
    assert_eq!(categories.len(), expected.len());
    for value in expected {
        assert!(categories.contains(&serde_json::json!(value)));
    }

    let difficulties = schema["properties"]["difficulty"]["enum"].as_array().unwrap();
    assert_eq!(difficulties.len(), 3);

    let required = schema["required"].as_array().unwrap();
    for field in ["prompt", "context", "category", "difficulty"] {
        assert!(required.contains(&serde_json::json!(field)));
    }
}

#[test]
fn given_evaluation_schema_then_score_bounds_are_declared() {
    let schema = json_schema_for::<Evaluation>();

    let scores = &schema["properties"]["scores"]["properties"];
    for dimension in ["pronunciation", "grammar", "relevance", "fluency", "overall"] {
        assert_eq!(scores[dimension]["minimum"], 0.0, "{} minimum", dimension);
        assert_eq!(scores[dimension]["maximum"], 100.0, "{} maximum", dimension);
    }
}

#[test]
fn given_evaluation_schema_then_nested_records_are_inlined_and_complete() {
    let schema = json_schema_for::<Evaluation>();

    assert!(!schema.to_string().contains("$ref"));

    // The next scenario is embedded as a full object.
    assert_eq!(schema["properties"]["nextScenario"]["type"], "object");
    assert!(schema["properties"]["nextScenario"]["properties"]["category"]["enum"].is_array());

    // missingPoints is required, never optional.
    let relevance_required = schema["properties"]["feedback"]["properties"]["relevance"]
        ["required"]
        .as_array()
        .unwrap();
    assert!(relevance_required.contains(&serde_json::json!("missingPoints")));

    let top_required = schema["required"].as_array().unwrap();
    for field in [
        "transcription",
        "scores",
        "feedback",
        "suggestedResponse",
        "summary",
        "nextScenario",
    ] {
        assert!(top_required.contains(&serde_json::json!(field)));
    }
}

#[test]
fn given_unknown_enum_value_then_deserialization_fails() {
    let result = serde_json::from_value::<Scenario>(serde_json::json!({
        "prompt": "p",
        "context": "c",
        "category": "sports",
        "difficulty": "beginner"
    }));
    assert!(result.is_err());
}

#[test]
fn given_missing_field_then_deserialization_fails() {
    let result = serde_json::from_value::<Scenario>(serde_json::json!({
        "prompt": "p",
        "category": "dining",
        "difficulty": "beginner"
    }));
    assert!(result.is_err());
}

#[test]
fn given_unexpected_field_then_deserialization_fails() {
    let result = serde_json::from_value::<Scenario>(serde_json::json!({
        "prompt": "p",
        "context": "c",
        "category": "dining",
        "difficulty": "beginner",
        "rating": 5
    }));
    assert!(result.is_err());
}

#[test]
fn given_boundary_scores_then_validation_accepts_and_rejects_correctly() {
    let mut scores = Scores {
        pronunciation: 0.0,
        grammar: 100.0,
        relevance: 50.0,
        fluency: 99.5,
        overall: 87.0,
    };
    assert!(scores.validate().is_ok());

    scores.overall = 100.5;
    assert!(scores.validate().is_err());

    scores.overall = -0.1;
    assert!(scores.validate().is_err());
}

#[test]
fn given_serialized_evaluation_then_wire_names_are_camel_case() {
    let value = serde_json::from_value::<Evaluation>(serde_json::json!({
        "transcription": "t",
        "scores": {"pronunciation": 1.0, "grammar": 2.0, "relevance": 3.0, "fluency": 4.0, "overall": 5.0},
        "feedback": {
            "grammar": [],
            "pronunciation": [{
                "word": "w", "issue": "i", "suggestion": "s", "commonMistake": ""
            }],
            "relevance": {"isRelevant": false, "analysis": "a", "missingPoints": ["greeting"]},
            "fluency": {"issues": [], "suggestions": []}
        },
        "suggestedResponse": "r",
        "summary": "s",
        "nextScenario": {"prompt": "p", "context": "c", "category": "travel", "difficulty": "advanced"}
    }))
    .unwrap();

    let serialized = serde_json::to_value(&value).unwrap();
    assert!(serialized.get("suggestedResponse").is_some());
    assert!(serialized.get("nextScenario").is_some());
    assert!(serialized["feedback"]["pronunciation"][0].get("commonMistake").is_some());
    assert!(serialized["feedback"]["relevance"].get("isRelevant").is_some());
    assert_eq!(
        serialized["feedback"]["relevance"]["missingPoints"],
        serde_json::json!(["greeting"])
    );
}

#[test]
fn given_transcription_without_words_then_words_key_is_omitted() {
    let transcription = Transcription {
        text: "hello".to_string(),
        words: None,
    };
    let serialized = serde_json::to_value(&transcription).unwrap();
    assert!(serialized.get("words").is_none());
}
