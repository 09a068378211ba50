//! End-to-end resolution of container step documents read from disk.

use std::fs::File;
use std::io::Write;

use kiln_config::ConfigError;
use kiln_launcher::{ContainerManifest, ContainerStep, LaunchError};
use kiln_resolver::ResolveError;
use kiln_template::TemplateError;
use serde_json::json;

fn write_step(dir: &tempfile::TempDir, name: &str, step: &serde_json::Value) -> std::path::PathBuf {
  let path = dir.path().join(name);
  let mut file = File::create(&path).expect("failed to create step file");
  file
    .write_all(serde_json::to_string_pretty(step).unwrap().as_bytes())
    .expect("failed to write step file");
  path
}

fn load_step(path: &std::path::Path) -> Result<ContainerStep, LaunchError> {
  ContainerStep::from_reader(File::open(path).expect("failed to open step file"))
}

#[test]
fn test_placeholder_step_from_file() {
  let dir = tempfile::tempdir().unwrap();
  let path = write_step(
    &dir,
    "train.json",
    &json!({
      "container": {
        "mode": "placeholder",
        "image": "trainer:2",
        "command": [
          "train",
          "--epochs", { "type": "input_value", "name": "epochs" },
          "--examples", { "type": "input_uri", "name": "examples" },
          "--model", { "type": "output_uri", "name": "model" }
        ]
      },
      "input_dict": {
        "examples": [{ "uri": "gs://b/examples/1", "type_name": "Examples" }, { "uri": "gs://b/examples/2" }]
      },
      "output_dict": {
        "model": [{ "uri": "gs://b/model/3" }]
      },
      "exec_properties": { "epochs": 10 }
    }),
  );

  let resolved = load_step(&path).unwrap().resolve().unwrap();

  assert_eq!(resolved.image, "trainer:2");
  assert_eq!(
    resolved.command,
    vec![
      "train",
      "--epochs",
      "10",
      "--examples",
      "gs://b/examples/1",
      "--model",
      "gs://b/model/3",
    ]
  );
  assert!(resolved.args.is_empty());
}

#[test]
fn test_template_step_from_file() {
  let dir = tempfile::tempdir().unwrap();
  let path = write_step(
    &dir,
    "eval.json",
    &json!({
      "container": {
        "mode": "template",
        "image": "{{ exec_properties.registry }}/evaluator:{{ exec_properties.tag }}",
        "command": ["evaluate"],
        "args": [
          "--model={{ input_dict.model[0].uri }}",
          "--split={{ input_dict.examples[0].properties.split }}",
          "--out={{ output_dict['metrics'][0].uri }}"
        ]
      },
      "input_dict": {
        "model": [{ "uri": "/artifacts/model" }],
        "examples": [{ "uri": "/artifacts/examples", "properties": { "split": "eval" } }]
      },
      "output_dict": {
        "metrics": [{ "uri": "/artifacts/metrics" }]
      },
      "exec_properties": { "registry": "gcr.io/acme", "tag": "v3" }
    }),
  );

  let resolved = load_step(&path).unwrap().resolve().unwrap();

  assert_eq!(resolved.image, "gcr.io/acme/evaluator:v3");
  assert_eq!(resolved.command, vec!["evaluate"]);
  assert_eq!(
    resolved.args,
    vec![
      "--model=/artifacts/model",
      "--split=eval",
      "--out=/artifacts/metrics",
    ]
  );
}

#[test]
fn test_unsupported_placeholder_rejected_on_load() {
  let step = json!({
    "container": {
      "mode": "placeholder",
      "image": "img",
      "command": [{ "type": "output_metadata_uri", "name": "model" }]
    }
  });

  let err = ContainerStep::from_json_str(&step.to_string()).unwrap_err();
  match err {
    LaunchError::Config(ConfigError::UnsupportedArgument { found }) => {
      assert!(found.contains("output_metadata_uri"));
    }
    other => panic!("expected UnsupportedArgument, got {:?}", other),
  }
}

#[test]
fn test_unsupported_placeholder_rejected_from_file() {
  let dir = tempfile::tempdir().unwrap();
  let path = write_step(
    &dir,
    "bogus.json",
    &json!({
      "container": {
        "mode": "placeholder",
        "image": "img",
        "command": ["run", { "type": "bogus", "name": "x" }]
      }
    }),
  );

  let err = load_step(&path).unwrap_err();
  assert!(matches!(
    err,
    LaunchError::Config(ConfigError::UnsupportedArgument { .. })
  ));
}

#[test]
fn test_placeholder_with_extra_keys_rejected_on_load() {
  let step = json!({
    "container": {
      "mode": "placeholder",
      "image": "img",
      "command": [{ "type": "input_uri", "name": "x", "extra": 1 }]
    }
  });

  let err = ContainerStep::from_json_str(&step.to_string()).unwrap_err();
  assert!(matches!(
    err,
    LaunchError::Config(ConfigError::UnsupportedArgument { .. })
  ));
}

#[test]
fn test_malformed_step_json_is_parse_error() {
  let err = ContainerStep::from_json_str(r#"{"container": "#).unwrap_err();
  assert!(matches!(err, LaunchError::Config(ConfigError::Parse(_))));
}

#[test]
fn test_large_unsigned_property_keeps_digits() {
  let step = ContainerStep::from_json_str(
    r#"{
      "container": {
        "mode": "placeholder",
        "image": "img",
        "command": [{ "type": "input_value", "name": "seed" }]
      },
      "exec_properties": { "seed": 18446744073709551615 }
    }"#,
  )
  .unwrap();

  let resolved = step.resolve().unwrap();
  assert_eq!(resolved.command, vec!["18446744073709551615"]);
}

#[test]
fn test_null_property_rejected_on_load() {
  let step = json!({
    "container": { "mode": "placeholder", "image": "img" },
    "exec_properties": { "epochs": null }
  });

  let err = ContainerStep::from_json_str(&step.to_string()).unwrap_err();
  match err {
    LaunchError::Config(ConfigError::UnsupportedProperty { found }) => assert_eq!(found, "null"),
    other => panic!("expected UnsupportedProperty, got {:?}", other),
  }
}

#[test]
fn test_missing_property_in_step() {
  let step = ContainerStep::from_json_str(
    &json!({
      "container": {
        "mode": "placeholder",
        "image": "img",
        "command": ["run", { "type": "input_value", "name": "epochs" }]
      },
      "exec_properties": { "steps": 5 }
    })
    .to_string(),
  )
  .unwrap();

  let err = step.resolve().unwrap_err();
  assert!(matches!(
    err,
    LaunchError::Resolve(ResolveError::MissingProperty { ref name }) if name == "epochs"
  ));
}

#[test]
fn test_empty_output_list_in_step() {
  let step = ContainerStep::from_json_str(
    &json!({
      "container": {
        "mode": "placeholder",
        "image": "img",
        "command": [{ "type": "output_uri", "name": "model" }]
      },
      "output_dict": { "model": [] }
    })
    .to_string(),
  )
  .unwrap();

  let err = step.resolve().unwrap_err();
  assert_eq!(err.to_string(), "failed to resolve command line: output 'model' has no artifacts");
}

#[test]
fn test_malformed_template_in_step() {
  let step = ContainerStep::from_json_str(
    &json!({
      "container": {
        "mode": "template",
        "image": "{{ exec_properties.image",
        "command": ["never rendered"]
      },
      "exec_properties": { "image": "busybox" }
    })
    .to_string(),
  )
  .unwrap();

  let err = step.resolve().unwrap_err();
  assert!(matches!(
    err,
    LaunchError::Template(TemplateError::Syntax { .. })
  ));
}

#[test]
fn test_manifest_from_step() {
  let step = ContainerStep::from_json_str(
    &json!({
      "container": {
        "mode": "placeholder",
        "image": "img",
        "command": ["serve", { "type": "input_uri", "name": "model" }]
      },
      "input_dict": { "model": [{ "uri": "/models/7" }] }
    })
    .to_string(),
  )
  .unwrap();

  let manifest = ContainerManifest::from_resolved("server", &step.resolve().unwrap());

  assert_eq!(
    manifest.to_swagger_dict(),
    json!({
      "name": "server",
      "image": "img",
      "command": ["serve", "/models/7"]
    })
  );
}
