use std::process::Command;
use tempfile::TempDir;

const LOGIN_TREE: &str = r#"{
  "id": "1:1",
  "name": "Login Frame",
  "type": "FRAME",
  "children": [
    {
      "id": "1:2",
      "name": "email input",
      "type": "RECTANGLE",
      "characters": "Email"
    },
    {
      "id": "1:3",
      "name": "Submit Button",
      "type": "RECTANGLE",
      "characters": "Sign in",
      "absoluteBoundingBox": { "x": 0, "y": 48, "width": 120, "height": 40 }
    }
  ]
}"#;

fn palette() -> Command {
    Command::new(env!("CARGO_BIN_EXE_palette"))
}

#[test]
fn convert_succeeds_and_emits_versioned_json() {
    let dir = TempDir::new().expect("tempdir");
    let tree_path = dir.path().join("tree.json");
    std::fs::write(&tree_path, LOGIN_TREE).expect("write tree");

    let output = palette()
        .args([
            "convert",
            "--input",
            tree_path.to_str().unwrap(),
            "--name",
            "LoginForm",
            "--format",
            "json",
        ])
        .output()
        .expect("run palette");

    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(json["mode"], "convert");
    assert_eq!(json["componentName"], "LoginForm");
    assert_eq!(json["framework"], "react");
    assert!(json["code"]
        .as_str()
        .unwrap_or_default()
        .contains("<Button size=\"medium\">Sign in</Button>"));
}

#[test]
fn convert_writes_source_file_when_output_given() {
    let dir = TempDir::new().expect("tempdir");
    let tree_path = dir.path().join("tree.json");
    let out_path = dir.path().join("LoginForm.jsx");
    std::fs::write(&tree_path, LOGIN_TREE).expect("write tree");

    let output = palette()
        .args([
            "convert",
            "--input",
            tree_path.to_str().unwrap(),
            "--name",
            "LoginForm",
            "--output",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("run palette");

    assert_eq!(output.status.code(), Some(0));
    let source = std::fs::read_to_string(&out_path).expect("source written");
    assert!(source.contains("const LoginForm: React.FC<LoginFormProps> = () => {"));

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert!(json.get("code").is_none(), "code is omitted when written to a file");
}

#[test]
fn convert_fails_with_code_2_for_duplicate_ids() {
    let dir = TempDir::new().expect("tempdir");
    let tree_path = dir.path().join("tree.json");
    std::fs::write(
        &tree_path,
        r#"{"id":"1","name":"Root","type":"FRAME","children":[
            {"id":"2","name":"A","type":"TEXT"},
            {"id":"2","name":"B","type":"TEXT"}
        ]}"#,
    )
    .expect("write tree");

    let output = palette()
        .args([
            "convert",
            "--input",
            tree_path.to_str().unwrap(),
            "--name",
            "Broken",
        ])
        .output()
        .expect("run palette");

    assert_eq!(output.status.code(), Some(2));
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(json["mode"], "error");
    assert_eq!(json["error"]["phase"], "parse");
}

#[test]
fn convert_respects_config_framework_until_flag_overrides() {
    let dir = TempDir::new().expect("tempdir");
    let tree_path = dir.path().join("tree.json");
    let cfg_path = dir.path().join("palette.toml");
    std::fs::write(&tree_path, LOGIN_TREE).expect("write tree");
    std::fs::write(&cfg_path, "framework = \"vue\"\n").expect("write config");

    let output = palette()
        .args([
            "convert",
            "--input",
            tree_path.to_str().unwrap(),
            "--name",
            "LoginForm",
            "--config",
            cfg_path.to_str().unwrap(),
        ])
        .output()
        .expect("run palette");
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(json["framework"], "vue");

    let output = palette()
        .args([
            "convert",
            "--input",
            tree_path.to_str().unwrap(),
            "--name",
            "LoginForm",
            "--config",
            cfg_path.to_str().unwrap(),
            "--framework",
            "react",
        ])
        .output()
        .expect("run palette");
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(json["framework"], "react");
}

#[test]
fn components_lists_nonempty_catalog() {
    let output = palette()
        .args(["components", "--framework", "vue"])
        .output()
        .expect("run palette");

    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(json["mode"], "components");
    let components = json["components"].as_array().expect("components array");
    assert!(!components.is_empty());
}

#[test]
fn analyze_reports_counts_and_suggestions() {
    let dir = TempDir::new().expect("tempdir");
    let tree_path = dir.path().join("tree.json");
    std::fs::write(&tree_path, LOGIN_TREE).expect("write tree");

    let output = palette()
        .args(["analyze", "--input", tree_path.to_str().unwrap()])
        .output()
        .expect("run palette");

    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(json["mode"], "analyze");
    assert_eq!(json["analysis"]["totalNodes"], 3);
    assert_eq!(json["analysis"]["frameCount"], 1);
}

#[test]
fn missing_input_file_fails_cleanly() {
    let output = palette()
        .args(["analyze", "--input", "/definitely/missing/tree.json"])
        .output()
        .expect("run palette");

    assert_eq!(output.status.code(), Some(2));
}
