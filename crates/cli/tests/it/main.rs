use std::{fs, path::Path, process::Command};

const WALLET: &str = r#"{
    "name": "Wallet",
    "documentation": "@title A wallet\n@author Dave",
    "constructor": { "parameterNames": ["owner"], "parameterTypes": ["address"] },
    "functions": [{
        "name": "withdraw",
        "parameterNames": ["amount"],
        "parameterTypes": ["uint256"],
        "documentation": "@notice Withdraws `amount` wei\n@param amount how much"
    }],
    "events": [{
        "name": "Withdrawn",
        "parameters": [{ "name": "amount", "type": "uint256", "indexed": false }]
    }]
}"#;

fn natdoc(dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_natdoc"))
        .args(args)
        .current_dir(dir)
        .env_remove("NATDOC_OUT")
        .env_remove("NATDOC_OUTPUTS")
        .output()
        .unwrap()
}

fn setup() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Wallet.json"), WALLET).unwrap();
    dir
}

#[test]
fn inspect_prints_output() {
    let dir = setup();
    let output = natdoc(dir.path(), &["inspect", "Wallet.json", "interface"]);
    assert!(output.status.success(), "{output:?}");
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "contract Wallet{function Wallet(address owner);function withdraw(uint256 amount);}\n"
    );
}

#[test]
fn inspect_abi_is_compact() {
    let dir = setup();
    let output = natdoc(dir.path(), &["inspect", "Wallet.json", "abi"]);
    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);

    let abi: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let types: Vec<_> = abi.as_array().unwrap().iter().map(|entry| entry["type"].clone()).collect();
    assert_eq!(types, ["function", "constructor", "event"]);
}

#[test]
fn emit_uses_config_file() {
    let dir = setup();
    fs::write(dir.path().join("natdoc.toml"), "out = \"docs\"\noutputs = [\"userdoc\", \"devdoc\"]")
        .unwrap();

    let output = natdoc(dir.path(), &["emit", "Wallet.json"]);
    assert!(output.status.success(), "{output:?}");
    assert_eq!(String::from_utf8(output.stdout).unwrap().lines().count(), 2);

    let userdoc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("docs/Wallet.docuser")).unwrap())
            .unwrap();
    assert_eq!(
        userdoc,
        serde_json::json!({ "methods": { "withdraw(uint256)": { "notice": "Withdraws `amount` wei" } } })
    );
    assert!(dir.path().join("docs/Wallet.docdev").exists());
    assert!(!dir.path().join("docs/Wallet.abi").exists());
}

#[test]
fn emit_out_flag_overrides_config() {
    let dir = setup();
    fs::write(dir.path().join("natdoc.toml"), "out = \"docs\"").unwrap();

    let output = natdoc(dir.path(), &["emit", "Wallet.json", "--out", "build"]);
    assert!(output.status.success(), "{output:?}");
    for ext in ["abi", "sol", "docuser", "docdev"] {
        assert!(dir.path().join(format!("build/Wallet.{ext}")).exists(), "missing .{ext}");
    }
    assert!(!dir.path().join("docs").exists());
}

#[test]
fn reports_errors() {
    let dir = setup();
    fs::write(dir.path().join("Bad.json"), WALLET.replace("@param amount", "@param value")).unwrap();

    let output = natdoc(dir.path(), &["inspect", "Bad.json", "devdoc"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("failed to generate devdoc for `Wallet`"), "{stderr}");
    assert!(stderr.contains("\"value\""), "{stderr}");
}
