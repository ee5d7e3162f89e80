mod helpers;

use helpers::*;
use serial_test::serial;

#[test]
#[serial]
fn cfg_prints_defaults_with_sources() {
    clear_env();
    let res = run(&["cfg"]);

    assert_eq!(res.code, 0);
    let v: serde_json::Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(v["extensions"]["value"], serde_json::json!(["txt"]));
    assert_eq!(v["extensions"]["source"], "default");
    assert_eq!(v["threads"]["value"], 0);
    assert_eq!(v["recursive"]["value"], false);
}

#[test]
#[serial]
fn env_takes_precedence_over_file() {
    clear_env();
    let dir = SessionDir::new();
    let cfg = dir.write(
        "pokerhud.toml",
        "extensions = [\"txt\", \"log\"]\nthreads = 8\nrecursive = true\n",
    );
    unsafe {
        std::env::set_var("POKERHUD_CONFIG", &cfg);
        std::env::set_var("POKERHUD_RECURSIVE", "off");
    }

    let res = run(&["cfg"]);
    clear_env();

    assert_eq!(res.code, 0, "stderr: {}", res.stderr);
    let v: serde_json::Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(v["extensions"]["value"], serde_json::json!(["txt", "log"]));
    assert_eq!(v["extensions"]["source"], "file");
    assert_eq!(v["threads"]["value"], 8);
    assert_eq!(v["threads"]["source"], "file");
    assert_eq!(v["recursive"]["value"], false);
    assert_eq!(v["recursive"]["source"], "env");
}

#[test]
#[serial]
fn malformed_config_file_fails_every_command() {
    clear_env();
    let dir = SessionDir::new();
    let cfg = dir.write("pokerhud.toml", "threads = \"lots\"");
    dir.write("zoom.txt", ZOOM_SESSION);
    unsafe {
        std::env::set_var("POKERHUD_CONFIG", &cfg);
    }

    let cfg_res = run(&["cfg"]);
    let import_res = run(&["import", "--input", &dir.arg()]);
    clear_env();

    assert_eq!(cfg_res.code, 2);
    assert!(cfg_res.stderr.contains("Invalid configuration"));
    assert_eq!(import_res.code, 2);
    assert!(import_res.stdout.is_empty());
    assert!(import_res.stderr.contains("Configuration error"));
}

#[test]
#[serial]
fn oversized_thread_count_is_rejected() {
    clear_env();
    unsafe {
        std::env::set_var("POKERHUD_THREADS", "100000");
    }
    let res = run(&["cfg"]);
    clear_env();

    assert_eq!(res.code, 2);
    assert!(res.stderr.contains("threads must be <= 512"));
}
