//! End-to-end tests that exercise the compiled `vhdlgen` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn vhdlgen() -> Command {
    Command::cargo_bin("vhdlgen").expect("binary builds")
}

// ── help / version ────────────────────────────────────────────────────────────

#[test]
fn help_lists_component_subcommands() {
    vhdlgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("mux"))
        .stdout(predicate::str::contains("shift-register"))
        .stdout(predicate::str::contains("clock-divider"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag_works() {
    vhdlgen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_shows_help_and_fails() {
    vhdlgen().assert().failure().code(2);
}

// ── generation to stdout ──────────────────────────────────────────────────────

#[test]
fn mux_writes_vhdl_to_stdout() {
    vhdlgen()
        .args(["mux", "--inputs", "4", "--entity", "mux4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("library IEEE;"))
        .stdout(predicate::str::contains("entity mux4 is"))
        .stdout(predicate::str::contains("architecture behavioral of mux4 is"))
        .stdout(predicate::str::contains(
            "when \"11\" => output <= inputs(3);",
        ));
}

#[test]
fn omitted_identity_uses_documented_defaults() {
    vhdlgen()
        .args(["decoder", "--bits", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("entity my_entity is"))
        .stdout(predicate::str::contains(
            "architecture behavioral of my_entity is",
        ));
}

#[test]
fn function_keyword_changes_combinational_body() {
    vhdlgen()
        .args(["mux", "--inputs", "2", "--impl", "function"])
        .assert()
        .success()
        .stdout(predicate::str::contains("function mux_function(sel, inputs)"))
        .stdout(predicate::str::contains("end function;"));
}

#[test]
fn piso_shift_register_exposes_top_bit() {
    vhdlgen()
        .args(["shift-register", "--length", "4", "--variant", "piso"])
        .assert()
        .success()
        .stdout(predicate::str::contains("data_out <= reg(3);"))
        .stdout(predicate::str::contains("if load = '1' then"));
}

#[test]
fn sram_uses_numeric_std() {
    vhdlgen()
        .args(["sram", "--depth", "16", "--width", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("use IEEE.NUMERIC_STD.ALL;"))
        .stdout(predicate::str::contains(
            "memory(to_integer(unsigned(addr))) <= data_in;",
        ));
}

// ── generation to files ───────────────────────────────────────────────────────

#[test]
fn out_flag_writes_file_and_keeps_stdout_clean() {
    let dir = tempfile::tempdir().unwrap();
    let stem = dir.path().join("mux4");

    vhdlgen()
        .args(["mux", "--inputs", "4", "-e", "mux4", "-o"])
        .arg(&stem)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("mux written to"));

    let written = std::fs::read_to_string(dir.path().join("mux4.vhd")).unwrap();
    assert!(written.contains("entity mux4 is"));
}

#[test]
fn document_flag_writes_paginated_text() {
    let dir = tempfile::tempdir().unwrap();
    let doc = dir.path().join("decoder.txt");

    vhdlgen()
        .args(["decoder", "--bits", "4", "--document"])
        .arg(&doc)
        .assert()
        .success();

    let written = std::fs::read_to_string(&doc).unwrap();
    assert!(written.contains("-- decoder | page 1 of"));
    assert!(written.contains("entity my_entity is"));
}

#[test]
fn quiet_mode_suppresses_success_message() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clk.vhd");

    vhdlgen()
        .args(["clock-divider", "--divisor", "4", "-q", "-o"])
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    assert!(path.exists());
}

// ── warnings ──────────────────────────────────────────────────────────────────

#[test]
fn encoder_warns_about_multiple_asserted_lines() {
    vhdlgen()
        .env("NO_COLOR", "1")
        .args(["encoder", "--lines", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("entity my_entity is"))
        .stderr(predicate::str::contains(
            "undefined when more than one input line is asserted",
        ));
}

#[test]
fn sram_warns_about_non_power_of_two_depth() {
    vhdlgen()
        .env("NO_COLOR", "1")
        .args(["sram", "--depth", "10", "--width", "4"])
        .assert()
        .success()
        .stderr(predicate::str::contains("not a power of two"));
}

// ── validation ────────────────────────────────────────────────────────────────

#[test]
fn out_of_range_parameter_exits_two() {
    vhdlgen()
        .args(["mux", "--inputs", "17"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn shift_register_without_variant_exits_two() {
    vhdlgen()
        .args(["shift-register", "--length", "8"])
        .assert()
        .failure()
        .code(2);
}

// ── configuration ─────────────────────────────────────────────────────────────

#[test]
fn config_file_supplies_identity_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(
        &config,
        "[defaults]\nentity = \"cfg_entity\"\narchitecture = \"rtl\"\n",
    )
    .unwrap();

    vhdlgen()
        .args(["mux", "--inputs", "2", "-c"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("entity cfg_entity is"))
        .stdout(predicate::str::contains("architecture rtl of cfg_entity is"));
}

#[test]
fn entity_flag_overrides_config_default() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[defaults]\nentity = \"cfg_entity\"\n").unwrap();

    vhdlgen()
        .args(["mux", "--inputs", "2", "-e", "cli_entity", "-c"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("entity cli_entity is"));
}

#[test]
fn broken_config_file_exits_four() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "this is not toml [").unwrap();

    vhdlgen()
        .args(["mux", "--inputs", "2", "-c"])
        .arg(&config)
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

// ── list / completions ────────────────────────────────────────────────────────

#[test]
fn list_table_names_every_kind() {
    let assert = vhdlgen().arg("list").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    let combined = format!("{stdout}{stderr}");
    for name in [
        "mux",
        "decoder",
        "encoder",
        "demux",
        "shift-register",
        "sram",
        "clock-divider",
    ] {
        assert!(combined.contains(name), "missing {name}");
    }
}

#[test]
fn list_json_is_parseable() {
    let assert = vhdlgen()
        .args(["list", "--format", "json"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let rows: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 7);
    assert_eq!(rows[0]["name"], "mux");
}

#[test]
fn list_csv_has_header_row() {
    vhdlgen()
        .args(["list", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("name,description\n"));
}

#[test]
fn completions_bash_mentions_binary_name() {
    vhdlgen()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vhdlgen"));
}
