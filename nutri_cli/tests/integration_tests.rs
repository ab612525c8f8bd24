//! Integration tests for the maisvida binary.
//!
//! These tests verify end-to-end behavior including:
//! - One-shot plan computation (text and JSON)
//! - Config file presentation toggles
//! - The interactive coach session, scripted over stdin
//! - Unguarded NaN propagation and the required-field guard

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a directory for config files
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("maisvida"))
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mais Vida nutrition coach"));
}

#[test]
fn test_plan_reference_case_text_output() {
    cli()
        .args(["plan", "--weight", "75", "--height", "175"])
        .args(["--age", "25", "--sex", "male", "--goal", "lose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Seu Plano Nutricional"))
        .stdout(predicate::str::contains("→ Calorias: 2172 kcal/dia"))
        .stdout(predicate::str::contains("→ Proteína: 165g por dia"))
        .stdout(predicate::str::contains("→ Carboidratos: 243g por dia"))
        .stdout(predicate::str::contains("→ Gorduras: 60g por dia"))
        .stdout(predicate::str::contains("🌅 **Café da Manhã** (434 kcal)"))
        .stdout(predicate::str::contains("Salada grande"))
        .stdout(predicate::str::contains("💡 Dicas Importantes"))
        .stdout(predicate::str::contains("consulte um nutricionista"));
}

#[test]
fn test_plan_goal_changes_dinner() {
    cli()
        .args(["plan", "--weight", "75", "--height", "175"])
        .args(["--age", "25", "--sex", "male", "--goal", "gain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("batata doce"))
        .stdout(predicate::str::contains("Salada grande").not());
}

#[test]
fn test_plan_json_output() {
    let output = cli()
        .args(["plan", "--weight", "75", "--height", "175"])
        .args(["--age", "25", "--sex", "male", "--goal", "maintain", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let plan: serde_json::Value =
        serde_json::from_slice(&output).expect("stdout should be valid JSON");

    assert_eq!(plan["calories"], 2672.0);
    assert_eq!(plan["protein_g"], 135.0);
    assert_eq!(plan["carbs_g"], 380.0);
    assert_eq!(plan["fats_g"], 68.0);
    assert_eq!(plan["meals"].as_array().unwrap().len(), 5);
    assert_eq!(plan["tips"].as_array().unwrap().len(), 8);
}

#[test]
fn test_plan_malformed_weight_propagates_nan() {
    // Garbage numerics are not an error: they flow through as NaN
    cli()
        .args(["plan", "--weight", "setenta", "--height", "175"])
        .args(["--age", "25", "--sex", "male", "--goal", "lose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("→ Calorias: NaN kcal/dia"))
        .stdout(predicate::str::contains("NaNg de aveia"));
}

#[test]
fn test_plan_nan_becomes_null_in_json() {
    // serde_json renders non-finite floats as null
    cli()
        .args(["plan", "--weight", "setenta", "--height", "175"])
        .args(["--age", "25", "--sex", "male", "--goal", "lose", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"calories\": null"));
}

#[test]
fn test_plan_empty_weight_is_rejected() {
    // An empty required field is the one guarded condition
    cli()
        .args(["plan", "--weight", "", "--height", "175"])
        .args(["--age", "25", "--sex", "male", "--goal", "lose"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IncompleteForm"))
        .stderr(predicate::str::contains("peso"));
}

#[test]
fn test_plan_missing_flag_is_usage_error() {
    cli()
        .args(["plan", "--weight", "75"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--height"));
}

#[test]
fn test_plan_unknown_goal_is_rejected() {
    cli()
        .args(["plan", "--weight", "75", "--height", "175"])
        .args(["--age", "25", "--sex", "male", "--goal", "shred"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown goal"));
}

#[test]
fn test_plan_body_fat_accepted_without_effect() {
    let with = cli()
        .args(["plan", "--weight", "75", "--height", "175"])
        .args(["--age", "25", "--sex", "male", "--goal", "lose"])
        .args(["--body-fat", "20", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let without = cli()
        .args(["plan", "--weight", "75", "--height", "175"])
        .args(["--age", "25", "--sex", "male", "--goal", "lose", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(with, without);
}

#[test]
fn test_config_hides_sections() {
    let temp_dir = setup_test_dir();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        "[output]\nshow_meals = false\nshow_tips = false\n",
    )
    .unwrap();

    cli()
        .args(["plan", "--weight", "75", "--height", "175"])
        .args(["--age", "25", "--sex", "male", "--goal", "lose"])
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Seus Macronutrientes Diários"))
        .stdout(predicate::str::contains("Plano de Refeições").not())
        .stdout(predicate::str::contains("Dicas Importantes").not())
        .stdout(predicate::str::contains("consulte um nutricionista"));
}

#[test]
fn test_config_json_format_default() {
    let temp_dir = setup_test_dir();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[output]\nformat = \"json\"\n").unwrap();

    let output = cli()
        .args(["plan", "--weight", "75", "--height", "175"])
        .args(["--age", "25", "--sex", "male", "--goal", "lose"])
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let plan: serde_json::Value =
        serde_json::from_slice(&output).expect("stdout should be valid JSON");
    assert_eq!(plan["calories"], 2172.0);
}

#[test]
fn test_config_malformed_is_error() {
    let temp_dir = setup_test_dir();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "output = 3\n").unwrap();

    cli()
        .args(["plan", "--weight", "75", "--height", "175"])
        .args(["--age", "25", "--sex", "male", "--goal", "lose"])
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Toml"));
}

#[test]
fn test_coach_full_session() {
    // weight, height, age, body fat (skip), sex, goal, then Enter to exit
    cli()
        .write_stdin("75\n175\n25\n\nm\n1\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Coach Nutricional"))
        .stdout(predicate::str::contains(
            "Preencha seus dados para receber um plano personalizado",
        ))
        .stdout(predicate::str::contains("Peso (kg) *"))
        .stdout(predicate::str::contains("Qual é seu objetivo? *"))
        .stdout(predicate::str::contains("Perder Gordura"))
        .stdout(predicate::str::contains("→ Calorias: 2172 kcal/dia"))
        .stdout(predicate::str::contains("Salada grande"));
}

#[test]
fn test_coach_recompute_keeps_entered_values() {
    // First pass computes a cut plan; 'r' goes back to the form with the
    // previous values offered as defaults; empty answers keep them and only
    // the goal changes, so the second plan is the maintain one.
    let output = cli()
        .write_stdin("75\n175\n25\n\nm\n1\nr\n\n\n\n\n\n3\n\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8_lossy(&output);
    assert!(stdout.contains("Peso (kg) * [75]:"));
    assert!(stdout.contains("Sexo * (m/f) [Masculino]:"));
    assert!(stdout.contains("→ Calorias: 2172 kcal/dia"));
    assert!(stdout.contains("→ Calorias: 2672 kcal/dia"));
    assert!(stdout.contains("Salada grande"));
    assert!(stdout.contains("batata doce"));
}

#[test]
fn test_coach_reprompts_until_required_field_given() {
    // Two empty answers for weight, then a real one
    cli()
        .write_stdin("\n\n75\n175\n25\n\nm\n1\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Campo obrigatório."))
        .stdout(predicate::str::contains("→ Calorias: 2172 kcal/dia"));
}

#[test]
fn test_coach_malformed_numeric_shows_nan() {
    cli()
        .write_stdin("abc\n175\n25\n\nm\n1\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("→ Calorias: NaN kcal/dia"));
}

#[test]
fn test_coach_eof_before_complete_form_fails() {
    cli()
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input closed"));
}
