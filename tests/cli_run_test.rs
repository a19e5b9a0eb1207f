#![cfg(feature = "cli")]

use anyhow::Result;
use cake_shop::config::cli::{run_cli, CliRun};
use cake_shop::{CakeError, CliConfig, ConsoleSink};
use clap::Parser;
use tempfile::TempDir;

fn console_lines(run: CliRun<Vec<u8>>) -> Result<Vec<String>> {
    let (console, _) = run.output.into_parts();
    let text = String::from_utf8(console.into_inner())?;
    Ok(text.lines().map(str::to_string).collect())
}

fn run_with(args: &[&str]) -> cake_shop::Result<CliRun<Vec<u8>>> {
    let mut argv = vec!["cake-shop"];
    argv.extend_from_slice(args);
    run_cli(&CliConfig::parse_from(argv), ConsoleSink::new(Vec::new()))
}

fn write_config(temp_dir: &TempDir, content: &str) -> Result<String> {
    let path = temp_dir.path().join("bakery.toml");
    std::fs::write(&path, content)?;
    Ok(path.to_str().unwrap().to_string())
}

/// With no flags and no file, the all-default cake is printed to the console.
#[test]
fn test_default_cake_without_input() -> Result<()> {
    let run = run_with(&[])?;

    assert!(run.page_path.is_none());
    assert_eq!(console_lines(run)?, vec!["Type:Plain Layers:1 Ingredients: "]);
    Ok(())
}

/// A flag-built cake is printed after the cakes from the bakery file.
#[test]
fn test_flag_cake_joins_file_cakes() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = write_config(
        &temp_dir,
        r#"
[defaults]
type = "Sponge"

[[cakes]]
type = "Fruit"
layers = 2
ingredients = ["flour", "sugar", "sultanas", "eggs"]
"#,
    )?;

    let run = run_with(&[
        "--config",
        &config_path,
        "--layers",
        "3",
        "--ingredients",
        "flour,lemon",
        "--bake",
    ])?;

    assert_eq!(run.report.cakes.len(), 2);
    assert_eq!(
        console_lines(run)?,
        vec![
            "The Fruit cake is baking.",
            "Type:Fruit Layers:2 Ingredients: flour sugar sultanas eggs",
            "The Sponge cake is baking.",
            "Type:Sponge Layers:3 Ingredients: flour lemon",
        ]
    );
    Ok(())
}

/// Flags win over the file's [output] table, and the page always holds the selected element.
#[test]
fn test_flags_override_output_table() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let base = temp_dir.path().to_str().unwrap().replace('\\', "/");
    let config_path = write_config(
        &temp_dir,
        &format!(
            r##"
[page]
elements = ["output"]

[output]
selector = "#output"
html_path = "{}/from-file.html"

[[cakes]]
type = "Carrot"
"##,
            base
        ),
    )?;
    let cli_html = format!("{}/from-flag.html", base);

    let run = run_with(&[
        "--config",
        &config_path,
        "--selector",
        "#banner",
        "--html-out",
        &cli_html,
    ])?;

    assert_eq!(run.page_path.as_deref(), Some(std::path::Path::new(&cli_html)));
    assert!(!temp_dir.path().join("from-file.html").exists());

    let page = run.output.page().expect("page attached");
    assert_eq!(page.text_of("#banner")?, "Type:Carrot Layers:1 Ingredients: ");
    assert_eq!(page.text_of("#output")?, "");

    let html = std::fs::read_to_string(&cli_html)?;
    assert!(html.contains("<div id=\"banner\">Type:Carrot Layers:1 Ingredients: </div>"));
    assert!(console_lines(run)?.is_empty());
    Ok(())
}

/// A file that only names a selector takes its page path from --html-out.
#[test]
fn test_file_selector_with_flag_html_out() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = write_config(&temp_dir, "[output]\nselector = \"#result\"\n")?;
    let html_out = temp_dir.path().join("site").join("index.html");

    let run = run_with(&[
        "--config",
        &config_path,
        "--html-out",
        html_out.to_str().unwrap(),
    ])?;

    assert_eq!(run.page_path.as_deref(), Some(html_out.as_path()));
    let page = run.output.page().expect("page attached");
    assert_eq!(page.text_of("#result")?, "Type:Plain Layers:1 Ingredients: ");
    assert!(std::fs::read_to_string(&html_out)?.contains("<div id=\"result\">"));
    Ok(())
}

/// Failures carry the exit code of their severity.
#[test]
fn test_exit_codes_follow_severity() -> Result<()> {
    let err = run_with(&["--selector", "output"]).unwrap_err();
    assert!(matches!(err, CakeError::InvalidConfigValueError { .. }));
    assert_eq!(err.exit_code(), 1);

    let temp_dir = TempDir::new()?;
    let bad_cakes = write_config(&temp_dir, "[[cakes]]\nlayers = -1\n")?;
    let err = run_with(&["--config", &bad_cakes]).unwrap_err();
    assert!(matches!(err, CakeError::InvalidFieldType { .. }));
    assert_eq!(err.exit_code(), 1);

    let missing = temp_dir.path().join("missing.toml");
    let err = run_with(&["--config", missing.to_str().unwrap()]).unwrap_err();
    assert!(matches!(err, CakeError::IoError(_)));
    assert_eq!(err.exit_code(), 3);
    Ok(())
}
