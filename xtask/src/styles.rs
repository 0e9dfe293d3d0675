use std::collections::HashMap;
use std::fs;
use std::path::Path;

use button_ui::{ButtonConfig, ButtonShape, ButtonSize, ButtonStyles, ButtonType, StylesError};
use serde::Serialize;

pub(crate) const DEFAULT_STYLES_PATH: &str = "crates/button_ui/styles/button.toml";

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Problem {
    pub(crate) check: String,
    pub(crate) path: String,
    pub(crate) message: String,
    pub(crate) line: Option<usize>,
}

impl Problem {
    fn new(
        check: &str,
        path: impl Into<String>,
        message: impl Into<String>,
        line: Option<usize>,
    ) -> Self {
        Self {
            check: check.to_string(),
            path: path.into(),
            message: message.into(),
            line,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct MatrixRow {
    #[serde(flatten)]
    config: ButtonConfig,
    class: String,
    disabled_class: String,
}

pub(crate) fn check_styles(root: &Path, rel_paths: &[String]) -> Result<(), String> {
    let mut problems = Vec::new();
    for rel_path in rel_paths {
        problems.extend(validate_styles_file(root, rel_path));
    }

    if problems.is_empty() {
        println!("OK");
        return Ok(());
    }
    problems.sort_by(|a, b| {
        (&a.path, a.line.unwrap_or(0), &a.check, &a.message).cmp(&(
            &b.path,
            b.line.unwrap_or(0),
            &b.check,
            &b.message,
        ))
    });
    print_problems(&problems);
    println!("\nFAILED: {} issue(s)", problems.len());
    Err("button styles validation failed".to_string())
}

pub(crate) fn print_matrix(root: &Path, rel_path: &str) -> Result<(), String> {
    let raw = fs::read_to_string(root.join(rel_path))
        .map_err(|err| format!("failed to read {rel_path}: {err}"))?;
    let styles = ButtonStyles::from_toml_str(&raw).map_err(|err| format!("{rel_path}: {err}"))?;
    let json = serde_json::to_string_pretty(&class_matrix(&styles))
        .map_err(|err| format!("failed to serialize class matrix: {err}"))?;
    println!("{json}");
    Ok(())
}

pub(crate) fn class_matrix(styles: &ButtonStyles) -> Vec<MatrixRow> {
    ButtonConfig::all()
        .map(|config| MatrixRow {
            config,
            class: styles.class_for(config, false),
            disabled_class: styles.class_for(config, true),
        })
        .collect()
}

fn validate_styles_file(root: &Path, rel_path: &str) -> Vec<Problem> {
    let Ok(raw) = fs::read_to_string(root.join(rel_path)) else {
        return vec![Problem::new(
            "styles-read",
            rel_path,
            "failed to read button styles",
            None,
        )];
    };
    validate_styles_text(rel_path, &raw)
}

pub(crate) fn validate_styles_text(rel_path: &str, raw: &str) -> Vec<Problem> {
    let styles = match ButtonStyles::from_toml_str(raw) {
        Ok(styles) => styles,
        Err(StylesError::Parse(err)) => {
            let line = err.span().map(|span| line_of_offset(raw, span.start));
            return vec![Problem::new(
                "styles-parse",
                rel_path,
                err.message().to_string(),
                line,
            )];
        }
        Err(err @ StylesError::SchemaMismatch { .. }) => {
            return vec![Problem::new(
                "styles-schema",
                rel_path,
                err.to_string(),
                line_of_key(raw, "schema_version"),
            )];
        }
    };

    let mut problems = Vec::new();
    problems.extend(validate_distinct_variants(rel_path, &styles));
    problems.extend(validate_no_duplicate_classes(rel_path, &styles));
    problems
}

/// Every shape/size pair must resolve to its own class list.
fn validate_distinct_variants(rel_path: &str, styles: &ButtonStyles) -> Vec<Problem> {
    let mut seen: HashMap<String, ButtonConfig> = HashMap::new();
    let mut problems = Vec::new();
    for shape in ButtonShape::ALL {
        for size in ButtonSize::ALL {
            let config = ButtonConfig::new(shape, size, ButtonType::Button);
            let class = styles.class_for(config, false);
            if let Some(previous) = seen.get(&class) {
                problems.push(Problem::new(
                    "styles-distinct",
                    rel_path,
                    format!(
                        "`{} {}` renders the same classes as `{} {}`",
                        shape, size, previous.shape, previous.size
                    ),
                    None,
                ));
            } else {
                seen.insert(class, config);
            }
        }
    }
    problems
}

fn validate_no_duplicate_classes(rel_path: &str, styles: &ButtonStyles) -> Vec<Problem> {
    let mut entries = vec![
        ("base".to_string(), styles.base.as_str()),
        ("disabled".to_string(), styles.disabled.as_str()),
    ];
    entries.extend(
        ButtonShape::ALL
            .into_iter()
            .map(|shape| (format!("shape.{shape}"), styles.shape_class(shape))),
    );
    entries.extend(
        ButtonSize::ALL
            .into_iter()
            .map(|size| (format!("size.{size}"), styles.size_class(size))),
    );

    let mut problems = Vec::new();
    for (key, classes) in entries {
        let mut seen = Vec::new();
        for class in classes.split_whitespace() {
            if seen.contains(&class) {
                problems.push(Problem::new(
                    "styles-duplicate",
                    rel_path,
                    format!("`{key}` repeats class `{class}`"),
                    None,
                ));
            } else {
                seen.push(class);
            }
        }
    }
    problems
}

fn print_problems(problems: &[Problem]) {
    for p in problems {
        let loc = match p.line {
            Some(line) => format!("{}:{line}", p.path),
            None => p.path.clone(),
        };
        println!("[{}] {} - {}", p.check, loc, p.message);
    }
}

fn line_of_offset(raw: &str, offset: usize) -> usize {
    raw[..offset.min(raw.len())].matches('\n').count() + 1
}

fn line_of_key(raw: &str, key: &str) -> Option<usize> {
    raw.lines()
        .position(|line| line.trim_start().starts_with(key))
        .map(|idx| idx + 1)
}
