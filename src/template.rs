use crate::error::AppError;
use clap::ValueEnum;
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Placeholder name to collected value.
pub type Fields = HashMap<&'static str, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum TemplateKind {
    Basic,
    FileAnalysis,
    MultiArg,
    GitWorkflow,
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => Ok(()),
        }
    }
}

#[derive(Debug)]
pub struct Template {
    pub body: &'static str,
    pub placeholders: &'static [&'static str],
}

const BASIC: &str = "---
description: {description}
---

{prompt}

$ARGUMENTS
";

const FILE_ANALYSIS: &str = "---
description: {description}
argument-hint: <filepath>
allowed-tools: [View]
---

Analyze the file: @$1

{prompt}

Provide specific recommendations and actionable feedback.
";

const MULTI_ARG: &str = "---
description: {description}
argument-hint: {arg_hint}
allowed-tools: [{tools}]
---

Execute command with parameters:

**Argument 1:** $1
**Argument 2:** $2

{prompt}
";

const GIT_WORKFLOW: &str = "---
description: {description}
allowed-tools: [Bash]
---

Analyze the git repository state:

Current status:
!git status

Recent commits:
!git log --oneline -5

{prompt}
";

lazy_static! {
    static ref RE_PLACEHOLDER: Regex = Regex::new(r"\{([a-z_]+)\}").unwrap();
}

lazy_static! {
    static ref CATALOG: HashMap<TemplateKind, Template> = {
        let mut m = HashMap::new();
        m.insert(
            TemplateKind::Basic,
            Template {
                body: BASIC,
                placeholders: &["description", "prompt"],
            },
        );
        m.insert(
            TemplateKind::FileAnalysis,
            Template {
                body: FILE_ANALYSIS,
                placeholders: &["description", "prompt"],
            },
        );
        m.insert(
            TemplateKind::MultiArg,
            Template {
                body: MULTI_ARG,
                placeholders: &["description", "prompt", "arg_hint", "tools"],
            },
        );
        m.insert(
            TemplateKind::GitWorkflow,
            Template {
                body: GIT_WORKFLOW,
                placeholders: &["description", "prompt"],
            },
        );
        m
    };
}

pub fn get(kind: TemplateKind) -> Result<&'static Template, AppError> {
    CATALOG
        .get(&kind)
        .ok_or_else(|| AppError::Template(format!("no template registered for '{}'", kind)))
}

fn body_placeholders(body: &str) -> BTreeSet<&str> {
    RE_PLACEHOLDER
        .captures_iter(body)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// Checks that every kind has a template and that each body uses exactly
/// the placeholders it declares.
pub fn verify_catalog() -> Result<(), AppError> {
    for &kind in TemplateKind::value_variants() {
        let template = get(kind)?;
        let declared: BTreeSet<&str> = template.placeholders.iter().copied().collect();
        let used = body_placeholders(template.body);
        if declared != used {
            return Err(AppError::Template(format!(
                "template '{}' declares [{}] but its body uses [{}]",
                kind,
                declared.iter().join(", "),
                used.iter().join(", ")
            )));
        }
    }
    Ok(())
}

/// Fills the template for `kind` from `fields`. Every declared placeholder
/// must have a value; extra fields are ignored.
pub fn render(kind: TemplateKind, fields: &Fields) -> Result<String, AppError> {
    let template = get(kind)?;

    let missing: Vec<&str> = template
        .placeholders
        .iter()
        .copied()
        .filter(|name| !fields.contains_key(*name))
        .collect();
    if !missing.is_empty() {
        return Err(AppError::Template(format!(
            "template '{}' needs values for: {}",
            kind,
            missing.iter().join(", ")
        )));
    }

    Ok(RE_PLACEHOLDER
        .replace_all(template.body, |caps: &Captures| {
            fields.get(&caps[1]).cloned().unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned())
}
