use crate::error::AppError;
use crate::prompt::Prompter;
use std::fmt;
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const COMMANDS_DIR: &str = ".claude/commands";
const COMMAND_EXTENSION: &str = "md";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Project,
    User,
}

impl Scope {
    /// Project scope wins unless only `--user` was given. Both flags together
    /// are rejected.
    pub fn from_flags(project: bool, user: bool) -> Result<Self, AppError> {
        if project && user {
            return Err(AppError::InvalidArgument(
                "Cannot specify both --project and --user".to_string(),
            ));
        }
        Ok(if user { Scope::User } else { Scope::Project })
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Scope::Project => f.write_str("project"),
            Scope::User => f.write_str("user"),
        }
    }
}

/// Returns the commands directory for `scope`. Nothing is created here.
pub fn resolve_directory(scope: Scope) -> Result<PathBuf, AppError> {
    match scope {
        Scope::Project => Ok(PathBuf::from(COMMANDS_DIR)),
        Scope::User => {
            let home = dirs::home_dir().ok_or(AppError::HomeDir)?;
            Ok(home.join(COMMANDS_DIR))
        }
    }
}

/// A name is valid when, with every `-` and `_` removed, it is non-empty
/// and entirely alphanumeric.
pub fn validate_name(name: &str) -> Result<(), AppError> {
    let mut stripped = name.chars().filter(|c| *c != '-' && *c != '_').peekable();
    if stripped.peek().is_none() || !stripped.all(char::is_alphanumeric) {
        return Err(AppError::InvalidArgument(
            "Command name must be alphanumeric (with - or _)".to_string(),
        ));
    }
    Ok(())
}

pub fn command_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.{}", name, COMMAND_EXTENSION))
}

/// Writes `content` to `<dir>/<name>.md`, creating `dir` as needed. An
/// existing file is only replaced after a `y` confirmation; anything else
/// ends with `AppError::InteractiveAbort`.
pub fn write_command<R: BufRead, W: Write>(
    dir: &Path,
    name: &str,
    content: &str,
    prompter: &mut Prompter<R, W>,
) -> Result<PathBuf, AppError> {
    if !dir.exists() {
        debug!(dir = %dir.display(), "creating commands directory");
        fs::create_dir_all(dir)?;
    }

    let path = command_path(dir, name);

    if path.exists() {
        let question = format!("\n{} already exists. Overwrite? (y/N): ", path.display());
        if !prompter.confirm(&question)? {
            info!(path = %path.display(), "overwrite declined");
            return Err(AppError::InteractiveAbort("Cancelled.".to_string()));
        }
    }

    fs::write(&path, content)?;
    info!(path = %path.display(), bytes = content.len(), "command written");
    Ok(path)
}
