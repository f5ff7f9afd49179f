use crate::template::TemplateKind;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Initialize a new slash command")]
pub struct Cli {
    /// Command name (without /)
    pub name: String,

    /// Create project-level command (.claude/commands/)
    #[arg(long)]
    pub project: bool,

    /// Create user-level command (~/.claude/commands/)
    #[arg(long)]
    pub user: bool,

    /// Template type to use
    #[arg(long, value_enum, default_value_t = TemplateKind::Basic)]
    pub template: TemplateKind,
}
