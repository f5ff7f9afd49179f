mod cli;
mod error;
mod prompt;
mod scaffold;
mod template;

use clap::Parser;
use cli::Cli;
use error::AppError;
use prompt::Prompter;
use scaffold::Scope;
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::{debug, info};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    match run(cli, &mut prompter) {
        Ok(()) => {}
        Err(AppError::InteractiveAbort(msg)) => println!("{}", msg),
        Err(e) => {
            println!("{}", error_line(&e, io::stdout().is_terminal()));
            std::process::exit(e.exit_code());
        }
    }
}

/// `Error: <message>`, with the prefix in red only when writing to a terminal.
fn error_line(err: &AppError, colour: bool) -> String {
    if colour {
        format!("\x1b[31;1mError:\x1b[0m {}", err)
    } else {
        format!("Error: {}", err)
    }
}

fn run<R: BufRead, W: Write>(cli: Cli, prompter: &mut Prompter<R, W>) -> Result<(), AppError> {
    debug!(?cli, "arguments parsed");
    template::verify_catalog()?;

    let scope = Scope::from_flags(cli.project, cli.user)?;
    scaffold::validate_name(&cli.name)?;

    prompter.say(&format!("\nCreating slash command: /{}", cli.name))?;
    prompter.say(&format!("Type: {}", cli.template))?;
    prompter.say(&format!("Scope: {}", scope))?;
    prompter.say("")?;

    let fields = prompt::prompt_fields(cli.template, prompter)?;
    debug!(count = fields.len(), "fields collected");
    let content = template::render(cli.template, &fields)?;

    let dir = scaffold::resolve_directory(scope)?;
    info!(dir = %dir.display(), %scope, "resolved commands directory");
    let path = scaffold::write_command(&dir, &cli.name, &content, prompter)?;

    prompter.say(&format!("\n✅ Created slash command: {}", path.display()))?;
    prompter.say(&format!("\nYou can now use it with: /{}", cli.name))?;
    prompter.say(&format!(
        "\nEdit the file to customize further: {}",
        path.display()
    ))?;

    Ok(())
}
