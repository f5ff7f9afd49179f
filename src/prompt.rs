use crate::error::AppError;
use crate::template::{Fields, TemplateKind};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// What happens when an answer is blank after trimming.
#[derive(Debug, Clone, Copy)]
pub enum OnBlank {
    Fail(&'static str),
    Default(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub on_blank: OnBlank,
}

const COMMON_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "description",
        label: "Description (shown in /help): ",
        on_blank: OnBlank::Fail("Description"),
    },
    FieldSpec {
        name: "prompt",
        label: "Main prompt/instructions: ",
        on_blank: OnBlank::Fail("Prompt"),
    },
];

const MULTI_ARG_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "arg_hint",
        label: "Argument hint (e.g., '<arg1> <arg2>'): ",
        on_blank: OnBlank::Default("<arg1> <arg2>"),
    },
    FieldSpec {
        name: "tools",
        label: "Allowed tools (e.g., 'CreateFile, Edit, View'): ",
        on_blank: OnBlank::Default("CreateFile, Edit"),
    },
];

/// Fields asked for `kind`, in prompt order.
pub fn field_specs(kind: TemplateKind) -> Vec<FieldSpec> {
    let mut specs = COMMON_FIELDS.to_vec();
    if kind == TemplateKind::MultiArg {
        specs.extend_from_slice(MULTI_ARG_FIELDS);
    }
    specs
}

/// Line-oriented question/answer over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Prints `label` and reads one line. End of input reads as an empty line.
    pub fn ask(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(answer.trim_end_matches(['\r', '\n']).to_string())
    }

    /// True only for a bare `y`/`Y` answer; padding counts as a no.
    pub fn confirm(&mut self, label: &str) -> io::Result<bool> {
        let answer = self.ask(label)?;
        Ok(answer.to_lowercase() == "y")
    }

    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }
}

/// Walks the field list for `kind`, stopping at the first required field
/// left blank.
pub fn prompt_fields<R: BufRead, W: Write>(
    kind: TemplateKind,
    prompter: &mut Prompter<R, W>,
) -> Result<Fields, AppError> {
    let mut fields = Fields::new();

    for spec in field_specs(kind) {
        let answer = prompter.ask(spec.label)?;
        let answer = answer.trim();

        let value = if answer.is_empty() {
            match spec.on_blank {
                OnBlank::Fail(what) => return Err(AppError::MissingField(what)),
                OnBlank::Default(fallback) => {
                    debug!(field = spec.name, fallback, "using default for blank answer");
                    fallback.to_string()
                }
            }
        } else {
            answer.to_string()
        };

        fields.insert(spec.name, value);
    }

    Ok(fields)
}
