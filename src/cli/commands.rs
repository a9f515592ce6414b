use std::io::{self, Write};

use crate::cli::Commands;
use crate::error::{Error, Result};
use crate::generator::{score, PasswordTransformer, RandomSource, RngSource, PASSWORD_LENGTH};
use crate::models::{Field, Strength, TransformationResult, TriviaAnswers};
use crate::utils::{ClipboardSink, SecureClipboard};

const MASK: char = '•';
const PRIVACY_NOTE: &str = "Your password is generated locally and never stored or transmitted.";

/// Execute a CLI command
pub fn execute_command(command: Commands) -> Result<()> {
    match command {
        Commands::Generate {
            pet,
            city,
            job,
            copy,
            hide,
            seed,
            clipboard_timeout,
        } => {
            let answers = resolve_answers(pet, city, job, prompt_answer)?;
            let mut clipboard = SecureClipboard::new(clipboard_timeout);
            let sink = copy.then_some(&mut clipboard as &mut dyn ClipboardSink);

            let stdout = io::stdout();
            let stderr = io::stderr();
            match seed {
                Some(seed) => generate_password(
                    &answers,
                    &mut RngSource::seeded(seed),
                    hide,
                    sink,
                    &mut stdout.lock(),
                    &mut stderr.lock(),
                ),
                None => generate_password(
                    &answers,
                    &mut RngSource::thread(),
                    hide,
                    sink,
                    &mut stdout.lock(),
                    &mut stderr.lock(),
                ),
            }
        }
        Commands::Strength { password } => {
            let score = score(&password);
            println!("{}", strength_line(Strength::from_score(score), score));
            Ok(())
        }
        Commands::Questions => {
            for (i, field) in Field::ALL.iter().enumerate() {
                println!("{}. {}", i + 1, field.question());
            }
            Ok(())
        }
        #[cfg(target_os = "linux")]
        Commands::HoldClipboard { timeout } => crate::utils::clipboard::hold_from_stdin(timeout),
    }
}

/// Message printed for a failed command
pub fn error_message(e: &Error) -> String {
    match e {
        Error::MissingField(fields) => format!(
            "Missing Information: please fill in all three fields (missing: {})",
            fields
                .iter()
                .map(|f| f.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ),
        _ => format!("Error: {}", e),
    }
}

/// Process exit status for a command result
pub fn exit_status(result: &Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

/// Prompt for a trivia answer without echoing it
fn prompt_answer(field: Field) -> Result<String> {
    Ok(rpassword::prompt_password(format!("{} ", field.question()))?)
}

/// Fill in answers not given on the command line using `prompt`
fn resolve_answers<F>(
    pet: Option<String>,
    city: Option<String>,
    job: Option<String>,
    mut prompt: F,
) -> Result<TriviaAnswers>
where
    F: FnMut(Field) -> Result<String>,
{
    let mut answers = TriviaAnswers::default();

    for (field, given) in Field::ALL.into_iter().zip([pet, city, job]) {
        let value = match given {
            Some(v) => v,
            None => prompt(field)?,
        };
        answers.set(field, value);
    }

    Ok(answers)
}

/// Generate a password, print it and optionally copy it
///
/// A failed copy is reported on `err` and does not fail the command.
fn generate_password<R, O, E>(
    answers: &TriviaAnswers,
    rng: &mut R,
    hide: bool,
    clipboard: Option<&mut dyn ClipboardSink>,
    out: &mut O,
    err: &mut E,
) -> Result<()>
where
    R: RandomSource,
    O: Write,
    E: Write,
{
    let result = PasswordTransformer::new().generate(answers, rng)?;
    tracing::info!(score = result.score(), "password generated");

    writeln!(out, "{}", render_report(&result, hide)?)?;

    if let Some(clipboard) = clipboard {
        let password_str = result
            .password()
            .as_str()
            .map_err(|_| Error::Internal("Generated password contains invalid UTF-8".to_string()))?;

        match clipboard.copy(password_str) {
            Ok(()) => match clipboard.clear_after() {
                Some(seconds) => writeln!(
                    out,
                    "Password copied to clipboard (will clear in {} seconds)",
                    seconds
                )?,
                None => writeln!(out, "Password copied to clipboard")?,
            },
            Err(e) => {
                tracing::warn!(error = %e, "clipboard copy failed");
                writeln!(err, "Warning: could not copy password to clipboard: {}", e)?;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", PRIVACY_NOTE)?;

    Ok(())
}

/// Terminal report for a generated password
fn render_report(result: &TransformationResult, hide: bool) -> Result<String> {
    let shown = if hide {
        MASK.to_string().repeat(PASSWORD_LENGTH)
    } else {
        result
            .password()
            .as_str()
            .map_err(|_| Error::Internal("Generated password contains invalid UTF-8".to_string()))?
            .to_string()
    };

    Ok(format!(
        "Your secure password: {}\n{}",
        shown,
        strength_line(result.strength(), result.score())
    ))
}

fn strength_line(strength: Strength, score: u8) -> String {
    format!("Strength: {} ({}/100)", strength, score)
}
