use crate::commands::{exit_code, render_errors, render_split};
use crate::infra::display_raw;
use rent_split::billing::{BillField, BillSplitSession, SplitView};
use rent_split::config::AppConfig;
use rent_split::error::AppError;
use std::io::{BufRead, Write};
use std::process::ExitCode;

pub(crate) fn run_interactive() -> Result<ExitCode, AppError> {
    let config = AppConfig::load()?;
    let mut session = BillSplitSession::new(config.form.to_form());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let accepted = prompt_loop(&mut session, &mut stdin.lock(), &mut stdout.lock())?;

    Ok(exit_code(accepted))
}

/// Asks for every field, submits, and repeats while the user wants to. An empty answer keeps the
/// current value and `-` clears it. Returns whether a result is on screen at the end.
pub(crate) fn prompt_loop<R: BufRead, W: Write>(
    session: &mut BillSplitSession,
    input: &mut R,
    out: &mut W,
) -> std::io::Result<bool> {
    writeln!(out, "Calculadora do aluguel")?;

    loop {
        for field in BillField::ALL {
            let current = session.form().get(field).map(display_raw).unwrap_or_default();
            write!(out, "{} [{}]: ", field.label(), current)?;
            out.flush()?;

            let Some(answer) = read_answer(input)? else {
                return Ok(session.last_result().is_some());
            };
            match answer.as_str() {
                "" => {}
                "-" => session.clear(field),
                value => session.set(field, value),
            }
        }

        match session.submit() {
            Ok(submission) => {
                let view = SplitView::from(&submission.result);
                writeln!(out)?;
                render_split(out, &submission.input, &view)?;
            }
            Err(errors) => {
                writeln!(out)?;
                render_errors(out, &errors)?;
                if session.last_result().is_some() {
                    writeln!(out, "Resultado anterior mantido.")?;
                }
            }
        }

        write!(out, "Calcular novamente? (s/N): ")?;
        out.flush()?;
        match read_answer(input)? {
            Some(answer) if answer.eq_ignore_ascii_case("s") => continue,
            _ => return Ok(session.last_result().is_some()),
        }
    }
}

fn read_answer<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
