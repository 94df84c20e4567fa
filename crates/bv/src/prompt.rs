//! Interactive prompt flow for the per-beat inputs.

use std::io::{self, BufRead, Write};

use beatv_core::stats::Answers;

/// Asks the three beat questions on stdin/stdout and returns the answers.
pub fn collect_answers() -> io::Result<Answers> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let devs = ask(&mut input, &mut output, "How many devs did you have for this beat?")?;
    let points = ask(
        &mut input,
        &mut output,
        "How many points did you commit to for this beat?",
    )?;
    let days = ask(&mut input, &mut output, "How many days did you have this beat?")?;

    Ok(Answers { devs, points, days })
}

/// Prints one question and reads one line of free-text input.
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<f64> {
    write!(output, "{} ", question)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(parse_answer(&line))
}

/// Free-text answers are not validated: anything that fails to parse as a
/// number becomes NaN and flows through the downstream arithmetic unguarded.
fn parse_answer(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}
