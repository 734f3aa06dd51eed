use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use anyhow::{bail, Context, Result};

use crate::{metrics::RunMetrics, models::FootSide, report};

use super::FootLabeler;

const QUESTION: &str = "Enter if (foot 1) is left [l/L] or right [r/R]: ";
const RETRY: &str = "Option Does Not Exist. Retry: ";

/// Shows each run's metrics and asks the operator for foot one's side,
/// re-asking until the answer parses.
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl ConsolePrompt<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self) -> Result<FootSide> {
        let mut prompt = QUESTION;
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read foot label")?;
            if read == 0 {
                bail!("input closed before foot one was labelled");
            }
            if let Some(side) = FootSide::parse(&line) {
                return Ok(side);
            }
            prompt = RETRY;
        }
    }
}

impl<R: BufRead, W: Write> FootLabeler for ConsolePrompt<R, W> {
    fn foot_one_side(&mut self, run: &RunMetrics) -> Result<FootSide> {
        writeln!(self.output, "{}", report::run_report(run))?;
        self.ask()
    }
}
