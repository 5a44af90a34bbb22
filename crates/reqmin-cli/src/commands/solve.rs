use std::io::{self, BufRead, Write};

use reqmin_resolver::solve::solve;
use reqmin_util::errors::{ReqminError, ReqminResult};

pub fn exec(requirements: &[String], prompt: &str) -> ReqminResult<()> {
    let line = if requirements.is_empty() {
        read_line(prompt)?
    } else {
        requirements.join(" ")
    };
    println!("{}", solve(&line)?);
    Ok(())
}

fn read_line(prompt: &str) -> ReqminResult<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{prompt}").map_err(ReqminError::Io)?;
    stdout.flush().map_err(ReqminError::Io)?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(ReqminError::Io)?;
    Ok(line)
}
