use std::io::{self, BufRead, Write};

/// Where the printer password comes from.
pub trait Credentials {
    fn password(&self) -> io::Result<String>;
}

pub struct Static(pub String);

impl Credentials for Static {
    fn password(&self) -> io::Result<String> {
        Ok(self.0.clone())
    }
}

/// Asks on stdout and reads one line from stdin.
pub struct Prompt;

impl Credentials for Prompt {
    fn password(&self) -> io::Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "Password: ")?;
        stdout.flush()?;
        read_password(io::stdin().lock())
    }
}

fn read_password(mut input: impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "no password given",
        ));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
