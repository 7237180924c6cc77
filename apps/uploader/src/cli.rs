use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use lexopt::prelude::*;

pub const USAGE: &str = "\
Usage: resume-uploader [OPTIONS] FILE...

Uploads each resume (.pdf or .docx) to the parsing service and prints the result.

Options:
  -e, --endpoint URL   Base URL of the parsing service (env: PARSE_API_URL)
  -t, --timeout SECS   Request timeout in seconds (env: PARSE_TIMEOUT_SECS)
  -c, --compact        Print results on a single line
  -h, --help           Show this help
";

#[derive(Debug, Default, PartialEq)]
pub struct CliArgs {
    pub endpoint: Option<String>,
    pub timeout: Option<Duration>,
    pub compact: bool,
    pub help: bool,
    pub files: Vec<PathBuf>,
}

/// Parses arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> Result<CliArgs, lexopt::Error>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let mut parsed = CliArgs::default();
    let mut parser = lexopt::Parser::from_args(args);

    while let Some(arg) = parser.next()? {
        match arg {
            Short('e') | Long("endpoint") => {
                parsed.endpoint = Some(parser.value()?.string()?);
            }
            Short('t') | Long("timeout") => {
                let secs: u64 = parser.value()?.parse()?;
                if secs == 0 {
                    return Err(lexopt::Error::Custom(
                        "--timeout must be at least 1 second".into(),
                    ));
                }
                parsed.timeout = Some(Duration::from_secs(secs));
            }
            Short('c') | Long("compact") => parsed.compact = true,
            Short('h') | Long("help") => parsed.help = true,
            Value(path) => parsed.files.push(PathBuf::from(path)),
            _ => return Err(arg.unexpected()),
        }
    }

    Ok(parsed)
}
