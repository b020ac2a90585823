use std::ffi::CString;

use log::debug;

use crate::config::FtConfig;
use crate::constants::{ARGS_DELIMITER, LENGTH_DELIMITER};
use crate::error::{Error, Result};
use crate::utils::Loggable;

/// A single integer together with its converted string.
#[derive(Debug)]
pub struct Conversion {
    input: i32,
    output: CString,
}

impl Conversion {
    pub fn new(input: i32) -> Result<Self> {
        let output = ft_itoa::convert(input)?;
        Ok(Self { input, output })
    }

    pub fn input(&self) -> i32 {
        self.input
    }

    pub fn output(&self) -> &CString {
        &self.output
    }

    fn render(&self, show_length: bool) -> String {
        let mut line = String::from_utf8_lossy(self.output.as_bytes()).into_owned();
        if show_length {
            line.push_str(LENGTH_DELIMITER);
            line.push_str(&ft_itoa::formatted_len(self.input).to_string());
        }
        line
    }
}

impl Loggable for Conversion {
    fn log(&self) -> String {
        format!(
            "converted {} into {:?} ({} bytes with terminator)",
            self.input,
            self.output,
            self.output.as_bytes_with_nul().len()
        )
    }
}

/// Converts every argument and joins the results with the configured separator.
///
/// A leading `--` is skipped so negative values can follow it. Stops at the
/// first argument that is not a valid `i32`.
pub fn run<I, S>(config: &FtConfig, args: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut args = args.into_iter().peekable();
    if args.peek().map_or(false, |arg| arg.as_ref() == ARGS_DELIMITER) {
        args.next();
    }

    let mut lines = Vec::new();

    for arg in args {
        let arg = arg.as_ref();
        let input = arg.parse::<i32>().map_err(|err| Error::parse(arg, err))?;
        let conversion = Conversion::new(input)?;
        debug!("{}", conversion.log());
        lines.push(conversion.render(config.show_length()));
    }

    Ok(lines.join(config.separator()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_with_length() {
        let conversion = Conversion::new(-120).unwrap();
        assert_eq!(conversion.render(false), "-120");
        assert_eq!(conversion.render(true), "-120\t4");
    }

    #[test]
    fn test_run_skips_leading_delimiter() {
        let config = FtConfig::default();
        assert_eq!(run(&config, ["--", "-3", "4"]).unwrap(), "-3\n4");
        assert_eq!(run(&config, ["--"]).unwrap(), "");
        assert_eq!(run(&config, ["1", "--"]).unwrap_err().argument(), Some("--"));
    }

    #[test]
    fn test_log_line() {
        let conversion = Conversion::new(i32::MIN).unwrap();
        assert_eq!(
            conversion.log(),
            "converted -2147483648 into \"-2147483648\" (12 bytes with terminator)"
        );
    }
}
