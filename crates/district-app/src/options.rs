//! Command-line options.
//!
//! Usage:
//!   district [config.json] [--seconds N] [--realtime]

use std::path::PathBuf;

use crate::error::AppError;

pub const USAGE: &str = "district: headless DISTRICT session driven by the autopilot\n\
     \n\
     Usage: district [config.json] [--seconds N] [--realtime]\n\
     \n\
       config.json   Session config (seed, scenario, tuning); defaults when omitted\n\
       --seconds N   Simulated seconds to run (default: 60)\n\
       --realtime    Run on the 60Hz game loop thread instead of a fixed clock\n\
     \n\
     Logging is controlled with RUST_LOG (default: info).";

#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    pub config: Option<PathBuf>,
    pub seconds: f32,
    pub realtime: bool,
    pub help: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            config: None,
            seconds: 60.0,
            realtime: false,
            help: false,
        }
    }
}

impl RunOptions {
    /// Parse arguments, program name excluded.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self, AppError> {
        let mut options = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seconds" | "-s" => {
                    let value = args
                        .next()
                        .ok_or_else(|| AppError::Usage("--seconds needs a value".into()))?;
                    options.seconds = value
                        .parse()
                        .ok()
                        .filter(|s: &f32| s.is_finite() && *s >= 0.0)
                        .ok_or_else(|| AppError::Usage(format!("invalid --seconds: {value}")))?;
                }
                "--realtime" => options.realtime = true,
                "--help" | "-h" => options.help = true,
                other if other.starts_with('-') => {
                    return Err(AppError::Usage(format!("unknown option: {other}")));
                }
                path => {
                    if options.config.is_some() {
                        return Err(AppError::Usage(format!("unexpected argument: {path}")));
                    }
                    options.config = Some(PathBuf::from(path));
                }
            }
        }
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<RunOptions, AppError> {
        RunOptions::from_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_defaults() {
        assert_eq!(parse(&[]).unwrap(), RunOptions::default());
    }

    #[test]
    fn test_all_options() {
        let options = parse(&["session.json", "--seconds", "12.5", "--realtime"]).unwrap();
        assert_eq!(options.config, Some(PathBuf::from("session.json")));
        assert_eq!(options.seconds, 12.5);
        assert!(options.realtime);
    }

    #[test]
    fn test_bad_seconds() {
        assert!(matches!(parse(&["--seconds"]), Err(AppError::Usage(_))));
        assert!(matches!(parse(&["--seconds", "soon"]), Err(AppError::Usage(_))));
        assert!(matches!(parse(&["--seconds", "-3"]), Err(AppError::Usage(_))));
    }

    #[test]
    fn test_unknown_flag_and_extra_path() {
        assert!(matches!(parse(&["--turbo"]), Err(AppError::Usage(_))));
        assert!(matches!(parse(&["a.json", "b.json"]), Err(AppError::Usage(_))));
    }
}
