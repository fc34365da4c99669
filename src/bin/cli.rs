//! Argument parsing and execution for the `marklog` binary.
//!
//! `marklog` configures a [`LoggingConfig`] from the environment and its
//! flags, then emits a single event through a named [`Logger`]. It is handy
//! in shell scripts that want the same line format as instrumented programs.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use logging::{
    ColorMode, Detail, Level, LevelFilter, LogCall, Logger, LoggingConfig, LoggingSettings,
    Markers, Sink,
};

/// Program name used in diagnostics.
pub const PROGRAM_NAME: &str = "marklog";

/// Exit status for usage errors detected by the parser.
const USAGE_EXIT: u8 = 2;

/// Exit status for runtime failures.
const FAILURE_EXIT: u8 = 1;

/// Emit one structured log line.
///
/// Details that parse as JSON are kept as JSON values; everything else is
/// passed through as text.
#[derive(Parser, Debug)]
#[command(name = PROGRAM_NAME)]
#[command(about = "Emit one structured log line")]
#[command(version)]
pub struct Cli {
    /// Minimum level that is emitted (verbose, debug, info, warn, error, none).
    #[arg(long, value_name = "LEVEL")]
    pub threshold: Option<LevelFilter>,

    /// Level of the emitted call.
    #[arg(long, value_name = "LEVEL", default_value_t = Level::Info)]
    pub level: Level,

    /// Logger name shown in the line prefix.
    #[arg(long, value_name = "NAME", default_value = PROGRAM_NAME)]
    pub logger: String,

    /// Marker attached to the call; may be repeated.
    #[arg(long = "marker", value_name = "KEY=VALUE", value_parser = parse_marker)]
    pub markers: Vec<(String, String)>,

    /// When to color the line prefix (auto, always, never).
    #[arg(long, value_name = "MODE")]
    pub color: Option<ColorMode>,

    /// The log message.
    pub message: String,

    /// Values rendered after the message.
    pub details: Vec<String>,
}

impl Cli {
    /// Applies flag overrides on top of environment settings.
    fn settings(&self, base: LoggingSettings) -> LoggingSettings {
        let mut settings = base;
        if let Some(threshold) = self.threshold {
            settings = settings.with_level(threshold);
        }
        if let Some(color) = self.color {
            settings = settings.with_color(color);
        }
        settings
    }

    /// Builds the call from the message, markers and details.
    fn call(&self) -> LogCall {
        let details = self.details.iter().map(|raw| parse_detail(raw));
        if self.markers.is_empty() {
            LogCall::message(self.message.as_str()).details_from(details)
        } else {
            let markers: Markers = self.markers.iter().cloned().collect();
            LogCall::marked(markers, self.message.as_str()).details_from(details)
        }
    }
}

fn parse_marker(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.to_owned(), value.to_owned())),
        Some(_) => Err(format!("marker key must not be empty in `{raw}`")),
        None => Err(format!("expected KEY=VALUE, found `{raw}`")),
    }
}

fn parse_detail(raw: &str) -> Detail {
    serde_json::from_str::<serde_json::Value>(raw).map_or_else(|_| Detail::from(raw), Detail::from)
}

/// Parses `args`, emits the requested event and maps the outcome to an exit
/// status.
///
/// `env` looks up environment variables and `console` builds the output sink
/// for the resolved color mode. Help and version text go to `stdout`;
/// diagnostics go to `stderr`.
pub fn run_with<I, Env, Console, Out, Err>(
    args: I,
    env: Env,
    console: Console,
    stdout: &mut Out,
    stderr: &mut Err,
) -> ExitCode
where
    I: IntoIterator,
    I::Item: Into<OsString> + Clone,
    Env: Fn(&str) -> Option<String>,
    Console: FnOnce(ColorMode) -> Box<dyn Sink>,
    Out: Write,
    Err: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) => {
            let rendered = error.render().to_string();
            return if error.use_stderr() {
                let _ = write!(stderr, "{rendered}");
                ExitCode::from(USAGE_EXIT)
            } else {
                let _ = write!(stdout, "{rendered}");
                ExitCode::SUCCESS
            };
        }
    };

    let base = match LoggingSettings::from_lookup(env) {
        Ok(settings) => settings,
        Err(error) => return fail(stderr, &error),
    };
    let settings = cli.settings(base);

    let config = Arc::new(LoggingConfig::silent(settings.level));
    config.add_sinks([console(settings.color)]);

    let logger = match Logger::with_config(&cli.logger, config) {
        Ok(logger) => logger,
        Err(error) => return fail(stderr, &error),
    };

    match logger.try_log(cli.level, cli.call()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => fail(stderr, &error),
    }
}

fn fail<Err: Write>(stderr: &mut Err, error: &dyn std::error::Error) -> ExitCode {
    let _ = writeln!(stderr, "{PROGRAM_NAME}: {error}");
    ExitCode::from(FAILURE_EXIT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use logging::MemorySink;

    struct Run {
        exit: ExitCode,
        stdout: String,
        stderr: String,
        events: Vec<logging::LogEvent>,
        color: Option<ColorMode>,
    }

    fn invoke(args: &[&str], env: &[(&str, &str)]) -> Run {
        let captured = MemorySink::new();
        let sink = captured.clone();
        let chosen = std::cell::Cell::new(None);
        let vars: Vec<(String, String)> = env
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let mut argv = vec![PROGRAM_NAME];
        argv.extend_from_slice(args);

        let exit = run_with(
            argv,
            |name| {
                vars.iter()
                    .find(|(key, _)| key == name)
                    .map(|(_, value)| value.clone())
            },
            |mode| {
                chosen.set(Some(mode));
                Box::new(sink) as Box<dyn Sink>
            },
            &mut stdout,
            &mut stderr,
        );

        Run {
            exit,
            stdout: String::from_utf8(stdout).unwrap(),
            stderr: String::from_utf8(stderr).unwrap(),
            events: captured.events(),
            color: chosen.get(),
        }
    }

    #[test]
    fn emits_info_by_default() {
        let run = invoke(&["hello"], &[]);
        assert_eq!(run.exit, ExitCode::SUCCESS);
        assert_eq!(run.events.len(), 1);
        assert_eq!(run.events[0].level(), Level::Info);
        assert_eq!(run.events[0].logger(), PROGRAM_NAME);
        assert_eq!(run.events[0].message(), "hello");
    }

    #[test]
    fn markers_and_details_are_attached() {
        let run = invoke(
            &[
                "--level", "warn", "--logger", "Disk", "--marker", "pct=95", "disk low", "42",
                "free space", r#"{"mount":"/"}"#,
            ],
            &[],
        );
        let event = &run.events[0];
        assert_eq!(event.level(), Level::Warn);
        assert_eq!(event.logger(), "Disk");
        assert_eq!(event.markers().get("pct"), Some("95"));
        let details: Vec<String> = event.details().iter().map(ToString::to_string).collect();
        assert_eq!(details, ["42", "free space", r#"{"mount":"/"}"#]);
        assert!(event.details()[0].as_json().is_some_and(serde_json::Value::is_number));
    }

    #[test]
    fn threshold_flag_suppresses_the_call() {
        let run = invoke(&["--threshold", "error", "--level", "warn", "quiet"], &[]);
        assert_eq!(run.exit, ExitCode::SUCCESS);
        assert!(run.events.is_empty());
    }

    #[test]
    fn environment_threshold_applies_unless_overridden() {
        let env = [("MARKLOG_LEVEL", "none")];
        assert!(invoke(&["--level", "error", "x"], &env).events.is_empty());
        assert_eq!(
            invoke(&["--threshold", "debug", "x"], &env).events.len(),
            1
        );
    }

    #[test]
    fn color_resolution_prefers_flag_then_no_color() {
        assert_eq!(invoke(&["x"], &[]).color, Some(ColorMode::Auto));
        assert_eq!(invoke(&["x"], &[("NO_COLOR", "1")]).color, Some(ColorMode::Never));
        assert_eq!(
            invoke(&["--color", "always", "x"], &[("NO_COLOR", "1")]).color,
            Some(ColorMode::Always)
        );
    }

    #[test]
    fn blank_logger_name_fails() {
        let run = invoke(&["--logger", " ", "x"], &[]);
        assert_eq!(run.exit, ExitCode::from(FAILURE_EXIT));
        assert!(run.stderr.contains("logger name must not be empty"));
        assert!(run.events.is_empty());
    }

    #[test]
    fn invalid_environment_fails() {
        let run = invoke(&["x"], &[("MARKLOG_COLOR", "sometimes")]);
        assert_eq!(run.exit, ExitCode::from(FAILURE_EXIT));
        assert!(run.stderr.starts_with("marklog: invalid MARKLOG_COLOR"));
    }

    #[test]
    fn usage_errors_exit_with_two() {
        let run = invoke(&["--level", "loud", "x"], &[]);
        assert_eq!(run.exit, ExitCode::from(USAGE_EXIT));
        assert!(!run.stderr.is_empty());

        let missing = invoke(&[], &[]);
        assert_eq!(missing.exit, ExitCode::from(USAGE_EXIT));
        assert!(missing.stderr.contains("Usage:"));
    }

    #[test]
    fn malformed_marker_is_a_usage_error() {
        let run = invoke(&["--marker", "novalue", "x"], &[]);
        assert_eq!(run.exit, ExitCode::from(USAGE_EXIT));
        assert!(run.stderr.contains("KEY=VALUE"));
    }

    #[test]
    fn help_goes_to_stdout() {
        let run = invoke(&["--help"], &[]);
        assert_eq!(run.exit, ExitCode::SUCCESS);
        assert!(run.stdout.contains("Usage:"));
        assert!(run.stderr.is_empty());
    }

    #[test]
    fn marker_parser_rejects_empty_keys() {
        assert!(parse_marker("=v").is_err());
        assert_eq!(
            parse_marker("k=a=b").unwrap(),
            ("k".to_owned(), "a=b".to_owned())
        );
    }
}
