use super::ConsoleSink;
use crate::error::{SinkError, SinkResult};
use crate::sink::Sink;
use anstyle::{Ansi256Color, AnsiColor, Style};
use event::{Color, LogEvent};
use std::fmt::Write as _;
use std::io::Write;
use time::macros::format_description;

/// 256-color palette index closest to CSS orange.
const ORANGE: u8 = 208;

impl<W> ConsoleSink<W> {
    /// Renders `event` exactly as [`log`](Sink::log) would write it, without
    /// the trailing newline.
    #[must_use]
    pub fn render(&self, event: &LogEvent) -> String {
        let mut line = String::with_capacity(64 + event.message().len());
        self.render_into(&mut line, event);
        line
    }

    fn render_into(&self, line: &mut String, event: &LogEvent) {
        let style = if self.colorizes() {
            style_for(event.color())
        } else {
            None
        };
        let time_of_day = event
            .timestamp()
            .to_offset(self.offset)
            .format(format_description!(
                "[hour]:[minute]:[second].[subsecond digits:3]"
            ))
            .unwrap_or_else(|_| "00:00:00.000".to_owned());

        if let Some(style) = style {
            let _ = write!(line, "{}", style.render());
        }
        let _ = write!(
            line,
            "[{time_of_day}][{}][{}]",
            event.level(),
            event.logger()
        );
        if let Some(style) = style {
            let _ = write!(line, "{}", style.render_reset());
        }

        line.push(' ');
        line.push_str(event.message());

        if !event.markers().is_empty() {
            let _ = write!(line, "  {}", event.markers());
        }

        let mut details = event.details().iter();
        if let Some(first) = details.next() {
            let _ = write!(line, "  {first}");
            for detail in details {
                let _ = write!(line, " {detail}");
            }
        }
    }
}

impl<W> Sink for ConsoleSink<W>
where
    W: Write + Send,
{
    fn log(&self, event: &LogEvent) -> SinkResult {
        let mut line = self.render(event);
        line.push('\n');

        let mut writer = self.writer.lock().map_err(|_| SinkError::Poisoned)?;
        writer.write_all(line.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

fn style_for(color: Color) -> Option<Style> {
    let foreground: anstyle::Color = match color {
        Color::Default => return None,
        Color::Blue => AnsiColor::Blue.into(),
        Color::Orange => Ansi256Color(ORANGE).into(),
        Color::Red => AnsiColor::Red.into(),
    };
    Some(Style::new().fg_color(Some(foreground)))
}
