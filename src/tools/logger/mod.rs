use crossterm::style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Success,
    Error,
    Info,
    Warning,
    Action,
}

/// Diagnostic output for the CLI. Everything goes to stderr: stdout is
/// reserved for the generated script, which callers redirect into a file.
#[derive(Debug, Clone, Default)]
pub struct Logger;

impl Logger {
    pub fn new() -> Self {
        Self
    }

    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) {
        self.print_line(level, message.as_ref());
    }

    pub fn success(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Success, message);
    }

    pub fn info(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Warning, message);
    }

    pub fn error(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Error, message);
    }

    pub fn action(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Action, message);
    }

    fn print_line(&self, level: LogLevel, message: &str) {
        eprintln!("{}", self.render_colored_line(level, message));
    }

    fn render_colored_line(&self, level: LogLevel, message: &str) -> String {
        let mut out = String::new();
        let color = level.color();

        out.push_str(&self.render_signature());
        out.push(' ');
        out.push_str(&self.render_status(level, color));
        out.push(' ');
        out.push_str(message);
        out
    }

    fn render_signature(&self) -> String {
        let mut s = String::new();
        write!(&mut s, "{}", SetForegroundColor(Color::Grey)).unwrap();
        s.push('[');
        write!(
            &mut s,
            "{}",
            SetForegroundColor(Color::Rgb {
                r: 36,
                g: 199,
                b: 181,
            })
        )
        .unwrap();
        write!(&mut s, "{}", SetAttribute(Attribute::Bold)).unwrap();
        s.push_str("actor-export");
        write!(&mut s, "{}", SetAttribute(Attribute::Reset)).unwrap();
        write!(&mut s, "{}", SetForegroundColor(Color::Grey)).unwrap();
        s.push(']');
        write!(&mut s, "{}", ResetColor).unwrap();
        s
    }

    fn render_status(&self, level: LogLevel, color: Color) -> String {
        let mut s = String::new();
        write!(&mut s, "{}", SetForegroundColor(color)).unwrap();
        write!(&mut s, "{}", SetAttribute(Attribute::Bold)).unwrap();
        s.push('[');
        s.push_str(level.as_label());
        s.push(']');
        write!(&mut s, "{}", SetAttribute(Attribute::Reset)).unwrap();
        write!(&mut s, "{}", ResetColor).unwrap();
        s
    }
}

impl LogLevel {
    fn as_label(self) -> &'static str {
        match self {
            LogLevel::Success => "SUCCESS",
            LogLevel::Error => "ERROR",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARN",
            LogLevel::Action => "ACTION",
        }
    }

    fn color(self) -> Color {
        match self {
            LogLevel::Success => Color::Rgb {
                r: 76,
                g: 175,
                b: 80,
            },
            LogLevel::Error => Color::Rgb {
                r: 244,
                g: 67,
                b: 54,
            },
            LogLevel::Info => Color::Rgb {
                r: 33,
                g: 150,
                b: 243,
            },
            LogLevel::Warning => Color::Rgb {
                r: 255,
                g: 152,
                b: 0,
            },
            LogLevel::Action => Color::Rgb {
                r: 0,
                g: 188,
                b: 212,
            },
        }
    }
}
