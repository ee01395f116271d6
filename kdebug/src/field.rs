//! Single-line renderings, for log lines and map keys.

use alloc::{
    borrow::Cow,
    format,
    string::{String, ToString},
    vec::Vec,
};
use core::fmt::Write;

use crate::{DEFAULT_MAX_DEPTH, Inspect, Kind, NodeKey, ValueHandle, node_key, try_inspect};

/// Renders `value` as one short line, the way a log line shows an argument.
///
/// Scalars render as their value; composite kinds collapse to a placeholder
/// instead of being expanded:
///
/// ```
/// use kdebug::format_field;
///
/// assert_eq!(format_field(&42), "42");
/// assert_eq!(format_field(&"text"), "text");
/// assert_eq!(format_field(&vec![1, 2]), "slice[[1 2]]");
/// assert_eq!(format_field(&Some(1)), "[ptr]");
/// ```
///
/// The result never contains a line break: control characters are escaped.
pub fn format_field(value: &dyn Inspect) -> String {
    let Ok(handle) = try_inspect(value) else {
        return "Unknown".to_string();
    };

    let text = match handle.kind() {
        Kind::Nil => "nil".to_string(),
        Kind::Bool
        | Kind::Integer
        | Kind::FloatOrComplex
        | Kind::ChannelOrFunctionOrInterface
        | Kind::String => handle.text().unwrap_or_default().to_string(),
        Kind::PointerSizedInteger => "[uptr]".to_string(),
        Kind::Array => format!("array[{}]", format_inline(value)),
        Kind::Map => {
            let mut out = String::new();
            for (key, value) in handle.entries() {
                out.push_str(&format_inline(*key));
                out.push('[');
                out.push_str(&format_inline(*value));
                out.push_str("] ");
            }
            out
        }
        Kind::Pointer => "[ptr]".to_string(),
        Kind::Slice => format!("slice[{}]", format_inline(value)),
        Kind::Struct => format!("struct[{}]", handle.type_name()),
        Kind::OpaquePointer => "[opaqueptr]".to_string(),
        Kind::Unknown => "Unknown".to_string(),
    };

    escape_control(&text).into_owned()
}

/// Renders `value` compactly on one line, children included: sequences as
/// `[a b]`, maps as `map[k:v]`, structs as `{a b}`, pointers as their
/// pointee, nil as `<nil>`.
///
/// This is how map keys are shown in dumps, and how [`format_field`] shows
/// the contents of arrays, slices and maps.
///
/// A value that contains itself renders as `<cycle>` where it repeats.
pub fn format_inline(value: &dyn Inspect) -> String {
    let mut out = String::new();
    write_inline(value, &mut out, &mut Vec::new());
    escape_control(&out).into_owned()
}

fn write_inline(value: &dyn Inspect, out: &mut String, path: &mut Vec<NodeKey>) {
    let Ok(handle) = try_inspect(value) else {
        out.push_str("Unknown");
        return;
    };
    if path.len() >= DEFAULT_MAX_DEPTH {
        out.push_str("...");
        return;
    }

    let Some(key) = node_key(value, &handle) else {
        write_inline_kind(&handle, out, path);
        return;
    };
    if path.contains(&key) {
        out.push_str("<cycle>");
        return;
    }
    path.push(key);
    write_inline_kind(&handle, out, path);
    path.pop();
}

fn write_inline_kind(handle: &ValueHandle<'_>, out: &mut String, path: &mut Vec<NodeKey>) {
    match handle.kind() {
        Kind::Nil => out.push_str("<nil>"),
        Kind::Bool
        | Kind::Integer
        | Kind::FloatOrComplex
        | Kind::ChannelOrFunctionOrInterface
        | Kind::String
        | Kind::Unknown => out.push_str(handle.text().unwrap_or_default()),
        Kind::PointerSizedInteger => out.push_str(&handle.word().unwrap_or_default().to_string()),
        Kind::Array | Kind::Slice => {
            out.push('[');
            for (index, element) in handle.elements().iter().enumerate() {
                if index > 0 {
                    out.push(' ');
                }
                write_inline(*element, out, path);
            }
            out.push(']');
        }
        Kind::Map => {
            out.push_str("map[");
            for (index, (key, value)) in handle.entries().iter().enumerate() {
                if index > 0 {
                    out.push(' ');
                }
                write_inline(*key, out, path);
                out.push(':');
                write_inline(*value, out, path);
            }
            out.push(']');
        }
        Kind::Struct => {
            out.push('{');
            for (index, field) in handle.fields().iter().enumerate() {
                if index > 0 {
                    out.push(' ');
                }
                write_inline(field.value(), out, path);
            }
            out.push('}');
        }
        Kind::Pointer => match handle.deref() {
            Ok(target) => write_inline(target, out, path),
            Err(_) => out.push_str("<nil>"),
        },
        Kind::OpaquePointer => match handle.address() {
            Some(address) if address != 0 => {
                let _ = write!(out, "{address:#x}");
            }
            _ => out.push_str("<nil>"),
        },
    }
}

/// Escapes line breaks, tabs and other control characters so `text` stays
/// on one line. Quotes are left alone.
pub(crate) fn escape_control(text: &str) -> Cow<'_, str> {
    if !text.chars().any(char::is_control) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.extend(c.escape_unicode()),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Severity of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Developer detail.
    Debug,
    /// Request tracing.
    Trace,
    /// Normal but significant events.
    Notice,
    /// Something went wrong and was handled.
    Warning,
    /// Something went wrong and was not.
    Fatal,
}

impl Level {
    /// The tag written between brackets at the start of a log line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Trace => "trace",
            Level::Notice => "notice",
            Level::Warning => "warning",
            Level::Fatal => "fatal",
        }
    }

    /// Whether lines of this level belong in the error log rather than the
    /// normal one.
    pub const fn is_error(self) -> bool {
        matches!(self, Level::Warning | Level::Fatal)
    }
}

impl core::fmt::Display for Level {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Assembles one log line: `[level]`, then every argument rendered with
/// [`format_field`] and trimmed, separated by spaces, then a single `\n`.
///
/// ```
/// use kdebug::{Level, log_line};
///
/// let line = log_line(Level::Notice, &[&"user", &42, &Some(1)]);
/// assert_eq!(line, "[notice] user 42 [ptr]\n");
/// ```
pub fn log_line(level: Level, args: &[&dyn Inspect]) -> String {
    let mut line = format!("[{level}]");
    for arg in args {
        line.push(' ');
        line.push_str(format_field(*arg).trim());
    }
    line.truncate(line.trim_end().len());
    line.push('\n');
    line
}
