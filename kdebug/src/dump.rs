//! Multi-line structural dumps.

use alloc::{
    borrow::Cow,
    format,
    string::{String, ToString},
    vec::Vec,
};
use core::fmt::{self, Write};
use std::io::Write as _;

use owo_colors::OwoColorize;

use crate::{Inspect, IntrospectError, Kind, ValueHandle, escape_control, format_inline, try_inspect};

/// Default number of nesting levels rendered before a dump is truncated.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Default number of spaces per nesting level.
pub const DEFAULT_INDENT_SIZE: usize = 4;

/// Renders values as an indented tree, one node per line, in the spirit of
/// PHP's `var_dump`:
///
/// ```text
/// struct[Person] ==> {
///     name [String](3) ==> "Ada"
///     tags slice[Vec<&str>](1) ==>
///         [0] : [str](5) ==> "admin"
///     //end slice
/// } //end struct
/// ```
///
/// Every node prints a header line, composite nodes then print their
/// children one level deeper, and slices and structs close with a trailer.
/// Dumps never fail and never panic: null pointers print a `<nil pointer>`
/// sentinel, a pointee already being dumped further up prints `<cycle>`,
/// nesting past the maximum depth prints `<max depth reached>`, and a
/// panicking `Inspect` implementation prints as `Unknown`.
#[derive(Debug, Clone)]
pub struct Dumper {
    indent: String,
    max_depth: usize,
    use_colors: bool,
}

impl Default for Dumper {
    fn default() -> Self {
        Self {
            indent: " ".repeat(DEFAULT_INDENT_SIZE),
            max_depth: DEFAULT_MAX_DEPTH,
            use_colors: false,
        }
    }
}

impl Dumper {
    /// Create a new Dumper with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of spaces per nesting level
    pub fn with_indent_size(mut self, size: usize) -> Self {
        self.indent = " ".repeat(size);
        self
    }

    /// Set the maximum nesting depth
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Enable or disable ANSI colors for type names and markers. `NO_COLOR`
    /// in the environment keeps them off.
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors && std::env::var_os("NO_COLOR").is_none();
        self
    }

    /// Dump a value to a string, one line per node, each ending in `\n`.
    pub fn format(&self, value: &dyn Inspect) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = self.format_to(value, &mut output);
        output
    }

    /// Dump a value as a list of lines, without line terminators.
    pub fn lines(&self, value: &dyn Inspect) -> Vec<String> {
        self.format(value).lines().map(String::from).collect()
    }

    /// Dump a value into any formatter.
    pub fn format_to(&self, value: &dyn Inspect, f: &mut dyn Write) -> fmt::Result {
        let mut path = Vec::new();
        self.render(value, &RenderContext::root(), &mut path, f)
    }

    /// Dump a value to standard output.
    pub fn print(&self, value: &dyn Inspect) {
        let output = self.format(value);
        if let Err(error) = std::io::stdout().lock().write_all(output.as_bytes()) {
            tracing::debug!(%error, "could not write dump to stdout");
        }
    }

    fn paint_type(&self, name: &str) -> String {
        if self.use_colors {
            name.cyan().to_string()
        } else {
            name.to_string()
        }
    }

    fn paint_marker(&self, marker: &str) -> String {
        if self.use_colors {
            marker.yellow().to_string()
        } else {
            marker.to_string()
        }
    }

    fn render(
        &self,
        value: &dyn Inspect,
        ctx: &RenderContext,
        path: &mut Vec<NodeKey>,
        f: &mut dyn Write,
    ) -> fmt::Result {
        match try_inspect(value) {
            Ok(handle) => self.render_node(value, &handle, ctx, path, f),
            Err(error) => writeln!(f, "{}[Unknown] : <{error}>", ctx.prefix()),
        }
    }

    /// Depth and cycle checks, then the node itself. Nodes with children stay
    /// on `path` while their children render.
    fn render_node(
        &self,
        value: &dyn Inspect,
        handle: &ValueHandle<'_>,
        ctx: &RenderContext,
        path: &mut Vec<NodeKey>,
        f: &mut dyn Write,
    ) -> fmt::Result {
        if ctx.depth >= self.max_depth {
            tracing::debug!(
                depth = ctx.depth,
                type_name = handle.type_name(),
                "dump truncated at max depth"
            );
            return writeln!(
                f,
                "{}[{}] {}",
                ctx.prefix(),
                self.paint_type(handle.type_name()),
                self.paint_marker("<max depth reached>")
            );
        }

        let Some(key) = node_key(value, handle) else {
            return self.render_kind(handle, ctx, path, f);
        };
        if path.contains(&key) {
            tracing::debug!(type_name = %key.1, "cycle detected while dumping");
            return writeln!(
                f,
                "{}[{}] {}",
                ctx.prefix(),
                self.paint_type(&key.1),
                self.paint_marker("<cycle>")
            );
        }

        path.push(key);
        let result = self.render_kind(handle, ctx, path, f);
        path.pop();
        result
    }

    fn render_kind(
        &self,
        handle: &ValueHandle<'_>,
        ctx: &RenderContext,
        path: &mut Vec<NodeKey>,
        f: &mut dyn Write,
    ) -> fmt::Result {
        let prefix = ctx.prefix();
        let ty = self.paint_type(handle.type_name());

        match handle.kind() {
            Kind::Nil => writeln!(f, "{prefix}[nil] : <nil>"),
            Kind::Bool | Kind::Integer | Kind::FloatOrComplex => {
                writeln!(f, "{prefix}[{ty}] : {}", scalar_text(handle))
            }
            Kind::PointerSizedInteger => {
                writeln!(f, "{prefix}[{ty}] : {:#x}", handle.word().unwrap_or_default())
            }
            Kind::ChannelOrFunctionOrInterface => {
                writeln!(f, "{prefix}[{ty}]{}", scalar_text(handle))
            }
            Kind::String => {
                let content = handle.text().unwrap_or_default();
                writeln!(
                    f,
                    "{prefix}[{ty}]({}) ==> \"{}\"",
                    content.len(),
                    escape_control(content)
                )
            }
            Kind::Unknown => writeln!(f, "{prefix}[Unknown] : {}", scalar_text(handle)),
            Kind::Array | Kind::Slice => {
                let elements = handle.elements();
                let keyword = if handle.kind() == Kind::Array {
                    "array"
                } else {
                    "slice"
                };
                writeln!(f, "{prefix}{keyword}[{ty}]({}) ==>", elements.len())?;
                for (index, element) in elements.iter().enumerate() {
                    let child = ctx.nested(&self.indent, |indent| format!("{indent}[{index}] : "));
                    self.render(*element, &child, path, f)?;
                }
                if handle.kind() == Kind::Slice {
                    writeln!(f, "{}//end slice", ctx.indent)?;
                }
                Ok(())
            }
            Kind::Map => {
                let entries = handle.entries();
                writeln!(f, "{prefix}map[{ty}]({}) ==>", entries.len())?;
                for (key, value) in entries {
                    let key = format_inline(*key);
                    let child = ctx.nested(&self.indent, |indent| format!("{indent}\"{key}\" : "));
                    self.render(*value, &child, path, f)?;
                }
                Ok(())
            }
            Kind::Struct => {
                writeln!(f, "{prefix}struct[{ty}] ==> {{")?;
                for field in handle.fields() {
                    let child = ctx.nested(&self.indent, |indent| format!("{indent}{} ", field.name()));
                    self.render(field.value(), &child, path, f)?;
                }
                writeln!(f, "{}}} //end struct", ctx.indent)
            }
            Kind::Pointer | Kind::OpaquePointer => {
                let arrow = if handle.kind() == Kind::Pointer {
                    format!("[{ty}] --> ")
                } else {
                    "[opaqueptr] --> ".to_string()
                };
                let target = match handle.deref() {
                    Ok(target) => target,
                    Err(IntrospectError::NilDereference { .. }) => {
                        return writeln!(
                            f,
                            "{prefix}[{ty}] --> {}",
                            self.paint_marker("<nil pointer>")
                        );
                    }
                    // Raw pointers are never read through; show where they point.
                    Err(_) => {
                        return writeln!(
                            f,
                            "{prefix}{arrow}{:#x}",
                            handle.address().unwrap_or_default()
                        );
                    }
                };
                let child = ctx.relabeled(format!("{prefix}{arrow}"));
                self.render(target, &child, path, f)
            }
        }
    }
}

/// Identity of a node with children: where it lives and what type it has.
/// A struct and its first field share an address, so the type is part of it.
pub(crate) type NodeKey = (usize, String);

/// The key under which `value` is tracked on the current path, or `None`
/// for kinds that never have children.
pub(crate) fn node_key(value: &dyn Inspect, handle: &ValueHandle<'_>) -> Option<NodeKey> {
    match handle.kind() {
        Kind::Array | Kind::Slice | Kind::Map | Kind::Struct | Kind::Pointer => Some((
            core::ptr::from_ref(value).cast::<()>() as usize,
            handle.type_name().to_string(),
        )),
        _ => None,
    }
}

/// Scalar text with control characters escaped, so the node stays on one line.
fn scalar_text<'h>(handle: &'h ValueHandle<'_>) -> Cow<'h, str> {
    escape_control(handle.text().unwrap_or_default())
}

/// Indent-and-label state threaded through a dump.
///
/// `label` replaces the indent for exactly one header line: the line of the
/// node the label introduces (a field name, an index, a map key, a pointer
/// arrow).
#[derive(Debug, Clone)]
pub(crate) struct RenderContext {
    indent: String,
    label: Option<String>,
    depth: usize,
}

impl RenderContext {
    fn root() -> Self {
        Self {
            indent: String::new(),
            label: None,
            depth: 0,
        }
    }

    fn prefix(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.indent)
    }

    /// One level deeper; `label` receives the child's indent.
    fn nested(&self, unit: &str, label: impl FnOnce(&str) -> String) -> Self {
        let indent = format!("{}{unit}", self.indent);
        let label = label(&indent);
        Self {
            indent,
            label: Some(label),
            depth: self.depth + 1,
        }
    }

    /// Same indent, new label: used when following a pointer.
    fn relabeled(&self, label: String) -> Self {
        Self {
            indent: self.indent.clone(),
            label: Some(label),
            depth: self.depth + 1,
        }
    }
}

/// Dumps `value` with the default [`Dumper`] and returns its lines.
///
/// ```
/// assert_eq!(kdebug::dump(&7u8), ["[u8] : 7"]);
/// ```
pub fn dump(value: &dyn Inspect) -> Vec<String> {
    Dumper::new().lines(value)
}

/// Dumps `value` with the default [`Dumper`] to standard output.
pub fn var_dump(value: &dyn Inspect) {
    Dumper::new().print(value)
}
