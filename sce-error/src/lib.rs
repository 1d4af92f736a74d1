//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.
//!
//! Every stage of the engine (scanning, tree building and simplification) reports failures as an
//! [`Error`]: a boxed [`ErrorKind`] together with the regions of the input it refers to. The
//! front end turns these into `ariadne` reports.

#[cfg(test)]
extern crate self as sce_error;

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::Debug, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Returns the error as a [`dyn Any`], so that callers can check for a specific kind.
    fn as_any(&self) -> &dyn Any;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Returns true if the kind of this error is `T`.
    pub fn is<T: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<T>()
    }

    /// Returns the kind of this error as `T`, if it is one.
    pub fn downcast_ref<T: ErrorKind + 'static>(&self) -> Option<&T> {
        self.kind.as_any().downcast_ref::<T>()
    }

    /// Writes the report of this error into the given writer, with the source code it refers to.
    pub fn write_report(&self, src_id: &str, input: &str, w: impl io::Write) -> io::Result<()> {
        self.build_report(src_id).write((src_id, Source::from(input)), w)
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type actually does not have a `Display` implementation, so
    /// we can only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }
}

#[cfg(test)]
mod tests {
    use ariadne::Fmt;
    use sce_attrs::ErrorKind;
    use super::*;

    #[derive(Debug, ErrorKind)]
    #[error(
        message = "division by zero",
        labels = [format!("this {} is zero", "denominator".fg(EXPR))],
        help = "remove the zero denominator",
    )]
    struct DivideByZero;

    /// Renders the error into a string, without color codes.
    fn render(err: &Error, input: &str) -> String {
        let mut buf = Vec::new();
        err.write_report("input", input, &mut buf).unwrap();
        String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
    }

    #[test]
    fn report_contains_message_and_label() {
        let err = Error::new(vec![2..3], DivideByZero);
        let out = render(&err, "1/0");
        assert!(out.contains("division by zero"));
        assert!(out.contains("this denominator is zero"));
        assert!(out.contains("remove the zero denominator"));
    }

    #[test]
    fn downcast_kind() {
        let err = Error::new(vec![], DivideByZero);
        assert!(err.is::<DivideByZero>());
        assert!(err.downcast_ref::<DivideByZero>().is_some());
    }

    #[test]
    fn report_points_at_span() {
        let err = Error::new(vec![0..3], DivideByZero);
        let out = render(&err, "x/0");
        assert!(out.contains("x/0"));
    }
}
