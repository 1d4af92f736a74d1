use sce_error::Error;

/// Everything that can go wrong while handling one line of input.
pub enum ReplError {
    /// Errors from scanning the input and building its tree.
    Many(Vec<Error>),

    /// An error from configuration or simplification.
    One(Error),
}

impl ReplError {
    /// Wraps an error raised by the engine. Such errors are not tied to a part of the input, so
    /// they are pointed at the whole of it.
    pub fn engine(mut err: Error, input: &str) -> Self {
        if err.spans.is_empty() {
            err.spans.push(0..input.len());
        }
        Self::One(err)
    }

    /// Prints a report for each error to stderr, logging any failure to do so.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) {
        let result = match self {
            Self::Many(errs) => errs.iter().try_for_each(|err| err.report_to_stderr(src_id, input)),
            Self::One(err) => err.report_to_stderr(src_id, input),
        };
        if let Err(err) = result {
            tracing::error!(%err, "could not write error report");
        }
    }
}

impl From<Vec<Error>> for ReplError {
    fn from(errs: Vec<Error>) -> Self {
        Self::Many(errs)
    }
}

impl From<Error> for ReplError {
    fn from(err: Error) -> Self {
        Self::One(err)
    }
}
