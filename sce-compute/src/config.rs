//! Process-wide configuration.
//!
//! The only setting is the name of the variable that acts as the imaginary unit. It can be set
//! once, before anything reads it; the first read fixes the default `i` for the rest of the
//! process.

use ariadne::Fmt;
use once_cell::sync::OnceCell;
use sce_attrs::ErrorKind;
use sce_error::{ErrorKind, EXPR};

/// The name of the imaginary unit when none is configured.
pub const DEFAULT_IMAGINARY_UNIT: &str = "i";

static IMAGINARY_UNIT: OnceCell<String> = OnceCell::new();

/// The imaginary unit was configured, or read, before the attempt to set it.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "the imaginary unit can only be configured once",
    help = format!("it is already `{}`", current.fg(EXPR)),
)]
pub struct AlreadyConfigured {
    /// The name that is in effect.
    pub current: String,
}

/// Sets the name of the imaginary unit for the rest of the process.
pub fn set_imaginary_unit(name: impl Into<String>) -> Result<(), AlreadyConfigured> {
    IMAGINARY_UNIT.set(name.into())
        .map_err(|_| AlreadyConfigured { current: imaginary_unit().to_string() })
}

/// Returns the name of the imaginary unit.
pub fn imaginary_unit() -> &'static str {
    IMAGINARY_UNIT.get_or_init(|| DEFAULT_IMAGINARY_UNIT.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_fixes_default() {
        assert_eq!(imaginary_unit(), "i");
        assert_eq!(
            set_imaginary_unit("j"),
            Err(AlreadyConfigured { current: "i".to_string() }),
        );
        assert_eq!(imaginary_unit(), "i");
    }
}
