//! Error adapter for converting ScribblerError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use scribbler::ScribblerError;

/// Adapter that renders a [`ScribblerError`] through miette.
///
/// Mini-language errors carry the accepted syntax as help text; the other
/// variants get a short hint on what to check.
pub struct ErrorAdapter<'a>(pub &'a ScribblerError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ScribblerError::Syntax(_) => "scribbler::syntax",
            ScribblerError::Precondition(_) => "scribbler::precondition",
            ScribblerError::Codec(_) => "scribbler::codec",
            ScribblerError::MissingAsset(_) => "scribbler::missing_asset",
            ScribblerError::Io(_) => "scribbler::io",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            ScribblerError::Syntax(err) => format!("expected {}", err.kind().expected()),
            ScribblerError::Precondition(_) => {
                "gradients need at least two colors and a non-empty area".to_string()
            }
            ScribblerError::Codec(_) => "images must be PNG or JPEG files".to_string(),
            ScribblerError::MissingAsset(asset) => format!("pass the {asset} with --{asset}"),
            ScribblerError::Io(_) => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
