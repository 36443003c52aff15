use std::num::{ParseFloatError, ParseIntError};

use decay_core::ProblemError;
use thiserror::Error;

/// Number of positional arguments: scheme, exponent, rate.
pub const ARG_COUNT: usize = 3;

/// Parsed positional arguments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Args {
    /// One-based scheme index, not yet checked against the scheme table.
    pub scheme: u64,

    /// Decimal exponent `n`.
    pub exponent: u32,

    /// Decay rate `A`.
    pub rate: f64,
}

/// Errors that can occur while reading the command line.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ArgsError {
    #[error("expected {expected} arguments, got {found}", expected = ARG_COUNT)]
    Usage { found: usize },

    #[error("invalid scheme index {value:?}: {source}")]
    Scheme {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid exponent {value:?}: {source}")]
    Exponent {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid decay rate {value:?}: {source}")]
    Rate {
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error(transparent)]
    Problem(#[from] ProblemError),
}

/// Parses `<scheme> <n> <A>`, excluding the program name.
///
/// Surrounding whitespace is ignored; anything else that is not a number is
/// rejected.
///
/// # Errors
///
/// Returns [`ArgsError::Usage`] if there are not exactly three arguments, or a
/// parse error naming the offending argument.
pub fn parse<I>(raw: I) -> Result<Args, ArgsError>
where
    I: IntoIterator<Item = String>,
{
    let raw: Vec<String> = raw.into_iter().collect();
    let [scheme, exponent, rate] = <[String; ARG_COUNT]>::try_from(raw)
        .map_err(|raw| ArgsError::Usage { found: raw.len() })?;

    let scheme = scheme
        .trim()
        .parse::<u64>()
        .map_err(|source| ArgsError::Scheme {
            value: scheme.clone(),
            source,
        })?;
    let exponent = exponent
        .trim()
        .parse::<u32>()
        .map_err(|source| ArgsError::Exponent {
            value: exponent.clone(),
            source,
        })?;
    let rate = rate.trim().parse::<f64>().map_err(|source| ArgsError::Rate {
        value: rate.clone(),
        source,
    })?;

    Ok(Args {
        scheme,
        exponent,
        rate,
    })
}
