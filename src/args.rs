use crate::error::{ArgumentError, OpenFailure, Result};
use crate::hive::Hive;

/// Number of positional arguments each operation takes: hive, path, name.
pub const ARG_COUNT: usize = 3;

/// Longest accepted argument, in UTF-8 bytes. Matches the registry's own
/// ceiling on key and value name length.
pub const MAX_ARG_LEN: usize = 16_383;

/// Positional arguments as the calling environment supplies them.
///
/// Lets the validator inspect arguments without knowing the host, and
/// without converting anything it is about to reject.
pub trait CallArgs {
    /// Number of arguments actually passed.
    fn count(&self) -> usize;

    /// Whether the argument at `index` is host text.
    fn is_text(&self, index: usize) -> Result<bool>;

    /// Encoded UTF-8 length of the text argument at `index`.
    fn text_len(&self, index: usize) -> Result<usize>;

    /// Copies the text argument at `index` out of the host.
    fn text(&self, index: usize) -> Result<String>;
}

/// A validated read: which hive, which key below it, which value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub hive: Hive,
    pub path: String,
    pub name: String,
}

impl Request {
    /// Validates raw call arguments.
    ///
    /// Checks run in a fixed order and each stops the call: argument count,
    /// then that every argument is text, then each argument's length before
    /// it is copied out, and finally the hive name.
    pub fn from_args<A: CallArgs + ?Sized>(args: &A) -> Result<Request> {
        if args.count() != ARG_COUNT {
            return Err(ArgumentError::WrongCount.into());
        }

        for index in 0..ARG_COUNT {
            if !args.is_text(index)? {
                return Err(ArgumentError::ExpectedString.into());
            }
        }

        let hive = bounded_text(args, 0)?;
        let path = bounded_text(args, 1)?;
        let name = bounded_text(args, 2)?;

        let hive = Hive::from_name(&hive).ok_or(OpenFailure::Hive)?;
        Ok(Request { hive, path, name })
    }
}

fn bounded_text<A: CallArgs + ?Sized>(args: &A, index: usize) -> Result<String> {
    if args.text_len(index)? > MAX_ARG_LEN {
        return Err(ArgumentError::TooLong.into());
    }

    args.text(index)
}

impl CallArgs for [&str] {
    fn count(&self) -> usize {
        self.len()
    }

    fn is_text(&self, index: usize) -> Result<bool> {
        Ok(index < self.len())
    }

    fn text_len(&self, index: usize) -> Result<usize> {
        let arg = self.get(index).ok_or(ArgumentError::WrongCount)?;
        Ok(arg.len())
    }

    fn text(&self, index: usize) -> Result<String> {
        let arg = self.get(index).ok_or(ArgumentError::WrongCount)?;
        Ok(arg.to_string())
    }
}

impl<const N: usize> CallArgs for [&str; N] {
    fn count(&self) -> usize {
        N
    }

    fn is_text(&self, index: usize) -> Result<bool> {
        self.as_slice().is_text(index)
    }

    fn text_len(&self, index: usize) -> Result<usize> {
        self.as_slice().text_len(index)
    }

    fn text(&self, index: usize) -> Result<String> {
        self.as_slice().text(index)
    }
}
