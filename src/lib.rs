//! Read-only access to Windows registry string and DWORD values, built as a
//! Node.js addon exporting `GetStringRegKey` and `GetDWORDRegKey`.
//!
//! Both operations take three text arguments (hive, key path, value name).
//! A value that is missing, or stored with another type, reads as `None`
//! rather than an error.

mod args;
mod error;
mod hive;
#[cfg_attr(not(windows), allow(dead_code))]
mod project;
mod wide;

#[cfg(windows)]
mod binding;
#[cfg(windows)]
mod registry;

pub use args::{CallArgs, Request, ARG_COUNT, MAX_ARG_LEN};
pub use error::{ArgumentError, Error, OpenFailure, Result, EINVAL};
pub use hive::Hive;
pub use wide::{from_wide, to_wide};

#[cfg(windows)]
pub use registry::{read_dword, read_string};

/// Capacity of the string read buffer, in UTF-16 units including the
/// terminator. Longer values fail with [`Error::ValueTooLarge`].
pub const STRING_BUFFER_CHARS: usize = 512;

/// Size of the DWORD read buffer.
pub const DWORD_BUFFER_BYTES: usize = 4;

/// Reads a string value named by three host arguments: hive, path, name.
#[cfg(windows)]
pub fn get_string_reg_key<A: CallArgs + ?Sized>(args: &A) -> Result<Option<String>> {
    let request = Request::from_args(args)?;
    read_string(request.hive, &request.path, &request.name)
}

/// Reads a DWORD value named by three host arguments: hive, path, name.
#[cfg(windows)]
pub fn get_dword_reg_key<A: CallArgs + ?Sized>(args: &A) -> Result<Option<u32>> {
    let request = Request::from_args(args)?;
    read_dword(request.hive, &request.path, &request.name)
}
