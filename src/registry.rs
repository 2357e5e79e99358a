use std::{mem, ptr};

use log::{debug, trace};
use windows_result::HRESULT;
use windows_sys::Win32::{
    Foundation::{ERROR_MORE_DATA, ERROR_SUCCESS, WIN32_ERROR},
    System::Registry::{
        RegCloseKey, RegOpenKeyExW, RegQueryValueExW, HKEY, KEY_READ, REG_DWORD, REG_EXPAND_SZ,
        REG_SZ, REG_VALUE_TYPE,
    },
};

use crate::error::{Error, OpenFailure, Result};
use crate::hive::Hive;
use crate::project::{project_dword, project_string};
use crate::wide::to_wide;
use crate::{DWORD_BUFFER_BYTES, STRING_BUFFER_CHARS};

#[cfg(test)]
thread_local! {
    static OPEN_KEYS: std::cell::Cell<isize> = const { std::cell::Cell::new(0) };
}

/// Keys opened by the current thread and not yet closed.
#[cfg(test)]
pub(crate) fn open_keys() -> isize {
    OPEN_KEYS.with(|open| open.get())
}

/// An open registry key. Closed exactly once, when dropped.
struct Key(HKEY);

impl Key {
    /// Opens `hive\path` for reading.
    fn open(hive: Hive, path: &str) -> Result<Key> {
        let wide_path = to_wide(path);
        let mut handle = HKEY::default();

        let status = unsafe { RegOpenKeyExW(hive.as_raw(), wide_path.as_ptr(), 0, KEY_READ, &mut handle) };
        if status != ERROR_SUCCESS {
            debug!("Failed to open {hive}\\{path}: {}", describe(status));
            return Err(OpenFailure::Key.into());
        }

        #[cfg(test)]
        OPEN_KEYS.with(|open| open.set(open.get() + 1));

        trace!("Opened {hive}\\{path}");
        Ok(Key(handle))
    }

    /// Queries `name` into `data`, which holds `size` bytes. On return `size`
    /// holds the number of bytes written, or needed if the buffer was short.
    ///
    /// ## Safety
    /// `data` must be valid for writes of `*size` bytes.
    unsafe fn query(&self, name: &str, data: *mut u8, size: &mut u32) -> (WIN32_ERROR, REG_VALUE_TYPE) {
        let wide_name = to_wide(name);
        let mut kind: REG_VALUE_TYPE = 0;

        let status = RegQueryValueExW(self.0, wide_name.as_ptr(), ptr::null(), &mut kind, data, size);
        (status, kind)
    }
}

impl Drop for Key {
    fn drop(&mut self) {
        let status = unsafe { RegCloseKey(self.0) };
        if status != ERROR_SUCCESS {
            debug!("Failed to close registry key: {}", describe(status));
        }

        #[cfg(test)]
        OPEN_KEYS.with(|open| open.set(open.get() - 1));
    }
}

fn describe(status: WIN32_ERROR) -> String {
    format!("{} ({status})", HRESULT::from_win32(status).message().trim_end())
}

/// Reads a REG_SZ or REG_EXPAND_SZ value. Expandable strings are returned
/// as stored, without substituting environment variables.
///
/// A missing value, or one of another type, reads as `None`.
pub fn read_string(hive: Hive, path: &str, name: &str) -> Result<Option<String>> {
    let key = Key::open(hive, path)?;

    let mut buffer = [0u16; STRING_BUFFER_CHARS];
    let mut size = mem::size_of_val(&buffer) as u32;
    let (status, kind) = unsafe { key.query(name, buffer.as_mut_ptr().cast(), &mut size) };
    drop(key);

    if status == ERROR_MORE_DATA {
        debug!("Value {name:?} needs {size} bytes");
        return Err(Error::ValueTooLarge);
    }

    if status != ERROR_SUCCESS {
        debug!("Failed to query {name:?}: {}", describe(status));
        return Ok(None);
    }

    if kind != REG_SZ && kind != REG_EXPAND_SZ {
        debug!("Value {name:?} has type {kind}, not a string");
        return Ok(None);
    }

    Ok(Some(project_string(&buffer, size)))
}

/// Reads a REG_DWORD value. A missing value, or one of another type, reads
/// as `None`.
pub fn read_dword(hive: Hive, path: &str, name: &str) -> Result<Option<u32>> {
    let key = Key::open(hive, path)?;

    let mut data = [0u8; DWORD_BUFFER_BYTES];
    let mut size = DWORD_BUFFER_BYTES as u32;
    let (status, kind) = unsafe { key.query(name, data.as_mut_ptr(), &mut size) };
    drop(key);

    if status != ERROR_SUCCESS {
        debug!("Failed to query {name:?}: {}", describe(status));
        return Ok(None);
    }

    if kind != REG_DWORD {
        debug!("Value {name:?} has type {kind}, not a DWORD");
        return Ok(None);
    }

    Ok(Some(project_dword(data)))
}
