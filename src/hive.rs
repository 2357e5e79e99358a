use std::fmt;

#[cfg(windows)]
use windows_sys::Win32::System::Registry::{
    HKEY, HKEY_CLASSES_ROOT, HKEY_CURRENT_CONFIG, HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE,
    HKEY_USERS,
};

/// One of the predefined registry roots a read can start from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hive {
    CurrentUser,
    LocalMachine,
    ClassesRoot,
    Users,
    CurrentConfig,
}

impl Hive {
    pub const ALL: [Hive; 5] = [
        Hive::CurrentUser,
        Hive::LocalMachine,
        Hive::ClassesRoot,
        Hive::Users,
        Hive::CurrentConfig,
    ];

    /// Resolves a hive by its exact, case-sensitive `HKEY_*` name.
    pub fn from_name(name: &str) -> Option<Hive> {
        Self::ALL.into_iter().find(|hive| hive.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Hive::CurrentUser => "HKEY_CURRENT_USER",
            Hive::LocalMachine => "HKEY_LOCAL_MACHINE",
            Hive::ClassesRoot => "HKEY_CLASSES_ROOT",
            Hive::Users => "HKEY_USERS",
            Hive::CurrentConfig => "HKEY_CURRENT_CONFIG",
        }
    }

    /// The predefined root handle. These are never opened or closed.
    #[cfg(windows)]
    pub(crate) fn as_raw(self) -> HKEY {
        match self {
            Hive::CurrentUser => HKEY_CURRENT_USER,
            Hive::LocalMachine => HKEY_LOCAL_MACHINE,
            Hive::ClassesRoot => HKEY_CLASSES_ROOT,
            Hive::Users => HKEY_USERS,
            Hive::CurrentConfig => HKEY_CURRENT_CONFIG,
        }
    }
}

impl fmt::Display for Hive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}


#[cfg(test)]
mod tests {
    use super::Hive;

    #[test]
    fn resolves_every_known_name() {
        assert_eq!(Hive::from_name("HKEY_CURRENT_USER"), Some(Hive::CurrentUser));
        assert_eq!(Hive::from_name("HKEY_LOCAL_MACHINE"), Some(Hive::LocalMachine));
        assert_eq!(Hive::from_name("HKEY_CLASSES_ROOT"), Some(Hive::ClassesRoot));
        assert_eq!(Hive::from_name("HKEY_USERS"), Some(Hive::Users));
        assert_eq!(Hive::from_name("HKEY_CURRENT_CONFIG"), Some(Hive::CurrentConfig));
    }

    #[test]
    fn match_is_exact_and_case_sensitive() {
        for name in ["hkey_current_user", "HKCU", "HKEY_CURRENT_USER ", " HKEY_USERS", "HKEY_PERFORMANCE_DATA", ""] {
            assert_eq!(Hive::from_name(name), None, "{name:?} should not resolve");
        }
    }

    #[test]
    fn display_is_the_hive_name() {
        for hive in Hive::ALL {
            assert_eq!(Hive::from_name(&hive.to_string()), Some(hive));
        }
    }
}
