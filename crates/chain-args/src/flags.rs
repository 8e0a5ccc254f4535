use std::fmt;
use std::ops::BitOr;

/// How a registered option may be given and where it is shown.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ArgFlags(u32);

impl ArgFlags {
    /// Boolean-style flag that also accepts `--key=value`.
    pub const ALLOW_ANY: ArgFlags = ArgFlags(0x01);
    /// Requires a value.
    pub const ALLOW_STRING: ArgFlags = ArgFlags(0x02);
    /// Hidden from help unless debug help is requested.
    pub const DEBUG_ONLY: ArgFlags = ArgFlags(0x100);
    /// Top-level config values are ignored unless the main chain is selected.
    pub const NETWORK_ONLY: ArgFlags = ArgFlags(0x200);

    #[must_use]
    pub const fn contains(self, other: ArgFlags) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn union(self, other: ArgFlags) -> Self {
        ArgFlags(self.0 | other.0)
    }

    /// Whether the option must be given a value on the command line.
    #[must_use]
    pub const fn requires_value(self) -> bool {
        !self.contains(Self::ALLOW_ANY)
    }
}

impl BitOr for ArgFlags {
    type Output = ArgFlags;

    fn bitor(self, rhs: ArgFlags) -> ArgFlags {
        self.union(rhs)
    }
}

impl fmt::Debug for ArgFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (Self::ALLOW_ANY, "ALLOW_ANY"),
            (Self::ALLOW_STRING, "ALLOW_STRING"),
            (Self::DEBUG_ONLY, "DEBUG_ONLY"),
            (Self::NETWORK_ONLY, "NETWORK_ONLY"),
        ];
        let set: Vec<&str> = names
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "ArgFlags({})", set.join(" | "))
    }
}

/// Help section an option is listed under. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OptionsCategory {
    Options,
    Connection,
    ChainParams,
    DebugTest,
    Rpc,
    /// Never listed.
    Hidden,
}

impl OptionsCategory {
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            OptionsCategory::Options => "Options",
            OptionsCategory::Connection => "Connection options",
            OptionsCategory::ChainParams => "Chain selection options",
            OptionsCategory::DebugTest => "Debugging/Testing options",
            OptionsCategory::Rpc => "RPC server options",
            OptionsCategory::Hidden => "Hidden options",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_union() {
        let flags = ArgFlags::ALLOW_ANY | ArgFlags::DEBUG_ONLY;
        assert!(flags.contains(ArgFlags::ALLOW_ANY));
        assert!(flags.contains(ArgFlags::DEBUG_ONLY));
        assert!(!flags.contains(ArgFlags::ALLOW_STRING));
        assert!(!flags.requires_value());
        assert!(ArgFlags::ALLOW_STRING.requires_value());
    }

    #[test]
    fn test_flag_debug_lists_names() {
        let flags = ArgFlags::ALLOW_ANY | ArgFlags::NETWORK_ONLY;
        assert_eq!(format!("{:?}", flags), "ArgFlags(ALLOW_ANY | NETWORK_ONLY)");
    }

    #[test]
    fn test_category_order() {
        assert!(OptionsCategory::ChainParams < OptionsCategory::DebugTest);
        assert!(OptionsCategory::Options < OptionsCategory::Hidden);
    }
}
