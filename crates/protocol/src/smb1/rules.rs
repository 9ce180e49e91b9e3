//! Per-command structure rules for SMB1 requests.
//!
//! Each supported command maps to one [`CommandRules`] pair: how many
//! parameter words the request must carry and what its trailing byte count
//! must look like. Keeping the table as data makes it easy to audit against
//! the command catalogue; the match in [`Smb1Command::rules`] is exhaustive,
//! so adding a command without rules fails to compile.

use super::command::Smb1Command;

/// Accepted parameter word counts for a command.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WordCountRule {
    /// The word count must equal the value.
    Exact(u8),
    /// The word count must equal one of two values.
    Either(u8, u8),
    /// The word count must be at least the value.
    AtLeast(u8),
}

impl WordCountRule {
    /// Reports whether `word_count` satisfies the rule.
    #[must_use]
    #[inline]
    pub const fn accepts(self, word_count: u8) -> bool {
        match self {
            Self::Exact(expected) => word_count == expected,
            Self::Either(first, second) => word_count == first || word_count == second,
            Self::AtLeast(minimum) => word_count >= minimum,
        }
    }
}

/// Accepted trailing byte counts for a command.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ByteCountRule {
    /// The byte count must equal the value.
    Exact(u16),
    /// The byte count must be at least the value.
    ///
    /// `AtLeast(0)` accepts every count and is kept so the table lists every
    /// command explicitly.
    AtLeast(u16),
    /// Minimum that depends on the `SMBFLG2_UNICODE` header flag.
    UnicodeAware {
        /// Minimum when strings are OEM encoded.
        ascii: u16,
        /// Minimum when strings are UTF-16; one byte larger for the extra
        /// terminator.
        unicode: u16,
    },
}

impl ByteCountRule {
    /// Reports whether `byte_count` satisfies the rule for the given string encoding.
    #[must_use]
    #[inline]
    pub const fn accepts(self, byte_count: u16, unicode: bool) -> bool {
        match self {
            Self::Exact(expected) => byte_count == expected,
            Self::AtLeast(minimum) => byte_count >= minimum,
            Self::UnicodeAware { ascii, unicode: wide } => {
                byte_count >= if unicode { wide } else { ascii }
            }
        }
    }

    /// Returns the smallest byte count the rule accepts.
    #[must_use]
    pub const fn minimum(self, unicode: bool) -> u16 {
        match self {
            Self::Exact(value) | Self::AtLeast(value) => value,
            Self::UnicodeAware { ascii, unicode: wide } => {
                if unicode {
                    wide
                } else {
                    ascii
                }
            }
        }
    }
}

/// Word count and byte count rules of one command.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CommandRules {
    /// Rule applied to the header's word count.
    pub word_count: WordCountRule,
    /// Rule applied to the 16-bit byte count following the parameter words.
    pub byte_count: ByteCountRule,
}

impl CommandRules {
    const fn new(word_count: WordCountRule, byte_count: ByteCountRule) -> Self {
        Self {
            word_count,
            byte_count,
        }
    }
}

impl Smb1Command {
    /// Returns the structure rules a request for this command must satisfy.
    #[must_use]
    pub const fn rules(self) -> CommandRules {
        use ByteCountRule as B;
        use WordCountRule as W;

        match self {
            Self::CreateDirectory
            | Self::DeleteDirectory
            | Self::QueryInformation
            | Self::Negotiate
            | Self::CheckDirectory => CommandRules::new(W::Exact(0), B::AtLeast(2)),
            Self::TreeDisconnect | Self::NtCancel | Self::ProcessExit => {
                CommandRules::new(W::Exact(0), B::Exact(0))
            }
            Self::Flush | Self::FindClose2 => CommandRules::new(W::Exact(1), B::Exact(0)),
            Self::Delete | Self::Rename => CommandRules::new(W::Exact(1), B::AtLeast(2)),
            Self::Echo => CommandRules::new(W::Exact(1), B::AtLeast(0)),
            Self::LogoffAndx => CommandRules::new(W::Exact(2), B::Exact(0)),
            Self::Close => CommandRules::new(W::Exact(3), B::Exact(0)),
            Self::TreeConnectAndx => CommandRules::new(W::Exact(4), B::AtLeast(3)),
            Self::NtRename => CommandRules::new(W::Exact(4), B::AtLeast(4)),
            Self::Write => CommandRules::new(W::Exact(5), B::AtLeast(3)),
            Self::SetAttr => CommandRules::new(W::Exact(8), B::AtLeast(2)),
            Self::LockingAndx => CommandRules::new(W::Exact(8), B::AtLeast(0)),
            Self::Transaction => CommandRules::new(W::AtLeast(14), B::AtLeast(0)),
            Self::SessionSetupAndx => CommandRules::new(W::Exact(12), B::AtLeast(0)),
            Self::OpenAndx => CommandRules::new(W::Exact(15), B::AtLeast(2)),
            Self::Transaction2 => CommandRules::new(W::Exact(15), B::AtLeast(0)),
            Self::NtCreateAndx => CommandRules::new(
                W::Exact(24),
                B::UnicodeAware {
                    ascii: 2,
                    unicode: 3,
                },
            ),
            Self::ReadAndx => CommandRules::new(W::Either(10, 12), B::Exact(0)),
            Self::WriteAndx => CommandRules::new(W::Either(12, 14), B::AtLeast(1)),
        }
    }
}
