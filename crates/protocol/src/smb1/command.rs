use ::core::fmt;
use ::core::str::FromStr;

use thiserror::Error;

/// SMB1 commands understood by the request checker.
///
/// Discriminants are the single-byte command codes carried at offset 4 of the
/// SMB1 header. Codes outside this set are reported as unsupported.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Smb1Command {
    #[doc(alias = "SMB_COM_CREATE_DIRECTORY")]
    /// Create a directory.
    CreateDirectory = 0x00,
    #[doc(alias = "SMB_COM_DELETE_DIRECTORY")]
    /// Remove an empty directory.
    DeleteDirectory = 0x01,
    #[doc(alias = "SMB_COM_CLOSE")]
    /// Close a file handle.
    Close = 0x04,
    #[doc(alias = "SMB_COM_FLUSH")]
    /// Flush buffered data of a file handle.
    Flush = 0x05,
    #[doc(alias = "SMB_COM_DELETE")]
    /// Delete files matching a pattern.
    Delete = 0x06,
    #[doc(alias = "SMB_COM_RENAME")]
    /// Rename a file.
    Rename = 0x07,
    #[doc(alias = "SMB_COM_QUERY_INFORMATION")]
    /// Query attributes of a path.
    QueryInformation = 0x08,
    #[doc(alias = "SMB_COM_SETATTR")]
    /// Set attributes of a path.
    SetAttr = 0x09,
    #[doc(alias = "SMB_COM_WRITE")]
    /// Core-protocol write.
    Write = 0x0B,
    #[doc(alias = "SMB_COM_CHECK_DIRECTORY")]
    /// Verify that a path names a directory.
    CheckDirectory = 0x10,
    #[doc(alias = "SMB_COM_PROCESS_EXIT")]
    /// Client process termination.
    ProcessExit = 0x11,
    #[doc(alias = "SMB_COM_LOCKING_ANDX")]
    /// Byte-range locks and oplock acknowledgements.
    LockingAndx = 0x24,
    #[doc(alias = "SMB_COM_TRANSACTION")]
    /// Named pipe and mailslot transaction.
    Transaction = 0x25,
    #[doc(alias = "SMB_COM_ECHO")]
    /// Echo request.
    Echo = 0x2B,
    #[doc(alias = "SMB_COM_OPEN_ANDX")]
    /// Open a file.
    OpenAndx = 0x2D,
    #[doc(alias = "SMB_COM_READ_ANDX")]
    /// Read from a file.
    ReadAndx = 0x2E,
    #[doc(alias = "SMB_COM_WRITE_ANDX")]
    /// Write to a file, with 32-bit data length.
    WriteAndx = 0x2F,
    #[doc(alias = "SMB_COM_TRANSACTION2")]
    /// File system transaction.
    Transaction2 = 0x32,
    #[doc(alias = "SMB_COM_FIND_CLOSE2")]
    /// Close a directory search handle.
    FindClose2 = 0x34,
    #[doc(alias = "SMB_COM_TREE_DISCONNECT")]
    /// Disconnect from a share.
    TreeDisconnect = 0x71,
    #[doc(alias = "SMB_COM_NEGOTIATE")]
    /// Dialect negotiation.
    Negotiate = 0x72,
    #[doc(alias = "SMB_COM_SESSION_SETUP_ANDX")]
    /// Session setup and authentication.
    SessionSetupAndx = 0x73,
    #[doc(alias = "SMB_COM_LOGOFF_ANDX")]
    /// Session logoff.
    LogoffAndx = 0x74,
    #[doc(alias = "SMB_COM_TREE_CONNECT_ANDX")]
    /// Connect to a share.
    TreeConnectAndx = 0x75,
    #[doc(alias = "SMB_COM_NT_CREATE_ANDX")]
    /// Create or open a file with NT semantics.
    NtCreateAndx = 0xA2,
    #[doc(alias = "SMB_COM_NT_CANCEL")]
    /// Cancel a pending request.
    NtCancel = 0xA4,
    #[doc(alias = "SMB_COM_NT_RENAME")]
    /// Rename or create a hard link.
    NtRename = 0xA5,
}

/// Error returned when parsing an [`Smb1Command`] from its mnemonic name fails.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown SMB1 command name: \"{invalid_name}\"")]
pub struct ParseCommandError {
    invalid_name: String,
}

impl ParseCommandError {
    /// Creates a parse error that records the invalid mnemonic name.
    #[must_use]
    pub fn new(invalid_name: &str) -> Self {
        Self {
            invalid_name: invalid_name.to_owned(),
        }
    }

    /// Returns the mnemonic name that failed to parse.
    #[must_use]
    pub fn invalid_name(&self) -> &str {
        &self.invalid_name
    }
}

impl Smb1Command {
    /// Returns the numeric representation expected on the wire.
    #[must_use]
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Attempts to construct an [`Smb1Command`] from its wire code.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(Self::CreateDirectory),
            0x01 => Some(Self::DeleteDirectory),
            0x04 => Some(Self::Close),
            0x05 => Some(Self::Flush),
            0x06 => Some(Self::Delete),
            0x07 => Some(Self::Rename),
            0x08 => Some(Self::QueryInformation),
            0x09 => Some(Self::SetAttr),
            0x0B => Some(Self::Write),
            0x10 => Some(Self::CheckDirectory),
            0x11 => Some(Self::ProcessExit),
            0x24 => Some(Self::LockingAndx),
            0x25 => Some(Self::Transaction),
            0x2B => Some(Self::Echo),
            0x2D => Some(Self::OpenAndx),
            0x2E => Some(Self::ReadAndx),
            0x2F => Some(Self::WriteAndx),
            0x32 => Some(Self::Transaction2),
            0x34 => Some(Self::FindClose2),
            0x71 => Some(Self::TreeDisconnect),
            0x72 => Some(Self::Negotiate),
            0x73 => Some(Self::SessionSetupAndx),
            0x74 => Some(Self::LogoffAndx),
            0x75 => Some(Self::TreeConnectAndx),
            0xA2 => Some(Self::NtCreateAndx),
            0xA4 => Some(Self::NtCancel),
            0xA5 => Some(Self::NtRename),
            _ => None,
        }
    }

    /// Every supported command, ordered by wire code.
    pub const ALL: [Self; 27] = [
        Self::CreateDirectory,
        Self::DeleteDirectory,
        Self::Close,
        Self::Flush,
        Self::Delete,
        Self::Rename,
        Self::QueryInformation,
        Self::SetAttr,
        Self::Write,
        Self::CheckDirectory,
        Self::ProcessExit,
        Self::LockingAndx,
        Self::Transaction,
        Self::Echo,
        Self::OpenAndx,
        Self::ReadAndx,
        Self::WriteAndx,
        Self::Transaction2,
        Self::FindClose2,
        Self::TreeDisconnect,
        Self::Negotiate,
        Self::SessionSetupAndx,
        Self::LogoffAndx,
        Self::TreeConnectAndx,
        Self::NtCreateAndx,
        Self::NtCancel,
        Self::NtRename,
    ];

    /// Returns the protocol mnemonic, e.g. `SMB_COM_CLOSE`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CreateDirectory => "SMB_COM_CREATE_DIRECTORY",
            Self::DeleteDirectory => "SMB_COM_DELETE_DIRECTORY",
            Self::Close => "SMB_COM_CLOSE",
            Self::Flush => "SMB_COM_FLUSH",
            Self::Delete => "SMB_COM_DELETE",
            Self::Rename => "SMB_COM_RENAME",
            Self::QueryInformation => "SMB_COM_QUERY_INFORMATION",
            Self::SetAttr => "SMB_COM_SETATTR",
            Self::Write => "SMB_COM_WRITE",
            Self::CheckDirectory => "SMB_COM_CHECK_DIRECTORY",
            Self::ProcessExit => "SMB_COM_PROCESS_EXIT",
            Self::LockingAndx => "SMB_COM_LOCKING_ANDX",
            Self::Transaction => "SMB_COM_TRANSACTION",
            Self::Echo => "SMB_COM_ECHO",
            Self::OpenAndx => "SMB_COM_OPEN_ANDX",
            Self::ReadAndx => "SMB_COM_READ_ANDX",
            Self::WriteAndx => "SMB_COM_WRITE_ANDX",
            Self::Transaction2 => "SMB_COM_TRANSACTION2",
            Self::FindClose2 => "SMB_COM_FIND_CLOSE2",
            Self::TreeDisconnect => "SMB_COM_TREE_DISCONNECT",
            Self::Negotiate => "SMB_COM_NEGOTIATE",
            Self::SessionSetupAndx => "SMB_COM_SESSION_SETUP_ANDX",
            Self::LogoffAndx => "SMB_COM_LOGOFF_ANDX",
            Self::TreeConnectAndx => "SMB_COM_TREE_CONNECT_ANDX",
            Self::NtCreateAndx => "SMB_COM_NT_CREATE_ANDX",
            Self::NtCancel => "SMB_COM_NT_CANCEL",
            Self::NtRename => "SMB_COM_NT_RENAME",
        }
    }
}

impl TryFrom<u8> for Smb1Command {
    type Error = u8;

    #[inline]
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value).ok_or(value)
    }
}

impl From<Smb1Command> for u8 {
    #[inline]
    fn from(command: Smb1Command) -> Self {
        command.as_u8()
    }
}

impl fmt::Display for Smb1Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Smb1Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|command| command.name() == s)
            .ok_or_else(|| ParseCommandError::new(s))
    }
}
