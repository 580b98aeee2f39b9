use super::document::DocumentId;
use super::file_type::FileType;

/// All messages that can be sent through the UI channel.
/// Menu callbacks send the action variants; the controller sends the
/// notification variants back so dependents can refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // File
    FileNew,
    FileOpen,
    FileSave,
    FileSaveAs,
    FileQuit,
    WindowClose,

    // Recent files menu
    OpenRecent(String),
    ClearRecentFiles,

    // Tabs
    TabSwitch(DocumentId),
    TabClose(DocumentId),
    TabCloseActive,

    // File type override for the active document
    SetFileType(FileType),

    // Notifications
    RecentFilesUpdated,
    ActiveTabChanged(DocumentId),
}
