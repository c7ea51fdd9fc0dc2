//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for the save-draft shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
///
/// Ctrl+S is accepted everywhere since most terminals swallow Cmd.
#[cfg(target_os = "macos")]
pub const SAVE_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SAVE_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Save draft shortcut display
#[cfg(target_os = "macos")]
pub const SAVE_SHORTCUT: &str = "Cmd+S";

#[cfg(not(target_os = "macos"))]
pub const SAVE_SHORTCUT: &str = "Ctrl+S";
