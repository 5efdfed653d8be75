//! Key simulation by running the host's key utility once per keystroke.
//!
//! Every [`KeyExecutor::press`] call starts exactly one child process and
//! awaits its exit on the Tokio runtime, so other sessions keep being served
//! while it runs.  Overlapping presses are overlapping processes; nothing is
//! pooled or queued, and a crashing utility cannot take server state with it.
//!
//! # Utilities per platform
//!
//! | Platform | Command                                                            |
//! |----------|--------------------------------------------------------------------|
//! | Linux    | `xdotool key Left`                                                 |
//! | macOS    | `osascript -e 'tell application "System Events" to key code 123'`  |
//! | Windows  | `powershell -NoProfile -NonInteractive -Command "(New-Object -ComObject WScript.Shell).SendKeys('{LEFT}')"` |
//!
//! # Permissions
//!
//! `xdotool` needs an X11 (or XWayland) session reachable through `DISPLAY`.
//! On macOS the terminal running Slidex needs the Accessibility permission,
//! otherwise System Events refuses the keystroke and `osascript` exits
//! non-zero.  Both cases surface as [`ExecutionError::Failed`] with the
//! utility's stderr.

use std::process::Stdio;

use async_trait::async_trait;
use slidex_core::{AllowedKey, KeyMapper};
use tokio::process::Command;
use tracing::debug;

use crate::application::key_executor::{ExecutionError, KeyExecutor};

/// Host platform, selecting which utility simulates keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPlatform {
    Linux,
    MacOs,
    Windows,
}

impl HostPlatform {
    /// The platform this binary was compiled for.  Other Unixes use `xdotool`.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            HostPlatform::MacOs
        } else if cfg!(target_os = "windows") {
            HostPlatform::Windows
        } else {
            HostPlatform::Linux
        }
    }

    /// Builds the command that presses `key` on this platform.
    pub fn key_command(self, key: AllowedKey) -> KeyCommand {
        match self {
            HostPlatform::Linux => {
                KeyCommand::new("xdotool", ["key", KeyMapper::to_x11_keysym_name(key)])
            }
            HostPlatform::MacOs => KeyCommand::new(
                "osascript",
                [
                    "-e".to_string(),
                    format!(
                        "tell application \"System Events\" to key code {}",
                        KeyMapper::to_macos_cgkeycode(key)
                    ),
                ],
            ),
            HostPlatform::Windows => KeyCommand::new(
                "powershell",
                [
                    "-NoProfile".to_string(),
                    "-NonInteractive".to_string(),
                    "-Command".to_string(),
                    format!(
                        "(New-Object -ComObject WScript.Shell).SendKeys('{}')",
                        KeyMapper::to_windows_sendkeys(key)
                    ),
                ],
            ),
        }
    }
}

/// A program and its arguments.  Arguments are passed as-is, never through a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl KeyCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

type CommandBuilder = Box<dyn Fn(AllowedKey) -> KeyCommand + Send + Sync>;

/// [`KeyExecutor`] that runs one utility process per keystroke.
pub struct CommandKeyExecutor {
    build: CommandBuilder,
}

impl CommandKeyExecutor {
    /// Executor for the platform this binary was compiled for.
    pub fn for_host() -> Self {
        Self::for_platform(HostPlatform::current())
    }

    pub fn for_platform(platform: HostPlatform) -> Self {
        Self::with_builder(move |key| platform.key_command(key))
    }

    /// Executor that runs whatever command `build` returns for each key.
    pub fn with_builder<F>(build: F) -> Self
    where
        F: Fn(AllowedKey) -> KeyCommand + Send + Sync + 'static,
    {
        Self {
            build: Box::new(build),
        }
    }
}

#[async_trait]
impl KeyExecutor for CommandKeyExecutor {
    async fn press(&self, key: AllowedKey) -> Result<(), ExecutionError> {
        let KeyCommand { program, args } = (self.build)(key);
        debug!("simulating {key} with `{program}`");

        let output = Command::new(&program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| ExecutionError::Spawn {
                program: program.clone(),
                source,
            })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(ExecutionError::Failed {
                program,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linux_command_uses_xdotool_keysym() {
        let cmd = HostPlatform::Linux.key_command(AllowedKey::Left);
        assert_eq!(cmd, KeyCommand::new("xdotool", ["key", "Left"]));
    }

    #[test]
    fn test_linux_space_uses_lowercase_keysym() {
        let cmd = HostPlatform::Linux.key_command(AllowedKey::Space);
        assert_eq!(cmd.args, vec!["key", "space"]);
    }

    #[test]
    fn test_macos_command_embeds_cgkeycode() {
        let cmd = HostPlatform::MacOs.key_command(AllowedKey::Right);
        assert_eq!(cmd.program, "osascript");
        assert_eq!(cmd.args[0], "-e");
        assert_eq!(
            cmd.args[1],
            "tell application \"System Events\" to key code 124"
        );
    }

    #[test]
    fn test_windows_command_sends_braced_code() {
        let cmd = HostPlatform::Windows.key_command(AllowedKey::Down);
        assert_eq!(cmd.program, "powershell");
        assert!(cmd
            .args
            .last()
            .unwrap()
            .ends_with("SendKeys('{DOWN}')"));
    }

    #[test]
    fn test_every_key_has_a_command_on_every_platform() {
        for platform in [HostPlatform::Linux, HostPlatform::MacOs, HostPlatform::Windows] {
            for key in AllowedKey::ALL {
                let cmd = platform.key_command(key);
                assert!(!cmd.program.is_empty());
                assert!(!cmd.args.is_empty(), "{platform:?} {key:?}");
            }
        }
    }

    #[tokio::test]
    async fn test_missing_utility_is_a_spawn_error() {
        // Arrange
        let executor = CommandKeyExecutor::with_builder(|_| {
            KeyCommand::new("slidex-no-such-utility-3f9a", Vec::<String>::new())
        });

        // Act
        let result = executor.press(AllowedKey::Left).await;

        // Assert
        match result {
            Err(ExecutionError::Spawn { program, .. }) => {
                assert_eq!(program, "slidex-no-such-utility-3f9a")
            }
            other => panic!("expected spawn error, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_zero_exit_is_success() {
        let executor =
            CommandKeyExecutor::with_builder(|_| KeyCommand::new("sh", ["-c", "exit 0"]));
        assert!(executor.press(AllowedKey::Space).await.is_ok());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_zero_exit_carries_stderr() {
        // Arrange
        let executor = CommandKeyExecutor::with_builder(|_| {
            KeyCommand::new("sh", ["-c", "echo 'cannot open display' >&2; exit 1"])
        });

        // Act
        let result = executor.press(AllowedKey::Space).await;

        // Assert
        match result {
            Err(ExecutionError::Failed { status, stderr, .. }) => {
                assert_eq!(status.code(), Some(1));
                assert_eq!(stderr, "cannot open display");
            }
            other => panic!("expected failed exit, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_builder_receives_the_pressed_key() {
        // The key name reaches the child as a plain argument.
        let executor = CommandKeyExecutor::with_builder(|key| {
            KeyCommand::new("sh", ["-c", "test \"$1\" = up", "sh", key.as_str()])
        });
        assert!(executor.press(AllowedKey::Up).await.is_ok());
        assert!(executor.press(AllowedKey::Down).await.is_err());
    }
}
