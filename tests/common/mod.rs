use assert_cmd::Command;
use std::path::Path;

pub fn quotary_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("quotary").unwrap();
    // Point every user-directory lookup at the sandbox so tests never touch
    // the real config or documents folders.
    cmd.env("HOME", home);
    cmd.env("XDG_CONFIG_HOME", home.join(".config"));
    cmd.env_remove("RUST_LOG");
    cmd
}
