use std::path::PathBuf;
use std::process::Command;

use serde_json::Value;

pub fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf()
}

pub fn bk_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bk"));
    cmd.current_dir(workspace_root());
    cmd
}

/// Run bk, assert exit code, return parsed JSON stdout.
pub fn bk_json(args: &[&str], expected_exit: i32) -> Value {
    let out = bk_bin().args(args).output().expect("failed to run bk");
    let code = out.status.code().unwrap_or(-1);
    assert_eq!(
        code,
        expected_exit,
        "exit mismatch for: bk {}\nstdout: {}\nstderr: {}",
        args.join(" "),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    serde_json::from_slice(&out.stdout).unwrap_or_else(|e| {
        panic!(
            "invalid JSON from: bk {}\n{e}\nstdout: {}",
            args.join(" "),
            String::from_utf8_lossy(&out.stdout)
        )
    })
}

/// Run bk, return stdout as string (exit 0 expected).
#[allow(dead_code)]
pub fn bk_stdout(args: &[&str]) -> String {
    let out = bk_bin().args(args).output().expect("failed to run bk");
    assert!(
        out.status.success(),
        "bk {} failed with exit {}\nstderr: {}",
        args.join(" "),
        out.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8_lossy(&out.stdout).to_string()
}
