// crates/trsh-cli/tests/cli.rs - End-to-end tests for the trsh binary
//
// A fake board script records its arguments, one per line, so each test can
// check exactly what trsh forwarded. The fake runs through `sh` so the test
// never executes a file it just wrote, apart from the one direct-exec test.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// trsh with a clean environment and a config file inside the sandbox
    fn trsh(&self) -> Command {
        let mut cmd = Command::cargo_bin("trsh").unwrap();
        cmd.env_remove("TRELLO_SCRIPT")
            .env_remove("TRSH_INTERPRETER")
            .env_remove("RUST_LOG")
            .env("TRSH_CONFIG", self.path("config.toml"));
        cmd
    }

    /// Fake board script that logs its arguments and exits with `status`
    fn fake_script(&self, status: i32) -> PathBuf {
        let script = self.path("board.sh");
        let log = self.path("calls.log");
        fs::write(
            &script,
            format!(
                "#!/bin/sh\nprintf '%s\\n' \"$@\" > '{}'\nexit {status}\n",
                log.display()
            ),
        )
        .unwrap();
        script
    }

    /// trsh running the fake script through sh
    fn trsh_with_fake(&self, status: i32) -> Command {
        let script = self.fake_script(status);
        let mut cmd = self.trsh();
        cmd.arg("--interpreter").arg("sh").arg("--script").arg(script);
        cmd
    }

    fn calls(&self) -> Vec<String> {
        read_lines(&self.path("calls.log"))
    }
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn show_list_defaults_to_done() {
    let sandbox = Sandbox::new();
    sandbox.trsh_with_fake(0).arg("list").assert().success();
    assert_eq!(sandbox.calls(), ["show_list", "-arg1=Done"]);
}

#[test]
fn show_list_codes() {
    let cases = [
        ("i", "In progress"),
        ("w", "Waiting for customer"),
        ("t", "Testing"),
        ("d", "Done"),
        ("x", "Done"),
    ];
    for (code, list) in cases {
        let sandbox = Sandbox::new();
        sandbox.trsh_with_fake(0).args(["list", code]).assert().success();
        assert_eq!(sandbox.calls(), ["show_list".to_string(), format!("-arg1={list}")]);
    }
}

#[test]
fn create_forwards_name_unchanged() {
    let sandbox = Sandbox::new();
    sandbox
        .trsh_with_fake(0)
        .args(["create", "  ABC-12 \"quoted\" $HOME 3", "t"])
        .assert()
        .success();
    assert_eq!(
        sandbox.calls(),
        [
            "create_card",
            "-arg1=  ABC-12 \"quoted\" $HOME 3",
            "-arg2=Testing"
        ]
    );
}

#[test]
fn create_defaults_to_in_progress() {
    let sandbox = Sandbox::new();
    sandbox.trsh_with_fake(0).args(["trcc", "ABC-1", "i"]).assert().success();
    assert_eq!(sandbox.calls(), ["create_card", "-arg1=ABC-1", "-arg2=In progress"]);
}

#[test]
fn list_codes_starting_with_hyphen_fall_back() {
    let cases: [(&[&str], &[&str]); 3] = [
        (&["list", "-x"], &["show_list", "-arg1=Done"]),
        (
            &["create", "A", "-d"],
            &["create_card", "-arg1=A", "-arg2=In progress"],
        ),
        (&["trmc", "A", "-i"], &["move_card", "-arg1=A", "-arg2=Done"]),
    ];
    for (args, expected) in cases {
        let sandbox = Sandbox::new();
        sandbox.trsh_with_fake(0).args(args).assert().success();
        assert_eq!(sandbox.calls(), expected, "{args:?}");
    }
}

#[test]
fn flag_like_name_after_double_dash() {
    let sandbox = Sandbox::new();
    sandbox
        .trsh_with_fake(0)
        .args(["delete", "--", "-v"])
        .assert()
        .success();
    assert_eq!(sandbox.calls(), ["delete_card", "-arg1=-v"]);
}

#[test]
fn shortcut_aliases_match_commands() {
    let pairs: [(&[&str], &[&str]); 7] = [
        (&["board"], &["trb"]),
        (&["monday"], &["trmon"]),
        (&["list", "w"], &["trlst", "w"]),
        (&["create", "A", "d"], &["trcc", "A", "d"]),
        (&["delete", "A"], &["trdc", "A"]),
        (&["move", "A", "t"], &["trmc", "A", "t"]),
        (&["rename", "A", "B 2"], &["truc", "A", "B 2"]),
    ];
    for (command, alias) in pairs {
        let sandbox = Sandbox::new();
        sandbox.trsh_with_fake(0).args(command).assert().success();
        let expected = sandbox.calls();

        sandbox.trsh_with_fake(0).args(alias).assert().success();
        assert_eq!(sandbox.calls(), expected, "{alias:?}");
    }
}

#[test]
fn move_delete_rename_and_board_actions() {
    let sandbox = Sandbox::new();

    sandbox.trsh_with_fake(0).args(["move", "ABC-7"]).assert().success();
    assert_eq!(sandbox.calls(), ["move_card", "-arg1=ABC-7", "-arg2=Done"]);

    sandbox.trsh_with_fake(0).args(["delete", "ABC-7"]).assert().success();
    assert_eq!(sandbox.calls(), ["delete_card", "-arg1=ABC-7"]);

    sandbox
        .trsh_with_fake(0)
        .args(["rename", "ABC-7", "ABC-7 5"])
        .assert()
        .success();
    assert_eq!(sandbox.calls(), ["update_card", "-arg1=ABC-7", "-arg2=ABC-7 5"]);

    sandbox.trsh_with_fake(0).arg("board").assert().success();
    assert_eq!(sandbox.calls(), ["show_board"]);

    sandbox.trsh_with_fake(0).arg("monday").assert().success();
    assert_eq!(sandbox.calls(), ["monday"]);
}

#[test]
fn script_failure_still_succeeds() {
    let sandbox = Sandbox::new();
    sandbox
        .trsh_with_fake(3)
        .args(["delete", "ABC-7"])
        .assert()
        .success()
        .stderr(predicate::str::contains("exited unsuccessfully"));
    assert_eq!(sandbox.calls(), ["delete_card", "-arg1=ABC-7"]);
}

#[test]
fn unlaunchable_script_still_succeeds() {
    let sandbox = Sandbox::new();
    sandbox
        .trsh()
        .arg("--script")
        .arg(sandbox.path("does-not-exist"))
        .arg("board")
        .assert()
        .success()
        .stderr(predicate::str::contains("failed to launch"));
}

#[test]
fn missing_script_is_an_error() {
    let sandbox = Sandbox::new();
    sandbox
        .trsh()
        .arg("board")
        .assert()
        .failure()
        .stderr(predicate::str::contains("TRELLO_SCRIPT"));
}

#[test]
fn script_path_from_environment() {
    let sandbox = Sandbox::new();
    let script = sandbox.fake_script(0);
    sandbox
        .trsh()
        .env("TRELLO_SCRIPT", &script)
        .env("TRSH_INTERPRETER", "sh")
        .args(["list", "t"])
        .assert()
        .success();
    assert_eq!(sandbox.calls(), ["show_list", "-arg1=Testing"]);
}

#[test]
fn config_file_then_env_then_flag() {
    let sandbox = Sandbox::new();
    let script = sandbox.fake_script(0);
    fs::write(
        sandbox.path("config.toml"),
        format!(
            "[script]\npath = '{}'\ninterpreter = \"sh\"\n",
            script.display()
        ),
    )
    .unwrap();

    // File alone
    sandbox
        .trsh()
        .args(["--dry-run", "board"])
        .assert()
        .success()
        .stdout(predicate::str::contains("board.sh show_board"));

    // Environment beats the file
    sandbox
        .trsh()
        .env("TRELLO_SCRIPT", "/from/env.py")
        .args(["--dry-run", "board"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/from/env.py"));

    // Flag beats both
    sandbox
        .trsh()
        .env("TRELLO_SCRIPT", "/from/env.py")
        .args(["--dry-run", "--script", "/from/flag.py", "board"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("/from/flag.py")
                .and(predicate::str::contains("/from/env.py").not()),
        );
}

#[test]
fn dry_run_does_not_spawn() {
    let sandbox = Sandbox::new();
    sandbox
        .trsh_with_fake(0)
        .args(["--dry-run", "move", "ABC-12 5", "w"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "board.sh move_card '-arg1=ABC-12 5' '-arg2=Waiting for customer'",
        ));
    assert!(!sandbox.path("calls.log").exists());
}

#[test]
fn broken_config_is_reported() {
    let sandbox = Sandbox::new();
    fs::write(sandbox.path("config.toml"), "[script\n").unwrap();
    sandbox
        .trsh()
        .args(["--script", "/x.py", "board"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config.toml"));
}

#[test]
fn config_init_show_and_path() {
    let sandbox = Sandbox::new();
    let config = sandbox.path("config.toml");

    sandbox
        .trsh()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    sandbox.trsh().args(["config", "init"]).assert().success();
    assert!(config.exists());

    sandbox
        .trsh()
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    sandbox
        .trsh()
        .env("TRSH_INTERPRETER", "python3")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with(format!("# {}\n", config.display()))
                .and(predicate::str::contains("interpreter = \"python3\"")),
        );
}

#[test]
fn config_show_without_file_uses_defaults() {
    let sandbox = Sandbox::new();
    sandbox
        .trsh()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("config.toml (not found, defaults)")
                .and(predicate::str::contains("env_var = \"TRELLO_SCRIPT\"")),
        );
}

#[test]
fn init_generates_shell_functions() {
    let sandbox = Sandbox::new();
    sandbox
        .trsh()
        .args(["init", "bash"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("function trlst()")
                .and(predicate::str::contains("\\command trsh move \"$@\"")),
        );

    sandbox
        .trsh()
        .args(["init", "fish", "--program", "board"])
        .assert()
        .success()
        .stdout(predicate::str::contains("command board create $argv"));

    sandbox
        .trsh()
        .args(["init", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported shell"));
}

#[test]
fn shortcuts_json() {
    let sandbox = Sandbox::new();
    let output = sandbox.trsh().args(["shortcuts", "--json"]).output().unwrap();
    assert!(output.status.success());

    let shortcuts: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<_> = shortcuts
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["trb", "trmon", "trlst", "trcc", "trdc", "trmc", "truc"]);
}

#[test]
fn shortcuts_single_lookup() {
    let sandbox = Sandbox::new();
    sandbox
        .trsh()
        .args(["shortcuts", "trlst"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("[i|w|t]")
                .and(predicate::str::contains("trcc").not())
                .and(predicate::str::contains("trsh init").not()),
        );

    sandbox
        .trsh()
        .args(["shortcuts", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown shortcut: nope"));
}

#[test]
fn reference_commands_ignore_broken_config() {
    let sandbox = Sandbox::new();
    fs::write(sandbox.path("config.toml"), "[script\n").unwrap();

    sandbox
        .trsh()
        .arg("shortcuts")
        .assert()
        .success()
        .stdout(predicate::str::contains("trmon"));

    sandbox
        .trsh()
        .arg("lists")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Waiting for customer")
                .and(predicate::str::contains("create uses In progress")),
        );
}

#[cfg(unix)]
#[test]
fn script_runs_directly_without_interpreter() {
    use std::os::unix::fs::PermissionsExt;

    let sandbox = Sandbox::new();
    let script = sandbox.fake_script(0);
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

    sandbox
        .trsh()
        .arg("--script")
        .arg(&script)
        .args(["trlst", "i"])
        .assert()
        .success();
    assert_eq!(sandbox.calls(), ["show_list", "-arg1=In progress"]);
}
