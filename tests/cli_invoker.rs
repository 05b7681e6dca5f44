// tests/cli_invoker.rs

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use jobwatch::assert::output_contains;
use jobwatch::cli::CliClient;
use jobwatch_test_utils::init_tracing;

/// Stand-in CLI: prints its argv, the config env var and the working
/// directory, one item per line.
fn fake_cli(dir: &Path) -> PathBuf {
    let path = dir.join("fakecli");
    let script = "#!/bin/sh\n\
        for a in \"$@\"; do echo \"arg:$a\"; done\n\
        echo \"rc:${TESTRC:-unset}\"\n\
        echo \"cwd:$(pwd)\"\n";
    fs::write(&path, script).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

#[tokio::test]
async fn app_invocations_prepend_the_target_flag() {
    init_tracing();

    let dir = tempfile::tempdir().unwrap();
    let cli = CliClient::new(fake_cli(dir.path())).with_dir(dir.path());

    let result = cli
        .run_for_app("my-app", &["scale", "worker=3"])
        .await
        .unwrap();
    assert!(result.success());

    let out = result.stdout_str().to_string();
    let args: Vec<&str> = out.lines().filter(|l| l.starts_with("arg:")).collect();
    assert_eq!(args, vec!["arg:-a", "arg:my-app", "arg:scale", "arg:worker=3"]);
}

#[tokio::test]
async fn config_file_binding_is_exported_to_the_child() {
    init_tracing();

    let dir = tempfile::tempdir().unwrap();
    let rc_path = dir.path().join("rc.toml");
    let cli = CliClient::new(fake_cli(dir.path()))
        .with_dir(dir.path())
        .with_config_file("TESTRC", &rc_path);

    let result = cli.run(&["clusters"]).await.unwrap();
    assert!(output_contains(&result, "rc.toml"));
    assert!(!output_contains(&result, "rc:unset"));
}

#[tokio::test]
async fn working_directory_is_applied() {
    init_tracing();

    let dir = tempfile::tempdir().unwrap();
    let cli = CliClient::new(fake_cli(dir.path())).with_dir(dir.path());

    let result = cli.run(&[]).await.unwrap();
    let name = dir.path().file_name().unwrap().to_str().unwrap();
    assert!(
        output_contains(&result, name),
        "stdout: {}",
        result.stdout_str()
    );
}

#[tokio::test]
async fn env_overlay_reaches_the_child() {
    init_tracing();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("envcli");
    fs::write(&path, "#!/bin/sh\necho \"val:${ENV_TEST:-unset}\"\n").unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();

    let cli = CliClient::new(&path)
        .with_dir(dir.path())
        .with_env("ENV_TEST", "var");

    let result = cli.run(&[]).await.unwrap();
    assert!(output_contains(&result, "val:var"));
}
