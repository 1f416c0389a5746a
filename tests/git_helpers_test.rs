use make_utils::git::Git;
use make_utils::process::{ErrorMode, MockRunner};
use make_utils::{MakeUtilsError, Submodule};

const TOPLEVEL: &str = "/work/blender";
const GITMODULES: &str = "/work/blender/.gitmodules";

fn git(runner: MockRunner) -> Git<MockRunner> {
    Git::new(runner, "git")
}

// ============================================================================
// Branch existence
// ============================================================================

#[test]
fn test_branch_exists_local_short_circuits() {
    let git = git(MockRunner::new());
    assert!(git.branch_exists("main"));
    assert_eq!(git.runner().call_count(), 1);
    assert_eq!(git.runner().commands(), vec!["git rev-parse --verify main"]);
}

#[test]
fn test_branch_exists_falls_back_to_upstream() {
    let git = git(MockRunner::new().fail("git rev-parse --verify blender-v4.5-release", 128));
    assert!(git.branch_exists("blender-v4.5-release"));
    assert_eq!(
        git.runner().commands(),
        vec![
            "git rev-parse --verify blender-v4.5-release",
            "git rev-parse --verify remotes/upstream/blender-v4.5-release",
        ]
    );
}

#[test]
fn test_branch_exists_falls_back_to_origin() {
    let git = git(
        MockRunner::new()
            .fail("git rev-parse --verify topic", 128)
            .fail("git rev-parse --verify remotes/upstream/topic", 128),
    );
    assert!(git.branch_exists("topic"));
    assert_eq!(git.runner().call_count(), 3);
    assert_eq!(
        git.runner().commands()[2],
        "git rev-parse --verify remotes/origin/topic"
    );
}

#[test]
fn test_branch_exists_none_found() {
    let git = git(
        MockRunner::new()
            .fail("git rev-parse --verify gone", 128)
            .fail("git rev-parse --verify remotes/upstream/gone", 128)
            .fail("git rev-parse --verify remotes/origin/gone", 128),
    );
    assert!(!git.branch_exists("gone"));
    assert_eq!(git.runner().call_count(), 3);
}

// ============================================================================
// Remotes
// ============================================================================

#[test]
fn test_remote_exist_false_when_name_echoed_back() {
    let git = git(MockRunner::new().respond("git ls-remote --get-url upstream", 0, "upstream\n"));
    assert!(!git.remote_exists("upstream").unwrap());
}

#[test]
fn test_remote_exist_true_for_url() {
    let git = git(MockRunner::new().respond(
        "git ls-remote --get-url upstream",
        0,
        "https://projects.blender.org/blender/blender.git",
    ));
    assert!(git.remote_exists("upstream").unwrap());
}

#[test]
fn test_remote_url_failure_is_fatal() {
    let git = git(MockRunner::new().respond(
        "git ls-remote --get-url origin",
        128,
        "fatal: not a git repository",
    ));
    match git.remote_url("origin") {
        Err(MakeUtilsError::ProcessFailed { code, output, .. }) => {
            assert_eq!(code, 128);
            assert_eq!(output.as_deref(), Some("fatal: not a git repository"));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_remotes_filters_unconfirmed_entries() {
    let git = git(
        MockRunner::new()
            .respond("git remote", 0, "origin\nupstream\n")
            .respond("git ls-remote --get-url origin", 0, "git@example.org:me/blender.git")
            .respond("git ls-remote --get-url upstream", 0, "upstream"),
    );
    assert_eq!(git.remotes().unwrap(), vec!["origin".to_string()]);
}

#[test]
fn test_remotes_empty_listing() {
    let git = git(MockRunner::new());
    assert!(git.remotes().unwrap().is_empty());
    assert_eq!(git.runner().call_count(), 1);
}

#[test]
fn test_is_remote_repository() {
    let git = git(MockRunner::new().fail("git ls-remote /no/such/repo HEAD", 128));
    assert!(!git.is_remote_repository("/no/such/repo"));
    assert!(git.is_remote_repository("https://example.org/repo.git"));

    let calls = git.runner().calls();
    assert!(calls.iter().all(|c| c.silent && c.mode == ErrorMode::Soft));
}

#[test]
fn test_add_remote_sets_push_url_separately() {
    let git = git(MockRunner::new());
    git.add_remote(
        "upstream",
        "https://projects.blender.org/blender/blender.git",
        "git@projects.blender.org:blender/blender.git",
    )
    .unwrap();

    let calls = git.runner().calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(
        calls[0].command(),
        "git remote add upstream https://projects.blender.org/blender/blender.git"
    );
    assert_eq!(
        calls[1].command(),
        "git remote set-url --push upstream git@projects.blender.org:blender/blender.git"
    );
    assert!(calls.iter().all(|c| c.silent && c.mode == ErrorMode::Fatal));
}

#[test]
fn test_add_remote_stops_when_add_fails() {
    let git = git(MockRunner::new().fail("git remote add origin url", 3));
    let err = git.add_remote("origin", "url", "push").unwrap_err();
    assert_eq!(err.exit_code(), 3);
    assert_eq!(git.runner().call_count(), 1);
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn test_get_config_from_file() {
    let git = git(MockRunner::new().respond(
        "git config --file .gitmodules --get submodule.tests/data.url",
        0,
        "https://projects.blender.org/blender/blender-test-data.git\n",
    ));
    let url = git
        .get_config(
            "submodule.tests/data.url",
            Some(std::path::Path::new(".gitmodules")),
        )
        .unwrap();
    assert_eq!(url, "https://projects.blender.org/blender/blender-test-data.git");
}

// ============================================================================
// Submodules
// ============================================================================

fn submodule_runner() -> MockRunner {
    MockRunner::new().respond("git rev-parse --show-toplevel", 0, TOPLEVEL)
}

fn path_lookup(dir: &str) -> String {
    format!(
        "git config --file {} --get submodule.{}.path",
        GITMODULES, dir
    )
}

fn local_update(dir: &str) -> String {
    format!("git config --local submodule.{}.update", dir)
}

fn gitmodules_update(dir: &str) -> String {
    format!("git config --file {} submodule.{}.update", GITMODULES, dir)
}

#[test]
fn test_unknown_submodule_is_disabled() {
    let git = git(submodule_runner().fail(path_lookup("lib/nope"), 1));
    assert!(!git.is_submodule_enabled(&Submodule::new("lib/nope")).unwrap());
    // Nothing beyond the toplevel and path lookups.
    assert_eq!(git.runner().call_count(), 2);
}

#[test]
fn test_submodule_without_strategy_is_enabled() {
    let dir = "lib/linux_x64";
    let git = git(
        submodule_runner()
            .respond(path_lookup(dir), 0, dir)
            .fail(local_update(dir), 1)
            .fail(gitmodules_update(dir), 1),
    );
    assert!(git.is_submodule_enabled(&Submodule::new(dir)).unwrap());
}

#[test]
fn test_gitmodules_none_disables() {
    let dir = "lib/windows_x64";
    let git = git(
        submodule_runner()
            .respond(path_lookup(dir), 0, dir)
            .fail(local_update(dir), 1)
            .respond(gitmodules_update(dir), 0, "none"),
    );
    assert!(!git.is_submodule_enabled(&Submodule::new(dir)).unwrap());
}

#[test]
fn test_local_override_wins_over_gitmodules() {
    let dir = "tests/data";
    let git = git(
        submodule_runner()
            .respond(path_lookup(dir), 0, dir)
            .respond(local_update(dir), 0, "checkout")
            .respond(gitmodules_update(dir), 0, "none"),
    );
    assert!(git.is_submodule_enabled(&Submodule::new(dir)).unwrap());
    assert!(!git.runner().commands().contains(&gitmodules_update(dir)));
}

#[test]
fn test_local_none_is_case_insensitive() {
    let dir = "release/datafiles/assets";
    let git = git(
        submodule_runner()
            .respond(path_lookup(dir), 0, dir)
            .respond(local_update(dir), 0, "NONE"),
    );
    assert!(!git.is_submodule_enabled(&Submodule::new(dir)).unwrap());
}

#[test]
fn test_other_strategy_is_enabled() {
    let dir = "lib/macos_arm64";
    let git = git(
        submodule_runner()
            .respond(path_lookup(dir), 0, dir)
            .fail(local_update(dir), 1)
            .respond(gitmodules_update(dir), 0, "rebase"),
    );
    assert!(git.is_submodule_enabled(&Submodule::new(dir)).unwrap());
}

#[test]
fn test_submodule_status_outside_repository_is_fatal() {
    let git = git(MockRunner::new().respond(
        "git rev-parse --show-toplevel",
        128,
        "fatal: not a git repository",
    ));
    let err = git
        .is_submodule_enabled(&Submodule::new("lib/linux_x64"))
        .unwrap_err();
    assert_eq!(err.exit_code(), 128);
}

#[test]
fn test_update_submodule_runs_both_phases() {
    let git = git(MockRunner::new());
    assert!(git.update_submodule(&Submodule::new("lib/linux_x64")));

    let calls = git.runner().calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(
        calls[0].command_line(),
        "GIT_LFS_SKIP_SMUDGE=1 git submodule update --init --progress lib/linux_x64"
    );
    assert_eq!(calls[1].command_line(), "git -C lib/linux_x64 lfs pull");
    assert!(calls[1].env.is_empty());
    assert!(calls.iter().all(|c| !c.silent && c.mode == ErrorMode::Soft));
}

#[test]
fn test_update_submodule_checkout_failure_skips_lfs() {
    let git = git(MockRunner::new().fail(
        "git submodule update --init --progress lib/linux_x64",
        1,
    ));
    assert!(!git.update_submodule(&Submodule::new("lib/linux_x64")));
    assert_eq!(git.runner().call_count(), 1);
}

#[test]
fn test_update_submodule_lfs_failure() {
    let git = git(MockRunner::new().fail("git -C tests/data lfs pull", 2));
    assert!(!git.update_submodule(&Submodule::new("tests/data")));
    assert_eq!(git.runner().call_count(), 2);
}

// ============================================================================
// Current branch
// ============================================================================

#[test]
fn test_current_branch() {
    let git = git(MockRunner::new().respond("git rev-parse --abbrev-ref HEAD", 0, "main\n"));
    assert_eq!(git.branch().unwrap(), "main");
}

#[test]
fn test_custom_git_command_is_used() {
    let git = Git::new(MockRunner::new(), "/opt/git/bin/git");
    git.local_branch_exists("main");
    assert_eq!(git.command(), "/opt/git/bin/git");
    assert_eq!(git.runner().calls()[0].program, "/opt/git/bin/git");
}
