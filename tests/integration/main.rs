//! Integration tests for pathcache

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Isolated config + cache file + a small search path
    struct Sandbox {
        temp: TempDir,
        config: PathBuf,
        cache: PathBuf,
    }

    impl Sandbox {
        fn new() -> Self {
            let temp = TempDir::new().unwrap();
            let config = temp.path().join("config.toml");
            let cache = temp.path().join("state").join("path-cache.json");
            fs::write(
                &config,
                format!(
                    "[cache]\nfile = '{}'\n\n[search]\nsuffixes = [\".so\"]\n",
                    cache.display()
                ),
            )
            .unwrap();
            Self {
                temp,
                config,
                cache,
            }
        }

        fn dir(&self, name: &str) -> String {
            let dir = self.temp.path().join("lib").join(name);
            fs::create_dir_all(&dir).unwrap();
            dir.to_string_lossy().into_owned()
        }

        fn touch(&self, dir: &str, file: &str) {
            fs::write(Path::new(dir).join(file), "").unwrap();
        }

        fn cmd(&self) -> Command {
            let mut cmd = cargo_bin_cmd!("pathcache");
            cmd.env("PATHCACHE_CONFIG", &self.config)
                .env_remove("PATHCACHE_PATH");
            cmd
        }

        fn cache_json(&self) -> serde_json::Value {
            let content = fs::read_to_string(&self.cache).unwrap();
            serde_json::from_str(&content).unwrap()
        }
    }

    #[test]
    fn help_displays() {
        let sandbox = Sandbox::new();
        sandbox
            .cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("search-path file resolution"));
    }

    #[test]
    fn version_displays() {
        let sandbox = Sandbox::new();
        sandbox
            .cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("pathcache"));
    }

    #[test]
    fn path_uses_configured_file() {
        let sandbox = Sandbox::new();
        sandbox
            .cmd()
            .arg("path")
            .assert()
            .success()
            .stdout(predicate::str::contains("path-cache.json"));
    }

    #[test]
    fn resolve_finds_and_persists() {
        let sandbox = Sandbox::new();
        let a = sandbox.dir("a");
        let b = sandbox.dir("b");
        sandbox.touch(&b, "libfoo.so");

        sandbox
            .cmd()
            .args(["resolve", "libfoo", "--format", "plain", "-d", &a, "-d", &b])
            .assert()
            .success()
            .stdout(predicate::str::contains(format!("libfoo\t{}", b)));

        let json = sandbox.cache_json();
        assert_eq!(json["libfoo"][0], b.as_str());
    }

    #[test]
    fn tombstones_are_not_persisted() {
        let sandbox = Sandbox::new();
        let a = sandbox.dir("a");
        sandbox.touch(&a, "libfoo.so");

        sandbox
            .cmd()
            .args(["resolve", "libfoo", "libmissing", "-d", &a])
            .assert()
            .success()
            .stdout(predicate::str::contains("(not found)"));

        let json = sandbox.cache_json();
        assert!(json.get("libfoo").is_some());
        assert!(json.get("libmissing").is_none());
    }

    #[test]
    fn resolve_reads_search_path_variable() {
        let sandbox = Sandbox::new();
        let a = sandbox.dir("a");
        sandbox.touch(&a, "libfoo.so");
        let path_var = std::env::join_paths([&a]).unwrap();

        sandbox
            .cmd()
            .env("PATHCACHE_PATH", path_var)
            .args(["resolve", "libfoo", "-f", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains(a.as_str()));
    }

    #[test]
    fn resolve_without_candidates_fails() {
        let sandbox = Sandbox::new();
        sandbox
            .cmd()
            .args(["resolve", "libfoo"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("No candidate directories"));
    }

    #[test]
    fn stale_cache_file_entry_is_repaired() {
        let sandbox = Sandbox::new();
        let a = sandbox.dir("a");
        let b = sandbox.dir("b");
        sandbox.touch(&b, "libfoo.so");
        fs::create_dir_all(sandbox.cache.parent().unwrap()).unwrap();
        fs::write(&sandbox.cache, r#"{"libfoo": ["/nowhere"]}"#).unwrap();

        sandbox
            .cmd()
            .args(["resolve", "libfoo", "-f", "plain", "-d", &a, "-d", &b])
            .assert()
            .success()
            .stdout(predicate::str::contains(b.as_str()));

        assert_eq!(sandbox.cache_json()["libfoo"][0], b.as_str());
    }

    #[test]
    fn locate_prints_first_file() {
        let sandbox = Sandbox::new();
        let a = sandbox.dir("a");
        let b = sandbox.dir("b");
        sandbox.touch(&a, "libfoo.so");
        sandbox.touch(&b, "libfoo.so");

        sandbox
            .cmd()
            .args(["locate", "libfoo", "-d", &a, "-d", &b])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                Path::new(&a).join("libfoo.so").to_string_lossy().into_owned(),
            ));
    }

    #[test]
    fn locate_missing_fails() {
        let sandbox = Sandbox::new();
        let a = sandbox.dir("a");

        sandbox
            .cmd()
            .args(["locate", "libnothing", "-d", &a])
            .assert()
            .failure()
            .stderr(predicate::str::contains("not found"));
    }

    #[test]
    fn show_lists_entries() {
        let sandbox = Sandbox::new();
        let a = sandbox.dir("a");
        sandbox.touch(&a, "libfoo.so");

        sandbox
            .cmd()
            .args(["resolve", "libfoo", "-d", &a])
            .assert()
            .success();

        sandbox
            .cmd()
            .args(["show", "--format", "plain"])
            .assert()
            .success()
            .stdout(predicate::str::contains("libfoo"));
    }

    #[test]
    fn corrupt_cache_is_treated_as_empty() {
        let sandbox = Sandbox::new();
        fs::create_dir_all(sandbox.cache.parent().unwrap()).unwrap();
        fs::write(&sandbox.cache, "{ not json").unwrap();

        sandbox
            .cmd()
            .arg("show")
            .assert()
            .success()
            .stdout(predicate::str::contains("No cached entries"));
    }

    #[test]
    fn clear_empties_cache_file() {
        let sandbox = Sandbox::new();
        let a = sandbox.dir("a");
        sandbox.touch(&a, "libfoo.so");

        sandbox
            .cmd()
            .args(["resolve", "libfoo", "-d", &a])
            .assert()
            .success();

        sandbox.cmd().args(["clear", "--yes"]).assert().success();

        assert_eq!(sandbox.cache_json(), serde_json::json!({}));
    }

    #[test]
    fn clear_without_confirmation_keeps_cache() {
        let sandbox = Sandbox::new();
        let a = sandbox.dir("a");
        sandbox.touch(&a, "libfoo.so");

        sandbox
            .cmd()
            .args(["resolve", "libfoo", "-d", &a])
            .assert()
            .success();

        sandbox.cmd().arg("clear").assert().success();

        assert!(sandbox.cache_json().get("libfoo").is_some());
    }

    #[test]
    fn compact_drops_vanished_files() {
        let sandbox = Sandbox::new();
        let a = sandbox.dir("a");
        let b = sandbox.dir("b");
        sandbox.touch(&a, "libfoo.so");
        sandbox.touch(&b, "libbar.so");

        sandbox
            .cmd()
            .args(["resolve", "libfoo", "libbar", "-d", &a, "-d", &b])
            .assert()
            .success();

        fs::remove_file(Path::new(&b).join("libbar.so")).unwrap();

        sandbox
            .cmd()
            .args(["compact", "--dry-run"])
            .assert()
            .success()
            .stdout(predicate::str::contains("1 of 2 entries kept"));
        assert!(sandbox.cache_json().get("libbar").is_some());

        sandbox.cmd().arg("compact").assert().success();
        let json = sandbox.cache_json();
        assert!(json.get("libfoo").is_some());
        assert!(json.get("libbar").is_none());
    }

    #[test]
    fn no_cache_leaves_disk_untouched() {
        let sandbox = Sandbox::new();
        let a = sandbox.dir("a");
        sandbox.touch(&a, "libfoo.so");

        sandbox
            .cmd()
            .args(["resolve", "libfoo", "--no-cache", "-d", &a])
            .assert()
            .success();

        assert!(!sandbox.cache.exists());
    }

    #[test]
    fn config_show() {
        let sandbox = Sandbox::new();
        sandbox
            .cmd()
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[search]"));
    }

    #[test]
    fn config_set_rejects_unknown_key() {
        let sandbox = Sandbox::new();
        sandbox
            .cmd()
            .args(["config", "set", "vm.name", "x"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown config key"));
    }
}
