use std::path::{Path, PathBuf};

use plinth::config::Config;

#[test]
fn test_config_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:8080");
    assert_eq!(cfg.static_files.root, PathBuf::from("public"));
    assert_eq!(cfg.static_files.index, "index.html");
    assert_eq!(cfg.static_files.not_found, "404.html");
}

#[test]
fn test_config_missing_file_falls_back_to_defaults() {
    let cfg = Config::load_from(Path::new("/no/such/config.yaml")).unwrap();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:8080");
}

#[test]
fn test_config_full_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plinth.yaml");
    std::fs::write(
        &path,
        concat!(
            "server:\n",
            "  listen_addr: \"0.0.0.0:3000\"\n",
            "static_files:\n",
            "  root: \"site\"\n",
            "  index: \"home.html\"\n",
            "  not_found: \"missing.html\"\n",
        ),
    )
    .unwrap();

    let cfg = Config::load_from(&path).unwrap();

    assert_eq!(cfg.server.listen_addr, "0.0.0.0:3000");
    assert_eq!(cfg.static_files.root, PathBuf::from("site"));
    assert_eq!(cfg.static_files.index, "home.html");
    assert_eq!(cfg.static_files.not_found, "missing.html");
}

#[test]
fn test_config_partial_yaml_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plinth.yaml");
    std::fs::write(&path, "server:\n  listen_addr: \"127.0.0.1:9000\"\n").unwrap();

    let cfg = Config::load_from(&path).unwrap();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:9000");
    // Unspecified sections fall back to defaults.
    assert_eq!(cfg.static_files.root, PathBuf::from("public"));
    assert_eq!(cfg.static_files.index, "index.html");
}

#[test]
fn test_config_invalid_yaml_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plinth.yaml");
    std::fs::write(&path, "server: [not, a, mapping]\n").unwrap();

    assert!(Config::load_from(&path).is_err());
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::default();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.server.listen_addr, cfg2.server.listen_addr);
    assert_eq!(cfg1.static_files.root, cfg2.static_files.root);
}
