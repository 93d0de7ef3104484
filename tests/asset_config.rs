use std::fs;

use tanager::{AssetConfig, AssetServer, NullLoader};

#[test]
fn config_defaults_to_unseeded_ids() {
    let cfg = AssetConfig::default();
    assert_eq!(cfg.id_seed, 0);
}

#[test]
fn missing_config_falls_back_to_defaults() {
    let cfg = AssetConfig::load_or_default("does/not/exist.json");
    assert_eq!(cfg.id_seed, 0);
}

#[test]
fn configured_seed_namespaces_server_ids() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let cfg_path = dir.path().join("assets.json");
    fs::write(&cfg_path, r#"{ "id_seed": 9 }"#).expect("write config");

    let cfg = AssetConfig::load(&cfg_path).expect("load config");
    assert_eq!(cfg.id_seed, 9);

    let mut seeded = AssetServer::from_config(&cfg, Box::new(NullLoader));
    let mut plain = AssetServer::new(Box::new(NullLoader));
    let a = seeded.load_image("hero.png").expect("seeded load");
    let b = plain.load_image("hero.png").expect("plain load");
    assert_ne!(a.id(), b.id(), "configured seed should shift ids");
}

#[test]
fn empty_config_object_uses_field_defaults() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let cfg_path = dir.path().join("assets.json");
    fs::write(&cfg_path, "{}").expect("write config");
    let cfg = AssetConfig::load(&cfg_path).expect("load config");
    assert_eq!(cfg.id_seed, 0);
}
