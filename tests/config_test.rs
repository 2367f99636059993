mod common;

use std::fs;

use assignmentctl::config::{self, Configuration};
use assignmentctl::error::Error;

#[test]
fn load_on_fresh_directory_is_not_bootstrapped() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(!config::is_bootstrapped(tmp.path()));
    let err = Configuration::load(tmp.path()).unwrap_err();
    assert!(matches!(err, Error::NotBootstrapped));
}

#[test]
fn malformed_file_is_invalid_not_absent() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(config::config_path(tmp.path()), "general course ???").unwrap();
    assert!(config::is_bootstrapped(tmp.path()));
    let err = Configuration::load(tmp.path()).unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration(_)));
}

#[test]
fn roundtrip_preserves_member_order() {
    let tmp = tempfile::tempdir().unwrap();
    let mut config = common::write_config(tmp.path(), Some(2));
    config
        .members
        .insert("789012".to_string(), "Erika Musterfrau".to_string());
    config
        .members
        .insert("000001".to_string(), "Ada Lovelace".to_string());
    config.save(tmp.path()).unwrap();

    let loaded = Configuration::load(tmp.path()).unwrap();
    let ids: Vec<&String> = loaded.members.keys().collect();
    assert_eq!(ids, ["123456", "789012", "000001"]);
    assert_eq!(loaded.general.course, common::COURSE);
    assert_eq!(loaded.assignments.unwrap().number, 2);
}

#[test]
fn validate_requires_course_and_counter() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(
        config::config_path(tmp.path()),
        "[assignments]\nnumber = 3\n",
    )
    .unwrap();
    let config = Configuration::load(tmp.path()).unwrap();
    assert!(matches!(
        config.validate().unwrap_err(),
        Error::InvalidConfiguration(_)
    ));

    fs::write(
        config::config_path(tmp.path()),
        "[general]\ncourse = \"Analysis II\"\n",
    )
    .unwrap();
    let config = Configuration::load(tmp.path()).unwrap();
    assert!(matches!(
        config.validate().unwrap_err(),
        Error::InvalidConfiguration(_)
    ));

    let config = common::write_config(tmp.path(), Some(0));
    config.validate().unwrap();
}
