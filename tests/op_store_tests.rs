#![cfg(unix)]

use passop::core::builder::build_item;
use passop::core::item::ItemTemplate;
use passop::core::ports::ItemStore;
use passop::core::secret::SecretRecord;
use passop::store::op::OpCliStore;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// Install a fake `op` that logs its argv and snapshots the --template file,
/// so tests can observe what the real CLI would have seen.
fn fake_op(dir: &Path) -> (PathBuf, PathBuf, PathBuf) {
    let log = dir.join("op.log");
    let snapshot = dir.join("template.snapshot");
    let bin = dir.join("op");
    let script = format!(
        "#!/bin/sh\n\
         echo \"$@\" >> {log}\n\
         if [ \"$3\" = \"--template\" ]; then cp \"$4\" {snapshot}; fi\n\
         if [ \"$2\" = \"list\" ]; then echo '[]'; fi\n",
        log = log.display(),
        snapshot = snapshot.display(),
    );
    fs::write(&bin, script).unwrap();
    fs::set_permissions(&bin, fs::Permissions::from_mode(0o755)).unwrap();
    (bin, log, snapshot)
}

#[test]
fn create_stages_template_passes_extra_args_and_shreds() {
    let dir = tempdir().unwrap();
    let (bin, log, snapshot) = fake_op(dir.path());
    let staging = dir.path().join("staging");
    fs::create_dir(&staging).unwrap();

    let record = SecretRecord::parse("pw\nusername: alice\nurl: https://example.com\n").unwrap();
    let (template, extra) = build_item("mysite", record);

    let store = OpCliStore::new(bin.to_string_lossy().into_owned(), staging.clone());
    store
        .create(&template, &extra, Some("Private"))
        .expect("create ok");

    // Invocation shape: subcommand, template flag, vault flag, extra args.
    let logged = fs::read_to_string(&log).unwrap();
    assert!(logged.starts_with("item create --template "));
    assert!(logged.contains("--vault Private"));
    assert!(logged.contains("url=https://example.com"));
    assert!(!logged.contains("username="));

    // The template the CLI saw was the serialized item.
    let seen: ItemTemplate = serde_json::from_str(&fs::read_to_string(&snapshot).unwrap()).unwrap();
    assert_eq!(seen.title, "mysite");
    assert_eq!(seen.fields[0].value, "pw");

    // The staged file was shredded: nothing is left in the staging dir.
    let leftovers: Vec<_> = fs::read_dir(&staging).unwrap().collect();
    assert!(leftovers.is_empty());
}

#[test]
fn create_shreds_even_when_the_cli_fails() {
    let dir = tempdir().unwrap();
    let bin = dir.path().join("op");
    fs::write(&bin, "#!/bin/sh\necho 'no session' >&2\nexit 1\n").unwrap();
    fs::set_permissions(&bin, fs::Permissions::from_mode(0o755)).unwrap();
    let staging = dir.path().join("staging");
    fs::create_dir(&staging).unwrap();

    let record = SecretRecord::parse("pw\n").unwrap();
    let (template, extra) = build_item("mysite", record);

    let store = OpCliStore::new(bin.to_string_lossy().into_owned(), staging.clone());
    let err = store.create(&template, &extra, None).unwrap_err();
    assert!(format!("{err}").contains("no session"));

    let leftovers: Vec<_> = fs::read_dir(&staging).unwrap().collect();
    assert!(leftovers.is_empty());
}

#[test]
fn list_decodes_titles() {
    let dir = tempdir().unwrap();
    let bin = dir.path().join("op");
    fs::write(
        &bin,
        "#!/bin/sh\necho '[{\"title\":\"alpha\",\"id\":\"1\"},{\"title\":\"beta\",\"id\":\"2\"}]'\n",
    )
    .unwrap();
    fs::set_permissions(&bin, fs::Permissions::from_mode(0o755)).unwrap();

    let store = OpCliStore::new(bin.to_string_lossy().into_owned(), dir.path().to_path_buf());
    let entries = store.list().expect("list ok");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].title, "alpha");
}

#[test]
fn list_with_malformed_json_is_an_error() {
    let dir = tempdir().unwrap();
    let bin = dir.path().join("op");
    fs::write(&bin, "#!/bin/sh\necho 'not json'\n").unwrap();
    fs::set_permissions(&bin, fs::Permissions::from_mode(0o755)).unwrap();

    let store = OpCliStore::new(bin.to_string_lossy().into_owned(), dir.path().to_path_buf());
    let err = store.list().unwrap_err();
    assert!(format!("{err}").contains("malformed item list JSON"));
}
