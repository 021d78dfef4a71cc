//! Filesystem walking behavior: recursion, extension filtering, and the
//! symlink handling (cycles, dir links, file links, broken links) that a
//! real user font library throws at a scanner.

use std::fs;
use std::path::PathBuf;

use fontseek::locate;

#[test]
fn discovers_fonts_in_nested_directories() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();

    let font1 = root.join("a.ttf");
    let nested = root.join("nested/deeper");
    fs::create_dir_all(&nested).expect("mkdir");
    let font2 = nested.join("b.otf");

    fs::write(&font1, b"\0\0font1").expect("write font1");
    fs::write(&font2, b"\0\0font2").expect("write font2");

    let found = locate(root);

    assert!(found.iter().any(|p| p.ends_with("a.ttf")));
    assert!(found.iter().any(|p| p.ends_with("b.otf")));
    assert_eq!(found.len(), 2);
}

#[test]
fn extension_filter_is_case_insensitive() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();

    for name in ["one.TTF", "two.Ttf", "three.ttf", "four.WOFF2"] {
        fs::write(root.join(name), b"\0").expect("write");
    }
    fs::write(root.join("notes.txt"), b"hello").expect("write");
    fs::write(root.join("no_extension"), b"hello").expect("write");

    let found = locate(root);

    assert_eq!(found.len(), 4);
    assert!(!found.iter().any(|p| p.ends_with("notes.txt")));
}

#[test]
fn missing_root_yields_empty_list() {
    let found = locate("/nonexistent/fontseek-root");
    assert!(found.is_empty());
}

#[test]
fn root_that_is_a_file_yields_empty_list() {
    let temp = tempfile::tempdir().expect("tempdir");
    let file = temp.path().join("a.ttf");
    fs::write(&file, b"\0").expect("write");

    // read_dir on a file fails; the walker reports and returns empty rather
    // than panicking or erroring.
    assert!(locate(&file).is_empty());
}

#[cfg(unix)]
#[test]
fn terminates_on_symlink_cycle_and_visits_contents_once() {
    use std::os::unix::fs::symlink;

    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    let sub = root.join("sub");
    fs::create_dir_all(&sub).expect("mkdir");

    fs::write(root.join("top.ttf"), b"\0").expect("write");
    fs::write(sub.join("inner.otf"), b"\0").expect("write");

    // sub/loop points back at the root: without the visited set this walk
    // would never end.
    symlink(root, sub.join("loop")).expect("symlink");

    let found = locate(root);

    let tops = found.iter().filter(|p| p.ends_with("top.ttf")).count();
    let inners = found.iter().filter(|p| p.ends_with("inner.otf")).count();
    assert_eq!(tops, 1, "cycled directory contents must appear exactly once");
    assert_eq!(inners, 1);
    assert_eq!(found.len(), 2);
}

#[cfg(unix)]
#[test]
fn follows_directory_symlinks_out_of_the_tree() {
    use std::os::unix::fs::symlink;

    let temp = tempfile::tempdir().expect("tempdir");
    let outside = temp.path().join("outside");
    let root = temp.path().join("root");
    fs::create_dir_all(&outside).expect("mkdir outside");
    fs::create_dir_all(&root).expect("mkdir root");

    fs::write(outside.join("linked.ttf"), b"\0").expect("write");
    symlink(&outside, root.join("link")).expect("symlink");

    let found = locate(&root);

    assert!(found.iter().any(|p| p.ends_with("linked.ttf")));
}

#[cfg(unix)]
#[test]
fn file_symlink_matches_on_link_name_and_records_target() {
    use std::os::unix::fs::symlink;

    let temp = tempfile::tempdir().expect("tempdir");
    let data_dir = temp.path().join("data");
    let root = temp.path().join("root");
    fs::create_dir_all(&data_dir).expect("mkdir data");
    fs::create_dir_all(&root).expect("mkdir root");

    // Target has a non-font extension; the link's name decides inclusion.
    let target = data_dir.join("real.dat");
    fs::write(&target, b"\0\0fontbytes").expect("write");
    symlink(&target, root.join("link.ttf")).expect("symlink");

    // The reverse case: a font-named target behind a non-font link name
    // stays excluded.
    let other = data_dir.join("other.ttf");
    fs::write(&other, b"\0").expect("write");
    symlink(&other, root.join("link.txt")).expect("symlink");

    let found = locate(&root);

    let resolved: PathBuf = fs::canonicalize(&target).expect("canonicalize");
    assert_eq!(found, vec![resolved]);
}

#[cfg(unix)]
#[test]
fn unreadable_subdirectory_is_skipped_but_siblings_survive() {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();

    fs::write(root.join("a.ttf"), b"\0").expect("write");
    fs::write(root.join("b.otf"), b"\0").expect("write");

    let locked = root.join("locked");
    fs::create_dir(&locked).expect("mkdir");
    fs::write(locked.join("hidden.ttf"), b"\0").expect("write");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).expect("chmod");

    // Privileged users bypass permission bits, leaving nothing to observe.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("chmod");
        return;
    }

    let found = locate(root);

    // Restore so the tempdir can clean up.
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("chmod");

    assert_eq!(found.len(), 2);
    assert!(found.iter().any(|p| p.ends_with("a.ttf")));
    assert!(found.iter().any(|p| p.ends_with("b.otf")));
    assert!(!found.iter().any(|p| p.ends_with("hidden.ttf")));
}

#[cfg(unix)]
#[test]
fn broken_symlink_is_skipped_without_aborting_the_walk() {
    use std::os::unix::fs::symlink;

    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();

    fs::write(root.join("a.ttf"), b"\0").expect("write");
    fs::write(root.join("b.otf"), b"\0").expect("write");
    symlink(root.join("gone.ttf"), root.join("c.ttf")).expect("symlink");

    let found = locate(root);

    assert_eq!(found.len(), 2);
    assert!(found.iter().any(|p| p.ends_with("a.ttf")));
    assert!(found.iter().any(|p| p.ends_with("b.otf")));
}
