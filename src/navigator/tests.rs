use {
    crate::navigator::{Navigator, NavigatorError},
    std::{fs, path::PathBuf},
};

fn tmpdir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("hdrview-nav-{}-{}", std::process::id(), name));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn natural_order_and_wrapping() {
    let dir = tmpdir("order");
    for name in ["img10.png", "img2.png", "b.jpg", "notes.txt"] {
        fs::write(dir.join(name), b"x").unwrap();
    }
    let mut nav = Navigator::new(&dir.join("img2.png")).unwrap();
    assert_eq!(nav.position(), (1, 3));
    assert_eq!(nav.current(), dir.join("img2.png"));
    assert_eq!(nav.next(), dir.join("img10.png"));
    assert_eq!(nav.next(), dir.join("b.jpg"));
    assert_eq!(nav.position(), (0, 3));
    assert_eq!(nav.prev(), dir.join("img10.png"));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn file_outside_listing() {
    let dir = tmpdir("outside");
    for name in ["a.png", "b.png", "notes.txt"] {
        fs::write(dir.join(name), b"x").unwrap();
    }
    let mut nav = Navigator::new(&dir.join("notes.txt")).unwrap();
    assert_eq!(nav.current(), dir.join("notes.txt"));
    assert_eq!(nav.position(), (0, 2));
    assert_eq!(nav.next(), dir.join("b.png"));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn empty_directory() {
    let dir = tmpdir("empty");
    fs::write(dir.join("notes.txt"), b"x").unwrap();
    let mut nav = Navigator::new(&dir.join("notes.txt")).unwrap();
    assert_eq!(nav.position(), (0, 0));
    assert_eq!(nav.next(), dir.join("notes.txt"));
    assert_eq!(nav.prev(), dir.join("notes.txt"));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_file() {
    let dir = tmpdir("missing");
    let res = Navigator::new(&dir.join("nope.png"));
    assert!(matches!(res, Err(NavigatorError::FileNotFound(_))));
    let _ = fs::remove_dir_all(&dir);
}
