// Tests for directory digests

use std::fs;
use std::path::Path;

use hashsum::checksum::{
    digest_hex, ChecksumAlgorithm, ChecksumError, DirectoryDigest, EntryOrder, FailureKind,
    FileChecksum,
};
use tempfile::TempDir;

fn write(path: &Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

#[test]
fn test_empty_directory_digests_like_empty_input() {
    let dir = TempDir::new().unwrap();

    for alg in ChecksumAlgorithm::ALL {
        let expected = digest_hex(alg, [b""]).unwrap();
        let actual = FileChecksum::new().digest(dir.path(), alg).unwrap();
        assert_eq!(actual, expected, "{}", alg);
    }

    assert_eq!(
        FileChecksum::new().digest(dir.path(), ChecksumAlgorithm::Md5).unwrap(),
        "d41d8cd98f00b204e9800998ecf8427e"
    );
}

#[test]
fn test_nested_empty_directories_contribute_nothing() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("a/b/c")).unwrap();
    fs::create_dir_all(dir.path().join("d")).unwrap();

    let (hash, stats) = DirectoryDigest::new(ChecksumAlgorithm::Md5)
        .unwrap()
        .digest_with_stats(dir.path())
        .unwrap();
    assert_eq!(hash, "d41d8cd98f00b204e9800998ecf8427e");
    assert_eq!(stats.files, 0);
    assert_eq!(stats.directories, 5);
    assert_eq!(stats.bytes, 0);
}

#[test]
fn test_single_file_directory_matches_file_digest() {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join("secret.txt"), b"secret Message");

    assert_eq!(
        FileChecksum::new().digest(dir.path(), ChecksumAlgorithm::Md5).unwrap(),
        "25659bd9db98ecc3c2077d44e69607b8"
    );
}

#[test]
fn test_sorted_order_concatenates_file_bytes() {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join("b.txt"), b"beta");
    write(&dir.path().join("a.txt"), b"alpha");

    let digest = DirectoryDigest::new(ChecksumAlgorithm::Md5)
        .unwrap()
        .with_order(EntryOrder::FileName);

    // md5("alpha" ++ "beta")
    assert_eq!(
        digest.digest(dir.path()).unwrap(),
        "66bebefb99d3d4ddae3331821c07dccc"
    );
}

#[test]
fn test_subdirectories_share_the_running_digest() {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join("a.txt"), b"alpha");
    write(&dir.path().join("b/inner.txt"), b"gamma");
    write(&dir.path().join("c.txt"), b"beta");

    let (hash, stats) = DirectoryDigest::new(ChecksumAlgorithm::Md5)
        .unwrap()
        .with_order(EntryOrder::FileName)
        .digest_with_stats(dir.path())
        .unwrap();

    // Depth first: a.txt, b/inner.txt, c.txt
    assert_eq!(hash, "05682aab9950a2fc313d95453d8101ed");
    assert_eq!(
        hash,
        digest_hex(ChecksumAlgorithm::Md5, [&b"alpha"[..], &b"gamma"[..], &b"beta"[..]]).unwrap()
    );
    assert_eq!(stats.files, 3);
    assert_eq!(stats.directories, 2);
    assert_eq!(stats.bytes, 14);
}

#[test]
fn test_file_checksum_honours_entry_order() {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join("b.txt"), b"beta");
    write(&dir.path().join("a.txt"), b"alpha");

    let computer = FileChecksum::new().with_entry_order(EntryOrder::FileName);
    assert_eq!(computer.entry_order(), EntryOrder::FileName);
    assert_eq!(
        computer.digest(dir.path(), ChecksumAlgorithm::Sha256).unwrap(),
        "a4c4aeb92c20500f364b12b3771ef3a11193e2cf04d0f28956a829749993b39f"
    );
}

#[test]
fn test_filesystem_order_folds_every_file() {
    // Enumeration order is platform dependent, so only check that the
    // result is one of the two possible concatenations
    let dir = TempDir::new().unwrap();
    write(&dir.path().join("a.txt"), b"alpha");
    write(&dir.path().join("b.txt"), b"beta");

    let hash = FileChecksum::new().digest(dir.path(), ChecksumAlgorithm::Md5).unwrap();
    assert!(
        hash == "66bebefb99d3d4ddae3331821c07dccc" || hash == "4c459be99e5aebb13cad7ba5a3dd6359",
        "unexpected digest {}",
        hash
    );
}

#[test]
fn test_directory_digest_is_deterministic() {
    let dir = TempDir::new().unwrap();
    for i in 0..20 {
        write(&dir.path().join(format!("d{}/f{}.txt", i % 4, i)), format!("file {}", i).as_bytes());
    }

    let digest = DirectoryDigest::new(ChecksumAlgorithm::Sha512)
        .unwrap()
        .with_order(EntryOrder::FileName);
    let first = digest.digest(dir.path()).unwrap();
    let second = digest.digest(dir.path()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 128);
}

#[test]
fn test_names_do_not_contribute() {
    let one = TempDir::new().unwrap();
    let two = TempDir::new().unwrap();
    write(&one.path().join("x/a.txt"), b"alpha");
    write(&two.path().join("y/renamed.bin"), b"alpha");

    let digest = DirectoryDigest::new(ChecksumAlgorithm::Sha1).unwrap();
    assert_eq!(digest.digest(one.path()).unwrap(), digest.digest(two.path()).unwrap());
}

#[test]
fn test_undefined_algorithm_rejected() {
    assert!(matches!(
        DirectoryDigest::new(ChecksumAlgorithm::Undefined),
        Err(ChecksumError::UnsupportedAlgorithm { .. })
    ));
}

#[test]
fn test_missing_directory() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing");

    let err = DirectoryDigest::new(ChecksumAlgorithm::Md5)
        .unwrap()
        .digest(&missing)
        .unwrap_err();
    assert!(matches!(err, ChecksumError::FileNotFound { .. }));
}

#[test]
fn test_regular_file_is_not_a_directory() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("plain.txt");
    write(&file, b"alpha");

    let err = DirectoryDigest::new(ChecksumAlgorithm::Md5)
        .unwrap()
        .digest(&file)
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::Io);
}

#[cfg(unix)]
#[test]
fn test_symlinked_file_contributes_target_bytes() {
    let dir = TempDir::new().unwrap();
    let outside = TempDir::new().unwrap();
    write(&outside.path().join("target.txt"), b"secret Message");
    std::os::unix::fs::symlink(outside.path().join("target.txt"), dir.path().join("link")).unwrap();

    assert_eq!(
        FileChecksum::new().digest(dir.path(), ChecksumAlgorithm::Md5).unwrap(),
        "25659bd9db98ecc3c2077d44e69607b8"
    );
}

#[cfg(unix)]
#[test]
fn test_broken_symlink_aborts_the_walk() {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join("a.txt"), b"alpha");
    std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("dangling")).unwrap();

    let err = FileChecksum::new()
        .digest(dir.path(), ChecksumAlgorithm::Md5)
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::Io);
}

#[cfg(unix)]
#[test]
fn test_socket_entry_aborts_the_walk() {
    use std::os::unix::net::UnixListener;

    let dir = TempDir::new().unwrap();
    write(&dir.path().join("a.txt"), b"alpha");
    let socket = dir.path().join("sock");
    let _listener = UnixListener::bind(&socket).unwrap();

    let err = FileChecksum::new()
        .digest(dir.path(), ChecksumAlgorithm::Md5)
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::Io);
    assert!(matches!(err, ChecksumError::IoError { .. }));
    assert_eq!(err.path(), Some(socket.as_path()));

    let err = DirectoryDigest::new(ChecksumAlgorithm::Sha256)
        .unwrap()
        .with_order(EntryOrder::FileName)
        .digest_with_stats(dir.path())
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::Io);
}
