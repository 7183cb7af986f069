use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn quire_cmd() -> Command {
    let mut cmd = Command::cargo_bin("quire").unwrap();
    cmd.env_remove("QUIRE_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write `posts/<name>` with the given front matter body.
#[allow(dead_code)]
pub fn write_post(root: &Path, name: &str, front_matter: &str, body: &str) {
    let path = root.join("posts").join(name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, format!("+++\n{}\n+++\n{}", front_matter, body)).unwrap();
}
