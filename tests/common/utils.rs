use std::path::PathBuf;

pub fn fixture(name: &str) -> String {
    let base = std::env::current_dir().unwrap();
    let path = base.join("tests").join("fixtures").join(name);

    path.display().to_string()
}

pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(name)
}
