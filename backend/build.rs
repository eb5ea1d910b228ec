use std::fs;
use std::path::Path;

const PLACEHOLDER: &str = r#"<!DOCTYPE html>
<html lang="ko">
<head><meta charset="utf-8"><title>사회복지 후보자 포털</title></head>
<body><p>Frontend bundle not built. Run <code>trunk build</code> in <code>frontend/</code>.</p></body>
</html>
"#;

fn main() {
    let out_dir = Path::new("static/dist");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).unwrap();
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).content_only(true),
        )
            .unwrap();
    } else if !out_dir.join("index.html").exists() {
        // include_dir! needs the directory to exist at compile time
        fs::create_dir_all(out_dir).unwrap();
        fs::write(out_dir.join("index.html"), PLACEHOLDER).unwrap();
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
