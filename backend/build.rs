use std::fs;
use std::path::Path;

fn main() -> std::io::Result<()> {
    let out_dir = Path::new("static");
    let bundle_dir = out_dir.join("dist");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir)?;
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true),
        )
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    }
    // include_dir! needs the directory even before the first frontend build.
    fs::create_dir_all(&bundle_dir)?;

    println!("cargo:rerun-if-changed=../frontend/dist");
    Ok(())
}
