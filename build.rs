#[cfg(target_os = "windows")]
fn main() {
    let mut res = winres::WindowsResource::new();
    res.set("InternalName", "Elevate.exe")
        .set_version_info(winres::VersionInfo::PRODUCTVERSION, 0x0000000100000000)
        .set_language(0x0409);
    if let Err(err) = res.compile() {
        eprintln!("winres error: {err}");
    }
}

#[cfg(not(target_os = "windows"))]
fn main() {}
