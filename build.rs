fn main() {
    // --- Windows resource embedding (version info) ---
    // The launcher prints the same product name/copyright at start-up, so keep
    // them in one place: the banner reads the env vars exported below.
    println!("cargo:rustc-env=ZXPOLY_PRODUCT_NAME=ZX-Poly Emulator");
    println!("cargo:rustc-env=ZXPOLY_COPYRIGHT=Copyright (C) Igor Maznitsa");

    #[cfg(target_os = "windows")]
    if std::env::var("CARGO_BIN_NAME").is_ok() {
        let mut res = winres::WindowsResource::new();
        res.set("FileDescription", "ZX-Poly Emulator Launcher");
        res.set("ProductName", "ZX-Poly Emulator");
        res.set("LegalCopyright", "Copyright (C) Igor Maznitsa");
        res.set("FileVersion", env!("CARGO_PKG_VERSION"));
        res.set("ProductVersion", env!("CARGO_PKG_VERSION"));
        res.compile().expect("failed to compile Windows resources");
    }
}
