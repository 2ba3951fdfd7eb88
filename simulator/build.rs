//! Build script for sparkline-simulator.
//!
//! With the `window` feature on Windows, points the linker at SDL2 and copies
//! `SDL2.dll` next to the binary. The SDL2 directory defaults to
//! `vendor/sdl2` at the workspace root and can be overridden with `SDL2_DIR`.

use std::path::{Path, PathBuf};
use std::{env, fs};

fn main() {
    println!("cargo:rerun-if-env-changed=SDL2_DIR");

    let windowed = env::var_os("CARGO_FEATURE_WINDOW").is_some();
    let windows = env::var("CARGO_CFG_TARGET_OS").is_ok_and(|os| os == "windows");
    if !windowed || !windows {
        return;
    }

    let Some(sdl2_dir) = sdl2_dir() else {
        println!("cargo:warning=cannot locate SDL2; set SDL2_DIR");
        return;
    };
    println!("cargo:rerun-if-changed={}", sdl2_dir.display());

    if !sdl2_dir.exists() {
        println!("cargo:warning=SDL2 directory not found at {}", sdl2_dir.display());
        return;
    }
    println!("cargo:rustc-link-search=native={}", sdl2_dir.display());
    copy_dll(&sdl2_dir);
}

fn sdl2_dir() -> Option<PathBuf> {
    if let Some(dir) = env::var_os("SDL2_DIR") {
        return Some(PathBuf::from(dir));
    }
    let manifest_dir = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR")?);
    Some(manifest_dir.parent()?.join("vendor").join("sdl2"))
}

/// OUT_DIR looks like `target/<profile>/build/sparkline-simulator-xxx/out`;
/// the DLL belongs in `target/<profile>`.
fn copy_dll(sdl2_dir: &Path) {
    let Some(out_dir) = env::var_os("OUT_DIR").map(PathBuf::from) else {
        return;
    };
    let Some(target_dir) = out_dir
        .ancestors()
        .find(|p| p.file_name().is_some_and(|n| n == "release" || n == "debug"))
    else {
        return;
    };

    let dll_src = sdl2_dir.join("SDL2.dll");
    let dll_dst = target_dir.join("SDL2.dll");
    if !dll_src.exists() || dll_dst.exists() {
        return;
    }
    if let Err(e) = fs::copy(&dll_src, &dll_dst) {
        println!("cargo:warning=failed to copy SDL2.dll: {e}");
    }
}
