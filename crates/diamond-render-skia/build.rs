// File: crates/diamond-render-skia/build.rs
// Summary: Link the Windows system libraries Skia needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW, RegQueryInfoKeyW
        println!("cargo:rustc-link-lib=advapi32");
    }
}
