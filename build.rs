fn main() {
    // The footer's copyright year is taken from the build timestamp
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    println!("cargo:rerun-if-changed=build.rs");
    // embedded portfolio content
    println!("cargo:rerun-if-changed=content");
}
