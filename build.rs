use chrono::Datelike;

fn main() {
    // Copyright year shown in the footer, fixed at build time so SSR and hydration agree
    let build_year = chrono::Utc::now().year();

    println!("cargo:rustc-env=BUILD_YEAR={}", build_year);

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
