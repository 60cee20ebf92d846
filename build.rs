fn main() {
    // Compile timestamp via chrono
    let build_date = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    // Version from Cargo.toml
    let version = env!("CARGO_PKG_VERSION");

    // Target platform (e.g., x86_64-unknown-linux-gnu)
    let target = std::env::var("TARGET").unwrap_or_else(|_| "unknown".to_string());

    println!("cargo:rustc-env=CSV_CHECKER_VERSION={}", version);
    println!("cargo:rustc-env=BUILD_DATE={}", build_date);
    println!("cargo:rustc-env=TARGET={}", target);
}
