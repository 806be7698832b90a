//! Version information

/// Crate version, as stamped into generated posts
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns a one-line banner such as `journaltxt/1.0.1 on linux/x86_64`
pub fn banner() -> String {
    format!(
        "journaltxt/{} on {}/{}",
        VERSION,
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}
