use std::process::Command;

/// Runs git with `args` and returns trimmed stdout, or `None` outside a checkout.
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn main() {
    for watched in [".git/HEAD", ".git/refs", ".git/index"] {
        println!("cargo:rerun-if-changed={watched}");
    }
    println!("cargo:rerun-if-env-changed=USER_ADMIN_API_BASE_URL");
    println!("cargo:rerun-if-env-changed=USER_ADMIN_LOG_LEVEL");

    let mut sha = git(&["rev-parse", "--short", "HEAD"]).unwrap_or_else(|| "unknown".into());
    if git(&["status", "--porcelain", "--untracked-files=no"]).is_some() {
        sha.push_str("-dirty");
    }

    println!("cargo:rustc-env=USER_ADMIN_GIT_SHA={sha}");
}
