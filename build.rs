fn main() {
    println!("cargo:rerun-if-env-changed=PIXELRAIN_BUILD");
    println!("cargo:rerun-if-env-changed=GITHUB_SHA");

    let build_id = std::env::var("PIXELRAIN_BUILD")
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(infer_build_id);

    println!("cargo:rustc-env=PIXELRAIN_BUILD={}", build_id);
}

fn short_sha() -> Option<String> {
    let v = std::env::var("GITHUB_SHA").ok()?;
    let v = v.trim();
    let short = v.get(..v.len().min(7))?;
    if !short.is_empty() && short.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(short.to_ascii_lowercase())
    } else {
        None
    }
}

fn infer_build_id() -> String {
    let os_raw = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_else(|_| "unknown".to_string());
    let os = match os_raw.as_str() {
        "macos" => "darwin",
        other => other,
    };
    let arch = std::env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_else(|_| "unknown".to_string());

    match short_sha() {
        Some(sha) => format!("{os}-{arch}-{sha}"),
        None => format!("{os}-{arch}"),
    }
}
