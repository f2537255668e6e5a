use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Load variables from .env when present
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                // KEY=VALUE
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    // Real environment wins over .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found. Using built-in defaults (BACKEND_URL=https://emailschedule.me:8080).");
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=BACKEND_URL");
    println!("cargo:rerun-if-env-changed=ENABLE_LOGGING");
    println!("cargo:rerun-if-env-changed=DASHBOARD_REFRESH_MINUTES");
    println!("cargo:rerun-if-env-changed=ADMIN_SESSION_TIMEOUT_SECS");
}
