use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Forward .env entries to option_env!() in src/config.rs
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    // Exported variables win over the file
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found, using built-in portal defaults (see .env.example).");
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
    for key in [
        "BACKEND_URL_DEVELOPMENT",
        "BACKEND_URL_PRODUCTION",
        "ENVIRONMENT",
        "LOG_LEVEL",
        "MAX_UPLOAD_BYTES",
        "REPORT_FALLBACK_NAME",
    ] {
        println!("cargo:rerun-if-env-changed={}", key);
    }
}
