use std::path::Path;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=tailwind.css");
    println!("cargo:rerun-if-changed=tailwind.config.js");
    println!("cargo:rerun-if-changed=src");

    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let tailwind_bin = Path::new(manifest_dir).join("node_modules/.bin/tailwindcss");

    // Only use a locally installed tailwindcss; the committed stylesheet is
    // used as-is otherwise
    if !tailwind_bin.exists() {
        println!("cargo:warning=tailwindcss not installed, keeping assets/tailwind.css");
        return;
    }

    let output = Command::new(&tailwind_bin)
        .args(["-i", "tailwind.css", "-o", "assets/tailwind.css"])
        .current_dir(manifest_dir)
        .output();

    match output {
        Ok(output) => {
            if !output.status.success() {
                println!("cargo:warning=Failed to generate Tailwind CSS");
                println!(
                    "cargo:warning=STDERR: {}",
                    String::from_utf8_lossy(&output.stderr)
                );
                println!(
                    "cargo:warning=STDOUT: {}",
                    String::from_utf8_lossy(&output.stdout)
                );
            }
        }
        Err(e) => {
            println!("cargo:warning=Failed to run tailwindcss: {}", e);
        }
    }
}
