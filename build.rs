// build.rs

use clap::{Arg, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: output path
fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("PATH")
        .default_value("edid.bin")
        .help("Where to write the repaired block")
}

fn build_cli() -> Command {
    Command::new("edid-fix")
        .version(env!("CARGO_PKG_VERSION"))
        .author("edid-fix Contributors")
        .about("Repair the version, product-name tag and checksum of a 128-byte EDID block")
        .subcommand_required(false)
        .subcommand(
            Command::new("demo")
                .about("Write the built-in sample EDID and repair it")
                .arg(
                    Arg::new("fixture")
                        .long("fixture")
                        .value_name("PATH")
                        .default_value("prefix_edid.bin")
                        .help("Where to write the unmodified sample block"),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("fix")
                .about("Repair a 128-byte EDID file")
                .arg(Arg::new("input").required(true).help("Path to the raw EDID block"))
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("check")
                .about("Show version, text descriptor tags and checksum status of an EDID file")
                .arg(Arg::new("input").required(true).help("Path to the raw EDID block")),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .required(true)
                        .value_parser(["bash", "zsh", "fish", "powershell", "elvish"])
                        .help("Shell type"),
                ),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("edid-fix.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
