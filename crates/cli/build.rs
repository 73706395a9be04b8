use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("seoscore")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Score the on-page SEO of Polish accounting articles")
        .arg(clap::arg!([INPUT] "Article JSON, saved HTML page, URL to audit, or '-' for JSON on stdin"))
        .arg(clap::arg!(-k --keyword <KEYWORD> "Primary keyword"))
        .arg(
            clap::arg!(-s --secondary <KEYWORDS> "Secondary keywords, comma separated")
                .value_delimiter(','),
        )
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format (text, json, markdown)")
                .default_value("text")
                .value_parser(["text", "json", "markdown"]),
        )
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--fail_under <PCT> "Exit with an error when the score is below PCT percent"))
        .arg(clap::arg!(--no_recommendations "Leave recommendations out of the report"))
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("30"))
        .arg(clap::arg!(--user_agent <UA> "Custom User-Agent for HTTP requests"))
        .arg(clap::arg!(-v --verbose "Print progress to stderr"))
        .arg(
            clap::arg!(--completions <SHELL> "Generate shell completion script")
                .value_parser(["bash", "zsh", "fish", "powershell"]),
        );

    for shell in [
        clap_complete::Shell::Bash,
        clap_complete::Shell::Zsh,
        clap_complete::Shell::Fish,
        clap_complete::Shell::PowerShell,
    ] {
        clap_complete::generate_to(shell, &mut cmd, "seoscore", &completions_dir).unwrap();
    }

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
