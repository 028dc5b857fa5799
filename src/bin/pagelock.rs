//! Pagelock CLI: operational tooling for protected pages
//!
//! Usage:
//!   pagelock protect --password <pw> --input <file> --output <file> [--title <t>] [--toc <mode>] [--theme <name>]
//!   pagelock unlock --password <pw> --input <file> [--output <file>]
//!   pagelock inspect <file>
//!   pagelock toc --input <file> [--mode <mode>]

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use pagelock::{
    capture, extract_bundle, toc, unlock, CiphertextBundle, PageRecord, SiteConfig, TocMode,
};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let result = match args[1].as_str() {
        "protect" => cmd_protect(&args[2..]),
        "unlock" => cmd_unlock(&args[2..]),
        "inspect" => cmd_inspect(&args[2..]),
        "toc" => cmd_toc(&args[2..]),
        "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" => {
            println!("pagelock {}", pagelock::VERSION);
            Ok(())
        }
        cmd => {
            eprintln!("error: unknown command '{}'", cmd);
            print_usage();
            Err("unknown command".into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    eprintln!(
        r#"Pagelock CLI: password-gated static pages

USAGE:
    pagelock <COMMAND> [OPTIONS]

COMMANDS:
    protect     Encrypt a rendered HTML file into a protected fragment
    unlock      Recover plaintext from a fragment or bundle file
    inspect     Show bundle metadata (no decryption)
    toc         Rebuild a table of contents from an HTML file

EXAMPLES:
    # Protect
    pagelock protect \
        --password "correct horse" \
        --title "My Post" \
        --toc hierarchical \
        --theme minimal \
        --input post.html \
        --output post.protected.html

    # Unlock (native twin of the in-browser path)
    pagelock unlock \
        --password "correct horse" \
        --input post.protected.html \
        --output post.html

    # Inspect
    pagelock inspect post.protected.html

OPTIONS:
    -h, --help       Print help
    -V, --version    Print version
"#
    );
}

fn cmd_protect(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let mut password = None;
    let mut title = String::new();
    let mut toc_mode = TocMode::Hierarchical;
    let mut theme = None;
    let mut input = None;
    let mut output = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--password" | "-p" => {
                i += 1;
                password = Some(args.get(i).ok_or("missing password")?.clone());
            }
            "--title" | "-t" => {
                i += 1;
                title = args.get(i).ok_or("missing title")?.clone();
            }
            "--toc" => {
                i += 1;
                let mode = args.get(i).ok_or("missing toc mode")?;
                toc_mode = TocMode::parse(mode)
                    .ok_or_else(|| format!("invalid toc mode: {} (hierarchical|generic)", mode))?;
            }
            "--theme" => {
                i += 1;
                theme = Some(args.get(i).ok_or("missing theme name")?.clone());
            }
            "--input" | "-i" => {
                i += 1;
                input = Some(PathBuf::from(args.get(i).ok_or("missing input path")?));
            }
            "--output" | "-o" => {
                i += 1;
                output = Some(PathBuf::from(args.get(i).ok_or("missing output path")?));
            }
            _ => return Err(format!("unknown option: {}", args[i]).into()),
        }
        i += 1;
    }

    let input = input.ok_or("--input is required")?;
    let output = output.ok_or("--output is required")?;
    let rendered = fs::read_to_string(&input)?;

    let mut page = PageRecord {
        title,
        content: rendered.clone(),
        password,
    };
    let pending = capture(&mut page).ok_or("--password is required and must be non-empty")?;

    let config = SiteConfig { toc_mode, theme };
    let fragment = pending.seal(&rendered, &config)?;
    fs::write(&output, fragment)?;

    println!("protected fragment written to {}", output.display());
    Ok(())
}

fn cmd_unlock(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let mut password = None;
    let mut input = None;
    let mut output = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--password" | "-p" => {
                i += 1;
                password = Some(args.get(i).ok_or("missing password")?.clone());
            }
            "--input" | "-i" => {
                i += 1;
                input = Some(PathBuf::from(args.get(i).ok_or("missing input path")?));
            }
            "--output" | "-o" => {
                i += 1;
                output = Some(PathBuf::from(args.get(i).ok_or("missing output path")?));
            }
            _ => return Err(format!("unknown option: {}", args[i]).into()),
        }
        i += 1;
    }

    let password = password.ok_or("--password is required")?;
    let input = input.ok_or("--input is required")?;
    let bundle = read_bundle(&input)?;

    let plaintext = unlock(&bundle, &password)?;
    match output {
        Some(path) => {
            fs::write(&path, plaintext)?;
            println!("plaintext written to {}", path.display());
        }
        None => println!("{}", plaintext),
    }
    Ok(())
}

fn cmd_inspect(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let path = args.first().ok_or("missing file argument")?;
    let bundle = read_bundle(&PathBuf::from(path))?;

    use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
    let field_len = |field: &str| BASE64.decode(field).map(|b| b.len()).unwrap_or(0);

    println!("salt:      {} bytes", field_len(&bundle.salt));
    println!("iv:        {} bytes", field_len(&bundle.iv));
    println!("authTag:   {} bytes", field_len(&bundle.auth_tag));
    println!("encrypted: {} bytes", field_len(&bundle.encrypted));
    Ok(())
}

fn cmd_toc(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let mut input = None;
    let mut mode = TocMode::Hierarchical;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" | "-i" => {
                i += 1;
                input = Some(PathBuf::from(args.get(i).ok_or("missing input path")?));
            }
            "--mode" | "-m" => {
                i += 1;
                let m = args.get(i).ok_or("missing mode")?;
                mode = TocMode::parse(m)
                    .ok_or_else(|| format!("invalid mode: {} (hierarchical|generic)", m))?;
            }
            _ => return Err(format!("unknown option: {}", args[i]).into()),
        }
        i += 1;
    }

    let input = input.ok_or("--input is required")?;
    let html = fs::read_to_string(&input)?;
    let (_, toc) = toc::rebuild(&html, mode);
    match toc {
        Some(markup) => println!("{}", markup),
        None => eprintln!("no headings found; TOC suppressed"),
    }
    Ok(())
}

/// Accept either a generated fragment or a bare bundle JSON file.
fn read_bundle(path: &PathBuf) -> Result<CiphertextBundle, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)?;
    if let Some(bundle) = extract_bundle(&text) {
        return Ok(bundle);
    }
    serde_json::from_str(&text).map_err(|_| "no ciphertext bundle found in input".into())
}
