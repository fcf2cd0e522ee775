use anyhow::{Context, Result, bail};
use playfence_config::Config;
use playfence_engine::{io, parse_document, render_html};
use std::{env, fs, process};

const USAGE: &str = "\
Usage:
  playfence render <page.md>   Render one page to stdout
  playfence tokens <page.md>   Dump the page's token stream as JSON
  playfence build              Render the configured docs tree";

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("render") => cmd_render(page_arg(&args)?),
        Some("tokens") => cmd_tokens(page_arg(&args)?),
        Some("build") => cmd_build(),
        _ => bail!("{USAGE}"),
    }
}

fn page_arg(args: &[String]) -> Result<&str> {
    match args.get(1) {
        Some(page) => Ok(page),
        None => bail!("missing page argument\n{USAGE}"),
    }
}

fn cmd_render(page: &str) -> Result<()> {
    let src = fs::read_to_string(page).with_context(|| format!("reading {page}"))?;
    let doc = parse_document(&src);
    print!("{}", render_html(&doc));
    Ok(())
}

fn cmd_tokens(page: &str) -> Result<()> {
    let src = fs::read_to_string(page).with_context(|| format!("reading {page}"))?;
    let doc = parse_document(&src);
    println!("{}", serde_json::to_string_pretty(&doc.tokens)?);
    Ok(())
}

fn cmd_build() -> Result<()> {
    let config = Config::load()
        .context("loading config")?
        .with_context(|| {
            format!(
                "no config found; create {} with docs_path and out_path",
                Config::config_path().display()
            )
        })?;

    io::validate_docs_dir(&config.docs_path)
        .with_context(|| format!("docs directory {}", config.docs_path.display()))?;

    let pages = io::scan_markdown_files(&config.docs_path)?;
    for page in &pages {
        let src = io::read_file(page, &config.docs_path)
            .with_context(|| format!("reading {page}"))?;
        let doc = parse_document(&src);
        let html = render_html(&doc);
        let out = io::output_page_path(page);
        io::write_file(&out, &config.out_path, &html)
            .with_context(|| format!("writing {out}"))?;
    }

    println!(
        "rendered {} page(s) into {}",
        pages.len(),
        config.out_path.display()
    );
    Ok(())
}
