use anyhow::{Context, Result, bail};
use kiirus_template::{compile_with_options, config::Options, print_tree};
use std::{env, fs, io};

fn main() -> Result<()> {
    let mut file_path = None;
    let mut development = false;
    let mut json = false;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--dev" => development = true,
            "--json" => json = true,
            _ if file_path.is_none() => file_path = Some(arg),
            _ => bail!("unexpected argument '{arg}'"),
        }
    }
    let Some(file_path) = file_path else {
        bail!("usage: kiirus <file> [--dev] [--json]");
    };

    let mut options = match fs::read_to_string("kiirus.toml") {
        Ok(s) => toml::from_str::<Options>(&s).context("invalid kiirus.toml")?,
        Err(error) if error.kind() == io::ErrorKind::NotFound => Options::default(),
        Err(error) => return Err(error).context("failed to read kiirus.toml"),
    };
    options.compile.development |= development;

    let source =
        fs::read_to_string(&file_path).with_context(|| format!("failed to read {file_path}"))?;
    let compiled = compile_with_options(&source, &options.compile);
    for diagnostic in &compiled.diagnostics {
        eprintln!("{file_path}: {diagnostic}");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&compiled.root)?);
    } else {
        print!("{}", print_tree(&compiled.root, &options.print));
    }
    Ok(())
}
