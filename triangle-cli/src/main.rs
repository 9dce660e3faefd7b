use serde::Serialize;
use std::collections::BTreeMap;
use std::env;
use std::fs;

use triangle_core::{Lang, TriangleInputs, calculate, localize};

#[derive(Debug, Serialize)]
struct Report {
    /// The two computed quantities keyed by field name.
    derived: BTreeMap<&'static str, f64>,
    /// All four quantities after solving.
    triangle: TriangleInputs,
}

/// Language from the command line, else from `TRIANGLE_LANG`, else Spanish.
/// An unrecognized tag falls back to Spanish with a warning.
fn pick_lang(arg: Option<&str>, env_tag: Option<String>) -> (Lang, Option<String>) {
    let Some(tag) = arg.map(str::to_string).or(env_tag) else {
        return (Lang::default(), None);
    };
    match Lang::parse(&tag) {
        Some(lang) => (lang, None),
        None => (
            Lang::default(),
            Some(format!("warning: unknown language '{tag}'; using es")),
        ),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: triangle-cli <inputs.json> [es|en]");
        std::process::exit(2);
    }
    let input = &args[1];
    let (lang, warning) = pick_lang(
        args.get(2).map(String::as_str),
        env::var("TRIANGLE_LANG").ok(),
    );
    if let Some(w) = warning {
        eprintln!("{w}");
    }

    let txt = fs::read_to_string(input)?;
    let inputs: TriangleInputs = serde_json::from_str(&txt)?;

    let out = match calculate(&inputs) {
        Ok(out) => out,
        Err(err) => {
            eprintln!("{}", localize(&err, lang));
            std::process::exit(1);
        }
    };

    let report = Report {
        derived: out.iter().map(|d| (d.field.key(), d.value)).collect(),
        triangle: out.complete(&inputs),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
