use anyhow::Result;
use mathdown_engine::segment::{nodes_to_text, segment};
use std::{env, path::PathBuf, process};

mod input;

enum OutputFormat {
    /// Canonical text reconstruction of the segmented nodes.
    Text,
    /// Node structure as pretty-printed JSON.
    Json,
    /// HTML fragment with MathJax/KaTeX-ready math elements.
    Html,
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let mut format = OutputFormat::Text;
    let mut file: Option<PathBuf> = None;

    for arg in &args[1..] {
        match arg.as_str() {
            "--json" => format = OutputFormat::Json,
            "--html" => format = OutputFormat::Html,
            _ if arg.starts_with('-') => {
                eprintln!("Error: unknown option '{arg}'");
                eprintln!("Usage: {} [--json|--html] [file]", args[0]);
                process::exit(1);
            }
            _ => {
                if file.is_some() {
                    eprintln!("Usage: {} [--json|--html] [file]", args[0]);
                    process::exit(1);
                }
                file = Some(PathBuf::from(arg));
            }
        }
    }

    let content = match input::read_content(file.as_deref()) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let nodes = segment(&content);

    match format {
        OutputFormat::Text => println!("{}", nodes_to_text(&nodes)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&nodes)?),
        OutputFormat::Html => print!("{}", mathdown_html::render_nodes(&nodes)),
    }

    Ok(())
}
