use std::{
    fs::File,
    io::{Read, stdin},
    path::PathBuf,
};

use anyhow::{Context, Result, bail};
use boxtree::{
    DataNode, Orientation, RenderConfig,
    color::{color_level, default_background},
    print_tree,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str =
    "usage: boxtree [--horizontal] [--border] [--depth N] [--trim N] [--escape-newlines] [FILE]";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let options = Options::parse(std::env::args().skip(1))?;
    let level = color_level();
    info!(?level, "boxtree starting");

    let input = read_input(options.file.as_ref())?;
    let data: serde_json::Value = serde_json::from_str(&input).context("input is not valid JSON")?;
    let name = options
        .file
        .as_ref()
        .and_then(|path| path.file_stem())
        .and_then(|stem| stem.to_str())
        .unwrap_or("JSON");
    let tree = DataNode::from_json(name, &data);

    let mut config = options.config;
    if let Some(style) = default_background(level) {
        config = config.with_background(style);
    }
    debug!(?config, "rendering");
    print_tree(&tree, &DataNode::accessors(), &config)
}

struct Options {
    file: Option<PathBuf>,
    config: RenderConfig,
}

impl Options {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut file = None;
        let mut config = RenderConfig::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--horizontal" => config = config.with_orientation(Orientation::Horizontal),
                "--border" => config = config.with_border(true),
                "--escape-newlines" => config = config.with_escaped_newlines("\\n"),
                "--depth" => config = config.with_max_depth(number(&arg, args.next())?),
                "--trim" => config = config.with_trim(number(&arg, args.next())?, "..."),
                "-h" | "--help" => bail!(USAGE),
                flag if flag.starts_with("--") => bail!("unknown option {flag}\n{USAGE}"),
                path if file.is_none() => file = Some(PathBuf::from(path)),
                extra => bail!("unexpected argument {extra}\n{USAGE}"),
            }
        }
        Ok(Self { file, config })
    }
}

fn number(flag: &str, value: Option<String>) -> Result<usize> {
    let value = value.with_context(|| format!("{flag} needs a value"))?;
    value
        .parse()
        .with_context(|| format!("{flag} expects a number, got {value}"))
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    let mut contents = String::new();
    match file {
        Some(path) => {
            info!("reading {}", path.display());
            File::open(path)
                .with_context(|| format!("cannot open {}", path.display()))?
                .read_to_string(&mut contents)?;
        }
        None => {
            stdin().read_to_string(&mut contents)?;
        }
    }
    Ok(contents)
}
