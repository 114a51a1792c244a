use anyhow::Context as _;
use anyhow::Result;
use std::env;
use std::fs;
use std::io;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::Registry;
use tracing_tree::HierarchicalLayer;

/// Parses the command-line arguments against `options`.
///
/// Adds the `-h, --help` and `-t, --trace` options.  Exits the process after
/// printing the usage when `-h` is given.  Fails when more than `max_free`
/// positional arguments are given.
pub fn parse_args(
    mut options: getopts::Options,
    usage: &str,
    max_free: usize,
) -> Result<getopts::Matches> {
    options.optflag("h", "help", "print this help menu");
    options.optopt("t", "trace", "emit a chrome trace", "FILE");

    let matches = options.parse(env::args().skip(1))?;

    if matches.opt_present("h") {
        eprintln!("{}", options.usage(usage));
        std::process::exit(0);
    }
    if matches.free.len() > max_free {
        anyhow::bail!("too many arguments\n\n{}", options.usage(usage));
    }

    Ok(matches)
}

/// Installs the global tracing subscriber.
///
/// Events are filtered by the `LOG` environment variable.  When `-t` was
/// given, spans are also written to a chrome trace, which is flushed when the
/// returned guard is dropped.
pub fn init_tracing(matches: &getopts::Matches) -> Option<tracing_chrome::FlushGuard> {
    let registry = Registry::default().with(EnvFilter::from_env("LOG")).with(
        HierarchicalLayer::new(4)
            .with_thread_ids(true)
            .with_targets(true)
            .with_bracketed_fields(true),
    );
    match matches.opt_str("t") {
        Some(filename) => {
            let (chrome_layer, guard) = tracing_chrome::ChromeLayerBuilder::new()
                .file(filename)
                .build();
            registry.with(chrome_layer).init();
            Some(guard)
        }
        None => {
            registry.init();
            None
        }
    }
}

/// Opens `filename` for writing, or stdout when it is `None` or `-`.
pub fn writer(filename: Option<&String>) -> Result<impl io::Write> {
    let w: Box<dyn io::Write> = match filename.map(String::as_str) {
        None | Some("-") => Box::new(io::stdout()),
        Some(filename) => {
            let file = fs::File::create(filename)
                .with_context(|| format!("failed to create output file {filename:?}"))?;
            Box::new(file)
        }
    };
    Ok(io::BufWriter::new(w))
}

/// Parses option `name`, falling back to `default` when it is absent.
pub fn opt_or<T>(matches: &getopts::Matches, name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = matches
        .opt_get(name)
        .with_context(|| format!("invalid value for option '{name}'"))?;
    Ok(value.unwrap_or(default))
}
