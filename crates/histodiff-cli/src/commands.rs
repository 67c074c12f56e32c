use crate::args::Cli;
use crate::logging;
use crate::presentation::{JsonReport, ReportView};
use crate::source::{InputSource, load_histogram};
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use histodiff_engine::{CompareOptions, compare};
use histodiff_types::{Error, Metric};
use is_terminal::IsTerminal;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    // Validate selection before touching any input
    let options = resolve_options(cli.sort_by.as_deref(), cli.threshold.as_deref())?;
    tracing::debug!(metric = %options.metric, threshold = options.threshold, "resolved options");

    // Scratch files are released here; rendering may be cut short by SIGPIPE
    let before = load_histogram(&InputSource::parse(&cli.before))
        .with_context(|| format!("failed to load {}", cli.before))?;
    let after = load_histogram(&InputSource::parse(&cli.after))
        .with_context(|| format!("failed to load {}", cli.after))?;

    let diff = compare(&before, &after, &options);

    match cli.format {
        OutputFormat::Plain => {
            let color = std::io::stdout().is_terminal();
            print!("{}", ReportView::new(&diff).with_color(color));
        }
        OutputFormat::Json => println!("{}", JsonReport::new(&diff).render()?),
    }

    Ok(())
}

/// Turn the optional positional arguments into engine options.
fn resolve_options(
    sort_by: Option<&str>,
    threshold: Option<&str>,
) -> histodiff_types::Result<CompareOptions> {
    let metric = match sort_by {
        Some(raw) => Metric::parse_selector(raw)?,
        None => Metric::default(),
    };
    let threshold = match threshold {
        Some(raw) => parse_number(raw, "threshold")?,
        None => 0,
    };

    Ok(CompareOptions { metric, threshold })
}

fn parse_number<T: std::str::FromStr>(
    raw: &str,
    name: &'static str,
) -> histodiff_types::Result<T> {
    raw.trim().parse().map_err(|_| Error::InvalidArgument {
        name,
        value: raw.to_string(),
    })
}
