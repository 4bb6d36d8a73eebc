use time::macros::format_description;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;
use url::Url;

use crate::args::Args;

pub fn setup_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime::new(format_description!(
            "[hour]:[minute]:[second].[subsecond digits:3]"
        )))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn format_number(num: usize) -> String {
    let digits = num.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn parse_base_url(base_url: Option<&str>) -> anyhow::Result<Option<Url>> {
    base_url
        .map(|raw| {
            Url::parse(raw).map_err(|e| anyhow::anyhow!("--base-url {:?} is not a URL: {}", raw, e))
        })
        .transpose()
}

pub fn validate_args(args: &Args) -> anyhow::Result<()> {
    if let Some(top) = args.top {
        if top == 0 {
            anyhow::bail!("--top must be greater than 0");
        }
    }

    for (flag, selector) in [
        ("--result-selector", &args.result_selector),
        ("--title-selector", &args.title_selector),
        ("--link-selector", &args.link_selector),
    ] {
        if selector.trim().is_empty() {
            anyhow::bail!("{} must not be empty", flag);
        }
    }

    parse_base_url(args.base_url.as_deref())?;

    Ok(())
}
