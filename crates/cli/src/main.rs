use clap::{Parser, ValueEnum};
use ferrous_doh_application::services::LookupContext;
use ferrous_doh_application::use_cases::LookupUseCase;
use ferrous_doh_domain::{CliOverrides, DohError};
use output::{Answers, Report};
use tracing::{debug, info};

mod bootstrap;
mod di;
mod output;

#[derive(Debug, Clone, Copy, ValueEnum)]
#[value(rename_all = "UPPER")]
enum QueryKind {
    A,
    Aaaa,
    /// A and AAAA together
    Ip,
    Cname,
    Ns,
    Txt,
    /// Reverse lookup of an IP address or arpa name
    Ptr,
    Srv,
    Mx,
}

impl QueryKind {
    fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Ip => "IP",
            Self::Cname => "CNAME",
            Self::Ns => "NS",
            Self::Txt => "TXT",
            Self::Ptr => "PTR",
            Self::Srv => "SRV",
            Self::Mx => "MX",
        }
    }
}

#[derive(Parser)]
#[command(name = "ferrous-doh")]
#[command(version)]
#[command(about = "Ferrous DoH - race DNS-over-HTTPS JSON providers for the fastest answer")]
struct Cli {
    /// Record type to look up
    #[arg(value_enum, ignore_case = true)]
    kind: QueryKind,

    /// Domain name (or IP address for PTR)
    name: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DoH JSON endpoint; repeat to race several (replaces configured providers)
    #[arg(short = 'p', long = "provider", value_name = "URL")]
    providers: Vec<String>,

    /// HTTP timeout per provider request
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Query CNAME/NS/MX records instead of TXT
    #[arg(long)]
    strict_types: bool,

    /// SRV service label, without the leading underscore
    #[arg(long, default_value = "")]
    service: String,

    /// SRV protocol label, without the leading underscore
    #[arg(long, default_value = "")]
    proto: String,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        providers: cli.providers.clone(),
        timeout_ms: cli.timeout_ms,
        strict_record_types: cli.strict_types,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        providers = config.resolver.providers.len(),
        "Starting Ferrous DoH lookup"
    );

    let services = di::DohServices::new(&config)?;

    let ctx = LookupContext::new();
    let on_interrupt = ctx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("Interrupted, cancelling lookup");
            on_interrupt.cancel();
        }
    });

    let report = run_lookup(&services.lookup, &ctx, &cli).await?;

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.to_text());
    }

    Ok(())
}

async fn run_lookup(
    lookup: &LookupUseCase,
    ctx: &LookupContext,
    cli: &Cli,
) -> Result<Report, DohError> {
    let name = cli.name.as_str();
    let mut cname = None;

    let answers = match cli.kind {
        QueryKind::A => Answers::Addrs(lookup.lookup_a(ctx, name).await?),
        QueryKind::Aaaa => Answers::Addrs(lookup.lookup_aaaa(ctx, name).await?),
        QueryKind::Ip => Answers::Addrs(lookup.lookup_ip(ctx, name).await?),
        QueryKind::Cname => Answers::Names(vec![lookup.lookup_cname(ctx, name).await?]),
        QueryKind::Ns => Answers::Ns(lookup.lookup_ns(ctx, name).await?),
        QueryKind::Txt => Answers::Names(lookup.lookup_txt(ctx, name).await?),
        QueryKind::Ptr => Answers::Names(lookup.lookup_addr(ctx, name).await?),
        QueryKind::Srv => {
            let (owner, records) = lookup
                .lookup_srv(ctx, &cli.service, &cli.proto, name)
                .await?;
            cname = Some(owner);
            Answers::Srv(records)
        }
        QueryKind::Mx => Answers::Mx(lookup.lookup_mx(ctx, name).await?),
    };

    Ok(Report {
        name: cli.name.clone(),
        record_type: cli.kind.as_str(),
        cname,
        answers,
    })
}
