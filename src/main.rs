//! Health Support CLI.

use anyhow::Context;
use clap::Parser;
use serde_json::json;

use health_support_lib::config;
use health_support_lib::pipeline::extraction::PdfTextExtractor;
use health_support_lib::pipeline::prediction::HttpPredictionClient;
use health_support_lib::pipeline::processor::{ProcessingOutput, ReportProcessor};
use health_support_lib::{init_tracing, Domain, LogFormat};

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, PredictArgs, ReportArgs};

fn main() {
    let cli = Cli::parse();

    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Json => LogFormat::Json,
    };
    let filter = cli.log_level().map(config::log_filter_for);
    init_tracing(format, filter.as_deref());

    let result = match cli.command {
        Command::Extract(args) => run_extract(&args),
        Command::Predict(args) => run_predict(&args),
        Command::Domains => run_domains(),
    };

    if let Err(error) = result {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

fn processor() -> ReportProcessor {
    ReportProcessor::new(Box::new(PdfTextExtractor))
}

fn extract(processor: &ReportProcessor, args: &ReportArgs) -> anyhow::Result<ProcessingOutput> {
    processor
        .process_file(args.domain, &args.file)
        .with_context(|| format!("failed to read report {}", args.file.display()))
}

fn run_extract(args: &ReportArgs) -> anyhow::Result<()> {
    let output = extract(&processor(), args)?;

    let rendered = if args.details {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string_pretty(&output.request)?
    };
    println!("{rendered}");
    Ok(())
}

fn run_predict(args: &PredictArgs) -> anyhow::Result<()> {
    let reports = processor();
    let output = extract(&reports, &args.report)?;

    let api_base = args.api_base.clone().unwrap_or_else(config::api_base);
    let client = HttpPredictionClient::new(&api_base, args.timeout)?;
    let verdict = reports
        .submit(&output, &client)
        .with_context(|| format!("{} request failed", output.request.prediction_type))?;

    let rendered = if args.report.details {
        json!({ "extraction": output, "verdict": verdict })
    } else {
        json!({ "request": output.request, "verdict": verdict.body })
    };
    println!("{}", serde_json::to_string_pretty(&rendered)?);
    Ok(())
}

fn run_domains() -> anyhow::Result<()> {
    let domains: Vec<_> = Domain::ALL
        .iter()
        .map(|domain| {
            let fields: Vec<&str> = domain.schema().iter().map(|field| field.name).collect();
            json!({
                "domain": domain.slug(),
                "prediction_type": domain.as_str(),
                "endpoint": domain.endpoint_path(),
                "sex_field": domain.sex_field(),
                "fields": fields,
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&domains)?);
    Ok(())
}
