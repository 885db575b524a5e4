use clap::Parser;
use serp_analyzer::parsers::stopwords;
use serp_analyzer::{
    Analyzer, AnalyzerConfig, AnalyzerError, AnalysisRun, HttpFetcher, QueryResult, export,
};
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

mod args;
use args::{Args, Command};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ::log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), AnalyzerError> {
    let config = load_config(&args)?;

    // Startup aborts here if the stop word list cannot be loaded
    let stop_words_path = args
        .stop_words
        .clone()
        .or_else(|| config.stop_words_file.as_ref().map(Into::into));
    let stop_words = stopwords::ensure_loaded(stop_words_path.as_deref())?;

    let fetcher = HttpFetcher::new(&config)?;
    let analyzer = Analyzer::new(config, fetcher, stop_words)?;

    let start_time = std::time::Instant::now();
    let run = match &args.command {
        Command::Query { terms } => {
            let query = Command::query(terms);
            ::log::info!("Analyzing search results for '{}'", query);
            analyzer.analyze_query(&query).await?
        }
        Command::Urls { urls, file } => {
            let input = collect_url_input(urls, file.as_deref())?;
            analyzer.analyze_list(&input).await
        }
    };
    ::log::info!(
        "Run finished in {:.2} seconds",
        start_time.elapsed().as_secs_f64()
    );

    report(&run, args.json)?;

    if let (Some(path), Some(result)) = (&args.output, &run.result) {
        export::write_csv_file(result, path)?;
        println!("CSV written to {}", path.display());
    }

    Ok(())
}

/// Configuration from file (or defaults), then environment, then flags
fn load_config(args: &Args) -> Result<AnalyzerConfig, AnalyzerError> {
    let mut config = match &args.config {
        Some(path) => AnalyzerConfig::from_file(path)?,
        None => AnalyzerConfig::default(),
    }
    .with_env_overrides();

    if let Some(top) = args.top {
        config.top_keywords = top;
    }
    if let Some(concurrency) = args.concurrency {
        config.max_concurrency = concurrency;
    }

    config.validate()?;
    Ok(config)
}

/// Join URLs from arguments and from the list file into one newline-separated list
fn collect_url_input(urls: &[String], file: Option<&Path>) -> Result<String, AnalyzerError> {
    let mut input = urls.join("\n");

    if let Some(path) = file {
        let contents = if path == Path::new("-") {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        } else {
            std::fs::read_to_string(path)?
        };
        input.push('\n');
        input.push_str(&contents);
    }

    Ok(input)
}

fn report(run: &AnalysisRun, json: bool) -> Result<(), AnalyzerError> {
    for failure in &run.failures {
        println!("Skipped {}: {}", failure.url, failure.error);
    }

    let Some(result) = &run.result else {
        println!("No data: no page could be analyzed.");
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        print_result(result);
    }
    Ok(())
}

fn print_result(result: &QueryResult) {
    let stats = &result.aggregate_stats;
    println!("Average Title Length: {:.2} characters", stats.avg_title_length);
    println!(
        "Average Description Length: {:.2} characters",
        stats.avg_description_length
    );
    println!(
        "Average Content Length: {:.2} characters",
        stats.avg_content_length
    );

    for (idx, record) in result.records.iter().enumerate() {
        let cells = export::row(record);
        println!();
        println!("### Result {}", idx + 1);
        for (column, value) in export::COLUMNS.iter().zip(cells.iter()) {
            println!("{:>18}: {}", column, value);
        }
        if !record.similar_keywords.is_empty() {
            let shared = record
                .similar_keywords
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            println!("{:>18}: {}", "similar_keywords", shared);
        }
    }
}
