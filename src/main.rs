use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tweetnet::{init_tracing_once, Outputs, TweetNet};

/// tweetnet: retweet and mention networks from an archived tweet corpus.
///
/// Reads `.bz2` / `.zst` JSONL archives (a single file or a directory tree),
/// keeps the tweets inside the date range / hashtag set, and writes the
/// selected graphs (GEXF) and ranked reports (JSON).
#[derive(Parser, Debug)]
#[command(name = "tweetnet", version, about)]
struct Cli {
    /// Archive file or directory to read
    #[arg(short = 'd', long = "dir", default_value = "/data")]
    input: PathBuf,

    // Single-dash `-fi`/`-ff`/`-h FILE` are not expressible: clap shorts are
    // one character and `-h` is help. The long forms keep the names.
    /// Start date (dd-mm-yy)
    #[arg(long = "fi", alias = "start", value_name = "DD-MM-YY")]
    start: Option<String>,

    /// End date (dd-mm-yy)
    #[arg(long = "ff", alias = "end", value_name = "DD-MM-YY")]
    end: Option<String>,

    /// File with one hashtag per line
    #[arg(long = "hashtags", alias = "tags", value_name = "FILE")]
    hashtags: Option<PathBuf>,

    /// Directory for the output files
    #[arg(short = 'o', long = "out-dir", default_value = ".")]
    out_dir: PathBuf,

    /// Write the retweet graph (rt.gexf)
    #[arg(long)]
    grt: bool,

    /// Write the retweet report (rt.json)
    #[arg(long)]
    jrt: bool,

    /// Write the mention graph (mention.gexf)
    #[arg(long)]
    gm: bool,

    /// Write the mention report (mention.json)
    #[arg(long)]
    jm: bool,

    /// Co-retweet graph (not implemented; accepted and ignored)
    #[arg(long)]
    gcrt: bool,

    /// Co-retweet report (not implemented; accepted and ignored)
    #[arg(long)]
    jcrt: bool,

    /// Hide the progress bar
    #[arg(long)]
    no_progress: bool,
}

fn main() -> Result<()> {
    init_tracing_once();
    let cli = Cli::parse();

    let outputs = Outputs {
        retweet_graph: cli.grt,
        retweet_report: cli.jrt,
        mention_graph: cli.gm,
        mention_report: cli.jm,
        coretweet_graph: cli.gcrt,
        coretweet_report: cli.jcrt,
    };

    // Configuration errors surface here, before any archive is opened.
    let mut job = TweetNet::new()
        .input(&cli.input)
        .out_dir(&cli.out_dir)
        .outputs(outputs)
        .progress(!cli.no_progress)
        .progress_label("Reading archives")
        .date_range_str(cli.start.as_deref(), cli.end.as_deref())?;
    if let Some(path) = &cli.hashtags {
        job = job.tags_file(path)?;
    }

    let summary = job.run()?;
    println!("Processed tweets: {}", summary.accepted);
    for p in &summary.written {
        println!("  wrote {}", p.display());
    }
    println!("{:.3}", summary.elapsed.as_secs_f64());
    Ok(())
}
