//! taglens — image analysis CLI
//!
//! Uploads a photo to the analysis service and prints the tags and
//! dominant colors it comes back with.

use std::io::Write as _;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use taglens::{
    ContentId, Credential, ImageAnalysis, PhotoColor, ProgressFn, TagLens, UploadRequest,
};

/// Taglens image analysis client
#[derive(Parser)]
#[command(name = "taglens")]
#[command(version = taglens::PKG_VERSION)]
#[command(about = "Upload a photo, get back tags and dominant colors")]
struct Args {
    /// API base URL
    #[arg(long, env = "TAGLENS_BASE_URL", default_value = taglens::DEFAULT_BASE_URL)]
    base_url: String,

    /// API key for HTTP Basic authentication
    #[arg(long, env = "TAGLENS_API_KEY")]
    api_key: String,

    /// API secret for HTTP Basic authentication
    #[arg(long, env = "TAGLENS_API_SECRET")]
    api_secret: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Upload an image and print its tags and dominant colors
    Analyze {
        /// Image file (JPEG or PNG)
        file: PathBuf,
    },

    /// Upload an image and print the upload id
    Upload {
        /// Image file (JPEG or PNG)
        file: PathBuf,
    },

    /// Print the tags for a previous upload
    Tags {
        /// Upload id returned by the upload call
        upload_id: String,
    },

    /// Print the dominant colors for a previous upload
    Colors {
        /// Upload id returned by the upload call
        upload_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing (default: warn for CLI; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let analyzer = TagLens::builder()
        .base_url(&args.base_url)
        .credential(Credential::basic(&args.api_key, &args.api_secret))
        .timeout(Duration::from_secs(args.timeout))
        .build()?;

    match args.command {
        Command::Analyze { file } => {
            let request = UploadRequest::from_path(&file)?;
            let report = analyzer.analyze(request, stderr_progress()).await;
            eprintln!();
            match &report.upload_id {
                Some(id) => println!("upload id: {id}"),
                None => println!("upload failed, no results"),
            }
            print_tags(&report.tags);
            print_colors(&report.colors);
        }
        Command::Upload { file } => {
            let request = UploadRequest::from_path(&file)?;
            let id = analyzer.upload(request, stderr_progress()).await?;
            eprintln!();
            println!("{id}");
        }
        Command::Tags { upload_id } => {
            let tags = analyzer.tags(&ContentId::new(upload_id)).await?;
            print_tags(&tags);
        }
        Command::Colors { upload_id } => {
            let colors = analyzer.colors(&ContentId::new(upload_id)).await?;
            print_colors(&colors);
        }
    }

    Ok(())
}

/// In-place percentage on stderr while the upload body streams out.
fn stderr_progress() -> ProgressFn {
    Arc::new(|fraction: f32| {
        eprint!("\rupload {:3.0}%", fraction * 100.0);
        let _ = std::io::stderr().flush();
    })
}

fn print_tags(tags: &[String]) {
    if tags.is_empty() {
        println!("(no tags)");
        return;
    }
    for tag in tags {
        println!("{tag}");
    }
}

fn print_colors(colors: &[PhotoColor]) {
    if colors.is_empty() {
        println!("(no colors)");
        return;
    }
    for color in colors {
        println!(
            "#{:02x}{:02x}{:02x}  {}",
            color.red, color.green, color.blue, color.color_name
        );
    }
}
