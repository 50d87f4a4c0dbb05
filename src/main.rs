use std::fs;
use std::path::{Path, PathBuf};

use certlayout::config::EditorConfig;
use certlayout::error::LayoutError;
use certlayout::field::{parse_template, to_template_json};
use certlayout::geometry::Size;
use certlayout::preview::{PreviewData, render_preview};
use certlayout::store::FieldStore;
use certlayout::zoom::fit_scale;
use clap::{Args, Parser, Subcommand};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "certlayout", about = "Certificate template layout tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a saved template with sample data to SVG.
    Preview(PreviewArgs),
    /// Print the initial fit scale for a page in a viewport.
    Fit(FitArgs),
    /// Load a template through the store and print the cleaned field list.
    Normalize(NormalizeArgs),
}

#[derive(Args, Debug)]
struct PageArgs {
    #[arg(long)]
    page_width: f64,
    #[arg(long)]
    page_height: f64,
}

impl PageArgs {
    fn size(&self) -> Result<Size, LayoutError> {
        let size = Size::new(self.page_width, self.page_height);
        if size.is_valid() {
            Ok(size)
        } else {
            Err(LayoutError::InvalidPageSize { width: self.page_width, height: self.page_height })
        }
    }
}

#[derive(Args, Debug)]
struct PreviewArgs {
    #[arg(long)]
    template: PathBuf,
    #[command(flatten)]
    page: PageArgs,
    #[arg(long, default_value_t = 1.0)]
    scale: f64,
    /// JSON object overriding the sample values (camelCase keys).
    #[arg(long)]
    data: Option<PathBuf>,
    /// Write the SVG here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FitArgs {
    #[command(flatten)]
    page: PageArgs,
    /// Overrides `CERTLAYOUT_VIEWPORT_WIDTH`.
    #[arg(long)]
    viewport_width: Option<f64>,
    /// Overrides `CERTLAYOUT_VIEWPORT_HEIGHT`.
    #[arg(long)]
    viewport_height: Option<f64>,
}

#[derive(Args, Debug)]
struct NormalizeArgs {
    #[arg(long)]
    template: PathBuf,
}

fn main() -> Result<(), LayoutError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Preview(args) => run_preview(&args),
        Command::Fit(args) => run_fit(&args),
        Command::Normalize(args) => run_normalize(&args),
    }
}

fn load_store(path: &Path) -> Result<FieldStore, LayoutError> {
    let config = EditorConfig::from_env()?;
    let raw = fs::read_to_string(path)?;
    let mut store = FieldStore::with_font_family(&config.default_font_family);
    store.replace_all(parse_template(&raw)?);
    info!(path = %path.display(), fields = store.len(), "template loaded");
    Ok(store)
}

fn run_preview(args: &PreviewArgs) -> Result<(), LayoutError> {
    let page = args.page.size()?;
    let store = load_store(&args.template)?;
    let data = match &args.data {
        Some(path) => serde_json::from_str::<PreviewData>(&fs::read_to_string(path)?).map_err(LayoutError::Data)?,
        None => PreviewData::sample(),
    };

    let svg = render_preview(store.fields(), page, args.scale, &data)?.to_svg();
    match &args.out {
        Some(path) => {
            fs::write(path, svg)?;
            info!(path = %path.display(), "preview written");
        }
        None => print!("{svg}"),
    }
    Ok(())
}

fn run_fit(args: &FitArgs) -> Result<(), LayoutError> {
    let page = args.page.size()?;
    let config = EditorConfig::from_env()?.with_viewport(args.viewport_width, args.viewport_height)?;
    let scale = fit_scale(page, config.viewport);
    println!("{scale:.4}");
    Ok(())
}

fn run_normalize(args: &NormalizeArgs) -> Result<(), LayoutError> {
    let store = load_store(&args.template)?;
    println!("{}", to_template_json(store.fields())?);
    Ok(())
}
