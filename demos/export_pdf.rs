//! Highlight and paginate a file (or some lorem ipsum), then write it as a PDF.
//!
//! cargo run --example export-pdf -- [input] [output.pdf] [config.toml]

use textpage::config::EditorConfig;
use textpage::export::{write_pdf, Info};
use textpage::highlight::{highlight, Category, Language};
use textpage::layout::{paginate, Monospace};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut args = std::env::args().skip(1);
    let input = args.next();
    let output = args.next().unwrap_or_else(|| "export.pdf".to_string());
    let config = match args.next() {
        Some(path) => EditorConfig::load(path)?,
        None => EditorConfig::default(),
    };

    let (text, language, title) = match &input {
        Some(path) => (
            std::fs::read_to_string(path)?,
            Language::from_path(path),
            path.clone(),
        ),
        None => (
            format!("{}\n\n{}", lipsum::lipsum(64), lipsum::lipsum(512)),
            Language::PlainText,
            "Lorem Ipsum".to_string(),
        ),
    };

    let spans = highlight(&text, language);
    for category in [
        Category::Keyword,
        Category::String,
        Category::Comment,
        Category::Number,
    ] {
        let count = spans.iter().filter(|s| s.category == category).count();
        println!("{category:?}: {count} spans");
    }

    let pagination = config.pagination()?;
    let pages = paginate(&text, &pagination, &Monospace::courier(pagination.font_size))?;
    println!("{} pages", pages.len());

    let out = std::fs::File::create(&output)?;
    write_pdf(
        &pages,
        &pagination,
        Some(&Info::new().title(title).subject("export-pdf demo")),
        out,
    )?;
    println!("wrote {output}");
    Ok(())
}
