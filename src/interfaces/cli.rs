use clap::Parser;

#[derive(Parser)]
#[command(name = "lt")]
#[command(about = "Translate text with a LibreTranslate server.")]
#[command(version)]
pub struct Cli {
    /// Target language code (e.g. es, fr, de)
    #[arg(short = 't', long)]
    pub to: Option<String>,

    /// List supported languages
    #[arg(short = 'l', long)]
    pub languages: bool,

    /// Output session state as JSON
    #[arg(long)]
    pub json: bool,

    /// Choose color theme
    #[arg(short = 'T', long)]
    pub theme: Option<String>,

    /// Override the server base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Edit configuration file
    #[arg(long)]
    pub edit_config: bool,

    /// Text to translate
    #[arg(num_args = 1..)]
    pub text: Vec<String>,
}
