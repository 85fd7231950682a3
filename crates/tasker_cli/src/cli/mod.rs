use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name used in the menu greeting
    #[arg(long, default_value = "User")]
    pub name: String,

    /// Color theme for headers and hints (noir, solarized)
    #[arg(long)]
    pub theme: Option<String>,

    /// Disable colors and screen clearing (useful when piping input)
    #[arg(long)]
    pub plain: bool,
}
