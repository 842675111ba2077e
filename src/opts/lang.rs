use structopt::StructOpt;

/// Show or change the display language
#[derive(StructOpt, Debug)]
pub struct Lang {
    /// Locale code to activate (en, ja or hi)
    pub code: Option<String>,

    /// List supported locales
    #[structopt(short, long)]
    pub list: bool,

    /// Print keys without a translation for each locale
    #[structopt(short, long)]
    pub audit: bool,
}
