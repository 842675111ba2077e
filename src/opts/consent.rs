use structopt::StructOpt;

/// Manage cookie preferences
#[derive(StructOpt, Debug)]
pub enum Consent {
    /// Allow every cookie category
    AcceptAll,

    /// Allow necessary cookies only
    RejectAll,

    /// Choose cookie categories
    Custom {
        #[structopt(long)]
        analytics: bool,

        #[structopt(long)]
        marketing: bool,

        #[structopt(long)]
        functional: bool,
    },

    /// Show the stored preferences
    Status,

    /// Forget the stored preferences
    Reset,
}
