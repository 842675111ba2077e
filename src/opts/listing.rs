use structopt::StructOpt;

#[derive(StructOpt, Debug)]
pub struct Jobs {
    /// Search titles, descriptions, skills and departments
    #[structopt(short, long, default_value = "")]
    pub query: String,

    /// Location filter, eg: india, japan or remote
    #[structopt(short, long, default_value = "all")]
    pub location: String,

    /// Department filter
    #[structopt(short, long, default_value = "all")]
    pub department: String,
}

#[derive(StructOpt, Debug)]
pub struct Blog {
    /// Search titles, excerpts and tags
    #[structopt(short, long, default_value = "")]
    pub query: String,

    /// Category key, eg: market-insights
    #[structopt(short, long, default_value = "all")]
    pub category: String,
}

#[derive(StructOpt, Debug)]
pub struct Assets {
    /// Category key, eg: case-study
    #[structopt(short, long, default_value = "all")]
    pub category: String,

    /// Download an asset by id
    #[structopt(long)]
    pub download: Option<String>,
}

#[derive(StructOpt, Debug)]
pub struct City {
    /// Country, india or japan
    pub country: String,

    /// City slug, eg: mumbai
    pub slug: String,
}
