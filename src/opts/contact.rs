use structopt::StructOpt;

use contact::ContactForm;

/// Send a message to the team
#[derive(StructOpt, Debug)]
pub struct Contact {
    #[structopt(long)]
    pub name: String,

    #[structopt(long)]
    pub email: String,

    #[structopt(long)]
    pub company: Option<String>,

    #[structopt(long)]
    pub subject: String,

    #[structopt(long)]
    pub message: String,

    /// Business vertical, eg: tradezy
    #[structopt(long)]
    pub vertical: Option<String>,
}

impl From<Contact> for ContactForm {
    fn from(args: Contact) -> Self {
        ContactForm {
            name: args.name,
            email: args.email,
            company: args.company,
            subject: args.subject,
            message: args.message,
            vertical: args.vertical.map(|v| v.to_lowercase()),
        }
    }
}
