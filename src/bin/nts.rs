extern crate log;
extern crate pretty_env_logger;

use std::path::PathBuf;

use log::debug;
use structopt::StructOpt;

use config::SiteConfig;

use nts_site::{
    command,
    opts::{fatal, Assets, Blog, City, Consent, Contact, Jobs, Lang},
    page, Result, SiteContext,
};

#[derive(Debug, StructOpt)]
/// NTS Nihon Global site tools
#[structopt(name = "nts")]
struct Cli {
    /// Log level
    #[structopt(long, default_value = "info")]
    log_level: String,

    /// Site configuration file
    #[structopt(long, parse(from_os_str))]
    config: Option<PathBuf>,

    #[structopt(subcommand)]
    cmd: Option<Command>,
}

#[derive(StructOpt, Debug)]
enum Command {
    /// Show or change the display language
    Lang {
        #[structopt(flatten)]
        args: Lang,
    },

    /// Show the home page hero
    Home {
        /// Follow the call to action
        #[structopt(long)]
        cta: bool,
    },

    /// Translate a message key
    T {
        key: String,
    },

    /// Search open positions
    Jobs {
        #[structopt(flatten)]
        args: Jobs,
    },

    /// Search blog posts
    Blog {
        #[structopt(flatten)]
        args: Blog,
    },

    /// List or download resources
    Assets {
        #[structopt(flatten)]
        args: Assets,
    },

    /// List business verticals
    Verticals,

    /// List office locations
    Offices,

    /// Show a city profile
    City {
        #[structopt(flatten)]
        args: City,
    },

    /// Manage cookie preferences
    Consent {
        #[structopt(subcommand)]
        action: Option<Consent>,
    },

    /// Send a message to the team
    Contact {
        #[structopt(flatten)]
        args: Contact,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Consent { action: None }
    }
}

fn process_command(config: SiteConfig, cmd: Command) -> Result<()> {
    let mut ctx = SiteContext::open(config)?;
    debug!("Site {} ({})", ctx.config().name, ctx.page_url(page::HOME)?);

    match cmd {
        Command::Lang { ref args } => command::lang::run(&mut ctx, args)?,
        Command::Home { cta } => command::home::run(&ctx, cta)?,
        Command::T { ref key } => command::lang::translate(&ctx, key),
        Command::Jobs { ref args } => command::listing::jobs(&ctx, args),
        Command::Blog { ref args } => command::listing::blog(&ctx, args),
        Command::Assets { ref args } => command::listing::assets(&ctx, args)?,
        Command::Verticals => command::listing::verticals(&ctx),
        Command::Offices => command::listing::offices(&ctx),
        Command::City { ref args } => command::listing::city(&ctx, args)?,
        Command::Consent { ref action } => {
            command::consent::run(&mut ctx, action.as_ref())?
        }
        Command::Contact { args } => {
            command::contact::submit(&mut ctx, args.into())?
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let root_args = Cli::from_args();

    nts_site::opts::panic_hook();

    if let Err(e) = nts_site::opts::log_level(&*root_args.log_level) {
        return fatal(e);
    }

    let config = match SiteConfig::resolve(root_args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return fatal(e.into()),
    };

    let cmd = root_args.cmd.unwrap_or_default();
    if let Err(e) = process_command(config, cmd) {
        return fatal(e);
    }

    Ok(())
}
