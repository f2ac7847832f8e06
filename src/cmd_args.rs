use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about = "Terminal storefront for WEB-LAREK", long_about = None)]
struct ClapArgs {
    /// Profile section to read endpoints from. Default is 'default'.
    /// A missing profile falls back to the environment and built-in origin.
    #[clap(short = 'p', long, default_value = "default", help = "profile name")]
    profile: String,

    /// Origin of the shop server; API and CDN paths are derived from it
    #[clap(long, help = "shop server origin, e.g. https://larek-api.nomoreparties.co")]
    origin: Option<String>,

    #[clap(long, help = "full API base URL (overrides --origin)")]
    api_url: Option<String>,

    #[clap(long, help = "full CDN base URL (overrides --origin)")]
    cdn_url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CommandLineArgs {
    profile: String,
    origin: Option<String>,
    api_url: Option<String>,
    cdn_url: Option<String>,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    pub fn api_url(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    pub fn cdn_url(&self) -> Option<&str> {
        self.cdn_url.as_deref()
    }
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            profile: args.profile,
            origin: args.origin,
            api_url: args.api_url,
            cdn_url: args.cdn_url,
        }
    }
}
