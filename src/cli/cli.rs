use clap::Parser;

const PASSOP_LONG_VERSION: &str = concat!(
    "version: ", env!("CARGO_PKG_VERSION"), "\n",
    "git sha: ", env!("PASSOP_GIT_SHA"), "\n",
    "build time (UTC): ", env!("PASSOP_BUILD_TIME"), "\n",
    "target: ", env!("PASSOP_TARGET")
);

#[derive(Parser)]
#[command(
    name = "passop",
    version = env!("CARGO_PKG_VERSION"),
    long_version = PASSOP_LONG_VERSION,
    about = " 🔐 Passop — copy a pass secret into a 1Password vault"
)]
pub struct Cli {
    /// Secret name in the password store (also used as the vault item title)
    pub secret: String,

    /// Overwrite an existing vault item with the same title
    #[arg(short, long)]
    pub overwrite: bool,

    /// Target vault name (defaults to the account's default vault)
    #[arg(short, long)]
    pub vault: Option<String>,
}
