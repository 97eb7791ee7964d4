use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Create config.toml file if not exists or is broken.
    #[arg(long)]
    pub create_config: bool,

    /// Generate a self-signed fallback key and certificate file, then exit.
    #[arg(long)]
    pub create_selfsigned: bool,

    /// Extra domain to add to the self-signed certificate, besides localhost.
    #[arg(long, default_value = "localhost")]
    pub selfsigned_domain: String,

    /// Filename of the self-signed key.
    #[arg(long, default_value = "key.pem")]
    pub selfsigned_keyfile: String,

    /// Filename of the self-signed certificate.
    #[arg(long, default_value = "cert.pem")]
    pub selfsigned_certfile: String,
}
