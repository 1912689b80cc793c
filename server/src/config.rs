use clap::Parser;

/// Command-line and environment configuration for the server binary.
#[derive(Parser, Debug, Clone)]
#[command(name = "todo-server", about = "In-memory to-do list HTTP server")]
pub struct ServerConfig {
    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 5000)]
    pub port: u16,
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
