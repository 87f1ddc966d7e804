use std::time::Duration;

use clap::Parser;

/// Runtime configuration, parsed once at startup and handed to the
/// handler-construction path by value. Flags can also be supplied via the
/// environment (and a `.env` file loaded by `dotenvy`).
#[derive(Parser, Debug, Clone)]
#[command(name = "marquee-server")]
#[command(about = "JSON HTTP API for the Marquee movie catalog")]
pub struct Config {
    /// API server port
    #[arg(short, long, env = "MARQUEE_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Operating environment (development|staging|production)
    #[arg(long, env = "MARQUEE_ENV", default_value = "development")]
    pub env: String,

    /// PostgreSQL DSN
    #[arg(long = "db-dsn", env = "MARQUEE_DB_DSN")]
    pub db_dsn: String,

    /// PostgreSQL maximum open connections
    #[arg(long = "db-max-conns", env = "MARQUEE_DB_MAX_CONNS", default_value_t = 25)]
    pub db_max_conns: u32,

    /// PostgreSQL maximum idle time for a pooled connection
    #[arg(
        long = "db-max-idle-time",
        env = "MARQUEE_DB_MAX_IDLE_TIME",
        default_value = "15m",
        value_parser = humantime::parse_duration
    )]
    pub db_max_idle_time: Duration,
}
