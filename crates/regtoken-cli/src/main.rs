use anyhow::{Context, Result};
use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use clap::Parser;
use regtoken_core::RegistrationToken;
use tracing::debug;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(
    name = "regtoken",
    version,
    about = "Construct and sign a token (in the form of a JWT) to authorize registration for Sinch RTC clients"
)]
struct Cli {
    /// Sinch Application Key
    #[arg(long)]
    application_key: String,

    /// Sinch Application Secret (base64-encoded)
    #[arg(long)]
    application_secret: String,

    /// User ID, e.g. 'foo'
    #[arg(long)]
    user_id: String,

    /// A cryptographic nonce; a fresh random UUID is generated when omitted
    #[arg(long)]
    nonce: Option<String>,

    /// Simulate current time, in UTC, ISO 8601 basic format, e.g.
    /// '20180102T030405Z'. Value is used as `iat`.
    #[arg(long)]
    now: Option<String>,

    /// Token TTL in seconds. Affects `exp`, i.e. `exp` := `iat` + TTL.
    #[arg(long, default_value_t = 600)]
    token_ttl: i64,

    /// Registration TTL in seconds; when set, the token carries the
    /// `sinch:rtc:instance:exp` claim and the registration itself expires
    #[arg(long)]
    instance_ttl: Option<i64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();
    let cli = Cli::parse();

    let issued_at = match &cli.now {
        Some(raw) => parse_basic_utc(raw)?,
        None => Utc::now(),
    };
    let nonce = cli.nonce.unwrap_or_else(|| Uuid::new_v4().to_string());

    let token = RegistrationToken {
        application_key: cli.application_key,
        application_secret: cli.application_secret,
        user_id: cli.user_id,
        nonce,
        issued_at,
        expires_at: issued_at + Duration::seconds(cli.token_ttl),
        instance_expires_at: cli
            .instance_ttl
            .map(|ttl| issued_at + Duration::seconds(ttl)),
    };

    debug!("issuing registration token for user {}", token.user_id);
    let jwt = token
        .to_jwt()
        .context("failed to sign registration token")?;
    println!("{jwt}");
    Ok(())
}

fn parse_basic_utc(raw: &str) -> Result<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(raw, "%Y%m%dT%H%M%SZ")
        .with_context(|| format!("invalid --now value {raw:?}, expected e.g. '20180102T030405Z'"))?;
    Ok(naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_basic_utc_format() {
        let parsed = parse_basic_utc("20180102T030405Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2018, 1, 2, 3, 4, 5).unwrap());
    }

    #[test]
    fn rejects_extended_iso_format() {
        assert!(parse_basic_utc("2018-01-02T03:04:05Z").is_err());
    }
}
