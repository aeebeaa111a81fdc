use anyhow::Result;

use crate::config::Config;

#[test]
fn config_deserializes_from_full_env() -> Result<()> {
    let config: Config = envy::from_iter(vec![
        ("RUST_LOG".into(), "error".into()),
        ("HTTP_PORT".into(), "7550".into()),
    ])?;

    assert!(config.rust_log == "error", "unexpected value parsed for RUST_LOG, got {}, expected {}", config.rust_log, "error");
    assert!(config.http_port == 7550, "unexpected value parsed for HTTP_PORT, got {}, expected {}", config.http_port, "7550");

    Ok(())
}

#[test]
fn config_requires_http_port() {
    let res: Result<Config, envy::Error> = envy::from_iter(vec![("RUST_LOG".into(), "error".into())]);
    assert!(res.is_err(), "config should fail to parse without HTTP_PORT, got {:?}", res);
}
