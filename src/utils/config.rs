use std::net::SocketAddr;

use anyhow::Context;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 9000;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(std::env::var("HOST").ok(), std::env::var("PORT").ok())
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> anyhow::Result<Self> {
        let host = host.unwrap_or_else(|| DEFAULT_HOST.to_string());
        // PORT 解析失败时回落到默认端口
        let port: u16 = port
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let addr: SocketAddr = format!("{}:{}", host, port)
            .parse()
            .with_context(|| format!("Invalid HOST/PORT: {}:{}", host, port))?;
        Ok(Self { addr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let cfg = ServerConfig::from_vars(None, None).unwrap();
        assert_eq!(cfg.addr, "127.0.0.1:9000".parse().unwrap());
    }

    #[test]
    fn reads_host_and_port() {
        let cfg = ServerConfig::from_vars(Some("0.0.0.0".into()), Some("8080".into())).unwrap();
        assert_eq!(cfg.addr, "0.0.0.0:8080".parse().unwrap());
    }

    #[test]
    fn bad_port_falls_back_to_default() {
        let cfg = ServerConfig::from_vars(None, Some("eighty".into())).unwrap();
        assert_eq!(cfg.addr.port(), DEFAULT_PORT);
    }

    #[test]
    fn bad_host_is_an_error() {
        let err = ServerConfig::from_vars(Some("not a host".into()), None).unwrap_err();
        assert!(err.to_string().contains("Invalid HOST/PORT"));
    }
}
