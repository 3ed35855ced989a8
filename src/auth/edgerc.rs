use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};

/// API client credentials of one `.edgerc` profile.
///
/// Other keys of the profile, such as `max-body`, only matter for signed
/// request bodies and are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub host: String,
    pub client_token: String,
    pub client_secret: String,
    pub access_token: String,
}

impl Credentials {
    pub fn from_file<P: AsRef<Path>>(path: P, section: &str) -> Result<Self> {
        let path = path.as_ref();
        let content = Self::read_file(path).map_err(|e| {
            Error::Config(format!("cannot read credentials file {}: {}", path.display(), e))
        })?;

        Self::from_edgerc(&content, section)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), config_detail(e))))
    }

    fn read_file(path: &Path) -> std::io::Result<String> {
        let mut content = String::new();
        BufReader::new(File::open(path)?).read_to_string(&mut content)?;
        Ok(content)
    }

    /// Picks `section` out of the INI-formatted `.edgerc` content.
    pub fn from_edgerc(content: &str, section: &str) -> Result<Self> {
        let mut sections = parse_ini(content);
        let mut values = sections
            .remove(section)
            .ok_or_else(|| Error::Config(format!("section [{}] not found", section)))?;

        let mut required = move |key: &str| {
            values
                .remove(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| Error::Config(format!("section [{}] lacks `{}`", section, key)))
        };

        let host = required("host")?;
        let client_token = required("client_token")?;
        let client_secret = required("client_secret")?;
        let access_token = required("access_token")?;

        Ok(Self {
            host,
            client_token,
            client_secret,
            access_token,
        })
    }

    /// API base endpoint, without a trailing slash.
    pub fn base_url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        if host.starts_with("https://") || host.starts_with("http://") {
            host.to_string()
        } else {
            format!("https://{}", host)
        }
    }
}

fn config_detail(err: Error) -> String {
    match err {
        Error::Config(detail) => detail,
        other => other.to_string(),
    }
}

type Sections = HashMap<String, HashMap<String, String>>;

fn parse_ini(content: &str) -> Sections {
    let mut sections = Sections::new();
    let mut current: Option<String> = None;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            let name = name.trim().to_string();
            sections.entry(name.clone()).or_default();
            current = Some(name);
            continue;
        }

        let Some(section) = current.as_ref() else {
            log::debug!("edgerc: ignoring line outside of any section");
            continue;
        };

        let Some(idx) = line.find(['=', ':']) else {
            log::debug!("edgerc: ignoring malformed line in [{}]", section);
            continue;
        };

        let key = line[..idx].trim().to_lowercase();
        let value = line[idx + 1..].trim().to_string();
        if let Some(values) = sections.get_mut(section) {
            values.insert(key, value);
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const EDGERC: &str = r#"
# shared credentials
[default]
client_secret = c2VjcmV0
host = akab-host.luna.akamaiapis.net
access_token = akab-access
client_token = akab-client
max-body = 65536

[dns]
host: https://akab-dns.luna.akamaiapis.net/
client_token: dns-client
client_secret: dns-secret
access_token: dns-access
"#;

    #[test]
    fn test_default_section() {
        let creds = Credentials::from_edgerc(EDGERC, "default").unwrap();
        assert_eq!(creds.host, "akab-host.luna.akamaiapis.net");
        assert_eq!(creds.client_token, "akab-client");
        assert_eq!(creds.client_secret, "c2VjcmV0");
        assert_eq!(creds.access_token, "akab-access");
        assert_eq!(creds.base_url(), "https://akab-host.luna.akamaiapis.net");
    }

    #[test]
    fn test_named_section_with_scheme() {
        let creds = Credentials::from_edgerc(EDGERC, "dns").unwrap();
        assert_eq!(creds.client_token, "dns-client");
        assert_eq!(creds.base_url(), "https://akab-dns.luna.akamaiapis.net");
    }

    #[test]
    fn test_missing_section() {
        let err = Credentials::from_edgerc(EDGERC, "papi").unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.contains("[papi]")));
    }

    #[test]
    fn test_missing_key() {
        let content = "[default]\nhost = h\nclient_token = c\naccess_token = a\n";
        let err = Credentials::from_edgerc(content, "default").unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.contains("client_secret")));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(EDGERC.as_bytes()).unwrap();

        let creds = Credentials::from_file(file.path(), "default").unwrap();
        assert_eq!(creds.access_token, "akab-access");

        let err = Credentials::from_file(file.path(), "nope").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Credentials::from_file(dir.path().join("absent"), "default").unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.contains("cannot read")));
    }
}
