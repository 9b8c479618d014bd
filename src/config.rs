use std::path::PathBuf;

/// Process-wide server settings, immutable after startup.
///
/// Workers read this without synchronization; nothing in it ever changes
/// once the listener is up.
#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub doc_root: PathBuf,
}

impl Config {
    /// Builds the configuration from the process argument vector.
    ///
    /// Expects exactly two positional arguments: the listen port (a
    /// non-zero integer) and the document-root directory.
    pub fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self, String> {
        args.next(); // executable name

        let port = args.next().ok_or("missing listen port")?;
        let doc_root = args.next().ok_or("missing document root")?;
        if args.next().is_some() {
            return Err("too many arguments".to_string());
        }

        let port: u16 = port
            .parse()
            .map_err(|_| format!("invalid listen port: {port}"))?;
        if port == 0 {
            return Err("listen port must be non-zero".to_string());
        }

        Ok(Self {
            port,
            doc_root: PathBuf::from(doc_root),
        })
    }
}
