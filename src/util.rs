use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

static INIT_ONCE: std::sync::Once = std::sync::Once::new();
pub fn init_tracing_once() {
    INIT_ONCE.call_once(|| {
        let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

/// Read a newline-separated tag list. Lines are trimmed; blank lines are ignored.
/// A missing or unreadable file is an error.
pub fn load_tag_file(path: &Path) -> Result<Vec<String>> {
    let f = File::open(path).with_context(|| format!("open tag file {}", path.display()))?;
    let mut tags = Vec::new();
    for line in BufReader::new(f).lines() {
        let line = line.with_context(|| format!("read tag file {}", path.display()))?;
        let t = line.trim();
        if !t.is_empty() {
            tags.push(t.to_string());
        }
    }
    Ok(tags)
}

fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write through a buffered sibling temp file, then rename over `path`.
/// The temp file is removed if `fill` fails.
pub fn write_atomic<F>(path: &Path, fill: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    let tmp = tmp_sibling(path);
    let res = (|| -> Result<()> {
        let f = File::create(&tmp).with_context(|| format!("create {}", tmp.display()))?;
        let mut w = BufWriter::new(f);
        fill(&mut w)?;
        w.flush().with_context(|| format!("flush {}", tmp.display()))?;
        Ok(())
    })();
    if let Err(e) = res {
        let _ = fs::remove_file(&tmp);
        return Err(e.context(format!("write {}", path.display())));
    }
    fs::rename(&tmp, path).with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))
}
