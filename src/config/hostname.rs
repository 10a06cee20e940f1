/// Placeholder in the namespace template replaced by the local hostname.
pub const HOSTNAME_TOKEN: &str = "(HOSTNAME)";

const FALLBACK_HOSTNAME: &str = "localhost";

/// Substitutes every `(HOSTNAME)` in `template`. The hostname is only looked
/// up when the token is present.
#[must_use]
pub fn resolve_namespace<F>(template: &str, hostname: F) -> String
where
    F: FnOnce() -> String,
{
    if template.contains(HOSTNAME_TOKEN) {
        template.replace(HOSTNAME_TOKEN, &hostname())
    } else {
        template.to_owned()
    }
}

/// Name of this machine as reported by the OS.
#[must_use]
pub fn local_hostname() -> String {
    system_hostname()
        .or_else(|| std::env::var("HOSTNAME").ok())
        .or_else(|| std::env::var("COMPUTERNAME").ok())
        .map(|name| name.trim().to_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| FALLBACK_HOSTNAME.to_owned())
}

#[cfg(unix)]
fn system_hostname() -> Option<String> {
    let mut buf = [0_u8; 256];
    // Safety: buf is valid for writes of buf.len() bytes and outlives the call.
    let rc = unsafe { libc::gethostname(buf.as_mut_ptr().cast::<libc::c_char>(), buf.len()) };
    if rc != 0 {
        return None;
    }
    let end = buf.iter().position(|byte| *byte == 0).unwrap_or(buf.len());
    let name = std::str::from_utf8(buf.get(..end)?).ok()?;
    Some(name.to_owned())
}

#[cfg(not(unix))]
const fn system_hostname() -> Option<String> {
    None
}
