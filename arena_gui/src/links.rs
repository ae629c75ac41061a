//! Opening statement links in the system browser.

/// Open a URL in the default browser.
///
/// Only http(s) and mailto links are handed to the OS; the statement has
/// already been sanitized, this guards links typed as plain markdown.
pub fn open_url(url: &str) -> Result<(), String> {
    let allowed = ["http://", "https://", "mailto:"]
        .iter()
        .any(|scheme| url.starts_with(scheme));
    if !allowed {
        tracing::warn!(url, "refusing to open link");
        return Err(format!("Refused to open link: {}", url));
    }

    tracing::debug!(url, "opening link");
    spawn_opener(url).map_err(|e| format!("Failed to open {}: {}", url, e))
}

#[cfg(target_os = "windows")]
fn spawn_opener(url: &str) -> std::io::Result<()> {
    std::process::Command::new("cmd")
        .args(["/C", "start", "", url])
        .spawn()
        .map(|_| ())
}

#[cfg(target_os = "macos")]
fn spawn_opener(url: &str) -> std::io::Result<()> {
    std::process::Command::new("open").arg(url).spawn().map(|_| ())
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn spawn_opener(url: &str) -> std::io::Result<()> {
    std::process::Command::new("xdg-open").arg(url).spawn().map(|_| ())
}
