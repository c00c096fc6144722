//! Headless screenshot capture for preview documents.
//!
//! Drives Playwright through a short inline Node.js script, the same way the
//! preview harness itself is framework-agnostic: the capability is probed
//! once (node on PATH, playwright installed) and every capture runs as one
//! bounded subprocess with guaranteed teardown on timeout.

use crate::{PaletteError, Result, Viewport};
use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tokio::time::timeout;

/// Default timeout for page navigation.
pub const DEFAULT_NAVIGATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Default timeout for waiting for the page to settle.
pub const DEFAULT_NETWORK_IDLE_TIMEOUT: Duration = Duration::from_secs(10);

/// Default timeout for the entire capture process.
pub const DEFAULT_PROCESS_TIMEOUT: Duration = Duration::from_secs(45);

/// Screenshots are clipped to this content height unless configured otherwise.
pub const DEFAULT_MAX_CONTENT_HEIGHT: u32 = 2000;

/// Timeout for the node/playwright availability probes.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

const PLAYWRIGHT_CHECK_SCRIPT: &str = "require('playwright'); process.stdout.write('ok');";

/// Capture script: mount the preview document, wait for it to settle, clip
/// the shot to the content height capped at a maximum.
const CAPTURE_SCRIPT: &str = r#"
const [, url, width, height, navTimeout, idleTimeout, screenshotPath, maxHeight] = process.argv;

async function run() {
  let browser;
  try {
    const { chromium } = require('playwright');
    browser = await chromium.launch({ headless: true });
    const context = await browser.newContext({
      viewport: {
        width: parseInt(width, 10),
        height: parseInt(height, 10)
      }
    });
    const page = await context.newPage();
    await page.goto(url, { waitUntil: 'networkidle', timeout: parseInt(navTimeout, 10) });
    await page.waitForLoadState('networkidle', { timeout: parseInt(idleTimeout, 10) });

    const contentHeight = await page.evaluate(() => document.body.scrollHeight);
    const clipHeight = Math.max(1, Math.min(contentHeight, parseInt(maxHeight, 10)));
    await page.screenshot({
      path: screenshotPath,
      clip: { x: 0, y: 0, width: parseInt(width, 10), height: clipHeight }
    });

    console.log(JSON.stringify({ status: 'ok', contentHeight, clipHeight }));
  } catch (err) {
    const message = err && err.message ? err.message : String(err);
    console.error(JSON.stringify({ status: 'error', message }));
    process.exitCode = 1;
  } finally {
    if (browser) {
      await browser.close();
    }
  }
}

run();
"#;

/// Configuration for the capture backend.
#[derive(Debug, Clone)]
pub struct ScreenshotOptions {
    /// The Node.js command to use (default: "node").
    pub node_command: String,
    /// Viewport dimensions for the browser.
    pub viewport: Viewport,
    /// Timeout for page navigation.
    pub navigation_timeout: Duration,
    /// Timeout for waiting for the page to settle.
    pub network_idle_timeout: Duration,
    /// Timeout for the entire capture process.
    pub process_timeout: Duration,
    /// Content height cap for the captured image.
    pub max_content_height: u32,
}

impl Default for ScreenshotOptions {
    fn default() -> Self {
        Self {
            node_command: "node".to_string(),
            viewport: Viewport::default(),
            navigation_timeout: DEFAULT_NAVIGATION_TIMEOUT,
            network_idle_timeout: DEFAULT_NETWORK_IDLE_TIMEOUT,
            process_timeout: DEFAULT_PROCESS_TIMEOUT,
            max_content_height: DEFAULT_MAX_CONTENT_HEIGHT,
        }
    }
}

/// Result of one successful capture.
#[derive(Debug, Clone)]
pub struct CaptureResult {
    pub screenshot_path: PathBuf,
    pub viewport: Viewport,
    pub elapsed: Duration,
}

#[derive(Debug, serde::Deserialize)]
struct ScriptResult {
    status: String,
    message: Option<String>,
}

/// Optional headless-browser capability. Probe with [`available`] before
/// relying on it; a missing capability is "no image", never a hard failure
/// at the call site.
///
/// [`available`]: ScreenshotBackend::available
#[derive(Debug, Clone)]
pub struct ScreenshotBackend {
    options: ScreenshotOptions,
}

impl ScreenshotBackend {
    pub fn new(options: ScreenshotOptions) -> Self {
        Self { options }
    }

    /// True when both node and the playwright package respond to probes.
    pub async fn available(&self) -> bool {
        self.ensure_available().await.is_ok()
    }

    pub async fn ensure_available(&self) -> Result<()> {
        ensure_node_available(&self.options.node_command).await?;
        ensure_playwright_available(&self.options.node_command).await
    }

    /// Write the document to a temp file and capture it via `file://`.
    /// The temp file is removed on every exit path.
    pub async fn capture_html(&self, html: &str, screenshot_path: &Path) -> Result<CaptureResult> {
        let html_path = std::env::temp_dir().join(format!(
            "palette-preview-{}-{}.html",
            std::process::id(),
            unique_suffix()
        ));
        std::fs::write(&html_path, html)?;

        let url = format!("file://{}", html_path.display());
        let result = self.capture_url(&url, screenshot_path).await;
        let _ = std::fs::remove_file(&html_path);
        result
    }

    async fn capture_url(&self, url: &str, screenshot_path: &Path) -> Result<CaptureResult> {
        self.ensure_available().await?;

        if let Some(parent) = screenshot_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut cmd = Command::new(&self.options.node_command);
        cmd.arg("-e")
            .arg(CAPTURE_SCRIPT)
            .arg(url)
            .arg(self.options.viewport.width.to_string())
            .arg(self.options.viewport.height.to_string())
            .arg(self.options.navigation_timeout.as_millis().to_string())
            .arg(self.options.network_idle_timeout.as_millis().to_string())
            .arg(screenshot_path.to_string_lossy().to_string())
            .arg(self.options.max_content_height.to_string())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let start = Instant::now();
        let mut child = cmd
            .spawn()
            .map_err(|err| map_spawn_error(err, &self.options.node_command))?;

        let stdout_pipe = child.stdout.take();
        let stderr_pipe = child.stderr.take();

        let stdout_task = tokio::spawn(async move {
            let mut buf = Vec::new();
            if let Some(mut out) = stdout_pipe {
                let _ = out.read_to_end(&mut buf).await;
            }
            buf
        });

        let stderr_task = tokio::spawn(async move {
            let mut buf = Vec::new();
            if let Some(mut err) = stderr_pipe {
                let _ = err.read_to_end(&mut buf).await;
            }
            buf
        });

        let status = match timeout(self.options.process_timeout, child.wait()).await {
            Ok(Ok(status)) => status,
            Ok(Err(err)) => return Err(PaletteError::Io(err)),
            Err(_) => {
                let _ = child.kill().await;
                let _ = child.wait().await;
                return Err(PaletteError::preview(format!(
                    "screenshot capture timed out after {:?}",
                    self.options.process_timeout
                )));
            }
        };

        let stdout = stdout_task.await.unwrap_or_else(|_| Vec::new());
        let stderr = stderr_task.await.unwrap_or_else(|_| Vec::new());

        if !status.success() {
            let stderr = String::from_utf8_lossy(&stderr);
            return Err(map_capture_error(status.to_string(), &stderr));
        }

        let stdout = String::from_utf8_lossy(&stdout);
        match serde_json::from_str::<ScriptResult>(&stdout) {
            Ok(payload) if payload.status == "ok" => {}
            Ok(payload) => {
                let detail = payload
                    .message
                    .as_deref()
                    .unwrap_or("no additional details");
                return Err(PaletteError::preview(format!(
                    "capture script returned status {}: {detail}",
                    payload.status
                )));
            }
            Err(_) => {
                return Err(PaletteError::preview(format!(
                    "unexpected capture script output: {}",
                    stdout.trim()
                )));
            }
        }

        // A truncated or empty screenshot file is a failure, not a preview.
        image::open(screenshot_path).map_err(|err| {
            PaletteError::preview(format!("captured screenshot is not a valid image: {err}"))
        })?;

        Ok(CaptureResult {
            screenshot_path: screenshot_path.to_path_buf(),
            viewport: self.options.viewport,
            elapsed: start.elapsed(),
        })
    }
}

fn unique_suffix() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0)
}

fn map_spawn_error(err: io::Error, command: &str) -> PaletteError {
    if err.kind() == io::ErrorKind::NotFound {
        PaletteError::preview(format!(
            "unable to spawn capture helper; '{command}' was not found on PATH"
        ))
    } else {
        PaletteError::Io(err)
    }
}

fn map_capture_error(status_text: impl Into<String>, stderr: &str) -> PaletteError {
    #[derive(serde::Deserialize)]
    struct ScriptError {
        #[allow(dead_code)]
        status: String,
        message: String,
    }

    let message = serde_json::from_str::<ScriptError>(stderr)
        .map(|e| e.message)
        .unwrap_or_else(|_| stderr.trim().to_string());

    if message
        .to_ascii_lowercase()
        .contains("cannot find module 'playwright'")
    {
        return PaletteError::preview(
            "playwright npm package is missing; install with `npm install playwright`",
        );
    }
    if message.to_ascii_lowercase().contains("timeout") {
        return PaletteError::preview(format!(
            "capture timed out: {message}. Hint: increase the preview timeouts in the config file"
        ));
    }
    PaletteError::preview(format!(
        "capture process exited with status {}: {message}",
        status_text.into()
    ))
}

async fn ensure_node_available(node_command: &str) -> Result<()> {
    let mut cmd = Command::new(node_command);
    cmd.arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    let status = timeout(PROBE_TIMEOUT, cmd.status())
        .await
        .map_err(|_| {
            PaletteError::preview(format!(
                "timed out checking node availability after {PROBE_TIMEOUT:?}"
            ))
        })?
        .map_err(|err| map_spawn_error(err, node_command))?;

    if !status.success() {
        return Err(PaletteError::preview(format!(
            "node command {node_command:?} is not available (exit {status})"
        )));
    }
    Ok(())
}

async fn ensure_playwright_available(node_command: &str) -> Result<()> {
    let mut cmd = Command::new(node_command);
    cmd.arg("-e")
        .arg(PLAYWRIGHT_CHECK_SCRIPT)
        .stdout(Stdio::null())
        .stderr(Stdio::piped());

    let output = timeout(PROBE_TIMEOUT, cmd.output())
        .await
        .map_err(|_| {
            PaletteError::preview(format!(
                "timed out checking playwright availability after {PROBE_TIMEOUT:?}"
            ))
        })?
        .map_err(|err| map_spawn_error(err, node_command))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(map_capture_error(format!("{:?}", output.status), &stderr));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_default_to_bounded_timeouts() {
        let opts = ScreenshotOptions::default();
        assert_eq!(opts.node_command, "node");
        assert_eq!(opts.navigation_timeout, DEFAULT_NAVIGATION_TIMEOUT);
        assert_eq!(opts.process_timeout, DEFAULT_PROCESS_TIMEOUT);
        assert_eq!(opts.max_content_height, DEFAULT_MAX_CONTENT_HEIGHT);
    }

    #[test]
    fn map_capture_error_detects_missing_playwright() {
        let err = map_capture_error(
            "1",
            r#"{"status":"error","message":"Cannot find module 'playwright'"}"#,
        );
        assert!(format!("{err}").contains("npm install playwright"));
    }

    #[test]
    fn map_capture_error_includes_timeout_hint() {
        let err = map_capture_error(
            "1",
            r#"{"status":"error","message":"Navigation timeout of 30000ms exceeded"}"#,
        );
        let msg = format!("{err}");
        assert!(msg.to_ascii_lowercase().contains("timeout"));
        assert!(msg.contains("config"));
    }

    #[test]
    fn map_capture_error_passes_through_plain_stderr() {
        let err = map_capture_error("exit status: 1", "something else broke");
        assert!(format!("{err}").contains("something else broke"));
    }

    #[tokio::test]
    async fn probes_fail_for_missing_binary() {
        let backend = ScreenshotBackend::new(ScreenshotOptions {
            node_command: "definitely-not-a-binary".to_string(),
            ..ScreenshotOptions::default()
        });
        assert!(!backend.available().await);
    }
}
