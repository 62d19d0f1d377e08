//! Collaborator service traits and the desktop implementation.

use std::cell::Cell;
use std::process::{Command, Stdio};

use folio_types::error::{FolioError, Result};

// ---------------------------------------------------------------------------
// Page navigation
// ---------------------------------------------------------------------------

/// Abstraction over page-anchor navigation.
///
/// In a browser host this scrolls a section into view; the desktop
/// host has no page, so it just records where the visitor was sent.
pub trait PageNavigator {
    /// Scroll the section with the given anchor id into view.
    fn scroll_to_section(&self, section_id: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Downloads
// ---------------------------------------------------------------------------

/// Abstraction over triggering a file download for a static asset.
pub trait DownloadService {
    /// Start a download of `asset`, suggesting `save_as` as the filename.
    fn download(&self, asset: &str, save_as: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// External links
// ---------------------------------------------------------------------------

/// Abstraction over opening an external URL.
pub trait LinkOpener {
    /// Open `url` in the platform's default handler.
    fn open_url(&self, url: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Mail
// ---------------------------------------------------------------------------

/// Abstraction over composing an e-mail to a fixed address.
pub trait MailClient {
    /// Open the platform mail client addressed to `address`.
    fn compose(&self, address: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Clock
// ---------------------------------------------------------------------------

/// A broken-down wall-clock timestamp.
#[derive(Debug, Clone, Copy)]
pub struct WallTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl std::fmt::Display for WallTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second,
        )
    }
}

/// Abstraction over wall-clock time.
pub trait TimeService {
    /// Current wall-clock time.
    fn now(&self) -> Result<WallTime>;

    /// Milliseconds since the Unix epoch. Used for line timestamps.
    fn epoch_millis(&self) -> u64;
}

/// Wall-clock implementation backed by `std::time`.
///
/// UTC only; the widget shows a clock, it does not keep appointments.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeService for SystemClock {
    fn now(&self) -> Result<WallTime> {
        let secs = self.epoch_millis() / 1000;
        let time_of_day = secs % 86_400;
        let (year, month, day) = ymd_from_days(secs / 86_400);
        Ok(WallTime {
            year,
            month,
            day,
            hour: (time_of_day / 3600) as u8,
            minute: ((time_of_day % 3600) / 60) as u8,
            second: (time_of_day % 60) as u8,
        })
    }

    fn epoch_millis(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Convert days since the Unix epoch to (year, month, day).
fn ymd_from_days(mut days: u64) -> (u16, u8, u8) {
    let mut year: u16 = 1970;
    while days >= year_len(year) {
        days -= year_len(year);
        year += 1;
    }
    let feb: u64 = if is_leap(year) { 29 } else { 28 };
    let month_lengths = [31, feb, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    for (i, &len) in month_lengths.iter().enumerate() {
        if days < len {
            return (year, (i + 1) as u8, (days + 1) as u8);
        }
        days -= len;
    }
    (year, 12, 31)
}

fn year_len(y: u16) -> u64 {
    if is_leap(y) { 366 } else { 365 }
}

fn is_leap(y: u16) -> bool {
    (y.is_multiple_of(4) && !y.is_multiple_of(100)) || y.is_multiple_of(400)
}

// ---------------------------------------------------------------------------
// Randomness
// ---------------------------------------------------------------------------

/// Cosmetic randomness source.
///
/// Feeds skill percentages, matrix rain, and fortune selection. Not
/// required to be unpredictable; tests inject a fixed seed.
pub trait RandomSource {
    /// Next pseudo-random 32-bit value.
    fn next_u32(&self) -> u32;

    /// Uniform-ish value in `[lo, hi)`. `lo == hi` returns `lo`.
    fn in_range(&self, lo: u32, hi: u32) -> u32 {
        if hi <= lo {
            return lo;
        }
        lo + self.next_u32() % (hi - lo)
    }

    /// Index into a collection of `len` elements. `len == 0` returns 0.
    fn pick_index(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        (self.next_u32() as usize) % len
    }
}

/// Linear-congruential random source.
///
/// Interior mutability keeps the trait object usable behind `&dyn`.
pub struct SeededRandom {
    state: Cell<u64>,
}

impl SeededRandom {
    /// Create a source with a fixed seed (deterministic sequences).
    pub fn new(seed: u64) -> Self {
        Self {
            state: Cell::new(seed),
        }
    }

    /// Create a source seeded from the current time.
    pub fn from_entropy() -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64;
        Self::new(seed)
    }
}

impl RandomSource for SeededRandom {
    fn next_u32(&self) -> u32 {
        let next = self
            .state
            .get()
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1);
        self.state.set(next);
        (next >> 33) as u32
    }
}

// ---------------------------------------------------------------------------
// Desktop host
// ---------------------------------------------------------------------------

/// Desktop implementation of every side-effect collaborator.
///
/// Links and mail go through the OS opener (`xdg-open` / `open`); page
/// navigation has no page to scroll, so it only logs the target section.
pub struct DesktopHost;

impl DesktopHost {
    pub fn new() -> Self {
        Self
    }

    fn spawn_opener(&self, target: &str) -> Result<()> {
        let opener = if cfg!(target_os = "macos") {
            "open"
        } else {
            "xdg-open"
        };
        Command::new(opener)
            .arg(target)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| FolioError::Platform(format!("{opener} {target}: {e}")))?;
        Ok(())
    }
}

impl Default for DesktopHost {
    fn default() -> Self {
        Self::new()
    }
}

impl PageNavigator for DesktopHost {
    fn scroll_to_section(&self, section_id: &str) -> Result<()> {
        // No page on the desktop; record the navigation instead.
        log::info!("navigate: scrolling to section '{section_id}'");
        Ok(())
    }
}

impl DownloadService for DesktopHost {
    fn download(&self, asset: &str, save_as: &str) -> Result<()> {
        log::info!("download: {asset} (as {save_as})");
        self.spawn_opener(asset)
    }
}

impl LinkOpener for DesktopHost {
    fn open_url(&self, url: &str) -> Result<()> {
        log::info!("open: {url}");
        self.spawn_opener(url)
    }
}

impl MailClient for DesktopHost {
    fn compose(&self, address: &str) -> Result<()> {
        log::info!("mail: {address}");
        self.spawn_opener(&format!("mailto:{address}"))
    }
}

// ---------------------------------------------------------------------------
// In-module tests
// ---------------------------------------------------------------------------
