//! Raw-mode stdin and escape-sequence decoding.
//!
//! The session consumes platform-agnostic [`InputEvent`]s; this module
//! owns the termios dance and turns raw bytes (including CSI arrow
//! sequences and multi-byte UTF-8) into them. The saved terminal state
//! is restored on drop, panic included.

use std::io;

use folio_types::InputEvent;

/// Stdin in raw mode, restored on drop.
#[cfg(unix)]
pub struct RawTerminal {
    original: Option<libc::termios>,
    buf: Vec<u8>,
}

#[cfg(unix)]
impl RawTerminal {
    pub fn new() -> Self {
        Self {
            original: None,
            buf: Vec::new(),
        }
    }

    /// Switch stdin to raw mode, saving the current settings.
    pub fn enable(&mut self) -> io::Result<()> {
        let mut original = unsafe { std::mem::zeroed::<libc::termios>() };
        if unsafe { libc::tcgetattr(libc::STDIN_FILENO, &mut original) } != 0 {
            return Err(io::Error::last_os_error());
        }
        let mut raw = original;
        unsafe { libc::cfmakeraw(&mut raw) };
        if unsafe { libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &raw) } != 0 {
            return Err(io::Error::last_os_error());
        }
        self.original = Some(original);
        Ok(())
    }

    /// Restore the saved terminal settings.
    pub fn restore(&mut self) {
        if let Some(original) = self.original.take() {
            unsafe {
                libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &original);
            }
        }
    }

    /// Wait up to `timeout_ms` for input and decode complete events.
    pub fn poll_events(&mut self, timeout_ms: i32) -> io::Result<Vec<InputEvent>> {
        if !poll_readable(libc::STDIN_FILENO, timeout_ms) {
            return Ok(Vec::new());
        }
        let mut chunk = [0u8; 256];
        let read_len = unsafe {
            libc::read(
                libc::STDIN_FILENO,
                chunk.as_mut_ptr() as *mut _,
                chunk.len(),
            )
        };
        if read_len <= 0 {
            return Ok(Vec::new());
        }
        self.buf.extend_from_slice(&chunk[..read_len as usize]);
        Ok(drain_events(&mut self.buf))
    }
}

#[cfg(unix)]
impl Default for RawTerminal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(unix)]
impl Drop for RawTerminal {
    fn drop(&mut self) {
        self.restore();
    }
}

#[cfg(unix)]
fn poll_readable(fd: libc::c_int, timeout_ms: i32) -> bool {
    let mut fds = libc::pollfd {
        fd,
        events: libc::POLLIN,
        revents: 0,
    };
    let result = unsafe { libc::poll(&mut fds, 1, timeout_ms) };
    result > 0 && (fds.revents & libc::POLLIN) != 0
}

/// Decode complete events from the front of `buf`.
///
/// An incomplete CSI sequence or UTF-8 character at the tail is left in
/// the buffer for the next read. A lone ESC byte is taken as the Escape
/// key; terminals deliver full CSI sequences in one read.
pub fn drain_events(buf: &mut Vec<u8>) -> Vec<InputEvent> {
    let mut events = Vec::new();
    let mut i = 0;

    while i < buf.len() {
        let b = buf[i];
        match b {
            0x1b => {
                if i + 1 >= buf.len() {
                    events.push(InputEvent::DismissSuggestions);
                    i += 1;
                } else if buf[i + 1] == b'[' {
                    // CSI: parameters then a final byte.
                    let mut j = i + 2;
                    while j < buf.len() && (0x30..=0x3f).contains(&buf[j]) {
                        j += 1;
                    }
                    if j >= buf.len() {
                        break;
                    }
                    match buf[j] {
                        b'A' if j == i + 2 => events.push(InputEvent::HistoryPrev),
                        b'B' if j == i + 2 => events.push(InputEvent::HistoryNext),
                        _ => {},
                    }
                    i = j + 1;
                } else {
                    // Alt-chord; swallow both bytes.
                    i += 2;
                }
            },
            b'\r' | b'\n' => {
                events.push(InputEvent::Submit);
                i += 1;
            },
            0x7f | 0x08 => {
                events.push(InputEvent::Backspace);
                i += 1;
            },
            b'\t' => {
                events.push(InputEvent::Complete);
                i += 1;
            },
            0x0c => {
                events.push(InputEvent::ClearScreen);
                i += 1;
            },
            0x03 | 0x04 => {
                events.push(InputEvent::Quit);
                i += 1;
            },
            0x20..=0x7e => {
                events.push(InputEvent::TextInput(b as char));
                i += 1;
            },
            0x80..=0xff => {
                let width = utf8_width(b);
                if width == 0 {
                    i += 1;
                } else if i + width > buf.len() {
                    break;
                } else {
                    if let Ok(s) = std::str::from_utf8(&buf[i..i + width])
                        && let Some(c) = s.chars().next()
                    {
                        events.push(InputEvent::TextInput(c));
                    }
                    i += width;
                }
            },
            _ => i += 1,
        }
    }

    buf.drain(..i);
    events
}

/// Byte length of a UTF-8 sequence from its leading byte (0 = invalid).
fn utf8_width(b: u8) -> usize {
    match b {
        0xc0..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf7 => 4,
        _ => 0,
    }
}
