//! Streamed external process output.
//!
//! A spawned child's stdout and stderr are each read on a background thread and pushed as raw
//! byte chunks into one unbounded channel. The UI thread calls [`ProcessStream::drain`] once per
//! tick; it never blocks. Decoded text is handed back for insertion through the regular buffer
//! insert path.
//!
//! Ordering: chunks are yielded in the order the reader threads enqueued them. Within one pipe
//! that is the order the child wrote them; stdout and stderr may interleave.
//!
//! Cancellation: [`ProcessStream::terminate`] (also run on drop) kills the child and drops the
//! receiver. Queued chunks are discarded and the reader threads end at the next read or send.

use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::thread;

use anyhow::{Context, Result, bail};
use crossbeam_channel::{Receiver, Sender, TryRecvError, unbounded};

const READ_CHUNK: usize = 4096;

pub struct ProcessStream {
    child: Child,
    pid: u32,
    rx: Option<Receiver<Vec<u8>>>,
    /// Bytes of a UTF-8 sequence or a CR split across chunks.
    carry: Vec<u8>,
    readers_done: bool,
    exit_reported: bool,
}

impl ProcessStream {
    /// Spawn `args[0]` with the remaining args. Stdin is closed.
    pub fn spawn(args: &[String]) -> Result<Self> {
        let Some((program, rest)) = args.split_first() else {
            bail!("no command given");
        };
        let mut child = Command::new(program)
            .args(rest)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("spawning '{}'", args.join(" ")))?;
        let pid = child.id();
        let (tx, rx) = unbounded();
        if let Some(stdout) = child.stdout.take() {
            spawn_reader(stdout, tx.clone(), pid, "stdout");
        }
        if let Some(stderr) = child.stderr.take() {
            spawn_reader(stderr, tx, pid, "stderr");
        }
        tracing::info!(target: "stream", pid, command = %args.join(" "), "process_spawned");
        Ok(Self {
            child,
            pid,
            rx: Some(rx),
            carry: Vec::new(),
            readers_done: false,
            exit_reported: false,
        })
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// Identity used for per-document state of stream panes.
    pub fn document_id(&self) -> String {
        format!("terminal_process_{}", self.pid)
    }

    /// Pull every queued chunk without blocking and decode it. CRLF becomes LF and invalid UTF-8
    /// is replaced. A sequence or CR cut at a chunk boundary is held until the next bytes arrive,
    /// or flushed once both pipes have closed.
    pub fn drain(&mut self) -> String {
        let Some(rx) = &self.rx else {
            return String::new();
        };
        loop {
            match rx.try_recv() {
                Ok(chunk) => self.carry.extend_from_slice(&chunk),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.readers_done = true;
                    break;
                }
            }
        }
        decode_chunk(&mut self.carry, self.readers_done)
    }

    /// Exit code, reported once: after the child exited and both pipes were fully drained.
    /// Killed-by-signal exits report -1.
    pub fn poll_exit(&mut self) -> Option<i32> {
        if self.exit_reported || !self.readers_done {
            return None;
        }
        match self.child.try_wait() {
            Ok(Some(status)) => {
                self.exit_reported = true;
                let code = status.code().unwrap_or(-1);
                tracing::info!(target: "stream", pid = self.pid, code, "process_exited");
                Some(code)
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(target: "stream", pid = self.pid, error = %e, "process_wait_failed");
                None
            }
        }
    }

    pub fn is_running(&mut self) -> bool {
        matches!(self.child.try_wait(), Ok(None))
    }

    /// Kill the child and discard queued output.
    pub fn terminate(&mut self) {
        if self.rx.take().is_none() {
            return;
        }
        if self.is_running() {
            tracing::info!(target: "stream", pid = self.pid, "process_terminating");
            if let Err(e) = self.child.kill() {
                tracing::warn!(target: "stream", pid = self.pid, error = %e, "process_kill_failed");
            }
        }
        // Reap so the child does not linger as a zombie.
        let _ = self.child.wait();
        self.carry.clear();
    }
}

impl Drop for ProcessStream {
    fn drop(&mut self) {
        self.terminate();
    }
}

fn spawn_reader<R: Read + Send + 'static>(mut pipe: R, tx: Sender<Vec<u8>>, pid: u32, name: &'static str) {
    thread::spawn(move || {
        let mut buf = [0u8; READ_CHUNK];
        loop {
            match pipe.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => {
                    if tx.send(buf[..n].to_vec()).is_err() {
                        // Receiver dropped: pane closed.
                        break;
                    }
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    tracing::warn!(target: "stream", pid, pipe = name, error = %e, "pipe_read_failed");
                    break;
                }
            }
        }
        tracing::debug!(target: "stream", pid, pipe = name, "reader_finished");
    });
}

/// Decode pending bytes into text with LF line breaks. Unless `finished`, a trailing CR or an
/// incomplete UTF-8 sequence stays in `carry`; once finished, leftovers become U+FFFD.
fn decode_chunk(carry: &mut Vec<u8>, finished: bool) -> String {
    let mut text = decode_utf8(carry);
    if finished {
        if !carry.is_empty() {
            text.push(char::REPLACEMENT_CHARACTER);
            carry.clear();
        }
    } else if text.ends_with('\r') && carry.is_empty() {
        text.pop();
        carry.push(b'\r');
    }
    if text.contains('\r') {
        text.replace("\r\n", "\n")
    } else {
        text
    }
}

/// Decode as much of `bytes` as possible, leaving an incomplete trailing sequence in place.
fn decode_utf8(bytes: &mut Vec<u8>) -> String {
    let mut out = String::new();
    loop {
        match std::str::from_utf8(bytes) {
            Ok(s) => {
                out.push_str(s);
                bytes.clear();
                return out;
            }
            Err(e) => {
                let valid = e.valid_up_to();
                out.push_str(&String::from_utf8_lossy(&bytes[..valid]));
                match e.error_len() {
                    Some(bad) => {
                        out.push(char::REPLACEMENT_CHARACTER);
                        bytes.drain(..valid + bad);
                    }
                    None => {
                        bytes.drain(..valid);
                        return out;
                    }
                }
            }
        }
    }
}
