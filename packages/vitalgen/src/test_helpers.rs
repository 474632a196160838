use std::io;
use std::sync::{Arc, Mutex, TryLockError};
use tracing_subscriber::fmt::MakeWriter;

/// Runs a function with all VG_ environment variables unset
pub(crate) fn with_no_vg_vars<F: FnOnce() -> R, R>(f: F) -> R {
    let vg_vars = std::env::vars()
        .map(|(k, _v)| k)
        .filter(|k| k.starts_with("VG_"))
        .collect::<Vec<_>>();

    temp_env::with_vars_unset(&vg_vars, f)
}

// Shares one buffer between every writer the subscriber makes
pub(crate) struct MockWriter(Arc<Mutex<Vec<u8>>>);

impl io::Write for MockWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.0.try_lock() {
            Ok(mut captured) => {
                captured.extend_from_slice(buf);
                Ok(buf.len())
            }
            Err(TryLockError::WouldBlock) => Err(io::ErrorKind::WouldBlock.into()),
            Err(TryLockError::Poisoned(_)) => Err(io::ErrorKind::Other.into()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[derive(Clone, Default)]
pub(crate) struct MockMakeWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl MockMakeWriter {
    /// Drains everything written so far
    pub(crate) fn get_string(&self) -> String {
        let captured = std::mem::take(&mut *self.buf.lock().unwrap());
        String::from_utf8(captured).unwrap()
    }
}

impl<'a> MakeWriter<'a> for MockMakeWriter {
    type Writer = MockWriter;

    fn make_writer(&'a self) -> Self::Writer {
        MockWriter(Arc::clone(&self.buf))
    }
}
