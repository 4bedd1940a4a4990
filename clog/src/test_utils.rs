use std::{
    io::{self, Write},
    path::PathBuf,
    sync::{
        Arc, Mutex, MutexGuard, PoisonError,
        atomic::{AtomicUsize, Ordering},
    },
};

/// In-memory writer whose contents can be read back while a logger owns a clone.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// File double counting how many times it has been closed.
pub struct CountingWriter {
    closes: Arc<AtomicUsize>,
}

impl CountingWriter {
    pub fn new(closes: Arc<AtomicUsize>) -> Self {
        Self { closes }
    }
}

impl Write for CountingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for CountingWriter {
    fn drop(&mut self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}

pub fn temp_log_file(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("clog_test_{name}.log"));
    std::fs::remove_file(&path).ok();
    path
}

static GLOBAL_TESTS: Mutex<()> = Mutex::new(());

/// Serializes tests touching the process-wide logger.
pub fn serial() -> MutexGuard<'static, ()> {
    GLOBAL_TESTS.lock().unwrap_or_else(PoisonError::into_inner)
}
